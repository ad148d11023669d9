use crate::domain::logging::LogComponent;
use crate::domain::market_data::Ticker;
use crate::log_debug;

/// Quiet period after the last keystroke before the input is committed
pub const DEFAULT_SETTLE_MS: u32 = 1000;

/// Handle for one scheduled commit. Only the ticket from the latest keystroke can commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    generation: u64,
}

/// Result of a settle timer firing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebounceOutcome {
    /// The committed ticker changed to this value
    Committed(Ticker),
    /// Input settled on the value that was already committed
    Unchanged,
    /// A later keystroke re-armed the timer; this firing is void
    Superseded,
}

/// Raw keystroke value plus the committed value derived from it.
///
/// Timing lives outside: every [`Debouncer::set_raw`] hands out a ticket, the caller
/// schedules [`Debouncer::settle`] for that ticket after [`Debouncer::delay_ms`] and
/// drops any previously scheduled call.
#[derive(Debug, Clone, PartialEq)]
pub struct Debouncer {
    raw: Ticker,
    committed: Ticker,
    generation: u64,
    pending: bool,
    delay_ms: u32,
}

impl Debouncer {
    pub fn new(initial: Ticker, delay_ms: u32) -> Self {
        Self { raw: initial.clone(), committed: initial, generation: 0, pending: false, delay_ms }
    }

    /// Store the uppercased input and re-arm the settle timer
    pub fn set_raw(&mut self, input: &str) -> DebounceTicket {
        self.raw = Ticker::normalize(input);
        self.generation += 1;
        self.pending = true;
        DebounceTicket { generation: self.generation }
    }

    pub fn settle(&mut self, ticket: DebounceTicket) -> DebounceOutcome {
        if ticket.generation != self.generation || !self.pending {
            return DebounceOutcome::Superseded;
        }
        self.pending = false;

        if self.raw == self.committed {
            return DebounceOutcome::Unchanged;
        }

        log_debug!(
            LogComponent::Domain("Debouncer"),
            "⏱️ Committed '{}' (was '{}')",
            self.raw,
            self.committed
        );
        self.committed = self.raw.clone();
        DebounceOutcome::Committed(self.committed.clone())
    }

    pub fn raw(&self) -> &Ticker {
        &self.raw
    }

    pub fn committed(&self) -> &Ticker {
        &self.committed
    }

    /// A keystroke is waiting for its quiet period
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Ticker::default(), DEFAULT_SETTLE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_commits() {
        let mut debouncer = Debouncer::default();
        let first = debouncer.set_raw("a");
        let second = debouncer.set_raw("aa");

        assert_eq!(debouncer.raw().value(), "AA");
        assert_eq!(debouncer.settle(first), DebounceOutcome::Superseded);
        assert_eq!(debouncer.committed().value(), "");
        assert_eq!(debouncer.settle(second), DebounceOutcome::Committed(Ticker::from("AA")));
    }

    #[test]
    fn a_ticket_fires_at_most_once() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.set_raw("msft");
        assert!(matches!(debouncer.settle(ticket), DebounceOutcome::Committed(_)));
        assert_eq!(debouncer.settle(ticket), DebounceOutcome::Superseded);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn settling_on_committed_value_is_unchanged() {
        let mut debouncer = Debouncer::new(Ticker::from("AAPL"), DEFAULT_SETTLE_MS);
        debouncer.set_raw("AAP");
        let ticket = debouncer.set_raw("aapl");
        assert_eq!(debouncer.settle(ticket), DebounceOutcome::Unchanged);
        assert_eq!(debouncer.committed().value(), "AAPL");
    }
}
