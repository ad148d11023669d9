use gloo_timers::callback::Timeout;

/// Single-slot delayed callback: scheduling drops the previous, not yet fired timeout.
#[derive(Default)]
pub struct DebounceTimer {
    pending: Option<Timeout>,
}

impl DebounceTimer {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn schedule(&mut self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        // Dropping a Timeout clears it.
        self.pending = Some(Timeout::new(delay_ms, callback));
    }
}
