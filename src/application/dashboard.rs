use super::config::DashboardConfig;
use crate::domain::chart::DashboardView;
use crate::domain::dashboard::{
    ChartViewState, DebounceOutcome, DebounceTicket, Debouncer, FetchRequest, ResponseOutcome,
    SelectedMetrics, ViewPhase,
};
use crate::domain::errors::FetchError;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{Metric, PriceRecord, PriceSeries, Ticker};
use crate::log_debug;

/// Top-level controller owning all dashboard state.
///
/// Event handlers call into it; the view is derived through [`Dashboard::view`].
/// Timers and requests are performed by the caller using the tickets and
/// [`FetchRequest`]s handed out here.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    debouncer: Debouncer,
    metrics: SelectedMetrics,
    chart: ChartViewState,
}

impl Dashboard {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            debouncer: Debouncer::new(config.initial_ticker.clone(), config.debounce_ms),
            metrics: SelectedMetrics::default(),
            chart: ChartViewState::new(config.response_policy),
        }
    }

    /// First ticker change, for the initially committed value
    pub fn mount(&mut self) -> Option<FetchRequest> {
        let ticker = self.debouncer.committed().clone();
        self.chart.on_ticker_change(&ticker)
    }

    /// Keystroke: returns the ticket to settle after [`Dashboard::settle_delay_ms`]
    pub fn input(&mut self, raw: &str) -> DebounceTicket {
        self.debouncer.set_raw(raw)
    }

    /// Settle timer fired. A changed committed ticker may produce a request.
    pub fn settle(&mut self, ticket: DebounceTicket) -> Option<FetchRequest> {
        match self.debouncer.settle(ticket) {
            DebounceOutcome::Committed(ticker) => self.chart.on_ticker_change(&ticker),
            DebounceOutcome::Unchanged | DebounceOutcome::Superseded => None,
        }
    }

    pub fn toggle_metric(&mut self, metric: Metric, included: bool) -> bool {
        let changed = self.metrics.toggle(metric, included);
        if !changed {
            log_debug!(
                LogComponent::Application("Dashboard"),
                "Toggle {}={} left selection unchanged",
                metric,
                included
            );
        }
        changed
    }

    pub fn receive(
        &mut self,
        seq: u64,
        result: Result<Vec<PriceRecord>, FetchError>,
    ) -> ResponseOutcome {
        self.chart.apply_response(seq, result)
    }

    pub fn view(&self) -> DashboardView {
        DashboardView::build(self.chart.series(), &self.metrics, self.chart.error())
    }

    pub fn raw_input(&self) -> &Ticker {
        self.debouncer.raw()
    }

    pub fn committed(&self) -> &Ticker {
        self.debouncer.committed()
    }

    pub fn settle_delay_ms(&self) -> u32 {
        self.debouncer.delay_ms()
    }

    pub fn is_selected(&self, metric: Metric) -> bool {
        self.metrics.contains(metric)
    }

    pub fn metrics(&self) -> &SelectedMetrics {
        &self.metrics
    }

    pub fn series(&self) -> &PriceSeries {
        self.chart.series()
    }

    pub fn error(&self) -> Option<&str> {
        self.chart.error()
    }

    pub fn phase(&self) -> &ViewPhase {
        self.chart.phase()
    }

    /// Status line under the heading
    pub fn status(&self) -> String {
        match self.chart.phase() {
            ViewPhase::Idle => "Enter a ticker".to_string(),
            ViewPhase::Fetching { ticker } => format!("Loading {}…", ticker),
            ViewPhase::Displaying => format!("{} records", self.chart.series().len()),
            ViewPhase::Error => String::new(),
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}
