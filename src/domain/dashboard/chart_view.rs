use crate::domain::errors::FetchError;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{PriceRecord, PriceSeries, Ticker};
use crate::{log_info, log_warn};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

/// How responses of overlapping requests are reconciled
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, StrumDisplay, EnumString, AsRefStr, Serialize,
    Deserialize,
)]
pub enum ResponsePolicy {
    /// Responses tagged with an outdated sequence number are dropped
    #[default]
    #[strum(serialize = "latest-request")]
    #[serde(rename = "latest-request")]
    LatestRequestWins,
    /// Every response is applied in arrival order, so a slow earlier
    /// request can overwrite a newer one
    #[strum(serialize = "last-resolved")]
    #[serde(rename = "last-resolved")]
    LastResolvedWins,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewPhase {
    Idle,
    Fetching { ticker: Ticker },
    Displaying,
    Error,
}

/// A request the caller must perform and report back with [`ChartViewState::apply_response`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub ticker: Ticker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOutcome {
    Applied,
    Discarded,
}

/// Data and error state behind the two charts
#[derive(Debug, Clone, PartialEq)]
pub struct ChartViewState {
    series: PriceSeries,
    error: Option<String>,
    phase: ViewPhase,
    last_seq: u64,
    policy: ResponsePolicy,
}

impl ChartViewState {
    pub fn new(policy: ResponsePolicy) -> Self {
        Self {
            series: PriceSeries::default(),
            error: None,
            phase: ViewPhase::Idle,
            last_seq: 0,
            policy,
        }
    }

    /// React to a new committed ticker. An empty ticker leaves everything untouched.
    pub fn on_ticker_change(&mut self, ticker: &Ticker) -> Option<FetchRequest> {
        if ticker.is_empty() {
            return None;
        }

        self.last_seq += 1;
        self.phase = ViewPhase::Fetching { ticker: ticker.clone() };
        log_info!(
            LogComponent::Domain("ChartView"),
            "📡 Request #{} for {}",
            self.last_seq,
            ticker
        );

        Some(FetchRequest { seq: self.last_seq, ticker: ticker.clone() })
    }

    pub fn apply_response(
        &mut self,
        seq: u64,
        result: Result<Vec<PriceRecord>, FetchError>,
    ) -> ResponseOutcome {
        let is_latest = seq == self.last_seq;
        if !is_latest && self.policy == ResponsePolicy::LatestRequestWins {
            log_warn!(
                LogComponent::Domain("ChartView"),
                "🗑️ Dropping stale response #{} (latest is #{})",
                seq,
                self.last_seq
            );
            return ResponseOutcome::Discarded;
        }

        let settled = match result {
            Ok(records) => {
                log_info!(
                    LogComponent::Domain("ChartView"),
                    "✅ Response #{}: {} records",
                    seq,
                    records.len()
                );
                self.series = PriceSeries::new(records);
                self.error = None;
                ViewPhase::Displaying
            }
            Err(err) => {
                log_warn!(LogComponent::Domain("ChartView"), "❌ Response #{}: {:?}", seq, err);
                self.error = Some(err.user_message());
                ViewPhase::Error
            }
        };

        // Under LastResolvedWins a stale response still decides what is shown.
        self.phase = settled;
        ResponseOutcome::Applied
    }

    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> &ViewPhase {
        &self.phase
    }
}

impl Default for ChartViewState {
    fn default() -> Self {
        Self::new(ResponsePolicy::default())
    }
}
