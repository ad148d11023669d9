use crate::domain::dashboard::FetchRequest;
use crate::domain::errors::FetchError;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{PriceRecord, PriceSeriesSource};
use crate::{log_error, log_info, log_warn};

/// Use Case: perform one dashboard fetch against a price source.
///
/// Failures are logged and returned as values so the caller can store them as
/// the dashboard's error state.
pub struct FetchSeriesUseCase<S: PriceSeriesSource> {
    source: S,
}

impl<S: PriceSeriesSource> FetchSeriesUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn execute(&self, request: &FetchRequest) -> Result<Vec<PriceRecord>, FetchError> {
        log_info!(
            LogComponent::Application("FetchSeries"),
            "🚀 #{} fetching {}",
            request.seq,
            request.ticker
        );

        let result = self.source.fetch_series(&request.ticker).await;
        match &result {
            Ok(records) => log_info!(
                LogComponent::Application("FetchSeries"),
                "📊 #{} {} returned {} records",
                request.seq,
                request.ticker,
                records.len()
            ),
            Err(FetchError::NotFound { status }) => log_warn!(
                LogComponent::Application("FetchSeries"),
                "🔍 #{} {} not found (HTTP {})",
                request.seq,
                request.ticker,
                status
            ),
            Err(err) => log_error!(
                LogComponent::Application("FetchSeries"),
                "❌ #{} {} failed: {}",
                request.seq,
                request.ticker,
                err
            ),
        }
        result
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
