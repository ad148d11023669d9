use super::{PriceRecord, Ticker};
use crate::domain::errors::FetchError;

/// Source of OHLCV records for a ticker.
///
/// The browser implementation hits the stock API; tests substitute an in-memory fake.
#[allow(async_fn_in_trait)]
pub trait PriceSeriesSource {
    async fn fetch_series(&self, ticker: &Ticker) -> Result<Vec<PriceRecord>, FetchError>;
}
