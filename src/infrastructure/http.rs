use crate::domain::{
    errors::FetchError,
    logging::LogComponent,
    market_data::{PriceRecord, PriceSeriesSource, Ticker},
};
use crate::log_debug;
use gloo_net::http::Request;

/// HTTP client for the `/stock/{ticker}` backend
#[derive(Debug, Clone, PartialEq)]
pub struct StockApiClient {
    base_url: String,
}

impl StockApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn stock_url(&self, ticker: &Ticker) -> String {
        format!(
            "{}/stock/{}",
            self.base_url.trim_end_matches('/'),
            HttpUtils::encode_path_segment(ticker.value())
        )
    }
}

impl PriceSeriesSource for StockApiClient {
    async fn fetch_series(&self, ticker: &Ticker) -> Result<Vec<PriceRecord>, FetchError> {
        let url = self.stock_url(ticker);
        log_debug!(LogComponent::Infrastructure("StockApi"), "🌐 GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !HttpUtils::is_success_status(response.status()) {
            return Err(FetchError::NotFound { status: response.status() });
        }

        response
            .json::<Vec<PriceRecord>>()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }
}

pub struct HttpUtils;

impl HttpUtils {
    pub fn is_success_status(status: u16) -> bool {
        (200..300).contains(&status)
    }

    /// Percent-encode a value so it stays a single URL path segment
    pub fn encode_path_segment(input: &str) -> String {
        String::from(js_sys::encode_uri_component(input))
    }
}
