use super::value_objects::Metric;
use crate::time_utils::time_of_day_label;
use serde::{Deserialize, Serialize};

/// Domain entity - one OHLCV record as served by `/stock/{ticker}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(rename = "Datetime")]
    pub datetime: String,
    #[serde(rename = "Open")]
    pub open: f64,
    #[serde(rename = "High")]
    pub high: f64,
    #[serde(rename = "Low")]
    pub low: f64,
    #[serde(rename = "Close")]
    pub close: f64,
    #[serde(rename = "Volume")]
    pub volume: f64,
}

impl PriceRecord {
    pub fn new(datetime: &str, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self { datetime: datetime.to_string(), open, high, low, close, volume }
    }

    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Open => self.open,
            Metric::High => self.high,
            Metric::Low => self.low,
            Metric::Close => self.close,
        }
    }

    /// Horizontal axis label
    pub fn axis_label(&self) -> &str {
        time_of_day_label(&self.datetime)
    }
}

/// Domain entity - the series currently on screen, replaced wholesale per fetch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceSeries {
    records: Vec<PriceRecord>,
}

impl PriceSeries {
    pub fn new(records: Vec<PriceRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.records.iter().map(|r| r.axis_label().to_string()).collect()
    }

    pub fn values(&self, metric: Metric) -> Vec<f64> {
        self.records.iter().map(|r| r.metric(metric)).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.volume).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_api_body() {
        let body = r#"[{"Datetime":"2024-01-01 09:30:00","Open":100,"High":101,"Low":99,"Close":100.5,"Volume":1000}]"#;
        let series: PriceSeries = serde_json::from_str(body).unwrap();
        assert_eq!(series.len(), 1);
        let record = &series.records()[0];
        assert_eq!(record.close, 100.5);
        assert_eq!(record.metric(Metric::Low), 99.0);
        assert_eq!(series.labels(), vec!["09:30:00".to_string()]);
    }

    #[test]
    fn rejects_missing_fields() {
        let body = r#"[{"Datetime":"2024-01-01 09:30:00","Open":100}]"#;
        assert!(serde_json::from_str::<PriceSeries>(body).is_err());
    }
}
