use super::value_objects::AxisDomain;
use crate::domain::dashboard::SelectedMetrics;
use crate::domain::market_data::{Metric, PriceSeries, VOLUME_FILL};

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub metric: Metric,
    pub stroke: &'static str,
    pub values: Vec<f64>,
}

/// One line per selected metric over a shared time axis
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineChartModel {
    pub labels: Vec<String>,
    pub lines: Vec<LineSeries>,
    pub domain: Option<AxisDomain>,
}

impl LineChartModel {
    pub fn build(series: &PriceSeries, metrics: &SelectedMetrics) -> Self {
        let lines: Vec<LineSeries> = metrics
            .iter()
            .map(|metric| LineSeries { metric, stroke: metric.stroke(), values: series.values(metric) })
            .collect();
        let domain = AxisDomain::auto(lines.iter().flat_map(|l| l.values.iter().copied()));

        Self { labels: series.labels(), lines, domain }
    }

    pub fn point_count(&self) -> usize {
        self.labels.len()
    }
}

/// Volume bars over the same time axis
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarChartModel {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub fill: &'static str,
    pub domain: Option<AxisDomain>,
}

impl BarChartModel {
    pub fn build(series: &PriceSeries) -> Self {
        let values = series.volumes();
        let domain = AxisDomain::auto(values.iter().copied());
        Self { labels: series.labels(), values, fill: VOLUME_FILL, domain }
    }
}

/// What the chart area shows: the error text, or both charts
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Error(String),
    Charts { prices: LineChartModel, volume: BarChartModel },
}

impl DashboardView {
    pub fn build(series: &PriceSeries, metrics: &SelectedMetrics, error: Option<&str>) -> Self {
        match error {
            Some(message) => Self::Error(message.to_string()),
            None => Self::Charts {
                prices: LineChartModel::build(series, metrics),
                volume: BarChartModel::build(series),
            },
        }
    }
}
