use crate::domain::market_data::Metric;
use std::collections::BTreeSet;

/// Metrics plotted on the price chart. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedMetrics {
    selected: BTreeSet<Metric>,
}

impl SelectedMetrics {
    /// Apply a checkbox change. Returns whether the selection changed.
    ///
    /// Unchecking the last selected metric is rejected.
    pub fn toggle(&mut self, metric: Metric, included: bool) -> bool {
        if included {
            return self.selected.insert(metric);
        }
        if self.selected.len() > 1 {
            return self.selected.remove(&metric);
        }
        false
    }

    pub fn contains(&self, metric: Metric) -> bool {
        self.selected.contains(&metric)
    }

    /// Selected metrics in display order
    pub fn iter(&self) -> impl Iterator<Item = Metric> + '_ {
        self.selected.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

impl Default for SelectedMetrics {
    fn default() -> Self {
        Self { selected: Metric::all().into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_all_four() {
        let metrics = SelectedMetrics::default();
        assert_eq!(metrics.iter().collect::<Vec<_>>(), Metric::all());
    }

    #[test]
    fn last_metric_cannot_be_removed() {
        let mut metrics = SelectedMetrics::default();
        assert!(metrics.toggle(Metric::Open, false));
        assert!(metrics.toggle(Metric::High, false));
        assert!(metrics.toggle(Metric::Low, false));
        assert!(!metrics.toggle(Metric::Close, false));
        assert_eq!(metrics.iter().collect::<Vec<_>>(), vec![Metric::Close]);
    }

    #[test]
    fn removing_unselected_metric_is_noop() {
        let mut metrics = SelectedMetrics::default();
        metrics.toggle(Metric::Low, false);
        assert!(!metrics.toggle(Metric::Low, false));
        assert_eq!(metrics.len(), 3);
    }

    #[test]
    fn adding_selected_metric_is_idempotent() {
        let mut metrics = SelectedMetrics::default();
        let before = metrics.clone();
        assert!(!metrics.toggle(Metric::High, true));
        assert_eq!(metrics, before);
    }
}
