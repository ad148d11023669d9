//! Dashboard state: input debouncing, metric selection and the fetch/display cycle.

pub mod chart_view;
pub mod debounce;
pub mod metrics;

pub use chart_view::*;
pub use debounce::*;
pub use metrics::*;
