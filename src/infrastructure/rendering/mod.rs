pub mod canvas_renderer;

pub use canvas_renderer::{CanvasChartRenderer, format_axis_value};
