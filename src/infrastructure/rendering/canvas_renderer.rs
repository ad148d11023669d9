use crate::domain::{
    chart::{AxisDomain, BarChartModel, LineChartModel, PlotArea, label_stride},
    logging::LogComponent,
};
use crate::log_debug;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const AXIS_WIDTH: f64 = 90.0;
const MARGIN: f64 = 24.0;
const MAX_X_LABELS: usize = 8;
const Y_TICKS: usize = 5;
const GRID_DASH: f64 = 3.0;

/// Canvas 2D drawing of the price and volume chart models
pub struct CanvasChartRenderer {
    width: u32,
    height: u32,
}

impl CanvasChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn plot_area(&self) -> PlotArea {
        PlotArea::inside(self.width as f64, self.height as f64, AXIS_WIDTH, MARGIN)
    }

    fn context(&self, canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
        canvas.set_width(self.width);
        canvas.set_height(self.height);
        canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Failed to cast to 2D context"))
    }

    pub fn draw_line_chart(&self, canvas: &HtmlCanvasElement, model: &LineChartModel) -> Result<(), JsValue> {
        let ctx = self.context(canvas)?;
        let area = self.plot_area();
        ctx.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);

        let Some(domain) = model.domain else {
            return self.draw_no_data(&ctx, &area);
        };
        self.draw_grid(&ctx, &area, &domain, &model.labels)?;

        let count = model.point_count();
        ctx.set_line_width(2.0);
        for line in &model.lines {
            ctx.set_stroke_style_str(line.stroke);
            ctx.begin_path();
            for (i, value) in line.values.iter().enumerate() {
                let x = area.slot_center(i, count);
                let y = area.y_for(*value, &domain);
                if i == 0 {
                    ctx.move_to(x, y);
                } else {
                    ctx.line_to(x, y);
                }
            }
            ctx.stroke();
        }

        log_debug!(
            LogComponent::Infrastructure("CanvasChart"),
            "📈 Drew {} lines x {} points",
            model.lines.len(),
            count
        );
        Ok(())
    }

    pub fn draw_bar_chart(&self, canvas: &HtmlCanvasElement, model: &BarChartModel) -> Result<(), JsValue> {
        let ctx = self.context(canvas)?;
        let area = self.plot_area();
        ctx.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);

        let Some(domain) = model.domain else {
            return self.draw_no_data(&ctx, &area);
        };
        self.draw_grid(&ctx, &area, &domain, &model.labels)?;

        let count = model.values.len();
        let bar_width = (area.slot_width(count) * 0.8).max(1.0);
        ctx.set_fill_style_str(model.fill);
        for (i, value) in model.values.iter().enumerate() {
            let top = area.y_for(*value, &domain).clamp(area.top, area.bottom());
            let x = area.slot_center(i, count) - bar_width / 2.0;
            ctx.fill_rect(x, top, bar_width, area.bottom() - top);
        }

        log_debug!(LogComponent::Infrastructure("CanvasChart"), "📊 Drew {} volume bars", count);
        Ok(())
    }

    fn draw_grid(
        &self,
        ctx: &CanvasRenderingContext2d,
        area: &PlotArea,
        domain: &AxisDomain,
        labels: &[String],
    ) -> Result<(), JsValue> {
        let dash = js_sys::Array::of2(&GRID_DASH.into(), &GRID_DASH.into());
        ctx.set_line_dash(&dash)?;
        ctx.set_line_width(1.0);
        ctx.set_stroke_style_str("#cccccc");
        ctx.set_fill_style_str("#666666");
        ctx.set_font("11px sans-serif");

        ctx.set_text_align("right");
        for tick in domain.ticks(Y_TICKS) {
            let y = area.y_for(tick, domain);
            ctx.begin_path();
            ctx.move_to(area.left, y);
            ctx.line_to(area.right(), y);
            ctx.stroke();
            ctx.fill_text(&format_axis_value(tick), area.left - 6.0, y + 4.0)?;
        }

        ctx.set_text_align("center");
        let stride = label_stride(labels.len(), MAX_X_LABELS);
        for (i, label) in labels.iter().enumerate().step_by(stride) {
            let x = area.slot_center(i, labels.len());
            ctx.begin_path();
            ctx.move_to(x, area.top);
            ctx.line_to(x, area.bottom());
            ctx.stroke();
            ctx.fill_text(label, x, area.bottom() + 16.0)?;
        }

        ctx.set_line_dash(&js_sys::Array::new())?;
        Ok(())
    }

    fn draw_no_data(&self, ctx: &CanvasRenderingContext2d, area: &PlotArea) -> Result<(), JsValue> {
        ctx.set_fill_style_str("#999999");
        ctx.set_font("14px sans-serif");
        ctx.set_text_align("center");
        ctx.fill_text("No data", area.left + area.width / 2.0, area.top + area.height / 2.0)
    }
}

/// Axis tick text: compact for large volumes, two decimals for prices
pub fn format_axis_value(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 10_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{:.2}", value)
    }
}
