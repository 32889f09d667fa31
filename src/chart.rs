//! Canvas 2D line chart showing the latest curve set.

use glam::DVec2;
use idmt_core::{Curve, CurveSet, RelaySlot, RenderSurface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::axis::{self, LinearAxis, PlotArea};
use crate::constants::*;
use crate::dom;
use crate::spline;

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

#[derive(Clone, Debug)]
pub struct ChartStyle {
    pub series_colors: [&'static str; 3],
    pub line_width: f64,
    pub point_radius: f64,
    pub tension: f64,
    pub x_axis: LinearAxis,
    pub x_tick_step: f64,
    pub y_max_ticks: usize,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            series_colors: SERIES_COLORS,
            line_width: SERIES_LINE_WIDTH,
            point_radius: SERIES_POINT_RADIUS,
            tension: SERIES_TENSION,
            x_axis: LinearAxis::new(X_AXIS_MIN, X_AXIS_MAX),
            x_tick_step: X_TICK_STEP,
            y_max_ticks: Y_MAX_TICKS,
        }
    }
}

/// Rendering surface backed by a `<canvas>`. Keeps the last published set so
/// it can repaint after a resize.
pub struct ChartSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    style: ChartStyle,
    curves: CurveSet,
}

impl ChartSurface {
    pub fn new(canvas: web::HtmlCanvasElement, style: ChartStyle) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self {
            canvas,
            ctx,
            style,
            curves: CurveSet::default(),
        })
    }

    pub fn redraw(&self) {
        if let Err(e) = self.draw() {
            log::warn!("[chart] redraw failed: {:?}", e);
        }
    }

    fn draw(&self) -> anyhow::Result<()> {
        let ctx = &self.ctx;
        let dpr = dom::device_pixel_ratio();
        let (w, h) = dom::css_size(&self.canvas);

        ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).map_err(js_err)?;
        ctx.clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
        ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0).map_err(js_err)?;

        let area = PlotArea::inset(
            DVec2::new(w, h),
            PADDING_LEFT,
            PADDING_TOP,
            PADDING_RIGHT,
            PADDING_BOTTOM,
        );
        let max_time = self
            .curves
            .iter()
            .filter_map(|(_, c)| c.max_time())
            .reduce(f64::max);
        let (y_axis, y_step) = axis::zero_based_axis(max_time, self.style.y_max_ticks);

        self.draw_x_axis(&area, &y_axis)?;
        self.draw_y_axis(&area, &y_axis, y_step)?;
        for (slot, curve) in self.curves.iter() {
            self.draw_series(&area, &y_axis, slot, curve)?;
        }
        self.draw_legend(w, h)?;
        Ok(())
    }

    fn draw_x_axis(&self, area: &PlotArea, y_axis: &LinearAxis) -> anyhow::Result<()> {
        let ctx = &self.ctx;
        let x_axis = &self.style.x_axis;
        let bottom = area.bottom_right().y;

        ctx.set_line_width(1.0);
        ctx.set_stroke_style_str(GRID_COLOR);
        ctx.set_fill_style_str(AXIS_TEXT_COLOR);
        ctx.set_font(TICK_FONT);
        ctx.set_text_align("center");
        ctx.set_text_baseline("top");
        for v in x_axis.ticks_every(self.style.x_tick_step) {
            let p = area.to_canvas(x_axis, y_axis, v, y_axis.min);
            ctx.begin_path();
            ctx.move_to(p.x, area.top_left.y);
            ctx.line_to(p.x, bottom + TICK_LENGTH);
            ctx.stroke();
            ctx.fill_text(&axis::format_tick(v), p.x, bottom + TICK_LENGTH + 2.0)
                .map_err(js_err)?;
        }

        ctx.set_font(TITLE_FONT);
        ctx.fill_text(
            X_AXIS_TITLE,
            area.top_left.x + area.size.x / 2.0,
            bottom + TICK_LENGTH + 22.0,
        )
        .map_err(js_err)?;
        Ok(())
    }

    fn draw_y_axis(&self, area: &PlotArea, y_axis: &LinearAxis, step: f64) -> anyhow::Result<()> {
        let ctx = &self.ctx;
        let x_axis = &self.style.x_axis;
        let right = area.bottom_right().x;

        ctx.set_line_width(1.0);
        ctx.set_stroke_style_str(GRID_COLOR);
        ctx.set_fill_style_str(AXIS_TEXT_COLOR);
        ctx.set_font(TICK_FONT);
        ctx.set_text_align("right");
        ctx.set_text_baseline("middle");
        for v in y_axis.ticks_every(step) {
            let p = area.to_canvas(x_axis, y_axis, x_axis.min, v);
            ctx.begin_path();
            ctx.move_to(area.top_left.x - TICK_LENGTH, p.y);
            ctx.line_to(right, p.y);
            ctx.stroke();
            ctx.fill_text(
                &axis::format_value(v, step),
                area.top_left.x - TICK_LENGTH - 3.0,
                p.y,
            )
            .map_err(js_err)?;
        }

        ctx.save();
        let r = (|| -> Result<(), JsValue> {
            ctx.translate(16.0, area.top_left.y + area.size.y / 2.0)?;
            ctx.rotate(-std::f64::consts::FRAC_PI_2)?;
            ctx.set_font(TITLE_FONT);
            ctx.set_text_align("center");
            ctx.set_text_baseline("middle");
            ctx.fill_text(Y_AXIS_TITLE, 0.0, 0.0)
        })();
        ctx.restore();
        r.map_err(js_err)
    }

    fn draw_series(
        &self,
        area: &PlotArea,
        y_axis: &LinearAxis,
        slot: RelaySlot,
        curve: &Curve,
    ) -> anyhow::Result<()> {
        if curve.is_empty() {
            return Ok(());
        }
        let ctx = &self.ctx;
        let color = self.style.series_colors[slot.index()];
        let points: Vec<DVec2> = curve
            .iter()
            .map(|s| area.to_canvas(&self.style.x_axis, y_axis, s.multiple, s.operating_time))
            .collect();

        ctx.set_stroke_style_str(color);
        ctx.set_fill_style_str(color);
        ctx.set_line_width(self.style.line_width);
        ctx.begin_path();
        ctx.move_to(points[0].x, points[0].y);
        let bounds = Some((area.top_left, area.bottom_right()));
        for seg in spline::bezier_segments(&points, self.style.tension, bounds) {
            ctx.bezier_curve_to(seg.c1.x, seg.c1.y, seg.c2.x, seg.c2.y, seg.to.x, seg.to.y);
        }
        ctx.stroke();

        for p in &points {
            ctx.begin_path();
            ctx.arc(p.x, p.y, self.style.point_radius, 0.0, std::f64::consts::TAU)
                .map_err(js_err)?;
            ctx.fill();
        }
        Ok(())
    }

    fn draw_legend(&self, w: f64, h: f64) -> anyhow::Result<()> {
        let ctx = &self.ctx;
        ctx.set_font(LEGEND_FONT);
        let widths: Vec<f64> = RelaySlot::ALL
            .iter()
            .map(|slot| {
                ctx.measure_text(slot.label())
                    .map(|m| m.width())
                    .unwrap_or(7.0 * slot.label().len() as f64)
            })
            .collect();
        let total: f64 = widths
            .iter()
            .map(|tw| LEGEND_BOX_WIDTH + LEGEND_TEXT_GAP + tw)
            .sum::<f64>()
            + LEGEND_ITEM_GAP * (widths.len() - 1) as f64;

        let y = h - LEGEND_OFFSET_FROM_BOTTOM;
        let mut x = (w - total) / 2.0;
        ctx.set_text_align("left");
        ctx.set_text_baseline("middle");
        ctx.set_line_width(self.style.line_width);
        for (slot, tw) in RelaySlot::ALL.iter().zip(widths) {
            let color = self.style.series_colors[slot.index()];
            ctx.set_stroke_style_str(color);
            ctx.stroke_rect(x, y - LEGEND_BOX_HEIGHT / 2.0, LEGEND_BOX_WIDTH, LEGEND_BOX_HEIGHT);
            x += LEGEND_BOX_WIDTH + LEGEND_TEXT_GAP;
            ctx.set_fill_style_str(AXIS_TEXT_COLOR);
            ctx.fill_text(slot.label(), x, y).map_err(js_err)?;
            x += tw + LEGEND_ITEM_GAP;
        }
        Ok(())
    }
}

impl RenderSurface for ChartSurface {
    fn present(&mut self, curves: CurveSet) {
        self.curves = curves;
        self.redraw();
    }
}
