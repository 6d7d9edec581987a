use crate::core::telemetry::{self, TelemetrySim};
use crate::dom;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Simulated telemetry readouts, driven from the shared frame loop.
pub struct HudController {
    coords: web::Element,
    tx: web::Element,
    chart: Option<Chart>,
    sim: TelemetrySim,
    reduced: bool,
}

struct Chart {
    ctx: web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

pub fn init(document: &web::Document) -> Option<HudController> {
    let coords = document.get_element_by_id("hud-coords")?;
    let tx = document.get_element_by_id("hud-tx")?;
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    Some(HudController {
        coords,
        tx,
        chart: init_chart(document),
        sim: TelemetrySim::new(seed),
        reduced: dom::prefers_reduced_motion(),
    })
}

// The chart is optional: the HUD still runs its readouts without a canvas.
fn init_chart(document: &web::Document) -> Option<Chart> {
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("chart-canvas")?
        .dyn_into()
        .ok()?;
    let ctx = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()?;
    Some(Chart {
        ctx,
        width: canvas.width() as f64,
        height: canvas.height() as f64,
    })
}

impl HudController {
    /// Advance the simulation and redraw whatever came due this frame.
    pub fn tick(&mut self, now_ms: f64) {
        let update = self.sim.tick(now_ms, self.reduced);
        if let Some((x, y, z)) = update.coords {
            self.coords
                .set_text_content(Some(&telemetry::format_coords(x, y, z)));
        }
        if let Some(state) = update.tx {
            self.tx.set_text_content(Some(&state.display()));
        }
        if update.sample_accepted {
            if let Some(chart) = &self.chart {
                chart.draw(&self.sim);
            }
        }
    }
}

impl Chart {
    fn draw(&self, sim: &TelemetrySim) {
        let (w, h) = (self.width, self.height);
        let ctx = &self.ctx;
        let value_y = |v: f64| h - v / 100.0 * h;

        // Translucent veil instead of a hard clear, so old traces ghost out.
        ctx.set_fill_style_str("rgba(0, 0, 0, 0.2)");
        ctx.fill_rect(0.0, 0.0, w, h);

        let n = sim.samples.len();
        if n > 1 {
            ctx.set_stroke_style_str("rgba(108, 211, 255, 0.8)");
            ctx.set_line_width(1.5);
            ctx.set_line_cap("round");
            ctx.set_line_join("round");
            ctx.begin_path();
            for (i, v) in sim.samples.iter().enumerate() {
                let x = i as f64 / n as f64 * w;
                if i == 0 {
                    ctx.move_to(x, value_y(*v));
                } else {
                    ctx.line_to(x, value_y(*v));
                }
            }
            ctx.stroke();
        }

        if n > 0 {
            // Rolling average, dashed
            let avg_y = value_y(sim.average());
            ctx.set_stroke_style_str("rgba(255, 230, 215, 0.3)");
            ctx.set_line_width(1.0);
            let dash = js_sys::Array::of2(&JsValue::from_f64(3.0), &JsValue::from_f64(3.0));
            _ = ctx.set_line_dash(&JsValue::from(dash));
            ctx.begin_path();
            ctx.move_to(0.0, avg_y);
            ctx.line_to(w, avg_y);
            ctx.stroke();
            _ = ctx.set_line_dash(&JsValue::from(js_sys::Array::new()));

            // Latest sample marker, pinned near the right edge
            if let Some(last) = sim.samples.back() {
                ctx.set_fill_style_str("rgba(108, 233, 255, 0.8)");
                ctx.begin_path();
                _ = ctx.arc(w - 2.0, value_y(*last), 2.5, 0.0, std::f64::consts::TAU);
                ctx.fill();
            }
        }
    }
}

/// Debug hook: write the coordinate readout directly, bypassing the
/// simulation without disturbing it.
#[wasm_bindgen]
pub fn hud_set_coords(x: f64, y: f64, z: f64) {
    if let Some(node) = dom::window_document().and_then(|d| d.get_element_by_id("hud-coords")) {
        node.set_text_content(Some(&telemetry::format_coords(x, y, z)));
    }
}

/// Debug hook: write the transmission label directly, bypassing the
/// simulation without disturbing it.
#[wasm_bindgen]
pub fn hud_set_transmission(label: Option<String>, hint: Option<String>) {
    if let Some(node) = dom::window_document().and_then(|d| d.get_element_by_id("hud-tx")) {
        let label = label.unwrap_or_else(|| telemetry::TX_UNKNOWN.label.to_string());
        let hint = hint.unwrap_or_default();
        node.set_text_content(Some(&telemetry::display_status(&label, &hint)));
    }
}
