//! Canvas renderer: pendulum rig on top, rolling waveform strip below.
//!
//! Strictly a read-only consumer of the engine state; nothing here ever
//! writes back into the simulation.

use std::f64::consts::{FRAC_PI_2, TAU};

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use pendlab_core::{Simulation, HISTORY_WINDOW};

/// Fraction of the canvas height given to the waveform strip.
const GRAPH_FRACTION: f64 = 0.30;
/// Waveform vertical scale: ±π/2 of angle spans 90% of the half-strip.
const MAX_PLOT_ANGLE: f64 = FRAC_PI_2;

const COLOR_PIVOT: &str = "#94a3b8";
const COLOR_SUPPORT: &str = "#52525b";
const COLOR_STRING: &str = "#e4e4e7";
const COLOR_BOB: &str = "#06b6d4";
const COLOR_BOB_RIM: &str = "#0891b2";
const COLOR_GRAPH_FRAME: &str = "#3f3f46";
const COLOR_GRAPH_ZERO: &str = "#52525b";
const COLOR_GRAPH_LABEL: &str = "#94a3b8";
const COLOR_TRACE: &str = "#22d3ee";
const COLOR_TRACE_DOT: &str = "#fff";

pub struct Renderer {
    ctx: CanvasRenderingContext2d,
    canvas: HtmlCanvasElement,
    /// CSS pixel dimensions; written only by resize, read by render.
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, String> {
        let width = canvas.width();
        let height = canvas.height();

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("{e:?}"))?
            .ok_or("no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "not a 2d context")?;

        Ok(Renderer {
            ctx,
            canvas,
            width,
            height,
        })
    }

    /// Track the host surface. Independent of the physics: a resize never
    /// feeds back into the simulation state.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    pub fn render(&self, sim: &Simulation) {
        let w = self.width as f64;
        let h = self.height as f64;

        self.ctx.clear_rect(0.0, 0.0, w, h);

        let graph_height = h * GRAPH_FRACTION;
        let sim_height = h - graph_height;

        self.draw_pendulum(sim, w, sim_height);
        self.draw_waveform(sim, w, h, graph_height);
    }

    fn draw_pendulum(&self, sim: &Simulation, w: f64, sim_height: f64) {
        let config = sim.config();
        let state = sim.state();

        // 1 m = scale px, constrained so a 2.5 m rig fits the sim area.
        let scale = w.min(sim_height) / 2.5;
        let origin_x = w / 2.0;
        let origin_y = sim_height / 3.0;

        // Ceiling support
        self.ctx.set_stroke_style_str(COLOR_SUPPORT);
        self.ctx.set_line_width(4.0);
        self.ctx.begin_path();
        self.ctx.move_to(origin_x - 50.0, origin_y);
        self.ctx.line_to(origin_x + 50.0, origin_y);
        self.ctx.stroke();

        // Pivot
        self.ctx.set_fill_style_str(COLOR_PIVOT);
        self.ctx.begin_path();
        self.ctx.arc(origin_x, origin_y, 5.0, 0.0, TAU).ok();
        self.ctx.fill();

        let bob = state.bob_position(config.length);
        let bob_x = origin_x + bob.x * scale;
        let bob_y = origin_y + bob.y * scale;

        // String
        self.ctx.set_stroke_style_str(COLOR_STRING);
        self.ctx.set_line_width(2.0);
        self.ctx.begin_path();
        self.ctx.move_to(origin_x, origin_y);
        self.ctx.line_to(bob_x, bob_y);
        self.ctx.stroke();

        // Bob; radius grows with the cube root of mass (cosmetic only).
        let bob_radius = 15.0 + config.mass.cbrt() * 5.0;
        self.ctx.set_fill_style_str(COLOR_BOB);
        self.ctx.begin_path();
        self.ctx.arc(bob_x, bob_y, bob_radius, 0.0, TAU).ok();
        self.ctx.fill();
        self.ctx.set_stroke_style_str(COLOR_BOB_RIM);
        self.ctx.set_line_width(2.0);
        self.ctx.stroke();
    }

    fn draw_waveform(&self, sim: &Simulation, w: f64, h: f64, graph_height: f64) {
        let top = h - graph_height + 10.0;
        let bottom = h - 10.0;
        let left = 50.0;
        let right = w - 20.0;
        let center_y = (top + bottom) / 2.0;
        let strip_height = bottom - top;

        // Frame
        self.ctx.set_fill_style_str("rgba(0, 0, 0, 0.2)");
        self.ctx.fill_rect(left, top, right - left, strip_height);
        self.ctx.set_stroke_style_str(COLOR_GRAPH_FRAME);
        self.ctx.set_line_width(1.0);
        self.ctx.stroke_rect(left, top, right - left, strip_height);

        // Dashed zero line
        let dashes = js_sys::Array::of2(&JsValue::from(4.0), &JsValue::from(4.0));
        self.ctx.set_line_dash(&dashes).ok();
        self.ctx.set_stroke_style_str(COLOR_GRAPH_ZERO);
        self.ctx.begin_path();
        self.ctx.move_to(left, center_y);
        self.ctx.line_to(right, center_y);
        self.ctx.stroke();
        self.ctx.set_line_dash(&js_sys::Array::new()).ok();

        // Axis labels
        self.ctx.set_fill_style_str(COLOR_GRAPH_LABEL);
        self.ctx.set_font("10px monospace");
        self.ctx.set_text_align("right");
        self.ctx.fill_text("Angle", left - 8.0, top + 10.0).ok();
        self.ctx.fill_text("0", left - 8.0, center_y + 3.0).ok();
        self.ctx.fill_text("Time", right, bottom + 10.0).ok();

        let history = &sim.state().history;
        if history.len() < 2 {
            return;
        }

        let now = sim.state().elapsed_time;
        let y_of = |angle: f64| center_y - (angle / MAX_PLOT_ANGLE) * (strip_height * 0.45);
        // Right edge is "now", left edge is now - 5 s.
        let x_of = |time: f64| right - ((now - time) / HISTORY_WINDOW) * (right - left);

        self.ctx.set_stroke_style_str(COLOR_TRACE);
        self.ctx.set_line_width(2.0);
        self.ctx.begin_path();
        for (i, sample) in history.iter().enumerate() {
            let x = x_of(sample.time);
            let y = y_of(sample.angle);
            if i == 0 {
                self.ctx.move_to(x, y);
            } else {
                self.ctx.line_to(x, y);
            }
        }
        self.ctx.stroke();

        // Leading dot at the newest sample
        if let Some(latest) = history.latest() {
            self.ctx.set_fill_style_str(COLOR_TRACE_DOT);
            self.ctx.begin_path();
            self.ctx.arc(right, y_of(latest.angle), 3.0, 0.0, TAU).ok();
            self.ctx.fill();
        }
    }
}
