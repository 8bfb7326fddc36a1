//! pendlab-web — browser host for the pendulum lab engine.
//!
//! Exposes a [`PendulumLab`] handle to the JS control panel: push config
//! snapshots in, register a ~10 Hz stats callback, start/stop the frame
//! loop. Rendering happens on a 2D canvas owned by this crate; the physics
//! lives entirely in `pendlab-core`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

mod dom;
mod driver;
mod viz;

use pendlab_core::{Simulation, SimulationConfig, SimulationStats};

use driver::{DriverState, LoopDriver};
use viz::Renderer;

#[wasm_bindgen(start)]
pub fn main() {
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        web_sys::console::error_1(&msg.into());
    }));
}

/// One pendulum experiment bound to a canvas element.
///
/// Single-threaded by construction: the engine ticks inside the frame
/// callback, and every JS-facing method runs between frames, so shared
/// `Rc<RefCell<_>>` state never sees concurrent borrows.
#[wasm_bindgen]
pub struct PendulumLab {
    driver: LoopDriver,
    sim: Rc<RefCell<Simulation>>,
    config: Rc<RefCell<SimulationConfig>>,
    renderer: Rc<RefCell<Renderer>>,
    on_stats: Rc<RefCell<Option<js_sys::Function>>>,
}

#[wasm_bindgen]
impl PendulumLab {
    /// Bind a lab to the canvas with the given element id, starting from
    /// the default experiment (Earth gravity, 2 m string, light damping).
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<PendulumLab, JsValue> {
        let canvas = dom::canvas(canvas_id)?;
        let renderer = Renderer::new(canvas).map_err(|e| JsValue::from_str(&e))?;

        let config = SimulationConfig::default();
        Ok(PendulumLab {
            driver: LoopDriver::new(),
            sim: Rc::new(RefCell::new(Simulation::new(config))),
            config: Rc::new(RefCell::new(config)),
            renderer: Rc::new(RefCell::new(renderer)),
            on_stats: Rc::new(RefCell::new(None)),
        })
    }

    /// Replace the configuration snapshot. Takes the same JSON shape the
    /// control panel holds: `{gravity, length, mass, initialAngle, damping,
    /// paused}`. The engine picks it up on the next tick; structural edits
    /// reset the swing, damping/pause edits apply in place.
    ///
    /// Degenerate parameters (non-positive gravity, NaN, ...) are accepted
    /// and propagate through the physics unchanged — we warn on the console
    /// and leave trapping them to the control panel.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&self, json: &str) -> Result<(), JsValue> {
        let config: SimulationConfig = serde_json::from_str(json)
            .map_err(|e| JsValue::from_str(&format!("bad config: {e}")))?;
        if let Err(e) = config.validate() {
            web_sys::console::warn_1(&format!("config: {e}").into());
        }
        *self.config.borrow_mut() = config;
        Ok(())
    }

    /// Register the stats consumer. Called with a plain object
    /// `{period, maxVelocity, kineticEnergy, potentialEnergy, totalEnergy}`
    /// at ~10 Hz while unpaused.
    #[wasm_bindgen(js_name = onStats)]
    pub fn on_stats(&self, callback: js_sys::Function) {
        *self.on_stats.borrow_mut() = Some(callback);
    }

    /// Start the frame loop. Idempotent; a no-op once cancelled.
    pub fn start(&self) {
        let sim = self.sim.clone();
        let config = self.config.clone();
        let renderer = self.renderer.clone();
        let on_stats = self.on_stats.clone();

        self.driver.start(move || {
            let snapshot = *config.borrow();
            let published = sim.borrow_mut().tick(&snapshot);
            renderer.borrow().render(&sim.borrow());
            if let Some(stats) = published {
                emit_stats(&on_stats.borrow(), &stats);
            }
        });
    }

    /// Tear the loop down. Terminal: the lab cannot be restarted.
    pub fn stop(&self) {
        self.driver.cancel();
    }

    /// Whether the frame loop is still scheduling ticks.
    pub fn running(&self) -> bool {
        self.driver.state() == DriverState::Running
    }

    /// Resize the rendering surface (CSS pixels). Never touches the
    /// simulation state.
    pub fn resize(&self, width: u32, height: u32) {
        self.renderer.borrow_mut().resize(width, height);
    }

    /// Current angle from the vertical (radians), for external readouts.
    pub fn angle(&self) -> f64 {
        self.sim.borrow().state().angle
    }

    /// Current derived stats as JSON, computed on demand (works while
    /// paused, unlike the throttled callback).
    #[wasm_bindgen(js_name = statsJson)]
    pub fn stats_json(&self) -> String {
        let stats = self.sim.borrow().current_stats();
        serde_json::to_string(&stats).unwrap_or_default()
    }
}

/// Forward one snapshot to the registered consumer as a plain JS object.
fn emit_stats(callback: &Option<js_sys::Function>, stats: &SimulationStats) {
    let Some(cb) = callback else {
        return;
    };
    let Ok(json) = serde_json::to_string(stats) else {
        return;
    };
    let Ok(payload) = js_sys::JSON::parse(&json) else {
        return;
    };
    if let Err(e) = cb.call1(&JsValue::NULL, &payload) {
        web_sys::console::warn_1(&format!("stats callback failed: {e:?}").into());
    }
}
