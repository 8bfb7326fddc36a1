//! Frame-loop driver: schedules engine ticks via `requestAnimationFrame`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::dom;

/// Lifecycle of the frame loop.
///
/// `Idle` until the first frame is scheduled, `Running` while the loop
/// reschedules itself, `Cancelled` once torn down or after a scheduling
/// failure. Cancelled is terminal — no further ticks are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
    Cancelled,
}

/// Cooperative single-writer loop: the tick closure runs to completion
/// inside each frame callback; cancellation takes effect at the frame
/// boundary, never mid-tick.
pub struct LoopDriver {
    state: Rc<Cell<DriverState>>,
}

impl LoopDriver {
    pub fn new() -> Self {
        Self {
            state: Rc::new(Cell::new(DriverState::Idle)),
        }
    }

    pub fn state(&self) -> DriverState {
        self.state.get()
    }

    /// Schedule `tick` once per animation frame until cancelled.
    ///
    /// Only valid from `Idle`; calling again (or after cancellation) is a
    /// no-op. If the host refuses to schedule a frame the driver logs a
    /// console warning and goes `Cancelled` — observable to the consumer
    /// only as the stats feed falling silent.
    pub fn start(&self, mut tick: impl FnMut() + 'static) {
        if self.state.get() != DriverState::Idle {
            return;
        }
        self.state.set(DriverState::Running);

        let state = self.state.clone();
        let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();

        *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if state.get() != DriverState::Running {
                return;
            }
            tick();
            let schedule = dom::request_animation_frame(f.borrow().as_ref().unwrap());
            if let Err(e) = schedule {
                web_sys::console::warn_1(&format!("frame scheduling failed: {e:?}").into());
                state.set(DriverState::Cancelled);
            }
        }) as Box<dyn FnMut()>));

        if let Err(e) = dom::request_animation_frame(g.borrow().as_ref().unwrap()) {
            web_sys::console::warn_1(&format!("frame scheduling failed: {e:?}").into());
            self.state.set(DriverState::Cancelled);
        };
    }

    /// Stop rescheduling. The in-flight frame (if any) sees the state flip
    /// and returns without ticking. Cancelling an idle driver also pins it
    /// shut, so a torn-down lab can never be started afterwards.
    pub fn cancel(&self) {
        self.state.set(DriverState::Cancelled);
    }
}

impl Default for LoopDriver {
    fn default() -> Self {
        Self::new()
    }
}
