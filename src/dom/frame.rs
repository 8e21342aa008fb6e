//! Self-rescheduling animation-frame loop.
//!
//! Drives the whole motion pipeline: every frame advances the scroll
//! source and re-evaluates the registered bindings. The returned guard
//! cancels the pending frame on drop: after that the loop never fires
//! again, so no callback can touch a discarded visual tree.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

use super::MotionContext;

type FrameClosure = Closure<dyn FnMut(f64)>;

/// Guard owning the frame loop. Dropping it stops the loop immediately.
pub struct FrameLoop {
    cancelled: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
    closure: Rc<RefCell<Option<FrameClosure>>>,
}

impl FrameLoop {
    /// Start the per-frame pipeline for the given engine handle.
    pub fn start(motion: MotionContext) -> Self {
        motion.resume();

        let cancelled = Rc::new(Cell::new(false));
        let raf_id = Rc::new(Cell::new(0));
        let closure: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));

        {
            let cancelled = Rc::clone(&cancelled);
            let raf_id = Rc::clone(&raf_id);
            let reschedule = Rc::clone(&closure);
            *closure.borrow_mut() = Some(Closure::new(move |now: f64| {
                if cancelled.get() {
                    return;
                }
                motion.frame(now);
                if let Some(cb) = reschedule.borrow().as_ref() {
                    raf_id.set(request_frame(cb));
                }
            }));
        }

        if let Some(cb) = closure.borrow().as_ref() {
            raf_id.set(request_frame(cb));
        }

        Self {
            cancelled,
            raf_id,
            closure,
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancelled.set(true);
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.raf_id.get());
        }
        // The closure captures the Rc it lives in; take it out to break
        // the cycle, otherwise the loop state leaks.
        self.closure.borrow_mut().take();
    }
}

fn request_frame(cb: &FrameClosure) -> i32 {
    web_sys::window()
        .and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
        .unwrap_or(0)
}
