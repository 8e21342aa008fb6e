//! Input bridge for the smooth-scroll emulator.
//!
//! Intercepts wheel input (`passive: false`, default suppressed) and
//! feeds raw deltas to the scroll source; the frame loop replaces the
//! native jump with interpolated motion. Scroll positions the engine did
//! not write itself (scrollbar drags, keyboard paging) are adopted as-is,
//! and viewport resizes refresh the scrollable bounds.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

use super::MotionContext;

/// Guard owning the window-level listeners; they are removed on drop.
pub struct InputBridge {
    wheel: Closure<dyn FnMut(web_sys::WheelEvent)>,
    scroll: Closure<dyn Fn()>,
    resize: Closure<dyn Fn()>,
}

impl InputBridge {
    pub fn attach(motion: MotionContext) -> Option<Self> {
        let window = web_sys::window()?;
        motion.refresh_bounds();

        let wheel = {
            let motion = motion.clone();
            Closure::<dyn FnMut(web_sys::WheelEvent)>::new(move |event: web_sys::WheelEvent| {
                event.prevent_default();
                motion.add_delta(event.delta_y());
            })
        };
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(false);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                wheel.as_ref().unchecked_ref(),
                &options,
            )
            .unwrap();

        let scroll = {
            let motion = motion.clone();
            Closure::<dyn Fn()>::new(move || {
                if let Some(win) = web_sys::window() {
                    if let Ok(y) = win.scroll_y() {
                        motion.adopt_external(y);
                    }
                }
            })
        };
        window
            .add_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref())
            .unwrap();

        let resize = {
            let motion = motion.clone();
            Closure::<dyn Fn()>::new(move || {
                motion.refresh_bounds();
            })
        };
        window
            .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
            .unwrap();

        Some(Self {
            wheel,
            scroll,
            resize,
        })
    }
}

impl Drop for InputBridge {
    fn drop(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let _ = window.remove_event_listener_with_callback(
            "wheel",
            self.wheel.as_ref().unchecked_ref(),
        );
        let _ = window.remove_event_listener_with_callback(
            "scroll",
            self.scroll.as_ref().unchecked_ref(),
        );
        let _ = window.remove_event_listener_with_callback(
            "resize",
            self.resize.as_ref().unchecked_ref(),
        );
    }
}
