//! Section binding lifecycle hook.
//!
//! Each visual section enumerates its own animatable elements and calls
//! [`use_section_bindings`] with a spec builder. The hook measures the
//! section, registers the bindings on mount, re-syncs them on viewport
//! resize, and unregisters through a [`BindingGuard`] when the section
//! leaves the tree. Registration failures log a diagnostic and register
//! nothing; the guard is still safe to drop.

use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::{geometry, MotionContext};
use crate::engine::{SectionGeometry, SectionSpec};

/// Disposer for one section's bindings. Dropping it unregisters every
/// binding created under the section root: exactly once, and safely
/// even when setup failed and nothing was registered.
pub struct BindingGuard {
    motion: MotionContext,
    root: String,
}

impl BindingGuard {
    pub fn new(motion: MotionContext, root: impl Into<String>) -> Self {
        Self {
            motion,
            root: root.into(),
        }
    }
}

impl Drop for BindingGuard {
    fn drop(&mut self) {
        self.motion.unregister(&self.root);
    }
}

/// Register a section's animation bindings for its mount lifetime.
///
/// `make_spec` is invoked with freshly measured geometry on mount and on
/// every viewport resize, so specs whose tween endpoints depend on the
/// viewport (the horizontal gallery) stay calibrated.
#[hook]
pub fn use_section_bindings<F>(root_id: &'static str, make_spec: F)
where
    F: Fn(&SectionGeometry) -> SectionSpec + 'static,
{
    let motion = use_context::<MotionContext>().expect("MotionContext not provided");

    use_effect_with_deps(
        move |_| {
            let sync: Rc<dyn Fn()> = {
                let motion = motion.clone();
                Rc::new(move || match geometry::measure(root_id) {
                    Some(geometry) => {
                        let spec = make_spec(&geometry);
                        match motion.sync_section(spec, &geometry) {
                            Ok(count) => {
                                log::debug!("section `{root_id}`: {count} bindings active");
                            }
                            Err(err) => log::error!("section `{root_id}` rejected: {err}"),
                        }
                    }
                    None => {
                        log::warn!("section `{root_id}` not in document; bindings skipped");
                    }
                })
            };
            sync();

            let resize = {
                let sync = Rc::clone(&sync);
                Closure::<dyn Fn()>::new(move || sync())
            };
            if let Some(window) = web_sys::window() {
                window
                    .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
                    .unwrap();
            }

            let guard = BindingGuard::new(motion, root_id);
            move || {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        resize.as_ref().unchecked_ref(),
                    );
                }
                drop(guard);
            }
        },
        (),
    );
}
