//! Browser side of the motion engine.
//!
//! The engine itself is pure state; everything that touches `web_sys`
//! lives here: the shared [`MotionContext`] handle, the frame loop, the
//! input bridge, geometry queries and style application.

pub mod bindings;
pub mod frame;
pub mod geometry;
pub mod smooth;
pub mod style;

use std::cell::RefCell;
use std::rc::Rc;

use crate::engine::{
    BindingError, BindingRegistry, ScrollSource, SectionGeometry, SectionSpec, StyleOp,
};

pub use bindings::{use_section_bindings, BindingGuard};
pub use frame::FrameLoop;
pub use smooth::InputBridge;

/// Engine state behind the shared handle. Single writer: only the frame
/// loop mutates the scroll position; sections only register and
/// unregister bindings.
#[derive(Debug)]
struct MotionState {
    scroll: ScrollSource,
    registry: BindingRegistry,
    /// Position the frame loop last wrote to the window, used to tell our
    /// own scroll events apart from external ones (scrollbar, anchors).
    last_written: Option<f64>,
}

/// Explicitly owned handle to the motion engine, threaded through the
/// component tree as a Yew context. Clones share one state; equality is
/// pointer identity so providing the context never re-renders consumers.
#[derive(Clone, Debug)]
pub struct MotionContext {
    inner: Rc<RefCell<MotionState>>,
}

impl PartialEq for MotionContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl MotionContext {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(MotionState {
                scroll: ScrollSource::new(),
                registry: BindingRegistry::new(),
                last_written: None,
            })),
        }
    }

    /// Register a section's bindings, or refresh its trigger window when
    /// the same spec is already registered (the resize path). Idempotent
    /// either way: the active binding count is the same whether this runs
    /// once or twice.
    pub fn sync_section(
        &self,
        spec: SectionSpec,
        geometry: &SectionGeometry,
    ) -> Result<usize, BindingError> {
        let mut state = self.inner.borrow_mut();
        if state.registry.spec(&spec.root) == Some(&spec) {
            state.registry.relayout(&spec.root, geometry)?;
            Ok(state.registry.active_bindings(&spec.root))
        } else {
            state.registry.register(spec, geometry)
        }
    }

    pub fn unregister(&self, root: &str) {
        self.inner.borrow_mut().registry.unregister(root);
    }

    /// Wheel input from the bridge.
    pub fn add_delta(&self, dy: f64) {
        self.inner.borrow_mut().scroll.add_delta(dy);
    }

    /// Adopt an externally observed scroll position (scrollbar drag).
    pub fn adopt_external(&self, pos: f64) {
        let mut state = self.inner.borrow_mut();
        let own = state
            .last_written
            .map(|written| (written - pos).abs() < 1.0)
            .unwrap_or(false);
        if !own {
            state.scroll.jump(pos);
        }
    }

    /// Refresh the scrollable extent from the live document.
    pub fn refresh_bounds(&self) {
        if let Some(max) = geometry::scroll_extent() {
            self.inner.borrow_mut().scroll.set_bounds(max);
        }
    }

    /// One animation frame. Within the frame the order is fixed: the
    /// scroll source advances first, the native scroll offset is written,
    /// then every dependent binding recomputes from the new position:
    /// strict producer-before-consumer.
    pub fn frame(&self, now_ms: f64) {
        let (pos, ops) = {
            let mut state = self.inner.borrow_mut();
            let pos = state.scroll.tick(now_ms);
            state.last_written = Some(pos);
            let mut ops: Vec<StyleOp> = Vec::new();
            state.registry.evaluate(pos, &mut ops);
            (pos, ops)
        };
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, pos);
        }
        style::apply(&ops);
    }

    /// Forget interpolation history, e.g. when the frame loop restarts.
    pub fn resume(&self) {
        self.inner.borrow_mut().scroll.resume();
    }
}

impl Default for MotionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Monotonic timestamp in ms, shared by the carousels and the frame loop.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}
