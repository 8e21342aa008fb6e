//! Scroll-driven motion engine.
//!
//! Everything in this module is plain state and arithmetic: the smoothed
//! scroll source, the binding model, the registrar and the carousel state
//! machine. No browser types appear here: the `dom` module owns every
//! side effect, which keeps the engine testable on the host target.

pub mod binding;
pub mod carousel;
pub mod easing;
pub mod registry;
pub mod scroll;

pub use binding::{
    BindingError, ElementStyle, EnterAt, GroupSpec, Property, SectionGeometry, SectionSpec,
    SpanSpec, TargetSpec, TriggerSpec, TriggerWindow, Tween,
};
pub use carousel::{Autoplay, Carousel, Direction};
pub use easing::Easing;
pub use registry::{BindingRegistry, StyleOp};
pub use scroll::ScrollSource;
