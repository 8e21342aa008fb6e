//! Read-only viewport and layout queries.
//!
//! Trigger windows are resolved from these measurements at registration
//! time and again whenever the viewport resizes. Pin transforms are
//! applied to inner wrappers, never to the measured section roots, so a
//! pinned section reports stable geometry.

use crate::engine::SectionGeometry;

/// Current viewport size in CSS pixels.
pub fn viewport() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some((w, h))
}

/// Measure a section root by element id, in document coordinates.
pub fn measure(root_id: &str) -> Option<SectionGeometry> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let element = document.get_element_by_id(root_id)?;
    let rect = element.get_bounding_client_rect();
    let scroll_y = window.scroll_y().ok()?;
    let (viewport_w, viewport_h) = viewport()?;
    Some(SectionGeometry {
        top: rect.top() + scroll_y,
        height: rect.height(),
        viewport_w,
        viewport_h,
    })
}

/// Maximum scrollable offset of the document.
pub fn scroll_extent() -> Option<f64> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let root = document.document_element()?;
    let (_, viewport_h) = viewport()?;
    Some((f64::from(root.scroll_height()) - viewport_h).max(0.0))
}
