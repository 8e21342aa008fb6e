//! Style application for evaluated bindings.
//!
//! The engine emits numeric [`StyleOp`]s; this module turns them into
//! transform/opacity writes. An element that has left the document (a
//! failed asset, markup swapped out mid-frame) is skipped silently: one
//! missing target must never take the frame loop down with it.

use wasm_bindgen::JsCast;

use crate::engine::{ElementStyle, StyleOp};

/// Apply a batch of style writes to the live document.
pub fn apply(ops: &[StyleOp]) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    for op in ops {
        let Some(element) = document.get_element_by_id(&op.id) else {
            continue;
        };
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        let style = element.style();
        if let Some(transform) = transform_css(&op.style) {
            let _ = style.set_property("transform", &transform);
        }
        if let Some(opacity) = op.style.opacity {
            let _ = style.set_property("opacity", &format!("{opacity:.4}"));
        }
    }
}

/// Compose the transform string for a merged style, or `None` when no
/// transform component is set. Order matters: translate, then scale,
/// then rotate, matching how the sections author their tweens.
pub fn transform_css(style: &ElementStyle) -> Option<String> {
    let has_translate = style.translate_x.is_some() || style.translate_y.is_some();
    if !has_translate && style.scale.is_none() && style.rotate.is_none() {
        return None;
    }
    let mut out = String::new();
    if has_translate {
        let x = style.translate_x.unwrap_or(0.0);
        let y = style.translate_y.unwrap_or(0.0);
        out.push_str(&format!("translate3d({x:.2}px, {y:.2}px, 0)"));
    }
    if let Some(scale) = style.scale {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&format!("scale({scale:.4})"));
    }
    if let Some(rotate) = style.rotate {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&format!("rotate({rotate:.3}deg)"));
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Property;

    #[test]
    fn empty_style_has_no_transform() {
        assert_eq!(transform_css(&ElementStyle::default()), None);
    }

    #[test]
    fn opacity_alone_has_no_transform() {
        let mut style = ElementStyle::default();
        style.set(Property::Opacity, 0.5);
        assert_eq!(transform_css(&style), None);
    }

    #[test]
    fn translate_fills_missing_axis_with_zero() {
        let mut style = ElementStyle::default();
        style.set(Property::TranslateX, -120.0);
        assert_eq!(
            transform_css(&style).unwrap(),
            "translate3d(-120.00px, 0.00px, 0)"
        );
    }

    #[test]
    fn components_compose_in_order() {
        let mut style = ElementStyle::default();
        style.set(Property::TranslateY, 50.0);
        style.set(Property::Scale, 0.8);
        style.set(Property::Rotate, 5.0);
        assert_eq!(
            transform_css(&style).unwrap(),
            "translate3d(0.00px, 50.00px, 0) scale(0.8000) rotate(5.000deg)"
        );
    }
}
