//! Animation binding model.
//!
//! A section declares its animatable elements as an explicit list of
//! [`TargetSpec`]s (or staggered [`GroupSpec`]s) with tweens over a
//! viewport-relative [`TriggerSpec`]. Registration resolves the trigger
//! against measured geometry into a concrete [`TriggerWindow`]; from then
//! on every output is a deterministic function of the scroll position.
//! Malformed descriptors are rejected up front: a binding can never
//! produce NaN or divide by zero once registered.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::easing::Easing;

/// Rejected at registration time; nothing is registered when returned.
#[derive(Debug, Error, PartialEq)]
pub enum BindingError {
    #[error("trigger window for `{root}` is degenerate: end {end} must exceed start {start}")]
    DegenerateWindow { root: String, start: f64, end: f64 },

    #[error("stagger group under `{root}` has no targets")]
    EmptyGroup { root: String },

    #[error("tween span [{start}, {end}] for `{target}` is not a forward sub-range of [0, 1]")]
    InvalidSpan {
        target: String,
        start: f64,
        end: f64,
    },

    #[error("tween endpoints for `{target}` are not finite")]
    NonFiniteEndpoints { target: String },

    #[error("measured geometry for `{root}` is not finite")]
    NonFiniteGeometry { root: String },
}

/// Numeric style field a tween can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Horizontal offset, px.
    TranslateX,
    /// Vertical offset, px.
    TranslateY,
    /// Uniform scale factor.
    Scale,
    /// Rotation, degrees.
    Rotate,
    /// Opacity, 0 to 1.
    Opacity,
}

/// Sub-range of section progress a tween is active over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub start: f64,
    pub end: f64,
}

impl Span {
    pub const FULL: Span = Span {
        start: 0.0,
        end: 1.0,
    };

    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    fn validate(&self, target: &str) -> Result<(), BindingError> {
        let ok = self.start.is_finite()
            && self.end.is_finite()
            && self.start >= 0.0
            && self.end <= 1.0
            && self.end > self.start;
        if ok {
            Ok(())
        } else {
            Err(BindingError::InvalidSpan {
                target: target.to_string(),
                start: self.start,
                end: self.end,
            })
        }
    }

    /// Local progress within this span, clamped to `[0, 1]`.
    fn local(&self, section_progress: f64) -> f64 {
        ((section_progress - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::FULL
    }
}

/// One property animated from `from` to `to` across (a sub-range of) the
/// section's trigger window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub property: Property,
    pub from: f64,
    pub to: f64,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default)]
    pub span: Span,
}

impl Tween {
    pub fn new(property: Property, from: f64, to: f64) -> Self {
        Self {
            property,
            from,
            to,
            easing: Easing::Linear,
            span: Span::FULL,
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn span(mut self, start: f64, end: f64) -> Self {
        self.span = Span::new(start, end);
        self
    }

    fn validate(&self, target: &str) -> Result<(), BindingError> {
        if !(self.from.is_finite() && self.to.is_finite()) {
            return Err(BindingError::NonFiniteEndpoints {
                target: target.to_string(),
            });
        }
        self.span.validate(target)
    }

    /// Sample the tween at the given section progress.
    pub fn sample(&self, section_progress: f64) -> f64 {
        self.easing
            .lerp(self.from, self.to, self.span.local(section_progress))
    }
}

/// Explicit animation targets for one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSpec {
    /// Element id within the section's subtree.
    pub id: String,
    pub tweens: Vec<Tween>,
}

impl TargetSpec {
    pub fn new(id: impl Into<String>, tweens: Vec<Tween>) -> Self {
        Self {
            id: id.into(),
            tweens,
        }
    }

    pub(super) fn validate(&self) -> Result<(), BindingError> {
        for tween in &self.tweens {
            tween.validate(&self.id)?;
        }
        Ok(())
    }
}

/// A set of elements sharing one tween list, revealed with a fixed
/// progress offset between consecutive members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSpec {
    pub ids: Vec<String>,
    pub tweens: Vec<Tween>,
    /// Progress offset added per member index.
    pub stagger: f64,
}

impl GroupSpec {
    pub fn new(ids: Vec<String>, tweens: Vec<Tween>, stagger: f64) -> Self {
        Self {
            ids,
            tweens,
            stagger,
        }
    }

    /// Expand into per-element targets with shifted spans. The last
    /// member's span must still start inside the window, otherwise the
    /// group can never finish and is rejected.
    pub(super) fn expand(&self, root: &str) -> Result<Vec<TargetSpec>, BindingError> {
        if self.ids.is_empty() {
            return Err(BindingError::EmptyGroup {
                root: root.to_string(),
            });
        }
        let mut out = Vec::with_capacity(self.ids.len());
        for (index, id) in self.ids.iter().enumerate() {
            let shift = self.stagger * index as f64;
            let mut tweens = Vec::with_capacity(self.tweens.len());
            for tween in &self.tweens {
                let start = tween.span.start + shift;
                let end = (tween.span.end + shift).min(1.0);
                let shifted = Tween {
                    span: Span::new(start, end),
                    ..tween.clone()
                };
                shifted.validate(id)?;
                tweens.push(shifted);
            }
            out.push(TargetSpec::new(id.clone(), tweens));
        }
        Ok(out)
    }
}

/// Where a section's trigger window opens, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnterAt {
    /// Opens when the section's top edge reaches the viewport bottom
    /// (the section starts becoming visible).
    ViewportBottom,
    /// Opens when the section's top edge reaches the viewport top
    /// (the section fills the viewport; pinned sections use this).
    ViewportTop,
}

/// How far past the opening edge the window extends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanSpec {
    /// Until the section's bottom edge leaves through the viewport top.
    UntilExit,
    /// A fixed scroll distance, px.
    Pixels(f64),
    /// A multiple of the viewport height.
    Viewports(f64),
}

/// Viewport-relative description of a trigger window; resolved against
/// measured geometry at registration and again on relayout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerSpec {
    pub enter: EnterAt,
    pub span: SpanSpec,
    /// Element held visually fixed for the duration of the window.
    #[serde(default)]
    pub pin: Option<String>,
}

impl TriggerSpec {
    pub fn scrub_through() -> Self {
        Self {
            enter: EnterAt::ViewportBottom,
            span: SpanSpec::UntilExit,
            pin: None,
        }
    }

    pub fn pinned(pin_target: impl Into<String>, span: SpanSpec) -> Self {
        Self {
            enter: EnterAt::ViewportTop,
            span,
            pin: Some(pin_target.into()),
        }
    }
}

/// Measured layout inputs for window resolution. Queried from the display
/// surface on registration and on every viewport resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionGeometry {
    /// Document-space offset of the section's top edge, px.
    pub top: f64,
    /// Rendered height of the section, px.
    pub height: f64,
    pub viewport_w: f64,
    pub viewport_h: f64,
}

impl SectionGeometry {
    fn validate(&self, root: &str) -> Result<(), BindingError> {
        let ok = self.top.is_finite()
            && self.height.is_finite()
            && self.viewport_w.is_finite()
            && self.viewport_h.is_finite();
        if ok {
            Ok(())
        } else {
            Err(BindingError::NonFiniteGeometry {
                root: root.to_string(),
            })
        }
    }
}

/// Resolved scroll range, document px. `end > start` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriggerWindow {
    start: f64,
    end: f64,
}

impl TriggerWindow {
    pub fn new(root: &str, start: f64, end: f64) -> Result<Self, BindingError> {
        if start.is_finite() && end.is_finite() && end > start {
            Ok(Self { start, end })
        } else {
            Err(BindingError::DegenerateWindow {
                root: root.to_string(),
                start,
                end,
            })
        }
    }

    /// Resolve a viewport-relative spec against measured geometry.
    pub fn resolve(
        root: &str,
        spec: &TriggerSpec,
        geometry: &SectionGeometry,
    ) -> Result<Self, BindingError> {
        geometry.validate(root)?;
        let start = match spec.enter {
            EnterAt::ViewportBottom => geometry.top - geometry.viewport_h,
            EnterAt::ViewportTop => geometry.top,
        };
        let end = match spec.span {
            SpanSpec::UntilExit => geometry.top + geometry.height,
            SpanSpec::Pixels(px) => start + px,
            SpanSpec::Viewports(factor) => start + factor * geometry.viewport_h,
        };
        Self::new(root, start, end)
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn contains(&self, pos: f64) -> bool {
        pos >= self.start && pos <= self.end
    }

    /// Progress through the window, clamped to `[0, 1]`. Monotonic in
    /// `pos`; the constructor guarantees a non-zero denominator.
    pub fn progress(&self, pos: f64) -> f64 {
        ((pos - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }

    /// Offset holding a pinned element in place: scroll travelled inside
    /// the window, zero before it, the full span after it.
    pub fn pin_offset(&self, pos: f64) -> f64 {
        (pos - self.start).clamp(0.0, self.end - self.start)
    }
}

/// Merged numeric style for one element on one frame. The display layer
/// turns this into a transform string; fields left `None` are untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementStyle {
    pub translate_x: Option<f64>,
    pub translate_y: Option<f64>,
    pub scale: Option<f64>,
    pub rotate: Option<f64>,
    pub opacity: Option<f64>,
}

impl ElementStyle {
    pub fn set(&mut self, property: Property, value: f64) {
        match property {
            Property::TranslateX => self.translate_x = Some(value),
            Property::TranslateY => self.translate_y = Some(value),
            Property::Scale => self.scale = Some(value),
            Property::Rotate => self.rotate = Some(value),
            Property::Opacity => self.opacity = Some(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Everything one section registers: its trigger plus explicit targets.
/// No subtree scanning: each section enumerates what it animates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub root: String,
    pub trigger: TriggerSpec,
    #[serde(default)]
    pub targets: Vec<TargetSpec>,
    #[serde(default)]
    pub groups: Vec<GroupSpec>,
}

impl SectionSpec {
    pub fn new(root: impl Into<String>, trigger: TriggerSpec) -> Self {
        Self {
            root: root.into(),
            trigger,
            targets: Vec::new(),
            groups: Vec::new(),
        }
    }

    pub fn target(mut self, target: TargetSpec) -> Self {
        self.targets.push(target);
        self
    }

    pub fn group(mut self, group: GroupSpec) -> Self {
        self.groups.push(group);
        self
    }

    /// Validate and flatten groups into per-element targets.
    pub(super) fn expanded_targets(&self) -> Result<Vec<TargetSpec>, BindingError> {
        let mut targets = Vec::with_capacity(self.targets.len());
        for target in &self.targets {
            target.validate()?;
            targets.push(target.clone());
        }
        for group in &self.groups {
            targets.extend(group.expand(&self.root)?);
        }
        Ok(targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn geometry() -> SectionGeometry {
        SectionGeometry {
            top: 2_000.0,
            height: 800.0,
            viewport_w: 1_280.0,
            viewport_h: 720.0,
        }
    }

    #[test]
    fn progress_is_monotonic_and_clamped() {
        let w = TriggerWindow::new("s", 1_000.0, 3_000.0).unwrap();
        assert_eq!(w.progress(0.0), 0.0);
        assert_eq!(w.progress(1_000.0), 0.0);
        assert_eq!(w.progress(2_000.0), 0.5);
        assert_eq!(w.progress(3_000.0), 1.0);
        assert_eq!(w.progress(9_999.0), 1.0);

        let mut last = 0.0;
        for pos in (0..5_000).step_by(50) {
            let p = w.progress(pos as f64);
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn degenerate_window_is_rejected() {
        let err = TriggerWindow::new("hero", 500.0, 500.0).unwrap_err();
        assert!(matches!(err, BindingError::DegenerateWindow { .. }));
        assert!(TriggerWindow::new("hero", 500.0, 100.0).is_err());
        assert!(TriggerWindow::new("hero", f64::NAN, 100.0).is_err());
    }

    #[test]
    fn pin_offset_holds_inside_and_releases_outside() {
        let w = TriggerWindow::new("gallery", 1_000.0, 3_000.0).unwrap();
        assert_eq!(w.pin_offset(0.0), 0.0);
        assert_eq!(w.pin_offset(1_000.0), 0.0);
        assert_eq!(w.pin_offset(1_500.0), 500.0);
        assert_eq!(w.pin_offset(3_000.0), 2_000.0);
        assert_eq!(w.pin_offset(4_500.0), 2_000.0);
    }

    #[test]
    fn resolve_scrub_through_spans_the_transit() {
        let w = TriggerWindow::resolve("band", &TriggerSpec::scrub_through(), &geometry()).unwrap();
        // Opens when the top edge meets the viewport bottom...
        assert_eq!(w.start(), 2_000.0 - 720.0);
        // ...closes when the bottom edge leaves through the viewport top.
        assert_eq!(w.end(), 2_000.0 + 800.0);
    }

    #[test]
    fn resolve_pinned_uses_fixed_extent() {
        let spec = TriggerSpec::pinned("gallery-track", SpanSpec::Pixels(2_000.0));
        let w = TriggerWindow::resolve("gallery", &spec, &geometry()).unwrap();
        assert_eq!(w.start(), 2_000.0);
        assert_eq!(w.end(), 4_000.0);

        let spec = TriggerSpec::pinned("stage", SpanSpec::Viewports(2.0));
        let w = TriggerWindow::resolve("stage", &spec, &geometry()).unwrap();
        assert_eq!(w.end(), 2_000.0 + 1_440.0);
    }

    #[test]
    fn non_finite_geometry_is_rejected() {
        let mut g = geometry();
        g.top = f64::INFINITY;
        let err = TriggerWindow::resolve("s", &TriggerSpec::scrub_through(), &g).unwrap_err();
        assert!(matches!(err, BindingError::NonFiniteGeometry { .. }));
    }

    #[test]
    fn tween_samples_through_sub_span() {
        let t = Tween::new(Property::TranslateY, 100.0, 0.0).span(0.5, 1.0);
        assert_eq!(t.sample(0.0), 100.0);
        assert_eq!(t.sample(0.5), 100.0);
        assert_eq!(t.sample(0.75), 50.0);
        assert_eq!(t.sample(1.0), 0.0);
    }

    #[test]
    fn group_expansion_staggers_spans() {
        let group = GroupSpec::new(
            vec!["a".into(), "b".into(), "c".into()],
            vec![Tween::new(Property::Opacity, 0.0, 1.0).span(0.0, 0.25)],
            0.25,
        );
        let targets = group.expand("cards").unwrap();
        assert_eq!(targets.len(), 3);
        assert_eq!(targets[0].tweens[0].span, Span::new(0.0, 0.25));
        assert_eq!(targets[1].tweens[0].span, Span::new(0.25, 0.5));
        assert_eq!(targets[2].tweens[0].span, Span::new(0.5, 0.75));
    }

    #[test]
    fn empty_group_is_rejected() {
        let group = GroupSpec::new(vec![], vec![Tween::new(Property::Opacity, 0.0, 1.0)], 0.1);
        assert_eq!(
            group.expand("cards").unwrap_err(),
            BindingError::EmptyGroup {
                root: "cards".into()
            }
        );
    }

    #[test]
    fn runaway_stagger_is_rejected() {
        // Fourth member would start past the end of the window.
        let group = GroupSpec::new(
            (0..4).map(|i| format!("card-{i}")).collect(),
            vec![Tween::new(Property::Opacity, 0.0, 1.0).span(0.7, 0.9)],
            0.15,
        );
        assert!(matches!(
            group.expand("cards").unwrap_err(),
            BindingError::InvalidSpan { .. }
        ));
    }

    #[test]
    fn element_style_merges_properties() {
        let mut style = ElementStyle::default();
        assert!(style.is_empty());
        style.set(Property::TranslateX, -120.0);
        style.set(Property::Opacity, 0.5);
        assert_eq!(style.translate_x, Some(-120.0));
        assert_eq!(style.opacity, Some(0.5));
        assert_eq!(style.scale, None);
    }

    #[test]
    fn spec_round_trips_through_serde() {
        let spec = SectionSpec::new(
            "stage",
            TriggerSpec::pinned("stage-content", SpanSpec::Viewports(2.0)),
        )
        .target(TargetSpec::new(
            "stage-bg",
            vec![Tween::new(Property::TranslateX, 0.0, -200.0)],
        ));
        let json = serde_json::to_string(&spec).unwrap();
        let back: SectionSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }
}
