//! Binding registrar and per-frame evaluator.
//!
//! Sections register a [`SectionSpec`] together with measured geometry;
//! the registry resolves trigger windows, validates every descriptor and
//! owns the resulting bindings until the section unregisters. Evaluation
//! is a pure function of the published scroll position.

use std::collections::BTreeMap;

use super::binding::{
    BindingError, ElementStyle, Property, SectionGeometry, SectionSpec, TargetSpec, TriggerWindow,
};

/// One style write for the display layer to apply.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleOp {
    pub id: String,
    pub style: ElementStyle,
}

#[derive(Debug, Clone)]
struct Section {
    spec: SectionSpec,
    window: TriggerWindow,
    targets: Vec<TargetSpec>,
}

/// Registered sections keyed by root id. BTreeMap keeps evaluation order
/// deterministic across frames.
#[derive(Debug, Default)]
pub struct BindingRegistry {
    sections: BTreeMap<String, Section>,
}

impl BindingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and register a section's bindings, replacing any prior
    /// registration under the same root (setup is idempotent: registering
    /// twice leaves the same bindings as registering once).
    ///
    /// On error nothing changes: a previously registered set under this
    /// root stays active, and a fresh root stays absent.
    pub fn register(
        &mut self,
        spec: SectionSpec,
        geometry: &SectionGeometry,
    ) -> Result<usize, BindingError> {
        let window = TriggerWindow::resolve(&spec.root, &spec.trigger, geometry)?;
        let targets = spec.expanded_targets()?;
        let count = targets.len();
        self.sections.insert(
            spec.root.clone(),
            Section {
                spec,
                window,
                targets,
            },
        );
        Ok(count)
    }

    /// Remove a section and every binding it owns. Unknown roots are a
    /// no-op, so teardown is safe to run in any order and more than once.
    pub fn unregister(&mut self, root: &str) {
        self.sections.remove(root);
    }

    /// Recompute a section's trigger window from fresh geometry. Windows
    /// derived from a stale layout stay mis-calibrated forever otherwise;
    /// the caller invokes this for every section on viewport resize.
    pub fn relayout(
        &mut self,
        root: &str,
        geometry: &SectionGeometry,
    ) -> Result<(), BindingError> {
        let Some(section) = self.sections.get_mut(root) else {
            return Ok(());
        };
        section.window = TriggerWindow::resolve(root, &section.spec.trigger, geometry)?;
        Ok(())
    }

    /// Number of element bindings currently active under a root.
    pub fn active_bindings(&self, root: &str) -> usize {
        self.sections
            .get(root)
            .map(|s| s.targets.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn roots(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn window(&self, root: &str) -> Option<TriggerWindow> {
        self.sections.get(root).map(|s| s.window)
    }

    /// The spec currently registered under a root, if any. Lets callers
    /// tell an unchanged re-registration (relayout is enough) from a
    /// genuinely new spec.
    pub fn spec(&self, root: &str) -> Option<&SectionSpec> {
        self.sections.get(root).map(|s| &s.spec)
    }

    /// Evaluate every registered binding at the given scroll position,
    /// appending style writes to `out`. For pinned sections the pin
    /// offset is emitted before the section's target styles, so the held
    /// wrapper is positioned before anything inside it moves.
    pub fn evaluate(&self, pos: f64, out: &mut Vec<StyleOp>) {
        for section in self.sections.values() {
            let progress = section.window.progress(pos);

            if let Some(pin_target) = &section.spec.trigger.pin {
                let mut style = ElementStyle::default();
                style.set(Property::TranslateY, section.window.pin_offset(pos));
                out.push(StyleOp {
                    id: pin_target.clone(),
                    style,
                });
            }

            for target in &section.targets {
                let mut style = ElementStyle::default();
                for tween in &target.tweens {
                    style.set(tween.property, tween.sample(progress));
                }
                if !style.is_empty() {
                    out.push(StyleOp {
                        id: target.id.clone(),
                        style,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::binding::{GroupSpec, SpanSpec, TriggerSpec, Tween};
    use pretty_assertions::assert_eq;

    fn geometry(top: f64) -> SectionGeometry {
        SectionGeometry {
            top,
            height: 720.0,
            viewport_w: 1_280.0,
            viewport_h: 720.0,
        }
    }

    fn gallery_spec() -> SectionSpec {
        SectionSpec::new(
            "gallery",
            TriggerSpec::pinned("gallery-track", SpanSpec::Pixels(2_000.0)),
        )
        .target(TargetSpec::new(
            "gallery-track",
            vec![Tween::new(Property::TranslateX, 0.0, -4_000.0)],
        ))
    }

    #[test]
    fn register_twice_is_idempotent() {
        let mut registry = BindingRegistry::new();
        let first = registry.register(gallery_spec(), &geometry(1_000.0)).unwrap();
        let second = registry.register(gallery_spec(), &geometry(1_000.0)).unwrap();
        assert_eq!(first, second);
        assert_eq!(registry.active_bindings("gallery"), first);

        let mut ops = Vec::new();
        registry.evaluate(2_000.0, &mut ops);
        let track_ops = ops.iter().filter(|op| op.id == "gallery-track").count();
        // One pin write plus one tween write, not doubled.
        assert_eq!(track_ops, 2);
    }

    #[test]
    fn unregister_removes_every_binding() {
        let mut registry = BindingRegistry::new();
        registry.register(gallery_spec(), &geometry(1_000.0)).unwrap();
        registry.unregister("gallery");

        assert_eq!(registry.active_bindings("gallery"), 0);
        assert!(registry.is_empty());

        let mut ops = Vec::new();
        registry.evaluate(2_000.0, &mut ops);
        assert!(ops.is_empty(), "torn-down section still produced {ops:?}");

        // Idempotent and order-independent.
        registry.unregister("gallery");
        registry.unregister("never-registered");
    }

    #[test]
    fn failed_registration_registers_nothing() {
        let mut registry = BindingRegistry::new();
        let bad = SectionSpec::new(
            "cards",
            TriggerSpec::scrub_through(),
        )
        .group(GroupSpec::new(
            vec![],
            vec![Tween::new(Property::Opacity, 0.0, 1.0)],
            0.1,
        ));
        let err = registry.register(bad, &geometry(500.0)).unwrap_err();
        assert_eq!(
            err,
            BindingError::EmptyGroup {
                root: "cards".into()
            }
        );
        assert_eq!(registry.active_bindings("cards"), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn failed_replacement_keeps_prior_registration() {
        let mut registry = BindingRegistry::new();
        registry.register(gallery_spec(), &geometry(1_000.0)).unwrap();

        let mut degenerate = gallery_spec();
        degenerate.trigger.span = SpanSpec::Pixels(0.0);
        assert!(registry.register(degenerate, &geometry(1_000.0)).is_err());

        assert_eq!(registry.active_bindings("gallery"), 1);
        let w = registry.window("gallery").unwrap();
        assert_eq!(w.end() - w.start(), 2_000.0);
    }

    #[test]
    fn relayout_moves_the_window() {
        let mut registry = BindingRegistry::new();
        registry.register(gallery_spec(), &geometry(1_000.0)).unwrap();
        let before = registry.window("gallery").unwrap();
        assert_eq!(before.start(), 1_000.0);

        registry.relayout("gallery", &geometry(1_600.0)).unwrap();
        let after = registry.window("gallery").unwrap();
        assert_eq!(after.start(), 1_600.0);
        assert_eq!(after.end(), 3_600.0);

        // Evaluation uses the fresh window immediately.
        let mut ops = Vec::new();
        registry.evaluate(1_600.0, &mut ops);
        let pin = ops.iter().find(|op| op.id == "gallery-track").unwrap();
        assert_eq!(pin.style.translate_y, Some(0.0));

        // Unknown roots are ignored.
        registry.relayout("ghost", &geometry(0.0)).unwrap();
    }

    #[test]
    fn pin_holds_exactly_within_the_window() {
        let mut registry = BindingRegistry::new();
        registry.register(gallery_spec(), &geometry(1_000.0)).unwrap();

        let offsets: Vec<f64> = [0.0, 1_000.0, 1_500.0, 3_000.0, 4_000.0]
            .iter()
            .map(|pos| {
                let mut ops = Vec::new();
                registry.evaluate(*pos, &mut ops);
                ops.iter()
                    .find(|op| op.id == "gallery-track" && op.style.translate_y.is_some())
                    .and_then(|op| op.style.translate_y)
                    .unwrap()
            })
            .collect();
        assert_eq!(offsets, vec![0.0, 0.0, 500.0, 2_000.0, 2_000.0]);
    }

    #[test]
    fn evaluation_order_is_deterministic() {
        let mut registry = BindingRegistry::new();
        registry
            .register(
                SectionSpec::new("b-band", TriggerSpec::scrub_through()).target(TargetSpec::new(
                    "b-bg",
                    vec![Tween::new(Property::TranslateY, 0.0, 100.0)],
                )),
                &geometry(3_000.0),
            )
            .unwrap();
        registry
            .register(
                SectionSpec::new("a-band", TriggerSpec::scrub_through()).target(TargetSpec::new(
                    "a-bg",
                    vec![Tween::new(Property::TranslateY, 0.0, 100.0)],
                )),
                &geometry(1_000.0),
            )
            .unwrap();

        let mut ops = Vec::new();
        registry.evaluate(2_000.0, &mut ops);
        let ids: Vec<&str> = ops.iter().map(|op| op.id.as_str()).collect();
        assert_eq!(ids, vec!["a-bg", "b-bg"]);
    }

    #[test]
    fn staggered_group_reveals_in_sequence() {
        let mut registry = BindingRegistry::new();
        let spec = SectionSpec::new(
            "stage",
            TriggerSpec::pinned("stage-content", SpanSpec::Pixels(2_000.0)),
        )
        .group(GroupSpec::new(
            vec!["card-1".into(), "card-2".into(), "card-3".into()],
            vec![Tween::new(Property::TranslateY, 800.0, 0.0).span(0.0, 0.8)],
            0.1,
        ));
        registry.register(spec, &geometry(1_000.0)).unwrap();
        assert_eq!(registry.active_bindings("stage"), 3);

        // Halfway through: card-1 is further along than card-2 than card-3.
        let mut ops = Vec::new();
        registry.evaluate(2_000.0, &mut ops);
        let y = |id: &str| {
            ops.iter()
                .find(|op| op.id == id)
                .and_then(|op| op.style.translate_y)
                .unwrap()
        };
        assert!(y("card-1") < y("card-2"));
        assert!(y("card-2") < y("card-3"));
    }
}
