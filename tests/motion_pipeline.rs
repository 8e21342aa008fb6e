//! End-to-end scenarios for the motion pipeline: smoothed scroll input
//! driving registered bindings frame by frame, the way the browser frame
//! loop does it.

use pretty_assertions::assert_eq;
use zedx_landing::engine::{
    BindingRegistry, Easing, GroupSpec, Property, ScrollSource, SectionGeometry, SectionSpec,
    SpanSpec, StyleOp, TargetSpec, TriggerSpec, Tween,
};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn viewport() -> SectionGeometry {
    SectionGeometry {
        top: 1_000.0,
        height: 720.0,
        viewport_w: 1_280.0,
        viewport_h: 720.0,
    }
}

fn gallery() -> SectionSpec {
    SectionSpec::new(
        "gallery",
        TriggerSpec::pinned("gallery-pin", SpanSpec::Pixels(2_000.0)),
    )
    .target(TargetSpec::new(
        "gallery-track",
        vec![Tween::new(Property::TranslateX, 0.0, -2_000.0)],
    ))
}

fn style_for<'a>(ops: &'a [StyleOp], id: &str) -> Option<&'a StyleOp> {
    ops.iter().find(|op| op.id == id)
}

/// One simulated frame: advance the source, then evaluate dependents
/// against the position it just published: the same producer-before-
/// consumer order the frame loop enforces.
fn frame(
    scroll: &mut ScrollSource,
    registry: &BindingRegistry,
    now_ms: f64,
) -> (f64, Vec<StyleOp>) {
    let pos = scroll.tick(now_ms);
    let mut ops = Vec::new();
    registry.evaluate(pos, &mut ops);
    (pos, ops)
}

#[test]
fn scrubbed_track_follows_smoothed_scroll_monotonically() {
    let mut scroll = ScrollSource::new();
    scroll.set_bounds(10_000.0);
    let mut registry = BindingRegistry::new();
    registry.register(gallery(), &viewport()).unwrap();

    // Wheel lands the target in the middle of the pinned window.
    scroll.add_delta(2_000.0);

    let mut last_x = f64::INFINITY;
    for i in 0..=120 {
        let (pos, ops) = frame(&mut scroll, &registry, FRAME_MS * i as f64);
        let track = style_for(&ops, "gallery-track").unwrap();
        let x = track.style.translate_x.unwrap();

        // Progress is a pure function of the published position.
        let expected = -((pos - 1_000.0).clamp(0.0, 2_000.0));
        assert!((x - expected).abs() < 1e-9, "frame {i}: {x} vs {expected}");
        // And the motion never reverses while the target is ahead.
        assert!(x <= last_x + 1e-9, "track reversed at frame {i}");
        last_x = x;
    }

    // Settled: halfway through the window, track halfway across.
    assert!(scroll.is_settled());
    assert_eq!(scroll.position(), 2_000.0);
    assert_eq!(last_x, -1_000.0);
}

#[test]
fn pin_releases_on_both_sides_of_the_window() {
    let mut registry = BindingRegistry::new();
    registry.register(gallery(), &viewport()).unwrap();

    for (pos, expected) in [
        (0.0, 0.0),
        (999.0, 0.0),
        (1_000.0, 0.0),
        (2_500.0, 1_500.0),
        (3_000.0, 2_000.0),
        (8_000.0, 2_000.0),
    ] {
        let mut ops = Vec::new();
        registry.evaluate(pos, &mut ops);
        let pin = ops
            .iter()
            .find(|op| op.id == "gallery-pin")
            .and_then(|op| op.style.translate_y)
            .unwrap();
        assert_eq!(pin, expected, "at pos {pos}");
    }
}

#[test]
fn teardown_mid_scroll_silences_the_section() {
    let mut scroll = ScrollSource::new();
    scroll.set_bounds(10_000.0);
    let mut registry = BindingRegistry::new();
    registry.register(gallery(), &viewport()).unwrap();
    scroll.add_delta(2_000.0);

    for i in 0..10 {
        frame(&mut scroll, &registry, FRAME_MS * i as f64);
    }

    registry.unregister("gallery");
    assert_eq!(registry.active_bindings("gallery"), 0);

    // The loop keeps ticking; the torn-down section gets zero writes.
    let (_, ops) = frame(&mut scroll, &registry, FRAME_MS * 10.0);
    assert!(ops.is_empty());
}

#[test]
fn resize_recalibrates_the_window_between_frames() {
    let mut scroll = ScrollSource::new();
    scroll.set_bounds(20_000.0);
    let mut registry = BindingRegistry::new();
    registry.register(gallery(), &viewport()).unwrap();

    scroll.jump(1_500.0);
    let (_, ops) = frame(&mut scroll, &registry, 0.0);
    assert_eq!(
        style_for(&ops, "gallery-pin").unwrap().style.translate_y,
        Some(500.0)
    );

    // Layout shifts the section 600px down; the stale window would keep
    // reporting progress, the recomputed one knows we are above it.
    let moved = SectionGeometry {
        top: 2_100.0,
        ..viewport()
    };
    registry.relayout("gallery", &moved).unwrap();

    let (_, ops) = frame(&mut scroll, &registry, FRAME_MS);
    assert_eq!(
        style_for(&ops, "gallery-pin").unwrap().style.translate_y,
        Some(0.0)
    );
}

#[test]
fn staggered_reveal_completes_for_every_member() {
    let mut registry = BindingRegistry::new();
    let spec = SectionSpec::new(
        "stage",
        TriggerSpec::pinned("stage-pin", SpanSpec::Viewports(2.0)),
    )
    .group(GroupSpec::new(
        vec!["card-1".into(), "card-2".into(), "card-3".into()],
        vec![Tween::new(Property::TranslateY, 900.0, 0.0)
            .easing(Easing::PowerOut { n: 2 })
            .span(0.05, 0.65)],
        0.12,
    ));
    registry.register(spec, &viewport()).unwrap();
    assert_eq!(registry.active_bindings("stage"), 3);

    // Past the end of the window every card has landed.
    let mut ops = Vec::new();
    registry.evaluate(1_000.0 + 2.0 * 720.0, &mut ops);
    for id in ["card-1", "card-2", "card-3"] {
        assert_eq!(
            style_for(&ops, id).unwrap().style.translate_y,
            Some(0.0),
            "{id} did not finish"
        );
    }

    // Before the window opens none of them have moved off the start.
    let mut ops = Vec::new();
    registry.evaluate(0.0, &mut ops);
    for id in ["card-1", "card-2", "card-3"] {
        assert_eq!(style_for(&ops, id).unwrap().style.translate_y, Some(900.0));
    }
}

#[test]
fn external_jump_snaps_bindings_immediately() {
    let mut scroll = ScrollSource::new();
    scroll.set_bounds(10_000.0);
    let mut registry = BindingRegistry::new();
    registry.register(gallery(), &viewport()).unwrap();

    // Scrollbar drag to the end of the pinned window: no interpolation,
    // next frame reflects the adopted position exactly.
    scroll.jump(3_000.0);
    let (pos, ops) = frame(&mut scroll, &registry, 0.0);
    assert_eq!(pos, 3_000.0);
    assert_eq!(
        style_for(&ops, "gallery-track").unwrap().style.translate_x,
        Some(-2_000.0)
    );
}
