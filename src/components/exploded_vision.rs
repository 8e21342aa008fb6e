use yew::prelude::*;

use crate::components::icons;
use crate::components::media::FallbackImg;
use crate::config::assets;
use crate::dom::use_section_bindings;
use crate::engine::{GroupSpec, Property, SectionSpec, SpanSpec, TargetSpec, TriggerSpec, Tween};

/// Pinned product-deconstruction stage. The section is held for two extra
/// viewport-heights of scroll while the display text drifts out, the
/// center image settles, and the three spec cards fly in from below as a
/// staggered group.
#[function_component(ExplodedVision)]
pub fn exploded_vision() -> Html {
    use_section_bindings("exploded", |_geometry| {
        SectionSpec::new(
            "exploded",
            TriggerSpec::pinned("exploded-pin", SpanSpec::Viewports(2.0)),
        )
        .target(TargetSpec::new(
            "exploded-bg-text",
            vec![
                Tween::new(Property::TranslateX, 0.0, -200.0),
                Tween::new(Property::Opacity, 1.0, 0.5),
            ],
        ))
        .target(TargetSpec::new(
            "exploded-img",
            vec![
                Tween::new(Property::Scale, 1.0, 0.8),
                Tween::new(Property::Rotate, 0.0, 5.0),
                Tween::new(Property::TranslateY, 0.0, 50.0),
            ],
        ))
        .group(GroupSpec::new(
            vec![
                "exploded-card-1".into(),
                "exploded-card-2".into(),
                "exploded-card-3".into(),
            ],
            vec![
                Tween::new(Property::TranslateY, 900.0, 0.0).span(0.05, 0.65),
                Tween::new(Property::Opacity, 0.0, 1.0).span(0.05, 0.35),
            ],
            0.12,
        ))
    });

    let css = r#"
        .exploded {
            position: relative;
            height: 300vh;
            background: #020202;
        }
        .exploded-pin {
            height: 100vh;
            overflow: hidden;
            position: relative;
            display: flex;
            align-items: center;
            justify-content: center;
            will-change: transform;
        }
        .exploded-backdrop {
            position: absolute;
            inset: 0;
            opacity: 0.1;
            user-select: none;
            pointer-events: none;
        }
        .exploded-backdrop img,
        .exploded-backdrop .media-fallback {
            width: 100%;
            height: 100%;
            object-fit: cover;
            filter: grayscale(1);
            opacity: 0.3;
        }
        .exploded-bg-text {
            position: absolute;
            inset: 0;
            display: flex;
            align-items: center;
            justify-content: center;
            pointer-events: none;
            z-index: 0;
            will-change: transform, opacity;
        }
        .exploded-bg-text h1 {
            font-size: 20vw;
            color: rgba(255,255,255,0.05);
            font-family: 'Barlow Condensed', sans-serif;
            font-weight: 800;
            white-space: nowrap;
            line-height: 1;
            margin: 0;
        }
        .exploded-stage {
            position: relative;
            z-index: 10;
            width: 300px;
            aspect-ratio: 1;
            will-change: transform;
        }
        @media (min-width: 768px) {
            .exploded-stage { width: 500px; }
        }
        .exploded-stage-glow {
            position: absolute;
            inset: 0;
            background: rgba(0, 242, 255, 0.2);
            filter: blur(100px);
            border-radius: 9999px;
        }
        .exploded-stage img,
        .exploded-stage .media-fallback {
            width: 100%;
            height: 100%;
            object-fit: contain;
            position: relative;
            filter: drop-shadow(0 0 50px rgba(0, 242, 255, 0.3));
        }
        .exploded-cards {
            position: absolute;
            inset: 0;
            z-index: 20;
            pointer-events: none;
            width: 100%;
            max-width: 1400px;
            margin: 0 auto;
        }
        .exploded-card {
            position: absolute;
            background: rgba(0,0,0,0.8);
            backdrop-filter: blur(12px);
            border: 1px solid rgba(0, 242, 255, 0.3);
            padding: 1.5rem;
            border-radius: 0.5rem;
            width: 16rem;
            will-change: transform, opacity;
            opacity: 0;
        }
        .exploded-card .icon {
            width: 1.875rem;
            height: 1.875rem;
            color: var(--z-cyan);
            margin-bottom: 1rem;
        }
        .exploded-card h3 {
            color: #fff;
            font-family: 'Barlow Condensed', sans-serif;
            font-weight: 700;
            font-size: 1.5rem;
            text-transform: uppercase;
            margin: 0;
        }
        .exploded-card p {
            color: #9ca3af;
            font-size: 0.875rem;
            margin: 0.5rem 0 0;
        }
        .exploded-card-tl { top: 20%; left: 10%; }
        .exploded-card-tr { top: 15%; right: 10%; text-align: right; }
        .exploded-card-tr .icon { margin-left: auto; }
        .exploded-card-bc {
            bottom: 10%;
            left: calc(50% - 10rem);
            width: 20rem;
            display: flex;
            gap: 1rem;
            align-items: center;
        }
        .exploded-card-bc .icon {
            width: 2.25rem;
            height: 2.25rem;
            margin-bottom: 0;
            flex-shrink: 0;
        }
    "#;

    html! {
        <section class="exploded" id="exploded">
            <style>{css}</style>
            <div class="exploded-pin" id="exploded-pin">
                <div class="exploded-backdrop">
                    <FallbackImg src={assets::IMG_GRID_DARK} alt="" />
                </div>
                <div class="exploded-bg-text" id="exploded-bg-text">
                    <h1>{"DECONSTRUCTED"}</h1>
                </div>
                <div class="exploded-stage" id="exploded-img">
                    <div class="exploded-stage-glow"></div>
                    <FallbackImg src={assets::IMG_EXPLODED} alt="Exploded view of the Z-1 earbud" />
                </div>
                <div class="exploded-cards">
                    <div class="exploded-card exploded-card-tl" id="exploded-card-1">
                        { icons::aperture("") }
                        <h3>{"Hybrid Drivers"}</h3>
                        <p>{"10mm Beryllium coated dynamic drivers for deep bass."}</p>
                    </div>
                    <div class="exploded-card exploded-card-tr" id="exploded-card-2">
                        { icons::wifi("") }
                        <h3>{"Low Latency"}</h3>
                        <p>{"15ms response time using HyperLink\u{2122} proprietary band."}</p>
                    </div>
                    <div class="exploded-card exploded-card-bc" id="exploded-card-3">
                        { icons::activity("") }
                        <div>
                            <h3>{"Active Cancellation"}</h3>
                            <p>{"-45dB noise reduction."}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
