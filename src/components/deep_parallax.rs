use yew::prelude::*;

use crate::components::media::FallbackImg;
use crate::config::assets;
use crate::dom::use_section_bindings;
use crate::engine::{Property, SectionSpec, TargetSpec, TriggerSpec, Tween};

/// Parallax band: the oversized background drifts down and scales up a
/// touch while the section transits the viewport, scrubbed linearly.
#[function_component(DeepParallax)]
pub fn deep_parallax() -> Html {
    use_section_bindings("depth", |_geometry| {
        SectionSpec::new("depth", TriggerSpec::scrub_through()).target(TargetSpec::new(
            "depth-bg",
            vec![
                Tween::new(Property::TranslateY, 0.0, 100.0),
                Tween::new(Property::Scale, 1.0, 1.1),
            ],
        ))
    });

    let css = r#"
        .depth {
            position: relative;
            width: 100%;
            height: 80vh;
            overflow: hidden;
            background: #000;
            display: flex;
            align-items: center;
            justify-content: center;
            border-top: 1px solid rgba(255,255,255,0.05);
        }
        .depth-bg {
            position: absolute;
            inset: 0;
            width: 100%;
            height: 120%;
            top: -10%;
            will-change: transform;
        }
        .depth-bg img,
        .depth-bg .media-fallback {
            width: 100%;
            height: 100%;
            object-fit: cover;
            opacity: 0.2;
        }
        .depth-bg-shade {
            position: absolute;
            inset: 0;
            background: linear-gradient(to bottom, #050505, transparent, #050505);
        }
        .depth-content {
            position: relative;
            z-index: 10;
            width: 100%;
            max-width: 1400px;
            padding: 0 1.5rem;
            text-align: center;
        }
        .depth-kicker {
            color: var(--z-cyan);
            font-family: 'Barlow Condensed', sans-serif;
            text-transform: uppercase;
            letter-spacing: 0.2em;
            font-size: 1.25rem;
            margin: 0 0 1rem;
        }
        .depth-title {
            font-size: clamp(3.75rem, 8vw, 100px);
            line-height: 0.9;
            font-family: 'Barlow Condensed', sans-serif;
            font-weight: 800;
            text-transform: uppercase;
            color: #fff;
            font-style: italic;
            margin: 0;
        }
        .depth-copy {
            color: #9ca3af;
            margin: 2rem auto 0;
            max-width: 32rem;
            font-size: 1.125rem;
        }
    "#;

    html! {
        <section class="depth" id="depth">
            <style>{css}</style>
            <div class="depth-bg" id="depth-bg">
                <FallbackImg src={assets::IMG_OVEREAR} alt="" />
                <div class="depth-bg-shade"></div>
            </div>
            <div class="depth-content">
                <h4 class="depth-kicker">{"The Depth of Sound"}</h4>
                <h2 class="depth-title">{"Immersive"}<br />{"Reality"}</h2>
                <p class="depth-copy">
                    {"Our spatial audio engine maps sound in 3D space, placing you in the \
                      center of the action. Hear the unseen."}
                </p>
            </div>
        </section>
    }
}
