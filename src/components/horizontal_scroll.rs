use yew::prelude::*;

use crate::components::icons;
use crate::components::media::FallbackImg;
use crate::config::assets;
use crate::dom::use_section_bindings;
use crate::engine::{Property, SectionSpec, SpanSpec, TargetSpec, TriggerSpec, Tween};

struct SpecCard {
    title: &'static str,
    desc: &'static str,
    icon: fn(&str) -> Html,
    img: &'static str,
}

const TECH_SPECS: [SpecCard; 4] = [
    SpecCard {
        title: "Z-1 Neural Chip",
        desc: "Proprietary silicon for ultra-low latency processing.",
        icon: icons::cpu,
        img: assets::IMG_CIRCUIT,
    },
    SpecCard {
        title: "Infinite Power",
        desc: "72h continuous playback with active cooling.",
        icon: icons::battery_charging,
        img: assets::IMG_TECH_ABSTRACT,
    },
    SpecCard {
        title: "360\u{b0} Spatial",
        desc: "Head-tracking soundstage for total immersion.",
        icon: icons::volume,
        img: assets::IMG_STUDIO,
    },
    SpecCard {
        title: "HyperLink 5.4",
        desc: "Lossless wireless transmission protocol.",
        icon: icons::bluetooth,
        img: assets::IMG_WORKSPACE,
    },
];

/// Total cards including the intro panel.
const CARDS: f64 = 5.0;

/// Pinned gallery: while the trigger window is active the viewport-high
/// wrapper is held in place and vertical scroll drives the 500vw track
/// horizontally, one viewport-width of travel per viewport-width of
/// scroll. The outer section provides the scroll runway.
#[function_component(HorizontalScroll)]
pub fn horizontal_scroll() -> Html {
    use_section_bindings("gallery", |geometry| {
        let travel = geometry.viewport_w * (CARDS - 1.0);
        SectionSpec::new(
            "gallery",
            TriggerSpec::pinned("gallery-pin", SpanSpec::Pixels(travel)),
        )
        .target(TargetSpec::new(
            "gallery-track",
            vec![Tween::new(Property::TranslateX, 0.0, -travel)],
        ))
    });

    let css = r#"
        .gallery {
            position: relative;
            height: calc(100vh + 400vw);
            background: #050505;
            border-top: 1px solid rgba(255,255,255,0.05);
        }
        .gallery-pin {
            height: 100vh;
            overflow: hidden;
            will-change: transform;
        }
        .gallery-track {
            height: 100%;
            width: 500vw;
            display: flex;
            flex-direction: row;
            position: relative;
            will-change: transform;
        }
        .gallery-card {
            width: 100vw;
            height: 100%;
            display: flex;
            align-items: center;
            justify-content: center;
            padding: 2.5rem;
            background: #050505;
            border-right: 1px solid rgba(255,255,255,0.05);
            position: relative;
            box-sizing: border-box;
        }
        .gallery-card-intro {
            flex-direction: column;
            align-items: flex-start;
            justify-content: center;
            padding: 0 8rem;
            background: linear-gradient(to bottom right, #0a0a0a, #000);
        }
        .gallery-kicker {
            color: var(--z-cyan);
            font-family: 'Barlow Condensed', sans-serif;
            text-transform: uppercase;
            letter-spacing: 0.2em;
            font-size: 1.25rem;
            margin: 0 0 1rem;
        }
        .gallery-heading {
            font-size: clamp(3.75rem, 9vw, 8rem);
            font-family: 'Barlow Condensed', sans-serif;
            font-weight: 800;
            color: #fff;
            text-transform: uppercase;
            font-style: italic;
            margin: 0 0 2rem;
            line-height: 1;
        }
        .gallery-scroll-hint {
            display: flex;
            align-items: center;
            gap: 1rem;
            color: #6b7280;
            animation: gallery-bounce 1.5s infinite;
        }
        .gallery-scroll-hint .icon { width: 1.5rem; height: 1.5rem; }
        .gallery-scroll-hint span {
            text-transform: uppercase;
            letter-spacing: 0.2em;
            font-size: 0.875rem;
        }
        @keyframes gallery-bounce {
            0%, 100% { transform: translateY(0); }
            50% { transform: translateY(-8px); }
        }
        .gallery-index {
            position: absolute;
            inset: 0;
            display: flex;
            align-items: center;
            justify-content: center;
            opacity: 0.05;
            pointer-events: none;
        }
        .gallery-index span {
            font-size: 40vw;
            font-family: 'Barlow Condensed', sans-serif;
            font-weight: 800;
            color: #fff;
        }
        .gallery-card-grid {
            max-width: 72rem;
            width: 100%;
            display: grid;
            grid-template-columns: 1fr;
            gap: 3rem;
            align-items: center;
            z-index: 10;
        }
        @media (min-width: 768px) {
            .gallery-card-grid { grid-template-columns: 1fr 1fr; }
        }
        .gallery-spec-icon {
            width: 5rem;
            height: 5rem;
            background: var(--z-cyan);
            border-radius: 9999px;
            display: flex;
            align-items: center;
            justify-content: center;
            color: #000;
            margin-bottom: 2rem;
            box-shadow: 0 0 30px rgba(0, 242, 255, 0.4);
        }
        .gallery-spec-icon .icon { width: 2.25rem; height: 2.25rem; }
        .gallery-spec-title {
            font-size: 3.75rem;
            font-family: 'Barlow Condensed', sans-serif;
            font-weight: 800;
            text-transform: uppercase;
            color: #fff;
            margin: 0 0 1.5rem;
        }
        .gallery-spec-desc {
            color: #9ca3af;
            font-size: 1.25rem;
            line-height: 1.6;
            margin: 0;
        }
        .gallery-spec-media {
            height: 500px;
            background: #111;
            border-radius: 1rem;
            overflow: hidden;
            border: 1px solid rgba(255,255,255,0.1);
            position: relative;
        }
        .gallery-spec-media img,
        .gallery-spec-media .media-fallback {
            width: 100%;
            height: 100%;
            object-fit: cover;
            opacity: 0.6;
            transition: transform 0.7s, opacity 0.7s;
        }
        .gallery-spec-media:hover img {
            transform: scale(1.1);
            opacity: 1;
        }
        .gallery-spec-shade {
            position: absolute;
            inset: 0;
            background: linear-gradient(to top, #000, transparent, transparent);
        }
    "#;

    html! {
        <section class="gallery" id="gallery">
            <style>{css}</style>
            <div class="gallery-pin" id="gallery-pin">
                <div class="gallery-track" id="gallery-track">
                    <div class="gallery-card gallery-card-intro">
                        <h4 class="gallery-kicker">{"Engineering"}</h4>
                        <h2 class="gallery-heading">{"Inside The"}<br />{"Architecture"}</h2>
                        <div class="gallery-scroll-hint">
                            { icons::arrow_right("") }
                            <span>{"Scroll to Explore"}</span>
                        </div>
                    </div>
                    { for TECH_SPECS.iter().enumerate().map(|(i, spec)| html! {
                        <div class="gallery-card" key={i}>
                            <div class="gallery-index"><span>{i + 1}</span></div>
                            <div class="gallery-card-grid">
                                <div>
                                    <div class="gallery-spec-icon">{ (spec.icon)("") }</div>
                                    <h3 class="gallery-spec-title">{spec.title}</h3>
                                    <p class="gallery-spec-desc">{spec.desc}</p>
                                </div>
                                <div class="gallery-spec-media">
                                    <FallbackImg src={spec.img} alt={spec.title} />
                                    <div class="gallery-spec-shade"></div>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
