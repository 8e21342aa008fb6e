use yew::prelude::*;

use crate::components::media::FallbackImg;
use crate::config::assets;

/// Static media grid with hover treatments only: no scroll bindings.
#[function_component(ParallaxGrid)]
pub fn parallax_grid() -> Html {
    let css = r#"
        .pgrid {
            padding: 5rem 3rem;
            background: #080808;
        }
        .pgrid-layout {
            display: grid;
            grid-template-columns: 1fr;
            gap: 2rem;
        }
        @media (min-width: 768px) {
            .pgrid-layout { grid-template-columns: 1fr 1fr; }
        }
        .pgrid-tile {
            position: relative;
            overflow: hidden;
            background: #111;
            border-radius: 0.125rem;
            border: 1px solid rgba(255,255,255,0.05);
        }
        .pgrid-tile-tall { height: 600px; }
        .pgrid-stack {
            display: grid;
            grid-template-rows: 1fr 1fr;
            gap: 2rem;
            height: 600px;
        }
        .pgrid-tile video,
        .pgrid-tile img,
        .pgrid-tile .media-fallback {
            width: 100%;
            height: 100%;
            object-fit: cover;
            opacity: 0.7;
            transition: transform 1s, opacity 1s;
        }
        .pgrid-tile:hover video,
        .pgrid-tile:hover img {
            transform: scale(1.1);
            opacity: 1;
        }
        .pgrid-shade {
            position: absolute;
            inset: 0;
            background: linear-gradient(to top, #000, transparent, transparent);
            opacity: 0.8;
        }
        .pgrid-label {
            position: absolute;
            bottom: 2rem;
            left: 2rem;
            z-index: 10;
        }
        .pgrid-label h3 {
            font-size: 3rem;
            font-family: 'Barlow Condensed', sans-serif;
            font-weight: 800;
            text-transform: uppercase;
            color: #fff;
            margin: 0;
        }
        .pgrid-label.small h3 { font-size: 1.875rem; }
        .pgrid-label p {
            color: var(--z-cyan);
            font-weight: 700;
            margin: 0.5rem 0 0;
        }
    "#;

    html! {
        <section class="pgrid">
            <style>{css}</style>
            <div class="pgrid-layout">
                <div class="pgrid-tile pgrid-tile-tall">
                    <video src={assets::EARBUD_VIDEO} autoplay=true loop=true muted=true playsinline=true></video>
                    <div class="pgrid-shade"></div>
                    <div class="pgrid-label">
                        <h3>{"Vision VR"}</h3>
                        <p>{"Ready Player One"}</p>
                    </div>
                </div>
                <div class="pgrid-stack">
                    <div class="pgrid-tile">
                        <FallbackImg src={assets::IMG_KEYBOARD} alt="Mechanical keyboard" />
                        <div class="pgrid-label small">
                            <h3>{"Tactile Mech"}</h3>
                        </div>
                    </div>
                    <div class="pgrid-tile">
                        <FallbackImg src={assets::IMG_MOUSE} alt="Gaming mouse" />
                        <div class="pgrid-label small">
                            <h3>{"Precision Aim"}</h3>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
