use yew::prelude::*;

use crate::config::assets;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    /// True once the loader has finished; gates the entrance transition.
    pub revealed: bool,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let css = r#"
        .hero {
            position: relative;
            width: 100%;
            height: 100vh;
            overflow: hidden;
            background: #000;
        }
        .hero-video-wrap {
            position: absolute;
            inset: 0;
            pointer-events: none;
            overflow: hidden;
            z-index: 0;
        }
        .hero-video-wrap video {
            width: 100%;
            height: 100%;
            object-fit: cover;
        }
        .hero-shade-bottom {
            position: absolute;
            inset: 0;
            background: linear-gradient(to top, #000, transparent, rgba(0,0,0,0.3));
        }
        .hero-shade-left {
            position: absolute;
            inset: 0;
            background: linear-gradient(to right, rgba(0,0,0,0.5), transparent);
        }
        .hero-content {
            position: relative;
            z-index: 10;
            height: 100%;
            display: flex;
            flex-direction: column;
            justify-content: center;
            padding: 0 5rem;
            max-width: 1600px;
            margin: 0 auto;
            opacity: 0;
            transform: translateY(100px);
            transition: opacity 1.5s cubic-bezier(0.16, 1, 0.3, 1),
                        transform 1.5s cubic-bezier(0.16, 1, 0.3, 1);
            transition-delay: 0.3s;
        }
        .hero-content.revealed {
            opacity: 1;
            transform: translateY(0);
        }
        .hero-badge {
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            border: 1px solid rgba(0, 242, 255, 0.3);
            background: rgba(0,0,0,0.4);
            backdrop-filter: blur(12px);
            border-radius: 9999px;
            padding: 0.25rem 1rem;
            width: fit-content;
            margin-bottom: 1.5rem;
        }
        .hero-badge-dot {
            width: 0.5rem;
            height: 0.5rem;
            background: var(--z-cyan);
            border-radius: 9999px;
            animation: hero-pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
        }
        @keyframes hero-pulse { 50% { opacity: 0.4; } }
        .hero-badge span:last-child {
            color: var(--z-cyan);
            font-family: 'Barlow Condensed', sans-serif;
            text-transform: uppercase;
            letter-spacing: 0.2em;
            font-size: 0.875rem;
            font-weight: 700;
        }
        .hero-title {
            font-size: clamp(4.5rem, 9vw, 130px);
            line-height: 0.85;
            font-family: 'Barlow Condensed', sans-serif;
            font-weight: 800;
            text-transform: uppercase;
            font-style: italic;
            color: #fff;
            margin: 0;
        }
        .hero-title .accent {
            background: linear-gradient(to right, var(--z-cyan), var(--z-blue));
            -webkit-background-clip: text;
            background-clip: text;
            color: transparent;
        }
        .hero-copy {
            margin-top: 2rem;
            color: #d1d5db;
            max-width: 28rem;
            font-size: 1.125rem;
            font-weight: 500;
            border-left: 2px solid var(--z-cyan);
            padding-left: 1.5rem;
        }
        .hero-cta {
            margin-top: 2.5rem;
            background: var(--z-cyan);
            color: #000;
            border: none;
            padding: 1rem 2.5rem;
            font-family: 'Barlow Condensed', sans-serif;
            font-weight: 800;
            text-transform: uppercase;
            letter-spacing: 0.2em;
            font-size: 1rem;
            cursor: pointer;
            transform: skewX(-10deg);
            transition: background 0.3s;
            width: fit-content;
        }
        .hero-cta:hover { background: #fff; }
        .hero-cta span { display: block; transform: skewX(10deg); }
        @media (max-width: 768px) {
            .hero-content { padding: 0 1.5rem; }
        }
    "#;

    let content_class = classes!("hero-content", props.revealed.then_some("revealed"));

    html! {
        <header class="hero" id="hero">
            <style>{css}</style>
            <div class="hero-video-wrap">
                <video src={assets::BANNER_VIDEO} autoplay=true loop=true muted=true playsinline=true></video>
            </div>
            <div class="hero-shade-bottom"></div>
            <div class="hero-shade-left"></div>
            <div class={content_class}>
                <div class="hero-badge">
                    <span class="hero-badge-dot"></span>
                    <span>{"New Release"}</span>
                </div>
                <h1 class="hero-title">
                    {"Silence"}<br />{"The "}
                    <span class="accent">{"Noise"}</span>
                </h1>
                <p class="hero-copy">
                    {"Experience the Z-1 Earbuds. Featuring adaptive ANC and 50mm dynamic drivers."}
                </p>
                <button class="hero-cta"><span>{"Pre-Order Now"}</span></button>
            </div>
        </header>
    }
}
