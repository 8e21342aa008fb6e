use gloo_timers::callback::Interval;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons;
use crate::components::media::FallbackImg;
use crate::config::{assets, autoplay};
use crate::dom::{now_ms, use_section_bindings};
use crate::engine::{
    Autoplay, Carousel, Direction, Property, SectionSpec, TargetSpec, TriggerSpec, Tween,
};

enum SlideMedia {
    Video(&'static str),
    Image(&'static str),
}

struct Slide {
    media: SlideMedia,
    text: &'static str,
    sub: &'static str,
}

const SLIDES: [Slide; 4] = [
    Slide {
        media: SlideMedia::Video(assets::EARBUD_VIDEO),
        text: "Urban Rhythm",
        sub: "Lose yourself in the city",
    },
    Slide {
        media: SlideMedia::Image(assets::IMG_TECH_ABSTRACT),
        text: "Studio Quality",
        sub: "Precision in every note",
    },
    Slide {
        media: SlideMedia::Video(assets::EARBUD_VIDEO),
        text: "Game Mode",
        sub: "Zero latency reaction",
    },
    Slide {
        media: SlideMedia::Image(assets::IMG_NEON),
        text: "Neon Dreams",
        sub: "Light up your setup",
    },
];

/// Full-bleed lifestyle carousel. Slides autoplay on a fixed interval and
/// manual navigation opens a quiet window before autoplay resumes; the
/// whole band also scales up slightly as it transits the viewport.
#[function_component(CinematicSlider)]
pub fn cinematic_slider() -> Html {
    use_section_bindings("lifestyle", |_geometry| {
        SectionSpec::new("lifestyle", TriggerSpec::scrub_through()).target(TargetSpec::new(
            "lifestyle-inner",
            vec![Tween::new(Property::Scale, 1.0, 1.05)],
        ))
    });

    let carousel = use_mut_ref(|| {
        Carousel::new(
            SLIDES.len(),
            Some(Autoplay {
                interval_ms: autoplay::INTERVAL_MS,
                quiet_ms: autoplay::QUIET_MS,
            }),
        )
    });
    // (active, previous, direction): previous drives the exit treatment.
    let state = use_state(|| (0usize, None::<usize>, Direction::Forward));

    {
        let carousel = carousel.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let pulse = Interval::new(autoplay::PULSE_MS, move || {
                    let mut slot = carousel.borrow_mut();
                    if let Some(c) = slot.as_mut() {
                        let before = c.active();
                        if let Some(idx) = c.poll(now_ms()) {
                            state.set((idx, Some(before), c.direction()));
                        }
                    }
                });
                move || drop(pulse)
            },
            (),
        );
    }

    let nav = |forward: bool| {
        let carousel = carousel.clone();
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut slot = carousel.borrow_mut();
            if let Some(c) = slot.as_mut() {
                let before = c.active();
                let idx = if forward {
                    c.next_manual(now_ms())
                } else {
                    c.prev_manual(now_ms())
                };
                state.set((idx, Some(before), c.direction()));
            }
        })
    };

    let css = r#"
        .cine {
            padding: 6rem 0;
            background: #000;
            position: relative;
            overflow: hidden;
        }
        .cine-inner { will-change: transform; }
        .cine-head {
            padding: 0 5rem;
            margin-bottom: 3rem;
            display: flex;
            justify-content: space-between;
            align-items: flex-end;
            position: relative;
            z-index: 10;
        }
        .cine-title {
            font-size: clamp(3.75rem, 8vw, 6rem);
            font-family: 'Barlow Condensed', sans-serif;
            font-weight: 800;
            color: #fff;
            text-transform: uppercase;
            font-style: italic;
            margin: 0;
        }
        .cine-title .accent {
            background: linear-gradient(to right, var(--z-cyan), var(--z-blue));
            -webkit-background-clip: text;
            background-clip: text;
            color: transparent;
        }
        .cine-rule {
            width: 8rem;
            height: 4px;
            background: var(--z-cyan);
        }
        .cine-stage {
            position: relative;
            width: 92%;
            margin: 0 auto;
            height: 60vh;
        }
        @media (min-width: 768px) {
            .cine-stage { height: 80vh; }
        }
        .cine-slide {
            position: absolute;
            inset: 0;
            overflow: hidden;
            background: #050505;
            border-radius: 0.75rem;
            border: 1px solid rgba(255,255,255,0.05);
            opacity: 0;
            z-index: 0;
            transition: transform 1.2s cubic-bezier(0.76, 0, 0.24, 1),
                        opacity 1.2s cubic-bezier(0.76, 0, 0.24, 1);
            pointer-events: none;
        }
        .cine-slide.active {
            opacity: 1;
            transform: none;
            z-index: 2;
            pointer-events: auto;
        }
        .cine-slide.enter-fwd { transform: translateX(100%); }
        .cine-slide.enter-back { transform: translateX(-100%); }
        .cine-slide.exit-fwd {
            transform: translateX(-20%);
            opacity: 0;
            z-index: 1;
            box-shadow: 0 0 80px rgba(0,0,0,0.8);
        }
        .cine-slide.exit-back {
            transform: translateX(20%);
            opacity: 0;
            z-index: 1;
        }
        .cine-slide video,
        .cine-slide img,
        .cine-slide .media-fallback {
            width: 100%;
            height: 100%;
            object-fit: cover;
            transform: scale(1.1);
            transition: transform 2s;
        }
        .cine-slide:hover video,
        .cine-slide:hover img { transform: scale(1); }
        .cine-slide-shade {
            position: absolute;
            inset: 0;
            background: linear-gradient(to top, #000, rgba(0,0,0,0.2), transparent);
            opacity: 0.8;
        }
        .cine-caption {
            position: absolute;
            bottom: 2.5rem;
            left: 5rem;
            max-width: 42rem;
        }
        .cine-caption p {
            color: var(--z-cyan);
            font-family: 'Barlow Condensed', sans-serif;
            text-transform: uppercase;
            letter-spacing: 0.3em;
            font-weight: 700;
            margin: 0 0 0.5rem;
            transform: translateY(40px);
            opacity: 0;
            transition: transform 0.7s 0.3s, opacity 0.7s 0.3s;
        }
        .cine-caption h3 {
            font-size: clamp(3rem, 7vw, 6rem);
            font-family: 'Barlow Condensed', sans-serif;
            font-weight: 800;
            text-transform: uppercase;
            color: #fff;
            line-height: 1;
            margin: 0;
            transform: translateY(80px);
            opacity: 0;
            transition: transform 0.7s 0.1s, opacity 0.7s 0.1s;
        }
        .cine-slide.active .cine-caption p,
        .cine-slide.active .cine-caption h3 {
            transform: translateY(0);
            opacity: 1;
        }
        .cine-nav {
            position: absolute;
            top: 50%;
            transform: translateY(-50%);
            z-index: 5;
            width: 3.5rem;
            height: 3.5rem;
            border-radius: 9999px;
            border: 1px solid rgba(255,255,255,0.2);
            background: rgba(0,0,0,0.4);
            color: #fff;
            display: flex;
            align-items: center;
            justify-content: center;
            cursor: pointer;
            transition: all 0.3s;
        }
        .cine-nav:hover {
            background: var(--z-cyan);
            color: #000;
            border-color: var(--z-cyan);
        }
        .cine-nav .icon { width: 1.25rem; height: 1.25rem; }
        .cine-nav-prev { left: 1.5rem; }
        .cine-nav-next { right: 1.5rem; }
        @media (max-width: 768px) {
            .cine-head { padding: 0 1.5rem; }
            .cine-caption { left: 1.5rem; }
        }
    "#;

    let (active, previous, direction) = *state;
    let slide_class = |i: usize| -> Classes {
        if i == active {
            classes!("cine-slide", "active")
        } else if Some(i) == previous {
            match direction {
                Direction::Forward => classes!("cine-slide", "exit-fwd"),
                Direction::Backward => classes!("cine-slide", "exit-back"),
            }
        } else {
            match direction {
                Direction::Forward => classes!("cine-slide", "enter-fwd"),
                Direction::Backward => classes!("cine-slide", "enter-back"),
            }
        }
    };

    html! {
        <section class="cine" id="lifestyle">
            <style>{css}</style>
            <div class="cine-inner" id="lifestyle-inner">
                <div class="cine-head">
                    <h2 class="cine-title">
                        {"Lifestyle "}<span class="accent">{"Motion"}</span>
                    </h2>
                    <div class="cine-rule"></div>
                </div>
                <div class="cine-stage">
                    { for SLIDES.iter().enumerate().map(|(i, slide)| html! {
                        <div class={slide_class(i)} key={i}>
                            {
                                match &slide.media {
                                    SlideMedia::Video(src) => html! {
                                        <video src={*src} autoplay=true loop=true muted=true playsinline=true></video>
                                    },
                                    SlideMedia::Image(src) => html! {
                                        <FallbackImg src={*src} alt={slide.text} />
                                    },
                                }
                            }
                            <div class="cine-slide-shade"></div>
                            <div class="cine-caption">
                                <p>{slide.sub}</p>
                                <h3>{slide.text}</h3>
                            </div>
                        </div>
                    }) }
                    <button class="cine-nav cine-nav-prev" onclick={nav(false)} aria-label="Previous slide">
                        { icons::arrow_left("") }
                    </button>
                    <button class="cine-nav cine-nav-next" onclick={nav(true)} aria-label="Next slide">
                        { icons::arrow_right("") }
                    </button>
                </div>
            </div>
        </section>
    }
}
