use yew::prelude::*;

use crate::components::cinematic_slider::CinematicSlider;
use crate::components::deep_parallax::DeepParallax;
use crate::components::exploded_vision::ExplodedVision;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::horizontal_scroll::HorizontalScroll;
use crate::components::loader::Loader;
use crate::components::marquee::Marquee;
use crate::components::navbar::Navbar;
use crate::components::parallax_grid::ParallaxGrid;
use crate::components::product_carousel::ProductCarousel;
use crate::dom::{FrameLoop, InputBridge, MotionContext};

/// The landing page. Owns the motion engine for its mount lifetime: the
/// frame loop and input bridge start when the page mounts and their
/// guards drop on unmount, before the visual tree is discarded. Sections
/// below register their own bindings through the provided context.
#[function_component(Landing)]
pub fn landing() -> Html {
    let motion = use_state(MotionContext::new);
    let loaded = use_state(|| false);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    {
        let motion = motion.clone();
        use_effect_with_deps(
            move |_| {
                let bridge = InputBridge::attach((*motion).clone());
                let frames = FrameLoop::start((*motion).clone());
                log::info!("motion engine started");
                move || {
                    // Guards drop here: listeners removed, pending frame
                    // cancelled, then Yew tears the tree down.
                    drop(bridge);
                    drop(frames);
                    log::info!("motion engine stopped");
                }
            },
            (),
        );
    }

    let on_loader_complete = {
        let loaded = loaded.clone();
        Callback::from(move |_| loaded.set(true))
    };

    let css = r#"
        :root {
            --z-cyan: #00f2ff;
            --z-blue: #0055ff;
            --z-black: #050505;
        }
        body {
            background-color: var(--z-black);
            color: white;
            font-family: 'Manrope', sans-serif;
            overflow-x: hidden;
            margin: 0;
            -webkit-font-smoothing: antialiased;
        }
        ::-webkit-scrollbar { width: 6px; }
        ::-webkit-scrollbar-track { background: #000; }
        ::-webkit-scrollbar-thumb { background: #1a1a1a; }
        ::-webkit-scrollbar-thumb:hover { background: var(--z-cyan); }
        .media-fallback { background: #111; }
        .outro {
            height: 60vh;
            display: flex;
            align-items: center;
            justify-content: center;
            background: var(--z-black);
            text-align: center;
            padding: 0 1rem;
        }
        .outro h1 {
            font-size: 10vw;
            line-height: 0.8;
            font-family: 'Barlow Condensed', sans-serif;
            font-weight: 800;
            text-transform: uppercase;
            background: linear-gradient(to bottom, #fff, #000);
            -webkit-background-clip: text;
            background-clip: text;
            color: transparent;
            margin: 0;
        }
    "#;

    html! {
        <ContextProvider<MotionContext> context={(*motion).clone()}>
            <div class="landing">
                <style>{css}</style>
                <Loader on_complete={on_loader_complete} />
                <main>
                    <Navbar />
                    <Hero revealed={*loaded} />
                    <Marquee />
                    <HorizontalScroll />
                    <CinematicSlider />
                    <ExplodedVision />
                    <DeepParallax />
                    <ParallaxGrid />
                    <ProductCarousel />
                    <section class="outro">
                        <h1>{"Define"}<br />{"Your Sound"}</h1>
                    </section>
                    <Footer />
                </main>
            </div>
        </ContextProvider<MotionContext>>
    }
}
