use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons;
use crate::components::media::FallbackImg;
use crate::config::{assets, layout};
use crate::dom::{geometry, now_ms};
use crate::engine::Carousel;

struct Product {
    name: &'static str,
    price: &'static str,
    img: &'static str,
}

const PRODUCTS: [Product; 5] = [
    Product {
        name: "Z-1 Buds",
        price: "$149",
        img: assets::IMG_BUDS,
    },
    Product {
        name: "Z-Stream Mic",
        price: "$199",
        img: assets::IMG_MIC,
    },
    Product {
        name: "Z-OverEar",
        price: "$299",
        img: assets::IMG_OVEREAR_SMALL,
    },
    Product {
        name: "Z-Controller",
        price: "$59",
        img: assets::IMG_CONTROLLER,
    },
    Product {
        name: "Z-Keypad",
        price: "$129",
        img: assets::IMG_KEYPAD,
    },
];

fn slides_per_view(viewport_w: f64) -> f64 {
    if viewport_w >= layout::BREAKPOINT_LG {
        3.5
    } else if viewport_w >= layout::BREAKPOINT_SM {
        2.0
    } else {
        1.0
    }
}

/// "The Collection": multi-per-view product strip with circular arrow
/// navigation. No autoplay; wrap-around at both ends.
#[function_component(ProductCarousel)]
pub fn product_carousel() -> Html {
    let carousel = use_mut_ref(|| Carousel::new(PRODUCTS.len(), None));
    let active = use_state(|| 0usize);
    let spv = use_state(|| {
        geometry::viewport()
            .map(|(w, _)| slides_per_view(w))
            .unwrap_or(3.5)
    });

    {
        let spv = spv.clone();
        use_effect_with_deps(
            move |_| {
                let callback = Closure::<dyn Fn()>::new(move || {
                    if let Some((w, _)) = geometry::viewport() {
                        spv.set(slides_per_view(w));
                    }
                });
                if let Some(window) = web_sys::window() {
                    window
                        .add_event_listener_with_callback(
                            "resize",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
                move || {
                    if let Some(window) = web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let nav = |forward: bool| {
        let carousel = carousel.clone();
        let active = active.clone();
        Callback::from(move |_: MouseEvent| {
            let mut slot = carousel.borrow_mut();
            if let Some(c) = slot.as_mut() {
                let idx = if forward {
                    c.next_manual(now_ms())
                } else {
                    c.prev_manual(now_ms())
                };
                active.set(idx);
            }
        })
    };

    let css = r#"
        .collection {
            padding: 6rem 0;
            background: #0a0a0a;
            border-top: 1px solid rgba(255,255,255,0.05);
        }
        .collection-head {
            padding: 0 5rem;
            margin-bottom: 3rem;
            display: flex;
            flex-direction: column;
            gap: 1.5rem;
            justify-content: space-between;
            align-items: flex-end;
        }
        @media (min-width: 768px) {
            .collection-head { flex-direction: row; }
        }
        .collection-title {
            font-size: 3.75rem;
            font-family: 'Barlow Condensed', sans-serif;
            font-weight: 800;
            text-transform: uppercase;
            color: #fff;
            font-style: italic;
            margin: 0;
        }
        .collection-arrows { display: flex; gap: 1rem; }
        .collection-arrow {
            width: 3.5rem;
            height: 3.5rem;
            border-radius: 9999px;
            border: 1px solid rgba(255,255,255,0.2);
            background: transparent;
            display: flex;
            align-items: center;
            justify-content: center;
            color: #fff;
            cursor: pointer;
            transition: all 0.3s;
        }
        .collection-arrow:hover {
            background: var(--z-cyan);
            color: #000;
            border-color: var(--z-cyan);
        }
        .collection-arrow .icon { width: 1.25rem; height: 1.25rem; }
        .collection-viewport {
            padding: 0 3rem;
            overflow: hidden;
        }
        .collection-track {
            display: flex;
            transition: transform 0.5s cubic-bezier(0.76, 0, 0.24, 1);
        }
        .collection-slide {
            flex-shrink: 0;
            padding: 0 15px;
            box-sizing: border-box;
        }
        .product-card {
            background: #000;
            border: 1px solid rgba(255,255,255,0.1);
            cursor: pointer;
            transition: border-color 0.3s;
            border-radius: 0.5rem;
            overflow: hidden;
        }
        .product-card:hover { border-color: var(--z-cyan); }
        .product-media {
            aspect-ratio: 1;
            overflow: hidden;
            position: relative;
            background: #050505;
        }
        .product-media img,
        .product-media .media-fallback {
            width: 100%;
            height: 100%;
            object-fit: cover;
            opacity: 0.8;
            transition: all 0.5s;
        }
        .product-card:hover .product-media img {
            opacity: 1;
            transform: scale(1.05);
        }
        .product-media-shade {
            position: absolute;
            inset: 0;
            background: linear-gradient(to top, #000, transparent, transparent);
            opacity: 0.5;
        }
        .product-bag {
            position: absolute;
            bottom: 1rem;
            right: 1rem;
            width: 2.5rem;
            height: 2.5rem;
            background: var(--z-cyan);
            border: none;
            border-radius: 9999px;
            display: flex;
            align-items: center;
            justify-content: center;
            color: #000;
            transform: translateY(2.5rem);
            transition: transform 0.3s;
            cursor: pointer;
        }
        .product-card:hover .product-bag { transform: translateY(0); }
        .product-bag .icon { width: 1rem; height: 1rem; }
        .product-info { padding: 1.5rem; }
        .product-info h3 {
            font-size: 1.875rem;
            font-family: 'Barlow Condensed', sans-serif;
            font-weight: 700;
            text-transform: uppercase;
            color: #fff;
            margin: 0;
        }
        .product-info p {
            color: var(--z-cyan);
            font-weight: 700;
            font-size: 1.25rem;
            margin: 0.25rem 0 0;
        }
    "#;

    let spv_f = *spv;
    let max_shift = (PRODUCTS.len() as f64 - spv_f).max(0.0);
    let shift = (*active as f64).min(max_shift);
    let track_style = format!("transform: translateX(-{:.4}%)", shift * 100.0 / spv_f);
    let slide_style = format!("width: {:.4}%", 100.0 / spv_f);

    html! {
        <section class="collection" id="collection">
            <style>{css}</style>
            <div class="collection-head">
                <h2 class="collection-title">{"The Collection"}</h2>
                <div class="collection-arrows">
                    <button class="collection-arrow" onclick={nav(false)} aria-label="Previous products">
                        { icons::arrow_left("") }
                    </button>
                    <button class="collection-arrow" onclick={nav(true)} aria-label="Next products">
                        { icons::arrow_right("") }
                    </button>
                </div>
            </div>
            <div class="collection-viewport">
                <div class="collection-track" style={track_style}>
                    { for PRODUCTS.iter().enumerate().map(|(i, product)| html! {
                        <div class="collection-slide" style={slide_style.clone()} key={i}>
                            <div class="product-card">
                                <div class="product-media">
                                    <FallbackImg src={product.img} alt={product.name} />
                                    <div class="product-media-shade"></div>
                                    <button class="product-bag" aria-label="Add to bag">
                                        { icons::shopping_bag("") }
                                    </button>
                                </div>
                                <div class="product-info">
                                    <h3>{product.name}</h3>
                                    <p>{product.price}</p>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
