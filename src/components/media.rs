//! Media elements with graceful load-failure handling.
//!
//! A missing asset must never take the rest of the page down: the scroll
//! bindings keep running against whatever geometry the fallback leaves
//! behind, and the broken image is swapped for a neutral panel.

use web_sys::Event;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FallbackImgProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// An `<img>` that degrades to a dark panel when the asset fails.
#[function_component(FallbackImg)]
pub fn fallback_img(props: &FallbackImgProps) -> Html {
    let failed = use_state(|| false);

    let onerror = {
        let failed = failed.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            log::warn!("image failed to load: {src}");
            failed.set(true);
        })
    };

    if *failed {
        html! { <div class={classes!("media-fallback", props.class.clone())}></div> }
    } else {
        html! {
            <img
                src={props.src.clone()}
                alt={props.alt.clone()}
                loading="lazy"
                class={props.class.clone()}
                {onerror}
            />
        }
    }
}
