use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    /// Fired once the bars have collapsed and the overlay is gone.
    pub on_complete: Callback<()>,
}

/// Full-screen intro overlay: four brand-gradient bars that collapse
/// shortly after mount. Pointer events pass through the whole time.
#[function_component(Loader)]
pub fn loader(props: &LoaderProps) -> Html {
    // idle -> collapsing (bars shrink) -> done (overlay removed)
    let phase = use_state(|| 0u8);

    {
        let phase = phase.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    TimeoutFuture::new(1_000).await;
                    phase.set(1);
                    TimeoutFuture::new(900).await;
                    phase.set(2);
                    on_complete.emit(());
                });
                || ()
            },
            (),
        );
    }

    let css = r#"
        .loader {
            position: fixed;
            inset: 0;
            z-index: 9999;
            display: flex;
            height: 100vh;
            width: 100%;
            pointer-events: none;
        }
        .loader-bar {
            width: 25%;
            height: 100%;
            border-right: 1px solid rgba(0,0,0,0.2);
            transition: height 0.8s cubic-bezier(0.76, 0, 0.24, 1);
        }
        .loader.collapsing .loader-bar { height: 0%; }
        .loader.collapsing .loader-bar:nth-child(2) { transition-delay: 0.1s; }
        .loader.collapsing .loader-bar:nth-child(3) { transition-delay: 0.2s; }
        .loader.collapsing .loader-bar:nth-child(4) { transition-delay: 0.3s; }
    "#;

    if *phase == 2 {
        return html! {};
    }

    let class = classes!("loader", (*phase == 1).then_some("collapsing"));
    html! {
        <div {class}>
            <style>{css}</style>
            <div class="loader-bar" style="background:#00f2ff"></div>
            <div class="loader-bar" style="background:#00c8ff"></div>
            <div class="loader-bar" style="background:#0095ff"></div>
            <div class="loader-bar" style="background:#0055ff"></div>
        </div>
    }
}
