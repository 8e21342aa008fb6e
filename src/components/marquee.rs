use yew::prelude::*;

/// Cyan ribbon with an endlessly scrolling headline. Pure CSS keyframe
/// motion; the scroll engine is not involved.
#[function_component(Marquee)]
pub fn marquee() -> Html {
    let css = r#"
        .marquee {
            background: var(--z-cyan);
            padding: 0.5rem 0;
            overflow: hidden;
            white-space: nowrap;
        }
        .marquee-track {
            display: flex;
            gap: 2.5rem;
            animation: marquee-slide 20s linear infinite;
            width: max-content;
        }
        .marquee-track h2 {
            font-size: 2.25rem;
            font-family: 'Barlow Condensed', sans-serif;
            font-weight: 800;
            text-transform: uppercase;
            color: #000;
            font-style: italic;
            margin: 0;
        }
        .marquee-track h2 span { color: #fff; margin: 0 1rem; }
        @keyframes marquee-slide {
            0% { transform: translateX(0); }
            100% { transform: translateX(-50%); }
        }
    "#;

    html! {
        <div class="marquee">
            <style>{css}</style>
            <div class="marquee-track">
                { for (0..10).map(|i| html! {
                    <h2 key={i}>{"Next Gen Audio "}<span>{"\u{2022}"}</span></h2>
                }) }
            </div>
        </div>
    }
}
