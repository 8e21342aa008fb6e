use yew::prelude::*;

use crate::components::icons;

const NAV_ITEMS: [&str; 4] = ["Series X", "Technology", "Studio", "Support"];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let css = r#"
        .navbar {
            position: fixed;
            top: 0;
            width: 100%;
            z-index: 50;
            padding: 1.5rem 3rem;
            display: flex;
            justify-content: space-between;
            align-items: center;
            background: linear-gradient(to bottom, rgba(0,0,0,0.8), transparent);
            backdrop-filter: blur(4px);
            box-sizing: border-box;
        }
        .navbar-brand {
            font-family: 'Barlow Condensed', sans-serif;
            font-size: 2.25rem;
            font-weight: 800;
            font-style: italic;
            letter-spacing: -0.05em;
            color: #fff;
            cursor: pointer;
        }
        .navbar-brand span { color: var(--z-cyan); }
        .navbar-links {
            display: none;
            gap: 2.5rem;
            font-family: 'Barlow Condensed', sans-serif;
            font-size: 1.125rem;
            font-weight: 700;
            text-transform: uppercase;
            letter-spacing: 0.05em;
        }
        @media (min-width: 1024px) {
            .navbar-links { display: flex; }
            .navbar-menu-toggle { display: none; }
        }
        .navbar-links a {
            color: #d1d5db;
            text-decoration: none;
            transition: color 0.3s;
        }
        .navbar-links a:hover { color: var(--z-cyan); }
        .navbar-actions {
            display: flex;
            align-items: center;
            gap: 1.5rem;
            color: #fff;
        }
        .navbar-actions .icon {
            width: 1.25rem;
            height: 1.25rem;
            cursor: pointer;
            transition: color 0.3s;
        }
        .navbar-actions .icon:hover { color: var(--z-cyan); }
    "#;

    html! {
        <nav class="navbar">
            <style>{css}</style>
            <div class="navbar-brand">
                {"ZEDX"}<span>{"."}</span>
            </div>
            <div class="navbar-links">
                { for NAV_ITEMS.iter().map(|item| html! {
                    <a href="#">{*item}</a>
                }) }
            </div>
            <div class="navbar-actions">
                { icons::search("") }
                { icons::shopping_bag("") }
                <span class="navbar-menu-toggle">{ icons::menu("") }</span>
            </div>
        </nav>
    }
}
