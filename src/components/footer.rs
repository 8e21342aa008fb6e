use yew::prelude::*;

use crate::components::icons;

const QUICK_LINKS: [&str; 5] = [
    "Home",
    "New Arrivals",
    "Gaming Gear",
    "Lifestyle Audio",
    "Accessories",
];

const SUPPORT_LINKS: [&str; 5] = [
    "Order Tracking",
    "Warranty Claim",
    "Return Policy",
    "Downloads & Drivers",
    "FAQs",
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let css = r#"
        .footer {
            background: #000;
            padding: 6rem 5rem 3rem;
            border-top: 1px solid rgba(255,255,255,0.1);
        }
        .footer-grid {
            display: grid;
            grid-template-columns: 1fr;
            gap: 3rem;
            margin-bottom: 5rem;
        }
        @media (min-width: 768px) {
            .footer-grid { grid-template-columns: repeat(4, 1fr); }
        }
        .footer-brand h1 {
            font-size: 3.75rem;
            font-family: 'Barlow Condensed', sans-serif;
            font-weight: 800;
            font-style: italic;
            text-transform: uppercase;
            color: #fff;
            margin: 0 0 1.5rem;
        }
        .footer-brand h1 span { color: var(--z-cyan); }
        .footer-brand p {
            color: #6b7280;
            font-size: 0.875rem;
            line-height: 1.6;
            margin: 0;
        }
        .footer-social {
            display: flex;
            gap: 1rem;
            margin-top: 1.5rem;
            color: #fff;
        }
        .footer-social .icon {
            width: 1.25rem;
            height: 1.25rem;
            cursor: pointer;
            transition: color 0.3s;
        }
        .footer-social .icon:hover { color: var(--z-cyan); }
        .footer-col h4 {
            color: #fff;
            font-family: 'Barlow Condensed', sans-serif;
            font-weight: 700;
            text-transform: uppercase;
            font-size: 1.25rem;
            letter-spacing: 0.05em;
            margin: 0 0 1.5rem;
        }
        .footer-col ul {
            list-style: none;
            padding: 0;
            margin: 0;
            color: #6b7280;
            font-weight: 500;
            font-size: 0.875rem;
        }
        .footer-col li { margin-bottom: 0.75rem; }
        .footer-col li.link {
            cursor: pointer;
            transition: color 0.3s;
        }
        .footer-col li.link:hover { color: var(--z-cyan); }
        .footer-contact li {
            display: flex;
            align-items: center;
            gap: 0.75rem;
            margin-bottom: 1rem;
        }
        .footer-contact li.multiline { align-items: flex-start; }
        .footer-contact .icon {
            width: 1.125rem;
            height: 1.125rem;
            color: var(--z-cyan);
            flex-shrink: 0;
        }
        .footer-legal {
            border-top: 1px solid rgba(255,255,255,0.1);
            padding-top: 2rem;
            display: flex;
            flex-direction: column;
            gap: 1rem;
            justify-content: space-between;
            align-items: center;
            color: #374151;
            font-size: 0.75rem;
            font-weight: 700;
            text-transform: uppercase;
            letter-spacing: 0.2em;
        }
        @media (min-width: 768px) {
            .footer-legal { flex-direction: row; }
        }
        .footer-legal p { margin: 0; }
        .footer-legal-links { display: flex; gap: 1.5rem; }
        .footer-legal-links span {
            cursor: pointer;
            transition: color 0.3s;
        }
        .footer-legal-links span:hover { color: #fff; }
        @media (max-width: 768px) {
            .footer { padding: 6rem 1.5rem 3rem; }
        }
    "#;

    html! {
        <footer class="footer">
            <style>{css}</style>
            <div class="footer-grid">
                <div class="footer-brand">
                    <h1>{"ZEDX"}<span>{"."}</span></h1>
                    <p>
                        {"Pioneering the future of auditory experiences. We craft precision \
                          engineered gear for gamers, creators, and audiophiles."}
                    </p>
                    <div class="footer-social">
                        { icons::twitter("") }
                        { icons::instagram("") }
                        { icons::youtube("") }
                    </div>
                </div>
                <div class="footer-col">
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        { for QUICK_LINKS.iter().map(|item| html! {
                            <li class="link">{*item}</li>
                        }) }
                    </ul>
                </div>
                <div class="footer-col">
                    <h4>{"Contact"}</h4>
                    <ul class="footer-contact">
                        <li>{ icons::mail("") }<span>{"hello@zedx.store"}</span></li>
                        <li>{ icons::phone("") }<span>{"+1 (800) 999-ZEDX"}</span></li>
                        <li class="multiline">
                            { icons::map_pin("") }
                            <span>{"88 Tech Blvd, Cyber City,"}<br />{"Neo Tokyo, JP"}</span>
                        </li>
                    </ul>
                </div>
                <div class="footer-col">
                    <h4>{"Support"}</h4>
                    <ul>
                        { for SUPPORT_LINKS.iter().map(|item| html! {
                            <li class="link">{*item}</li>
                        }) }
                    </ul>
                </div>
            </div>
            <div class="footer-legal">
                <p>{"\u{a9} 2025 ZEDX Electronics. All Rights Reserved."}</p>
                <div class="footer-legal-links">
                    <span>{"Privacy Policy"}</span>
                    <span>{"Terms of Service"}</span>
                </div>
            </div>
        </footer>
    }
}
