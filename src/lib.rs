//! ZEDX product landing page.
//!
//! `engine` holds the pure scroll-driven motion core, `dom` the browser
//! glue around it, and `components`/`pages` the presentational sections.

pub mod components;
pub mod config;
pub mod dom;
pub mod engine;
pub mod pages;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
