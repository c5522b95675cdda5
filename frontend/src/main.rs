use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod motion {
    pub mod observer;
    pub mod parallax;
    pub mod reveal;
}
mod navigation {
    pub mod anchor;
    pub mod state;
}
mod components {
    pub mod nav_bar;
    pub mod parallax;
    pub mod reveal;
}
mod sections {
    pub mod cta;
    pub mod features;
    pub mod footer;
    pub mod gameplay;
    pub mod header;
    pub mod hero;
    pub mod testimonials;
}
mod pages {
    pub mod index;
    pub mod not_found;
}

use pages::{index::Index, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Index /> }
        }
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Defend The Realm landing page");
    yew::Renderer::<App>::new().render();
}
