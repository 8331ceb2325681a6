use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod booking;
mod handoff;
mod scroll_tracker;
mod counter;
mod components {
    pub mod navbar;
    pub mod booking_form;
    pub mod animated_counter;
}
mod pages {
    pub mod home;
    pub mod hero;
    pub mod services;
    pub mod how_it_works;
    pub mod amc_plans;
    pub mod gallery;
    pub mod about;
    pub mod faq;
    pub mod service_area;
    pub mod footer;
    pub mod not_found;
}

use components::navbar::Navbar;
use pages::{home::Home, not_found::NotFound};

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
            info!("Rendering Home page");
            html! {
                <>
                    <Navbar />
                    <Home />
                </>
            }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
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

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
