use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod counter;
mod error;
mod navigation;

mod pages {
    pub mod landing;
}

mod components {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod showcase;
    pub mod social;
    pub mod video_modal;
}

use pages::landing::Landing;

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
            html! { <Landing /> }
        }
        // Single page site: anything unknown lands on the home page
        Route::NotFound => {
            info!("Unknown path, rendering landing page");
            html! { <Landing /> }
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

    info!("Starting SOL PARAGLIDERS landing page");
    yew::Renderer::<App>::new().render();
}
