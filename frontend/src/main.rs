use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod icons;
mod animation {
    pub mod count_up;
    pub mod reveal;
    pub mod scroll;
}
mod components {
    pub mod footer;
    pub mod layout;
    pub mod navigation;
    pub mod section_header;
    pub mod services;
    pub mod stats;
    pub mod testimonials;
    pub mod work;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod services;
    pub mod work;
}

use pages::{
    about::AboutPage,
    contact::ContactPage,
    home::Home,
    not_found::NotFound,
    services::ServicesPage,
    work::WorkPage,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/work")]
    Work,
    #[at("/services")]
    Services,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Work => {
            info!("Rendering Work page");
            html! { <WorkPage /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <ServicesPage /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <AboutPage /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
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

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_resolve_to_pages() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/work"), Some(Route::Work));
        assert_eq!(Route::recognize("/services"), Some(Route::Services));
        assert_eq!(Route::recognize("/about"), Some(Route::About));
        assert_eq!(Route::recognize("/contact"), Some(Route::Contact));
    }

    #[test]
    fn unknown_path_falls_back_to_not_found() {
        assert_eq!(Route::recognize("/careers"), Some(Route::NotFound));
    }

    #[test]
    fn routes_render_back_to_their_paths() {
        assert_eq!(Route::Contact.to_path(), "/contact");
        assert_eq!(Route::Home.to_path(), "/");
    }
}
