use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod reveal {
    pub mod progress;
    pub mod mapper;
    pub mod trigger;
    pub mod autoscroll;
}
mod hooks {
    pub mod scroll;
    pub mod reveal;
    pub mod intersection;
    pub mod auto_scroll;
    pub mod media;
    pub mod keyboard;
}
mod components {
    pub mod nav;
    pub mod reveal;
    pub mod hero;
    pub mod expansion;
    pub mod cards;
    pub mod testimonials;
    pub mod modal;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod services;
    pub mod products;
    pub mod blog;
    pub mod contact;
    pub mod museum;
    pub mod not_found;
}

use components::nav::NavBar;
use content::SiteContent;
use pages::{
    home::Home,
    services::Services,
    products::{Products, ProductPage},
    blog::Blog,
    contact::Contact,
    museum::Museum,
    not_found::NotFound,
};

const SITE_CSS: &str = include_str!("../static/site.css");

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/products")]
    Products,
    #[at("/products/:slug")]
    Product { slug: String },
    #[at("/blog")]
    Blog,
    #[at("/contact")]
    Contact,
    #[at("/museum")]
    Museum,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Products => {
            info!("Rendering Products page");
            html! { <Products /> }
        },
        Route::Product { slug } => {
            info!("Rendering Product page for {}", slug);
            html! { <ProductPage slug={slug} /> }
        },
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Museum => {
            info!("Rendering Museum page");
            html! { <Museum /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

fn load_content() -> SiteContent {
    match SiteContent::load() {
        Ok(content) => {
            info!(
                "Loaded content: {} services, {} products, {} exhibits",
                content.services.len(),
                content.products.len(),
                content.museum.len()
            );
            content
        }
        Err(e) => {
            error!("Failed to load site content: {}", e);
            SiteContent::default()
        }
    }
}


#[function_component]
fn App() -> Html {
    let content = use_memo(|_| load_content(), ());

    html! {
        <ContextProvider<Rc<SiteContent>> context={content}>
            <BrowserRouter>
                <style>{SITE_CSS}</style>
                <NavBar />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<SiteContent>>>
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
