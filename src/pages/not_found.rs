use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_title(config::page_title("Not found"));

    html! {
        <div class="not-found-page">
            <section class="page-hero">
                <h1>{"404"}</h1>
                <p>{"This page wandered off. Maybe it is in the museum?"}</p>
                <Link<Route> to={Route::Home} classes="forward-link">
                    <button class="hero-cta">{"Back home"}</button>
                </Link<Route>>
            </section>
        </div>
    }
}
