use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::ScrollReveal;
use crate::config;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    /// Page progress, when the page tracks it. Without it the footer is
    /// shown as is.
    #[prop_or_default]
    pub progress: Option<f64>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    let content = html! {
        <div class="footer-content">
            <h2>{"Got a curious problem?"}</h2>
            <p class="subtitle">{"Tell us about it. We answer every message within two working days."}</p>
            <Link<Route> to={Route::Contact} classes="forward-link">
                <button class="hero-cta">{"Start a conversation"}</button>
            </Link<Route>>
            <div class="legal-links">
                <Link<Route> to={Route::Museum}>{"Museum"}</Link<Route>>
                {" | "}
                <Link<Route> to={Route::Blog}>{"Blog"}</Link<Route>>
            </div>
            <p class="copyright">{format!("© {} {}", year, config::SITE_NAME)}</p>
        </div>
    };

    html! {
        <footer class="footer-cta">
            {
                match props.progress {
                    Some(progress) => html! {
                        <ScrollReveal progress={progress} config={config::FOOTER}>{content}</ScrollReveal>
                    },
                    None => content,
                }
            }
        </footer>
    }
}
