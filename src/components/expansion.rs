use yew::prelude::*;

use crate::components::cards::ServiceCard;
use crate::components::reveal::ScrollReveal;
use crate::config;
use crate::content::Service;
use crate::reveal::mapper::RevealConfig;

#[derive(Properties, PartialEq)]
pub struct DynamicExpansionProps {
    pub progress: f64,
    pub services: Vec<Service>,
    #[prop_or(config::CARD)]
    pub config: RevealConfig,
}

/// Service grid whose cards appear one after another as the page scrolls.
#[function_component(DynamicExpansion)]
pub fn dynamic_expansion(props: &DynamicExpansionProps) -> Html {
    html! {
        <section class="dynamic-expansion">
            <h2>{"What we do"}</h2>
            <div class="card-grid">
                { for props.services.iter().enumerate().map(|(i, service)| html! {
                    <ScrollReveal
                        key={service.title.clone()}
                        progress={props.progress}
                        config={props.config.staggered(i, config::STAGGER_STEP)}
                    >
                        <ServiceCard service={service.clone()} />
                    </ScrollReveal>
                })}
            </div>
        </section>
    }
}
