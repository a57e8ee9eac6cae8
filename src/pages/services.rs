use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::cards::ServiceCard;
use crate::components::footer::Footer;
use crate::components::reveal::Reveal;
use crate::config;
use crate::content::use_site_content;
use crate::hooks::scroll::use_scroll_to_top;
use crate::reveal::trigger::TriggerOptions;

#[function_component(Services)]
pub fn services() -> Html {
    use_title(config::page_title("Services"));
    use_scroll_to_top();
    let content = use_site_content();

    html! {
        <div class="services-page">
            <section class="page-hero">
                <h1>{"Services"}</h1>
                <p>{"Small senior teams, embedded with yours, for as long as it takes to ship."}</p>
            </section>
            <section class="card-grid">
                { for content.services.iter().map(|service| html! {
                    <Reveal key={service.title.clone()} options={TriggerOptions::once(0.2)}>
                        <ServiceCard service={service.clone()} detailed={true} />
                    </Reveal>
                })}
            </section>
            <Footer />
        </div>
    }
}
