use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::cards::MetricCard;
use crate::components::expansion::DynamicExpansion;
use crate::components::footer::Footer;
use crate::components::hero::HeroStageManager;
use crate::components::reveal::{Reveal, ScrollReveal};
use crate::components::testimonials::Testimonials;
use crate::config;
use crate::content::use_site_content;
use crate::hooks::scroll::{use_scroll_state, use_scroll_to_top};
use crate::reveal::trigger::TriggerOptions;

#[function_component(Home)]
pub fn home() -> Html {
    use_title(config::page_title(""));
    use_scroll_to_top();

    let content = use_site_content();
    let progress = use_scroll_state().progress();
    let metrics_config = content.reveal_for("metrics", config::METRIC);

    html! {
        <div class="landing-page">
            <HeroStageManager progress={progress} />

            <DynamicExpansion
                progress={progress}
                services={content.services.clone()}
                config={content.reveal_for("services", config::CARD)}
            />

            <section class="metrics-band">
                { for content.metrics.iter().enumerate().map(|(i, metric)| html! {
                    <ScrollReveal
                        key={metric.label.clone()}
                        progress={progress}
                        config={metrics_config.staggered(i, config::STAGGER_STEP)}
                    >
                        <MetricCard metric={metric.clone()} />
                    </ScrollReveal>
                })}
            </section>

            <Reveal options={TriggerOptions::once(0.25).with_root_margin("0px 0px -10% 0px")}>
                <Testimonials items={content.testimonials.clone()} />
            </Reveal>

            <Footer progress={progress} />
        </div>
    }
}
