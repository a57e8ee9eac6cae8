use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::hooks::scroll::use_scroll_to_top;
use crate::reveal::trigger::TriggerOptions;

const TOPICS: [&str; 4] = ["New product", "Existing codebase", "Design system", "Just saying hi"];

pub fn mailto(address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        address,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

#[function_component(Contact)]
pub fn contact() -> Html {
    use_title(config::page_title("Contact"));
    use_scroll_to_top();

    html! {
        <div class="contact-page">
            <section class="page-hero">
                <h1>{"Contact"}</h1>
                <p>{"Pick a topic and your mail client opens with a draft."}</p>
            </section>
            <Reveal class="contact-topics" options={TriggerOptions::once(0.1)}>
                { for TOPICS.iter().map(|topic| {
                    let body = format!("Hi {},\n\nI found you via {}.\n", config::SITE_NAME, config::get_site_url());
                    html! {
                        <a class="contact-topic" href={mailto(config::CONTACT_EMAIL, topic, &body)}>
                            {*topic}
                        </a>
                    }
                })}
                <p class="contact-direct">
                    {"Or write to "}
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                </p>
            </Reveal>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_encodes_subject_and_body() {
        let link = mailto("a@b.dev", "New product", "Hi & bye\n");
        assert_eq!(link, "mailto:a@b.dev?subject=New%20product&body=Hi%20%26%20bye%0A");
    }
}
