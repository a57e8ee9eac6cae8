use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::footer::Footer;
use crate::components::reveal::Reveal;
use crate::config;
use crate::content::use_site_content;
use crate::hooks::scroll::use_scroll_to_top;
use crate::reveal::trigger::TriggerOptions;

pub fn format_date(date: chrono::NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[function_component(Blog)]
pub fn blog() -> Html {
    use_title(config::page_title("Blog"));
    use_scroll_to_top();
    let content = use_site_content();

    html! {
        <div class="blog-list-page">
            <div class="blog-list-background"></div>
            <section class="blog-list-hero">
                <h1>{"Blog"}</h1>
                <p>{"Notes from the lab. Full posts are on their way."}</p>
            </section>
            <section class="blog-list-section">
                if content.posts.is_empty() {
                    <p class="blog-empty">{"Nothing here yet."}</p>
                }
                { for content.posts.iter().map(|post| html! {
                    <Reveal key={post.title.clone()} class="blog-post-preview" options={TriggerOptions::once(0.2)}>
                        <h2>{&post.title}</h2>
                        <p>{&post.excerpt}</p>
                        <span class="blog-date">{format_date(post.date)}</span>
                    </Reveal>
                })}
            </section>
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_format() {
        let date = chrono::NaiveDate::from_ymd_opt(2025, 8, 3).expect("valid date");
        assert_eq!(format_date(date), "August 3, 2025");
    }
}
