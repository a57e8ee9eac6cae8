use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::footer::Footer;
use crate::components::modal::Modal;
use crate::components::reveal::Reveal;
use crate::config;
use crate::content::use_site_content;
use crate::hooks::scroll::use_scroll_to_top;
use crate::reveal::trigger::TriggerOptions;

/// Delay between neighbouring exhibits in a row.
const EXHIBIT_STAGGER_MS: usize = 120;
const ROW_LEN: usize = 3;

/// Transition delay for the exhibit at `index`, restarting on every row.
fn stagger_style(index: usize) -> String {
    format!("transition-delay: {}ms;", (index % ROW_LEN) * EXHIBIT_STAGGER_MS)
}

#[function_component(Museum)]
pub fn museum() -> Html {
    use_title(config::page_title("Museum"));
    use_scroll_to_top();

    let content = use_site_content();
    let selected = use_state(|| None::<usize>);

    let close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let exhibit = selected.and_then(|i| content.museum.get(i));

    html! {
        <div class="museum-page">
            <section class="page-hero">
                <h1>{"The Museum"}</h1>
                <p>{"Every past version of this site, preserved. Click an exhibit for the story behind it."}</p>
            </section>
            <section class="museum-grid">
                { for content.museum.iter().enumerate().map(|(i, item)| {
                    let open = {
                        let selected = selected.clone();
                        Callback::from(move |_: MouseEvent| selected.set(Some(i)))
                    };
                    html! {
                        <Reveal key={item.name.clone()} options={TriggerOptions::once(0.15)} style={stagger_style(i)}>
                            <button class="card exhibit-card" onclick={open}>
                                <span class="exhibit-year">{item.year.to_string()}</span>
                                <h3>{&item.name}</h3>
                                <p>{&item.summary}</p>
                            </button>
                        </Reveal>
                    }
                })}
            </section>
            <Modal
                open={exhibit.is_some()}
                title={exhibit.map(|e| format!("{} ({})", e.name, e.year)).unwrap_or_default()}
                on_close={close}
            >
                <p>{exhibit.map(|e| e.notes.clone()).unwrap_or_default()}</p>
            </Modal>
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_restarts_each_row() {
        assert_eq!(stagger_style(0), "transition-delay: 0ms;");
        assert_eq!(stagger_style(2), "transition-delay: 240ms;");
        assert_eq!(stagger_style(3), "transition-delay: 0ms;");
        assert_eq!(stagger_style(4), "transition-delay: 120ms;");
    }
}
