use gloo_events::EventListener;
use web_sys::MediaQueryList;
use yew::prelude::*;

fn media_list(query: &str) -> Option<MediaQueryList> {
    web_sys::window()?.match_media(query).ok()?
}

/// Live result of a CSS media query, e.g. the mobile breakpoint.
#[hook]
pub fn use_media_query(query: &'static str) -> bool {
    let matches = use_state_eq(|| media_list(query).map(|list| list.matches()).unwrap_or(false));

    {
        let matches = matches.clone();
        use_effect_with_deps(
            move |query| {
                let listener = media_list(query).map(|list| {
                    matches.set(list.matches());
                    let target = list.clone();
                    EventListener::new(&list, "change", move |_| matches.set(target.matches()))
                });
                move || drop(listener)
            },
            query,
        );
    }

    *matches
}
