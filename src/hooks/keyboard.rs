use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

/// Calls `on_escape` when Escape is pressed, only while `active`.
#[hook]
pub fn use_escape_key(on_escape: Callback<()>, active: bool) {
    use_effect_with_deps(
        move |(on_escape, active)| {
            let listener = web_sys::window().filter(|_| *active).map(|window| {
                let on_escape = on_escape.clone();
                EventListener::new(&window, "keydown", move |event| {
                    if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                        if event.key() == "Escape" {
                            on_escape.emit(());
                        }
                    }
                })
            });
            move || drop(listener)
        },
        (on_escape, active),
    );
}
