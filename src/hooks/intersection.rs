use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::reveal::trigger::{IntersectionSample, TriggerAction, TriggerOptions, VisibilityTrigger};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// A live `IntersectionObserver` watching one element.
///
/// Dropping it disconnects the observer, so the callback can never run
/// against an element that has left the DOM.
struct ObserverBinding {
    observer: IntersectionObserver,
    trigger: Rc<RefCell<VisibilityTrigger>>,
    _callback: ObserverCallback,
}

impl ObserverBinding {
    fn attach(element: &Element, options: &TriggerOptions, on_change: Callback<bool>) -> Option<Self> {
        let trigger = Rc::new(RefCell::new(VisibilityTrigger::new(options)));

        let callback: ObserverCallback = {
            let trigger = trigger.clone();
            let on_change = on_change.clone();
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let action = trigger.borrow_mut().observe(IntersectionSample {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    });
                    on_change.emit(trigger.borrow().is_visible());
                    if action == TriggerAction::Detach {
                        observer.disconnect();
                        debug!("reveal latched, observer detached");
                        break;
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&options.root_margin);
        init.set_threshold(&JsValue::from_f64(options.clamped_threshold()));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(element);
                Some(Self {
                    observer,
                    trigger,
                    _callback: callback,
                })
            }
            Err(err) => {
                // Without the observer nothing would ever reveal.
                warn!("IntersectionObserver unavailable, showing content: {:?}", err);
                on_change.emit(true);
                None
            }
        }
    }
}

impl Drop for ObserverBinding {
    fn drop(&mut self) {
        self.trigger.borrow_mut().dispose();
        self.observer.disconnect();
    }
}

/// Whether the element behind `node` has entered the viewport.
///
/// An unattached `node` is never observed and the result stays `false`.
#[hook]
pub fn use_in_view(node: NodeRef, options: TriggerOptions) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let on_change = Callback::from(move |is_visible: bool| visible.set(is_visible));
                let binding = node
                    .cast::<Element>()
                    .and_then(|element| ObserverBinding::attach(&element, options, on_change));
                move || drop(binding)
            },
            (node, options),
        );
    }

    *visible
}
