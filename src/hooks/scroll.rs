use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use log::debug;
use yew::prelude::*;

use crate::reveal::progress::ScrollState;

/// Reads the current scroll metrics from the window.
pub fn read_scroll_state() -> Option<ScrollState> {
    let window = web_sys::window()?;
    let scroll_offset = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = window.document()?.document_element()?.scroll_height() as f64;
    Some(ScrollState::new(scroll_offset, viewport_height, document_height))
}

/// Tracks window scroll metrics.
///
/// Scroll and resize events only request a frame; the measurement happens
/// once per rendered frame no matter how many events fired. Both listeners
/// and any pending frame are released when the component unmounts.
///
/// The first render reports the top of the page. During it the window still
/// holds the previous route's scroll position, so the first real reading is
/// taken by the mount-time frame.
#[hook]
pub fn use_scroll_state() -> ScrollState {
    let state = use_state_eq(ScrollState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let pending: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

                let schedule: Rc<dyn Fn()> = {
                    let pending = pending.clone();
                    Rc::new(move || {
                        if pending.borrow().is_some() {
                            return;
                        }
                        let state = state.clone();
                        let slot = pending.clone();
                        let frame = request_animation_frame(move |_| {
                            slot.borrow_mut().take();
                            if let Some(next) = read_scroll_state() {
                                state.set(next);
                            }
                        });
                        *pending.borrow_mut() = Some(frame);
                    })
                };

                let listeners = web_sys::window().map(|window| {
                    let on_scroll = {
                        let schedule = schedule.clone();
                        EventListener::new(&window, "scroll", move |_| schedule())
                    };
                    let on_resize = {
                        let schedule = schedule.clone();
                        EventListener::new(&window, "resize", move |_| schedule())
                    };
                    debug!("scroll listeners attached");
                    (on_scroll, on_resize)
                });

                // Initial check, content height is only known after mount.
                schedule();

                move || {
                    drop(listeners);
                    pending.borrow_mut().take();
                    debug!("scroll listeners detached");
                }
            },
            (),
        );
    }

    *state
}

/// Scroll to top only on initial mount.
#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}
