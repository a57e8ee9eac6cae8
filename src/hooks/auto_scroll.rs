use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use log::debug;
use yew::prelude::*;

use crate::hooks::scroll::read_scroll_state;
use crate::reveal::autoscroll::AutoScroll;

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// The running tour, if any. Holds the live flag checked on every frame
/// and the handle of the frame that is queued next.
#[derive(Default)]
struct TourLoop {
    live: Option<Rc<Cell<bool>>>,
    frame: FrameSlot,
}

impl TourLoop {
    fn cancel(&mut self) {
        if let Some(live) = self.live.take() {
            if live.replace(false) {
                debug!("auto-scroll cancelled");
            }
        }
        self.frame.borrow_mut().take();
    }

    fn start(&mut self, plan: AutoScroll, on_finish: Callback<()>) {
        self.cancel();
        let live = Rc::new(Cell::new(true));
        self.live = Some(live.clone());
        debug!("auto-scroll started, {:.0}ms", plan.duration());
        schedule(plan, live, self.frame.clone(), on_finish);
    }
}

impl Drop for TourLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn schedule(plan: AutoScroll, live: Rc<Cell<bool>>, slot: FrameSlot, on_finish: Callback<()>) {
    let next_slot = slot.clone();
    let frame = request_animation_frame(move |now| {
        if !live.get() {
            return;
        }
        let step = plan.frame(now);
        if let Some(window) = web_sys::window() {
            let x = window.scroll_x().unwrap_or(0.0);
            window.scroll_to_with_x_and_y(x, step.target_y);
        }
        if step.done {
            live.set(false);
            debug!("auto-scroll reached the bottom");
            on_finish.emit(());
        } else {
            schedule(plan, live, next_slot, on_finish);
        }
    });
    *slot.borrow_mut() = Some(frame);
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[derive(Clone, PartialEq)]
pub struct AutoScrollHandle {
    pub running: bool,
    pub toggle: Callback<()>,
    pub stop: Callback<()>,
}

/// Programmatic scroll to the bottom of the page, toggled on and off.
///
/// Stopping leaves the page where it is. Starting always cancels a loop
/// that is still running, and the loop is cancelled on unmount.
#[hook]
pub fn use_auto_scroll(speed_px_per_sec: f64) -> AutoScrollHandle {
    let running = use_state_eq(|| false);
    let tour = use_mut_ref(TourLoop::default);

    {
        let tour = tour.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    tour.borrow_mut().cancel();
                }
            },
            (),
        );
    }

    let stop = {
        let running = running.clone();
        let tour = tour.clone();
        Callback::from(move |_: ()| {
            tour.borrow_mut().cancel();
            running.set(false);
        })
    };

    let toggle = {
        let running = running.clone();
        let tour = tour.clone();
        let stop = stop.clone();
        Callback::from(move |_: ()| {
            if *running {
                stop.emit(());
                return;
            }
            let Some(state) = read_scroll_state() else {
                return;
            };
            match AutoScroll::start(state.scroll_offset, state.max_offset(), now_ms(), speed_px_per_sec) {
                Some(plan) => {
                    let on_finish = {
                        let running = running.clone();
                        Callback::from(move |_: ()| running.set(false))
                    };
                    tour.borrow_mut().start(plan, on_finish);
                    running.set(true);
                }
                None => debug!("auto-scroll skipped, nothing to scroll"),
            }
        })
    };

    AutoScrollHandle {
        running: *running,
        toggle,
        stop,
    }
}
