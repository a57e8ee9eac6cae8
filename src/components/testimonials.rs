use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;
use crate::content::Testimonial;

pub enum CarouselAction {
    Next,
    Prev,
    Show(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    pub index: usize,
    pub len: usize,
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if self.len == 0 {
            return self;
        }
        let index = match action {
            CarouselAction::Next => (self.index + 1) % self.len,
            CarouselAction::Prev => (self.index + self.len - 1) % self.len,
            CarouselAction::Show(index) if index < self.len => index,
            CarouselAction::Show(_) => return self,
        };
        Rc::new(Carousel { index, len: self.len })
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub items: Vec<Testimonial>,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let carousel = use_reducer_eq(|| Carousel {
        index: 0,
        len: props.items.len(),
    });

    // Rotate on a timer; the interval is dropped (cleared) on unmount.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |len| {
                let interval = (*len > 1).then(|| {
                    Interval::new(config::TESTIMONIAL_ROTATE_MS, move || {
                        dispatcher.dispatch(CarouselAction::Next)
                    })
                });
                move || drop(interval)
            },
            props.items.len(),
        );
    }

    let Some(current) = props.items.get(carousel.index) else {
        return html! {};
    };

    let prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Prev))
    };
    let next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };

    html! {
        <section class="testimonials">
            <blockquote class="testimonial">
                <p>{format!("“{}”", current.quote)}</p>
                <footer>
                    <strong>{&current.author}</strong>
                    {" · "}
                    <span>{&current.role}</span>
                </footer>
            </blockquote>
            <div class="carousel-controls">
                <button class="carousel-button" onclick={prev}>{"‹"}</button>
                { for (0..carousel.len).map(|i| {
                    let carousel = carousel.clone();
                    html! {
                        <span
                            class={classes!("carousel-dot", (i == carousel.index).then(|| "active"))}
                            onclick={Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Show(i)))}
                        ></span>
                    }
                })}
                <button class="carousel-button" onclick={next}>{"›"}</button>
            </div>
        </section>
    }
}
