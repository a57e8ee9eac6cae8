use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::reveal::trigger::TriggerOptions;
use crate::Route;

const CAPTIONS: [&str; 4] = [
    "We build curious software.",
    "Prototypes in weeks, not quarters.",
    "Products people keep open.",
    "Scroll on, we kept every experiment.",
];

/// Index of the scene for `progress`: how many step thresholds it has
/// strictly passed.
pub fn scene_step(progress: f64, steps: &[f64]) -> usize {
    steps.iter().take_while(|&&t| progress > t).count()
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub progress: f64,
}

#[function_component(HeroStageManager)]
pub fn hero_stage_manager(props: &HeroProps) -> Html {
    let step = scene_step(props.progress, &config::HERO_STEPS).min(CAPTIONS.len() - 1);

    html! {
        <header class="hero">
            <div class="hero-background"></div>
            <Reveal class="hero-content" options={TriggerOptions::repeating(0.0)}>
                <h1 class="hero-title">{config::SITE_NAME}</h1>
                <div class="hero-captions">
                    { for CAPTIONS.iter().enumerate().map(|(i, caption)| html! {
                        <p class={classes!("hero-caption", (i == step).then(|| "active"))}>{*caption}</p>
                    })}
                </div>
                <div class="hero-cta-group">
                    <Link<Route> to={Route::Services} classes="forward-link">
                        <button class="hero-cta">{"What we do"}</button>
                    </Link<Route>>
                    <Link<Route> to={Route::Museum} classes="museum-link">
                        {"Visit the museum"}
                    </Link<Route>>
                </div>
            </Reveal>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_follow_thresholds() {
        let steps = [0.1, 0.2, 0.3];
        assert_eq!(scene_step(0.0, &steps), 0);
        assert_eq!(scene_step(0.1, &steps), 0);
        assert_eq!(scene_step(0.15, &steps), 1);
        assert_eq!(scene_step(0.25, &steps), 2);
        assert_eq!(scene_step(0.9, &steps), 3);
    }

    #[test]
    fn every_step_has_a_caption() {
        assert_eq!(config::HERO_STEPS.len() + 1, CAPTIONS.len());
    }
}
