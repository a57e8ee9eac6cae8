use yew::prelude::*;

use crate::reveal::mapper::{RevealConfig, RevealLatch, VisualState};

/// Latched visual state for one element driven by a shared progress ratio.
#[hook]
pub fn use_reveal(progress: f64, config: RevealConfig) -> VisualState {
    let latch = use_mut_ref(|| RevealLatch::new(config));
    let visual = latch.borrow_mut().update_with(config, progress);
    visual
}
