/// Options for an intersection-based reveal.
#[derive(Clone, Debug, PartialEq)]
pub struct TriggerOptions {
    /// Fraction of the element that must be inside the viewport.
    pub threshold: f64,
    /// CSS margin applied around the viewport, e.g. `"0px 0px -10% 0px"`.
    pub root_margin: String,
    pub trigger_once: bool,
}

impl TriggerOptions {
    pub fn once(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn repeating(threshold: f64) -> Self {
        Self {
            threshold,
            trigger_once: false,
            ..Self::default()
        }
    }

    pub fn with_root_margin(mut self, root_margin: impl Into<String>) -> Self {
        self.root_margin = root_margin.into();
        self
    }

    pub fn clamped_threshold(&self) -> f64 {
        if self.threshold.is_finite() {
            self.threshold.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

impl Default for TriggerOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px".to_string(),
            trigger_once: true,
        }
    }
}

/// One observation delivered by the intersection primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

#[cfg(test)]
impl IntersectionSample {
    pub fn entering(ratio: f64) -> Self {
        Self {
            is_intersecting: true,
            ratio,
        }
    }

    pub fn leaving() -> Self {
        Self {
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

/// What the observer binding should do after a sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerAction {
    Keep,
    Detach,
}

/// Visibility state for one observed element.
///
/// Starts hidden. In trigger-once mode the first qualifying sample latches
/// it visible and asks for the observer to be detached; every later sample
/// is ignored. In repeating mode it follows the element in and out.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityTrigger {
    threshold: f64,
    trigger_once: bool,
    visible: bool,
    detached: bool,
}

impl VisibilityTrigger {
    pub fn new(options: &TriggerOptions) -> Self {
        Self {
            threshold: options.clamped_threshold(),
            trigger_once: options.trigger_once,
            visible: false,
            detached: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[cfg(test)]
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    pub fn observe(&mut self, sample: IntersectionSample) -> TriggerAction {
        if self.detached {
            return TriggerAction::Detach;
        }
        self.visible = sample.is_intersecting && sample.ratio >= self.threshold;
        if self.visible && self.trigger_once {
            self.detached = true;
            return TriggerAction::Detach;
        }
        TriggerAction::Keep
    }

    /// Teardown from the owner. Always detaches, whatever the mode.
    pub fn dispose(&mut self) {
        self.detached = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(options: &TriggerOptions, samples: &[IntersectionSample]) -> (Vec<bool>, VisibilityTrigger) {
        let mut trigger = VisibilityTrigger::new(options);
        assert!(!trigger.is_visible());
        let mut seen = Vec::with_capacity(samples.len());
        for sample in samples {
            trigger.observe(*sample);
            seen.push(trigger.is_visible());
        }
        (seen, trigger)
    }

    fn in_out_sequence() -> Vec<IntersectionSample> {
        vec![
            IntersectionSample::leaving(),
            IntersectionSample::entering(0.5),
            IntersectionSample::leaving(),
            IntersectionSample::entering(0.5),
        ]
    }

    #[test]
    fn trigger_once_latches() {
        let (seen, trigger) = run(&TriggerOptions::once(0.2), &in_out_sequence());
        assert_eq!(seen, vec![false, true, true, true]);
        assert!(trigger.is_detached());
    }

    #[test]
    fn detaches_on_first_reveal() {
        let mut trigger = VisibilityTrigger::new(&TriggerOptions::once(0.2));
        assert_eq!(trigger.observe(IntersectionSample::leaving()), TriggerAction::Keep);
        assert_eq!(trigger.observe(IntersectionSample::entering(0.3)), TriggerAction::Detach);
    }

    #[test]
    fn repeating_toggles() {
        let (seen, trigger) = run(&TriggerOptions::repeating(0.2), &in_out_sequence());
        assert_eq!(seen, vec![false, true, false, true]);
        assert!(!trigger.is_detached());
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let mut trigger = VisibilityTrigger::new(&TriggerOptions::once(0.5));
        assert_eq!(trigger.observe(IntersectionSample::entering(0.25)), TriggerAction::Keep);
        assert!(!trigger.is_visible());
        trigger.observe(IntersectionSample::entering(0.5));
        assert!(trigger.is_visible());
    }

    #[test]
    fn dispose_detaches_repeating_trigger() {
        let mut trigger = VisibilityTrigger::new(&TriggerOptions::repeating(0.0));
        trigger.observe(IntersectionSample::entering(1.0));
        trigger.dispose();
        assert!(trigger.is_detached());
        assert_eq!(trigger.observe(IntersectionSample::leaving()), TriggerAction::Detach);
        assert!(trigger.is_visible());
    }

    #[test]
    fn threshold_is_clamped() {
        let options = TriggerOptions::once(3.0).with_root_margin("0px 0px -10% 0px");
        assert_eq!(options.clamped_threshold(), 1.0);
        assert_eq!(options.root_margin, "0px 0px -10% 0px");
        assert_eq!(TriggerOptions::once(f64::NAN).clamped_threshold(), 0.0);
    }
}
