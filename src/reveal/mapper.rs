use serde::Deserialize;

/// Per-element reveal tuning.
///
/// `threshold` is the progress ratio where the element starts to appear and
/// `multiplier` is how many "full reveals" happen per unit of progress past
/// it, so `(0.2, 8.0)` is fully visible at `0.325`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub multiplier: f64,
    /// Pixels the element sits below its resting place before revealing.
    pub start_offset: f64,
    /// Translation speed relative to the opacity ramp. 1.0 lands the
    /// element exactly when it becomes opaque.
    pub translate_scale: f64,
}

impl RevealConfig {
    pub const fn new(threshold: f64, multiplier: f64) -> Self {
        Self {
            threshold,
            multiplier,
            start_offset: 30.0,
            translate_scale: 1.0,
        }
    }

    pub const fn with_offset(mut self, start_offset: f64) -> Self {
        self.start_offset = start_offset;
        self
    }

    #[cfg(test)]
    pub const fn with_translate_scale(mut self, translate_scale: f64) -> Self {
        self.translate_scale = translate_scale;
        self
    }

    /// Same config shifted `step` further down the page, for staggering
    /// siblings.
    pub fn staggered(self, index: usize, step: f64) -> Self {
        Self {
            threshold: (self.threshold + step * index as f64).clamp(0.0, 1.0),
            ..self
        }
    }

    fn hidden(&self) -> VisualState {
        VisualState {
            opacity: 0.0,
            translate_y: self.start_offset.max(0.0),
        }
    }
}

/// A partial [`RevealConfig`] read from content, layered over a preset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealOverride {
    pub threshold: Option<f64>,
    pub multiplier: Option<f64>,
    pub start_offset: Option<f64>,
    pub translate_scale: Option<f64>,
}

impl RevealOverride {
    pub fn apply(&self, base: RevealConfig) -> RevealConfig {
        RevealConfig {
            threshold: self.threshold.unwrap_or(base.threshold),
            multiplier: self.multiplier.unwrap_or(base.multiplier),
            start_offset: self.start_offset.unwrap_or(base.start_offset),
            translate_scale: self.translate_scale.unwrap_or(base.translate_scale),
        }
    }

    /// Name of the first field outside its allowed range, if any.
    pub fn invalid_field(&self) -> Option<&'static str> {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        let positive = |v: f64| v.is_finite() && v > 0.0;
        let non_negative = |v: f64| v.is_finite() && v >= 0.0;
        if self.threshold.map_or(false, |v| !in_unit(v)) {
            Some("threshold")
        } else if self.multiplier.map_or(false, |v| !positive(v)) {
            Some("multiplier")
        } else if self.start_offset.map_or(false, |v| !non_negative(v)) {
            Some("start_offset")
        } else if self.translate_scale.map_or(false, |v| !positive(v)) {
            Some("translate_scale")
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub translate_y: f64,
}

impl VisualState {
    #[cfg(test)]
    pub const VISIBLE: VisualState = VisualState {
        opacity: 1.0,
        translate_y: 0.0,
    };

    pub fn is_revealed(&self) -> bool {
        self.opacity >= 1.0
    }

    pub fn to_style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.1}px);",
            self.opacity, self.translate_y
        )
    }
}

/// Maps a progress ratio to opacity and vertical offset.
///
/// Revealing starts strictly after the threshold: at `progress == threshold`
/// the element is still hidden.
pub fn map_to_visual(progress: f64, config: &RevealConfig) -> VisualState {
    if !progress.is_finite() || progress <= config.threshold {
        return config.hidden();
    }
    let ramp = (progress - config.threshold) * config.multiplier.max(f64::MIN_POSITIVE);
    let start = config.start_offset.max(0.0);
    VisualState {
        opacity: ramp.min(1.0),
        translate_y: (start - ramp * start * config.translate_scale).max(0.0),
    }
}

/// Keeps the most revealed state seen so far.
///
/// Elements never fade back out when the user scrolls up again; the latch
/// only moves towards full opacity and zero offset.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealLatch {
    config: RevealConfig,
    current: VisualState,
}

impl RevealLatch {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            current: config.hidden(),
            config,
        }
    }

    #[cfg(test)]
    pub fn current(&self) -> VisualState {
        self.current
    }

    /// Feeds a new progress value and returns the latched state.
    pub fn update(&mut self, progress: f64) -> VisualState {
        let next = map_to_visual(progress, &self.config);
        self.current = VisualState {
            opacity: self.current.opacity.max(next.opacity),
            translate_y: self.current.translate_y.min(next.translate_y),
        };
        self.current
    }

    /// Like [`RevealLatch::update`], switching to `config` first. What is
    /// already revealed stays revealed under the new config.
    pub fn update_with(&mut self, config: RevealConfig, progress: f64) -> VisualState {
        self.config = config;
        self.update(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const STAGGER: RevealConfig = RevealConfig::new(0.2, 8.0);

    #[test]
    fn hidden_at_and_below_threshold() {
        let at = map_to_visual(0.2, &STAGGER);
        assert_eq!(at.opacity, 0.0);
        assert_eq!(at.translate_y, 30.0);
        assert_eq!(map_to_visual(0.05, &STAGGER).opacity, 0.0);
    }

    #[test]
    fn ramps_after_threshold() {
        let state = map_to_visual(0.25, &STAGGER);
        assert!((state.opacity - 0.4).abs() < 1e-9);
        assert!((state.translate_y - 18.0).abs() < 1e-9);
    }

    #[test]
    fn saturates() {
        assert_eq!(map_to_visual(0.5, &STAGGER), VisualState::VISIBLE);
        assert_eq!(map_to_visual(1.0, &STAGGER), VisualState::VISIBLE);
    }

    #[test]
    fn custom_offset_and_scale() {
        let config = RevealConfig::new(0.0, 2.0).with_offset(15.0).with_translate_scale(0.5);
        let state = map_to_visual(0.25, &config);
        assert!((state.opacity - 0.5).abs() < 1e-9);
        assert!((state.translate_y - 11.25).abs() < 1e-9);
    }

    #[test]
    fn latch_keeps_full_reveal_on_scroll_back() {
        let mut latch = RevealLatch::new(STAGGER);
        let seen: Vec<f64> = [0.1, 0.3, 0.5, 0.2]
            .into_iter()
            .map(|p| latch.update(p).opacity)
            .collect();
        assert_eq!(seen[0], 0.0);
        assert!((seen[1] - 0.8).abs() < 1e-9);
        assert_eq!(seen[2], 1.0);
        assert_eq!(seen[3], 1.0);
        assert!(latch.current().is_revealed());
        assert_eq!(latch.current().translate_y, 0.0);
    }

    #[test]
    fn staggered_thresholds() {
        let base = RevealConfig::new(0.1, 6.0);
        assert!((base.staggered(2, 0.05).threshold - 0.2).abs() < 1e-9);
        assert_eq!(base.staggered(100, 0.05).threshold, 1.0);
        assert_eq!(base.staggered(3, 0.05).multiplier, 6.0);
    }

    #[test]
    fn style_string() {
        let style = VisualState { opacity: 0.5, translate_y: 12.0 }.to_style();
        assert_eq!(style, "opacity: 0.500; transform: translateY(12.0px);");
    }

    #[test]
    fn config_swap_keeps_revealed_state() {
        let mut latch = RevealLatch::new(STAGGER);
        assert_eq!(latch.update(0.5), VisualState::VISIBLE);
        let later = RevealConfig::new(0.9, 2.0);
        assert_eq!(latch.update_with(later, 0.0), VisualState::VISIBLE);
        assert_eq!(latch.update_with(later, 0.95), VisualState::VISIBLE);
    }

    #[test]
    fn config_swap_before_reveal_follows_new_config() {
        let mut latch = RevealLatch::new(STAGGER);
        assert_eq!(latch.update(0.1).opacity, 0.0);
        let state = latch.update_with(RevealConfig::new(0.0, 4.0), 0.1);
        assert!((state.opacity - 0.4).abs() < 1e-9);
    }

    #[test]
    fn partial_override_keeps_preset_fields() {
        let preset = RevealConfig::new(0.35, 6.0).with_offset(20.0);
        let patch: RevealOverride = serde_json::from_str(r#"{"threshold": 0.4, "multiplier": 6}"#)
            .expect("valid override");
        let config = patch.apply(preset);
        assert_eq!(config.threshold, 0.4);
        assert_eq!(config.multiplier, 6.0);
        assert_eq!(config.start_offset, 20.0);
        assert_eq!(config.translate_scale, 1.0);
        assert_eq!(RevealOverride::default().apply(preset), preset);
    }

    #[test]
    fn override_ranges() {
        let parse = |raw: &str| -> RevealOverride { serde_json::from_str(raw).expect("valid json") };
        assert_eq!(parse(r#"{"threshold": 1.0, "multiplier": 0.5}"#).invalid_field(), None);
        assert_eq!(parse(r#"{"threshold": 1.5}"#).invalid_field(), Some("threshold"));
        assert_eq!(parse(r#"{"multiplier": -3}"#).invalid_field(), Some("multiplier"));
        assert_eq!(parse(r#"{"multiplier": 0}"#).invalid_field(), Some("multiplier"));
        assert_eq!(parse(r#"{"start_offset": -1}"#).invalid_field(), Some("start_offset"));
        assert_eq!(parse(r#"{"translate_scale": -1}"#).invalid_field(), Some("translate_scale"));
    }

    proptest! {
        #[test]
        fn opacity_is_monotonic(
            threshold in 0.0f64..1.0,
            multiplier in 0.1f64..20.0,
            a in 0.0f64..1.0,
            b in 0.0f64..1.0
        ) {
            let config = RevealConfig::new(threshold, multiplier);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let low = map_to_visual(lo, &config);
            let high = map_to_visual(hi, &config);
            prop_assert!(low.opacity <= high.opacity);
            prop_assert!(low.translate_y >= high.translate_y);
            prop_assert!((0.0..=1.0).contains(&high.opacity));
            prop_assert!(high.translate_y >= 0.0);
        }

        #[test]
        fn latch_never_decreases(seq in proptest::collection::vec(0.0f64..1.0, 1..32)) {
            let mut latch = RevealLatch::new(STAGGER);
            let mut last = 0.0;
            for progress in seq {
                let opacity = latch.update(progress).opacity;
                prop_assert!(opacity >= last);
                last = opacity;
            }
        }
    }
}
