use log::Level;

use crate::reveal::mapper::RevealConfig;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://curiouslabs.dev"
}

pub const SITE_NAME: &str = "CuriousLabs";
pub const CONTACT_EMAIL: &str = "hello@curiouslabs.dev";

pub const MOBILE_QUERY: &str = "(max-width: 768px)";

/// Nav bar switches to its solid background past this offset.
pub const NAV_SCROLLED_OFFSET: f64 = 600.0;

pub const AUTO_SCROLL_SPEED_PX_PER_SEC: f64 = 400.0;

pub const TESTIMONIAL_ROTATE_MS: u32 = 6000;

/// Progress where each hero caption takes over.
pub const HERO_STEPS: [f64; 3] = [0.08, 0.18, 0.3];

pub const CARD: RevealConfig = RevealConfig::new(0.15, 8.0);
pub const METRIC: RevealConfig = RevealConfig::new(0.35, 6.0).with_offset(20.0);
pub const FOOTER: RevealConfig = RevealConfig::new(0.8, 10.0).with_offset(15.0);

/// Threshold distance between siblings in a staggered group.
pub const STAGGER_STEP: f64 = 0.04;

pub fn page_title(page: &str) -> String {
    if page.is_empty() {
        SITE_NAME.to_string()
    } else {
        format!("{} | {}", page, SITE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::mapper::RevealLatch;
    use crate::reveal::progress::ScrollState;

    #[test]
    fn titles() {
        assert_eq!(page_title(""), "CuriousLabs");
        assert_eq!(page_title("Museum"), "Museum | CuriousLabs");
    }

    #[test]
    fn presets_are_in_range() {
        for preset in [CARD, METRIC, FOOTER] {
            assert!((0.0..=1.0).contains(&preset.threshold));
            assert!(preset.multiplier > 0.0);
        }
        assert!(HERO_STEPS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn presets_stay_hidden_before_first_measurement() {
        let first = ScrollState::default().progress();
        assert_eq!(first, 0.0);
        for preset in [CARD, METRIC, FOOTER] {
            let mut latch = RevealLatch::new(preset);
            assert_eq!(latch.update(first).opacity, 0.0);
            let partial = latch.update(preset.threshold + 0.01).opacity;
            assert!(partial > 0.0 && partial < 1.0);
        }
    }
}
