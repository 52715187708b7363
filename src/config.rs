//! Site Configuration
//!
//! Reveal gates and animation timings.

use std::time::Duration;

use leptos_reveal::RevealOptions;
use log::LevelFilter;

/// Log level for the browser console
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;
/// Lines kept by the in-memory logger
pub const LOG_CAPACITY: usize = rolling_logger::DEFAULT_CAPACITY;

/// Stagger step and per-element duration of a cascading reveal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealTiming {
    pub step: Duration,
    pub duration: Duration,
}

/// Gallery cards: 150ms apart, 600ms each
pub const GALLERY_TIMING: RevealTiming = RevealTiming {
    step: Duration::from_millis(150),
    duration: Duration::from_millis(600),
};

/// Menu cards inside a section
pub const CARD_TIMING: RevealTiming = RevealTiming {
    step: Duration::from_millis(100),
    duration: Duration::from_millis(500),
};

/// Section heading and banners
pub const SECTION_TIMING: RevealTiming = RevealTiming {
    step: Duration::ZERO,
    duration: Duration::from_millis(800),
};

/// Hero elements, in order: brand, divider, established, tagline, call to action
pub const HERO_DELAYS: [Duration; 5] = [
    Duration::from_millis(200),
    Duration::from_millis(400),
    Duration::from_millis(500),
    Duration::from_millis(800),
    Duration::from_millis(1000),
];
pub const HERO_DURATION: Duration = Duration::from_millis(800);

/// Decorative hero frames, outer then inner
pub const HERO_FRAME_DELAYS: [Duration; 2] = [Duration::from_millis(300), Duration::from_millis(600)];
pub const HERO_FRAME_DURATION: Duration = Duration::from_millis(1200);

/// The gallery starts revealing 100px before it scrolls in
pub fn gallery_gate() -> RevealOptions {
    RevealOptions::default().with_root_margin("100px 0px")
}

/// Page notice waits until a tenth of it is visible
pub fn notice_gate() -> RevealOptions {
    RevealOptions::default().with_threshold(0.1)
}

/// Menu sections reveal on any overlap
pub fn section_gate() -> RevealOptions {
    RevealOptions::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLES: &str = include_str!("../styles.css");

    #[test]
    fn test_gates() {
        assert_eq!(gallery_gate().root_margin, "100px 0px");
        assert_eq!(gallery_gate().threshold, 0.0);
        assert_eq!(notice_gate().threshold, 0.1);
        assert_eq!(section_gate(), RevealOptions::default());
    }

    #[test]
    fn test_hero_frames_staggered() {
        assert_eq!(HERO_FRAME_DELAYS, [Duration::from_millis(300), Duration::from_millis(600)]);
        assert!(HERO_FRAME_DURATION > HERO_DURATION);
    }

    #[test]
    fn test_card_hover_skips_stagger_delay() {
        let rule = STYLES
            .lines()
            .find(|line| line.starts_with(".menu-card.revealed:hover"))
            .expect("hover rule for revealed cards");
        assert!(rule.contains("transition: transform 0.2s 0s"));
    }
}
