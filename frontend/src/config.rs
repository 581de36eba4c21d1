use std::time::Duration;

use crate::contact::handoff::SubmissionMode;

/// Which submission strategy this build ships with.
///
/// Selected at build time with `CONTACT_MODE=email`; anything else, or no
/// value at all, builds the inert demo form.
pub fn submission_mode() -> SubmissionMode {
    SubmissionMode::from_build_flag(option_env!("CONTACT_MODE"))
}

// Reveal timings
pub const REVEAL_THRESHOLD: f64 = 0.2;
pub const REVEAL_DURATION: Duration = Duration::from_millis(550);
pub const HERO_CARD_DURATION: Duration = Duration::from_millis(650);
pub const STAGGER_DELAY_CHILDREN: Duration = Duration::from_millis(60);
pub const STAGGER_STEP: Duration = Duration::from_millis(80);

/// Starting look of a section before it reveals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pub opacity: f64,
    pub offset_px: f64,
    pub blur_px: f64,
}

// Not fully transparent so the page never looks empty if scripting stalls.
pub const SECTION_BASELINE: Baseline = Baseline {
    opacity: 0.72,
    offset_px: 18.0,
    blur_px: 6.0,
};

pub const HERO_BASELINE: Baseline = Baseline {
    opacity: 0.9,
    offset_px: 14.0,
    blur_px: 4.0,
};

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
