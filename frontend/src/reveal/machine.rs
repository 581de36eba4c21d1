use std::time::Duration;

use crate::config::{
    Baseline, HERO_BASELINE, REVEAL_DURATION, REVEAL_THRESHOLD, SECTION_BASELINE,
    STAGGER_DELAY_CHILDREN, STAGGER_STEP,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RevealState {
    Hidden,
    Revealing,
    Shown,
}

/// Delay of the `index`-th staggered child, in document order.
pub fn stagger_delay(index: usize) -> Duration {
    STAGGER_DELAY_CHILDREN + STAGGER_STEP * index as u32
}

/// Entrance animation of one section. Moves forward only and fires once.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealMachine {
    state: RevealState,
    reduced_motion: bool,
    baseline: Baseline,
    duration: Duration,
    staggered_children: usize,
}

impl RevealMachine {
    /// A below-the-fold section that reveals when scrolled into view.
    pub fn section(reduced_motion: bool) -> Self {
        Self {
            state: RevealState::Hidden,
            reduced_motion,
            baseline: SECTION_BASELINE,
            duration: REVEAL_DURATION,
            staggered_children: 0,
        }
    }

    /// Above-the-fold hero block. Starts almost opaque and animates on mount.
    pub fn hero(reduced_motion: bool, duration: Duration) -> Self {
        Self {
            baseline: HERO_BASELINE,
            duration,
            ..Self::section(reduced_motion)
        }
    }

    pub fn with_stagger(mut self, children: usize) -> Self {
        self.staggered_children = children;
        self
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Feeds one visibility sample. Returns how long until `settle` should be
    /// called if this sample started the reveal.
    pub fn on_visibility(&mut self, ratio: f64) -> Option<Duration> {
        if ratio < REVEAL_THRESHOLD {
            return None;
        }
        self.start()
    }

    /// Starts the reveal regardless of visibility. No-op once started.
    pub fn start(&mut self) -> Option<Duration> {
        if self.state != RevealState::Hidden {
            return None;
        }
        self.state = RevealState::Revealing;
        Some(self.settle_after())
    }

    /// Marks the transition finished. Returns whether anything changed.
    pub fn settle(&mut self) -> bool {
        if self.state != RevealState::Revealing {
            return false;
        }
        self.state = RevealState::Shown;
        true
    }

    /// Time from the start of the reveal until the last child has finished.
    pub fn settle_after(&self) -> Duration {
        if self.reduced_motion {
            return Duration::ZERO;
        }
        match self.staggered_children {
            0 => self.duration,
            n => self.duration + stagger_delay(n - 1),
        }
    }

    /// Style for the section itself, or for its `index`-th staggered child.
    pub fn style(&self, stagger_index: Option<usize>) -> RevealStyle {
        if self.reduced_motion {
            return RevealStyle::settled();
        }
        match self.state {
            RevealState::Hidden => RevealStyle {
                opacity: self.baseline.opacity,
                offset_px: self.baseline.offset_px,
                blur_px: self.baseline.blur_px,
                duration: Duration::ZERO,
                delay: Duration::ZERO,
            },
            RevealState::Revealing => RevealStyle {
                duration: self.duration,
                delay: stagger_index.map_or(Duration::ZERO, stagger_delay),
                ..RevealStyle::settled()
            },
            RevealState::Shown => RevealStyle::settled(),
        }
    }
}

/// Visual parameters handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub offset_px: f64,
    pub blur_px: f64,
    pub duration: Duration,
    pub delay: Duration,
}

impl RevealStyle {
    pub fn settled() -> Self {
        Self {
            opacity: 1.0,
            offset_px: 0.0,
            blur_px: 0.0,
            duration: Duration::ZERO,
            delay: Duration::ZERO,
        }
    }

    pub fn to_css(&self) -> String {
        let mut css = format!("opacity: {};", self.opacity);
        if self.offset_px == 0.0 {
            css.push_str(" transform: none;");
        } else {
            css.push_str(&format!(" transform: translateY({}px);", self.offset_px));
        }
        if self.blur_px == 0.0 {
            css.push_str(" filter: none;");
        } else {
            css.push_str(&format!(" filter: blur({}px);", self.blur_px));
        }
        if self.duration.is_zero() {
            css.push_str(" transition: none;");
        } else {
            let timing = format!(
                "{}ms ease-out {}ms",
                self.duration.as_millis(),
                self.delay.as_millis()
            );
            css.push_str(&format!(
                " transition: opacity {timing}, transform {timing}, filter {timing};"
            ));
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HERO_CARD_DURATION;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_hidden_with_section_baseline() {
        let m = RevealMachine::section(false);
        assert_eq!(m.state(), RevealState::Hidden);
        assert_eq!(
            m.style(None).to_css(),
            "opacity: 0.72; transform: translateY(18px); filter: blur(6px); transition: none;"
        );
    }

    #[test]
    fn below_threshold_does_not_trigger() {
        let mut m = RevealMachine::section(false);
        assert_eq!(m.on_visibility(0.0), None);
        assert_eq!(m.on_visibility(0.19), None);
        assert_eq!(m.state(), RevealState::Hidden);
        assert_eq!(m.on_visibility(0.2), Some(REVEAL_DURATION));
        assert_eq!(m.state(), RevealState::Revealing);
    }

    #[test]
    fn enter_leave_reenter_reveals_once() {
        let mut m = RevealMachine::section(false);
        let mut seen = vec![m.state()];
        let mut starts = 0;

        for ratio in [0.0, 0.5, 0.0, 0.8, 1.0, 0.0, 0.3] {
            let started = m.on_visibility(ratio).is_some();
            seen.push(m.state());
            if started {
                starts += 1;
                m.settle();
                seen.push(m.state());
            }
        }
        seen.dedup();

        assert_eq!(starts, 1);
        assert!(!m.settle());
        assert_eq!(
            seen,
            vec![RevealState::Hidden, RevealState::Revealing, RevealState::Shown]
        );
    }

    #[test]
    fn states_only_move_forward() {
        let mut m = RevealMachine::section(false);
        assert!(!m.settle());
        assert_eq!(m.state(), RevealState::Hidden);

        m.start();
        let revealing = m.state();
        assert!(m.settle());
        let shown = m.state();
        assert!(RevealState::Hidden < revealing && revealing < shown);

        assert_eq!(m.start(), None);
        assert_eq!(m.on_visibility(1.0), None);
        assert_eq!(m.state(), RevealState::Shown);
    }

    #[test]
    fn revealing_animates_to_end_state() {
        let mut m = RevealMachine::section(false);
        m.start();
        assert_eq!(
            m.style(None).to_css(),
            "opacity: 1; transform: none; filter: none; \
             transition: opacity 550ms ease-out 0ms, transform 550ms ease-out 0ms, filter 550ms ease-out 0ms;"
        );
        m.settle();
        assert_eq!(m.style(None), RevealStyle::settled());
    }

    #[test]
    fn staggered_children_follow_document_order() {
        let mut m = RevealMachine::section(false).with_stagger(4);
        m.start();
        let delays: Vec<u128> = (0..4)
            .map(|i| m.style(Some(i)).delay.as_millis())
            .collect();
        assert_eq!(delays, vec![60, 140, 220, 300]);
        assert_eq!(m.settle_after(), Duration::from_millis(550 + 300));
    }

    #[test]
    fn hero_keeps_high_baseline_opacity() {
        let m = RevealMachine::hero(false, HERO_CARD_DURATION);
        let style = m.style(None);
        assert_eq!(style.opacity, 0.9);
        assert_eq!(style.offset_px, 14.0);
        assert_eq!(style.blur_px, 4.0);
        assert!(style.opacity > RevealMachine::section(false).style(None).opacity);
    }

    #[test]
    fn reduced_motion_is_always_settled() {
        let mut m = RevealMachine::section(true).with_stagger(3);
        assert_eq!(m.style(None), RevealStyle::settled());
        assert_eq!(m.style(Some(2)), RevealStyle::settled());

        assert_eq!(m.on_visibility(1.0), Some(Duration::ZERO));
        assert_eq!(m.style(Some(1)), RevealStyle::settled());
        m.settle();
        assert_eq!(
            m.style(None).to_css(),
            "opacity: 1; transform: none; filter: none; transition: none;"
        );

        let hero = RevealMachine::hero(true, HERO_CARD_DURATION);
        assert_eq!(hero.style(None), RevealStyle::settled());
        assert_eq!(hero.settle_after(), Duration::ZERO);
    }
}
