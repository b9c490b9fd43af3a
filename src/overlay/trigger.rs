//! Scroll-scrubbed entrance of the section titles.
//!
//! A title's animation is tied to where its top edge sits in the
//! viewport: progress is 0 while the top is below the start line (80 %
//! down the viewport) and 1 once it has risen past the end line (20 %).
//! Between the lines progress is scrubbed linearly with scroll and then
//! eased.

use crate::util::EasingFunction;

/// Callbacks fired as a title's top edge crosses the trigger lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    /// Crossed the start line scrolling down.
    Enter,
    /// Crossed the end line scrolling down.
    Leave,
    /// Crossed the end line scrolling back up.
    EnterBack,
    /// Crossed the start line scrolling back up.
    LeaveBack,
}

/// Which side of the trigger band a title is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerZone {
    /// Top edge still below the start line.
    Before,
    /// Between the start and end lines.
    Active,
    /// Top edge above the end line.
    After,
}

/// Start/end lines of the trigger band, as fractions of viewport height
/// measured from the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleTrigger {
    /// Line where the entrance starts (`top 80%`).
    pub start: f32,
    /// Line where the entrance completes (`top 20%`).
    pub end: f32,
}

impl Default for TitleTrigger {
    fn default() -> Self {
        Self {
            start: 0.8,
            end: 0.2,
        }
    }
}

impl TitleTrigger {
    /// Linear progress through the band for a title whose top edge sits
    /// `top` pixels below the viewport top.
    #[must_use]
    pub fn progress(&self, top: f32, viewport_height: f32) -> f32 {
        let span = (self.start - self.end) * viewport_height;
        if span <= 0.0 {
            return if top <= self.end * viewport_height { 1.0 } else { 0.0 };
        }
        ((self.start * viewport_height - top) / span).clamp(0.0, 1.0)
    }

    /// Zone of a title's top edge.
    #[must_use]
    pub fn zone(&self, top: f32, viewport_height: f32) -> TriggerZone {
        if top > self.start * viewport_height {
            TriggerZone::Before
        } else if top < self.end * viewport_height {
            TriggerZone::After
        } else {
            TriggerZone::Active
        }
    }
}

/// Events for a zone change, in the order they happen.
#[must_use]
pub fn crossings(from: TriggerZone, to: TriggerZone) -> &'static [TriggerEvent] {
    use TriggerEvent::{Enter, EnterBack, Leave, LeaveBack};
    use TriggerZone::{Active, After, Before};
    match (from, to) {
        (Before, Active) => &[Enter],
        (Active, After) => &[Leave],
        (Before, After) => &[Enter, Leave],
        (After, Active) => &[EnterBack],
        (Active, Before) => &[LeaveBack],
        (After, Before) => &[EnterBack, LeaveBack],
        _ => &[],
    }
}

/// Visual state of a title at some progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleReveal {
    /// CSS opacity.
    pub opacity: f32,
    /// Downward offset in CSS pixels.
    pub offset_y: f32,
}

/// From/to values and easing of the title entrance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleEntrance {
    /// Starting opacity.
    pub from_opacity: f32,
    /// Starting downward offset in pixels.
    pub from_offset_y: f32,
    /// Easing applied to scrubbed progress.
    pub easing: EasingFunction,
}

impl Default for TitleEntrance {
    fn default() -> Self {
        Self {
            from_opacity: 0.0,
            from_offset_y: 100.0,
            easing: EasingFunction::POWER3_OUT,
        }
    }
}

impl TitleEntrance {
    /// Opacity and offset at linear `progress` (0 to 1).
    #[must_use]
    pub fn reveal(&self, progress: f32) -> TitleReveal {
        let eased = self.easing.evaluate(progress);
        TitleReveal {
            opacity: self.from_opacity + (1.0 - self.from_opacity) * eased,
            offset_y: self.from_offset_y * (1.0 - eased),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: f32 = 1000.0;

    #[test]
    fn progress_scrubs_between_lines() {
        let trigger = TitleTrigger::default();
        assert_eq!(trigger.progress(900.0, H), 0.0);
        assert_eq!(trigger.progress(800.0, H), 0.0);
        assert!((trigger.progress(500.0, H) - 0.5).abs() < 1e-6);
        assert_eq!(trigger.progress(200.0, H), 1.0);
        assert_eq!(trigger.progress(-50.0, H), 1.0);
    }

    #[test]
    fn zones_follow_lines() {
        let trigger = TitleTrigger::default();
        assert_eq!(trigger.zone(900.0, H), TriggerZone::Before);
        assert_eq!(trigger.zone(500.0, H), TriggerZone::Active);
        assert_eq!(trigger.zone(100.0, H), TriggerZone::After);
    }

    #[test]
    fn crossing_events() {
        use TriggerZone::{Active, After, Before};
        assert_eq!(crossings(Before, Active), &[TriggerEvent::Enter]);
        assert_eq!(crossings(Active, After), &[TriggerEvent::Leave]);
        assert_eq!(crossings(After, Active), &[TriggerEvent::EnterBack]);
        assert_eq!(crossings(Active, Before), &[TriggerEvent::LeaveBack]);
        assert_eq!(
            crossings(After, Before),
            &[TriggerEvent::EnterBack, TriggerEvent::LeaveBack]
        );
        assert!(crossings(Active, Active).is_empty());
    }

    #[test]
    fn reveal_endpoints() {
        let entrance = TitleEntrance::default();
        assert_eq!(
            entrance.reveal(0.0),
            TitleReveal {
                opacity: 0.0,
                offset_y: 100.0
            }
        );
        let done = entrance.reveal(1.0);
        assert!((done.opacity - 1.0).abs() < 1e-6);
        assert!(done.offset_y.abs() < 1e-4);
    }

    #[test]
    fn reveal_is_front_loaded() {
        // power3.out: half the scroll gives 93.75% of the entrance.
        let mid = TitleEntrance::default().reveal(0.5);
        assert!((mid.opacity - 0.9375).abs() < 1e-6);
        assert!((mid.offset_y - 6.25).abs() < 1e-4);
    }
}
