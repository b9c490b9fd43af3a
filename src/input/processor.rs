//! Converts raw platform events into input state updates.
//!
//! The `InputProcessor` owns the [`InputState`] and is the only thing that
//! mutates it. Scroll events that cross a section boundary yield a
//! [`SectionChange`]; everything else is absorbed silently.

use super::event::{InputEvent, SectionChange};
use super::state::InputState;

/// Upper bound on the device pixel ratio applied to the surface.
pub const DEFAULT_MAX_PIXEL_RATIO: f64 = 2.0;

/// Device pixel ratio actually rendered at: never below 1, never above
/// `max` (itself floored at 1).
#[must_use]
pub fn clamp_pixel_ratio(ratio: f64, max: f64) -> f64 {
    ratio.clamp(1.0, max.max(1.0))
}

/// Converts raw window/page events into [`InputState`] updates.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(change) = input_processor.handle_event(event) {
///     stage.begin_transition(change);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    state: InputState,
    max_pixel_ratio: f64,
}

impl InputProcessor {
    /// Create a processor for a viewport of the given CSS size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            state: InputState::new(width, height),
            max_pixel_ratio: DEFAULT_MAX_PIXEL_RATIO,
        }
    }

    /// Override the device pixel ratio cap.
    #[must_use]
    pub fn with_max_pixel_ratio(mut self, max: f64) -> Self {
        self.max_pixel_ratio = max.max(1.0);
        self
    }

    /// Change the device pixel ratio cap. Takes effect on the next resize.
    pub fn set_max_pixel_ratio(&mut self, max: f64) {
        self.max_pixel_ratio = max.max(1.0);
    }

    /// Read-only view of the tracked state.
    #[must_use]
    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Apply an event. Returns a [`SectionChange`] when a scroll event
    /// moves the page into a different section (edge-triggered: repeated
    /// scrolls within one section return `None`).
    pub fn handle_event(&mut self, event: InputEvent) -> Option<SectionChange> {
        match event {
            InputEvent::Scroll { offset } => {
                let from = self.state.section();
                let to = self.state.set_scroll(offset)?;
                log::debug!("section {from} -> {to} (scroll {offset:.0}px)");
                Some(SectionChange { from, to })
            }
            InputEvent::CursorMoved { x, y } => {
                self.state.set_cursor(x, y);
                None
            }
            InputEvent::Resized {
                width,
                height,
                device_pixel_ratio,
            } => {
                let ratio = clamp_pixel_ratio(device_pixel_ratio, self.max_pixel_ratio);
                self.state.set_viewport(width, height, ratio);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    #[test]
    fn pixel_ratio_is_clamped_to_one_and_cap() {
        assert_eq!(clamp_pixel_ratio(0.5, 2.0), 1.0);
        assert_eq!(clamp_pixel_ratio(1.5, 2.0), 1.5);
        assert_eq!(clamp_pixel_ratio(3.0, 2.0), 2.0);
        assert_eq!(clamp_pixel_ratio(3.0, 0.5), 1.0);
    }

    #[test]
    fn scroll_into_next_section_fires_once() {
        let mut input = InputProcessor::new(1280.0, 800.0);
        let first = input.handle_event(InputEvent::Scroll { offset: 800.0 });
        assert_eq!(first, Some(SectionChange { from: 0, to: 1 }));
        for offset in [810.0, 900.0, 1100.0] {
            assert_eq!(input.handle_event(InputEvent::Scroll { offset }), None);
        }
        assert_eq!(input.state().section(), 1);
    }

    #[test]
    fn scrolling_back_reports_reverse_change() {
        let mut input = InputProcessor::new(1280.0, 800.0);
        let _ = input.handle_event(InputEvent::Scroll { offset: 1600.0 });
        let back = input.handle_event(InputEvent::Scroll { offset: 0.0 });
        assert_eq!(back, Some(SectionChange { from: 2, to: 0 }));
    }

    #[test]
    fn cursor_uses_current_viewport() {
        let mut input = InputProcessor::new(800.0, 800.0);
        let _ = input.handle_event(InputEvent::Resized {
            width: 1000.0,
            height: 500.0,
            device_pixel_ratio: 1.0,
        });
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 750.0, y: 125.0 }),
            None
        );
        assert_eq!(input.state().cursor(), Vec2::new(0.25, -0.25));
    }

    #[test]
    fn resize_clamps_pixel_ratio_and_keeps_section() {
        let mut input = InputProcessor::new(800.0, 800.0);
        let _ = input.handle_event(InputEvent::Scroll { offset: 800.0 });
        let change = input.handle_event(InputEvent::Resized {
            width: 800.0,
            height: 400.0,
            device_pixel_ratio: 3.0,
        });
        assert_eq!(change, None);
        assert_eq!(input.state().pixel_ratio(), 2.0);
        // Only scroll events recompute the section.
        assert_eq!(input.state().section(), 1);
    }
}
