use glam::Vec2;

use crate::scene::SECTION_COUNT;

/// Section index for a scroll offset: `round(offset / height)`, clamped
/// to the available sections. A degenerate viewport maps to section 0.
#[must_use]
pub fn section_for_scroll(offset: f32, viewport_height: f32) -> usize {
    if viewport_height <= 0.0 || !offset.is_finite() {
        return 0;
    }
    let raw = (offset / viewport_height).round();
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(SECTION_COUNT - 1)
    }
}

/// Cursor position normalized to `-0.5..0.5` on each axis, origin at the
/// viewport center.
#[must_use]
pub fn normalize_cursor(x: f32, y: f32, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(x / viewport.x - 0.5, y / viewport.y - 0.5)
}

/// Transient input state: scroll offset, current section, normalized
/// cursor and viewport metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct InputState {
    scroll: f32,
    section: usize,
    cursor: Vec2,
    viewport: Vec2,
    pixel_ratio: f64,
}

impl InputState {
    /// State for a viewport of the given CSS size, scrolled to the top.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            scroll: 0.0,
            section: 0,
            cursor: Vec2::ZERO,
            viewport: Vec2::new(width, height),
            pixel_ratio: 1.0,
        }
    }

    /// Scroll offset in CSS pixels.
    #[must_use]
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Current section index, always `< SECTION_COUNT`.
    #[must_use]
    pub fn section(&self) -> usize {
        self.section
    }

    /// Normalized cursor position (`-0.5..0.5` per axis).
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Viewport size in CSS pixels.
    #[must_use]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Clamped device pixel ratio used for the render surface.
    #[must_use]
    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    /// Scroll progress in viewport heights (0 at the first section).
    #[must_use]
    pub fn scroll_in_viewports(&self) -> f32 {
        if self.viewport.y > 0.0 {
            self.scroll / self.viewport.y
        } else {
            0.0
        }
    }

    /// Record a scroll offset. Returns the new section if it changed.
    pub(crate) fn set_scroll(&mut self, offset: f32) -> Option<usize> {
        self.scroll = offset;
        let section = section_for_scroll(offset, self.viewport.y);
        if section == self.section {
            return None;
        }
        self.section = section;
        Some(section)
    }

    pub(crate) fn set_cursor(&mut self, x: f32, y: f32) {
        self.cursor = normalize_cursor(x, y, self.viewport);
    }

    pub(crate) fn set_viewport(
        &mut self,
        width: f32,
        height: f32,
        pixel_ratio: f64,
    ) {
        self.viewport = Vec2::new(width, height);
        self.pixel_ratio = pixel_ratio;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_is_rounded_scroll_over_height() {
        assert_eq!(section_for_scroll(0.0, 800.0), 0);
        assert_eq!(section_for_scroll(399.0, 800.0), 0);
        assert_eq!(section_for_scroll(400.0, 800.0), 1);
        assert_eq!(section_for_scroll(800.0, 800.0), 1);
        assert_eq!(section_for_scroll(1200.0, 800.0), 2);
    }

    #[test]
    fn section_is_clamped_to_available_sections() {
        assert_eq!(section_for_scroll(10_000.0, 800.0), SECTION_COUNT - 1);
        assert_eq!(section_for_scroll(-300.0, 800.0), 0);
        assert_eq!(section_for_scroll(500.0, 0.0), 0);
        assert_eq!(section_for_scroll(f32::NAN, 800.0), 0);
    }

    #[test]
    fn cursor_is_centered_and_normalized() {
        let vp = Vec2::new(800.0, 600.0);
        assert_eq!(normalize_cursor(400.0, 300.0, vp), Vec2::ZERO);
        let c = normalize_cursor(320.0, 600.0, vp);
        assert!((c.x + 0.1).abs() < 1e-6);
        assert!((c.y - 0.5).abs() < 1e-6);
        assert_eq!(normalize_cursor(10.0, 10.0, Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn set_scroll_reports_only_changes() {
        let mut state = InputState::new(1024.0, 800.0);
        assert_eq!(state.set_scroll(100.0), None);
        assert_eq!(state.set_scroll(800.0), Some(1));
        assert_eq!(state.set_scroll(850.0), None);
        assert_eq!(state.section(), 1);
        assert_eq!(state.scroll(), 850.0);
    }

    #[test]
    fn scroll_in_viewports() {
        let mut state = InputState::new(1024.0, 800.0);
        let _ = state.set_scroll(1200.0);
        assert!((state.scroll_in_viewports() - 1.5).abs() < 1e-6);
    }
}
