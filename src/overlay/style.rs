//! Pulse-driven title color and glow.

use crate::util::Color;

/// Share of the pulse applied to the title color and glow.
const TITLE_PULSE_SHARE: f32 = 0.3;
/// Glow blur radius at rest, in pixels.
const GLOW_BASE_PX: f32 = 5.0;
/// Additional glow at full pulse intensity, in pixels.
const GLOW_RANGE_PX: f32 = 15.0;

/// Per-frame color and glow of every title.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleStyle {
    /// Text color.
    pub color: Color,
    /// Text-shadow blur radius in pixels.
    pub glow_px: f32,
}

impl TitleStyle {
    /// Style for the current section color and pulse factor (0 to 1).
    #[must_use]
    pub fn from_pulse(section_color: Color, pulse: f32) -> Self {
        let intensity = pulse * TITLE_PULSE_SHARE;
        Self {
            color: section_color.lerp(Color::WHITE, intensity),
            glow_px: GLOW_BASE_PX + intensity * GLOW_RANGE_PX,
        }
    }

    /// CSS `color` value.
    #[must_use]
    pub fn css_color(&self) -> String {
        self.color.to_hex()
    }

    /// CSS `text-shadow` value: a centered glow in the text color.
    #[must_use]
    pub fn css_text_shadow(&self) -> String {
        format!("0 0 {:.2}px {}", self.glow_px, self.color.to_hex())
    }
}
