//! sRGB color value with hex parsing and linear blending.
//!
//! Colors are stored as sRGB-encoded channels in `[0, 1]` and blended in
//! that space, the same way CSS color interpolation behaves. GPU uploads
//! convert to linear with [`Color::to_linear`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque RGB color with channels in `[0, 1]` (sRGB encoded).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

/// Failure to parse a CSS-style hex color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string does not start with `#`.
    MissingHash(String),
    /// Digit count is not 3, 6 or 8.
    BadLength(String),
    /// A character is not a hex digit.
    BadDigit(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHash(s) => write!(f, "color `{s}` must start with '#'"),
            Self::BadLength(s) => {
                write!(f, "color `{s}` must have 3, 6 or 8 hex digits")
            }
            Self::BadDigit(s) => write!(f, "color `{s}` has a non-hex digit"),
        }
    }
}

impl std::error::Error for ColorParseError {}

impl Color {
    /// Pure white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    /// Pure black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Color from sRGB channels in `[0, 1]`.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Color from 8-bit sRGB channels.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`. Alpha is accepted and
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] when the string is not a hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let trimmed = hex.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(trimmed.to_owned()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(trimmed.to_owned()));
        }
        let byte = |s: &str| {
            u8::from_str_radix(s, 16)
                .map_err(|_| ColorParseError::BadDigit(trimmed.to_owned()))
        };
        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, c) in channels.iter_mut().zip(digits.chars()) {
                    let nibble = byte(&c.to_string())?;
                    *slot = nibble * 17;
                }
                Ok(Self::from_rgb8(channels[0], channels[1], channels[2]))
            }
            6 | 8 => Ok(Self::from_rgb8(
                byte(&digits[0..2])?,
                byte(&digits[2..4])?,
                byte(&digits[4..6])?,
            )),
            _ => Err(ColorParseError::BadLength(trimmed.to_owned())),
        }
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Channels quantized to 8 bits.
    #[must_use]
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// Blend toward `other` by `t` (0 = self, 1 = other). `t` is not clamped.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    /// Channels as an array.
    #[must_use]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Linear-light channels for shading and sRGB render targets.
    #[must_use]
    pub fn to_linear(self) -> [f32; 3] {
        let decode = |c: f32| {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        [decode(self.r), decode(self.g), decode(self.b)]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl std::str::FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        let c = Color::from_hex("#7fffd4").unwrap();
        assert_eq!(c.to_rgb8(), [0x7f, 0xff, 0xd4]);
    }

    #[test]
    fn eight_digit_hex_drops_alpha() {
        let c = Color::from_hex("#09f729ff").unwrap();
        assert_eq!(c.to_hex(), "#09f729");
    }

    #[test]
    fn three_digit_hex_expands() {
        let c = Color::from_hex("#fa0").unwrap();
        assert_eq!(c.to_rgb8(), [0xff, 0xaa, 0x00]);
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!(matches!(
            Color::from_hex("ffffff"),
            Err(ColorParseError::MissingHash(_))
        ));
        assert!(matches!(
            Color::from_hex("#ffff"),
            Err(ColorParseError::BadLength(_))
        ));
        assert!(matches!(
            Color::from_hex("#gggggg"),
            Err(ColorParseError::BadDigit(_))
        ));
    }

    #[test]
    fn lerp_halfway_to_dark_tone() {
        let section = Color::from_hex("#ffd700").unwrap();
        let dark = Color::from_hex("#1e1a20").unwrap();
        let mixed = section.lerp(dark, 0.5);
        assert!((mixed.r - (255.0 + 30.0) / 510.0).abs() < 1e-6);
        assert!((mixed.g - (215.0 + 26.0) / 510.0).abs() < 1e-6);
        assert!((mixed.b - 32.0 / 510.0).abs() < 1e-6);
    }

    #[test]
    fn lerp_endpoints() {
        let a = Color::new(0.2, 0.4, 0.6);
        assert_eq!(a.lerp(Color::WHITE, 0.0), a);
        assert_eq!(a.lerp(Color::WHITE, 1.0), Color::WHITE);
    }

    #[test]
    fn linear_conversion_keeps_extremes() {
        assert_eq!(Color::BLACK.to_linear(), [0.0, 0.0, 0.0]);
        let white = Color::WHITE.to_linear();
        assert!(white.iter().all(|c| (c - 1.0).abs() < 1e-6));
        let mid = Color::new(0.5, 0.5, 0.5).to_linear()[0];
        assert!((mid - 0.214).abs() < 1e-3);
    }

    #[test]
    fn serde_uses_hex_strings() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            color: Color,
        }
        let w: Wrapper = toml::from_str("color = \"#e6eee8ff\"").unwrap();
        assert_eq!(w.color.to_hex(), "#e6eee8");
        let out = toml::to_string(&w).unwrap();
        assert!(out.contains("\"#e6eee8\""));
        assert!(toml::from_str::<Wrapper>("color = \"blue\"").is_err());
    }
}
