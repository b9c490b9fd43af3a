//! Shared utilities: colors, easing curves, and the frame clock.

/// sRGB color value with hex parsing and blending.
pub mod color;
/// Easing curves for tweens.
pub mod easing;
/// Monotonic frame clock (elapsed/delta time, smoothed FPS).
pub mod frame_clock;

pub use color::{Color, ColorParseError};
pub use easing::{EaseMode, EasingFunction};
pub use frame_clock::{FrameClock, FrameTime};
