//! Perspective camera and the rig that moves it with scroll and cursor.

/// Projection camera and its GPU uniform.
pub mod core;
/// Scroll height and cursor parallax.
pub mod rig;

pub use self::core::{Camera, CameraUniform};
pub use rig::CameraRig;
