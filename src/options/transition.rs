use serde::{Deserialize, Serialize};

use crate::util::EasingFunction;

/// Tween parameters for the batch fired on each section change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TransitionOptions {
    /// Duration of every transition tween, in seconds.
    pub duration: f32,
    /// Spin added to the entered section's mesh (radians per axis).
    pub spin: [f32; 3],
    /// How far the background moves from the section color toward the
    /// dark base tone (0 = section color, 1 = base tone).
    pub background_mix: f32,
    /// Range the material roughness is randomized into.
    pub roughness_range: [f32; 2],
    /// Range the light intensity is randomized into.
    pub light_intensity_range: [f32; 2],
    /// Easing for spin, background and particle color tweens.
    pub easing: EasingFunction,
    /// Easing for roughness and light intensity tweens.
    pub material_easing: EasingFunction,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            duration: 1.5,
            spin: [6.0, 3.0, 1.5],
            background_mix: 0.5,
            roughness_range: [0.3, 0.8],
            light_intensity_range: [1.0, 1.5],
            easing: EasingFunction::POWER2_IN_OUT,
            material_easing: EasingFunction::POWER1_IN_OUT,
        }
    }
}
