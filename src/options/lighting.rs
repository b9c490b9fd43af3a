use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Directional light and toon material parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
pub struct LightingOptions {
    /// Light position; the light shines from here toward the origin.
    #[schemars(skip)]
    pub light_position: [f32; 3],
    /// Initial directional light intensity.
    #[schemars(title = "Light Intensity", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub light_intensity: f32,
    /// Initial material roughness (narrows/widens the toon highlight).
    #[schemars(title = "Roughness", range(min = 0.05, max = 1.0), extend("step" = 0.01))]
    pub roughness: f32,
    /// Brightness of each band of the toon gradient map, darkest first.
    #[schemars(skip)]
    pub toon_ramp: [f32; 3],
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            light_position: [1.0, 1.0, 0.0],
            light_intensity: 1.5,
            roughness: 1.0,
            toon_ramp: [0.2, 0.55, 1.0],
        }
    }
}
