use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and parallax parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Camera distance from the mesh plane along +z.
    #[schemars(skip)]
    pub distance: f32,
    /// Rig offset per unit of normalized cursor position.
    #[schemars(title = "Parallax", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub parallax_strength: f32,
    /// Exponential smoothing rate toward the parallax target (per second).
    #[schemars(title = "Parallax Smoothing", range(min = 0.5, max = 20.0), extend("step" = 0.5))]
    pub parallax_smoothing: f32,
    /// Upper bound on the device pixel ratio used for the surface size.
    #[schemars(skip)]
    pub max_pixel_ratio: f64,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 35.0,
            znear: 0.1,
            zfar: 100.0,
            distance: 6.0,
            parallax_strength: 0.5,
            parallax_smoothing: 5.0,
            max_pixel_ratio: 2.0,
        }
    }
}
