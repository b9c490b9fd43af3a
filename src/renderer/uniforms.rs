//! GPU uniform layouts. Each struct must match its WGSL counterpart.

use crate::scene::{DirectionalLight, PointsMaterial, SectionMesh, ToonMaterial};

/// Directional light (`scrollscape::lighting::DirectionalLight`).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    /// Direction the light travels.
    pub direction: [f32; 3],
    /// Intensity multiplier.
    pub intensity: f32,
    /// Linear light color.
    pub color: [f32; 3],
    pub(crate) _pad: f32,
}

impl LightUniform {
    /// Uniform for a scene light.
    #[must_use]
    pub fn from_light(light: &DirectionalLight) -> Self {
        Self {
            direction: light.direction().to_array(),
            intensity: light.intensity,
            color: light.color.to_linear(),
            _pad: 0.0,
        }
    }
}

/// Per-mesh toon material and transform (`mesh.wgsl` `MaterialUniform`).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    /// Object-to-world matrix.
    pub model: [[f32; 4]; 4],
    /// Linear RGB color, alpha unused.
    pub color: [f32; 4],
    /// x = roughness.
    pub params: [f32; 4],
}

impl MaterialUniform {
    /// Uniform for one section mesh drawn with the toon material.
    #[must_use]
    pub fn new(mesh: &SectionMesh, material: &ToonMaterial) -> Self {
        let [r, g, b] = material.color.to_linear();
        Self {
            model: mesh.model_matrix().to_cols_array_2d(),
            color: [r, g, b, 1.0],
            params: [material.roughness, 0.0, 0.0, 0.0],
        }
    }
}

/// Particle material (`particles.wgsl` `PointsUniform`).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointsUniform {
    /// Linear RGB color, alpha unused.
    pub color: [f32; 4],
    /// x = point size, y = vertical offset of the cloud.
    pub params: [f32; 4],
}

impl PointsUniform {
    /// Uniform for the particle cloud.
    #[must_use]
    pub fn new(material: &PointsMaterial, offset_y: f32) -> Self {
        let [r, g, b] = material.color.to_linear();
        Self {
            color: [r, g, b, 1.0],
            params: [material.size, offset_y, 0.0, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::options::Options;
    use crate::scene::Scene;

    #[test]
    fn sizes_match_wgsl_layouts() {
        assert_eq!(size_of::<LightUniform>(), 32);
        assert_eq!(size_of::<MaterialUniform>(), 96);
        assert_eq!(size_of::<PointsUniform>(), 32);
    }

    #[test]
    fn uniforms_carry_scene_values() {
        let scene = Scene::build(&Options::default(), &mut StdRng::seed_from_u64(0));

        let light = LightUniform::from_light(&scene.light);
        assert_eq!(light.intensity, 1.5);
        assert!(light.color.iter().all(|c| (c - 1.0).abs() < 1e-5));
        let dir = Vec3::from(light.direction);
        assert!((dir.length() - 1.0).abs() < 1e-6);

        let material = MaterialUniform::new(&scene.meshes[1], &scene.toon);
        assert_eq!(material.model[3], [-2.0, -4.0, 0.0, 1.0]);
        assert_eq!(material.params[0], 1.0);

        let points = PointsUniform::new(&scene.points, 0.1);
        assert_eq!(points.params, [0.03, 0.1, 0.0, 0.0]);
    }
}
