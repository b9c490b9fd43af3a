use serde::{Deserialize, Serialize};

/// Scene layout and particle cloud parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneOptions {
    /// Number of ambient particles.
    pub particle_count: usize,
    /// Width (x and z) of the square the particles are scattered over.
    pub particle_spread: f32,
    /// Height of the particle band above the origin.
    pub particle_height: f32,
    /// Particle size in clip units (size-attenuated).
    pub particle_size: f32,
    /// Amplitude of the particle cloud's vertical bobbing.
    pub particle_bob_amplitude: f32,
    /// Vertical distance between consecutive section meshes.
    pub objects_distance: f32,
    /// Horizontal offset of the section meshes (alternating sign).
    pub mesh_offset_x: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            particle_count: 200,
            particle_spread: 10.0,
            particle_height: 1.0,
            particle_size: 0.03,
            particle_bob_amplitude: 0.2,
            objects_distance: 4.0,
            mesh_offset_x: 2.0,
        }
    }
}
