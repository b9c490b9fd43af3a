//! Authoritative scene: section meshes, particle cloud, light, and the
//! two materials.
//!
//! The scene is plain CPU data. The stage mutates it every frame (idle
//! rotation, pulse, bob) and the animation scheduler writes tweened
//! properties into it through [`Animatable`]. The renderer only reads it.

pub mod mesh_gen;
pub mod particles;

use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;

pub use mesh_gen::{MeshData, Vertex};
pub use particles::ParticleCloud;

use crate::animation::transition::section_background;
use crate::animation::{Animatable, TweenTarget, TweenValue};
use crate::options::Options;
use crate::util::Color;

/// Number of page sections (and section meshes).
pub const SECTION_COUNT: usize = 3;

// ---------------------------------------------------------------------------
// Meshes
// ---------------------------------------------------------------------------

/// Which parametric shape a section mesh uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshShape {
    /// Torus (radius 1, tube 0.4).
    Torus,
    /// Capped cone (radius 1, height 2).
    Cone,
    /// (2, 3) torus knot (radius 0.8, tube 0.35).
    TorusKnot,
}

impl MeshShape {
    /// Shape of each section, in scroll order.
    pub const SECTIONS: [Self; SECTION_COUNT] =
        [Self::Torus, Self::Cone, Self::TorusKnot];

    /// Generate this shape's geometry.
    #[must_use]
    pub fn generate(self) -> MeshData {
        match self {
            Self::Torus => mesh_gen::torus(1.0, 0.4, 16, 60),
            Self::Cone => mesh_gen::cone(1.0, 2.0, 32),
            Self::TorusKnot => mesh_gen::torus_knot(0.8, 0.35, 100, 16, 2, 3),
        }
    }
}

/// One section's mesh and its transform.
#[derive(Debug, Clone)]
pub struct SectionMesh {
    /// Shape the geometry was generated from.
    pub shape: MeshShape,
    /// Triangle geometry.
    pub geometry: MeshData,
    /// World position.
    pub position: Vec3,
    /// Time-driven idle rotation (Euler XYZ radians).
    pub idle_rotation: Vec3,
    /// Accumulated spin from section transitions (Euler XYZ radians).
    pub spin: Vec3,
}

impl SectionMesh {
    /// Total rotation: idle rotation plus transition spin.
    #[must_use]
    pub fn rotation(&self) -> Vec3 {
        self.idle_rotation + self.spin
    }

    /// Object-to-world matrix.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        let r = self.rotation();
        Mat4::from_rotation_translation(
            Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            self.position,
        )
    }
}

// ---------------------------------------------------------------------------
// Materials and light
// ---------------------------------------------------------------------------

/// Cel-shaded material shared by the section meshes.
#[derive(Debug, Clone, PartialEq)]
pub struct ToonMaterial {
    /// Displayed color (rewritten by the pulse every frame).
    pub color: Color,
    /// Highlight roughness; lower is a tighter, brighter highlight.
    pub roughness: f32,
    /// Gradient-map brightness levels, darkest first.
    pub ramp: [f32; 3],
}

/// Size-attenuated point material for the particle cloud.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsMaterial {
    /// Tweened to the section color on section change.
    pub base_color: Color,
    /// Displayed color.
    pub color: Color,
    /// Point size in world units at unit distance.
    pub size: f32,
}

/// A directional light shining from `position` toward the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalLight {
    /// Light position.
    pub position: Vec3,
    /// Light color.
    pub color: Color,
    /// Intensity multiplier.
    pub intensity: f32,
}

impl DirectionalLight {
    /// Unit direction the light travels (position toward origin).
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        (-self.position).normalize_or(Vec3::NEG_Y)
    }
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// The whole 3D scene plus the page background it is composited over.
#[derive(Debug, Clone)]
pub struct Scene {
    /// One mesh per section, in scroll order.
    pub meshes: Vec<SectionMesh>,
    /// Ambient particles.
    pub particles: ParticleCloud,
    /// The single directional light.
    pub light: DirectionalLight,
    /// Material of the section meshes.
    pub toon: ToonMaterial,
    /// Material of the particle cloud.
    pub points: PointsMaterial,
    /// Page background color.
    pub background: Color,
    /// Bumped when particle positions or the gradient map change.
    generation: u64,
}

impl Scene {
    /// Build the scene from options. `rng` drives particle placement.
    pub fn build<R: Rng>(options: &Options, rng: &mut R) -> Self {
        let scene_opts = &options.scene;
        let meshes = MeshShape::SECTIONS
            .iter()
            .enumerate()
            .map(|(i, &shape)| {
                let side = if i % 2 == 0 { 1.0 } else { -1.0 };
                SectionMesh {
                    shape,
                    geometry: shape.generate(),
                    position: Vec3::new(
                        side * scene_opts.mesh_offset_x,
                        -scene_opts.objects_distance * i as f32,
                        0.0,
                    ),
                    idle_rotation: Vec3::ZERO,
                    spin: Vec3::ZERO,
                }
            })
            .collect();

        let particles = ParticleCloud::generate(
            rng,
            scene_opts.particle_count,
            scene_opts.particle_spread,
            scene_opts.particle_height,
        );

        let material_color = options.palette.material_color;
        log::debug!(
            "scene built: {} meshes, {} particles",
            SECTION_COUNT,
            particles.len()
        );

        Self {
            meshes,
            particles,
            light: DirectionalLight {
                position: Vec3::from(options.lighting.light_position),
                color: Color::WHITE,
                intensity: options.lighting.light_intensity,
            },
            toon: ToonMaterial {
                color: material_color,
                roughness: options.lighting.roughness,
                ramp: options.lighting.toon_ramp,
            },
            points: PointsMaterial {
                base_color: material_color,
                color: material_color,
                size: scene_opts.particle_size,
            },
            background: section_background(
                &options.palette,
                &options.transition,
                0,
            ),
            generation: 0,
        }
    }

    /// Re-scatter the particle cloud (e.g. after the count changed).
    pub fn regenerate_particles<R: Rng>(&mut self, options: &Options, rng: &mut R) {
        let offset_y = self.particles.offset_y;
        self.particles = ParticleCloud::generate(
            rng,
            options.scene.particle_count,
            options.scene.particle_spread,
            options.scene.particle_height,
        );
        self.particles.offset_y = offset_y;
        self.points.size = options.scene.particle_size;
        self.generation += 1;
    }

    /// Replace the toon gradient-map levels.
    pub fn set_toon_ramp(&mut self, ramp: [f32; 3]) {
        self.toon.ramp = ramp;
        self.generation += 1;
    }

    /// Set the material color of both materials (debug panel).
    pub fn set_material_color(&mut self, color: Color) {
        self.toon.color = color;
        self.points.base_color = color;
        self.points.color = color;
    }

    /// Geometry generation counter; changes when GPU buffers need a
    /// re-upload.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Animatable for Scene {
    fn value(&self, target: TweenTarget) -> Option<TweenValue> {
        match target {
            TweenTarget::MeshSpin(i) => {
                self.meshes.get(i).map(|m| TweenValue::Vector(m.spin))
            }
            TweenTarget::Background => Some(TweenValue::Color(self.background)),
            TweenTarget::ParticleColor => {
                Some(TweenValue::Color(self.points.base_color))
            }
            TweenTarget::Roughness => Some(TweenValue::Scalar(self.toon.roughness)),
            TweenTarget::LightIntensity => {
                Some(TweenValue::Scalar(self.light.intensity))
            }
        }
    }

    fn apply(&mut self, target: TweenTarget, value: TweenValue) {
        match (target, value) {
            (TweenTarget::MeshSpin(i), TweenValue::Vector(v)) => {
                if let Some(mesh) = self.meshes.get_mut(i) {
                    mesh.spin = v;
                }
            }
            (TweenTarget::Background, TweenValue::Color(c)) => self.background = c,
            (TweenTarget::ParticleColor, TweenValue::Color(c)) => {
                self.points.base_color = c;
            }
            (TweenTarget::Roughness, TweenValue::Scalar(v)) => self.toon.roughness = v,
            (TweenTarget::LightIntensity, TweenValue::Scalar(v)) => {
                self.light.intensity = v;
            }
            (target, value) => {
                log::warn!("ignoring {value:?} for {target:?}: kind mismatch");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn build() -> Scene {
        Scene::build(&Options::default(), &mut StdRng::seed_from_u64(42))
    }

    #[test]
    fn meshes_alternate_sides_and_step_down() {
        let scene = build();
        assert_eq!(scene.meshes.len(), SECTION_COUNT);
        let positions: Vec<_> = scene.meshes.iter().map(|m| m.position).collect();
        assert_eq!(
            positions,
            vec![
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(-2.0, -4.0, 0.0),
                Vec3::new(2.0, -8.0, 0.0),
            ]
        );
        let shapes: Vec<_> = scene.meshes.iter().map(|m| m.shape).collect();
        assert_eq!(shapes, MeshShape::SECTIONS.to_vec());
    }

    #[test]
    fn defaults_match_initial_look() {
        let scene = build();
        assert_eq!(scene.particles.len(), 200);
        assert_eq!(scene.light.intensity, 1.5);
        assert_eq!(scene.light.color, Color::WHITE);
        assert_eq!(scene.toon.color.to_hex(), "#e6eee8");
        assert_eq!(scene.points.base_color.to_hex(), "#e6eee8");
        assert_eq!(scene.points.size, 0.03);
    }

    #[test]
    fn light_points_toward_origin() {
        let scene = build();
        let d = scene.light.direction();
        let expected = Vec3::new(-1.0, -1.0, 0.0).normalize();
        assert!((d - expected).length() < 1e-6);
    }

    #[test]
    fn model_matrix_includes_spin() {
        let mut scene = build();
        let mesh = &mut scene.meshes[0];
        mesh.spin = Vec3::new(0.0, 0.0, std::f32::consts::FRAC_PI_2);
        let p = mesh.model_matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::new(2.0, 1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn animatable_round_trip() {
        let mut scene = build();
        scene.apply(TweenTarget::MeshSpin(2), TweenValue::Vector(Vec3::ONE));
        assert_eq!(
            scene.value(TweenTarget::MeshSpin(2)),
            Some(TweenValue::Vector(Vec3::ONE))
        );
        assert_eq!(scene.value(TweenTarget::MeshSpin(7)), None);

        scene.apply(TweenTarget::Roughness, TweenValue::Scalar(0.4));
        assert_eq!(scene.toon.roughness, 0.4);

        // Kind mismatch leaves the property untouched.
        scene.apply(TweenTarget::LightIntensity, TweenValue::Vector(Vec3::ONE));
        assert_eq!(scene.light.intensity, 1.5);
    }

    #[test]
    fn regenerating_particles_bumps_generation() {
        let mut scene = build();
        let mut options = Options::default();
        options.scene.particle_count = 10;
        scene.regenerate_particles(&options, &mut StdRng::seed_from_u64(1));
        assert_eq!(scene.particles.len(), 10);
        assert_eq!(scene.generation(), 1);
    }

    #[test]
    fn material_color_sets_both_materials() {
        let mut scene = build();
        let red = Color::new(1.0, 0.0, 0.0);
        scene.set_material_color(red);
        assert_eq!(scene.toon.color, red);
        assert_eq!(scene.points.base_color, red);
    }
}
