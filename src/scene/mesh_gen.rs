//! Parametric mesh generators for the section meshes.
//!
//! Every generator returns an indexed triangle list with per-vertex
//! normals, centered on the origin.

use std::f32::consts::TAU;

use glam::Vec3;

/// 24-byte mesh vertex: position + normal.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit object-space normal.
    pub normal: [f32; 3],
}

impl Vertex {
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.normalize_or_zero().to_array(),
        }
    }
}

/// Indexed triangle mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex pool.
    pub vertices: Vec<Vertex>,
    /// Triangle list indices into `vertices`.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds as `(min, max)`.
    #[must_use]
    pub fn bounds(&self) -> (Vec3, Vec3) {
        self.vertices.iter().fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(lo, hi), v| {
                let p = Vec3::from(v.position);
                (lo.min(p), hi.max(p))
            },
        )
    }

    /// Emit the two triangles of a grid quad laid out in rows of `stride`.
    fn push_grid_quad(&mut self, stride: u32, row: u32, col: u32) {
        let a = stride * (row - 1) + (col - 1);
        let b = stride * row + (col - 1);
        let c = stride * row + col;
        let d = stride * (row - 1) + col;
        self.indices.extend_from_slice(&[a, b, d, b, c, d]);
    }
}

/// Torus in the XY plane around the Z axis.
///
/// `radius` is the distance from the center to the middle of the tube.
#[must_use]
pub fn torus(
    radius: f32,
    tube: f32,
    radial_segments: u32,
    tubular_segments: u32,
) -> MeshData {
    let radial_segments = radial_segments.max(2);
    let tubular_segments = tubular_segments.max(3);
    let mut mesh = MeshData::default();

    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            let ring = radius + tube * v.cos();
            let position =
                Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin());
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            mesh.vertices.push(Vertex::new(position, position - center));
        }
    }

    let stride = tubular_segments + 1;
    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            mesh.push_grid_quad(stride, j, i);
        }
    }
    mesh
}

/// Cone along +Y with its apex at `height / 2` and a capped base at
/// `-height / 2`.
#[must_use]
pub fn cone(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    let radial_segments = radial_segments.max(3);
    let half = height * 0.5;
    let slope = if height > 0.0 { radius / height } else { 0.0 };
    let mut mesh = MeshData::default();

    // Side: one apex vertex per segment so each facet keeps its own normal.
    for x in 0..radial_segments {
        let theta0 = x as f32 / radial_segments as f32 * TAU;
        let theta1 = (x + 1) as f32 / radial_segments as f32 * TAU;
        let mid = (theta0 + theta1) * 0.5;
        let base = mesh.vertices.len() as u32;
        mesh.vertices.push(Vertex::new(
            Vec3::new(0.0, half, 0.0),
            Vec3::new(mid.sin(), slope, mid.cos()),
        ));
        for theta in [theta0, theta1] {
            mesh.vertices.push(Vertex::new(
                Vec3::new(radius * theta.sin(), -half, radius * theta.cos()),
                Vec3::new(theta.sin(), slope, theta.cos()),
            ));
        }
        mesh.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    // Base cap, facing -Y.
    let center = mesh.vertices.len() as u32;
    mesh.vertices
        .push(Vertex::new(Vec3::new(0.0, -half, 0.0), Vec3::NEG_Y));
    for x in 0..=radial_segments {
        let theta = x as f32 / radial_segments as f32 * TAU;
        mesh.vertices.push(Vertex::new(
            Vec3::new(radius * theta.sin(), -half, radius * theta.cos()),
            Vec3::NEG_Y,
        ));
    }
    for x in 0..radial_segments {
        let ring = center + 1 + x;
        mesh.indices.extend_from_slice(&[center, ring + 1, ring]);
    }
    mesh
}

/// Point on the (p, q) torus-knot curve at parameter `u`.
fn knot_curve(u: f32, p: u32, q: u32, radius: f32) -> Vec3 {
    let qu_over_p = q as f32 / p as f32 * u;
    let cs = qu_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * qu_over_p.sin() * 0.5,
    )
}

/// (p, q) torus knot: a tube swept along a curve that winds `p` times
/// around the axis and `q` times through the hole.
#[must_use]
pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> MeshData {
    let tubular_segments = tubular_segments.max(3);
    let radial_segments = radial_segments.max(3);
    let p = p.max(1);
    let mut mesh = MeshData::default();

    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * p as f32 * TAU;
        let p1 = knot_curve(u, p, q, radius);
        let p2 = knot_curve(u + 0.01, p, q, radius);

        // Frenet-like frame from the curve tangent.
        let tangent = p2 - p1;
        let binormal = tangent.cross(p2 + p1);
        let normal = binormal.cross(tangent).normalize_or_zero();
        let binormal = binormal.normalize_or_zero();

        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let position = p1 + normal * cx + binormal * cy;
            mesh.vertices.push(Vertex::new(position, position - p1));
        }
    }

    let stride = radial_segments + 1;
    for j in 1..=tubular_segments {
        for i in 1..=radial_segments {
            mesh.push_grid_quad(stride, j, i);
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(mesh: &MeshData) {
        assert_eq!(mesh.indices.len() % 3, 0);
        let n = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n), "index out of range");
        for v in &mesh.vertices {
            let len = Vec3::from(v.normal).length();
            assert!((len - 1.0).abs() < 1e-3, "normal length {len}");
        }
    }

    #[test]
    fn torus_counts_and_extent() {
        let mesh = torus(1.0, 0.4, 16, 60);
        assert_eq!(mesh.vertices.len(), 17 * 61);
        assert_eq!(mesh.triangle_count(), 16 * 60 * 2);
        assert_well_formed(&mesh);
        let (lo, hi) = mesh.bounds();
        assert!((hi.x - 1.4).abs() < 1e-4);
        assert!((lo.x + 1.4).abs() < 1e-2);
        assert!((hi.z - 0.4).abs() < 1e-2);
    }

    #[test]
    fn torus_normals_point_away_from_tube_center() {
        let mesh = torus(1.0, 0.4, 16, 60);
        // u = 0, v = 0 is the outermost point on +X.
        let v = mesh.vertices[0];
        assert!((Vec3::from(v.position) - Vec3::new(1.4, 0.0, 0.0)).length() < 1e-5);
        assert!((Vec3::from(v.normal) - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn cone_spans_height_and_is_capped() {
        let mesh = cone(1.0, 2.0, 32);
        assert_well_formed(&mesh);
        assert_eq!(mesh.triangle_count(), 32 * 2);
        let (lo, hi) = mesh.bounds();
        assert!((hi.y - 1.0).abs() < 1e-6);
        assert!((lo.y + 1.0).abs() < 1e-6);
        let down = mesh
            .vertices
            .iter()
            .filter(|v| Vec3::from(v.normal) == Vec3::NEG_Y)
            .count();
        assert_eq!(down, 34);
    }

    #[test]
    fn cone_side_normals_lean_upward() {
        let mesh = cone(1.0, 2.0, 32);
        assert!(mesh.vertices[..96].iter().all(|v| v.normal[1] > 0.0));
    }

    #[test]
    fn torus_knot_counts_and_tube_radius() {
        let mesh = torus_knot(0.8, 0.35, 100, 16, 2, 3);
        assert_eq!(mesh.vertices.len(), 101 * 17);
        assert_eq!(mesh.triangle_count(), 100 * 16 * 2);
        assert_well_formed(&mesh);

        // Every ring vertex sits one tube radius from its curve point.
        let u = 0.0;
        let center = knot_curve(u, 2, 3, 0.8);
        for v in &mesh.vertices[..17] {
            let d = (Vec3::from(v.position) - center).length();
            assert!((d - 0.35).abs() < 1e-4, "ring distance {d}");
        }
    }

    #[test]
    fn knot_curve_closes_after_p_turns() {
        let start = knot_curve(0.0, 2, 3, 0.8);
        let end = knot_curve(2.0 * TAU, 2, 3, 0.8);
        assert!((start - end).length() < 1e-4);
    }
}
