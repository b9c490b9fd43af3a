//! Ambient particle cloud: seeded scatter and vertical bob.

use glam::Vec3;
use rand::Rng;

/// Scatter `count` points uniformly over a `spread` x `spread` square in
/// x/z, with y in `[0, height)`.
pub fn scatter<R: Rng>(
    rng: &mut R,
    count: usize,
    spread: f32,
    height: f32,
) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.random::<f32>() - 0.5) * spread,
                rng.random::<f32>() * height,
                (rng.random::<f32>() - 0.5) * spread,
            )
        })
        .collect()
}

/// Vertical offset of the whole cloud at time `t` seconds.
#[must_use]
pub fn bob_offset(t: f32, amplitude: f32) -> f32 {
    (t * 0.5).sin() * amplitude
}

/// Ambient particle cloud: static positions plus a shared vertical bob.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleCloud {
    /// Object-space point positions.
    pub positions: Vec<Vec3>,
    /// Current vertical offset applied to every point.
    pub offset_y: f32,
}

impl ParticleCloud {
    /// Scatter a new cloud.
    pub fn generate<R: Rng>(
        rng: &mut R,
        count: usize,
        spread: f32,
        height: f32,
    ) -> Self {
        Self {
            positions: scatter(rng, count, spread, height),
            offset_y: 0.0,
        }
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the cloud is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn scatter_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = scatter(&mut rng, 500, 10.0, 1.0);
        assert_eq!(points.len(), 500);
        for p in &points {
            assert!((-5.0..5.0).contains(&p.x));
            assert!((0.0..1.0).contains(&p.y));
            assert!((-5.0..5.0).contains(&p.z));
        }
    }

    #[test]
    fn same_seed_same_cloud() {
        let a = ParticleCloud::generate(&mut StdRng::seed_from_u64(3), 50, 10.0, 1.0);
        let b = ParticleCloud::generate(&mut StdRng::seed_from_u64(3), 50, 10.0, 1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_count_is_empty() {
        let cloud = ParticleCloud::generate(&mut StdRng::seed_from_u64(0), 0, 10.0, 1.0);
        assert!(cloud.is_empty());
    }

    #[test]
    fn bob_is_bounded_by_amplitude() {
        for i in 0..200 {
            let y = bob_offset(i as f32 * 0.1, 0.2);
            assert!(y.abs() <= 0.2 + 1e-6);
        }
        assert!((bob_offset(std::f32::consts::PI, 0.2) - 0.2).abs() < 1e-6);
    }
}
