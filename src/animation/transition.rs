//! The batch of tweens fired when the page enters a new section.

use std::time::Duration;

use glam::Vec3;
use rand::Rng;

use super::request::{AnimationRequest, TweenTarget};
use super::tween::TweenValue;
use crate::options::{PaletteOptions, TransitionOptions};
use crate::util::Color;

/// Number of requests in one section transition.
pub const TRANSITION_BATCH_LEN: usize = 5;

/// Background color for a section: its theme color blended toward the
/// dark base tone.
#[must_use]
pub fn section_background(
    palette: &PaletteOptions,
    transition: &TransitionOptions,
    section: usize,
) -> Color {
    palette
        .section_color(section)
        .lerp(palette.background_base, transition.background_mix)
}

/// Uniform sample from `[lo, hi)`; degenerate ranges return `lo`.
fn sample_range<R: Rng>(rng: &mut R, [lo, hi]: [f32; 2]) -> f32 {
    if hi > lo {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}

/// Build the requests for entering `section`:
///
/// 1. spin the section's mesh by the configured offset,
/// 2. fade the page background toward the section's background tone,
/// 3. move the particle base color to the section color,
/// 4. randomize roughness,
/// 5. randomize light intensity.
pub fn section_transition_requests<R: Rng>(
    section: usize,
    palette: &PaletteOptions,
    transition: &TransitionOptions,
    rng: &mut R,
) -> [AnimationRequest; TRANSITION_BATCH_LEN] {
    let duration = Duration::from_secs_f32(transition.duration.max(0.0));
    let section_color = palette.section_color(section);

    [
        AnimationRequest::by(
            TweenTarget::MeshSpin(section),
            TweenValue::Vector(Vec3::from(transition.spin)),
            duration,
            transition.easing,
        ),
        AnimationRequest::to(
            TweenTarget::Background,
            TweenValue::Color(section_background(palette, transition, section)),
            duration,
            transition.easing,
        ),
        AnimationRequest::to(
            TweenTarget::ParticleColor,
            TweenValue::Color(section_color),
            duration,
            transition.easing,
        ),
        AnimationRequest::to(
            TweenTarget::Roughness,
            TweenValue::Scalar(sample_range(rng, transition.roughness_range)),
            duration,
            transition.material_easing,
        ),
        AnimationRequest::to(
            TweenTarget::LightIntensity,
            TweenValue::Scalar(sample_range(rng, transition.light_intensity_range)),
            duration,
            transition.material_easing,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::animation::TweenEnd;
    use crate::util::EasingFunction;

    #[test]
    fn batch_targets_the_entered_section() {
        let palette = PaletteOptions::default();
        let transition = TransitionOptions::default();
        let mut rng = StdRng::seed_from_u64(1);
        let batch = section_transition_requests(1, &palette, &transition, &mut rng);

        let targets: Vec<_> = batch.iter().map(|r| r.target).collect();
        assert_eq!(
            targets,
            vec![
                TweenTarget::MeshSpin(1),
                TweenTarget::Background,
                TweenTarget::ParticleColor,
                TweenTarget::Roughness,
                TweenTarget::LightIntensity,
            ]
        );
        assert!(batch.iter().all(|r| r.duration == Duration::from_millis(1500)));
        assert_eq!(batch[0].end, TweenEnd::By(TweenValue::Vector(Vec3::new(6.0, 3.0, 1.5))));
        assert_eq!(batch[0].easing, EasingFunction::POWER2_IN_OUT);
        assert_eq!(batch[3].easing, EasingFunction::POWER1_IN_OUT);
        assert_eq!(
            batch[2].end,
            TweenEnd::To(TweenValue::Color(Color::from_rgb8(0x7f, 0xff, 0xd4)))
        );
    }

    #[test]
    fn randomized_values_stay_in_range() {
        let palette = PaletteOptions::default();
        let transition = TransitionOptions::default();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            let batch = section_transition_requests(2, &palette, &transition, &mut rng);
            let TweenEnd::To(TweenValue::Scalar(r)) = batch[3].end else {
                panic!("roughness should be absolute scalar");
            };
            let TweenEnd::To(TweenValue::Scalar(i)) = batch[4].end else {
                panic!("intensity should be absolute scalar");
            };
            assert!((0.3..0.8).contains(&r), "roughness {r}");
            assert!((1.0..1.5).contains(&i), "intensity {i}");
        }
    }

    #[test]
    fn background_is_half_way_to_base_tone() {
        let palette = PaletteOptions::default();
        let transition = TransitionOptions::default();
        let bg = section_background(&palette, &transition, 2);
        // #ffd700 halfway to #1e1a20
        let expected = [142.5 / 255.0, 120.5 / 255.0, 16.0 / 255.0];
        for (got, want) in bg.to_array().iter().zip(expected) {
            assert!((got - want).abs() < 1e-4, "{got} vs {want}");
        }
    }

    #[test]
    fn degenerate_range_uses_lower_bound() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(sample_range(&mut rng, [0.5, 0.5]), 0.5);
    }
}
