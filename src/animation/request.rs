//! Declarative animation requests and the properties they address.

use std::time::Duration;

use super::tween::TweenValue;
use crate::util::EasingFunction;

/// An animatable scene or page property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweenTarget {
    /// Accumulated spin of the section mesh with this index.
    MeshSpin(usize),
    /// Page background color.
    Background,
    /// Base color of the particle material (before the pulse).
    ParticleColor,
    /// Toon material roughness.
    Roughness,
    /// Directional light intensity.
    LightIntensity,
}

/// Where a tween ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenEnd {
    /// An absolute end value.
    To(TweenValue),
    /// Relative to the property's resolved end value (`+=`).
    By(TweenValue),
}

/// A request to animate one property, queued until the next frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRequest {
    /// The property to animate.
    pub target: TweenTarget,
    /// End value, absolute or relative.
    pub end: TweenEnd,
    /// Tween duration.
    pub duration: Duration,
    /// Easing curve.
    pub easing: EasingFunction,
}

impl AnimationRequest {
    /// Animate `target` to an absolute value.
    #[must_use]
    pub fn to(
        target: TweenTarget,
        value: TweenValue,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            target,
            end: TweenEnd::To(value),
            duration,
            easing,
        }
    }

    /// Animate `target` by a relative amount.
    #[must_use]
    pub fn by(
        target: TweenTarget,
        delta: TweenValue,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            target,
            end: TweenEnd::By(delta),
            duration,
            easing,
        }
    }
}

/// Property storage the scheduler reads from and writes to.
pub trait Animatable {
    /// Current value of `target`, or `None` if it does not exist.
    fn value(&self, target: TweenTarget) -> Option<TweenValue>;

    /// Overwrite `target` with `value`.
    fn apply(&mut self, target: TweenTarget, value: TweenValue);
}
