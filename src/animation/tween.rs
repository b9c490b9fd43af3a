//! A single in-flight tween between two property values.

use std::time::Duration;

use glam::Vec3;

use super::request::TweenTarget;
use crate::util::{Color, EasingFunction};

/// A value a tween can interpolate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenValue {
    /// A single float (roughness, light intensity).
    Scalar(f32),
    /// A 3-vector (mesh spin, in radians per axis).
    Vector(Vec3),
    /// An sRGB color (page background, particle color).
    Color(Color),
}

impl TweenValue {
    /// Interpolate toward `to` by `t`. Values of different kinds snap to
    /// `to`.
    #[must_use]
    pub fn lerp(self, to: Self, t: f32) -> Self {
        match (self, to) {
            (Self::Scalar(a), Self::Scalar(b)) => Self::Scalar(a + (b - a) * t),
            (Self::Vector(a), Self::Vector(b)) => Self::Vector(a.lerp(b, t)),
            (Self::Color(a), Self::Color(b)) => Self::Color(a.lerp(b, t)),
            (_, to) => to,
        }
    }

    /// Component-wise sum, used to resolve relative (`+=`) requests.
    /// Values of different kinds yield `delta`.
    #[must_use]
    pub fn offset_by(self, delta: Self) -> Self {
        match (self, delta) {
            (Self::Scalar(a), Self::Scalar(b)) => Self::Scalar(a + b),
            (Self::Vector(a), Self::Vector(b)) => Self::Vector(a + b),
            (Self::Color(a), Self::Color(b)) => {
                Self::Color(Color::new(a.r + b.r, a.g + b.g, a.b + b.b))
            }
            (_, delta) => delta,
        }
    }
}

/// An in-flight interpolation of one property.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    /// The property being animated.
    pub target: TweenTarget,
    /// Value at the start of the tween.
    pub from: TweenValue,
    /// Value at the end of the tween.
    pub to: TweenValue,
    /// Clock time the tween started at.
    pub start: Duration,
    /// Total tween duration.
    pub duration: Duration,
    /// Easing curve applied to progress.
    pub easing: EasingFunction,
}

impl Tween {
    /// Normalized progress (0.0 to 1.0) at clock time `now`.
    #[must_use]
    pub fn progress(&self, now: Duration) -> f32 {
        let elapsed = now.saturating_sub(self.start);
        if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Whether the tween has reached its end value.
    #[must_use]
    pub fn is_finished(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }

    /// Eased value at clock time `now`. Exactly `to` once finished.
    #[must_use]
    pub fn value_at(&self, now: Duration) -> TweenValue {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, self.easing.evaluate(t))
    }
}
