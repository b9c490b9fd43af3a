//! Easing functions for tween interpolation.
//!
//! The power family mirrors the curves page-animation libraries ship
//! (`power1.inOut`, `power2.inOut`, `power3.out`, ...): `Power(n)` raises
//! progress to `n + 1`.

use serde::{Deserialize, Serialize};

/// Which end(s) of the curve are eased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EaseMode {
    /// Slow start, fast end.
    In,
    /// Fast start, slow end.
    Out,
    /// Slow start and end, symmetric around t = 0.5.
    InOut,
}

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Polynomial easing of degree `degree + 1`.
    Power {
        /// Power index (1 = quadratic, 2 = cubic, 3 = quartic).
        degree: u8,
        /// Which end(s) to ease.
        mode: EaseMode,
    },
}

impl EasingFunction {
    /// `power1.inOut`: quadratic ease-in-out.
    pub const POWER1_IN_OUT: Self = Self::Power {
        degree: 1,
        mode: EaseMode::InOut,
    };
    /// `power2.inOut`: cubic ease-in-out.
    pub const POWER2_IN_OUT: Self = Self::Power {
        degree: 2,
        mode: EaseMode::InOut,
    };
    /// `power3.out`: quartic ease-out.
    pub const POWER3_OUT: Self = Self::Power {
        degree: 3,
        mode: EaseMode::Out,
    };

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match *self {
            Self::Linear => t,
            Self::Power { degree, mode } => {
                let exp = i32::from(degree) + 1;
                match mode {
                    EaseMode::In => t.powi(exp),
                    EaseMode::Out => 1.0 - (1.0 - t).powi(exp),
                    EaseMode::InOut => {
                        if t < 0.5 {
                            (2.0 * t).powi(exp) * 0.5
                        } else {
                            1.0 - (2.0 * (1.0 - t)).powi(exp) * 0.5
                        }
                    }
                }
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::POWER2_IN_OUT
    }
}
