use serde::{Deserialize, Serialize};
use crate::constants::{DEFAULT_SPRING_DAMPING, DEFAULT_SPRING_MASS, DEFAULT_SPRING_STIFFNESS};
use crate::error::LotteryError;

/// Largest distance from the target still counted as settled.
const SETTLE_THRESHOLD: f64 = 1e-4;
/// Damping ratios this close to 1 use the critically damped solution.
const CRITICAL_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: DEFAULT_SPRING_STIFFNESS,
            damping: DEFAULT_SPRING_DAMPING,
            mass: DEFAULT_SPRING_MASS,
        }
    }
}

/// Damped spring released from rest at 0 towards 1, stretched so that it
/// settles exactly at the end of the animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringEasing {
    omega: f64,
    zeta: f64,
    settle_time: f64,
    residual: f64,
}

impl SpringEasing {
    pub fn new(config: SpringConfig) -> Result<Self, LotteryError> {
        let SpringConfig { stiffness, damping, mass } = config;
        if !(stiffness.is_finite() && stiffness > 0.0) {
            return Err(LotteryError::invalid("spring stiffness must be positive"));
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(LotteryError::invalid("spring mass must be positive"));
        }
        if !(damping.is_finite() && damping >= 0.0) {
            return Err(LotteryError::invalid("spring damping must not be negative"));
        }

        let omega = (stiffness / mass).sqrt();
        let zeta = damping / (2.0 * (stiffness * mass).sqrt());
        if zeta == 0.0 {
            return Err(LotteryError::invalid("an undamped spring never settles"));
        }

        Ok(Self::from_parts(omega, zeta))
    }

    fn from_parts(omega: f64, zeta: f64) -> Self {
        let mut easing = Self { omega, zeta, settle_time: 0.0, residual: 0.0 };
        easing.settle_time = easing.settle_time();
        easing.residual = 1.0 - easing.position(easing.settle_time);
        easing
    }

    pub fn damping_ratio(&self) -> f64 {
        self.zeta
    }

    /// Eased position for normalized time `progress`; exact at both ends.
    ///
    /// The spring is still `residual` away from the target when time runs
    /// out; that gap is blended in linearly so the last frame does not jump.
    pub fn ease(&self, progress: f64) -> f64 {
        if progress <= 0.0 {
            return 0.0;
        }
        if progress >= 1.0 {
            return 1.0;
        }
        self.position(progress * self.settle_time) + progress * self.residual
    }

    fn is_critical(&self) -> bool {
        (self.zeta - 1.0).abs() < CRITICAL_TOLERANCE
    }

    /// Upper bound on `|1 - position(t)|`, decreasing in `t`.
    fn envelope(&self, t: f64) -> f64 {
        let (w, z) = (self.omega, self.zeta);
        if self.is_critical() || z > 1.0 {
            // both responses approach 1 from below without crossing it
            1.0 - self.position(t)
        } else {
            (-z * w * t).exp() / (1.0 - z * z).sqrt()
        }
    }

    /// First time the envelope drops to the settle threshold, by bisection.
    fn settle_time(&self) -> f64 {
        let mut hi = 1.0 / self.omega;
        while self.envelope(hi) > SETTLE_THRESHOLD {
            hi *= 2.0;
        }
        let mut lo = 0.0;
        for _ in 0..64 {
            let mid = 0.5 * (lo + hi);
            if self.envelope(mid) > SETTLE_THRESHOLD {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        hi
    }

    fn position(&self, t: f64) -> f64 {
        let (w, z) = (self.omega, self.zeta);
        if self.is_critical() {
            1.0 - (-w * t).exp() * (1.0 + w * t)
        } else if z < 1.0 {
            let wd = w * (1.0 - z * z).sqrt();
            let decay = (-z * w * t).exp();
            1.0 - decay * ((wd * t).cos() + (z * w / wd) * (wd * t).sin())
        } else {
            let root = w * (z * z - 1.0).sqrt();
            let r1 = -z * w + root;
            let r2 = -z * w - root;
            1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }
}

impl Default for SpringEasing {
    fn default() -> Self {
        let config = SpringConfig::default();
        let omega = (config.stiffness / config.mass).sqrt();
        let zeta = config.damping / (2.0 * (config.stiffness * config.mass).sqrt());
        Self::from_parts(omega, zeta)
    }
}

/// Angle at `elapsed_ms` of a spin from `from` to `to` lasting `duration_ms`.
pub fn interpolate(easing: &SpringEasing, from: f64, to: f64, elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return to;
    }
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    from + (to - from) * easing.ease(progress)
}
