//! Damped harmonic oscillator driving spring presets
//!
//! Position runs from 0 toward 1 starting at rest. Underdamped springs
//! overshoot before settling, which is what gives item entrances their bounce.

use std::time::Duration;

/// Displacement from the target below which a spring counts as settled
pub const REST_DELTA: f64 = 0.01;

const MAX_SETTLE_SECS: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    fn angular_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio ζ; below 1 the spring overshoots
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Position at `t` seconds after release
    pub fn position(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if self.stiffness <= 0.0 || self.mass <= 0.0 {
            return 1.0;
        }

        let omega = self.angular_frequency();
        let zeta = self.damping_ratio();

        let displacement = if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega * t).exp();
            envelope * ((omega_d * t).cos() + (zeta * omega / omega_d) * (omega_d * t).sin())
        } else if (zeta - 1.0).abs() < 1e-9 {
            (-omega * t).exp() * (1.0 + omega * t)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            // x(0) = 1, x'(0) = 0
            let c2 = -r1 / (r2 - r1);
            let c1 = 1.0 - c2;
            c1 * (r1 * t).exp() + c2 * (r2 * t).exp()
        };

        1.0 - displacement
    }

    /// Time after which the displacement envelope stays under [`REST_DELTA`]
    pub fn settle_time(&self) -> Duration {
        if self.stiffness <= 0.0 || self.mass <= 0.0 {
            return Duration::ZERO;
        }

        let omega = self.angular_frequency();
        let zeta = self.damping_ratio();

        let secs = if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let amplitude = (1.0 + (zeta * omega / omega_d).powi(2)).sqrt();
            (amplitude / REST_DELTA).ln() / (zeta * omega).max(1e-6)
        } else {
            // No overshoot: displacement falls monotonically, so bisect on it
            let (mut lo, mut hi) = (0.0, MAX_SETTLE_SECS);
            for _ in 0..48 {
                let mid = (lo + hi) / 2.0;
                if 1.0 - self.position(mid) > REST_DELTA {
                    lo = mid;
                } else {
                    hi = mid;
                }
            }
            hi
        };

        Duration::from_secs_f64(secs.clamp(0.0, MAX_SETTLE_SECS))
    }
}
