//! Tween easing curves: pure functions mapping [0, 1] to [0, 1]

/// Easing applied to a fixed-duration tween
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Cubic ease-out, the default for short fades
    EaseOut,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)`
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Expo-like curve used for the skill level bars
    pub const OUT_EXPO: Easing = Easing::CubicBezier(0.16, 1.0, 0.3, 1.0);

    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

#[inline]
fn bezier_coord(a1: f64, a2: f64, t: f64) -> f64 {
    // B(t) for control points 0, a1, a2, 1
    let inv = 1.0 - t;
    3.0 * inv * inv * t * a1 + 3.0 * inv * t * t * a2 + t * t * t
}

#[inline]
fn bezier_slope(a1: f64, a2: f64, t: f64) -> f64 {
    let inv = 1.0 - t;
    3.0 * inv * inv * a1 + 6.0 * inv * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
}

/// Solve x(t) = x for t, then return y(t)
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    // Newton-Raphson first, bisection if the slope is too flat
    let mut t = x;
    for _ in 0..8 {
        let err = bezier_coord(x1, x2, t) - x;
        if err.abs() < 1e-7 {
            return bezier_coord(y1, y2, t);
        }
        let slope = bezier_slope(x1, x2, t);
        if slope.abs() < 1e-6 {
            break;
        }
        t -= err / slope;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    t = x;
    for _ in 0..64 {
        let value = bezier_coord(x1, x2, t);
        if (value - x).abs() < 1e-7 {
            break;
        }
        if value < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    bezier_coord(y1, y2, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::OUT_EXPO] {
            assert!(easing.apply(0.0).abs() < 1e-6, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_monotonic() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::OUT_EXPO] {
            let mut prev = 0.0;
            for i in 0..=20 {
                let v = easing.apply(i as f64 / 20.0);
                assert!(v + 1e-9 >= prev, "{:?} not monotonic at step {}", easing, i);
                prev = v;
            }
        }
    }

    #[test]
    fn test_linear_bezier_is_identity() {
        let linear = Easing::CubicBezier(0.0, 0.0, 1.0, 1.0);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert!((linear.apply(t) - t).abs() < 1e-4);
        }
    }

    #[test]
    fn test_out_expo_front_loaded() {
        // Most of the distance is covered early
        assert!(Easing::OUT_EXPO.apply(0.25) > 0.7);
    }
}
