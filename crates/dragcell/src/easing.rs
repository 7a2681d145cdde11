/// Timing curve of an overlay transition.
///
/// Every curve maps `0.0` to `0.0` and `1.0` to `1.0` exactly, so a finished
/// transition lands on its target pose without drift.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EasingFunction {
    Linear,
    /// Decelerating cubic, for the overlay chasing the pointer.
    EaseOut,
    /// Smoothstep, for lift and release.
    #[default]
    EaseInOut,
}

impl EasingFunction {
    /// Map transition progress `t` (clamped to `0..=1`) onto the curve.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseOut => {
                let rest = 1.0 - t;
                1.0 - rest * rest * rest
            }
            EasingFunction::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [EasingFunction; 3] = [
        EasingFunction::Linear,
        EasingFunction::EaseOut,
        EasingFunction::EaseInOut,
    ];

    #[test]
    fn test_endpoints_are_exact() {
        for easing in CURVES {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn test_curves_are_monotonic() {
        for easing in CURVES {
            let samples: Vec<f32> = (0..=20).map(|i| easing.apply(i as f32 / 20.0)).collect();
            assert!(samples.windows(2).all(|w| w[0] <= w[1]), "{easing:?}");
        }
    }

    #[test]
    fn test_shapes() {
        assert_eq!(EasingFunction::EaseInOut.apply(0.5), 0.5);
        assert!(EasingFunction::EaseOut.apply(0.5) > 0.5);
    }

    #[test]
    fn test_clamps_input() {
        assert_eq!(EasingFunction::Linear.apply(2.0), 1.0);
        assert_eq!(EasingFunction::EaseOut.apply(-1.0), 0.0);
    }
}
