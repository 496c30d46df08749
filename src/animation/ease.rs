/// Named easing curve applied to normalized progress.
///
/// Every curve maps `[0, 1] -> R` and is exact at the endpoints: `apply(0.0)
/// == 0.0` and `apply(1.0) == 1.0`, including the curves that overshoot in
/// the interior (`InBack`, `OutBack`, `OutElastic`). Input is clamped to
/// `[0, 1]` before evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity curve.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in-out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in-out.
    InOutCubic,
    /// Exponential ease-in.
    InExpo,
    /// Exponential ease-out.
    OutExpo,
    /// Exponential ease-in-out.
    InOutExpo,
    /// Overshooting ease-in (pulls back before accelerating).
    InBack,
    /// Overshooting ease-out (overshoots the target, then settles).
    OutBack,
    /// Springy overshooting ease-out.
    OutElastic,
}

impl Ease {
    /// Evaluate the curve at `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        // Boundary normalization: endpoints are exact for every curve, so
        // overshooting formulas never leak rounding error into the edges.
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InExpo => (10.0 * t - 10.0).exp2(),
            Self::OutExpo => 1.0 - (-10.0 * t).exp2(),
            Self::InOutExpo => {
                if t < 0.5 {
                    (20.0 * t - 10.0).exp2() / 2.0
                } else {
                    (2.0 - (-20.0 * t + 10.0).exp2()) / 2.0
                }
            }
            Self::InBack => {
                const C1: f64 = 1.70158;
                const C3: f64 = C1 + 1.0;
                C3 * t * t * t - C1 * t * t
            }
            Self::OutBack => {
                const C1: f64 = 1.70158;
                const C3: f64 = C1 + 1.0;
                1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
            }
            Self::OutElastic => {
                const C4: f64 = std::f64::consts::TAU / 3.0;
                (-10.0 * t).exp2() * ((t * 10.0 - 0.75) * C4).sin() + 1.0
            }
        }
    }

    /// All curve variants, in declaration order.
    pub fn all() -> &'static [Ease] {
        &[
            Self::Linear,
            Self::InQuad,
            Self::OutQuad,
            Self::InOutQuad,
            Self::InCubic,
            Self::OutCubic,
            Self::InOutCubic,
            Self::InExpo,
            Self::OutExpo,
            Self::InOutExpo,
            Self::InBack,
            Self::OutBack,
            Self::OutElastic,
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
