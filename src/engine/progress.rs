/// Exponentially smoothed progress state for one scrubbed descriptor.
///
/// Each tick the smoothed value moves toward the raw value by
/// `1 - exp(-dt / smoothing)`, so it lags and settles without overshoot.
/// The first observed sample snaps, as does a smoothing of zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct Scrub {
    smoothed: Option<f64>,
}

/// Below this distance from the raw value the smoothed value snaps, so
/// progress reaches exact endpoints instead of approaching them forever.
const SETTLE_EPSILON: f64 = 1e-4;

impl Scrub {
    /// Fresh state with no observed sample.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance toward `raw` by `dt` seconds and return the smoothed value.
    pub fn tick(&mut self, raw: f64, dt: f64, smoothing: f64) -> f64 {
        let next = match self.smoothed {
            _ if smoothing <= 0.0 => raw,
            None => raw,
            Some(prev) => {
                let alpha = (1.0 - (-dt / smoothing).exp()).clamp(0.0, 1.0);
                let stepped = prev + (raw - prev) * alpha;
                if (stepped - raw).abs() < SETTLE_EPSILON {
                    raw
                } else {
                    stepped
                }
            }
        };
        self.smoothed = Some(next);
        next
    }

    /// Last returned value, if any sample has been observed.
    pub fn value(&self) -> Option<f64> {
        self.smoothed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/progress.rs"]
mod tests;
