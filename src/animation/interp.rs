use crate::animation::{
    descriptor::Repeat,
    ease::Ease,
    track::{PropertyTrack, PropertyId, Value},
};

/// One computed property value for a single target on a single frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropertyWrite {
    /// Written property.
    pub property: PropertyId,
    /// Interpolated value.
    pub value: Value,
}

/// Pure interpolation of a track set at normalized `progress`.
///
/// Boundary values are normalized: at progress 0 the result is exactly each
/// track's `from` value and at 1 exactly its `to` value, for every curve,
/// including eases that overshoot in the interior.
pub fn interpolate(tracks: &[PropertyTrack], ease: Ease, progress: f64) -> Vec<PropertyWrite> {
    let t = progress.clamp(0.0, 1.0);
    tracks
        .iter()
        .map(|track| {
            let value = if t == 0.0 {
                track.from
            } else if t == 1.0 {
                track.to
            } else {
                Value::lerp(track.from, track.to, ease.apply(t))
            };
            PropertyWrite {
                property: track.property,
                value,
            }
        })
        .collect()
}

/// Wall-clock progress of a one-shot tween, honoring its repeat mode.
///
/// `elapsed` is seconds since the tween was armed. `Repeat::None` plays one
/// cycle and holds at 1. `Repeat::Count(n)` restarts n times total and then
/// holds at 1. `Repeat::InfiniteYoyo` ping-pongs forever, reflecting odd
/// cycles.
pub fn tween_progress(elapsed: f64, duration: f64, repeat: Repeat) -> f64 {
    debug_assert!(duration > 0.0);
    let cycles = (elapsed / duration).max(0.0);
    match repeat {
        Repeat::None => cycles.min(1.0),
        Repeat::Count(n) => {
            if cycles >= f64::from(n) {
                return 1.0;
            }
            let frac = cycles.fract();
            // Exactly on a cycle boundary means the previous cycle just
            // finished at 1; restart from 0 only strictly after it.
            if frac == 0.0 && cycles > 0.0 { 1.0 } else { frac }
        }
        Repeat::InfiniteYoyo => {
            let frac = cycles.fract();
            if (cycles.floor() as u64) % 2 == 0 {
                frac
            } else {
                1.0 - frac
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
