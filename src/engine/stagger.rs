use crate::{
    animation::descriptor::{Stagger, StaggerOrder},
    foundation::error::{ScrollrigError, ScrollrigResult},
};

/// Stagger rank of each target in a group of `n`, per the order policy.
///
/// Rank 0 leads. `Forward` ranks by declaration order, `FromEdges` by
/// distance from the nearest edge of the group, `FromCenter` by distance
/// from the group's center.
pub fn ranks(n: usize, order: StaggerOrder) -> Vec<usize> {
    (0..n)
        .map(|i| match order {
            StaggerOrder::Forward => i,
            StaggerOrder::FromEdges => i.min(n - 1 - i),
            StaggerOrder::FromCenter => {
                let center = (n as f64 - 1.0) / 2.0;
                (i as f64 - center).abs().floor() as usize
            }
        })
        .collect()
}

/// Local progress of the target with `rank` given the group's `parent`
/// progress.
///
/// Each rank's window is offset by `rank * gap` and compressed so the last
/// rank still completes at parent progress 1:
/// `clamp((parent - rank*gap) / (1 - max_rank*gap), 0, 1)`.
pub fn local_progress(parent: f64, rank: usize, max_rank: usize, gap: f64) -> f64 {
    if gap <= 0.0 || max_rank == 0 {
        return parent.clamp(0.0, 1.0);
    }
    let span = 1.0 - max_rank as f64 * gap;
    ((parent - rank as f64 * gap) / span).clamp(0.0, 1.0)
}

/// Registration-time check: the last rank's window must have positive
/// length.
pub fn validate(n: usize, stagger: Stagger) -> ScrollrigResult<()> {
    if !(stagger.gap.is_finite() && stagger.gap >= 0.0) {
        return Err(ScrollrigError::validation(
            "stagger gap must be finite and >= 0",
        ));
    }
    let max_rank = ranks(n, stagger.order).into_iter().max().unwrap_or(0);
    if max_rank as f64 * stagger.gap >= 1.0 {
        return Err(ScrollrigError::validation(
            "stagger gap leaves no room for the last rank",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/engine/stagger.rs"]
mod tests;
