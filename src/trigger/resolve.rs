use crate::{
    animation::descriptor::TriggerSpec,
    foundation::core::ScrollRange,
    host::LayoutQuery,
};

/// Resolve a trigger condition pair to an absolute scroll-offset range.
///
/// Returns `None` when the anchor element is detached or the resolved
/// conditions are inverted (start past end); callers disable the owning
/// descriptor in both cases. A zero-length range is valid and resolves
/// normally (it snaps to the end state, see
/// [`ScrollRange::progress`](crate::ScrollRange::progress)).
///
/// Element positions shift on resize and reflow, so resolutions are
/// re-requested by the engine whenever the host reports a layout change; a
/// stale range is corrected on the next frame, never tolerated indefinitely.
pub fn resolve_trigger(spec: &TriggerSpec, layout: &dyn LayoutQuery) -> Option<ScrollRange> {
    let viewport = layout.viewport();
    let rect = match layout.measure(spec.anchor) {
        Some(rect) => rect,
        None => {
            tracing::warn!(anchor = spec.anchor.0, "trigger anchor is detached");
            return None;
        }
    };

    let start = spec.start.resolve(rect.y0, rect.y1, viewport);
    let end = spec.end.resolve(rect.y0, rect.y1, viewport);
    if !start.is_finite() || !end.is_finite() {
        tracing::warn!(anchor = spec.anchor.0, "trigger resolved to non-finite offsets");
        return None;
    }
    if start > end {
        tracing::warn!(
            anchor = spec.anchor.0,
            start,
            end,
            "trigger resolved to an inverted range"
        );
        return None;
    }

    Some(ScrollRange { start, end })
}

#[cfg(test)]
#[path = "../../tests/unit/trigger/resolve.rs"]
mod tests;
