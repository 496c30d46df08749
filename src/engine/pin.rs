use crate::host::{PinHold, PinUpdate};

/// Phase of the pin lifecycle for one descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinPhase {
    /// Element is in normal flow.
    Unpinned,
    /// Hold was emitted this frame; element is transitioning to fixed
    /// positioning at its current viewport location.
    Pinning,
    /// Element is held fixed while progress is tracked.
    Pinned,
    /// Release was emitted this frame; element is returning to flow.
    Releasing,
}

/// Per-descriptor pin state machine:
/// `Unpinned -> Pinning -> Pinned -> Releasing -> Unpinned`.
///
/// Pinning freezes only the element's own viewport position; the document
/// scroll offset keeps advancing, and the emitted hold reserves the
/// element's original space so sibling content does not jump.
#[derive(Clone, Copy, Debug)]
pub struct PinState {
    phase: PinPhase,
}

impl Default for PinState {
    fn default() -> Self {
        Self::new()
    }
}

impl PinState {
    /// Fresh, unpinned state.
    pub fn new() -> Self {
        Self {
            phase: PinPhase::Unpinned,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> PinPhase {
        self.phase
    }

    /// Whether the next `tick(true, ..)` would need an entry hold.
    pub fn wants_hold(&self, in_range: bool) -> bool {
        in_range && matches!(self.phase, PinPhase::Unpinned | PinPhase::Releasing)
    }

    /// Advance one frame. `in_range` is whether the current scroll offset is
    /// inside the trigger interval; `hold` is the entry hold to emit when
    /// transitioning into `Pinning` (callers compute it only when
    /// [`wants_hold`](Self::wants_hold) is true). Returns the update to
    /// forward to the host this frame, if any.
    pub fn tick(&mut self, in_range: bool, hold: Option<PinHold>) -> Option<PinUpdate> {
        match (self.phase, in_range) {
            (PinPhase::Unpinned | PinPhase::Releasing, true) => {
                let hold = hold?;
                self.phase = PinPhase::Pinning;
                Some(PinUpdate::Hold(hold))
            }
            (PinPhase::Releasing, false) => {
                self.phase = PinPhase::Unpinned;
                None
            }
            (PinPhase::Pinning, true) => {
                self.phase = PinPhase::Pinned;
                None
            }
            (PinPhase::Pinning | PinPhase::Pinned, false) => {
                self.phase = PinPhase::Releasing;
                Some(PinUpdate::Release)
            }
            _ => None,
        }
    }

    /// Force a release (descriptor cancelled or disabled while held).
    /// Idempotent: only returns an update when actually held.
    pub fn release(&mut self) -> Option<PinUpdate> {
        match self.phase {
            PinPhase::Pinning | PinPhase::Pinned => {
                self.phase = PinPhase::Unpinned;
                Some(PinUpdate::Release)
            }
            PinPhase::Releasing => {
                self.phase = PinPhase::Unpinned;
                None
            }
            PinPhase::Unpinned => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/pin.rs"]
mod tests;
