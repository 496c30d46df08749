use crate::{
    animation::{ease::Ease, track::PropertyTrack},
    foundation::error::{ScrollrigError, ScrollrigResult},
    host::ElementId,
    trigger::anchor::AnchorSpec,
};

/// Trigger condition pair defining the scroll interval of a descriptor.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TriggerSpec {
    /// Element whose position anchors the trigger (and the pin, if any).
    pub anchor: ElementId,
    /// Condition at which progress is 0.
    pub start: AnchorSpec,
    /// Condition at which progress is 1.
    pub end: AnchorSpec,
}

/// Repeat behavior of a wall-clock tween.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Repeat {
    /// Play once and hold the end state.
    None,
    /// Play the given total number of cycles, then hold the end state.
    Count(u32),
    /// Ping-pong between start and end states forever.
    InfiniteYoyo,
}

/// How a descriptor's progress is driven.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum PlayMode {
    /// Progress is coupled to scroll position within the trigger range.
    Scrub {
        /// Exponential smoothing lag in seconds; 0 snaps instantly.
        smoothing: f64,
    },
    /// One-shot wall-clock tween armed when the trigger range is first
    /// entered; further scroll does not affect progress.
    Tween {
        /// Tween duration in seconds (must be > 0).
        duration: f64,
        /// Repeat behavior after the first cycle.
        repeat: Repeat,
    },
}

/// Rank policy for staggered groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StaggerOrder {
    /// Declaration order: target 0 leads.
    Forward,
    /// Targets nearest the group's edges lead.
    FromEdges,
    /// Targets nearest the group's center lead.
    FromCenter,
}

/// Per-target progress offset within a multi-target group.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stagger {
    /// Offset between consecutive ranks, as a fraction of parent progress.
    pub gap: f64,
    /// Rank policy.
    pub order: StaggerOrder,
}

/// One declared scroll-linked effect.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationDescriptor {
    /// Animated render-tree nodes; staggering applies across this list.
    pub targets: Vec<ElementId>,
    /// Scroll interval over which progress runs 0 -> 1.
    pub trigger: TriggerSpec,
    /// Animated properties with their start/end values.
    pub tracks: Vec<PropertyTrack>,
    /// Easing curve applied to progress.
    pub ease: Ease,
    /// Scroll-scrubbed or wall-clock driven.
    pub mode: PlayMode,
    /// Hold the anchor element fixed in the viewport for the trigger's
    /// duration.
    pub pin: bool,
    /// Optional per-target stagger within the group.
    pub stagger: Option<Stagger>,
}

impl AnimationDescriptor {
    /// Minimal scrubbed descriptor with linear easing and no pin/stagger.
    pub fn scrub(targets: Vec<ElementId>, trigger: TriggerSpec, tracks: Vec<PropertyTrack>) -> Self {
        Self {
            targets,
            trigger,
            tracks,
            ease: Ease::Linear,
            mode: PlayMode::Scrub { smoothing: 0.0 },
            pin: false,
            stagger: None,
        }
    }

    /// Reject malformed descriptors at registration time.
    pub fn validate(&self) -> ScrollrigResult<()> {
        if self.targets.is_empty() {
            return Err(ScrollrigError::validation(
                "descriptor must have at least one target",
            ));
        }
        if self.tracks.is_empty() {
            return Err(ScrollrigError::validation(
                "descriptor must have at least one property track",
            ));
        }
        for track in &self.tracks {
            track.validate()?;
        }
        validate_mode(self.mode)?;
        if let Some(stagger) = self.stagger {
            crate::engine::stagger::validate(self.targets.len(), stagger)?;
        }
        Ok(())
    }
}

/// One sequential step of a timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineStep {
    /// Animated nodes for this step.
    pub targets: Vec<ElementId>,
    /// Animated properties for this step.
    pub tracks: Vec<PropertyTrack>,
    /// Easing curve for this step.
    pub ease: Ease,
    /// Relative share of the parent progress occupied by this step.
    pub weight: f64,
    /// Optional per-target stagger within this step.
    pub stagger: Option<Stagger>,
}

/// Sequential sub-animations sharing one trigger.
///
/// Step k's local progress runs over the weight-proportional slice of the
/// parent progress after steps 0..k; slices are consecutive and
/// non-overlapping.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineDescriptor {
    /// Shared scroll interval.
    pub trigger: TriggerSpec,
    /// Ordered steps.
    pub steps: Vec<TimelineStep>,
    /// Scroll-scrubbed or wall-clock driven.
    pub mode: PlayMode,
    /// Hold the anchor element fixed for the trigger's duration.
    pub pin: bool,
}

impl TimelineDescriptor {
    /// Reject malformed timelines at registration time.
    pub fn validate(&self) -> ScrollrigResult<()> {
        if self.steps.is_empty() {
            return Err(ScrollrigError::validation(
                "timeline must have at least one step",
            ));
        }
        for step in &self.steps {
            if step.targets.is_empty() {
                return Err(ScrollrigError::validation(
                    "timeline step must have at least one target",
                ));
            }
            if step.tracks.is_empty() {
                return Err(ScrollrigError::validation(
                    "timeline step must have at least one property track",
                ));
            }
            if !(step.weight.is_finite() && step.weight > 0.0) {
                return Err(ScrollrigError::validation(
                    "timeline step weight must be finite and > 0",
                ));
            }
            for track in &step.tracks {
                track.validate()?;
            }
            if let Some(stagger) = step.stagger {
                crate::engine::stagger::validate(step.targets.len(), stagger)?;
            }
        }
        validate_mode(self.mode)
    }
}

fn validate_mode(mode: PlayMode) -> ScrollrigResult<()> {
    match mode {
        PlayMode::Scrub { smoothing } => {
            if !(smoothing.is_finite() && smoothing >= 0.0) {
                return Err(ScrollrigError::validation(
                    "scrub smoothing must be finite and >= 0",
                ));
            }
        }
        PlayMode::Tween { duration, repeat } => {
            if !(duration.is_finite() && duration > 0.0) {
                return Err(ScrollrigError::validation(
                    "tween duration must be finite and > 0",
                ));
            }
            if repeat == Repeat::Count(0) {
                return Err(ScrollrigError::validation(
                    "tween repeat count must be >= 1",
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/descriptor.rs"]
mod tests;
