//! Scrollrig is a scroll-linked animation timeline engine.
//!
//! It maps a continuously changing scroll offset (and the wall clock, for
//! non-scrubbed effects) onto a set of registered animations, each defined
//! by a trigger, an easing curve, and property start/end values. The engine
//! recomputes every active animation once per display-refresh tick and
//! pushes the interpolated values back to the host's render tree.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `TriggerSpec + LayoutQuery -> ScrollRange` (anchor
//!    conditions become absolute scroll offsets; re-resolved after layout
//!    changes)
//! 2. **Progress**: `scroll offset -> [0, 1]` (clamped, optionally
//!    exponentially scrubbed, or wall-clock driven for tweens)
//! 3. **Interpolate**: `tracks + ease + progress -> PropertyWrite`s (pure,
//!    boundary-exact at 0 and 1)
//! 4. **Emit**: one batched `PropertySink` pass per frame, plus pin
//!    transitions for held elements
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded**: all recomputation happens on the thread driving
//!   the frame loop; registration and cancellation are serialized against
//!   it by `&mut` access.
//! - **Failure isolation**: a descriptor with an unresolvable trigger is
//!   disabled and logged; siblings keep animating.
//! - **No global registry**: each view constructs and owns its [`Engine`].
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod engine;
mod foundation;
/// Contract between the engine and the embedding view layer.
pub mod host;
mod trigger;

pub use animation::descriptor::{
    AnimationDescriptor, PlayMode, Repeat, Stagger, StaggerOrder, TimelineDescriptor,
    TimelineStep, TriggerSpec,
};
pub use animation::ease::Ease;
pub use animation::interp::{PropertyWrite, interpolate, tween_progress};
pub use animation::track::{PropertyId, PropertyTrack, Value};
pub use engine::pin::{PinPhase, PinState};
pub use engine::progress::Scrub;
pub use engine::scheduler::{AnimationHandle, Engine};
pub use engine::stagger::{local_progress, ranks};
pub use foundation::core::{Point, Rect, Rgba8, ScrollRange, Timestamp, Vec2, Viewport};
pub use foundation::error::{ScrollrigError, ScrollrigResult};
pub use host::{
    ElementId, FrameTick, LayoutQuery, PinHold, PinUpdate, PropertySink, ScrollSample,
};
pub use trigger::anchor::{AnchorSpec, Edge};
pub use trigger::resolve::resolve_trigger;
