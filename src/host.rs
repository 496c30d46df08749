//! Contract between the engine and the embedding view layer.
//!
//! The host owns the render tree, the scroll feed, and the frame clock; the
//! engine only reads layout synchronously and pushes computed property
//! values back. All calls happen on the single thread driving the frame
//! loop.

use crate::{
    animation::interp::PropertyWrite,
    foundation::core::{Rect, Timestamp, Viewport},
};

/// Opaque handle to a render-tree node, issued by the embedding view layer.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub u64);

/// One scroll-offset sample pushed by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    /// Absolute document scroll offset in px.
    pub offset: f64,
    /// Sample timestamp.
    pub timestamp: Timestamp,
}

/// One display-refresh tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    /// Tick timestamp.
    pub timestamp: Timestamp,
}

/// Fixed-position hold for a pinned element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinHold {
    /// Viewport-space y at which the element is held, in px.
    pub viewport_y: f64,
    /// Height of the layout space to reserve so siblings do not jump, in px.
    pub reserve_height: f64,
}

/// Pin transition emitted to the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PinUpdate {
    /// Remove the element from flow and hold it at the given position.
    Hold(PinHold),
    /// Return the element to normal flow.
    Release,
}

/// Synchronous layout measurement, implemented by the host.
///
/// `measure` must answer within the same tick it is called; a `None` means
/// the element is detached and the querying descriptor will be disabled.
pub trait LayoutQuery {
    /// Current viewport metrics.
    fn viewport(&self) -> Viewport;

    /// Document-space bounds of `element`, or `None` if detached.
    fn measure(&self, element: ElementId) -> Option<Rect>;
}

/// Receiver for per-frame computed values, implemented by the host.
pub trait PropertySink {
    /// Apply interpolated property values to `element`.
    fn write(&mut self, element: ElementId, values: &[PropertyWrite]);

    /// Apply a pin transition to `element`.
    fn pin(&mut self, element: ElementId, update: PinUpdate);
}
