use crate::foundation::error::{ScrollrigError, ScrollrigResult};

pub use kurbo::{Point, Rect, Vec2};

/// Monotonic timestamp in seconds, as delivered by the host's scroll and
/// frame sources.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Timestamp(pub f64);

impl Timestamp {
    /// Non-negative elapsed seconds since `earlier`.
    pub fn seconds_since(self, earlier: Timestamp) -> f64 {
        (self.0 - earlier.0).max(0.0)
    }
}

/// Viewport metrics reported by the host layout query.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Visible viewport height in px.
    pub height: f64,
    /// Total scrollable document height in px.
    pub scroll_height: f64,
}

/// Resolved absolute scroll-offset interval over which progress runs 0 -> 1.
///
/// A degenerate range (`start == end`) is defined behavior: progress snaps to
/// 1 at or past the offset and is 0 before it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollRange {
    /// Offset at which progress is 0, in px.
    pub start: f64,
    /// Offset at which progress is 1, in px.
    pub end: f64,
}

impl ScrollRange {
    /// Build a range, rejecting inverted or non-finite endpoints.
    pub fn new(start: f64, end: f64) -> ScrollrigResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ScrollrigError::validation(
                "ScrollRange endpoints must be finite",
            ));
        }
        if start > end {
            return Err(ScrollrigError::validation("ScrollRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Range length in px.
    pub fn len_px(self) -> f64 {
        self.end - self.start
    }

    /// Whether the range has zero length.
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }

    /// Whether `offset` falls inside the active interval (end exclusive).
    pub fn contains(self, offset: f64) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Clamped progress fraction in `[0, 1]` for `offset`.
    pub fn progress(self, offset: f64) -> f64 {
        if self.is_degenerate() {
            return if offset >= self.start { 1.0 } else { 0.0 };
        }
        ((offset - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Build a color from channel values.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Per-channel linear blend from `a` to `b` at `t`.
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}
