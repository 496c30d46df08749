use crate::foundation::{
    core::Rgba8,
    error::{ScrollrigError, ScrollrigResult},
};

/// Animated visual property of a render-tree node.
///
/// Rotations are in degrees and interpolate linearly in angle; the transform
/// model is the simple 2D/pseudo-3D one used by scroll-driven pages, not a
/// full 3D rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PropertyId {
    /// Horizontal translation in px.
    TranslateX,
    /// Vertical translation in px.
    TranslateY,
    /// Rotation around the viewing axis, degrees.
    Rotate,
    /// Pseudo-3D rotation around the horizontal axis, degrees.
    RotateX,
    /// Pseudo-3D rotation around the vertical axis, degrees.
    RotateY,
    /// Uniform scale factor.
    Scale,
    /// Horizontal scale factor.
    ScaleX,
    /// Vertical scale factor.
    ScaleY,
    /// Opacity in `[0, 1]` (not clamped by the engine; hosts may clamp).
    Opacity,
    /// Blur radius in px.
    Blur,
    /// Color value (interpolated per channel).
    Color,
}

impl PropertyId {
    /// Whether this property carries color values rather than scalars.
    pub fn expects_color(self) -> bool {
        matches!(self, Self::Color)
    }

    /// The property's natural (no-op) value, used by `from`-style tracks.
    ///
    /// Scale and opacity rest at 1, everything else at 0. Color has no
    /// scalar natural value.
    pub fn natural(self) -> Option<f64> {
        match self {
            Self::Scale | Self::ScaleX | Self::ScaleY | Self::Opacity => Some(1.0),
            Self::Color => None,
            _ => Some(0.0),
        }
    }
}

/// One animated value, scalar or color.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Value {
    /// Numeric value (px, degrees, factor, radius).
    Scalar(f64),
    /// RGBA8 color value.
    Color(Rgba8),
}

impl Value {
    /// Linear blend from `a` to `b` at `t`.
    ///
    /// Both values must be the same kind; kinds are checked at registration,
    /// so a mismatch here returns `a` unchanged rather than coercing.
    pub fn lerp(a: Value, b: Value, t: f64) -> Value {
        match (a, b) {
            (Value::Scalar(x), Value::Scalar(y)) => Value::Scalar(x + (y - x) * t),
            (Value::Color(x), Value::Color(y)) => Value::Color(Rgba8::lerp(x, y, t)),
            _ => a,
        }
    }

    fn is_finite(self) -> bool {
        match self {
            Value::Scalar(v) => v.is_finite(),
            Value::Color(_) => true,
        }
    }

    fn is_color(self) -> bool {
        matches!(self, Value::Color(_))
    }
}

/// One property animated from a start value to an end value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropertyTrack {
    /// Animated property.
    pub property: PropertyId,
    /// Value at progress 0.
    pub from: Value,
    /// Value at progress 1.
    pub to: Value,
}

impl PropertyTrack {
    /// Scalar track from `from` to `to`.
    pub fn scalar(property: PropertyId, from: f64, to: f64) -> Self {
        Self {
            property,
            from: Value::Scalar(from),
            to: Value::Scalar(to),
        }
    }

    /// Color track from `from` to `to`.
    pub fn color(from: Rgba8, to: Rgba8) -> Self {
        Self {
            property: PropertyId::Color,
            from: Value::Color(from),
            to: Value::Color(to),
        }
    }

    /// `from`-style track: animate from an offset value back to the
    /// property's natural state (translate/rotate/blur to 0, scale/opacity
    /// to 1).
    pub fn from_scalar(property: PropertyId, from: f64) -> ScrollrigResult<Self> {
        let natural = property.natural().ok_or_else(|| {
            ScrollrigError::property("from_scalar is not defined for color properties")
        })?;
        Ok(Self::scalar(property, from, natural))
    }

    /// Reject mismatched value kinds and non-finite scalars.
    pub fn validate(&self) -> ScrollrigResult<()> {
        if self.from.is_color() != self.to.is_color() {
            return Err(ScrollrigError::property(
                "track start and end values must be the same kind",
            ));
        }
        if self.property.expects_color() != self.from.is_color() {
            return Err(ScrollrigError::property(format!(
                "value kind does not match property {:?}",
                self.property
            )));
        }
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(ScrollrigError::property("track values must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/track.rs"]
mod tests;
