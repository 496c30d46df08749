use crate::foundation::{
    core::Viewport,
    error::{ScrollrigError, ScrollrigResult},
};

/// Horizontal line of an element or viewport referenced by a trigger
/// condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Edge {
    /// Top edge.
    Top,
    /// Vertical center.
    Center,
    /// Bottom edge.
    Bottom,
}

impl Edge {
    fn viewport_frac(self) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => 0.5,
            Self::Bottom => 1.0,
        }
    }
}

/// One trigger condition: where an edge of the anchor element meets a line
/// of the viewport, or an absolute document offset.
///
/// The textual form matches the conventions of scroll-trigger declarations:
/// `"top center"` (element top reaches viewport center), `"top 80%"`
/// (element top reaches 80% of viewport height), `"1200px"` (absolute
/// offset).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum AnchorSpec {
    /// Element edge crosses a viewport line, given as a fraction of viewport
    /// height measured from the top (0.0 = top, 0.5 = center, 1.0 = bottom).
    Relative {
        /// Referenced edge of the anchor element.
        element_edge: Edge,
        /// Viewport line as a fraction of viewport height.
        viewport_frac: f64,
    },
    /// Absolute document scroll offset in px.
    Absolute(f64),
}

impl AnchorSpec {
    /// Relative condition from an element edge and a viewport fraction.
    pub fn relative(element_edge: Edge, viewport_frac: f64) -> Self {
        Self::Relative {
            element_edge,
            viewport_frac,
        }
    }

    /// Relative condition from an element edge and a named viewport line.
    pub fn edges(element_edge: Edge, viewport_edge: Edge) -> Self {
        Self::relative(element_edge, viewport_edge.viewport_frac())
    }

    /// Parse a condition string: `"<edge> <edge|NN%>"` or `"NNpx"`.
    pub fn parse(s: &str) -> ScrollrigResult<Self> {
        let s = s.trim().to_ascii_lowercase();
        if s.is_empty() {
            return Err(ScrollrigError::trigger("anchor condition must be non-empty"));
        }

        if let Some(px) = s.strip_suffix("px") {
            let offset: f64 = px
                .trim()
                .parse()
                .map_err(|_| ScrollrigError::trigger(format!("invalid absolute anchor '{s}'")))?;
            if !offset.is_finite() {
                return Err(ScrollrigError::trigger("absolute anchor must be finite"));
            }
            return Ok(Self::Absolute(offset));
        }

        let mut parts = s.split_whitespace();
        let element = parts.next().unwrap_or_default();
        let viewport = parts
            .next()
            .ok_or_else(|| ScrollrigError::trigger(format!("anchor '{s}' needs two tokens")))?;
        if parts.next().is_some() {
            return Err(ScrollrigError::trigger(format!(
                "anchor '{s}' has trailing tokens"
            )));
        }

        let element_edge = parse_edge(element)?;
        let viewport_frac = if let Some(pct) = viewport.strip_suffix('%') {
            let pct: f64 = pct
                .parse()
                .map_err(|_| ScrollrigError::trigger(format!("invalid viewport anchor '{viewport}'")))?;
            if !pct.is_finite() {
                return Err(ScrollrigError::trigger("viewport anchor must be finite"));
            }
            pct / 100.0
        } else {
            parse_edge(viewport)?.viewport_frac()
        };

        Ok(Self::relative(element_edge, viewport_frac))
    }

    /// Resolve this condition to an absolute document scroll offset.
    ///
    /// `element_top`/`element_bottom` are the anchor element's document-space
    /// extents. Returns the offset at which the referenced element line
    /// coincides with the viewport line.
    pub fn resolve(self, element_top: f64, element_bottom: f64, viewport: Viewport) -> f64 {
        match self {
            Self::Absolute(offset) => offset,
            Self::Relative {
                element_edge,
                viewport_frac,
            } => {
                let edge_y = match element_edge {
                    Edge::Top => element_top,
                    Edge::Center => (element_top + element_bottom) / 2.0,
                    Edge::Bottom => element_bottom,
                };
                edge_y - viewport_frac * viewport.height
            }
        }
    }
}

fn parse_edge(s: &str) -> ScrollrigResult<Edge> {
    match s {
        "top" => Ok(Edge::Top),
        "center" => Ok(Edge::Center),
        "bottom" => Ok(Edge::Bottom),
        other => Err(ScrollrigError::trigger(format!("unknown edge '{other}'"))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trigger/anchor.rs"]
mod tests;
