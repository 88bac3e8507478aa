//! Trigger Positions
//!
//! Where a timeline starts and ends, written as "<element edge> <viewport edge>"
//! (e.g. `"top 80%"`: the element's top meets 80% of the viewport height).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A point along an element or the viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Offset {
    /// Fraction of the extent (0.0 = top, 1.0 = bottom)
    Fraction(f64),
    /// Absolute pixels from the top
    Pixels(f64),
}

impl Offset {
    pub const TOP: Offset = Offset::Fraction(0.0);
    pub const CENTER: Offset = Offset::Fraction(0.5);
    pub const BOTTOM: Offset = Offset::Fraction(1.0);

    /// `percent(80.0)` is the same as `"80%"`
    pub fn percent(value: f64) -> Self {
        Offset::Fraction(value / 100.0)
    }

    /// Resolve against an extent in pixels
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Offset::Fraction(f) => f * extent,
            Offset::Pixels(px) => px,
        }
    }
}

impl FromStr for Offset {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => return Ok(Offset::TOP),
            "center" => return Ok(Offset::CENTER),
            "bottom" => return Ok(Offset::BOTTOM),
            _ => {}
        }

        let number = |raw: &str| {
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| PositionError::InvalidOffset(s.to_string()))
        };

        if let Some(raw) = s.strip_suffix('%') {
            Ok(Offset::percent(number(raw)?))
        } else if let Some(raw) = s.strip_suffix("px") {
            Ok(Offset::Pixels(number(raw)?))
        } else {
            Ok(Offset::Pixels(number(s)?))
        }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Offset::Fraction(v) if v == 0.0 => write!(f, "top"),
            Offset::Fraction(v) if v == 0.5 => write!(f, "center"),
            Offset::Fraction(v) if v == 1.0 => write!(f, "bottom"),
            Offset::Fraction(v) => write!(f, "{}%", v * 100.0),
            Offset::Pixels(px) => write!(f, "{}px", px),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PositionError {
    #[error("expected \"<element> <viewport>\", got {0:?}")]
    Arity(String),
    #[error("invalid offset {0:?}")]
    InvalidOffset(String),
}

/// The moment an element edge meets a viewport edge
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerPosition {
    pub element: Offset,
    pub viewport: Offset,
}

impl TriggerPosition {
    pub const fn new(element: Offset, viewport: Offset) -> Self {
        Self { element, viewport }
    }

    /// Document scroll offset at which the two edges coincide
    pub fn scroll_offset(&self, element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
        element_top + self.element.resolve(element_height) - self.viewport.resolve(viewport_height)
    }
}

impl FromStr for TriggerPosition {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(element), Some(viewport), None) => Ok(Self {
                element: element.parse()?,
                viewport: viewport.parse()?,
            }),
            _ => Err(PositionError::Arity(s.to_string())),
        }
    }
}

impl fmt::Display for TriggerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.element, self.viewport)
    }
}

/// Resolved scroll range of one timeline
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollBounds {
    pub start: f64,
    pub end: f64,
}

impl ScrollBounds {
    pub fn resolve(
        start: TriggerPosition,
        end: TriggerPosition,
        element_top: f64,
        element_height: f64,
        viewport_height: f64,
    ) -> Self {
        Self {
            start: start.scroll_offset(element_top, element_height, viewport_height),
            end: end.scroll_offset(element_top, element_height, viewport_height),
        }
    }

    /// Progress in [0, 1] for a scroll offset
    pub fn progress(&self, scroll_y: f64) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 {
            // Degenerate range: jump at `end`
            return if scroll_y >= self.end { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.start) / span).clamp(0.0, 1.0)
    }
}
