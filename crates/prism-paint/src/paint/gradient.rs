use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::Color;
use crate::error::PaintError;

/// A single gradient stop.
///
/// `offset` is expected in [0, 1] but is not enforced. Collections of stops
/// may arrive unsorted and with duplicate offsets; samplers normalize them.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Linear gradient defined by its stops alone.
///
/// Geometry (direction, extent) belongs to whoever paints the gradient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(stops: Vec<ColorStop>) -> Self {
        Self { stops }
    }

    /// Two-stop gradient running from `start` at 0 to `end` at 1.
    pub fn between(start: Color, end: Color) -> Self {
        Self::new(vec![ColorStop::new(0.0, start), ColorStop::new(1.0, end)])
    }

    /// Color at `offset`, see [`sample_stops`].
    #[inline]
    pub fn color_at(&self, offset: f64) -> Result<Color, PaintError> {
        sample_stops(&self.stops, offset)
    }

    /// Stops sorted by offset, with non-finite offsets dropped.
    #[inline]
    pub fn sorted_stops(&self) -> Cow<'_, [ColorStop]> {
        normalized_stops(&self.stops)
    }

    /// Returns true when the gradient can be sampled.
    pub fn is_valid(&self) -> bool {
        !self.stops.is_empty() && self.stops.iter().all(|s| s.offset.is_finite())
    }
}

/// Radial gradient.
///
/// Paintable and sampleable along its radius, but the blender does not mix
/// it with other kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialGradient {
    /// Center in unit space of the painted surface.
    pub center: [f64; 2],
    pub radius: f64,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(center: [f64; 2], radius: f64, stops: Vec<ColorStop>) -> Self {
        Self { center, radius, stops }
    }

    #[inline]
    pub fn color_at(&self, offset: f64) -> Result<Color, PaintError> {
        sample_stops(&self.stops, offset)
    }
}

/// Samples the color at `offset` along a stop list.
///
/// - Stops are stable-sorted by offset first; stops with non-finite offsets
///   are ignored.
/// - A stop sitting exactly at `offset` wins, with no interpolation. Among
///   duplicates the first one in sorted order is used.
/// - Offsets at or beyond either end clamp to the end stop's color.
/// - Otherwise the two bracketing stops are blended with [`Color::blend`].
///
/// Fails with [`PaintError::InvalidArgument`] when no usable stop remains or
/// `offset` is NaN.
pub fn sample_stops(stops: &[ColorStop], offset: f64) -> Result<Color, PaintError> {
    let stops = normalized_stops(stops);
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Err(PaintError::InvalidArgument("gradient has no stops to sample"));
    };
    if offset.is_nan() {
        return Err(PaintError::InvalidArgument("gradient sample offset is NaN"));
    }

    if let Some(exact) = stops.iter().find(|s| s.offset == offset) {
        return Ok(exact.color);
    }
    if offset <= first.offset {
        return Ok(first.color);
    }
    if offset >= last.offset {
        return Ok(last.color);
    }

    // first.offset < offset < last.offset, so both neighbours exist.
    let idx = stops.partition_point(|s| s.offset < offset);
    let left = stops[idx - 1];
    let right = stops[idx];

    let t = (offset - left.offset) / (right.offset - left.offset);
    Ok(left.color.blend(right.color, t))
}

/// Sorts stops by offset (stable) and drops non-finite offsets.
///
/// Borrows when the input is already clean.
pub(crate) fn normalized_stops(stops: &[ColorStop]) -> Cow<'_, [ColorStop]> {
    let clean = stops.iter().all(|s| s.offset.is_finite())
        && stops.is_sorted_by(|a, b| a.offset <= b.offset);
    if clean {
        return Cow::Borrowed(stops);
    }

    let mut owned: Vec<ColorStop> = stops
        .iter()
        .copied()
        .filter(|s| s.offset.is_finite())
        .collect();
    if owned.len() != stops.len() {
        log::debug!(
            "dropped {} gradient stop(s) with non-finite offsets",
            stops.len() - owned.len()
        );
    }
    owned.sort_by(|a, b| a.offset.total_cmp(&b.offset));
    Cow::Owned(owned)
}
