//! Paint model shared between lighting layers and UI previews.
//!
//! Scope:
//! - color representation (straight-alpha ARGB bytes)
//! - paint sources (solid, gradients)
//! - blending between paint sources

pub mod blend;
pub mod color;
pub mod gradient;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use blend::{blend_gradients, blend_paints, blend_solid_with_gradient};
pub use color::Color;
pub use gradient::{ColorStop, LinearGradient, RadialGradient, sample_stops};

use crate::error::PaintError;

/// Paint source: what fills a surface, independent of how it gets painted.
///
/// Serialized externally tagged in snake_case, e.g. `{"solid": "#FFFF0000"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
    RadialGradient(RadialGradient),
}

/// Discriminant of a [`Paint`], used in error reports.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PaintKind {
    Solid,
    LinearGradient,
    RadialGradient,
}

impl fmt::Display for PaintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PaintKind::Solid => "solid",
            PaintKind::LinearGradient => "linear gradient",
            PaintKind::RadialGradient => "radial gradient",
        })
    }
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    #[inline]
    pub fn transparent() -> Self {
        Paint::Solid(Color::TRANSPARENT)
    }

    pub fn kind(&self) -> PaintKind {
        match self {
            Paint::Solid(_) => PaintKind::Solid,
            Paint::LinearGradient(_) => PaintKind::LinearGradient,
            Paint::RadialGradient(_) => PaintKind::RadialGradient,
        }
    }

    /// Color at `offset` along the paint. Solids ignore the offset.
    pub fn color_at(&self, offset: f64) -> Result<Color, PaintError> {
        match self {
            Paint::Solid(c) => Ok(*c),
            Paint::LinearGradient(g) => g.color_at(offset),
            Paint::RadialGradient(g) => g.color_at(offset),
        }
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        let opaque_stops =
            |stops: &[ColorStop]| !stops.is_empty() && stops.iter().all(|s| s.color.a == u8::MAX);
        match self {
            Paint::Solid(c) => c.a == u8::MAX,
            Paint::LinearGradient(g) => opaque_stops(g.stops.as_slice()),
            Paint::RadialGradient(g) => opaque_stops(g.stops.as_slice()),
        }
    }

    /// Blends towards `other` by `amount`. See [`blend_paints`].
    #[inline]
    pub fn blend(&self, other: &Paint, amount: f64) -> Result<Paint, PaintError> {
        blend_paints(self, other, amount)
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    fn from(gradient: LinearGradient) -> Self {
        Paint::LinearGradient(gradient)
    }
}
