use super::color::clamp_amount;
use super::gradient::{normalized_stops, sample_stops};
use super::{Color, ColorStop, LinearGradient, Paint};
use crate::error::PaintError;

/// Blends paint `a` towards paint `b` by `amount`.
///
/// - `amount <= 0` (or NaN) returns a copy of `a`, `amount >= 1` a copy of `b`,
///   whatever their kinds.
/// - Solid + solid blends the two colors.
/// - Solid + linear gradient yields a linear gradient with the solid mixed
///   into every stop. Gradient + solid is the mirror case.
/// - Linear + linear yields a linear gradient with a stop at every offset
///   either side defines.
/// - Anything involving a radial gradient fails with
///   [`PaintError::UnsupportedPaintKind`].
pub fn blend_paints(a: &Paint, b: &Paint, amount: f64) -> Result<Paint, PaintError> {
    let amount = clamp_amount(amount);
    if amount <= 0.0 {
        return Ok(a.clone());
    }
    if amount >= 1.0 {
        return Ok(b.clone());
    }

    log::trace!("blend {} -> {} at {:.3}", a.kind(), b.kind(), amount);

    match (a, b) {
        (Paint::Solid(from), Paint::Solid(to)) => Ok(Paint::Solid(from.blend(*to, amount))),
        (Paint::Solid(solid), Paint::LinearGradient(gradient)) => {
            blend_solid_with_gradient(*solid, gradient, amount).map(Paint::LinearGradient)
        }
        (Paint::LinearGradient(_), Paint::Solid(_)) => blend_paints(b, a, 1.0 - amount),
        (Paint::LinearGradient(from), Paint::LinearGradient(to)) => {
            blend_gradients(from, to, amount).map(Paint::LinearGradient)
        }
        (from, to) => Err(PaintError::UnsupportedPaintKind { from: from.kind(), to: to.kind() }),
    }
}

/// Mixes `solid` into every stop of `gradient`.
///
/// `amount` 0 is all solid, 1 is all gradient. Stop offsets are kept as they
/// are (sorted), duplicates included, so hard edges survive the blend.
pub fn blend_solid_with_gradient(
    solid: Color,
    gradient: &LinearGradient,
    amount: f64,
) -> Result<LinearGradient, PaintError> {
    let stops = normalized_stops(&gradient.stops);
    if stops.is_empty() {
        return Err(PaintError::InvalidArgument("gradient has no stops to blend"));
    }

    let blended = stops
        .iter()
        .map(|s| ColorStop::new(s.offset, solid.blend(s.color, amount)))
        .collect();
    Ok(LinearGradient::new(blended))
}

/// Blends two linear gradients.
///
/// The result has one stop at each distinct offset found in either input.
/// At each of them both gradients are sampled (clamping past their ends) and
/// the samples blended by `amount`.
pub fn blend_gradients(
    left: &LinearGradient,
    right: &LinearGradient,
    amount: f64,
) -> Result<LinearGradient, PaintError> {
    let left_stops = normalized_stops(&left.stops);
    let right_stops = normalized_stops(&right.stops);

    let mut offsets: Vec<f64> = left_stops
        .iter()
        .chain(right_stops.iter())
        .map(|s| s.offset)
        .collect();
    offsets.sort_by(f64::total_cmp);
    offsets.dedup();

    let mut stops = Vec::with_capacity(offsets.len());
    for offset in offsets {
        let from = sample_stops(&left_stops, offset)?;
        let to = sample_stops(&right_stops, offset)?;
        stops.push(ColorStop::new(offset, from.blend(to, amount)));
    }

    if stops.is_empty() {
        return Err(PaintError::InvalidArgument("gradients have no stops to blend"));
    }
    Ok(LinearGradient::new(stops))
}
