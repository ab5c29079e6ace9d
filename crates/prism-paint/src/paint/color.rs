use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PaintError;

/// Straight-alpha 8-bit ARGB color.
///
/// Equality is structural. `Color::TRANSPARENT` (all channels zero) is the
/// canonical transparent value and gets special treatment in [`Color::blend`].
///
/// Serialized as a hex string (`#AARRGGBB`).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::from_argb(0, 0, 0, 0);
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Opaque color from RGB bytes.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// Opaque color from a packed `0xRRGGBB` integer.
    ///
    /// Values outside `0..=0xFFFFFF` are clamped into range first.
    pub fn from_packed_rgb(value: i64) -> Self {
        let value = value.clamp(0, 0x00FF_FFFF);
        Self::from_rgb(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }

    /// Packs RGB into `0xRRGGBB`. Alpha is dropped.
    #[inline]
    pub const fn to_packed_rgb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// True only for the canonical transparent value, not for any zero-alpha color.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0 && self.r == 0 && self.g == 0 && self.b == 0
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Blends `self` (background) towards `foreground` by `amount`.
    ///
    /// - `amount` is clamped to [0, 1]; NaN counts as 0.
    /// - Each channel is `round(fg * amount + bg * (1 - amount))`.
    /// - If exactly one side is [`Color::TRANSPARENT`], it takes the other
    ///   side's RGB with alpha 0 first, so fading red out stays red instead of
    ///   drifting through black.
    pub fn blend(self, foreground: Color, amount: f64) -> Color {
        let bg = self.assert_transparency(foreground);
        let fg = foreground.assert_transparency(self);
        bg.blend_plain(fg, amount)
    }

    /// Composites `foreground` over `background` using the foreground's alpha
    /// as the blend amount.
    ///
    /// Plain per-channel interpolation: a transparent background darkens the
    /// foreground's RGB instead of adopting it.
    pub fn over(background: Color, foreground: Color) -> Color {
        background.blend_plain(foreground, f64::from(foreground.a) / 255.0)
    }

    /// Per-channel `round(fg * amount + bg * (1 - amount))` with a clamped amount.
    fn blend_plain(self, foreground: Color, amount: f64) -> Color {
        let amount = clamp_amount(amount);
        Color::from_argb(
            mix_channel(self.a, foreground.a, amount),
            mix_channel(self.r, foreground.r, amount),
            mix_channel(self.g, foreground.g, amount),
            mix_channel(self.b, foreground.b, amount),
        )
    }

    /// Multiplies every channel, alpha included, by `factor`.
    ///
    /// Results are truncated and clamped to `0..=255`.
    pub fn scaled(self, factor: f64) -> Color {
        let scale = |channel: u8| {
            let v = f64::from(channel) * factor;
            if v >= 255.0 {
                255
            } else if v <= 0.0 || v.is_nan() {
                0
            } else {
                v as u8
            }
        };
        Color::from_argb(scale(self.a), scale(self.r), scale(self.g), scale(self.b))
    }

    /// Rec. 709 luma in `0..=255`, truncated.
    pub fn brightness(self) -> u8 {
        // Weights in 1/10000ths keep white at exactly 255.
        let luma = 2126 * u32::from(self.r) + 7152 * u32::from(self.g) + 722 * u32::from(self.b);
        (luma / 10_000) as u8
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        self.brightness() < 40
    }

    /// Replaces the canonical transparent value with `base`'s RGB at alpha 0.
    #[inline]
    fn assert_transparency(self, base: Color) -> Color {
        if self.is_transparent() { base.with_alpha(0) } else { self }
    }
}

/// Clamps a blend amount to [0, 1]. NaN is treated as 0.
#[inline]
pub(crate) fn clamp_amount(amount: f64) -> f64 {
    if amount.is_nan() { 0.0 } else { amount.clamp(0.0, 1.0) }
}

#[inline]
fn mix_channel(bg: u8, fg: u8, amount: f64) -> u8 {
    let v = f64::from(fg) * amount + f64::from(bg) * (1.0 - amount);
    v.round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = PaintError;

    /// Parses `#RRGGBB` (opaque) or `#AARRGGBB`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PaintError::InvalidColor(s.to_owned());

        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Color::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Color::from_argb(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = PaintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
