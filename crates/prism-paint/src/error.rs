use thiserror::Error;

use crate::paint::PaintKind;

/// Errors produced while sampling or blending paints.
///
/// All of them are local to a single call. A render loop is expected to skip
/// the affected paint for the current frame and carry on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaintError {
    /// A caller bug: sampling an empty stop list, or sampling at NaN.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("unsupported paint kind: cannot blend {from} into {to}")]
    UnsupportedPaintKind { from: PaintKind, to: PaintKind },

    #[error("invalid color literal {0:?}: expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),
}
