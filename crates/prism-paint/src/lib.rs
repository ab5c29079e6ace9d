//! Prism paint crate.
//!
//! Pure color and paint blending used by lighting layers and UI transitions:
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`paint`] | `Color`, `ColorStop`, gradients, `Paint`, blending |
//! | [`transition`] | `PaintTransition`, `Easing`, `TransitionConfig` |
//! | [`error`] | `PaintError` |
//! | [`logging`] | `init_logging` |
//!
//! Everything here is synchronous and free of shared state; all inputs are
//! values and all outputs are freshly built.
//!
//! ```rust
//! use prism_paint::paint::{Color, LinearGradient, Paint};
//!
//! let red = Paint::solid(Color::from_rgb(255, 0, 0));
//! let fade = Paint::from(LinearGradient::between(Color::from_rgb(0, 0, 255), Color::TRANSPARENT));
//!
//! let mid = red.blend(&fade, 0.5).unwrap();
//! assert!(matches!(mid, Paint::LinearGradient(_)));
//! ```

pub mod error;
pub mod logging;
pub mod paint;
pub mod transition;

pub use error::PaintError;
pub use paint::{Color, ColorStop, LinearGradient, Paint, PaintKind, RadialGradient};
pub use transition::{Easing, PaintTransition, TransitionConfig};
