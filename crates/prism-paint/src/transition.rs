//! Time-driven paint transitions.
//!
//! A [`PaintTransition`] turns elapsed frame time into a blend amount and
//! evaluates [`blend_paints`] with it. The render loop owns the clock; this
//! module only accumulates the deltas it is handed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::PaintError;
use crate::paint::{Paint, blend_paints};

/// Easing curve applied to linear progress.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    #[default]
    EaseInOutQuad,
    /// Overshoots past 1 before settling. Blenders clamp the excess.
    EaseOutBack,
}

impl Easing {
    /// Maps `t` (clamped to [0, 1]) through the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseOutBack => {
                const C1: f64 = 1.70158;
                const C3: f64 = C1 + 1.0;
                let u = t - 1.0;
                1.0 + C3 * u.powi(3) + C1 * u.powi(2)
            }
        }
    }
}

/// Transition timing.
///
/// `max_step_ms` caps how much time one `advance` call may consume so a
/// stalled frame does not make the transition jump. Zero disables the cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub duration_ms: u64,
    pub easing: Easing,
    pub max_step_ms: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: 250,
            easing: Easing::EaseInOutQuad,
            max_step_ms: 250,
        }
    }
}

impl TransitionConfig {
    #[inline]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    #[inline]
    pub fn max_step(&self) -> Option<Duration> {
        (self.max_step_ms > 0).then(|| Duration::from_millis(self.max_step_ms))
    }
}

/// Animated blend between two paints.
///
/// Either end may be left unset; it is then taken from the defaults passed
/// at evaluation time, typically the animated target's current paint.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintTransition {
    from: Option<Paint>,
    to: Option<Paint>,
    config: TransitionConfig,
    elapsed: Duration,
}

impl PaintTransition {
    pub fn new(config: TransitionConfig) -> Self {
        Self { from: None, to: None, config, elapsed: Duration::ZERO }
    }

    pub fn between(from: Paint, to: Paint, config: TransitionConfig) -> Self {
        Self::new(config).with_from(from).with_to(to)
    }

    pub fn with_from(mut self, from: Paint) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_to(mut self, to: Paint) -> Self {
        self.to = Some(to);
        self
    }

    #[inline]
    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Linear progress in [0, 1]. A zero-length transition is always complete.
    pub fn progress(&self) -> f64 {
        let total = self.config.duration().as_nanos();
        if total == 0 {
            return 1.0;
        }
        (self.elapsed.as_nanos() as f64 / total as f64).min(1.0)
    }

    #[inline]
    pub fn eased_progress(&self) -> f64 {
        self.config.easing.apply(self.progress())
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.config.duration()
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Consumes `dt` (capped by `max_step`) and returns the new linear progress.
    pub fn advance(&mut self, dt: Duration) -> f64 {
        let step = match self.config.max_step() {
            Some(max) => dt.min(max),
            None => dt,
        };
        self.elapsed = self.elapsed.saturating_add(step).min(self.config.duration());
        self.progress()
    }

    /// Paint at the current eased progress.
    pub fn value(&self, default_from: &Paint, default_to: &Paint) -> Result<Paint, PaintError> {
        let from = self.from.as_ref().unwrap_or(default_from);
        let to = self.to.as_ref().unwrap_or(default_to);
        blend_paints(from, to, self.eased_progress())
    }

    /// Advances by `dt` and evaluates the paint for this frame.
    ///
    /// A failed blend is logged and the frame skipped (`None`); the
    /// transition itself stays usable.
    pub fn frame(
        &mut self,
        dt: Duration,
        default_from: &Paint,
        default_to: &Paint,
    ) -> Option<Paint> {
        let progress = self.advance(dt);
        match self.value(default_from, default_to) {
            Ok(paint) => Some(paint),
            Err(err) => {
                log::warn!("skipping transition frame at progress {progress:.3}: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Color, ColorStop, RadialGradient};

    const RED: Color = Color::from_rgb(255, 0, 0);
    const BLUE: Color = Color::from_rgb(0, 0, 255);

    fn linear(duration_ms: u64) -> TransitionConfig {
        TransitionConfig { duration_ms, easing: Easing::Linear, max_step_ms: 0 }
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    // ── easing ────────────────────────────────────────────────────────────

    #[test]
    fn easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseInOutQuad, Easing::EaseOutBack] {
            assert!(easing.apply(0.0).abs() < 1e-12, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12, "{easing:?}");
        }
    }

    #[test]
    fn ease_in_out_quad_is_symmetric() {
        assert_eq!(Easing::EaseInOutQuad.apply(0.5), 0.5);
        assert_eq!(Easing::EaseInOutQuad.apply(0.25), 0.125);
        assert_eq!(Easing::EaseInOutQuad.apply(0.75), 0.875);
    }

    #[test]
    fn ease_out_back_overshoots() {
        assert!(Easing::EaseOutBack.apply(0.7) > 1.0);
    }

    #[test]
    fn easing_clamps_input() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(3.0), 1.0);
    }

    // ── stepping ──────────────────────────────────────────────────────────

    #[test]
    fn advance_accumulates_progress() {
        let mut t = PaintTransition::new(linear(100));
        assert_eq!(t.advance(ms(25)), 0.25);
        assert_eq!(t.advance(ms(25)), 0.5);
        assert!(!t.is_finished());
    }

    #[test]
    fn advance_saturates_at_duration() {
        let mut t = PaintTransition::new(linear(100));
        assert_eq!(t.advance(ms(500)), 1.0);
        assert!(t.is_finished());
        assert_eq!(t.elapsed(), ms(100));
    }

    #[test]
    fn max_step_caps_long_frames() {
        let config = TransitionConfig { max_step_ms: 50, ..linear(100) };
        let mut t = PaintTransition::new(config);
        assert_eq!(t.advance(Duration::from_secs(2)), 0.5);
    }

    #[test]
    fn zero_duration_is_complete() {
        let t = PaintTransition::new(linear(0));
        assert_eq!(t.progress(), 1.0);
        assert!(t.is_finished());
    }

    #[test]
    fn reset_rewinds() {
        let mut t = PaintTransition::new(linear(100));
        t.advance(ms(80));
        t.reset();
        assert_eq!(t.progress(), 0.0);
    }

    // ── evaluation ────────────────────────────────────────────────────────

    #[test]
    fn value_blends_at_eased_progress() {
        let mut t = PaintTransition::between(Paint::solid(RED), Paint::solid(BLUE), linear(100));
        t.advance(ms(25));
        let unused = Paint::transparent();
        assert_eq!(t.value(&unused, &unused).unwrap(), Paint::solid(RED.blend(BLUE, 0.25)));
    }

    #[test]
    fn unset_ends_use_defaults() {
        let mut t = PaintTransition::new(linear(100)).with_to(Paint::solid(BLUE));
        let current = Paint::solid(RED);
        assert_eq!(t.value(&current, &Paint::transparent()).unwrap(), current);
        t.advance(ms(100));
        assert_eq!(t.value(&current, &Paint::transparent()).unwrap(), Paint::solid(BLUE));
    }

    #[test]
    fn overshoot_is_clamped_by_blend() {
        let config = TransitionConfig { easing: Easing::EaseOutBack, ..linear(100) };
        let mut t = PaintTransition::between(Paint::solid(RED), Paint::solid(BLUE), config);
        t.advance(ms(70));
        let unused = Paint::transparent();
        assert_eq!(t.value(&unused, &unused).unwrap(), Paint::solid(BLUE));
    }

    #[test]
    fn failed_frames_are_skipped() {
        let radial = Paint::RadialGradient(RadialGradient::new(
            [0.5, 0.5],
            0.5,
            vec![ColorStop::new(0.0, RED)],
        ));
        let mut t = PaintTransition::between(radial, Paint::solid(BLUE), linear(100));
        let unused = Paint::transparent();

        assert_eq!(t.frame(ms(50), &unused, &unused), None);
        // At the end no blending is needed, so the target comes through.
        assert_eq!(t.frame(ms(50), &unused, &unused), Some(Paint::solid(BLUE)));
    }

    // ── config ────────────────────────────────────────────────────────────

    #[test]
    fn config_fills_missing_fields_with_defaults() {
        let config: TransitionConfig = serde_json::from_str(r#"{ "duration_ms": 500 }"#).unwrap();
        assert_eq!(config.duration(), ms(500));
        assert_eq!(config.easing, Easing::EaseInOutQuad);
        assert_eq!(config.max_step(), Some(ms(250)));

        let config: TransitionConfig =
            serde_json::from_str(r#"{ "easing": "ease_out_back", "max_step_ms": 0 }"#).unwrap();
        assert_eq!(config.easing, Easing::EaseOutBack);
        assert_eq!(config.max_step(), None);
    }
}
