//! Ruler settings - orientation, lock, opacity and stacking.
//!
//! Settings are created from defaults or startup parameters, mutated by menu
//! actions, and live for the process lifetime. Nothing here is persisted.

use crate::constants::{DEFAULT_OPACITY, OPACITY_STEP_PERCENT, OPACITY_TOLERANCE};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RulerSettings {
    /// Measuring along Y instead of X
    pub is_vertical: bool,
    /// Pointer resize disabled
    pub is_locked: bool,
    /// Window opacity in `0.0..=1.0`
    pub opacity: f64,
    /// Keep the window above all others
    pub stay_on_top: bool,
}

impl Default for RulerSettings {
    fn default() -> Self {
        Self {
            is_vertical: false,
            is_locked: false,
            opacity: DEFAULT_OPACITY,
            stay_on_top: false,
        }
    }
}

impl RulerSettings {
    /// Set opacity, clamped into `0.0..=1.0`
    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = if opacity.is_nan() {
            DEFAULT_OPACITY
        } else {
            opacity.clamp(0.0, 1.0)
        };
    }

    /// The opacity menu step matching the current opacity, if any
    pub fn opacity_percent(&self) -> Option<u8> {
        opacity_steps().find(|&percent| {
            (f64::from(percent) - self.opacity * 100.0).abs() < OPACITY_TOLERANCE
        })
    }
}

/// The opacity menu choices in percent: 10, 20, ... 100.
pub fn opacity_steps() -> impl Iterator<Item = u8> {
    (1..=100 / OPACITY_STEP_PERCENT).map(|i| i * OPACITY_STEP_PERCENT)
}
