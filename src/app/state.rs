//! Application state - the Ruler struct definition.

use crate::input::InputState;
use crate::settings::RulerSettings;
use crate::types::{CursorShape, WindowBounds};

/// The ruler's geometry controller.
///
/// Owns the window bounds exclusively: hosts read them through
/// [`Ruler::bounds`] after each handler and place their window accordingly.
/// Input handlers live in `crate::input`, menu handlers in `super::menu`.
#[derive(Debug, Clone)]
pub struct Ruler {
    /// On-screen placement and size; width and height never drop below 1
    pub(crate) bounds: WindowBounds,
    /// Orientation, lock, opacity, stacking
    pub(crate) settings: RulerSettings,
    /// Pointer press state machine
    pub(crate) input_state: InputState,
    /// Coordinate under the pointer along the measuring axis
    pub(crate) measured_position: i32,
    /// Last cursor pushed to the host
    pub(crate) cursor: CursorShape,
}

impl Ruler {
    pub fn bounds(&self) -> WindowBounds {
        self.bounds
    }

    pub fn settings(&self) -> &RulerSettings {
        &self.settings
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    pub fn measured_position(&self) -> i32 {
        self.measured_position
    }

    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    pub fn is_vertical(&self) -> bool {
        self.settings.is_vertical
    }

    pub fn is_locked(&self) -> bool {
        self.settings.is_locked
    }

    /// Length of the measuring axis: width when horizontal, height when
    /// vertical.
    pub fn measured_length(&self) -> i32 {
        if self.settings.is_vertical {
            self.bounds.height
        } else {
            self.bounds.width
        }
    }
}
