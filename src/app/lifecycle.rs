//! Application lifecycle - construction, startup notifications, and the
//! round trip back to startup parameters.

use super::Ruler;
use crate::constants::{MAX_DIMENSION, MIN_DIMENSION};
use crate::host::RulerHost;
use crate::input::InputState;
use crate::params::StartupParams;
use crate::types::{CursorShape, Point, WindowBounds};

impl Ruler {
    /// Create a ruler at the screen origin from startup parameters.
    pub fn new(params: StartupParams) -> Self {
        Self::with_origin(params, Point::default())
    }

    /// Create a ruler at the given screen position. The size is clamped to
    /// the dimension limits.
    pub fn with_origin(params: StartupParams, origin: Point) -> Self {
        let width = params.width.clamp(MIN_DIMENSION, MAX_DIMENSION);
        let height = params.height.clamp(MIN_DIMENSION, MAX_DIMENSION);
        Self {
            bounds: WindowBounds::new(origin.x, origin.y, width, height),
            settings: params.settings,
            input_state: InputState::default(),
            measured_position: 0,
            cursor: CursorShape::Default,
        }
    }

    /// Push the initial tooltip and settings to a freshly created host.
    pub fn start(&self, host: &mut dyn RulerHost) {
        tracing::info!(bounds = %self.bounds, vertical = self.settings.is_vertical, "Ruler started");
        host.show_tooltip(&self.measured_position.to_string());
        host.settings_changed(&self.settings);
        host.request_repaint();
    }

    /// The parameters that reopen this ruler as it is now.
    pub fn startup_params(&self) -> StartupParams {
        StartupParams {
            width: self.bounds.width,
            height: self.bounds.height,
            settings: self.settings,
        }
    }
}
