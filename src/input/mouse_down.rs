//! Pointer down handling - starts a drag session.

use crate::app::Ruler;
use crate::host::RulerHost;
use crate::profile_scope;
use crate::types::Point;

impl Ruler {
    /// Record the drag session for a new press.
    ///
    /// Whether the press moves or resizes is decided by the first
    /// button-held pointer move, not here.
    pub fn handle_pointer_down(&mut self, pointer: Point, _host: &mut dyn RulerHost) {
        profile_scope!("handle_pointer_down");

        self.input_state.begin(pointer, self.bounds);
        tracing::debug!(?pointer, bounds = %self.bounds, "Drag session started");
    }

    /// Double-click toggles orientation, like Space.
    pub fn handle_double_click(&mut self, host: &mut dyn RulerHost) {
        self.toggle_orientation(host);
    }
}
