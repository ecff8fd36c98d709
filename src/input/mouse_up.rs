//! Pointer up handling - ends any move or resize.

use crate::app::Ruler;
use crate::host::RulerHost;

impl Ruler {
    pub fn handle_pointer_up(&mut self, _host: &mut dyn RulerHost) {
        if self.input_state.is_idle() {
            return;
        }
        let region = self.input_state.active_region();
        self.input_state.reset();
        tracing::debug!(?region, bounds = %self.bounds, "Drag session ended");
    }
}
