//! Pointer move handling - tooltip position, hover cursor, move and resize.
//!
//! ## Performance Notes
//!
//! Pointer move fires for every mouse event over the ruler. The handler does
//! constant work and only notifies the host when something it shows actually
//! changed (tooltip text, cursor shape, bounds).

use crate::app::Ruler;
use crate::constants::{
    MAX_DIMENSION, RESIZE_MAX_WIDTH_EXCLUSIVE, RESIZE_MIN_HEIGHT_EXCLUSIVE,
    RESIZE_MIN_WIDTH_EXCLUSIVE,
};
use crate::host::RulerHost;
use crate::input::hit_test::{classify_region, in_resize_band};
use crate::profile_scope;
use crate::types::{CursorShape, Point};

impl Ruler {
    pub fn handle_pointer_move(
        &mut self,
        pointer: Point,
        primary_held: bool,
        host: &mut dyn RulerHost,
    ) {
        profile_scope!("handle_pointer_move");

        let local = self.bounds.to_local(pointer);
        self.update_measured_position(local, host);

        // A resize in progress keeps going regardless of where the pointer is
        if self.input_state.is_resizing() {
            self.resize_step(pointer, host);
            return;
        }

        if in_resize_band(&self.bounds, local) {
            let region = classify_region(local, self.bounds.width, self.bounds.height);
            self.set_cursor(region.cursor(), host);

            if primary_held {
                self.input_state.adopt_region(region);
                self.resize_step(pointer, host);
            }
        } else {
            self.set_cursor(CursorShape::Default, host);

            if primary_held {
                match self.input_state.drag_offset() {
                    Some(offset) => self.move_to(pointer - offset, host),
                    None => tracing::trace!("Button held without a drag session, ignoring move"),
                }
            }
        }
    }

    /// One resize step against the drag-start rectangle.
    ///
    /// Only E, S and SE change geometry. Width is accepted only strictly
    /// between 50 and 200, height only strictly above 50 and up to
    /// `MAX_DIMENSION`; a rejected axis is left as it is for this step.
    pub fn resize_step(&mut self, pointer: Point, host: &mut dyn RulerHost) {
        if self.settings.is_locked {
            return;
        }
        let Some(session) = self.input_state.session().copied() else {
            return;
        };

        let region = session.active_region;
        let delta = session.pointer_delta(pointer);
        let mut changed = false;

        if region.resizes_width() {
            let width = session.start_bounds.width.saturating_add(delta.x);
            if width > RESIZE_MIN_WIDTH_EXCLUSIVE && width < RESIZE_MAX_WIDTH_EXCLUSIVE {
                changed |= width != self.bounds.width;
                self.bounds.width = width;
            } else {
                tracing::trace!(width, "Resize width rejected");
            }
        }

        if region.resizes_height() {
            let height = session.start_bounds.height.saturating_add(delta.y);
            if height > RESIZE_MIN_HEIGHT_EXCLUSIVE && height <= MAX_DIMENSION {
                changed |= height != self.bounds.height;
                self.bounds.height = height;
            } else {
                tracing::trace!(height, "Resize height rejected");
            }
        }

        if changed {
            host.request_repaint();
        }
    }

    /// Track the coordinate along the measuring axis and refresh the tooltip
    /// only when it changes.
    fn update_measured_position(&mut self, local: Point, host: &mut dyn RulerHost) {
        let position = if self.settings.is_vertical {
            local.y
        } else {
            local.x
        };
        if position != self.measured_position {
            self.measured_position = position;
            host.show_tooltip(&position.to_string());
        }
    }

    fn set_cursor(&mut self, cursor: CursorShape, host: &mut dyn RulerHost) {
        if cursor != self.cursor {
            self.cursor = cursor;
            host.set_cursor(cursor);
        }
    }
}
