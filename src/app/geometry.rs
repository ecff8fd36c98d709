//! Discrete geometry changes - orientation swaps and explicit sizes.

use super::Ruler;
use crate::constants::{MAX_DIMENSION, MIN_DIMENSION};
use crate::host::RulerHost;
use crate::types::Point;

impl Ruler {
    /// Flip between horizontal and vertical, swapping width and height so the
    /// measured length carries over to the new axis.
    pub fn toggle_orientation(&mut self, host: &mut dyn RulerHost) {
        self.settings.is_vertical = !self.settings.is_vertical;
        std::mem::swap(&mut self.bounds.width, &mut self.bounds.height);

        tracing::debug!(
            vertical = self.settings.is_vertical,
            bounds = %self.bounds,
            "Orientation toggled"
        );
        host.settings_changed(&self.settings);
        host.request_repaint();
    }

    /// Set an exact size, clamped to `MIN_DIMENSION..=MAX_DIMENSION`.
    pub fn set_size(&mut self, width: i32, height: i32, host: &mut dyn RulerHost) {
        let width = width.clamp(MIN_DIMENSION, MAX_DIMENSION);
        let height = height.clamp(MIN_DIMENSION, MAX_DIMENSION);
        if width == self.bounds.width && height == self.bounds.height {
            return;
        }
        self.bounds.width = width;
        self.bounds.height = height;
        host.request_repaint();
    }

    /// Move the window by a delta.
    pub fn move_by(&mut self, dx: i32, dy: i32, host: &mut dyn RulerHost) {
        if dx == 0 && dy == 0 {
            return;
        }
        let origin = self.bounds.origin() + Point::new(dx, dy);
        self.move_to(origin, host);
    }

    /// Place the window origin at a screen position.
    pub fn move_to(&mut self, origin: Point, host: &mut dyn RulerHost) {
        if origin == self.bounds.origin() {
            return;
        }
        self.bounds.set_origin(origin);
        host.request_repaint();
    }

    /// Grow (positive) or shrink (negative) the size within the dimension
    /// limits.
    pub fn resize_by(&mut self, dw: i32, dh: i32, host: &mut dyn RulerHost) {
        let width = self.bounds.width.saturating_add(dw);
        let height = self.bounds.height.saturating_add(dh);
        self.set_size(width, height, host);
    }
}
