//! Input state machine - pointer press tracking for move and resize.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Pressed { region: None }   (pointer down)
//! Pressed { region: None } -> Pressed { region: E|S|... }
//!                                    (button-held move inside the resize band)
//! Pressed -> Idle                    (pointer up - ends move/resize)
//! ```
//!
//! Once a resize region is adopted it governs the rest of the press; a press
//! that starts moving in the interior keeps moving.

use crate::types::{Point, ResizeRegion, WindowBounds};

/// The fixed reference recorded when the pointer goes down.
///
/// Move and resize deltas are always computed against this record rather
/// than incrementally, so repeated moves never accumulate rounding drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// Pointer position minus window origin at press time
    pub offset: Point,
    /// Window bounds at press time
    pub start_bounds: WindowBounds,
    /// Pointer screen position at press time
    pub start_pointer: Point,
    /// Resize region adopted during this press, `None` while moving/undecided
    pub active_region: ResizeRegion,
}

impl DragSession {
    pub fn begin(pointer: Point, bounds: WindowBounds) -> Self {
        Self {
            offset: pointer - bounds.origin(),
            start_bounds: bounds,
            start_pointer: pointer,
            active_region: ResizeRegion::None,
        }
    }

    /// Pointer travel since the press
    #[inline]
    pub fn pointer_delta(&self, pointer: Point) -> Point {
        pointer - self.start_pointer
    }
}

/// Unified pointer state for the ruler window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputState {
    /// No button held
    #[default]
    Idle,

    /// Primary button held since `session` was recorded
    Pressed(DragSession),
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Pressed(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// The resize region governing the current press, `None` if not resizing
    pub fn active_region(&self) -> ResizeRegion {
        self.session()
            .map(|s| s.active_region)
            .unwrap_or(ResizeRegion::None)
    }

    pub fn is_resizing(&self) -> bool {
        !self.active_region().is_none()
    }

    /// Offset recorded at press time, for moves
    pub fn drag_offset(&self) -> Option<Point> {
        self.session().map(|s| s.offset)
    }

    pub fn begin(&mut self, pointer: Point, bounds: WindowBounds) {
        *self = Self::Pressed(DragSession::begin(pointer, bounds));
    }

    /// Adopt a resize region for the rest of the press. Ignored when idle.
    pub fn adopt_region(&mut self, region: ResizeRegion) {
        if let Self::Pressed(session) = self {
            session.active_region = region;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
