//! Keyboard handling - arrow-key nudging and orientation toggle.
//!
//! | Keys                      | Effect                         |
//! |---------------------------|--------------------------------|
//! | Arrow                     | move 5px                       |
//! | Ctrl + Arrow              | move 1px                       |
//! | Ctrl + Shift + Right/Down | grow width/height by 1px       |
//! | Ctrl + Shift + Left/Up    | shrink width/height by 1px     |
//! | Space                     | toggle orientation             |
//!
//! Keyboard resizing is not blocked by "Lock resizing"; the lock only guards
//! pointer resizes.

use crate::app::Ruler;
use crate::constants::{KEY_FINE_MOVE_STEP, KEY_MOVE_STEP, KEY_RESIZE_STEP};
use crate::host::RulerHost;

/// Keys the ruler reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Other,
}

impl Key {
    /// Map a host key name ("left", "space", ...) to a key.
    pub fn from_name(name: &str) -> Self {
        match name {
            "left" => Key::Left,
            "right" => Key::Right,
            "up" => Key::Up,
            "down" => Key::Down,
            "space" | " " => Key::Space,
            _ => Key::Other,
        }
    }

    /// Unit direction for arrow keys
    fn direction(self) -> Option<(i32, i32)> {
        match self {
            Key::Left => Some((-1, 0)),
            Key::Right => Some((1, 0)),
            Key::Up => Some((0, -1)),
            Key::Down => Some((0, 1)),
            Key::Space | Key::Other => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub control: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        control: false,
        shift: false,
    };

    pub const CONTROL: Modifiers = Modifiers {
        control: true,
        shift: false,
    };

    pub const CONTROL_SHIFT: Modifiers = Modifiers {
        control: true,
        shift: true,
    };
}

impl Ruler {
    /// Returns true if the key was handled.
    pub fn handle_key_down(
        &mut self,
        key: Key,
        modifiers: Modifiers,
        host: &mut dyn RulerHost,
    ) -> bool {
        if key == Key::Space {
            self.toggle_orientation(host);
            return true;
        }

        let Some((dx, dy)) = key.direction() else {
            return false;
        };

        if modifiers.control && modifiers.shift {
            self.resize_by(dx * KEY_RESIZE_STEP, dy * KEY_RESIZE_STEP, host);
        } else if modifiers.control {
            self.move_by(dx * KEY_FINE_MOVE_STEP, dy * KEY_FINE_MOVE_STEP, host);
        } else {
            self.move_by(dx * KEY_MOVE_STEP, dy * KEY_MOVE_STEP, host);
        }
        true
    }
}
