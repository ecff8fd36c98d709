//! Host capability interface.
//!
//! The core never touches a concrete window or widget. Everything the user
//! sees outside of the painted ruler (cursor, tooltip, menu checkmarks,
//! notices) flows through this trait, so the same controller can sit behind
//! gpui, a test recorder, or any other toolkit.

use crate::app::SizeDialog;
use crate::params::StartupParams;
use crate::settings::RulerSettings;
use crate::types::CursorShape;

pub trait RulerHost {
    /// Show the given pointer shape over the ruler
    fn set_cursor(&mut self, cursor: CursorShape);

    /// Replace the tooltip text
    fn show_tooltip(&mut self, text: &str);

    /// Bounds or orientation changed; repaint (and re-place the window)
    fn request_repaint(&mut self);

    /// Settings changed; refresh menu checkmarks, opacity, stacking
    fn settings_changed(&mut self, _settings: &RulerSettings) {}

    /// Show a user-visible message (About, unknown menu command, failures)
    fn show_notice(&mut self, _title: &str, _message: &str) {}

    /// Open the "Set size..." dialog; the host hands the finished dialog
    /// back through `Ruler::finish_size_dialog`
    fn open_size_dialog(&mut self, _dialog: SizeDialog) {}

    /// Launch another ruler process with these parameters
    fn spawn_duplicate(&mut self, params: &StartupParams) -> anyhow::Result<()> {
        crate::duplicate::spawn_duplicate(params)
    }

    /// Close the ruler window
    fn close(&mut self) {}
}

/// A host that ignores every notification.
///
/// Useful when driving the controller outside of any window.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl RulerHost for NullHost {
    fn set_cursor(&mut self, _cursor: CursorShape) {}

    fn show_tooltip(&mut self, _text: &str) {}

    fn request_repaint(&mut self) {}

    fn spawn_duplicate(&mut self, _params: &StartupParams) -> anyhow::Result<()> {
        Ok(())
    }
}
