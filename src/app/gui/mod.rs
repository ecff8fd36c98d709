//! gpui window host.
//!
//! This module is organized into several submodules:
//! - `view` - `RulerView`, the ruler window and its event wiring
//! - `popups` - Context menu, size dialog and notice popup windows
//!
//! The controller never talks to gpui directly. During each event the view
//! hands it a [`GuiHost`], which only records what the controller asked for;
//! the view then applies those effects to the real window.

mod popups;
mod view;

pub use view::RulerView;

use super::{Ruler, SizeDialog};
use crate::host::RulerHost;
use crate::params::StartupParams;
use crate::settings::RulerSettings;
use crate::types::CursorShape;
use anyhow::Result;
use gpui::*;

/// A title and message waiting to be shown in a notice window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

/// Effects requested by the controller during a single event.
#[derive(Debug, Default)]
pub struct GuiHost {
    pub cursor: Option<CursorShape>,
    pub tooltip: Option<String>,
    pub repaint: bool,
    pub settings: Option<RulerSettings>,
    pub notice: Option<Notice>,
    pub dialog: Option<SizeDialog>,
    pub close: bool,
}

impl RulerHost for GuiHost {
    fn set_cursor(&mut self, cursor: CursorShape) {
        self.cursor = Some(cursor);
    }

    fn show_tooltip(&mut self, text: &str) {
        self.tooltip = Some(text.to_string());
    }

    fn request_repaint(&mut self) {
        self.repaint = true;
    }

    fn settings_changed(&mut self, settings: &RulerSettings) {
        self.settings = Some(*settings);
    }

    fn show_notice(&mut self, title: &str, message: &str) {
        self.notice = Some(Notice {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    fn open_size_dialog(&mut self, dialog: SizeDialog) {
        self.dialog = Some(dialog);
    }

    fn close(&mut self) {
        self.close = true;
    }
}

/// gpui cursor for a controller cursor shape
pub fn cursor_style(shape: CursorShape) -> CursorStyle {
    match shape {
        CursorShape::Default => CursorStyle::Arrow,
        CursorShape::ResizeNorthSouth => CursorStyle::ResizeUpDown,
        CursorShape::ResizeEastWest => CursorStyle::ResizeLeftRight,
        CursorShape::ResizeNwSe => CursorStyle::ResizeUpLeftDownRight,
        CursorShape::ResizeNeSw => CursorStyle::ResizeUpRightDownLeft,
    }
}

/// Screen rectangle for the ruler's current bounds
fn window_bounds_for(ruler: &Ruler) -> Bounds<Pixels> {
    let b = ruler.bounds();
    Bounds::new(
        point(px(b.x as f32), px(b.y as f32)),
        size(px(b.width as f32), px(b.height as f32)),
    )
}

/// Open a borderless ruler window for `ruler`.
///
/// Stacking is a window-creation property in gpui, so `stay_on_top` is read
/// here; changing it later goes through a reopen.
pub fn open_ruler_window(ruler: Ruler, cx: &mut App) -> Result<WindowHandle<RulerView>> {
    let stay_on_top = ruler.settings().stay_on_top;
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(window_bounds_for(&ruler))),
        titlebar: None,
        focus: true,
        show: true,
        kind: if stay_on_top {
            WindowKind::PopUp
        } else {
            WindowKind::Normal
        },
        window_background: WindowBackgroundAppearance::Transparent,
        window_decorations: Some(WindowDecorations::Client),
        app_id: Some("ruler".to_string()),
        ..Default::default()
    };

    tracing::debug!(bounds = %ruler.bounds(), stay_on_top, "Opening ruler window");
    cx.open_window(options, |window, cx| cx.new(|cx| RulerView::new(ruler, window, cx)))
}

/// Run the gpui application until the ruler is closed.
pub fn run(params: StartupParams) {
    Application::new().run(move |cx: &mut App| {
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                tracing::info!("Last window closed, quitting");
                cx.quit();
            }
        })
        .detach();

        if let Err(e) = open_ruler_window(Ruler::new(params), cx) {
            tracing::error!("Failed to open ruler window: {:#}", e);
            cx.quit();
        }
        cx.activate(true);
    });
}
