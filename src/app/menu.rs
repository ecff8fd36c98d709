//! Context menu - the command surface and its handlers.
//!
//! Menu items are identified by their label text. Hosts build their widget
//! from [`menu_entries`] and report clicks through
//! [`Ruler::handle_menu_label`]; labels that map to no command produce a
//! generic notice instead of failing.

use super::{Ruler, SizeDialog};
use crate::constants::UNKNOWN_MENU_ITEM_NOTICE;
use crate::host::RulerHost;
use crate::settings::{RulerSettings, opacity_steps};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    StayOnTop,
    Vertical,
    /// Opacity in percent, one of 10, 20, ... 100
    Opacity(u8),
    LockResizing,
    SetSize,
    Duplicate,
    About,
    Exit,
}

impl MenuCommand {
    pub fn label(&self) -> String {
        match self {
            MenuCommand::StayOnTop => "Stay On Top".to_string(),
            MenuCommand::Vertical => "Vertical".to_string(),
            MenuCommand::Opacity(percent) => format!("{percent}%"),
            MenuCommand::LockResizing => "Lock resizing".to_string(),
            MenuCommand::SetSize => "Set size...".to_string(),
            MenuCommand::Duplicate => "Duplicate".to_string(),
            MenuCommand::About => "About...".to_string(),
            MenuCommand::Exit => "Exit".to_string(),
        }
    }

    /// Map a menu label back to its command.
    pub fn from_label(label: &str) -> Option<Self> {
        let command = match label {
            "Stay On Top" => MenuCommand::StayOnTop,
            "Vertical" => MenuCommand::Vertical,
            "Lock resizing" => MenuCommand::LockResizing,
            "Set size..." => MenuCommand::SetSize,
            "Duplicate" => MenuCommand::Duplicate,
            "About..." => MenuCommand::About,
            "Exit" => MenuCommand::Exit,
            other => {
                let percent: u8 = other.strip_suffix('%')?.parse().ok()?;
                if !opacity_steps().any(|step| step == percent) {
                    return None;
                }
                MenuCommand::Opacity(percent)
            }
        };
        Some(command)
    }
}

/// One row of the context menu as a host should display it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Item {
        command: MenuCommand,
        checked: bool,
    },
    /// The "Opacity" submenu
    Submenu {
        label: &'static str,
        items: Vec<MenuEntry>,
    },
    Separator,
}

/// The context menu for the given settings, top to bottom.
pub fn menu_entries(settings: &RulerSettings) -> Vec<MenuEntry> {
    let item = |command, checked| MenuEntry::Item { command, checked };
    let current_opacity = settings.opacity_percent();

    vec![
        item(MenuCommand::StayOnTop, settings.stay_on_top),
        item(MenuCommand::Vertical, settings.is_vertical),
        MenuEntry::Submenu {
            label: "Opacity",
            items: opacity_steps()
                .map(|percent| item(MenuCommand::Opacity(percent), current_opacity == Some(percent)))
                .collect(),
        },
        item(MenuCommand::LockResizing, settings.is_locked),
        item(MenuCommand::SetSize, false),
        item(MenuCommand::Duplicate, false),
        MenuEntry::Separator,
        item(MenuCommand::About, false),
        MenuEntry::Separator,
        item(MenuCommand::Exit, false),
    ]
}

/// Text of the About notice
pub fn about_text() -> String {
    format!("Ruler v{}", env!("CARGO_PKG_VERSION"))
}

impl Ruler {
    /// Dispatch a clicked menu label.
    pub fn handle_menu_label(&mut self, label: &str, host: &mut dyn RulerHost) {
        match MenuCommand::from_label(label) {
            Some(command) => self.handle_menu_command(command, host),
            None => {
                tracing::warn!(label, "Unknown menu item");
                host.show_notice("Ruler", UNKNOWN_MENU_ITEM_NOTICE);
            }
        }
    }

    pub fn handle_menu_command(&mut self, command: MenuCommand, host: &mut dyn RulerHost) {
        tracing::debug!(?command, "Menu command");

        match command {
            MenuCommand::StayOnTop => {
                self.settings.stay_on_top = !self.settings.stay_on_top;
                host.settings_changed(&self.settings);
            }
            MenuCommand::Vertical => self.toggle_orientation(host),
            MenuCommand::Opacity(percent) => {
                self.settings.set_opacity(f64::from(percent) / 100.0);
                host.settings_changed(&self.settings);
            }
            MenuCommand::LockResizing => {
                self.settings.is_locked = !self.settings.is_locked;
                host.settings_changed(&self.settings);
            }
            MenuCommand::SetSize => {
                let dialog = SizeDialog::new(
                    self.bounds.width,
                    self.bounds.height,
                    self.settings.stay_on_top,
                );
                host.open_size_dialog(dialog);
            }
            MenuCommand::Duplicate => {
                let params = self.startup_params();
                if let Err(e) = host.spawn_duplicate(&params) {
                    tracing::error!("Failed to duplicate ruler: {:#}", e);
                    host.show_notice("Duplicate", &format!("{e:#}"));
                }
            }
            MenuCommand::About => host.show_notice("About Ruler", &about_text()),
            MenuCommand::Exit => host.close(),
        }
    }

    /// Apply a dialog the user confirmed with OK. Cancelled dialogs are
    /// simply dropped by the host.
    pub fn finish_size_dialog(&mut self, dialog: &SizeDialog, host: &mut dyn RulerHost) {
        let (width, height) = dialog.new_size();
        tracing::debug!(width, height, "Size dialog confirmed");
        self.set_size(width, height, host);
    }
}
