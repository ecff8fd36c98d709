//! Popup windows - context menu, size dialog and notices.
//!
//! A ruler is often only a few dozen pixels tall, far too small to host a
//! menu or dialog inside its own window, so each popup gets a window of its
//! own and reports back through the ruler's [`WindowHandle`].

use super::{Notice, RulerView};
use crate::app::{MenuEntry, SizeDialog, SizeField, menu_entries};
use crate::settings::RulerSettings;
use gpui::prelude::FluentBuilder;
use gpui::*;

// ============================================================================
// Layout
// ============================================================================

const MENU_WIDTH: f32 = 160.0;
const MENU_ROW_HEIGHT: f32 = 22.0;
/// Separator line plus its vertical margins
const MENU_SEPARATOR_HEIGHT: f32 = 9.0;
/// Vertical padding plus border of the menu panel
const MENU_CHROME_HEIGHT: f32 = 10.0;

const DIALOG_WIDTH: f32 = 240.0;
const DIALOG_HEIGHT: f32 = 140.0;
const NOTICE_WIDTH: f32 = 300.0;
const NOTICE_HEIGHT: f32 = 120.0;

fn popup_options(bounds: Bounds<Pixels>, stay_on_top: bool, title: Option<&str>) -> WindowOptions {
    WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: title.map(|title| TitlebarOptions {
            title: Some(title.to_string().into()),
            ..Default::default()
        }),
        focus: true,
        show: true,
        kind: if stay_on_top {
            WindowKind::PopUp
        } else {
            WindowKind::Normal
        },
        ..Default::default()
    }
}

fn dialog_button(id: &'static str, label: &'static str) -> Stateful<Div> {
    div()
        .id(id)
        .px_3()
        .py_1()
        .border_1()
        .border_color(rgb(0x999999))
        .rounded(px(3.0))
        .bg(rgb(0xf0f0f0))
        .hover(|s| s.bg(rgb(0xe0e0e0)))
        .cursor(CursorStyle::PointingHand)
        .child(label)
}

// ============================================================================
// Context menu
// ============================================================================

/// Height of the menu panel with the opacity submenu open or closed
fn menu_height(entries: &[MenuEntry], submenu_open: bool) -> f32 {
    let rows: f32 = entries
        .iter()
        .map(|entry| match entry {
            MenuEntry::Item { .. } => MENU_ROW_HEIGHT,
            MenuEntry::Submenu { items, .. } if submenu_open => {
                MENU_ROW_HEIGHT * (items.len() + 1) as f32
            }
            MenuEntry::Submenu { .. } => MENU_ROW_HEIGHT,
            MenuEntry::Separator => MENU_SEPARATOR_HEIGHT,
        })
        .sum();
    rows + MENU_CHROME_HEIGHT
}

/// Open the context menu at a screen position.
pub fn open_menu_window(
    owner: WindowHandle<RulerView>,
    settings: RulerSettings,
    at: Point<Pixels>,
    cx: &mut App,
) {
    let entries = menu_entries(&settings);
    let bounds = Bounds::new(at, size(px(MENU_WIDTH), px(menu_height(&entries, false))));
    let options = WindowOptions {
        kind: WindowKind::PopUp,
        window_decorations: Some(WindowDecorations::Client),
        ..popup_options(bounds, true, None)
    };

    if let Err(e) = cx.open_window(options, |window, cx| {
        cx.new(|cx| MenuView::new(owner, entries, window, cx))
    }) {
        tracing::error!("Failed to open context menu: {:#}", e);
    }
}

pub struct MenuView {
    owner: WindowHandle<RulerView>,
    entries: Vec<MenuEntry>,
    submenu_open: bool,
    focus_handle: FocusHandle,
    _activation: Subscription,
}

impl MenuView {
    fn new(
        owner: WindowHandle<RulerView>,
        entries: Vec<MenuEntry>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        // Clicking anywhere else dismisses the menu
        let activation = cx.observe_window_activation(window, |_, window, _| {
            if !window.is_window_active() {
                window.remove_window();
            }
        });

        Self {
            owner,
            entries,
            submenu_open: false,
            focus_handle,
            _activation: activation,
        }
    }

    fn choose(&mut self, label: &str, window: &mut Window, cx: &mut Context<Self>) {
        window.remove_window();
        let result = self
            .owner
            .update(cx, |view, window, cx| view.activate_menu_label(label, window, cx));
        if let Err(e) = result {
            tracing::warn!(label, "Ruler window gone before menu closed: {:#}", e);
        }
    }

    fn toggle_submenu(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.submenu_open = !self.submenu_open;
        let height = menu_height(&self.entries, self.submenu_open);
        window.resize(size(px(MENU_WIDTH), px(height)));
        cx.notify();
    }

    fn render_item(
        id: impl Into<ElementId>,
        label: String,
        checked: bool,
        cx: &mut Context<Self>,
    ) -> Stateful<Div> {
        div()
            .id(id)
            .h(px(MENU_ROW_HEIGHT))
            .px_2()
            .flex()
            .items_center()
            .gap_1()
            .hover(|s| s.bg(rgb(0xcce4f7)))
            .cursor(CursorStyle::PointingHand)
            .child(div().w(px(14.0)).when(checked, |d| d.child("✓")))
            .child(label.clone())
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(move |this, _, window, cx| this.choose(&label, window, cx)),
            )
    }
}

impl Render for MenuView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let mut panel = div()
            .id("ruler-menu")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|_, event: &KeyDownEvent, window, _| {
                if event.keystroke.key == "escape" {
                    window.remove_window();
                }
            }))
            .size_full()
            .flex()
            .flex_col()
            .py_1()
            .bg(white())
            .border_1()
            .border_color(rgb(0x999999))
            .text_size(px(12.0))
            .text_color(black());

        for (ix, entry) in self.entries.iter().enumerate() {
            match entry {
                MenuEntry::Item { command, checked } => {
                    panel = panel.child(Self::render_item(("menu-item", ix), command.label(), *checked, cx));
                }
                MenuEntry::Submenu { label, items } => {
                    let arrow = if self.submenu_open { "▾" } else { "▸" };
                    panel = panel.child(
                        div()
                            .id(("menu-submenu", ix))
                            .h(px(MENU_ROW_HEIGHT))
                            .px_2()
                            .flex()
                            .items_center()
                            .justify_between()
                            .hover(|s| s.bg(rgb(0xcce4f7)))
                            .cursor(CursorStyle::PointingHand)
                            .child(div().pl(px(18.0)).child(*label))
                            .child(arrow)
                            .on_mouse_down(
                                MouseButton::Left,
                                cx.listener(|this, _, window, cx| this.toggle_submenu(window, cx)),
                            ),
                    );

                    if self.submenu_open {
                        for (jx, item) in items.iter().enumerate() {
                            if let MenuEntry::Item { command, checked } = item {
                                panel = panel.child(
                                    Self::render_item(("menu-subitem", jx), command.label(), *checked, cx)
                                        .pl_6(),
                                );
                            }
                        }
                    }
                }
                MenuEntry::Separator => {
                    panel = panel.child(div().my_1().h(px(1.0)).bg(rgb(0xcccccc)));
                }
            }
        }

        panel
    }
}

// ============================================================================
// Size dialog
// ============================================================================

/// Open the "Set size..." dialog centered on the main display.
pub fn open_size_dialog_window(owner: WindowHandle<RulerView>, dialog: SizeDialog, cx: &mut App) {
    let bounds = Bounds::centered(None, size(px(DIALOG_WIDTH), px(DIALOG_HEIGHT)), cx);
    let options = popup_options(bounds, dialog.stay_on_top, Some("Set size"));

    if let Err(e) = cx.open_window(options, |window, cx| {
        cx.new(|cx| SizeDialogView::new(owner, dialog, window, cx))
    }) {
        tracing::error!("Failed to open size dialog: {:#}", e);
    }
}

pub struct SizeDialogView {
    owner: WindowHandle<RulerView>,
    dialog: SizeDialog,
    focus_handle: FocusHandle,
}

impl SizeDialogView {
    fn new(
        owner: WindowHandle<RulerView>,
        dialog: SizeDialog,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);
        Self {
            owner,
            dialog,
            focus_handle,
        }
    }

    fn finish(&mut self, confirmed: bool, window: &mut Window, cx: &mut Context<Self>) {
        let result = confirmed.then(|| self.dialog.clone());
        window.remove_window();
        if let Err(e) = self
            .owner
            .update(cx, |view, window, cx| view.finish_size_dialog(result, window, cx))
        {
            tracing::warn!("Ruler window gone before size dialog closed: {:#}", e);
        }
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        match event.keystroke.key.as_str() {
            "enter" => self.finish(true, window, cx),
            "escape" => self.finish(false, window, cx),
            "tab" => self.dialog.focus_next(),
            "backspace" => self.dialog.delete_char(),
            _ => {
                if let Some(typed) = &event.keystroke.key_char {
                    for c in typed.chars() {
                        self.dialog.insert_char(c);
                    }
                }
            }
        }
        cx.notify();
    }

    fn render_field(&self, field: SizeField, label: &'static str, cx: &mut Context<Self>) -> Div {
        let focused = self.dialog.focused == field;
        let text = self.dialog.field_text(field).to_string();

        div()
            .flex()
            .items_center()
            .gap_2()
            .child(div().w(px(50.0)).child(label))
            .child(
                div()
                    .id(label)
                    .flex_1()
                    .h(px(22.0))
                    .px_1()
                    .flex()
                    .items_center()
                    .bg(white())
                    .border_1()
                    .border_color(if focused { rgb(0x3b82f6) } else { rgb(0x999999) })
                    .child(if focused { format!("{text}|") } else { text })
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(move |this, _, _, cx| {
                            this.dialog.focused = field;
                            cx.notify();
                        }),
                    ),
            )
    }
}

impl Render for SizeDialogView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("size-dialog")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .size_full()
            .p_3()
            .flex()
            .flex_col()
            .gap_2()
            .bg(rgb(0xf7f7f7))
            .text_size(px(12.0))
            .text_color(black())
            .child(self.render_field(SizeField::Width, "Width", cx))
            .child(self.render_field(SizeField::Height, "Height", cx))
            .child(
                div()
                    .flex()
                    .justify_end()
                    .gap_2()
                    .mt_2()
                    .child(
                        dialog_button("size-ok", "OK")
                            .on_click(cx.listener(|this, _: &ClickEvent, window, cx| this.finish(true, window, cx))),
                    )
                    .child(
                        dialog_button("size-cancel", "Cancel")
                            .on_click(cx.listener(|this, _: &ClickEvent, window, cx| this.finish(false, window, cx))),
                    ),
            )
    }
}

// ============================================================================
// Notices
// ============================================================================

/// Show a message in its own small window.
pub fn open_notice_window(notice: Notice, stay_on_top: bool, cx: &mut App) {
    let bounds = Bounds::centered(None, size(px(NOTICE_WIDTH), px(NOTICE_HEIGHT)), cx);
    let options = popup_options(bounds, stay_on_top, Some(&notice.title));

    tracing::debug!(title = %notice.title, "Showing notice");
    if let Err(e) = cx.open_window(options, |window, cx| cx.new(|cx| NoticeView::new(notice, window, cx))) {
        tracing::error!("Failed to open notice: {:#}", e);
    }
}

pub struct NoticeView {
    notice: Notice,
    focus_handle: FocusHandle,
}

impl NoticeView {
    fn new(notice: Notice, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);
        Self {
            notice,
            focus_handle,
        }
    }
}

impl Render for NoticeView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("notice")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|_, event: &KeyDownEvent, window, _| {
                if matches!(event.keystroke.key.as_str(), "enter" | "escape") {
                    window.remove_window();
                }
            }))
            .size_full()
            .p_3()
            .flex()
            .flex_col()
            .justify_between()
            .bg(rgb(0xf7f7f7))
            .text_size(px(12.0))
            .text_color(black())
            .child(self.notice.message.clone())
            .child(
                div().flex().justify_end().child(
                    dialog_button("notice-ok", "OK")
                        .on_click(|_, window, _| window.remove_window()),
                ),
            )
    }
}
