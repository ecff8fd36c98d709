//! The ruler window - painting, pointer and keyboard wiring.
//!
//! Pointer positions arrive window-local from gpui; they are converted to
//! screen coordinates against the platform window origin before reaching
//! the controller.

use super::popups::{open_menu_window, open_notice_window, open_size_dialog_window};
use super::{GuiHost, cursor_style, open_ruler_window};
use crate::app::{Ruler, SizeDialog};
use crate::constants::DEFAULT_FONT_HEIGHT;
use crate::input::{Key, Modifiers as KeyModifiers};
use crate::profile_scope;
use crate::render::canvas::{RulerColors, render_ruler_canvas, ruler_labels};
use crate::render::{FontMetrics, draw_ruler};
use crate::types::Point as ScreenPoint;
use gpui::*;

/// Distance between the pointer and the position tooltip
const TOOLTIP_OFFSET: f32 = 14.0;

pub struct RulerView {
    ruler: Ruler,
    /// Effects collected during the current event
    host: GuiHost,
    focus_handle: FocusHandle,
    cursor: CursorStyle,
    tooltip: String,
    /// Window-local pointer position while the pointer is over the ruler
    hover: Option<Point<Pixels>>,
    /// Size last pushed to the platform window
    applied_size: (i32, i32),
    /// Stacking the platform window was opened with
    stay_on_top: bool,
    /// The platform owns the current drag-move
    platform_move: bool,
}

impl RulerView {
    pub fn new(ruler: Ruler, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        let bounds = ruler.bounds();
        let stay_on_top = ruler.settings().stay_on_top;
        let mut view = Self {
            ruler,
            host: GuiHost::default(),
            focus_handle,
            cursor: CursorStyle::Arrow,
            tooltip: String::new(),
            hover: None,
            applied_size: (bounds.width, bounds.height),
            stay_on_top,
            platform_move: false,
        };

        view.sync_origin(window);
        view.ruler.start(&mut view.host);
        view.apply_effects(window, cx);
        view
    }

    /// Adopt the platform's window position. The window manager has the
    /// last word on placement.
    fn sync_origin(&mut self, window: &Window) {
        let origin = window.bounds().origin;
        let origin = ScreenPoint::new(
            f32::from(origin.x).round() as i32,
            f32::from(origin.y).round() as i32,
        );
        self.ruler.move_to(origin, &mut self.host);
    }

    fn on_pointer_down(&mut self, event: &MouseDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        window.focus(&self.focus_handle);
        self.sync_origin(window);

        let pointer = screen_point(event.position, window);
        self.ruler.handle_pointer_down(pointer, &mut self.host);
        if event.click_count == 2 {
            self.ruler.handle_double_click(&mut self.host);
        }
        self.apply_effects(window, cx);
    }

    fn on_pointer_move(&mut self, event: &MouseMoveEvent, window: &mut Window, cx: &mut Context<Self>) {
        let primary_held = event.pressed_button == Some(MouseButton::Left);
        let pointer = screen_point(event.position, window);
        let origin_before = self.ruler.bounds().origin();

        self.ruler.handle_pointer_move(pointer, primary_held, &mut self.host);

        // gpui cannot place a window, so moves are handed to the platform
        if primary_held && !self.platform_move && self.ruler.bounds().origin() != origin_before {
            tracing::debug!("Handing window move to the platform");
            self.platform_move = true;
            window.start_window_move();
        }

        let viewport = Bounds::new(Point::default(), window.viewport_size());
        self.hover = viewport.contains(&event.position).then_some(event.position);
        self.apply_effects(window, cx);
    }

    fn on_pointer_up(&mut self, _event: &MouseUpEvent, window: &mut Window, cx: &mut Context<Self>) {
        self.ruler.handle_pointer_up(&mut self.host);
        if std::mem::take(&mut self.platform_move) {
            self.sync_origin(window);
        }
        self.apply_effects(window, cx);
    }

    fn on_menu_requested(&mut self, event: &MouseDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        self.sync_origin(window);
        let Some(owner) = window.window_handle().downcast::<RulerView>() else {
            tracing::warn!("Ruler window handle has an unexpected root view");
            return;
        };
        let at = window.bounds().origin + event.position;
        open_menu_window(owner, *self.ruler.settings(), at, cx);
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        let key = Key::from_name(&keystroke.key);
        let modifiers = KeyModifiers {
            control: keystroke.modifiers.control,
            shift: keystroke.modifiers.shift,
        };

        let origin_before = self.ruler.bounds().origin();
        if !self.ruler.handle_key_down(key, modifiers, &mut self.host) {
            return;
        }
        cx.stop_propagation();

        let moved = self.ruler.bounds().origin() != origin_before;
        self.apply_effects(window, cx);
        if moved {
            tracing::debug!(bounds = %self.ruler.bounds(), "Keyboard move, reopening window at new origin");
            self.reopen(window, cx);
        }
    }

    /// A label clicked in the context menu window
    pub(super) fn activate_menu_label(&mut self, label: &str, window: &mut Window, cx: &mut Context<Self>) {
        self.ruler.handle_menu_label(label, &mut self.host);
        self.apply_effects(window, cx);
    }

    /// The size dialog closed; `None` means it was cancelled.
    pub(super) fn finish_size_dialog(
        &mut self,
        dialog: Option<SizeDialog>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match dialog {
            Some(dialog) => self.ruler.finish_size_dialog(&dialog, &mut self.host),
            None => tracing::debug!("Size dialog cancelled"),
        }
        self.apply_effects(window, cx);
    }

    /// Apply everything the controller asked for during the last event.
    fn apply_effects(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let effects = std::mem::take(&mut self.host);

        if let Some(shape) = effects.cursor {
            self.cursor = cursor_style(shape);
        }
        if let Some(text) = effects.tooltip {
            self.tooltip = text;
        }

        let bounds = self.ruler.bounds();
        if (bounds.width, bounds.height) != self.applied_size {
            self.applied_size = (bounds.width, bounds.height);
            window.resize(size(px(bounds.width as f32), px(bounds.height as f32)));
        }

        if let Some(notice) = effects.notice {
            open_notice_window(notice, self.stay_on_top, cx);
        }
        if let Some(dialog) = effects.dialog {
            match window.window_handle().downcast::<RulerView>() {
                Some(owner) => open_size_dialog_window(owner, dialog, cx),
                None => tracing::warn!("Ruler window handle has an unexpected root view"),
            }
        }

        if effects.close {
            tracing::info!("Closing ruler");
            window.remove_window();
            cx.quit();
            return;
        }

        if effects
            .settings
            .is_some_and(|settings| settings.stay_on_top != self.stay_on_top)
        {
            self.reopen(window, cx);
        }

        cx.notify();
    }

    /// Replace this window with a fresh one built from the controller's
    /// current state. Used for anything gpui only applies at creation.
    fn reopen(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let ruler = self.ruler.clone();
        let old = window.window_handle();
        let app: &mut App = cx;
        app.defer(move |cx| match open_ruler_window(ruler, cx) {
            Ok(_) => {
                if let Err(e) = old.update(cx, |_, window, _| window.remove_window()) {
                    tracing::warn!("Old ruler window already gone: {:#}", e);
                }
            }
            Err(e) => tracing::error!("Failed to reopen ruler window: {:#}", e),
        });
    }
}

fn screen_point(position: Point<Pixels>, window: &Window) -> ScreenPoint {
    let screen = window.bounds().origin + position;
    ScreenPoint::new(
        f32::from(screen.x).round() as i32,
        f32::from(screen.y).round() as i32,
    )
}

/// Window-level pointer listeners, so moves and releases outside the
/// hovered area still reach the controller during a drag.
fn pointer_capture(view: Entity<RulerView>) -> impl IntoElement {
    canvas(
        |_bounds, _window, _cx| (),
        move |_bounds, _data, window, _cx| {
            let move_view = view.clone();
            window.on_mouse_event(move |event: &MouseMoveEvent, phase, window, cx| {
                if phase == DispatchPhase::Bubble {
                    move_view.update(cx, |this, cx| this.on_pointer_move(event, window, cx));
                }
            });
            window.on_mouse_event(move |event: &MouseUpEvent, phase, window, cx| {
                if phase == DispatchPhase::Bubble && event.button == MouseButton::Left {
                    view.update(cx, |this, cx| this.on_pointer_up(event, window, cx));
                }
            });
        },
    )
    .absolute()
    .size_full()
}

fn render_tooltip(text: &str, at: Point<Pixels>) -> Div {
    div()
        .absolute()
        .left(at.x + px(TOOLTIP_OFFSET))
        .top(px((f32::from(at.y) - TOOLTIP_OFFSET).max(0.0)))
        .px_1()
        .bg(rgb(0xffffe1))
        .border_1()
        .border_color(black())
        .text_size(px(11.0))
        .text_color(black())
        .child(text.to_string())
}

impl Render for RulerView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        profile_scope!("render_ruler_view");

        let bounds = self.ruler.bounds();
        let drawing = draw_ruler(
            bounds.width,
            bounds.height,
            self.ruler.is_vertical(),
            FontMetrics {
                height: DEFAULT_FONT_HEIGHT,
            },
        );
        let colors = RulerColors::default();
        let labels = ruler_labels(&drawing, colors.ink);
        let tooltip = self.hover.map(|at| render_tooltip(&self.tooltip, at));

        div()
            .id("ruler")
            .track_focus(&self.focus_handle)
            .relative()
            .size_full()
            .overflow_hidden()
            .opacity(self.ruler.settings().opacity as f32)
            .cursor(self.cursor)
            .on_mouse_down(MouseButton::Left, cx.listener(Self::on_pointer_down))
            .on_mouse_down(MouseButton::Right, cx.listener(Self::on_menu_requested))
            .on_hover(cx.listener(|this, hovered: &bool, _window, cx| {
                if !*hovered {
                    this.hover = None;
                    cx.notify();
                }
            }))
            .on_key_down(cx.listener(Self::on_key_down))
            .child(render_ruler_canvas(drawing, colors))
            .child(pointer_capture(cx.entity()))
            .children(labels)
            .children(tooltip)
    }
}
