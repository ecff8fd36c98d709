//! Context Menu Integration Tests

use crate::helpers::{RecordingHost, TestRulerBuilder, drag_to, press, size_of};
use ruler::app::MenuCommand;
use ruler::constants::{MAX_DIMENSION, UNKNOWN_MENU_ITEM_NOTICE};
use ruler::input::{Key, Modifiers};

#[test]
fn test_stay_on_top_toggles() {
    let mut ruler = TestRulerBuilder::new().build();
    let mut host = RecordingHost::new();

    ruler.handle_menu_label("Stay On Top", &mut host);
    assert!(ruler.settings().stay_on_top);
    ruler.handle_menu_label("Stay On Top", &mut host);
    assert!(!ruler.settings().stay_on_top);

    let reported: Vec<bool> = host.settings.iter().map(|s| s.stay_on_top).collect();
    assert_eq!(reported, vec![true, false]);
}

#[test]
fn test_opacity_item_sets_opacity() {
    let mut ruler = TestRulerBuilder::new().build();
    let mut host = RecordingHost::new();

    ruler.handle_menu_label("50%", &mut host);
    assert!((ruler.settings().opacity - 0.5).abs() < 1e-9);
    assert_eq!(ruler.settings().opacity_percent(), Some(50));
    assert_eq!(host.settings.len(), 1);
}

#[test]
fn test_lock_menu_blocks_pointer_resize() {
    let mut ruler = TestRulerBuilder::new().with_size(100, 75).build();
    let mut host = RecordingHost::new();

    ruler.handle_menu_command(MenuCommand::LockResizing, &mut host);
    assert!(ruler.is_locked());

    press(&mut ruler, &mut host, 97, 30);
    drag_to(&mut ruler, &mut host, 97, 30);
    drag_to(&mut ruler, &mut host, 147, 30);
    assert_eq!(size_of(&ruler), (100, 75));

    ruler.handle_menu_command(MenuCommand::LockResizing, &mut host);
    drag_to(&mut ruler, &mut host, 147, 30);
    assert_eq!(size_of(&ruler), (150, 75));
}

#[test]
fn test_set_size_dialog_round_trip() {
    let mut ruler = TestRulerBuilder::new().stay_on_top().build();
    let mut host = RecordingHost::new();

    ruler.handle_menu_label("Set size...", &mut host);
    assert_eq!(host.dialogs.len(), 1);

    let mut dialog = host.dialogs.remove(0);
    assert_eq!(dialog.original_size(), (400, 75));
    assert!(dialog.stay_on_top);

    dialog.width_text = "640".to_string();
    dialog.height_text = "oops".to_string();
    ruler.finish_size_dialog(&dialog, &mut host);
    assert_eq!(size_of(&ruler), (640, 75));
    assert_eq!(host.repaints, 1);
}

#[test]
fn test_set_size_ignores_pointer_clamps() {
    let mut ruler = TestRulerBuilder::new().build();
    let mut host = RecordingHost::new();

    ruler.handle_menu_command(MenuCommand::SetSize, &mut host);
    let mut dialog = host.dialogs.remove(0);
    dialog.width_text = "20".to_string();
    dialog.height_text = "10".to_string();
    ruler.finish_size_dialog(&dialog, &mut host);
    assert_eq!(size_of(&ruler), (20, 10));
}

#[test]
fn test_oversized_dialog_value_then_keyboard_grow() {
    let mut ruler = TestRulerBuilder::new().build();
    let mut host = RecordingHost::new();

    ruler.handle_menu_command(MenuCommand::SetSize, &mut host);
    let mut dialog = host.dialogs.remove(0);
    dialog.width_text = i32::MAX.to_string();
    ruler.finish_size_dialog(&dialog, &mut host);
    assert_eq!(size_of(&ruler), (MAX_DIMENSION, 75));

    // Already at the limit: growing is a no-op rather than a wrap to 1px
    assert!(ruler.handle_key_down(Key::Right, Modifiers::CONTROL_SHIFT, &mut host));
    assert_eq!(size_of(&ruler), (MAX_DIMENSION, 75));

    ruler.handle_key_down(Key::Left, Modifiers::CONTROL_SHIFT, &mut host);
    assert_eq!(size_of(&ruler), (MAX_DIMENSION - 1, 75));
}

#[test]
fn test_duplicate_launches_with_current_state() {
    let mut ruler = TestRulerBuilder::new()
        .with_size(250, 60)
        .vertical()
        .with_opacity(0.4)
        .build();
    let mut host = RecordingHost::new();

    ruler.handle_menu_label("Duplicate", &mut host);
    assert_eq!(host.duplicates.len(), 1);
    insta::assert_snapshot!(host.duplicates[0].to_string(), @"250 60 True 0.4 False False");
    assert!(host.notices.is_empty());
}

#[test]
fn test_duplicate_failure_shows_notice() {
    let mut ruler = TestRulerBuilder::new().build();
    let mut host = RecordingHost::failing_duplicates("no such file");

    ruler.handle_menu_command(MenuCommand::Duplicate, &mut host);
    assert_eq!(
        host.notices,
        vec![("Duplicate".to_string(), "no such file".to_string())]
    );
}

#[test]
fn test_about_and_exit() {
    let mut ruler = TestRulerBuilder::new().build();
    let mut host = RecordingHost::new();

    ruler.handle_menu_label("About...", &mut host);
    assert_eq!(host.notices.len(), 1);
    assert_eq!(host.notices[0].0, "About Ruler");
    assert!(host.notices[0].1.starts_with("Ruler v"));

    assert!(!host.closed);
    ruler.handle_menu_label("Exit", &mut host);
    assert!(host.closed);
}

#[test]
fn test_unknown_label_shows_generic_notice() {
    let mut ruler = TestRulerBuilder::new().build();
    let mut host = RecordingHost::new();
    let before = ruler.bounds();

    ruler.handle_menu_label("Frobnicate", &mut host);
    ruler.handle_menu_label("15%", &mut host);

    assert_eq!(host.notices.len(), 2);
    assert!(host.notices.iter().all(|(_, message)| message == UNKNOWN_MENU_ITEM_NOTICE));
    assert_eq!(ruler.bounds(), before);
    assert!(host.settings.is_empty());
}
