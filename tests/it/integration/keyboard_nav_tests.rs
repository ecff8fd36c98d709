//! Keyboard Integration Tests

use crate::helpers::{RecordingHost, TestRulerBuilder, size_of};
use ruler::input::{Key, Modifiers};
use ruler::types::Point;

#[test]
fn test_plain_arrows_move_five() {
    let mut ruler = TestRulerBuilder::new().at(100, 100).build();
    let mut host = RecordingHost::new();

    assert!(ruler.handle_key_down(Key::Right, Modifiers::NONE, &mut host));
    assert!(ruler.handle_key_down(Key::Down, Modifiers::NONE, &mut host));
    assert_eq!(ruler.bounds().origin(), Point::new(105, 105));

    ruler.handle_key_down(Key::Left, Modifiers::NONE, &mut host);
    ruler.handle_key_down(Key::Up, Modifiers::NONE, &mut host);
    ruler.handle_key_down(Key::Up, Modifiers::NONE, &mut host);
    assert_eq!(ruler.bounds().origin(), Point::new(100, 95));
    assert_eq!(host.repaints, 5);
}

#[test]
fn test_control_arrows_move_one() {
    let mut ruler = TestRulerBuilder::new().at(100, 100).build();
    let mut host = RecordingHost::new();

    ruler.handle_key_down(Key::Left, Modifiers::CONTROL, &mut host);
    ruler.handle_key_down(Key::Down, Modifiers::CONTROL, &mut host);
    assert_eq!(ruler.bounds().origin(), Point::new(99, 101));
}

#[test]
fn test_control_shift_arrows_resize_one() {
    let mut ruler = TestRulerBuilder::new().at(100, 100).build();
    let mut host = RecordingHost::new();

    ruler.handle_key_down(Key::Right, Modifiers::CONTROL_SHIFT, &mut host);
    ruler.handle_key_down(Key::Down, Modifiers::CONTROL_SHIFT, &mut host);
    assert_eq!(size_of(&ruler), (401, 76));

    ruler.handle_key_down(Key::Left, Modifiers::CONTROL_SHIFT, &mut host);
    ruler.handle_key_down(Key::Left, Modifiers::CONTROL_SHIFT, &mut host);
    ruler.handle_key_down(Key::Up, Modifiers::CONTROL_SHIFT, &mut host);
    assert_eq!(size_of(&ruler), (399, 75));
    assert_eq!(ruler.bounds().origin(), Point::new(100, 100));
}

#[test]
fn test_keyboard_resize_ignores_lock() {
    let mut ruler = TestRulerBuilder::new().locked().build();
    let mut host = RecordingHost::new();

    ruler.handle_key_down(Key::Right, Modifiers::CONTROL_SHIFT, &mut host);
    assert_eq!(size_of(&ruler), (401, 75));
}

#[test]
fn test_keyboard_resize_keeps_at_least_one_pixel() {
    let mut ruler = TestRulerBuilder::new().with_size(1, 2).build();
    let mut host = RecordingHost::new();

    ruler.handle_key_down(Key::Left, Modifiers::CONTROL_SHIFT, &mut host);
    ruler.handle_key_down(Key::Up, Modifiers::CONTROL_SHIFT, &mut host);
    ruler.handle_key_down(Key::Up, Modifiers::CONTROL_SHIFT, &mut host);
    assert_eq!(size_of(&ruler), (1, 1));
}

#[test]
fn test_moves_saturate_at_screen_limits() {
    let mut ruler = TestRulerBuilder::new().at(i32::MAX - 2, i32::MIN + 2).build();
    let mut host = RecordingHost::new();

    ruler.handle_key_down(Key::Right, Modifiers::NONE, &mut host);
    ruler.handle_key_down(Key::Up, Modifiers::NONE, &mut host);
    assert_eq!(ruler.bounds().origin(), Point::new(i32::MAX, i32::MIN));
}

#[test]
fn test_space_toggles_orientation() {
    let mut ruler = TestRulerBuilder::new().build();
    let mut host = RecordingHost::new();

    assert!(ruler.handle_key_down(Key::from_name("space"), Modifiers::NONE, &mut host));
    assert!(ruler.is_vertical());
    assert_eq!(size_of(&ruler), (75, 400));
}

#[test]
fn test_other_keys_are_not_handled() {
    let mut ruler = TestRulerBuilder::new().build();
    let mut host = RecordingHost::new();
    let before = ruler.bounds();

    assert!(!ruler.handle_key_down(Key::from_name("a"), Modifiers::CONTROL, &mut host));
    assert_eq!(ruler.bounds(), before);
    assert_eq!(host.repaints, 0);
}

#[test]
fn test_keys_work_during_a_press() {
    let mut ruler = TestRulerBuilder::new().at(100, 100).build();
    let mut host = RecordingHost::new();

    ruler.handle_pointer_down(Point::new(300, 130), &mut host);
    ruler.handle_key_down(Key::Right, Modifiers::NONE, &mut host);
    assert_eq!(ruler.bounds().origin(), Point::new(105, 100));
}
