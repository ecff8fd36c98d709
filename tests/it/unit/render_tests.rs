//! Unit tests for the ruler drawing routine.

use ruler::render::{DrawCommand, FontMetrics, TextKind, TickTier, draw_horizontal, draw_ruler};
use ruler::types::Point;

const FONT: FontMetrics = FontMetrics { height: 16 };

/// Lines starting on the top edge at `x`
fn top_tick_length(commands: &[DrawCommand], x: i32) -> Option<i32> {
    commands.iter().find_map(|c| match c {
        DrawCommand::Line { from, to } if from.x == x && from.y == 0 => Some(to.y - from.y),
        _ => None,
    })
}

fn labels_at(commands: &[DrawCommand], x: i32) -> Vec<(String, i32)> {
    commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text {
                text,
                origin,
                kind: TextKind::TickLabel,
            } if origin.x == x => Some((text.clone(), origin.y)),
            _ => None,
        })
        .collect()
}

/// One line per command, skipping the minor ticks
fn summarize(commands: &[DrawCommand]) -> String {
    commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Rect {
                origin,
                width,
                height,
            } => Some(format!("rect {},{} {}x{}", origin.x, origin.y, width, height)),
            DrawCommand::Line { from, to } if (to.y - from.y).abs() == TickTier::Minor.length() => None,
            DrawCommand::Line { from, to } => {
                Some(format!("line {},{} -> {},{}", from.x, from.y, to.x, to.y))
            }
            DrawCommand::Text { text, origin, kind } => {
                let kind = match kind {
                    TextKind::Caption => "caption",
                    TextKind::TickLabel => "label",
                };
                Some(format!("{kind} {text:?} at {},{}", origin.x, origin.y))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_short_ruler_command_summary() {
    let commands = draw_horizontal(110, 40, FONT);
    insta::assert_snapshot!(summarize(&commands), @r#"
    rect 0,0 109x39
    caption "110 pixels" at 10,12
    label "0" at 0,15
    label "0" at 0,9
    line 0,0 -> 0,15
    line 0,40 -> 0,25
    line 10,0 -> 10,10
    line 10,40 -> 10,30
    line 20,0 -> 20,10
    line 20,40 -> 20,30
    line 30,0 -> 30,10
    line 30,40 -> 30,30
    line 40,0 -> 40,10
    line 40,40 -> 40,30
    line 50,0 -> 50,10
    line 50,40 -> 50,30
    line 60,0 -> 60,10
    line 60,40 -> 60,30
    line 70,0 -> 70,10
    line 70,40 -> 70,30
    line 80,0 -> 80,10
    line 80,40 -> 80,30
    line 90,0 -> 90,10
    line 90,40 -> 90,30
    label "100" at 100,15
    label "100" at 100,9
    line 100,0 -> 100,15
    line 100,40 -> 100,25
    "#);
}

#[test]
fn test_width_300_tick_tiers() {
    let commands = draw_horizontal(300, 75, FONT);

    for x in [100, 200] {
        assert_eq!(top_tick_length(&commands, x), Some(15));
        let expected = vec![(x.to_string(), 15), (x.to_string(), 75 - 15 - 16)];
        assert_eq!(labels_at(&commands, x), expected);
    }

    assert_eq!(top_tick_length(&commands, 50), Some(10));
    assert!(labels_at(&commands, 50).is_empty());

    assert_eq!(top_tick_length(&commands, 52), Some(5));
    assert_eq!(top_tick_length(&commands, 51), None);
}

#[test]
fn test_ticks_mirrored_on_bottom_edge() {
    let commands = draw_horizontal(300, 75, FONT);
    assert!(commands.contains(&DrawCommand::Line {
        from: Point::new(100, 75),
        to: Point::new(100, 60),
    }));
    assert!(commands.contains(&DrawCommand::Line {
        from: Point::new(10, 75),
        to: Point::new(10, 65),
    }));
}

#[test]
fn test_line_count() {
    // 150 even positions, two segments each
    let lines = draw_horizontal(300, 75, FONT)
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { .. }))
        .count();
    assert_eq!(lines, 300);
}

#[test]
fn test_no_ticks_past_the_end() {
    let commands = draw_horizontal(300, 75, FONT);
    assert_eq!(top_tick_length(&commands, 300), None);
    assert_eq!(top_tick_length(&commands, 298), Some(5));
}

#[test]
fn test_caption_reports_measured_length() {
    let commands = draw_horizontal(123, 75, FONT);
    assert!(commands.contains(&DrawCommand::Text {
        text: "123 pixels".to_string(),
        origin: Point::new(10, 29),
        kind: TextKind::Caption,
    }));
}

#[test]
fn test_vertical_drawing_measures_height() {
    let drawing = draw_ruler(75, 300, true, FONT);
    assert_eq!(drawing.length, 300);
    assert_eq!(drawing.thickness, 75);
    assert!(drawing.transform.is_rotated());

    // The top-edge tick at 100 lands on the right edge, 100px down
    let window: Vec<_> = drawing.window_commands().collect();
    assert!(window.contains(&DrawCommand::Line {
        from: Point::new(74, 100),
        to: Point::new(59, 100),
    }));
}

#[test]
fn test_vertical_border_covers_window() {
    let drawing = draw_ruler(75, 300, true, FONT);
    let border = drawing.window_commands().next();
    assert_eq!(
        border,
        Some(DrawCommand::Rect {
            origin: Point::new(0, 0),
            width: 74,
            height: 299,
        })
    );
}

#[test]
fn test_tiers_have_expected_lengths() {
    assert_eq!(TickTier::Major.length(), 15);
    assert_eq!(TickTier::Medium.length(), 10);
    assert_eq!(TickTier::Minor.length(), 5);
    assert!(TickTier::Major.has_label());
    assert!(!TickTier::Medium.has_label());
}
