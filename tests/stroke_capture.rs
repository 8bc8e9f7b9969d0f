use egui::{Color32, Pos2};
use whiteboard::document::Document;
use whiteboard::input::StrokeTracker;
use whiteboard::tool::ToolSettings;

#[test]
fn move_while_idle_emits_nothing() {
    let mut tracker = StrokeTracker::new();
    let settings = ToolSettings::default();

    assert!(tracker.pointer_move(Pos2::new(5.0, 5.0), &settings).is_none());
    assert!(!tracker.is_drawing());
}

#[test]
fn drag_emits_one_segment_per_move() {
    // down (10,10) → move (20,10) → move (20,20) → up
    let mut tracker = StrokeTracker::new();
    let mut document = Document::new();
    let settings = ToolSettings::default();

    tracker.pointer_down(Pos2::new(10.0, 10.0));
    for pos in [Pos2::new(20.0, 10.0), Pos2::new(20.0, 20.0)] {
        if let Some(segment) = tracker.pointer_move(pos, &settings) {
            document.add_segment(segment);
        }
    }
    tracker.pointer_up();

    let segments: Vec<_> = document.segments().collect();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].start, Pos2::new(10.0, 10.0));
    assert_eq!(segments[0].end, Pos2::new(20.0, 10.0));
    assert_eq!(segments[1].start, Pos2::new(20.0, 10.0));
    assert_eq!(segments[1].end, Pos2::new(20.0, 20.0));
    for segment in segments {
        assert_eq!(segment.color, Color32::BLACK);
        assert_eq!(segment.thickness, 4.0);
    }
}

#[test]
fn no_segments_after_pointer_up() {
    let mut tracker = StrokeTracker::new();
    let settings = ToolSettings::default();

    tracker.pointer_down(Pos2::new(1.0, 1.0));
    tracker.pointer_up();
    assert!(tracker.pointer_move(Pos2::new(9.0, 9.0), &settings).is_none());
}

#[test]
fn pointer_up_while_idle_changes_nothing() {
    let mut tracker = StrokeTracker::new();
    let before = (tracker.is_drawing(), tracker.last_point());
    tracker.pointer_up();
    assert_eq!((tracker.is_drawing(), tracker.last_point()), before);
}

#[test]
fn repeated_pointer_down_resets_anchor_without_a_segment() {
    let mut tracker = StrokeTracker::new();
    let settings = ToolSettings::default();

    tracker.pointer_down(Pos2::new(1.0, 1.0));
    tracker.pointer_down(Pos2::new(50.0, 50.0));
    assert!(tracker.is_drawing());
    assert_eq!(tracker.last_point(), Pos2::new(50.0, 50.0));

    // The next move draws from the new anchor, not the first press.
    let segment = tracker.pointer_move(Pos2::new(60.0, 50.0), &settings).unwrap();
    assert_eq!(segment.start, Pos2::new(50.0, 50.0));
    assert_eq!(segment.end, Pos2::new(60.0, 50.0));
}

#[test]
fn style_is_read_at_move_time() {
    let mut tracker = StrokeTracker::new();
    let mut settings = ToolSettings::default();

    tracker.pointer_down(Pos2::new(0.0, 0.0));
    let first = tracker.pointer_move(Pos2::new(5.0, 0.0), &settings).unwrap();

    settings.color = Color32::RED;
    settings.set_thickness_from_input("5").unwrap();
    let second = tracker.pointer_move(Pos2::new(10.0, 0.0), &settings).unwrap();

    assert_eq!(first.color, Color32::BLACK);
    assert_eq!(first.thickness, 4.0);
    assert_eq!(second.color, Color32::RED);
    assert_eq!(second.thickness, 5.0);
}

#[test]
fn anchor_tracks_every_processed_position() {
    let mut tracker = StrokeTracker::new();
    let settings = ToolSettings::default();

    assert_eq!(tracker.last_point(), Pos2::ZERO);
    tracker.pointer_down(Pos2::new(3.0, 4.0));
    assert_eq!(tracker.last_point(), Pos2::new(3.0, 4.0));
    tracker.pointer_move(Pos2::new(8.0, 4.0), &settings);
    assert_eq!(tracker.last_point(), Pos2::new(8.0, 4.0));

    // The anchor survives pointer-up; pasted text lands there.
    tracker.pointer_up();
    assert_eq!(tracker.last_point(), Pos2::new(8.0, 4.0));
}
