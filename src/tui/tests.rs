// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::gesture::GesturePhase;
use crate::model::{AnchorSide, EventId, LaneId};

use super::{demo_board, App, Mode};

fn eid(value: &str) -> EventId {
    EventId::new(value).expect("event id")
}

fn lid(value: &str) -> LaneId {
    LaneId::new(value).expect("lane id")
}

/// App against the demo board with a fixed viewport, as if one frame had
/// been drawn.
fn demo_app() -> App {
    let mut app = App::new(demo_board()).expect("app");
    app.board_inner = Rect::new(0, 0, 200, 40);
    app.refresh_surface();
    app
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn click(app: &mut App, column: u16, row: u16) {
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });
}

fn move_pointer(app: &mut App, column: u16, row: u16) {
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });
}

// Demo-board surface geometry with a 200-cell viewport and no scrolling:
// camera lane offset 2, audio 12, production 22; first card of each lane at
// x=2, so ev:wide bottom-mid = (15, 9), ev:boom top-mid = (15, 14).

#[test]
fn mouse_linking_flow_commits_a_connection() {
    let mut app = demo_app();
    let before = app.board.links().len();

    // Click the left anchor of ev:close (second camera card at x=30).
    click(&mut app, 30, 7);
    assert!(matches!(app.mode, Mode::KindPicker { .. }));

    // Pick "dotted-line" (second entry) and confirm.
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.gesture.phase(), GesturePhase::Pending);

    // First pointer sample arms the gesture and moves the preview.
    move_pointer(&mut app, 20, 10);
    assert_eq!(app.gesture.phase(), GesturePhase::Armed);
    assert!(
        app.segments.iter().any(|segment| segment.connection_id.is_none()),
        "armed gesture projects a preview segment"
    );

    // Click the top anchor of ev:boom on the audio lane.
    click(&mut app, 15, 14);
    assert_eq!(app.gesture.phase(), GesturePhase::Idle);
    assert_eq!(app.board.links().len(), before + 1);

    let entity_close = eid("ev:close");
    let added = app
        .board
        .links()
        .list_by_entity(&entity_close)
        .next()
        .expect("committed connection");
    assert_eq!(added.source().side(), AnchorSide::Left);
    assert_eq!(added.target().event_id(), &eid("ev:boom"));
    assert_eq!(added.source_lane(), &lid("l:camera"));
    assert_eq!(added.target_lane(), &lid("l:audio"));
}

#[test]
fn selecting_the_source_card_keeps_the_gesture_armed() {
    let mut app = demo_app();
    let before = app.board.links().len();

    // Begin on ev:wide's bottom anchor, arm, then click ev:wide's top anchor.
    click(&mut app, 15, 9);
    press(&mut app, KeyCode::Enter);
    move_pointer(&mut app, 16, 10);
    click(&mut app, 15, 4);

    assert_eq!(app.gesture.phase(), GesturePhase::Armed, "self-link must not reset the gesture");
    assert_eq!(app.board.links().len(), before, "self-link must not commit");
}

#[test]
fn click_outside_cancels_a_live_gesture() {
    let mut app = demo_app();

    click(&mut app, 15, 9);
    press(&mut app, KeyCode::Enter);
    move_pointer(&mut app, 40, 10);
    assert_eq!(app.gesture.phase(), GesturePhase::Armed);

    click(&mut app, 120, 35);
    assert_eq!(app.gesture.phase(), GesturePhase::Idle);
    assert_eq!(app.board.links().len(), demo_board().links().len());
}

#[test]
fn starting_a_new_gesture_discards_the_old_one() {
    let mut app = demo_app();

    click(&mut app, 15, 9);
    press(&mut app, KeyCode::Enter);
    move_pointer(&mut app, 40, 10);
    assert_eq!(app.gesture.phase(), GesturePhase::Armed);

    // 'c' starts a fresh gesture from the focused card.
    press(&mut app, KeyCode::Char('c'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.gesture.phase(), GesturePhase::Pending);
    assert_eq!(app.gesture.cursor(), None, "stale cursor must be gone");
    assert_eq!(app.board.links().len(), demo_board().links().len(), "no residual connection");
}

#[test]
fn clicking_a_drawn_link_opens_confirm_then_delete() {
    let mut app = demo_app();
    assert_eq!(app.board.links().len(), 2);

    // A cell on the vertical route between ev:wide.bottom and ev:boom.top.
    click(&mut app, 15, 11);
    let Mode::ConfirmDeleteLink { ref connection_id } = app.mode else {
        panic!("expected confirm dialog, got {:?}", app.mode);
    };
    let connection_id = connection_id.clone();

    press(&mut app, KeyCode::Char('y'));
    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.board.links().len(), 1);
    assert!(!app.board.links().contains(&connection_id));
}

#[test]
fn declining_the_confirm_dialog_keeps_the_link() {
    let mut app = demo_app();

    click(&mut app, 15, 11);
    assert!(matches!(app.mode, Mode::ConfirmDeleteLink { .. }));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.board.links().len(), 2);
}

#[test]
fn keyboard_linking_flow_commits_to_the_focused_card() {
    let mut app = demo_app();
    let before = app.board.links().len();

    press(&mut app, KeyCode::Char('c'));
    assert!(matches!(app.mode, Mode::KindPicker { .. }));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.gesture.phase(), GesturePhase::Pending);

    // Move focus to the audio lane and complete on its first card.
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.gesture.phase(), GesturePhase::Idle);
    assert_eq!(app.board.links().len(), before + 1);
    let added = app
        .board
        .links()
        .list_all()
        .find(|connection| connection.source().side() == AnchorSide::Right)
        .expect("keyboard-committed link");
    assert_eq!(added.source().event_id(), &eid("ev:wide"));
    assert_eq!(added.target().event_id(), &eid("ev:boom"));
    assert_eq!(added.target().side(), AnchorSide::Left);
}

#[test]
fn adding_a_lane_requires_a_name() {
    let mut app = demo_app();

    press(&mut app, KeyCode::Char('a'));
    assert!(matches!(app.mode, Mode::LaneNameInput { .. }));

    press(&mut app, KeyCode::Enter);
    assert!(matches!(app.mode, Mode::LaneNameInput { .. }), "empty name keeps the dialog open");
    let toast = app.toast.as_ref().expect("validation toast");
    assert_eq!(toast.message, "Please enter a lane name");

    type_text(&mut app, "VFX");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.board.lane_count(), 4);
    assert!(app.board.lanes().any(|lane| lane.name() == "VFX"));
}

#[test]
fn adding_an_event_uses_the_default_kind() {
    let mut app = demo_app();
    let camera = app.board.lane(&lid("l:camera")).expect("camera lane");
    let before = camera.events().len();

    press(&mut app, KeyCode::Char('e'));

    let camera = app.board.lane(&lid("l:camera")).expect("camera lane");
    assert_eq!(camera.events().len(), before + 1);
    let added = camera.events().last().expect("added event");
    assert_eq!(added.kind(), "camera");
    assert_eq!(added.title(), "");
}

#[test]
fn event_editor_saves_field_changes() {
    let mut app = demo_app();

    press(&mut app, KeyCode::Enter);
    assert!(matches!(app.mode, Mode::EventEdit { .. }));

    // Append to the title, then retime the event via the second field.
    type_text(&mut app, " A");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "15");
    press(&mut app, KeyCode::Enter);

    let (_, event) = app.board.find_event(&eid("ev:wide")).expect("event");
    assert_eq!(event.title(), "Wide shot A");
    assert_eq!(event.time(), "09:15");
}

#[test]
fn deleting_an_event_cascades_its_links() {
    let mut app = demo_app();
    assert_eq!(app.board.links().len(), 2);

    // ev:boom (audio lane, first card) touches both demo links.
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('d'));

    assert!(app.board.find_event(&eid("ev:boom")).is_none());
    assert!(app.board.links().is_empty());
    let toast = app.toast.as_ref().expect("toast");
    assert!(toast.message.contains("2 links removed"), "toast was {:?}", toast.message);
}

#[test]
fn deleting_a_lane_cascades_events_and_links() {
    let mut app = demo_app();

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('X'));

    assert!(app.board.lane(&lid("l:audio")).is_none());
    assert_eq!(app.board.lane_count(), 2);
    assert!(app.board.links().is_empty(), "both demo links touched the audio lane");
}

#[test]
fn escape_cancels_gesture_without_store_mutation() {
    let mut app = demo_app();

    click(&mut app, 15, 9);
    press(&mut app, KeyCode::Enter);
    move_pointer(&mut app, 40, 12);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.gesture.phase(), GesturePhase::Idle);
    assert_eq!(app.board.links().len(), 2);
    assert!(
        app.segments.iter().all(|segment| segment.connection_id.is_some()),
        "no preview segment remains after cancel"
    );
}

#[test]
fn quit_key_sets_should_quit() {
    let mut app = demo_app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}
