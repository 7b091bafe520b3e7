// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::layout::Point;
use crate::model::{AnchorRef, AnchorSide, EventId, LaneId, LinkKind};

use super::{GesturePhase, LinkGesture, SelectOutcome};

fn anchor(event: &str, side: AnchorSide) -> AnchorRef {
    AnchorRef::new(EventId::new(event).expect("event id"), side)
}

fn lid(value: &str) -> LaneId {
    LaneId::new(value).expect("lane id")
}

#[test]
fn full_lifecycle_commits_a_draft() {
    let mut gesture = LinkGesture::default();
    assert_eq!(gesture.phase(), GesturePhase::Idle);

    assert!(gesture.begin_pending(
        anchor("ev:a", AnchorSide::Bottom),
        lid("l:camera"),
        LinkKind::ArrowDown,
    ));
    assert_eq!(gesture.phase(), GesturePhase::Pending);
    assert_eq!(gesture.kind(), Some(LinkKind::ArrowDown));
    assert_eq!(gesture.cursor(), None);

    assert!(gesture.track_cursor(Point::new(10, 9)));
    assert_eq!(gesture.phase(), GesturePhase::Armed);
    assert_eq!(gesture.cursor(), Some(Point::new(10, 9)));

    let outcome = gesture.select_target(anchor("ev:c", AnchorSide::Top), lid("l:audio"));
    let SelectOutcome::Committed(draft) = outcome else {
        panic!("expected commit, got {outcome:?}");
    };
    assert_eq!(draft.source, anchor("ev:a", AnchorSide::Bottom));
    assert_eq!(draft.target, anchor("ev:c", AnchorSide::Top));
    assert_eq!(draft.source_lane, lid("l:camera"));
    assert_eq!(draft.target_lane, lid("l:audio"));
    assert_eq!(draft.kind, LinkKind::ArrowDown);

    assert_eq!(gesture.phase(), GesturePhase::Idle);
}

#[test]
fn cursor_samples_follow_latest_wins() {
    let mut gesture = LinkGesture::default();
    gesture.begin_pending(anchor("ev:a", AnchorSide::Right), lid("l:camera"), LinkKind::Plain);

    assert!(gesture.track_cursor(Point::new(5, 5)));
    assert!(gesture.track_cursor(Point::new(6, 5)));
    assert!(!gesture.track_cursor(Point::new(6, 5)), "unchanged sample needs no redraw");
    assert_eq!(gesture.cursor(), Some(Point::new(6, 5)));
}

#[test]
fn cursor_samples_while_idle_are_ignored() {
    let mut gesture = LinkGesture::default();
    assert!(!gesture.track_cursor(Point::new(3, 3)));
    assert_eq!(gesture.phase(), GesturePhase::Idle);
}

#[test]
fn self_link_is_rejected_and_stays_armed() {
    let mut gesture = LinkGesture::default();
    gesture.begin_pending(anchor("ev:a", AnchorSide::Right), lid("l:camera"), LinkKind::Plain);
    gesture.track_cursor(Point::new(4, 4));

    let outcome = gesture.select_target(anchor("ev:a", AnchorSide::Left), lid("l:camera"));
    assert_eq!(outcome, SelectOutcome::SelfLink);
    assert_eq!(gesture.phase(), GesturePhase::Armed, "rejection must not reset the gesture");

    // The gesture is still completable afterwards.
    let outcome = gesture.select_target(anchor("ev:b", AnchorSide::Left), lid("l:camera"));
    assert!(matches!(outcome, SelectOutcome::Committed(_)));
}

#[test]
fn select_target_without_armed_gesture_is_a_noop() {
    let mut gesture = LinkGesture::default();
    let outcome = gesture.select_target(anchor("ev:b", AnchorSide::Top), lid("l:camera"));
    assert_eq!(outcome, SelectOutcome::NotArmed);
    assert_eq!(gesture.phase(), GesturePhase::Idle);

    // Pending (not yet armed) behaves the same: anchors are offered but a
    // click cannot commit before the first pointer sample.
    gesture.begin_pending(anchor("ev:a", AnchorSide::Top), lid("l:camera"), LinkKind::Dotted);
    let outcome = gesture.select_target(anchor("ev:b", AnchorSide::Top), lid("l:camera"));
    assert_eq!(outcome, SelectOutcome::NotArmed);
    assert_eq!(gesture.phase(), GesturePhase::Pending);
}

#[test]
fn begin_pending_discards_the_previous_gesture() {
    let mut gesture = LinkGesture::default();
    gesture.begin_pending(anchor("ev:a", AnchorSide::Bottom), lid("l:camera"), LinkKind::Plain);
    gesture.track_cursor(Point::new(9, 9));
    assert_eq!(gesture.phase(), GesturePhase::Armed);

    gesture.begin_pending(anchor("ev:b", AnchorSide::Top), lid("l:camera"), LinkKind::Dotted);
    assert_eq!(gesture.phase(), GesturePhase::Pending);
    let (source, _) = gesture.source().expect("source");
    assert_eq!(source.event_id().as_str(), "ev:b");
    assert_eq!(gesture.kind(), Some(LinkKind::Dotted));
    assert_eq!(gesture.cursor(), None, "stale cursor must not leak into the new gesture");
}

#[test]
fn cancel_returns_to_idle_from_any_live_phase() {
    let mut gesture = LinkGesture::default();
    assert!(!gesture.cancel(), "cancel while idle is a no-op");

    gesture.begin_pending(anchor("ev:a", AnchorSide::Top), lid("l:camera"), LinkKind::Plain);
    assert!(gesture.cancel());
    assert_eq!(gesture.phase(), GesturePhase::Idle);

    gesture.begin_pending(anchor("ev:a", AnchorSide::Top), lid("l:camera"), LinkKind::Plain);
    gesture.track_cursor(Point::new(1, 1));
    assert!(gesture.cancel());
    assert_eq!(gesture.phase(), GesturePhase::Idle);
}
