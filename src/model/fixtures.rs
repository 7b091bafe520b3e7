// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::board::Board;
use super::event::TimelineEvent;
use super::ids::{BoardId, ConnectionId, EventId, LaneId};
use super::lane::Lane;
use super::link::{AnchorRef, AnchorSide, Connection, LinkKind};

fn lid(value: &str) -> LaneId {
    LaneId::new(value).expect("lane id")
}

fn eid(value: &str) -> EventId {
    EventId::new(value).expect("event id")
}

fn cid(value: &str) -> ConnectionId {
    ConnectionId::new(value).expect("connection id")
}

/// Two lanes, three events, no links. The baseline surface for gesture and
/// ops tests.
pub(crate) fn board_two_lanes() -> Board {
    let mut board = Board::new(BoardId::new("b:fixture").expect("board id"));

    let mut camera = Lane::new(lid("l:camera"), "Camera");
    camera.events_mut().push(TimelineEvent::new_with(
        eid("ev:a"),
        "Wide shot",
        "09:00",
        "establishing",
        "camera",
    ));
    camera.events_mut().push(TimelineEvent::new_with(
        eid("ev:b"),
        "Close-up",
        "09:20",
        "reaction",
        "camera",
    ));

    let mut audio = Lane::new(lid("l:audio"), "Audio");
    audio.events_mut().push(TimelineEvent::new_with(
        eid("ev:c"),
        "Boom check",
        "09:05",
        "levels",
        "audio",
    ));

    board.push_lane(camera);
    board.push_lane(audio);
    board
}

/// The two-lane board plus a committed cross-lane link `ev:a.bottom -> ev:c.top`.
pub(crate) fn board_with_cross_link() -> Board {
    let mut board = board_two_lanes();
    board.links_mut().add(Connection::new(
        cid("c:0001"),
        AnchorRef::new(eid("ev:a"), AnchorSide::Bottom),
        AnchorRef::new(eid("ev:c"), AnchorSide::Top),
        lid("l:camera"),
        lid("l:audio"),
        LinkKind::ArrowDown,
    ));
    board
}
