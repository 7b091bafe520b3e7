// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use galatea::model::{
    AnchorRef, AnchorSide, Board, BoardId, Connection, EventId, Lane, LaneId, LinkKind,
    TimelineEvent,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    BoardSmall,
    BoardMedium,
}

impl Case {
    fn shape(self) -> (usize, usize, usize) {
        match self {
            // (lanes, events per lane, links)
            Case::BoardSmall => (2, 3, 2),
            Case::BoardMedium => (8, 12, 40),
        }
    }
}

/// Builds a board with `lanes × events` cards and `links` connections wired
/// between vertically adjacent lanes, cycling through every link kind.
pub fn board(case: Case) -> Board {
    let (lane_count, events_per_lane, link_count) = case.shape();

    let mut board = Board::new(BoardId::new("b:bench").expect("board id"));

    for lane_idx in 0..lane_count {
        let lane_id = LaneId::new(format!("l:{lane_idx:02}")).expect("lane id");
        let mut lane = Lane::new(lane_id, format!("Lane {lane_idx:02}"));
        for event_idx in 0..events_per_lane {
            let event_id =
                EventId::new(format!("ev:{lane_idx:02}-{event_idx:02}")).expect("event id");
            lane.events_mut().push(TimelineEvent::new_with(
                event_id,
                format!("Event {lane_idx:02}/{event_idx:02}"),
                format!("{:02}:00", event_idx % 24),
                "bench fixture",
                "camera",
            ));
        }
        board.push_lane(lane);
    }

    let kinds = LinkKind::ALL;
    for link_idx in 0..link_count {
        let from_lane = link_idx % lane_count.saturating_sub(1).max(1);
        let to_lane = from_lane + 1;
        let from_event = link_idx % events_per_lane;
        let to_event = (link_idx + 1) % events_per_lane;

        let connection_id = board.mint_connection_id();
        board.links_mut().add(Connection::new(
            connection_id,
            AnchorRef::new(
                EventId::new(format!("ev:{from_lane:02}-{from_event:02}")).expect("event id"),
                AnchorSide::Bottom,
            ),
            AnchorRef::new(
                EventId::new(format!("ev:{to_lane:02}-{to_event:02}")).expect("event id"),
                AnchorSide::Top,
            ),
            LaneId::new(format!("l:{from_lane:02}")).expect("lane id"),
            LaneId::new(format!("l:{to_lane:02}")).expect("lane id"),
            kinds[link_idx % kinds.len()],
        ));
    }

    board
}
