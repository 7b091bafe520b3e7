// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use crate::store::ConnectionStore;

use super::event::TimelineEvent;
use super::ids::{BoardId, ConnectionId, EventId, LaneId};
use super::lane::Lane;

/// The top-level container one interactive surface runs against.
///
/// A board owns its lanes and its connection store; gesture state lives with
/// the surface (the TUI app) instead so multiple boards can coexist without
/// shared mutable state. The revision counter backs optimistic concurrency in
/// `ops::apply_ops`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    board_id: BoardId,
    lanes: BTreeMap<LaneId, Lane>,
    lane_order: Vec<LaneId>,
    links: ConnectionStore,
    rev: u64,
    mint_seq: u64,
}

impl Board {
    pub fn new(board_id: BoardId) -> Self {
        Self {
            board_id,
            lanes: BTreeMap::new(),
            lane_order: Vec::new(),
            links: ConnectionStore::default(),
            rev: 0,
            mint_seq: 0,
        }
    }

    pub fn board_id(&self) -> &BoardId {
        &self.board_id
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub(crate) fn bump_rev(&mut self) -> u64 {
        self.rev += 1;
        self.rev
    }

    /// Lane ids in display order (top to bottom). This ordering drives the
    /// scope→vertical-offset table used for cross-lane anchor resolution.
    pub fn lane_order(&self) -> &[LaneId] {
        &self.lane_order
    }

    /// Index of a lane in display order.
    pub fn lane_position(&self, lane_id: &LaneId) -> Option<usize> {
        self.lane_order.iter().position(|id| id == lane_id)
    }

    pub fn lanes(&self) -> impl Iterator<Item = &Lane> {
        self.lane_order.iter().filter_map(|id| self.lanes.get(id))
    }

    pub fn lane(&self, lane_id: &LaneId) -> Option<&Lane> {
        self.lanes.get(lane_id)
    }

    pub fn lane_mut(&mut self, lane_id: &LaneId) -> Option<&mut Lane> {
        self.lanes.get_mut(lane_id)
    }

    pub fn lane_count(&self) -> usize {
        self.lane_order.len()
    }

    /// Appends a lane at the bottom of the board. A lane with the same id
    /// replaces nothing; the caller (ops) checks for duplicates first.
    pub fn push_lane(&mut self, lane: Lane) {
        let lane_id = lane.lane_id().clone();
        self.lanes.insert(lane_id.clone(), lane);
        self.lane_order.push(lane_id);
    }

    pub fn remove_lane(&mut self, lane_id: &LaneId) -> Option<Lane> {
        let lane = self.lanes.remove(lane_id)?;
        self.lane_order.retain(|id| id != lane_id);
        Some(lane)
    }

    pub fn links(&self) -> &ConnectionStore {
        &self.links
    }

    pub fn links_mut(&mut self) -> &mut ConnectionStore {
        &mut self.links
    }

    /// Finds an event anywhere on the board along with its owning lane.
    pub fn find_event(&self, event_id: &EventId) -> Option<(&LaneId, &TimelineEvent)> {
        self.lanes.values().find_map(|lane| {
            lane.event(event_id).map(|event| (lane.lane_id(), event))
        })
    }

    pub fn lane_of_event(&self, event_id: &EventId) -> Option<&LaneId> {
        self.find_event(event_id).map(|(lane_id, _)| lane_id)
    }

    pub fn contains_event(&self, event_id: &EventId) -> bool {
        self.find_event(event_id).is_some()
    }

    /// Mints a fresh lane id (`l:0001` style), unique within this board.
    pub fn mint_lane_id(&mut self) -> LaneId {
        self.mint_id(
            |seq| LaneId::new(format!("l:{seq:04}")).expect("minted lane id"),
            |board, id| board.lanes.contains_key(id),
        )
    }

    /// Mints a fresh event id, unique across all lanes.
    pub fn mint_event_id(&mut self) -> EventId {
        self.mint_id(
            |seq| EventId::new(format!("ev:{seq:04}")).expect("minted event id"),
            |board, id| board.contains_event(id),
        )
    }

    /// Mints a fresh connection id, unique within the board's store.
    pub fn mint_connection_id(&mut self) -> ConnectionId {
        self.mint_id(
            |seq| ConnectionId::new(format!("c:{seq:04}")).expect("minted connection id"),
            |board, id| board.links.contains(id),
        )
    }

    fn mint_id<T>(
        &mut self,
        make: impl Fn(u64) -> T,
        taken: impl Fn(&Self, &T) -> bool,
    ) -> T {
        loop {
            self.mint_seq += 1;
            let candidate = make(self.mint_seq);
            if !taken(self, &candidate) {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::model::{BoardId, EventId, Lane, LaneId, TimelineEvent};

    fn board_with_lane() -> Board {
        let mut board = Board::new(BoardId::new("b:test").expect("board id"));
        let mut lane = Lane::new(LaneId::new("l:cam").expect("lane id"), "Camera");
        lane.events_mut()
            .push(TimelineEvent::new(EventId::new("ev:a").expect("event id")));
        board.push_lane(lane);
        board
    }

    #[test]
    fn find_event_reports_owning_lane() {
        let board = board_with_lane();
        let (lane_id, event) =
            board.find_event(&EventId::new("ev:a").expect("event id")).expect("found");
        assert_eq!(lane_id.as_str(), "l:cam");
        assert_eq!(event.event_id().as_str(), "ev:a");
    }

    #[test]
    fn minted_ids_skip_taken_values() {
        let mut board = board_with_lane();
        let first = board.mint_event_id();
        let second = board.mint_event_id();
        assert_ne!(first, second);
        assert!(!board.contains_event(&first));
    }

    #[test]
    fn lane_order_tracks_insertion_and_removal() {
        let mut board = board_with_lane();
        board.push_lane(Lane::new(LaneId::new("l:audio").expect("lane id"), "Audio"));
        assert_eq!(board.lane_position(&LaneId::new("l:audio").expect("lane id")), Some(1));

        board.remove_lane(&LaneId::new("l:cam").expect("lane id"));
        assert_eq!(board.lane_position(&LaneId::new("l:audio").expect("lane id")), Some(0));
    }
}
