// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Card placement: the positioning primitive the resolver works against.
//!
//! Cards flow left-to-right along their lane in event order; lanes stack
//! vertically under the hour ruler. All of this is recomputed per draw from
//! board state, per-lane scroll, and the viewport width.

use std::collections::BTreeMap;

use crate::model::{AnchorRef, AnchorSide, Board, EventId, Lane, LaneId};

use super::{anchor_point, CardLookup, LaneOffsets, Point, Rect, ResolveError};

pub const CARD_WIDTH: i32 = 26;
pub const CARD_HEIGHT: i32 = 6;
pub const CARD_GAP: i32 = 2;
pub const LANE_LEFT_PAD: i32 = 2;
pub const LANE_HEADER_ROWS: i32 = 2;
/// Fixed lane band height; lane N starts at `RULER_HEIGHT + N * LANE_HEIGHT`.
pub const LANE_HEIGHT: i32 = 10;
pub const RULER_HEIGHT: i32 = 2;
pub const RULER_HOURS: i32 = 24;
pub const HOUR_MARK_STEP: i32 = 6;

/// Lane-local card rectangles for the events currently mounted in one lane.
///
/// A card scrolled fully outside the lane viewport is unmounted: it has no
/// rectangle and its anchors resolve to [`ResolveError::CardUnmounted`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardGrid {
    rects: BTreeMap<EventId, Rect>,
}

impl CardGrid {
    pub fn for_lane(lane: &Lane, scroll_x: i32, viewport_width: i32) -> Self {
        let mut rects = BTreeMap::new();
        for (idx, event) in lane.events().iter().enumerate() {
            let x = LANE_LEFT_PAD + idx as i32 * (CARD_WIDTH + CARD_GAP) - scroll_x;
            if x + CARD_WIDTH <= 0 || x >= viewport_width {
                continue;
            }
            rects.insert(
                event.event_id().clone(),
                Rect::new(x, LANE_HEADER_ROWS, CARD_WIDTH, CARD_HEIGHT),
            );
        }
        Self { rects }
    }

    pub fn mounted(&self) -> impl Iterator<Item = (&EventId, &Rect)> {
        self.rects.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

impl CardLookup for CardGrid {
    fn card_rect(&self, event_id: &EventId) -> Option<Rect> {
        self.rects.get(event_id).copied()
    }
}

/// The whole stacked surface: one grid per lane plus the index-ordered lane
/// offsets. Rebuilt on every draw trigger; holds no state between frames.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardLayout {
    grids: BTreeMap<LaneId, CardGrid>,
    offsets: BTreeMap<LaneId, i32>,
}

impl BoardLayout {
    pub fn compute(board: &Board, scrolls: &BTreeMap<LaneId, i32>, viewport_width: i32) -> Self {
        let mut grids = BTreeMap::new();
        let mut offsets = BTreeMap::new();
        for (position, lane) in board.lanes().enumerate() {
            let scroll_x = scrolls.get(lane.lane_id()).copied().unwrap_or(0);
            grids.insert(lane.lane_id().clone(), CardGrid::for_lane(lane, scroll_x, viewport_width));
            offsets.insert(lane.lane_id().clone(), RULER_HEIGHT + position as i32 * LANE_HEIGHT);
        }
        Self { grids, offsets }
    }

    /// Total surface height for a lane count, ruler included.
    pub fn surface_height(lane_count: usize) -> i32 {
        RULER_HEIGHT + lane_count as i32 * LANE_HEIGHT
    }

    pub fn resolve(&self, anchor: &AnchorRef, scope: &LaneId) -> Result<Point, ResolveError> {
        super::resolve_anchor(anchor, scope, self, self)
    }

    /// A mounted card's rectangle in surface coordinates.
    pub fn surface_card_rect(&self, lane_id: &LaneId, event_id: &EventId) -> Option<Rect> {
        let offset = self.offsets.get(lane_id)?;
        let grid = self.grids.get(lane_id)?;
        Some(grid.card_rect(event_id)?.translated(0, *offset))
    }

    /// Mounted cards in surface coordinates, lane by lane.
    pub fn surface_cards(&self) -> impl Iterator<Item = (&LaneId, &EventId, Rect)> {
        self.grids.iter().flat_map(move |(lane_id, grid)| {
            let offset = self.offsets.get(lane_id).copied().unwrap_or(0);
            grid.mounted().map(move |(event_id, rect)| {
                (lane_id, event_id, rect.translated(0, offset))
            })
        })
    }

    /// The anchor whose resolved cell is exactly `p`, if any.
    ///
    /// Anchors are single border cells, so exact equality is the hit test the
    /// pointer flow needs.
    pub fn anchor_at(&self, p: Point) -> Option<(AnchorRef, LaneId)> {
        for (lane_id, event_id, rect) in self.surface_cards() {
            for side in AnchorSide::ALL {
                if anchor_point(rect, side) == p {
                    return Some((AnchorRef::new(event_id.clone(), side), lane_id.clone()));
                }
            }
        }
        None
    }
}

impl CardLookup for BoardLayout {
    fn card_rect(&self, event_id: &EventId) -> Option<Rect> {
        self.grids.values().find_map(|grid| grid.card_rect(event_id))
    }
}

impl LaneOffsets for BoardLayout {
    fn lane_offset(&self, lane_id: &LaneId) -> Option<i32> {
        self.offsets.get(lane_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::model::fixtures;
    use crate::model::{AnchorRef, AnchorSide, EventId, LaneId};

    use super::{
        BoardLayout, CardGrid, CardLookup, Point, CARD_GAP, CARD_WIDTH, LANE_HEADER_ROWS,
        LANE_HEIGHT, LANE_LEFT_PAD, RULER_HEIGHT,
    };

    fn eid(value: &str) -> EventId {
        EventId::new(value).expect("event id")
    }

    fn lid(value: &str) -> LaneId {
        LaneId::new(value).expect("lane id")
    }

    #[test]
    fn cards_flow_left_to_right_in_event_order() {
        let board = fixtures::board_two_lanes();
        let lane = board.lane(&lid("l:camera")).expect("lane");
        let grid = CardGrid::for_lane(lane, 0, 200);

        let a = grid.card_rect(&eid("ev:a")).expect("ev:a mounted");
        let b = grid.card_rect(&eid("ev:b")).expect("ev:b mounted");
        assert_eq!(a.x, LANE_LEFT_PAD);
        assert_eq!(b.x, LANE_LEFT_PAD + CARD_WIDTH + CARD_GAP);
        assert_eq!(a.y, LANE_HEADER_ROWS);
    }

    #[test]
    fn scrolled_out_cards_unmount() {
        let board = fixtures::board_two_lanes();
        let lane = board.lane(&lid("l:camera")).expect("lane");

        // Scroll far enough that the first card is entirely off the left edge.
        let grid = CardGrid::for_lane(lane, LANE_LEFT_PAD + CARD_WIDTH, 200);
        assert!(grid.card_rect(&eid("ev:a")).is_none());
        assert!(grid.card_rect(&eid("ev:b")).is_some());

        // A tiny viewport unmounts everything past its right edge.
        let grid = CardGrid::for_lane(lane, 0, LANE_LEFT_PAD + 1);
        assert!(grid.card_rect(&eid("ev:a")).is_some());
        assert!(grid.card_rect(&eid("ev:b")).is_none());
    }

    #[test]
    fn lane_offsets_follow_display_order() {
        let board = fixtures::board_two_lanes();
        let layout = BoardLayout::compute(&board, &BTreeMap::new(), 200);

        let top = layout
            .resolve(&AnchorRef::new(eid("ev:a"), AnchorSide::Top), &lid("l:camera"))
            .expect("resolve camera");
        assert_eq!(top.y, RULER_HEIGHT + LANE_HEADER_ROWS);

        let below = layout
            .resolve(&AnchorRef::new(eid("ev:c"), AnchorSide::Top), &lid("l:audio"))
            .expect("resolve audio");
        assert_eq!(below.y, RULER_HEIGHT + LANE_HEIGHT + LANE_HEADER_ROWS);
    }

    #[test]
    fn anchor_at_finds_the_exact_border_cell() {
        let board = fixtures::board_two_lanes();
        let layout = BoardLayout::compute(&board, &BTreeMap::new(), 200);

        let rect = layout.surface_card_rect(&lid("l:camera"), &eid("ev:a")).expect("rect");
        let bottom_mid = Point::new(rect.x + rect.width / 2, rect.bottom());

        let (anchor, lane_id) = layout.anchor_at(bottom_mid).expect("anchor hit");
        assert_eq!(anchor.event_id(), &eid("ev:a"));
        assert_eq!(anchor.side(), AnchorSide::Bottom);
        assert_eq!(lane_id, lid("l:camera"));

        assert!(layout.anchor_at(Point::new(0, 0)).is_none());
    }
}
