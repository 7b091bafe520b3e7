// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Anchor geometry for the board surface.
//!
//! Coordinates are integer character cells relative to the board-surface
//! origin (top-left = (0,0)). Nothing here is cached: card positions move
//! with lane scrolling and terminal resizes, so every query recomputes from
//! the lookups it is handed.

use std::fmt;

use crate::model::{AnchorRef, AnchorSide, EventId, LaneId};

pub mod cards;

pub use cards::{BoardLayout, CardGrid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A card's bounding rectangle on the cell grid.
///
/// `right()`/`bottom()` are inclusive border cells: a card occupying columns
/// `x..x+width` draws its right border in column `x + width - 1`, and anchors
/// sit on border cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0, "degenerate rect");
        Self { x, y, width, height }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy, ..*self }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }
}

/// Midpoint of the named side of a card rectangle, on the border itself.
pub fn anchor_point(rect: Rect, side: AnchorSide) -> Point {
    match side {
        AnchorSide::Top => Point::new(rect.x + rect.width / 2, rect.top()),
        AnchorSide::Bottom => Point::new(rect.x + rect.width / 2, rect.bottom()),
        AnchorSide::Left => Point::new(rect.left(), rect.y + rect.height / 2),
        AnchorSide::Right => Point::new(rect.right(), rect.y + rect.height / 2),
    }
}

/// Lane-local card rectangle lookup.
///
/// Returns `None` when the event's card is not currently mounted (scrolled
/// out of its lane viewport, or the event no longer exists). Implementations
/// must reflect the *current* layout on every call.
pub trait CardLookup {
    fn card_rect(&self, event_id: &EventId) -> Option<Rect>;
}

/// Scope→vertical-offset lookup for stacking lanes into one surface.
///
/// Passed to [`resolve_anchor`] instead of being hardcoded so a flat
/// single-lane surface and a stacked board use the same resolution path.
pub trait LaneOffsets {
    fn lane_offset(&self, lane_id: &LaneId) -> Option<i32>;
}

/// Recoverable resolution failure: the connection is temporarily undrawable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    CardUnmounted { event_id: EventId },
    LaneUnmounted { lane_id: LaneId },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CardUnmounted { event_id } => {
                write!(f, "card for event {event_id} is not mounted")
            }
            Self::LaneUnmounted { lane_id } => {
                write!(f, "lane {lane_id} is not on the surface")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// Resolves an anchor to surface coordinates: the lane-local side midpoint of
/// the entity's current card rectangle, shifted down by the scope lane's
/// offset.
pub fn resolve_anchor(
    anchor: &AnchorRef,
    scope: &LaneId,
    cards: &impl CardLookup,
    offsets: &impl LaneOffsets,
) -> Result<Point, ResolveError> {
    let rect = cards.card_rect(anchor.event_id()).ok_or_else(|| ResolveError::CardUnmounted {
        event_id: anchor.event_id().clone(),
    })?;
    let offset = offsets.lane_offset(scope).ok_or_else(|| ResolveError::LaneUnmounted {
        lane_id: scope.clone(),
    })?;
    Ok(anchor_point(rect, anchor.side()).translated(0, offset))
}
