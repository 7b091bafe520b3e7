// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use super::ids::{ConnectionId, EventId, LaneId};

/// Side of an event card a connection endpoint attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnchorSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl AnchorSide {
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for AnchorSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAnchorSideError;

impl fmt::Display for ParseAnchorSideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid anchor side")
    }
}

impl std::error::Error for ParseAnchorSideError {}

impl FromStr for AnchorSide {
    type Err = ParseAnchorSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "right" => Ok(Self::Right),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            _ => Err(ParseAnchorSideError),
        }
    }
}

/// Names a connection endpoint: an event plus the card side it attaches to.
///
/// An anchor ref never owns geometry; it is a lookup key resolved against the
/// current layout every time coordinates are needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnchorRef {
    event_id: EventId,
    side: AnchorSide,
}

impl AnchorRef {
    pub fn new(event_id: EventId, side: AnchorSide) -> Self {
        Self { event_id, side }
    }

    pub fn event_id(&self) -> &EventId {
        &self.event_id
    }

    pub fn side(&self) -> AnchorSide {
        self.side
    }
}

impl fmt::Display for AnchorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.event_id, self.side)
    }
}

/// Visual stroke of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Plain,
    Dotted,
    ArrowUp,
    ArrowDown,
    Bidirectional,
}

impl LinkKind {
    pub const ALL: [Self; 5] = [
        Self::Plain,
        Self::Dotted,
        Self::ArrowUp,
        Self::ArrowDown,
        Self::Bidirectional,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain-line",
            Self::Dotted => "dotted-line",
            Self::ArrowUp => "arrow-up",
            Self::ArrowDown => "arrow-down",
            Self::Bidirectional => "bidirectional-arrow",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLinkKindError;

impl fmt::Display for ParseLinkKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid link kind")
    }
}

impl std::error::Error for ParseLinkKindError {}

impl FromStr for LinkKind {
    type Err = ParseLinkKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain-line" => Ok(Self::Plain),
            "dotted-line" => Ok(Self::Dotted),
            "arrow-up" => Ok(Self::ArrowUp),
            "arrow-down" => Ok(Self::ArrowDown),
            "bidirectional-arrow" => Ok(Self::Bidirectional),
            _ => Err(ParseLinkKindError),
        }
    }
}

/// A committed link between two anchors, possibly across lanes.
///
/// Endpoints reference events by id only (weak references); the scope fields
/// name the lane each endpoint's event lives in so anchor resolution can apply
/// the right lane offset. Invariant: `source.event_id() != target.event_id()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    connection_id: ConnectionId,
    source: AnchorRef,
    target: AnchorRef,
    source_lane: LaneId,
    target_lane: LaneId,
    kind: LinkKind,
}

impl Connection {
    pub fn new(
        connection_id: ConnectionId,
        source: AnchorRef,
        target: AnchorRef,
        source_lane: LaneId,
        target_lane: LaneId,
        kind: LinkKind,
    ) -> Self {
        debug_assert_ne!(source.event_id(), target.event_id(), "self-link");
        Self {
            connection_id,
            source,
            target,
            source_lane,
            target_lane,
            kind,
        }
    }

    pub fn connection_id(&self) -> &ConnectionId {
        &self.connection_id
    }

    pub fn source(&self) -> &AnchorRef {
        &self.source
    }

    pub fn target(&self) -> &AnchorRef {
        &self.target
    }

    pub fn source_lane(&self) -> &LaneId {
        &self.source_lane
    }

    pub fn target_lane(&self) -> &LaneId {
        &self.target_lane
    }

    pub fn kind(&self) -> LinkKind {
        self.kind
    }

    pub fn touches_event(&self, event_id: &EventId) -> bool {
        self.source.event_id() == event_id || self.target.event_id() == event_id
    }

    pub fn touches_lane(&self, lane_id: &LaneId) -> bool {
        &self.source_lane == lane_id || &self.target_lane == lane_id
    }

    pub fn crosses_lanes(&self) -> bool {
        self.source_lane != self.target_lane
    }
}
