// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Boards contain ordered lanes of event cards plus the connection store that
//! holds committed links between card anchors.

pub mod board;
pub mod event;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod lane;
pub mod link;

pub use board::Board;
pub use event::{EventPatch, TimelineEvent, DEFAULT_EVENT_KIND};
pub use ids::{BoardId, ConnectionId, EventId, Id, IdError, LaneId};
pub use lane::Lane;
pub use link::{
    AnchorRef, AnchorSide, Connection, LinkKind, ParseAnchorSideError, ParseLinkKindError,
};
