// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The link gesture state machine.
//!
//! At most one gesture is live per board surface. Transition methods are the
//! only code that mutates gesture state, and each reports whether the surface
//! needs a redraw so callers re-render anchor affordances and the preview
//! line from exactly one place.

use tracing::debug;

use crate::layout::Point;
use crate::model::{AnchorRef, LaneId, LinkKind};

#[cfg(test)]
mod tests;

/// Observable lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Pending,
    Armed,
}

/// A completed gesture, ready to become a [`crate::model::Connection`] once
/// the owning board mints an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDraft {
    pub source: AnchorRef,
    pub source_lane: LaneId,
    pub target: AnchorRef,
    pub target_lane: LaneId,
    pub kind: LinkKind,
}

/// Result of offering a target anchor to the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Gesture committed; the machine is idle again.
    Committed(LinkDraft),
    /// Source and target share an entity; the gesture stays armed.
    SelfLink,
    /// No armed gesture to complete; nothing happened.
    NotArmed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum State {
    #[default]
    Idle,
    Pending {
        source: AnchorRef,
        source_lane: LaneId,
        kind: LinkKind,
    },
    Armed {
        source: AnchorRef,
        source_lane: LaneId,
        kind: LinkKind,
        cursor: Point,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkGesture {
    state: State,
}

impl LinkGesture {
    pub fn phase(&self) -> GesturePhase {
        match self.state {
            State::Idle => GesturePhase::Idle,
            State::Pending { .. } => GesturePhase::Pending,
            State::Armed { .. } => GesturePhase::Armed,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phase() == GesturePhase::Idle
    }

    /// Source anchor and its scope while a gesture is live.
    pub fn source(&self) -> Option<(&AnchorRef, &LaneId)> {
        match &self.state {
            State::Idle => None,
            State::Pending { source, source_lane, .. }
            | State::Armed { source, source_lane, .. } => Some((source, source_lane)),
        }
    }

    pub fn kind(&self) -> Option<LinkKind> {
        match &self.state {
            State::Idle => None,
            State::Pending { kind, .. } | State::Armed { kind, .. } => Some(*kind),
        }
    }

    /// Latest pointer sample while armed.
    pub fn cursor(&self) -> Option<Point> {
        match &self.state {
            State::Armed { cursor, .. } => Some(*cursor),
            _ => None,
        }
    }

    /// Starts a gesture from `source`. Any gesture already live is discarded
    /// first (last writer wins, no queueing). Returns true: affordances must
    /// be re-rendered.
    pub fn begin_pending(&mut self, source: AnchorRef, source_lane: LaneId, kind: LinkKind) -> bool {
        if !self.is_idle() {
            debug!(phase = ?self.phase(), "discarding stale link gesture");
        }
        debug!(%source, %kind, "link gesture pending");
        self.state = State::Pending { source, source_lane, kind };
        true
    }

    /// Feeds one pointer sample. The first sample arms a pending gesture;
    /// later samples move the preview endpoint (latest wins, stale samples
    /// are never queued). Returns whether the preview moved.
    pub fn track_cursor(&mut self, at: Point) -> bool {
        match &mut self.state {
            State::Idle => false,
            State::Pending { source, source_lane, kind } => {
                debug!(%source, "link gesture armed");
                let armed = State::Armed {
                    source: source.clone(),
                    source_lane: source_lane.clone(),
                    kind: *kind,
                    cursor: at,
                };
                self.state = armed;
                true
            }
            State::Armed { cursor, .. } => {
                if *cursor == at {
                    return false;
                }
                *cursor = at;
                true
            }
        }
    }

    /// Offers a target anchor. Only an armed gesture can commit; a target on
    /// the source entity is rejected without leaving the armed phase.
    pub fn select_target(&mut self, target: AnchorRef, target_lane: LaneId) -> SelectOutcome {
        let State::Armed { source, source_lane, kind, .. } = &self.state else {
            debug!(phase = ?self.phase(), "select_target ignored: gesture not armed");
            return SelectOutcome::NotArmed;
        };

        if target.event_id() == source.event_id() {
            debug!(%target, "self-link rejected; gesture stays armed");
            return SelectOutcome::SelfLink;
        }

        let draft = LinkDraft {
            source: source.clone(),
            source_lane: source_lane.clone(),
            target,
            target_lane,
            kind: *kind,
        };
        debug!(source = %draft.source, target = %draft.target, "link gesture committed");
        self.state = State::Idle;
        SelectOutcome::Committed(draft)
    }

    /// Abandons any live gesture with no store mutation. Returns whether a
    /// gesture was discarded (and the surface needs a redraw).
    pub fn cancel(&mut self) -> bool {
        if self.is_idle() {
            return false;
        }
        debug!(phase = ?self.phase(), "link gesture cancelled");
        self.state = State::Idle;
        true
    }
}
