// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::event::TimelineEvent;
use super::ids::{EventId, LaneId};

/// A named horizontal lane of event cards.
///
/// Events keep their insertion order; the layout derives card positions from
/// that order, so the `Vec` is the single source of ordering truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    lane_id: LaneId,
    name: String,
    events: Vec<TimelineEvent>,
}

impl Lane {
    pub fn new(lane_id: LaneId, name: impl Into<String>) -> Self {
        Self {
            lane_id,
            name: name.into(),
            events: Vec::new(),
        }
    }

    pub fn lane_id(&self) -> &LaneId {
        &self.lane_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut Vec<TimelineEvent> {
        &mut self.events
    }

    pub fn event(&self, event_id: &EventId) -> Option<&TimelineEvent> {
        self.events.iter().find(|event| event.event_id() == event_id)
    }

    pub fn event_mut(&mut self, event_id: &EventId) -> Option<&mut TimelineEvent> {
        self.events.iter_mut().find(|event| event.event_id() == event_id)
    }

    pub fn event_index(&self, event_id: &EventId) -> Option<usize> {
        self.events.iter().position(|event| event.event_id() == event_id)
    }

    pub fn contains_event(&self, event_id: &EventId) -> bool {
        self.event_index(event_id).is_some()
    }

    /// Removes the event and returns it, preserving the order of the rest.
    pub fn remove_event(&mut self, event_id: &EventId) -> Option<TimelineEvent> {
        let idx = self.event_index(event_id)?;
        Some(self.events.remove(idx))
    }
}
