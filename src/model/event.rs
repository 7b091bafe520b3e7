// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::EventId;

/// Enum-like string key describing what an event card depicts. It carries no
/// business meaning beyond selecting a label/icon in the UI.
pub const DEFAULT_EVENT_KIND: &str = "camera";

/// One event card on a lane.
///
/// The connection core treats events as read-only records supplied by the
/// CRUD surface; only positional lookup by id matters to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEvent {
    event_id: EventId,
    title: String,
    time: String,
    description: String,
    kind: String,
}

impl TimelineEvent {
    pub fn new(event_id: EventId) -> Self {
        Self {
            event_id,
            title: String::new(),
            time: String::new(),
            description: String::new(),
            kind: DEFAULT_EVENT_KIND.to_owned(),
        }
    }

    pub fn new_with(
        event_id: EventId,
        title: impl Into<String>,
        time: impl Into<String>,
        description: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            event_id,
            title: title.into(),
            time: time.into(),
            description: description.into(),
            kind: kind.into(),
        }
    }

    pub fn event_id(&self) -> &EventId {
        &self.event_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_time(&mut self, time: impl Into<String>) {
        self.time = time.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_kind(&mut self, kind: impl Into<String>) {
        self.kind = kind.into();
    }

    /// Applies the set fields of `patch`, leaving the rest untouched.
    pub fn apply_patch(&mut self, patch: &EventPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(time) = &patch.time {
            self.time = time.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(kind) = &patch.kind {
            self.kind = kind.clone();
        }
    }
}

/// Partial update for an event; `None` fields are left as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub time: Option<String>,
    pub description: Option<String>,
    pub kind: Option<String>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.time.is_none()
            && self.description.is_none()
            && self.kind.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{EventPatch, TimelineEvent, DEFAULT_EVENT_KIND};
    use crate::model::EventId;

    #[test]
    fn new_event_starts_blank_with_default_kind() {
        let event = TimelineEvent::new(EventId::new("ev:1").expect("event id"));
        assert_eq!(event.title(), "");
        assert_eq!(event.time(), "");
        assert_eq!(event.kind(), DEFAULT_EVENT_KIND);
    }

    #[test]
    fn patch_updates_only_set_fields() {
        let mut event = TimelineEvent::new_with(
            EventId::new("ev:1").expect("event id"),
            "Scene 1",
            "09:00",
            "opening shot",
            "camera",
        );

        event.apply_patch(&EventPatch {
            time: Some("10:30".to_owned()),
            ..EventPatch::default()
        });

        assert_eq!(event.title(), "Scene 1");
        assert_eq!(event.time(), "10:30");
        assert_eq!(event.description(), "opening shot");
    }
}
