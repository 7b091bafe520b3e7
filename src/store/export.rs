// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Serde records for the connection list.
//!
//! The model types stay serde-free; these records are the host-facing
//! serialization surface. Persistence itself is the host's business.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{
    AnchorRef, Connection, ConnectionId, EventId, IdError, LaneId,
};

use super::ConnectionStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorRecord {
    pub event: String,
    pub side: String,
}

impl AnchorRecord {
    fn from_anchor(anchor: &AnchorRef) -> Self {
        Self {
            event: anchor.event_id().as_str().to_owned(),
            side: anchor.side().as_str().to_owned(),
        }
    }

    fn to_anchor(&self) -> Result<AnchorRef, RestoreError> {
        let event_id = EventId::new(self.event.clone()).map_err(RestoreError::InvalidId)?;
        let side = self.side.parse().map_err(|_| RestoreError::InvalidSide {
            value: self.side.clone(),
        })?;
        Ok(AnchorRef::new(event_id, side))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub id: String,
    pub source: AnchorRecord,
    pub target: AnchorRecord,
    pub source_lane: String,
    pub target_lane: String,
    pub kind: String,
}

impl ConnectionRecord {
    pub fn from_connection(connection: &Connection) -> Self {
        Self {
            id: connection.connection_id().as_str().to_owned(),
            source: AnchorRecord::from_anchor(connection.source()),
            target: AnchorRecord::from_anchor(connection.target()),
            source_lane: connection.source_lane().as_str().to_owned(),
            target_lane: connection.target_lane().as_str().to_owned(),
            kind: connection.kind().as_str().to_owned(),
        }
    }

    pub fn to_connection(&self) -> Result<Connection, RestoreError> {
        let connection_id =
            ConnectionId::new(self.id.clone()).map_err(RestoreError::InvalidId)?;
        let source = self.source.to_anchor()?;
        let target = self.target.to_anchor()?;
        if source.event_id() == target.event_id() {
            return Err(RestoreError::SelfLink { id: self.id.clone() });
        }
        let source_lane =
            LaneId::new(self.source_lane.clone()).map_err(RestoreError::InvalidId)?;
        let target_lane =
            LaneId::new(self.target_lane.clone()).map_err(RestoreError::InvalidId)?;
        let kind = self.kind.parse().map_err(|_| RestoreError::InvalidKind {
            value: self.kind.clone(),
        })?;
        Ok(Connection::new(connection_id, source, target, source_lane, target_lane, kind))
    }
}

/// Snapshot of the store's current contents, in id order.
pub fn snapshot(store: &ConnectionStore) -> Vec<ConnectionRecord> {
    store.list_all().map(ConnectionRecord::from_connection).collect()
}

/// Rebuilds a store from snapshot records. Duplicate ids are rejected rather
/// than silently last-writer-wins, since a snapshot is expected to be a
/// faithful listing.
pub fn restore(records: &[ConnectionRecord]) -> Result<ConnectionStore, RestoreError> {
    let mut store = ConnectionStore::default();
    for record in records {
        let connection = record.to_connection()?;
        if store.contains(connection.connection_id()) {
            return Err(RestoreError::DuplicateId { id: record.id.clone() });
        }
        store.add(connection);
    }
    Ok(store)
}

pub fn to_json(store: &ConnectionStore) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&snapshot(store))
}

pub fn from_json(json: &str) -> Result<ConnectionStore, RestoreError> {
    let records: Vec<ConnectionRecord> =
        serde_json::from_str(json).map_err(RestoreError::Json)?;
    restore(&records)
}

#[derive(Debug)]
pub enum RestoreError {
    InvalidId(IdError),
    InvalidSide { value: String },
    InvalidKind { value: String },
    SelfLink { id: String },
    DuplicateId { id: String },
    Json(serde_json::Error),
}

impl fmt::Display for RestoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId(err) => write!(f, "invalid id in snapshot: {err}"),
            Self::InvalidSide { value } => write!(f, "invalid anchor side {value:?}"),
            Self::InvalidKind { value } => write!(f, "invalid link kind {value:?}"),
            Self::SelfLink { id } => {
                write!(f, "connection {id} links an event to itself")
            }
            Self::DuplicateId { id } => write!(f, "duplicate connection id {id}"),
            Self::Json(err) => write!(f, "invalid snapshot json: {err}"),
        }
    }
}

impl std::error::Error for RestoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidId(err) => Some(err),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}
