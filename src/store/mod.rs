// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Committed connections for one board scope.
//!
//! The store is in-memory only. Hosts that want persistence use the snapshot
//! records in [`export`]; the core never touches disk.

use std::collections::BTreeMap;

use crate::model::{Connection, ConnectionId, EventId};

pub mod export;

pub use export::{AnchorRecord, ConnectionRecord, RestoreError};

/// The set of committed connections for a scope (a board, or a single lane).
///
/// Connections are keyed by id and never mutated in place; an edit is modeled
/// as remove + add. There is no uniqueness constraint on (source, target)
/// pairs, so parallel links between the same two anchors are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionStore {
    connections: BTreeMap<ConnectionId, Connection>,
}

impl ConnectionStore {
    /// Inserts a connection under its id. Re-adding an existing id replaces
    /// the stored connection wholesale, which is the remove+add edit model in
    /// one call.
    pub fn add(&mut self, connection: Connection) {
        self.connections.insert(connection.connection_id().clone(), connection);
    }

    /// Removes by id and returns the connection if it was present. Removing a
    /// nonexistent id is a no-op, not an error.
    pub fn remove(&mut self, connection_id: &ConnectionId) -> Option<Connection> {
        self.connections.remove(connection_id)
    }

    pub fn get(&self, connection_id: &ConnectionId) -> Option<&Connection> {
        self.connections.get(connection_id)
    }

    pub fn contains(&self, connection_id: &ConnectionId) -> bool {
        self.connections.contains_key(connection_id)
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// All connections in id order.
    pub fn list_all(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    /// Connections with either endpoint anchored on `event_id`.
    pub fn list_by_entity<'a>(
        &'a self,
        event_id: &'a EventId,
    ) -> impl Iterator<Item = &'a Connection> {
        self.connections.values().filter(move |connection| connection.touches_event(event_id))
    }

    /// Ids of connections touching `event_id`, for cascade removal.
    pub fn ids_by_entity(&self, event_id: &EventId) -> Vec<ConnectionId> {
        self.list_by_entity(event_id)
            .map(|connection| connection.connection_id().clone())
            .collect()
    }
}
