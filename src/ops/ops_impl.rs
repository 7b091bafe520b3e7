// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lane/event/link mutation helpers used by `apply_ops`.
//! Keeps `ops::mod` focused on public op types and orchestration.

use tracing::debug;

use crate::model::{
    AnchorRef, Board, Connection, EventId, Lane, LaneId, TimelineEvent,
};

use super::{ApplyError, DeltaBuilder, EntityKind, EntityRef, EventOp, LaneOp, LinkOp};

fn lane_ref(lane_id: &LaneId) -> EntityRef {
    EntityRef::Lane { lane_id: lane_id.clone() }
}

fn event_ref(lane_id: &LaneId, event_id: &EventId) -> EntityRef {
    EntityRef::Event { lane_id: lane_id.clone(), event_id: event_id.clone() }
}

fn link_ref(connection: &Connection) -> EntityRef {
    EntityRef::Link { connection_id: connection.connection_id().clone() }
}

pub(super) fn apply_lane_op(
    board: &mut Board,
    op: &LaneOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    match op {
        LaneOp::Add { lane_id, name } => {
            if name.trim().is_empty() {
                return Err(ApplyError::EmptyLaneName);
            }
            if board.lane(lane_id).is_some() {
                return Err(ApplyError::AlreadyExists {
                    kind: EntityKind::Lane,
                    id: lane_id.as_str().to_owned(),
                });
            }
            board.push_lane(Lane::new(lane_id.clone(), name.clone()));
            delta.record_added(lane_ref(lane_id));
            Ok(())
        }
        LaneOp::Rename { lane_id, name } => {
            if name.trim().is_empty() {
                return Err(ApplyError::EmptyLaneName);
            }
            let Some(lane) = board.lane_mut(lane_id) else {
                return Err(ApplyError::NotFound {
                    kind: EntityKind::Lane,
                    id: lane_id.as_str().to_owned(),
                });
            };
            lane.set_name(name.clone());
            delta.record_updated(lane_ref(lane_id));
            Ok(())
        }
        LaneOp::Remove { lane_id } => {
            let Some(lane) = board.remove_lane(lane_id) else {
                return Err(ApplyError::NotFound {
                    kind: EntityKind::Lane,
                    id: lane_id.as_str().to_owned(),
                });
            };
            for event in lane.events() {
                cascade_remove_links(board, event.event_id(), delta);
                delta.record_removed(event_ref(lane_id, event.event_id()));
            }
            delta.record_removed(lane_ref(lane_id));
            Ok(())
        }
    }
}

pub(super) fn apply_event_op(
    board: &mut Board,
    op: &EventOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    match op {
        EventOp::Add { lane_id, event_id, title, time, description, kind } => {
            if board.contains_event(event_id) {
                return Err(ApplyError::AlreadyExists {
                    kind: EntityKind::Event,
                    id: event_id.as_str().to_owned(),
                });
            }
            let Some(lane) = board.lane_mut(lane_id) else {
                return Err(ApplyError::NotFound {
                    kind: EntityKind::Lane,
                    id: lane_id.as_str().to_owned(),
                });
            };
            lane.events_mut().push(TimelineEvent::new_with(
                event_id.clone(),
                title.clone(),
                time.clone(),
                description.clone(),
                kind.clone(),
            ));
            delta.record_added(event_ref(lane_id, event_id));
            Ok(())
        }
        EventOp::Update { event_id, patch } => {
            let Some(lane_id) = board.lane_of_event(event_id).cloned() else {
                return Err(ApplyError::NotFound {
                    kind: EntityKind::Event,
                    id: event_id.as_str().to_owned(),
                });
            };
            let lane = board.lane_mut(&lane_id).expect("lane of found event");
            let event = lane.event_mut(event_id).expect("event just found");
            event.apply_patch(patch);
            delta.record_updated(event_ref(&lane_id, event_id));
            Ok(())
        }
        EventOp::Remove { event_id } => {
            let Some(lane_id) = board.lane_of_event(event_id).cloned() else {
                return Err(ApplyError::NotFound {
                    kind: EntityKind::Event,
                    id: event_id.as_str().to_owned(),
                });
            };
            cascade_remove_links(board, event_id, delta);
            let lane = board.lane_mut(&lane_id).expect("lane of found event");
            lane.remove_event(event_id);
            delta.record_removed(event_ref(&lane_id, event_id));
            Ok(())
        }
    }
}

pub(super) fn apply_link_op(
    board: &mut Board,
    op: &LinkOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    match op {
        LinkOp::Add { connection_id, source, target, source_lane, target_lane, kind } => {
            if board.links().contains(connection_id) {
                return Err(ApplyError::AlreadyExists {
                    kind: EntityKind::Link,
                    id: connection_id.as_str().to_owned(),
                });
            }
            if source.event_id() == target.event_id() {
                return Err(ApplyError::SelfLink { event_id: source.event_id().clone() });
            }
            check_endpoint(board, source, source_lane)?;
            check_endpoint(board, target, target_lane)?;

            let connection = Connection::new(
                connection_id.clone(),
                source.clone(),
                target.clone(),
                source_lane.clone(),
                target_lane.clone(),
                *kind,
            );
            delta.record_added(link_ref(&connection));
            board.links_mut().add(connection);
            Ok(())
        }
        LinkOp::Remove { connection_id } => {
            let Some(connection) = board.links_mut().remove(connection_id) else {
                return Err(ApplyError::NotFound {
                    kind: EntityKind::Link,
                    id: connection_id.as_str().to_owned(),
                });
            };
            delta.record_removed(link_ref(&connection));
            Ok(())
        }
    }
}

fn check_endpoint(
    board: &Board,
    anchor: &AnchorRef,
    scope: &LaneId,
) -> Result<(), ApplyError> {
    let Some(owner) = board.lane_of_event(anchor.event_id()) else {
        return Err(ApplyError::NotFound {
            kind: EntityKind::Event,
            id: anchor.event_id().as_str().to_owned(),
        });
    };
    if owner != scope {
        return Err(ApplyError::ScopeMismatch {
            event_id: anchor.event_id().clone(),
            lane_id: scope.clone(),
        });
    }
    Ok(())
}

/// Removes every connection touching `event_id`, recording each removal.
///
/// This is the cascade half of event deletion: it runs in the same batch as
/// the event removal itself, so no dangling anchor ref is ever observable.
fn cascade_remove_links(board: &mut Board, event_id: &EventId, delta: &mut DeltaBuilder) {
    let touching = board.links().ids_by_entity(event_id);
    if !touching.is_empty() {
        debug!(event = %event_id, count = touching.len(), "cascading connection removal");
    }
    for connection_id in touching {
        if let Some(connection) = board.links_mut().remove(&connection_id) {
            delta.record_removed(link_ref(&connection));
        }
    }
}
