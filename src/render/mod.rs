// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Projection of the connection graph into drawable primitives.
//!
//! Projection is recomputed on every trigger (pointer move during a gesture,
//! store mutation, scroll, resize) and never cached; the resolver owns all
//! geometry. A connection whose endpoint cannot be resolved is skipped, which
//! is the rendering policy for orphaned or scrolled-away endpoints, not an
//! error state.

use crate::gesture::LinkGesture;
use crate::layout::{BoardLayout, Point};
use crate::model::{ConnectionId, LinkKind};
use crate::store::ConnectionStore;

pub mod canvas;
pub mod surface;

pub use canvas::{segment_cells, Canvas, CanvasError};
pub use surface::{render_surface, SurfaceOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// Which segment ends carry a directional marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerEnds {
    None,
    Source,
    Target,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub line: LineStyle,
    pub markers: MarkerEnds,
}

/// Deterministic kind→stroke mapping.
pub fn stroke_for_kind(kind: LinkKind) -> Stroke {
    match kind {
        LinkKind::Plain => Stroke { line: LineStyle::Solid, markers: MarkerEnds::None },
        LinkKind::Dotted => Stroke { line: LineStyle::Dashed, markers: MarkerEnds::None },
        LinkKind::ArrowUp => Stroke { line: LineStyle::Solid, markers: MarkerEnds::Source },
        LinkKind::ArrowDown => Stroke { line: LineStyle::Solid, markers: MarkerEnds::Target },
        LinkKind::Bidirectional => Stroke { line: LineStyle::Solid, markers: MarkerEnds::Both },
    }
}

/// One drawable segment in surface coordinates.
///
/// `connection_id` is the activation hook: hit-testing a committed segment
/// yields the id the UI deletes through ops. The live-gesture preview has no
/// id and can never be activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub connection_id: Option<ConnectionId>,
    pub p1: Point,
    pub p2: Point,
    pub stroke: Stroke,
}

/// Projects the store plus any live gesture into segments.
pub fn project_board(
    store: &ConnectionStore,
    gesture: &LinkGesture,
    layout: &BoardLayout,
) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(store.len() + 1);

    for connection in store.list_all() {
        let Ok(p1) = layout.resolve(connection.source(), connection.source_lane()) else {
            continue;
        };
        let Ok(p2) = layout.resolve(connection.target(), connection.target_lane()) else {
            continue;
        };
        segments.push(Segment {
            connection_id: Some(connection.connection_id().clone()),
            p1,
            p2,
            stroke: stroke_for_kind(connection.kind()),
        });
    }

    if let Some(preview) = preview_segment(gesture, layout) {
        segments.push(preview);
    }

    segments
}

/// The live preview line from the resolved source anchor to the cursor,
/// dashed to read as in-progress, keeping the chosen kind's markers.
fn preview_segment(gesture: &LinkGesture, layout: &BoardLayout) -> Option<Segment> {
    let cursor = gesture.cursor()?;
    let (source, source_lane) = gesture.source()?;
    let kind = gesture.kind()?;
    let p1 = layout.resolve(source, source_lane).ok()?;
    Some(Segment {
        connection_id: None,
        p1,
        p2: cursor,
        stroke: Stroke { line: LineStyle::Dashed, markers: stroke_for_kind(kind).markers },
    })
}

/// The committed connection whose drawn route passes through `p`, if any.
pub fn hit_test(segments: &[Segment], p: Point) -> Option<&ConnectionId> {
    segments.iter().find_map(|segment| {
        let connection_id = segment.connection_id.as_ref()?;
        segment_cells(segment.p1, segment.p2)
            .contains(&p)
            .then_some(connection_id)
    })
}
