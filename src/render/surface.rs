// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text rendering of the whole board surface.
//!
//! Produces the character grid the TUI scrolls through: hour ruler, lane
//! bands, event cards, committed links, the live preview, and (while a
//! gesture is live) the anchor affordances offered for selection.

use crate::layout::cards::{
    HOUR_MARK_STEP, LANE_HEIGHT, LANE_LEFT_PAD, RULER_HEIGHT, RULER_HOURS,
};
use crate::layout::{anchor_point, BoardLayout, Point};
use crate::model::{AnchorRef, AnchorSide, Board};

use super::canvas::{Canvas, UNICODE_BOX_HORIZONTAL, UNICODE_BOX_TEE_DOWN};
use super::{CanvasError, Segment};

const ANCHOR_OFFERED: char = '○';
const ANCHOR_SOURCE: char = '●';

#[derive(Debug, Clone, Default)]
pub struct SurfaceOptions {
    /// Offer anchor cells for selection (a gesture is pending or armed).
    pub show_anchors: bool,
    /// The live gesture's source anchor, drawn filled.
    pub source_anchor: Option<AnchorRef>,
}

pub fn render_surface(
    board: &Board,
    layout: &BoardLayout,
    segments: &[Segment],
    width: usize,
    options: &SurfaceOptions,
) -> Result<Canvas, CanvasError> {
    let height = BoardLayout::surface_height(board.lane_count()).max(RULER_HEIGHT) as usize;
    let mut canvas = Canvas::new(width, height)?;

    draw_ruler(&mut canvas, width);

    for (position, lane) in board.lanes().enumerate() {
        let oy = RULER_HEIGHT + position as i32 * LANE_HEIGHT;
        canvas.write_text(LANE_LEFT_PAD, oy, lane.name());

        let separator_y = oy + LANE_HEIGHT - 1;
        for x in 0..width as i32 {
            canvas.set_clipped(x, separator_y, UNICODE_BOX_HORIZONTAL);
        }
    }

    for (lane_id, event_id, rect) in layout.surface_cards() {
        let Some(event) = board.lane(lane_id).and_then(|lane| lane.event(event_id)) else {
            continue;
        };
        canvas.draw_box(rect.x, rect.y, rect.width, rect.height);

        let interior = (rect.width - 2).max(0) as usize;
        canvas.write_text(rect.x + 1, rect.y + 1, &clip(event.time(), interior));
        canvas.write_text(rect.x + 1, rect.y + 2, &clip(event.title(), interior));
        canvas.write_text(rect.x + 1, rect.y + 3, &clip(event.description(), interior));
        canvas.write_text(rect.x + 1, rect.y + 4, &clip(event.kind(), interior));
    }

    for segment in segments {
        canvas.draw_segment(segment);
    }

    if options.show_anchors {
        draw_anchor_affordances(&mut canvas, layout, options.source_anchor.as_ref());
    }

    Ok(canvas)
}

fn draw_ruler(canvas: &mut Canvas, width: usize) {
    for x in 0..width as i32 {
        canvas.set_clipped(x, 1, UNICODE_BOX_HORIZONTAL);
    }
    for hour in 0..RULER_HOURS {
        let x = LANE_LEFT_PAD + hour * HOUR_MARK_STEP;
        canvas.write_text(x, 0, &format!("{hour:02}"));
        canvas.set_clipped(x, 1, UNICODE_BOX_TEE_DOWN);
    }
}

fn draw_anchor_affordances(
    canvas: &mut Canvas,
    layout: &BoardLayout,
    source: Option<&AnchorRef>,
) {
    for (_, event_id, rect) in layout.surface_cards() {
        for side in AnchorSide::ALL {
            let Point { x, y } = anchor_point(rect, side);
            let is_source = source
                .map(|anchor| anchor.event_id() == event_id && anchor.side() == side)
                .unwrap_or(false);
            canvas.set_clipped(x, y, if is_source { ANCHOR_SOURCE } else { ANCHOR_OFFERED });
        }
    }
}

fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
