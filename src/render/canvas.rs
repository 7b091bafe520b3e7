// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smallvec::SmallVec;

use crate::layout::Point;

use super::{LineStyle, MarkerEnds, Segment};

pub const UNICODE_BOX_HORIZONTAL: char = '─';
pub const UNICODE_BOX_VERTICAL: char = '│';
pub const UNICODE_BOX_TOP_LEFT: char = '┌';
pub const UNICODE_BOX_TOP_RIGHT: char = '┐';
pub const UNICODE_BOX_BOTTOM_LEFT: char = '└';
pub const UNICODE_BOX_BOTTOM_RIGHT: char = '┘';
pub const UNICODE_BOX_TEE_RIGHT: char = '├';
pub const UNICODE_BOX_TEE_LEFT: char = '┤';
pub const UNICODE_BOX_TEE_DOWN: char = '┬';
pub const UNICODE_BOX_TEE_UP: char = '┴';
pub const UNICODE_BOX_CROSS: char = '┼';

const DASHED_HORIZONTAL: char = '┄';
const DASHED_VERTICAL: char = '┆';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoxEdges(u8);

impl BoxEdges {
    const NONE: Self = Self(0);
    const LEFT: Self = Self(1 << 0);
    const RIGHT: Self = Self(1 << 1);
    const UP: Self = Self(1 << 2);
    const DOWN: Self = Self(1 << 3);

    fn contains(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

fn box_edges_from_char(ch: char) -> Option<BoxEdges> {
    match ch {
        UNICODE_BOX_HORIZONTAL => Some(BoxEdges::LEFT.union(BoxEdges::RIGHT)),
        UNICODE_BOX_VERTICAL => Some(BoxEdges::UP.union(BoxEdges::DOWN)),
        UNICODE_BOX_TOP_LEFT => Some(BoxEdges::RIGHT.union(BoxEdges::DOWN)),
        UNICODE_BOX_TOP_RIGHT => Some(BoxEdges::LEFT.union(BoxEdges::DOWN)),
        UNICODE_BOX_BOTTOM_LEFT => Some(BoxEdges::RIGHT.union(BoxEdges::UP)),
        UNICODE_BOX_BOTTOM_RIGHT => Some(BoxEdges::LEFT.union(BoxEdges::UP)),
        UNICODE_BOX_TEE_RIGHT => Some(BoxEdges::UP.union(BoxEdges::DOWN).union(BoxEdges::RIGHT)),
        UNICODE_BOX_TEE_LEFT => Some(BoxEdges::UP.union(BoxEdges::DOWN).union(BoxEdges::LEFT)),
        UNICODE_BOX_TEE_DOWN => Some(BoxEdges::LEFT.union(BoxEdges::RIGHT).union(BoxEdges::DOWN)),
        UNICODE_BOX_TEE_UP => Some(BoxEdges::LEFT.union(BoxEdges::RIGHT).union(BoxEdges::UP)),
        UNICODE_BOX_CROSS => Some(
            BoxEdges::LEFT
                .union(BoxEdges::RIGHT)
                .union(BoxEdges::UP)
                .union(BoxEdges::DOWN),
        ),
        _ => None,
    }
}

fn box_char_from_edges(edges: BoxEdges) -> char {
    match edges.0 {
        // Empty shouldn't normally occur for box cells; treat as blank.
        0 => ' ',
        // Straight segments (including endpoints).
        1..=3 => UNICODE_BOX_HORIZONTAL,
        4 | 8 | 12 => UNICODE_BOX_VERTICAL,
        // Corners.
        10 => UNICODE_BOX_TOP_LEFT,
        9 => UNICODE_BOX_TOP_RIGHT,
        6 => UNICODE_BOX_BOTTOM_LEFT,
        5 => UNICODE_BOX_BOTTOM_RIGHT,
        // Tees.
        14 => UNICODE_BOX_TEE_RIGHT,
        13 => UNICODE_BOX_TEE_LEFT,
        11 => UNICODE_BOX_TEE_DOWN,
        7 => UNICODE_BOX_TEE_UP,
        // Cross.
        15 => UNICODE_BOX_CROSS,
        // Unreachable with 4 bits; keep a deterministic fallback.
        _ => UNICODE_BOX_CROSS,
    }
}

/// A fixed-size, bounds-checked character grid.
///
/// Collision behavior is deterministic:
/// - non-box characters overwrite (last writer wins)
/// - Unicode box-drawing characters merge into junctions (`┼`, `├`, `┤`, `┬`, `┴`) instead of overwriting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
    box_edges: Vec<BoxEdges>,
}

impl Canvas {
    /// Creates a new canvas filled with spaces (`' '`).
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        let len = width
            .checked_mul(height)
            .ok_or(CanvasError::AreaOverflow { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![' '; len],
            box_edges: vec![BoxEdges::NONE; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Returns the character at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        let idx = self.index_of(x, y)?;
        let edges = self.box_edges[idx];
        if edges == BoxEdges::NONE {
            Ok(self.cells[idx])
        } else {
            Ok(box_char_from_edges(edges))
        }
    }

    /// Sets the character at `(x, y)`, merging box-drawing characters.
    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        if let Some(edges) = box_edges_from_char(ch) {
            self.box_edges[idx] = self.box_edges[idx].union(edges);
        } else {
            self.cells[idx] = ch;
            self.box_edges[idx] = BoxEdges::NONE;
        }
        Ok(())
    }

    /// Like [`Canvas::set`], but silently clips out-of-bounds cells. Drawing
    /// routinely runs past the surface edges when lanes are scrolled.
    pub fn set_clipped(&mut self, x: i32, y: i32, ch: char) {
        if self.in_bounds(x, y) {
            let _ = self.set(x as usize, y as usize, ch);
        }
    }

    /// Writes `text` left-to-right starting at `(x, y)`, clipping at the
    /// canvas edges.
    pub fn write_text(&mut self, x: i32, y: i32, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.set_clipped(x + i as i32, y, ch);
        }
    }

    /// Draws the four borders of `rect` with box characters.
    pub fn draw_box(&mut self, x: i32, y: i32, width: i32, height: i32) {
        if width < 2 || height < 2 {
            return;
        }
        let right = x + width - 1;
        let bottom = y + height - 1;
        for cx in (x + 1)..right {
            self.set_clipped(cx, y, UNICODE_BOX_HORIZONTAL);
            self.set_clipped(cx, bottom, UNICODE_BOX_HORIZONTAL);
        }
        for cy in (y + 1)..bottom {
            self.set_clipped(x, cy, UNICODE_BOX_VERTICAL);
            self.set_clipped(right, cy, UNICODE_BOX_VERTICAL);
        }
        self.set_clipped(x, y, UNICODE_BOX_TOP_LEFT);
        self.set_clipped(right, y, UNICODE_BOX_TOP_RIGHT);
        self.set_clipped(x, bottom, UNICODE_BOX_BOTTOM_LEFT);
        self.set_clipped(right, bottom, UNICODE_BOX_BOTTOM_RIGHT);
    }

    /// Draws one projected segment along its orthogonal route, then stamps
    /// direction markers over the endpoint cells where the stroke asks for
    /// them.
    pub fn draw_segment(&mut self, segment: &Segment) {
        let route = segment_cells(segment.p1, segment.p2);

        for (idx, cell) in route.iter().enumerate() {
            let prev = idx.checked_sub(1).and_then(|i| route.get(i));
            let next = route.get(idx + 1);
            let ch = route_char(segment.stroke.line, *cell, prev.copied(), next.copied());
            self.set_clipped(cell.x, cell.y, ch);
        }

        let markers = segment.stroke.markers;
        if matches!(markers, MarkerEnds::Source | MarkerEnds::Both) {
            if let Some(ch) = marker_char(route.first().copied(), route.get(1).copied()) {
                self.set_clipped(segment.p1.x, segment.p1.y, ch);
            }
        }
        if matches!(markers, MarkerEnds::Target | MarkerEnds::Both) {
            let n = route.len();
            let neighbor = n.checked_sub(2).and_then(|i| route.get(i)).copied();
            if let Some(ch) = marker_char(route.last().copied(), neighbor) {
                self.set_clipped(segment.p2.x, segment.p2.y, ch);
            }
        }
    }

    /// Renders the canvas as one string per row.
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.get(x, y).expect("in-bounds cell"))
                    .collect::<String>()
            })
            .collect()
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if x >= self.width || y >= self.height {
            return Err(CanvasError::OutOfBounds { x, y, width: self.width, height: self.height });
        }
        Ok(y * self.width + x)
    }
}

/// The cells of the deterministic orthogonal route between two points:
/// vertical run first, then horizontal. Shared by drawing and hit-testing so
/// a click lands exactly on what was drawn.
pub fn segment_cells(p1: Point, p2: Point) -> SmallVec<[Point; 32]> {
    let mut cells = SmallVec::new();

    let step_y = if p2.y >= p1.y { 1 } else { -1 };
    let mut y = p1.y;
    loop {
        cells.push(Point::new(p1.x, y));
        if y == p2.y {
            break;
        }
        y += step_y;
    }

    if p1.x != p2.x {
        let step_x = if p2.x >= p1.x { 1 } else { -1 };
        let mut x = p1.x + step_x;
        loop {
            cells.push(Point::new(x, p2.y));
            if x == p2.x {
                break;
            }
            x += step_x;
        }
    }

    cells
}

fn route_char(line: LineStyle, cell: Point, prev: Option<Point>, next: Option<Point>) -> char {
    let toward_prev = prev.map(|p| edge_toward(cell, p)).unwrap_or(BoxEdges::NONE);
    let toward_next = next.map(|p| edge_toward(cell, p)).unwrap_or(BoxEdges::NONE);
    let edges = toward_prev.union(toward_next);

    let vertical = edges.contains(BoxEdges::UP) || edges.contains(BoxEdges::DOWN);
    let horizontal = edges.contains(BoxEdges::LEFT) || edges.contains(BoxEdges::RIGHT);

    match line {
        // Corner cells stay solid box chars even on dashed lines.
        LineStyle::Dashed if vertical && !horizontal => DASHED_VERTICAL,
        LineStyle::Dashed if horizontal && !vertical => DASHED_HORIZONTAL,
        _ => box_char_from_edges(if edges == BoxEdges::NONE {
            // Single-cell route; render as a horizontal stub.
            BoxEdges::LEFT.union(BoxEdges::RIGHT)
        } else {
            edges
        }),
    }
}

fn edge_toward(from: Point, to: Point) -> BoxEdges {
    if to.y < from.y {
        BoxEdges::UP
    } else if to.y > from.y {
        BoxEdges::DOWN
    } else if to.x < from.x {
        BoxEdges::LEFT
    } else if to.x > from.x {
        BoxEdges::RIGHT
    } else {
        BoxEdges::NONE
    }
}

/// Marker glyph for an endpoint cell, pointing from the adjacent route cell
/// into the endpoint.
fn marker_char(endpoint: Option<Point>, neighbor: Option<Point>) -> Option<char> {
    let endpoint = endpoint?;
    // A single-cell route has no direction to point in.
    let neighbor = neighbor?;
    Some(if endpoint.y < neighbor.y {
        '▲'
    } else if endpoint.y > neighbor.y {
        '▼'
    } else if endpoint.x < neighbor.x {
        '◀'
    } else {
        '▶'
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow { width: usize, height: usize },
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "canvas area {width}x{height} overflows")
            }
            Self::OutOfBounds { x, y, width, height } => {
                write!(f, "cell ({x}, {y}) outside canvas {width}x{height}")
            }
        }
    }
}

impl std::error::Error for CanvasError {}
