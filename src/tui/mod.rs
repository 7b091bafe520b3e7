// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Provides the interactive board shell (ratatui + crossterm) with mouse
//! capture: clicking card anchors draws links, pointer moves feed the live
//! preview, clicking a drawn link starts the confirm-then-delete flow.
//! Lane/event CRUD is keyboard-driven chrome around that core.

use std::{
    collections::BTreeMap,
    error::Error,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::gesture::{LinkGesture, SelectOutcome};
use crate::layout::cards::{CARD_GAP, CARD_WIDTH};
use crate::layout::{BoardLayout, Point};
use crate::model::{
    AnchorRef, AnchorSide, Board, BoardId, ConnectionId, EventId, EventPatch, Lane, LaneId,
    LinkKind, TimelineEvent, DEFAULT_EVENT_KIND,
};
use crate::ops::{apply_ops, ApplyResult, EventOp, LaneOp, LinkOp, Op};
use crate::render::{hit_test, project_board, render_surface, Segment, SurfaceOptions};

mod theme;
#[cfg(test)]
mod tests;

use theme::TuiTheme;

const POLL_INTERVAL: Duration = Duration::from_millis(250);
const TOAST_TTL: Duration = Duration::from_secs(2);
const EDIT_FIELD_LABELS: [&str; 4] = ["Title", "Time", "Description", "Type"];

/// Runs the interactive terminal UI against an empty board.
pub fn run() -> Result<(), Box<dyn Error>> {
    run_with_board(Board::new(BoardId::new("b:board").expect("board id")))
}

/// Runs the interactive terminal UI against the built-in demo board.
pub fn run_demo() -> Result<(), Box<dyn Error>> {
    run_with_board(demo_board())
}

pub fn run_with_board(board: Board) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(board)?;

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }

    Ok(())
}

struct Toast {
    message: String,
    expires_at: Instant,
}

/// Modal input state. `Normal` is the only mode in which the board surface
/// itself reacts to the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Normal,
    LaneNameInput {
        buffer: String,
        rename_of: Option<LaneId>,
    },
    EventEdit {
        event_id: EventId,
        fields: [String; 4],
        field: usize,
    },
    KindPicker {
        source: AnchorRef,
        source_lane: LaneId,
        selected: usize,
    },
    ConfirmDeleteLink {
        connection_id: ConnectionId,
    },
}

struct App {
    board: Board,
    gesture: LinkGesture,
    theme: TuiTheme,
    mode: Mode,
    focus_lane: usize,
    focus_card: usize,
    lane_scrolls: BTreeMap<LaneId, i32>,
    board_scroll_y: u16,
    /// Inner area of the board panel from the last draw; pointer coordinates
    /// map through it into surface coordinates.
    board_inner: Rect,
    layout: BoardLayout,
    segments: Vec<Segment>,
    toast: Option<Toast>,
    should_quit: bool,
}

impl App {
    fn new(board: Board) -> Result<Self, Box<dyn Error>> {
        let theme = TuiTheme::from_env()?;
        Ok(Self {
            board,
            gesture: LinkGesture::default(),
            theme,
            mode: Mode::Normal,
            focus_lane: 0,
            focus_card: 0,
            lane_scrolls: BTreeMap::new(),
            board_scroll_y: 0,
            board_inner: Rect::default(),
            layout: BoardLayout::default(),
            segments: Vec::new(),
            toast: None,
            should_quit: false,
        })
    }

    /// Recomputes layout and projected segments for the current viewport.
    /// Runs on every draw; anything that changed geometry since the last
    /// frame (scroll, resize, mutation, pointer move) is picked up here.
    fn refresh_surface(&mut self) {
        let width = i32::from(self.board_inner.width.max(1));
        self.layout = BoardLayout::compute(&self.board, &self.lane_scrolls, width);
        self.segments = project_board(self.board.links(), &self.gesture, &self.layout);
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn apply(&mut self, ops: Vec<Op>) -> Option<ApplyResult> {
        let base_rev = self.board.rev();
        match apply_ops(&mut self.board, base_rev, &ops) {
            Ok(result) => {
                self.clamp_focus();
                Some(result)
            }
            Err(err) => {
                self.set_toast(err.to_string());
                None
            }
        }
    }

    fn clamp_focus(&mut self) {
        let lane_count = self.board.lane_count();
        if lane_count == 0 {
            self.focus_lane = 0;
            self.focus_card = 0;
            return;
        }
        self.focus_lane = self.focus_lane.min(lane_count - 1);
        let card_count = self.focused_lane_id()
            .and_then(|lane_id| self.board.lane(&lane_id))
            .map(|lane| lane.events().len())
            .unwrap_or(0);
        self.focus_card = self.focus_card.min(card_count.saturating_sub(1));
    }

    fn focused_lane_id(&self) -> Option<LaneId> {
        self.board.lane_order().get(self.focus_lane).cloned()
    }

    fn focused_event(&self) -> Option<(LaneId, EventId)> {
        let lane_id = self.focused_lane_id()?;
        let lane = self.board.lane(&lane_id)?;
        let event = lane.events().get(self.focus_card)?;
        Some((lane_id, event.event_id().clone()))
    }

    // ---- pointer flow -----------------------------------------------------

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.mode != Mode::Normal {
            return;
        }
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(p) = self.surface_point(mouse.column, mouse.row) {
                    if self.gesture.track_cursor(p) {
                        self.refresh_surface();
                    }
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(mouse.column, mouse.row);
            }
            MouseEventKind::ScrollDown => {
                self.board_scroll_y = self.board_scroll_y.saturating_add(2);
            }
            MouseEventKind::ScrollUp => {
                self.board_scroll_y = self.board_scroll_y.saturating_sub(2);
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        let Some(p) = self.surface_point(column, row) else {
            // Click outside the board surface abandons any live gesture.
            self.gesture.cancel();
            return;
        };

        if let Some((anchor, lane_id)) = self.layout.anchor_at(p) {
            if self.gesture.is_idle() {
                self.mode = Mode::KindPicker { source: anchor, source_lane: lane_id, selected: 0 };
            } else {
                self.complete_link(anchor, lane_id);
            }
            return;
        }

        if self.gesture.is_idle() {
            if let Some(connection_id) = hit_test(&self.segments, p).cloned() {
                self.mode = Mode::ConfirmDeleteLink { connection_id };
                return;
            }
            self.focus_card_at(p);
        } else {
            self.gesture.cancel();
            self.refresh_surface();
        }
    }

    /// Offers `anchor` to the armed gesture and applies the committed draft.
    fn complete_link(&mut self, anchor: AnchorRef, lane_id: LaneId) {
        match self.gesture.select_target(anchor, lane_id) {
            SelectOutcome::Committed(draft) => {
                let connection_id = self.board.mint_connection_id();
                let kind = draft.kind;
                let result = self.apply(vec![Op::Link(LinkOp::Add {
                    connection_id,
                    source: draft.source,
                    target: draft.target,
                    source_lane: draft.source_lane,
                    target_lane: draft.target_lane,
                    kind,
                })]);
                if result.is_some() {
                    self.set_toast(format!("Link added ({kind})"));
                }
                self.refresh_surface();
            }
            // Self-links are rejected without feedback; the gesture stays
            // armed awaiting a valid target.
            SelectOutcome::SelfLink => {}
            SelectOutcome::NotArmed => {}
        }
    }

    fn surface_point(&self, column: u16, row: u16) -> Option<Point> {
        let inner = self.board_inner;
        if column < inner.x
            || row < inner.y
            || column >= inner.x + inner.width
            || row >= inner.y + inner.height
        {
            return None;
        }
        Some(Point::new(
            i32::from(column - inner.x),
            i32::from(row - inner.y) + i32::from(self.board_scroll_y),
        ))
    }

    fn focus_card_at(&mut self, p: Point) {
        for (lane_id, event_id, rect) in self.layout.surface_cards() {
            if rect.contains(p) {
                if let Some(lane_pos) = self.board.lane_position(lane_id) {
                    if let Some(card_pos) =
                        self.board.lane(lane_id).and_then(|lane| lane.event_index(event_id))
                    {
                        self.focus_lane = lane_pos;
                        self.focus_card = card_pos;
                    }
                }
                return;
            }
        }
    }

    // ---- keyboard flow ----------------------------------------------------

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        match std::mem::replace(&mut self.mode, Mode::Normal) {
            Mode::Normal => return self.handle_normal_key(code),
            Mode::LaneNameInput { buffer, rename_of } => {
                self.handle_lane_input_key(code, buffer, rename_of)
            }
            Mode::EventEdit { event_id, fields, field } => {
                self.handle_event_edit_key(code, event_id, fields, field)
            }
            Mode::KindPicker { source, source_lane, selected } => {
                self.handle_kind_picker_key(code, source, source_lane, selected)
            }
            Mode::ConfirmDeleteLink { connection_id } => {
                self.handle_confirm_delete_key(code, connection_id)
            }
        }
        false
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc => {
                if self.gesture.cancel() {
                    self.refresh_surface();
                }
            }
            KeyCode::Char('a') => {
                self.mode = Mode::LaneNameInput { buffer: String::new(), rename_of: None };
            }
            KeyCode::Char('r') => {
                if let Some(lane_id) = self.focused_lane_id() {
                    let buffer = self
                        .board
                        .lane(&lane_id)
                        .map(|lane| lane.name().to_owned())
                        .unwrap_or_default();
                    self.mode = Mode::LaneNameInput { buffer, rename_of: Some(lane_id) };
                }
            }
            KeyCode::Char('e') => self.add_event_to_focused_lane(),
            KeyCode::Char('d') => self.delete_focused_event(),
            KeyCode::Char('X') => self.delete_focused_lane(),
            KeyCode::Char('c') => {
                if let Some((lane_id, event_id)) = self.focused_event() {
                    self.mode = Mode::KindPicker {
                        source: AnchorRef::new(event_id, AnchorSide::Right),
                        source_lane: lane_id,
                        selected: 0,
                    };
                }
            }
            KeyCode::Enter => {
                if self.gesture.is_idle() {
                    self.open_event_editor();
                } else {
                    self.link_to_focused_card();
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.focus_card = self.focus_card.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.focus_card += 1;
                self.clamp_focus();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.focus_lane = self.focus_lane.saturating_sub(1);
                self.clamp_focus();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.focus_lane += 1;
                self.clamp_focus();
            }
            KeyCode::Char('[') => self.scroll_focused_lane(-(CARD_WIDTH + CARD_GAP)),
            KeyCode::Char(']') => self.scroll_focused_lane(CARD_WIDTH + CARD_GAP),
            KeyCode::PageUp => self.board_scroll_y = self.board_scroll_y.saturating_sub(5),
            KeyCode::PageDown => self.board_scroll_y = self.board_scroll_y.saturating_add(5),
            _ => {}
        }
        false
    }

    fn handle_lane_input_key(
        &mut self,
        code: KeyCode,
        mut buffer: String,
        rename_of: Option<LaneId>,
    ) {
        match code {
            KeyCode::Esc => {}
            KeyCode::Enter => {
                if buffer.trim().is_empty() {
                    self.set_toast("Please enter a lane name");
                    self.mode = Mode::LaneNameInput { buffer, rename_of };
                    return;
                }
                match rename_of {
                    Some(lane_id) => {
                        if self
                            .apply(vec![Op::Lane(LaneOp::Rename { lane_id, name: buffer })])
                            .is_some()
                        {
                            self.set_toast("Lane renamed");
                        }
                    }
                    None => {
                        let lane_id = self.board.mint_lane_id();
                        if self
                            .apply(vec![Op::Lane(LaneOp::Add { lane_id, name: buffer })])
                            .is_some()
                        {
                            self.set_toast("Lane added");
                        }
                    }
                }
            }
            KeyCode::Backspace => {
                buffer.pop();
                self.mode = Mode::LaneNameInput { buffer, rename_of };
            }
            KeyCode::Char(ch) => {
                buffer.push(ch);
                self.mode = Mode::LaneNameInput { buffer, rename_of };
            }
            _ => self.mode = Mode::LaneNameInput { buffer, rename_of },
        }
    }

    fn handle_event_edit_key(
        &mut self,
        code: KeyCode,
        event_id: EventId,
        mut fields: [String; 4],
        mut field: usize,
    ) {
        match code {
            KeyCode::Esc => {}
            KeyCode::Enter => {
                let [title, time, description, kind] = fields;
                let patch = EventPatch {
                    title: Some(title),
                    time: Some(time),
                    description: Some(description),
                    kind: Some(kind),
                };
                if self.apply(vec![Op::Event(EventOp::Update { event_id, patch })]).is_some() {
                    self.set_toast("Event updated");
                }
            }
            KeyCode::Tab | KeyCode::Down => {
                field = (field + 1) % fields.len();
                self.mode = Mode::EventEdit { event_id, fields, field };
            }
            KeyCode::BackTab | KeyCode::Up => {
                field = (field + fields.len() - 1) % fields.len();
                self.mode = Mode::EventEdit { event_id, fields, field };
            }
            KeyCode::Backspace => {
                fields[field].pop();
                self.mode = Mode::EventEdit { event_id, fields, field };
            }
            KeyCode::Char(ch) => {
                fields[field].push(ch);
                self.mode = Mode::EventEdit { event_id, fields, field };
            }
            _ => self.mode = Mode::EventEdit { event_id, fields, field },
        }
    }

    fn handle_kind_picker_key(
        &mut self,
        code: KeyCode,
        source: AnchorRef,
        source_lane: LaneId,
        mut selected: usize,
    ) {
        match code {
            KeyCode::Esc => {}
            KeyCode::Enter => {
                let kind = LinkKind::ALL[selected];
                self.gesture.begin_pending(source, source_lane, kind);
                self.refresh_surface();
                self.set_toast("Pick a target anchor (Esc cancels)");
            }
            KeyCode::Up | KeyCode::Char('k') => {
                selected = (selected + LinkKind::ALL.len() - 1) % LinkKind::ALL.len();
                self.mode = Mode::KindPicker { source, source_lane, selected };
            }
            KeyCode::Down | KeyCode::Char('j') => {
                selected = (selected + 1) % LinkKind::ALL.len();
                self.mode = Mode::KindPicker { source, source_lane, selected };
            }
            _ => self.mode = Mode::KindPicker { source, source_lane, selected },
        }
    }

    fn handle_confirm_delete_key(&mut self, code: KeyCode, connection_id: ConnectionId) {
        match code {
            KeyCode::Char('y') | KeyCode::Enter => {
                if self.apply(vec![Op::Link(LinkOp::Remove { connection_id })]).is_some() {
                    self.set_toast("Link deleted");
                }
                self.refresh_surface();
            }
            _ => {}
        }
    }

    // ---- CRUD chrome ------------------------------------------------------

    fn add_event_to_focused_lane(&mut self) {
        let Some(lane_id) = self.focused_lane_id() else {
            self.set_toast("Add a lane first");
            return;
        };
        let event_id = self.board.mint_event_id();
        let op = Op::Event(EventOp::Add {
            lane_id,
            event_id,
            title: String::new(),
            time: String::new(),
            description: String::new(),
            kind: DEFAULT_EVENT_KIND.to_owned(),
        });
        if self.apply(vec![op]).is_some() {
            self.set_toast("Event added");
        }
    }

    fn open_event_editor(&mut self) {
        let Some((lane_id, event_id)) = self.focused_event() else {
            return;
        };
        let Some(event) = self.board.lane(&lane_id).and_then(|lane| lane.event(&event_id)) else {
            return;
        };
        let fields = [
            event.title().to_owned(),
            event.time().to_owned(),
            event.description().to_owned(),
            event.kind().to_owned(),
        ];
        self.mode = Mode::EventEdit { event_id, fields, field: 0 };
    }

    fn delete_focused_event(&mut self) {
        let Some((_, event_id)) = self.focused_event() else {
            return;
        };
        if let Some(result) = self.apply(vec![Op::Event(EventOp::Remove { event_id })]) {
            let cascaded = result
                .delta
                .removed
                .iter()
                .filter(|entity| matches!(entity, crate::ops::EntityRef::Link { .. }))
                .count();
            if cascaded > 0 {
                self.set_toast(format!("Event deleted ({cascaded} links removed)"));
            } else {
                self.set_toast("Event deleted");
            }
            self.refresh_surface();
        }
    }

    fn delete_focused_lane(&mut self) {
        let Some(lane_id) = self.focused_lane_id() else {
            return;
        };
        if self.apply(vec![Op::Lane(LaneOp::Remove { lane_id })]).is_some() {
            self.set_toast("Lane deleted");
            self.refresh_surface();
        }
    }

    /// Keyboard commit path: feed the focused card's left anchor through the
    /// same pointer contract the mouse uses.
    fn link_to_focused_card(&mut self) {
        let Some((lane_id, event_id)) = self.focused_event() else {
            return;
        };
        let anchor = AnchorRef::new(event_id, AnchorSide::Left);
        if let Some(rect) = self.layout.surface_card_rect(&lane_id, anchor.event_id()) {
            self.gesture.track_cursor(crate::layout::anchor_point(rect, anchor.side()));
        }
        self.complete_link(anchor, lane_id);
    }

    fn scroll_focused_lane(&mut self, delta: i32) {
        let Some(lane_id) = self.focused_lane_id() else {
            return;
        };
        let entry = self.lane_scrolls.entry(lane_id).or_insert(0);
        *entry = (*entry + delta).max(0);
        self.refresh_surface();
    }
}

// ---- drawing --------------------------------------------------------------

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let board_area = rows[0];
    let status_area = rows[1];

    let linking = !app.gesture.is_idle();
    let title = format!(" Board — {} ", app.board.board_id());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(app.theme.panel_border_style(linking));
    app.board_inner = block.inner(board_area);
    app.refresh_surface();
    clamp_board_scroll(app);

    let options = SurfaceOptions {
        show_anchors: linking,
        source_anchor: app.gesture.source().map(|(anchor, _)| anchor.clone()),
    };
    let text = match render_surface(
        &app.board,
        &app.layout,
        &app.segments,
        usize::from(app.board_inner.width.max(1)),
        &options,
    ) {
        Ok(canvas) => canvas.to_lines().join("\n"),
        Err(err) => format!("render failed: {err}"),
    };
    let style = if linking { app.theme.linking_style() } else { app.theme.base_style() };
    let board = Paragraph::new(text)
        .style(style)
        .block(block)
        .scroll((app.board_scroll_y, 0));
    frame.render_widget(board, board_area);

    draw_focus_marker(frame, app);
    draw_modal(frame, app, area);
    draw_status(frame, app, status_area);
}

/// Marks the focused card's top-left border cell so keyboard flows have a
/// visible cursor without restyling the whole canvas.
fn draw_focus_marker(frame: &mut Frame<'_>, app: &App) {
    let Some((lane_id, event_id)) = app.focused_event() else {
        return;
    };
    let Some(rect) = app.layout.surface_card_rect(&lane_id, &event_id) else {
        return;
    };
    let x = app.board_inner.x as i32 + rect.x;
    let y = app.board_inner.y as i32 + rect.y - i32::from(app.board_scroll_y);
    if x < i32::from(app.board_inner.x)
        || y < i32::from(app.board_inner.y)
        || x >= i32::from(app.board_inner.x + app.board_inner.width)
        || y >= i32::from(app.board_inner.y + app.board_inner.height)
    {
        return;
    }
    let marker = Paragraph::new("◆").style(app.theme.focus_card_style());
    frame.render_widget(marker, Rect::new(x as u16, y as u16, 1, 1));
}

fn draw_modal(frame: &mut Frame<'_>, app: &App, area: Rect) {
    match &app.mode {
        Mode::Normal => {}
        Mode::LaneNameInput { buffer, rename_of } => {
            let title = if rename_of.is_some() { " Rename lane " } else { " Add lane " };
            let body = format!("Name: {buffer}▏");
            draw_dialog(frame, app, area, title, &[body], 40);
        }
        Mode::EventEdit { fields, field, .. } => {
            let lines: Vec<String> = EDIT_FIELD_LABELS
                .iter()
                .enumerate()
                .map(|(idx, label)| {
                    let cursor = if idx == *field { "▏" } else { "" };
                    let marker = if idx == *field { "▸" } else { " " };
                    format!("{marker} {label}: {}{cursor}", fields[idx])
                })
                .collect();
            draw_dialog(frame, app, area, " Edit event ", &lines, 48);
        }
        Mode::KindPicker { selected, .. } => {
            let lines: Vec<String> = LinkKind::ALL
                .iter()
                .enumerate()
                .map(|(idx, kind)| {
                    let marker = if idx == *selected { "▸" } else { " " };
                    format!("{marker} {kind}")
                })
                .collect();
            draw_dialog(frame, app, area, " Link kind ", &lines, 32);
        }
        Mode::ConfirmDeleteLink { connection_id } => {
            let description = app
                .board
                .links()
                .get(connection_id)
                .map(|connection| {
                    format!(
                        "{} → {} ({})",
                        connection.source(),
                        connection.target(),
                        connection.kind()
                    )
                })
                .unwrap_or_else(|| connection_id.to_string());
            let lines = [format!("Delete link {description}?"), "y: delete · Esc: keep".to_owned()];
            draw_dialog(frame, app, area, " Delete link ", &lines, 56);
        }
    }
}

fn draw_dialog(
    frame: &mut Frame<'_>,
    app: &App,
    area: Rect,
    title: &str,
    lines: &[impl AsRef<str>],
    min_width: u16,
) {
    let height = lines.len() as u16 + 2;
    let width = min_width.min(area.width);
    let popup = centered_rect(area, width, height);

    let text = lines.iter().map(|line| Line::raw(line.as_ref().to_owned())).collect::<Vec<_>>();
    let dialog = Paragraph::new(text).style(app.theme.dialog_style()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_owned())
            .border_style(app.theme.selection_style()),
    );
    frame.render_widget(Clear, popup);
    frame.render_widget(dialog, popup);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn draw_status(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let toast_snapshot = app.toast.as_ref().map(|toast| (toast.message.clone(), toast.expires_at));
    let toast_suffix = match toast_snapshot {
        Some((_, expires_at)) if expires_at <= Instant::now() => {
            app.toast = None;
            None
        }
        Some((message, _)) => Some(message),
        None => None,
    };

    let hints: &[(&str, &str)] = if !app.gesture.is_idle() {
        &[("click anchor", "finish link"), ("Enter", "link focused card"), ("Esc", "cancel")]
    } else {
        &[
            ("a", "lane"),
            ("e", "event"),
            ("c/click ○", "link"),
            ("Enter", "edit"),
            ("d", "delete"),
            ("q", "quit"),
        ]
    };

    let mut spans = Vec::new();
    for (idx, (key, label)) in hints.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" · ", app.theme.footer_label_style()));
        }
        spans.push(Span::styled(*key, app.theme.footer_key_style()));
        spans.push(Span::styled(format!(" {label}"), app.theme.footer_label_style()));
    }
    if let Some(message) = toast_suffix {
        spans.push(Span::styled("  ", app.theme.footer_label_style()));
        let style = if message.starts_with("Please")
            || message.contains("failed")
            || message.contains("not found")
        {
            app.theme.error_style()
        } else {
            app.theme.toast_style()
        };
        spans.push(Span::styled(message, style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn clamp_board_scroll(app: &mut App) {
    let surface_height = BoardLayout::surface_height(app.board.lane_count()).max(0) as u16;
    let viewport = app.board_inner.height;
    let max_scroll = surface_height.saturating_sub(viewport);
    app.board_scroll_y = app.board_scroll_y.min(max_scroll);
}

// ---- demo -----------------------------------------------------------------

/// Built-in demo board with two cross-lane links, used by `--demo`.
pub fn demo_board() -> Board {
    fn lid(value: &str) -> LaneId {
        LaneId::new(value).expect("lane id")
    }
    fn eid(value: &str) -> EventId {
        EventId::new(value).expect("event id")
    }

    let mut board = Board::new(BoardId::new("b:demo").expect("board id"));

    let mut camera = Lane::new(lid("l:camera"), "Camera");
    camera.events_mut().push(TimelineEvent::new_with(
        eid("ev:wide"),
        "Wide shot",
        "09:00",
        "establishing",
        "camera",
    ));
    camera.events_mut().push(TimelineEvent::new_with(
        eid("ev:close"),
        "Close-up",
        "09:20",
        "reaction",
        "camera",
    ));

    let mut audio = Lane::new(lid("l:audio"), "Audio");
    audio.events_mut().push(TimelineEvent::new_with(
        eid("ev:boom"),
        "Boom check",
        "09:05",
        "levels",
        "audio",
    ));

    let mut production = Lane::new(lid("l:prod"), "Production");
    production.events_mut().push(TimelineEvent::new_with(
        eid("ev:call"),
        "Call time",
        "08:30",
        "crew on set",
        "schedule",
    ));

    board.push_lane(camera);
    board.push_lane(audio);
    board.push_lane(production);

    let first = board.mint_connection_id();
    board.links_mut().add(crate::model::Connection::new(
        first,
        AnchorRef::new(eid("ev:wide"), AnchorSide::Bottom),
        AnchorRef::new(eid("ev:boom"), AnchorSide::Top),
        lid("l:camera"),
        lid("l:audio"),
        LinkKind::ArrowDown,
    ));
    let second = board.mint_connection_id();
    board.links_mut().add(crate::model::Connection::new(
        second,
        AnchorRef::new(eid("ev:call"), AnchorSide::Top),
        AnchorRef::new(eid("ev:boom"), AnchorSide::Bottom),
        lid("l:prod"),
        lid("l:audio"),
        LinkKind::Dotted,
    ));

    board
}

// ---- terminal plumbing ----------------------------------------------------

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
}
