//! UI rendering.
//!
//! Rendering functions that convert shell state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking a [`View`] of
//! the current state and drawing widgets into the frame.

mod cards;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};
use tenfoot_core::Shell;

use crate::screens::CardSurface;

/// Abstract-pixel viewport the card grid is clipped to.
pub(crate) const VIEW_WIDTH: f32 = 720.0;
pub(crate) const VIEW_HEIGHT: f32 = 330.0;

/// Read-only snapshot of everything the renderer needs.
pub struct View<'a> {
    /// The navigation shell being displayed.
    pub shell: &'a Shell<CardSurface>,
    /// Current scroll offset in abstract pixels, `(x, y)`.
    pub scroll: (f32, f32),
    /// Status message from the last activation or focus change.
    pub status: &'a str,
}

/// Render the entire UI.
pub fn render(frame: &mut Frame, view: &View<'_>) {
    const MAIN_AREA_MIN_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(MAIN_AREA_MIN_HEIGHT), Constraint::Length(STATUS_HEIGHT)])
        .split(frame.area());

    let [main_area, status_area] = chunks.as_ref() else {
        return;
    };

    cards::render(frame, view, *main_area);
    status::render(frame, view, *status_area);

    if view.shell.modal_open() {
        render_modal(frame, *main_area);
    }
}

/// Render the modal overlay on top of the card grid.
fn render_modal(frame: &mut Frame, area: Rect) {
    const MODAL_WIDTH: u16 = 34;
    const MODAL_HEIGHT: u16 = 5;

    let width = MODAL_WIDTH.min(area.width);
    let height = MODAL_HEIGHT.min(area.height);
    let modal = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Options ")
        .style(Style::default().fg(Color::Yellow));
    let body = Paragraph::new(vec![Line::raw(""), Line::raw("  Esc closes this modal")]).block(block);

    frame.render_widget(Clear, modal);
    frame.render_widget(body, modal);
}
