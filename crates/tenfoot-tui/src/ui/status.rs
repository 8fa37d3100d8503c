//! Status bar.
//!
//! Displays the active screen, history depth, and the last activation or
//! focus message.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::View;

/// Render the status bar.
pub fn render(frame: &mut Frame, view: &View<'_>, area: Rect) {
    let shell = view.shell;

    let screen = Span::styled(
        shell.active_screen().to_string(),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    );

    let depth = shell.router().history().len();
    let breadcrumbs = Span::styled(
        format!(" | back stack: {depth}"),
        Style::default().fg(Color::Gray),
    );

    let modal = if shell.modal_open() {
        Span::styled(" | MODAL", Style::default().fg(Color::Yellow))
    } else {
        Span::raw("")
    };

    let message = Span::styled(
        if view.status.is_empty() { String::new() } else { format!(" | {}", view.status) },
        Style::default().fg(Color::Gray),
    );

    let status_line = Line::from(vec![Span::raw(" "), screen, breadcrumbs, modal, message]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
