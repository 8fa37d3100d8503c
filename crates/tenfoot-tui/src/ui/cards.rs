//! Card grid.
//!
//! Displays the active screen's card rails with the focused card
//! highlighted. Rails scroll horizontally; the abstract-pixel scroll
//! offset from the runtime decides which cards are visible.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tenfoot_core::{FocusableElement, RowId};

use super::{VIEW_HEIGHT, VIEW_WIDTH, View};

/// Render the card grid for the active screen.
pub fn render(frame: &mut Frame, view: &View<'_>, area: Rect) {
    let screen = view.shell.active_screen();
    let focused = view.shell.focused();
    let (scroll_x, scroll_y) = view.scroll;

    let mut lines = Vec::new();
    for rail in rails(view) {
        let Some((first, _, _)) = rail.first() else {
            continue;
        };
        if first.bounds.bottom() <= scroll_y || first.bounds.top >= scroll_y + VIEW_HEIGHT {
            continue;
        }

        let mut spans = vec![Span::raw(" ")];
        for (element, _, label) in &rail {
            if element.bounds.right() <= scroll_x
                || element.bounds.left >= scroll_x + VIEW_WIDTH
            {
                continue;
            }

            let style = if focused == Some(element.id) {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if !element.focusable() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };

            spans.push(Span::styled(format!("[ {label} ]"), style));
            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans));
        lines.push(Line::raw(""));
    }

    if lines.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::raw("  (no focusable content)"));
    }

    let block = Block::default().borders(Borders::ALL).title(format!(" {screen} "));
    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(paragraph, area);
}

/// Group the active screen's cards into rails.
///
/// Consecutive cards sharing a row form one rail; each rowless element is
/// a rail of its own, which renders the settings and player columns one
/// entry per line.
fn rails<'a>(view: &'a View<'_>) -> Vec<Vec<(FocusableElement, Option<RowId>, &'a str)>> {
    let cards = view.shell.surface().cards(view.shell.active_screen());

    let mut rails: Vec<Vec<(FocusableElement, Option<RowId>, &str)>> = Vec::new();
    for card in cards {
        let same_row = card.1.is_some()
            && rails.last().and_then(|rail| rail.last()).is_some_and(|(_, r, _)| *r == card.1);
        match rails.last_mut() {
            Some(rail) if same_row => rail.push(card),
            _ => rails.push(vec![card]),
        }
    }
    rails
}
