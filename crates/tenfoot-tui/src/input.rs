//! Key-to-event translation.
//!
//! Maps crossterm key presses onto remote-control semantics: arrows move
//! focus, Enter selects, Esc and Backspace are the back key, digits jump
//! straight to a route the way a deep link would.

use crossterm::event::KeyCode;
use tenfoot_core::{Direction, ShellEvent};

/// Translate a pressed key into a shell event.
///
/// Returns `None` for keys the demo does not bind.
pub fn convert_key(code: KeyCode) -> Option<ShellEvent> {
    match code {
        KeyCode::Up => Some(ShellEvent::Direction(Direction::Up)),
        KeyCode::Down => Some(ShellEvent::Direction(Direction::Down)),
        KeyCode::Left => Some(ShellEvent::Direction(Direction::Left)),
        KeyCode::Right => Some(ShellEvent::Direction(Direction::Right)),
        KeyCode::Enter => Some(ShellEvent::Select),
        KeyCode::Esc | KeyCode::Backspace => Some(ShellEvent::Back),
        KeyCode::Char(c) => convert_char(c),
        _ => None,
    }
}

fn convert_char(c: char) -> Option<ShellEvent> {
    let route = match c {
        '1' => "#/home",
        '2' => "#/discover",
        '3' => "#/library",
        '4' => "#/search",
        '5' => "#/settings",
        '6' => "#/player",
        // Deliberately unregistered, demonstrates the home fallback.
        'u' => "#/nowhere",
        'm' => return Some(ShellEvent::ModalOpened),
        _ => return None,
    };
    Some(ShellEvent::NavigateTo { route: route.to_string() })
}
