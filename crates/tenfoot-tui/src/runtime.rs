//! Async runtime.
//!
//! Event loop that drives terminal I/O and feeds key presses into the
//! navigation shell. Uses `tokio::select!` over the crossterm event stream
//! and a periodic tick so resize redraws and log flushing stay responsive.

use std::io::{self, Stdout, stdout};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tenfoot_core::{ElementId, FocusableSurface, Rect, Shell, ShellAction, scroll_adjustment};
use thiserror::Error;

use crate::{
    input, screens,
    ui::{self, VIEW_HEIGHT, VIEW_WIDTH},
};

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Async runtime for the demo host.
///
/// Manages terminal setup/teardown and the main event loop. All navigation
/// state lives in the [`Shell`]; the runtime only keeps presentation state
/// the shell does not own, the scroll offset and the status message.
pub struct Runtime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    shell: Shell<screens::CardSurface>,
    tick_ms: u64,
    scroll: (f32, f32),
    status: String,
}

impl Runtime {
    /// Create a new runtime over the demo screen catalog.
    pub fn new(tick_ms: u64) -> Result<Self, RuntimeError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let shell = screens::demo_shell();

        Ok(Self { terminal, shell, tick_ms, scroll: (0.0, 0.0), status: String::new() })
    }

    /// Run the main event loop until the shell quits.
    pub async fn run(mut self) -> Result<(), RuntimeError> {
        let actions = self.shell.start();
        if self.process_actions(actions)? {
            return Ok(());
        }

        let mut event_stream = EventStream::new();
        let mut tick_interval =
            tokio::time::interval(std::time::Duration::from_millis(self.tick_ms));

        loop {
            let should_quit = tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_terminal_event(event)?,
                        Some(Err(e)) => return Err(RuntimeError::Io(e)),
                        None => true,
                    }
                }

                _ = tick_interval.tick() => {
                    self.render()?;
                    false
                }
            };

            if should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle a terminal event and return whether to quit.
    fn handle_terminal_event(&mut self, event: Event) -> Result<bool, RuntimeError> {
        let shell_event = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match input::convert_key(key.code) {
                    Some(shell_event) => shell_event,
                    None => return Ok(false),
                }
            },
            Event::Resize(..) => {
                self.render()?;
                return Ok(false);
            },
            _ => return Ok(false),
        };

        let actions = self.shell.handle(shell_event);
        self.process_actions(actions)
    }

    /// Process actions returned by the shell. Returns true if should quit.
    fn process_actions(&mut self, actions: Vec<ShellAction>) -> Result<bool, RuntimeError> {
        for action in actions {
            match action {
                ShellAction::Render => self.render()?,
                ShellAction::Quit => return Ok(true),
                ShellAction::FocusChanged { element } => {
                    let label = self.shell.surface().label(element).map(ToString::to_string);
                    if let Some(label) = label {
                        self.status = label;
                    }
                },
                ShellAction::ScrollIntoView { element } => self.scroll_to(element),
                ShellAction::Activate { element } => {
                    let label = self
                        .shell
                        .surface()
                        .label(element)
                        .map_or_else(|| element.to_string(), ToString::to_string);
                    self.status = format!("Activated {label}");
                },
                ShellAction::ScreenChanged { .. } => self.scroll = (0.0, 0.0),
                ShellAction::CloseModal => self.status = "Modal closed".to_string(),
            }
        }
        Ok(false)
    }

    /// Nudge the scroll offset so `element` sits inside the viewport.
    fn scroll_to(&mut self, element: ElementId) {
        let screen = self.shell.active_screen();
        let Some(target) = self
            .shell
            .surface()
            .focusables(screen)
            .into_iter()
            .find(|e| e.id == element)
            .map(|e| e.bounds)
        else {
            return;
        };

        let viewport = Rect::new(self.scroll.1, self.scroll.0, VIEW_WIDTH, VIEW_HEIGHT);
        let (dx, dy) = scroll_adjustment(viewport, target);
        self.scroll.0 += dx;
        self.scroll.1 += dy;
    }

    /// Render the UI.
    fn render(&mut self) -> Result<(), RuntimeError> {
        let view = ui::View {
            shell: &self.shell,
            scroll: self.scroll,
            status: &self.status,
        };
        self.terminal.draw(|frame| {
            ui::render(frame, &view);
        })?;
        Ok(())
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
