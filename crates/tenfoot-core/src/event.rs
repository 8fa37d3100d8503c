//! Host input events.
//!
//! This module defines [`ShellEvent`], the set of inputs that drive the
//! [`crate::Shell`] state machine. Events originate from the host: decoded
//! remote-control keys, explicit route requests, and notifications about
//! external UI state (modal overlays, re-rendered content).

/// Directional input from the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Move focus up.
    Up,
    /// Move focus down.
    Down,
    /// Move focus left.
    Left,
    /// Move focus right.
    Right,
}

/// Events processed by the shell state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// Directional key press.
    Direction(Direction),

    /// Select/OK key press.
    Select,

    /// Hardware back key press.
    Back,

    /// Explicit navigation request.
    NavigateTo {
        /// Route key to resolve through the route table.
        route: String,
    },

    /// The host opened a modal overlay.
    ModalOpened,

    /// The host closed its modal overlay.
    ModalClosed,

    /// The active screen's content re-rendered; focus must be re-validated.
    ///
    /// Screen modules send this once an asynchronous content load has
    /// actually rendered, which may be well after `load` returned.
    SurfaceChanged,
}
