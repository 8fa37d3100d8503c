//! Shell side-effects and intents.
//!
//! This module defines the [`ShellAction`] enum, the instructions produced by
//! the [`crate::Shell`] state machine for the host to execute. The core never
//! performs these effects itself; it only decides them.

use crate::{screen::ScreenId, surface::ElementId};

/// Actions produced by the shell state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    /// Redraw the UI.
    Render,

    /// Focus moved to this element.
    FocusChanged {
        /// Newly focused element.
        element: ElementId,
    },

    /// Nudge the viewport so this element is fully visible, horizontally
    /// within its row and vertically within the page.
    ScrollIntoView {
        /// Element to bring into view.
        element: ElementId,
    },

    /// Activate the focused element. Interpretation is delegated to the
    /// owning screen.
    Activate {
        /// Element being activated.
        element: ElementId,
    },

    /// The active screen changed.
    ScreenChanged {
        /// Newly active screen.
        screen: ScreenId,
        /// Screen that was active before, if any.
        previous: Option<ScreenId>,
    },

    /// Close the currently open modal overlay.
    CloseModal,

    /// The back key was unhandled on the home screen; the host should exit.
    Quit,
}
