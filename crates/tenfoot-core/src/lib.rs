//! Core state machines for a remote-control television shell.
//!
//! Pure, synchronous state machines for directional focus navigation and
//! screen routing, completely decoupled from rendering and platform I/O.
//! Hosts deliver one input event at a time and execute the returned actions.
//!
//! # Components
//!
//! - [`FocusEngine`]: directional focus over a [`FocusableSurface`]
//! - [`NavigationRouter`]: active-screen state machine with bounded history
//!   and contextual back-key handling
//! - [`Shell`]: glue state machine consuming [`ShellEvent`] inputs and
//!   producing [`ShellAction`] instructions for the host

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod event;
mod focus;
mod geometry;
mod history;
mod route;
mod router;
mod screen;
mod shell;
mod surface;

pub use action::ShellAction;
pub use event::{Direction, ShellEvent};
pub use focus::{FocusEngine, FocusState};
pub use geometry::{Rect, scroll_adjustment};
pub use history::{HISTORY_CAPACITY, NavigationHistory};
pub use route::RouteTable;
pub use router::{BackOutcome, NavigationRouter, RouterConfig, RouterState};
pub use screen::{ModuleCapabilities, ScreenError, ScreenId, ScreenModule};
pub use shell::Shell;
pub use surface::{ElementId, FocusableElement, FocusableSurface, RowId};
