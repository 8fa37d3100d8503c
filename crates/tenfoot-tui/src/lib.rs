//! Terminal demo host for the tenfoot navigation shell.
//!
//! A thin shell over [`tenfoot_core::Shell`] that provides terminal-specific
//! I/O. All navigation logic lives in `tenfoot-core`; this crate only
//! translates key presses into shell events and renders the resulting state.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod input;
pub mod runtime;
pub mod screens;
pub mod ui;

pub use runtime::{Runtime, RuntimeError};
pub use screens::CardSurface;
