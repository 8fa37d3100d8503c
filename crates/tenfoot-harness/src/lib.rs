//! Deterministic test harness for the tenfoot shell.
//!
//! In-memory doubles for the production seams ([`GridSurface`] for the
//! focusable surface, [`RecordingModule`] for screen modules) plus invariant
//! checking over shell state snapshots.
//!
//! # Invariant Testing
//!
//! The `invariants` module verifies behavioral properties across all
//! execution paths, not specific scenarios. Use
//! [`InvariantRegistry::standard()`] for the common shell invariants and
//! [`scenario::drive_checked`] to feed an event sequence through a shell
//! with the invariants re-checked after every step.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod invariants;
pub mod modules;
pub mod scenario;
pub mod surface;

pub use invariants::{
    ActiveIsRegistered, FocusIsCandidate, HistoryBounded, Invariant, InvariantRegistry,
    InvariantResult, NoImmediateDuplicate, ShellSnapshot, Violation, snapshot,
};
pub use modules::{ModuleProbe, RecordingModule};
pub use scenario::drive_checked;
pub use surface::GridSurface;
