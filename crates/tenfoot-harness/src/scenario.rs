//! Scenario driver.
//!
//! Feeds an event sequence through a shell and re-checks the standard
//! invariants after every single event, so a violating step is caught at the
//! step that introduced it rather than at the end of the sequence.

use tenfoot_core::{FocusableSurface, Shell, ShellAction, ShellEvent};
use tracing::debug;

use crate::invariants::{InvariantRegistry, Violation, snapshot};

/// Drive `events` through `shell`, checking invariants after each one.
///
/// Returns every action the shell produced, or the violations of the first
/// offending step.
pub fn drive_checked<S: FocusableSurface>(
    shell: &mut Shell<S>,
    events: impl IntoIterator<Item = ShellEvent>,
) -> Result<Vec<ShellAction>, Vec<Violation>> {
    let registry = InvariantRegistry::standard();
    let mut actions = Vec::new();

    for event in events {
        debug!(?event, "scenario step");
        actions.extend(shell.handle(event));
        registry.check_all(&snapshot(shell))?;
    }

    Ok(actions)
}
