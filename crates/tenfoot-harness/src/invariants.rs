//! Invariant checking for the shell state machines.
//!
//! Invariants are properties that must always hold, whatever sequence of
//! events the shell processed. The harness extracts observable state into a
//! [`ShellSnapshot`], then runs registered [`Invariant`] checks against it;
//! violations carry enough context to debug the offending sequence.

use tenfoot_core::{ElementId, FocusEngine, FocusableSurface, HISTORY_CAPACITY, ScreenId, Shell};

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Invariant violation with context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// Name of the violated invariant.
    pub invariant: &'static str,
    /// Description of what went wrong.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// Observable shell state extracted for invariant checking.
#[derive(Debug, Clone)]
pub struct ShellSnapshot {
    /// Active screen id.
    pub active: ScreenId,
    /// Previous screen id, if any transition happened.
    pub previous: Option<ScreenId>,
    /// History entries oldest-first.
    pub history: Vec<ScreenId>,
    /// Focused element, if any.
    pub focused: Option<ElementId>,
    /// Focused element is among the active screen's visible+enabled
    /// candidates.
    pub focused_is_candidate: bool,
    /// Active screen has a registered module.
    pub active_registered: bool,
}

/// Extract a snapshot from a shell.
pub fn snapshot<S: FocusableSurface>(shell: &Shell<S>) -> ShellSnapshot {
    let active = shell.active_screen();
    let focused = shell.focused();
    let focused_is_candidate = focused.is_some_and(|id| {
        FocusEngine::candidates(shell.surface(), active).iter().any(|e| e.id == id)
    });

    ShellSnapshot {
        active,
        previous: shell.router().previous(),
        history: shell.router().history().iter().collect(),
        focused,
        focused_is_candidate,
        active_registered: shell.router().is_registered(active),
    }
}

/// An invariant that can be checked against shell state.
///
/// Invariants capture WHAT must be true, not specific test scenarios.
pub trait Invariant: Send + Sync {
    /// Invariant name for error reporting.
    fn name(&self) -> &'static str;

    /// Check the invariant against the current state.
    fn check(&self, state: &ShellSnapshot) -> InvariantResult;
}

/// Focus, when present, rests on a visible+enabled candidate of the active
/// screen.
pub struct FocusIsCandidate;

impl Invariant for FocusIsCandidate {
    fn name(&self) -> &'static str {
        "focus_is_candidate"
    }

    fn check(&self, state: &ShellSnapshot) -> InvariantResult {
        match state.focused {
            Some(element) if !state.focused_is_candidate => Err(Violation {
                invariant: self.name(),
                message: format!(
                    "focused element {element} is not a candidate on screen {}",
                    state.active
                ),
            }),
            _ => Ok(()),
        }
    }
}

/// History never exceeds its capacity.
pub struct HistoryBounded;

impl Invariant for HistoryBounded {
    fn name(&self) -> &'static str {
        "history_bounded"
    }

    fn check(&self, state: &ShellSnapshot) -> InvariantResult {
        if state.history.len() > HISTORY_CAPACITY {
            return Err(Violation {
                invariant: self.name(),
                message: format!(
                    "history holds {} entries, capacity is {HISTORY_CAPACITY}",
                    state.history.len()
                ),
            });
        }
        Ok(())
    }
}

/// The active screen is never duplicated at the top of history.
pub struct NoImmediateDuplicate;

impl Invariant for NoImmediateDuplicate {
    fn name(&self) -> &'static str {
        "no_immediate_duplicate"
    }

    fn check(&self, state: &ShellSnapshot) -> InvariantResult {
        if state.history.last() == Some(&state.active) {
            return Err(Violation {
                invariant: self.name(),
                message: format!("active screen {} sits at the top of history", state.active),
            });
        }
        Ok(())
    }
}

/// The active screen always has a registered module.
pub struct ActiveIsRegistered;

impl Invariant for ActiveIsRegistered {
    fn name(&self) -> &'static str {
        "active_is_registered"
    }

    fn check(&self, state: &ShellSnapshot) -> InvariantResult {
        if !state.active_registered {
            return Err(Violation {
                invariant: self.name(),
                message: format!("active screen {} has no registered module", state.active),
            });
        }
        Ok(())
    }
}

/// Registry of invariants to check.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Create a registry with the standard shell invariants.
    ///
    /// Includes:
    /// - [`FocusIsCandidate`]: focus rests on a valid candidate
    /// - [`HistoryBounded`]: history stays within capacity
    /// - [`NoImmediateDuplicate`]: history top differs from the active screen
    /// - [`ActiveIsRegistered`]: the active screen has a module
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(FocusIsCandidate);
        registry.add(HistoryBounded);
        registry.add(NoImmediateDuplicate);
        registry.add(ActiveIsRegistered);
        registry
    }

    /// Add an invariant to the registry.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Check all invariants against the given state.
    ///
    /// Returns `Ok(())` when all invariants hold, or every violation found.
    pub fn check_all(&self, state: &ShellSnapshot) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(state).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}
