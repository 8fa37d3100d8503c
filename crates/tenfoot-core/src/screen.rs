//! Screens and their lifecycle capability contract.
//!
//! Screens are registered once at startup and never destroyed; only the
//! router's notion of which one is active changes. A screen module exposes at
//! most two lifecycle capabilities: `init` (run once, ever) and `load` (run
//! on every activation, including re-entrant re-triggers). The capability
//! flags make the router's dispatch exhaustive instead of reflective.

use thiserror::Error;

/// Identifier of a registered screen.
///
/// Screens are a static set, so ids borrow `'static` names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(pub &'static str);

impl std::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Lifecycle capabilities a screen module implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleCapabilities {
    /// Module wants `init` called once, globally.
    pub init: bool,
    /// Module wants `load` called on every activation.
    pub load: bool,
}

impl Default for ModuleCapabilities {
    fn default() -> Self {
        Self { init: true, load: true }
    }
}

impl ModuleCapabilities {
    /// Module with only a `load` capability.
    pub const fn load_only() -> Self {
        Self { init: false, load: true }
    }

    /// Module with only an `init` capability.
    pub const fn init_only() -> Self {
        Self { init: true, load: false }
    }
}

/// Errors surfaced by screen modules during activation.
///
/// Every variant is recovered locally by the router; nothing here escalates
/// to the host.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScreenError {
    /// The screen's render target is missing; the transition is abandoned
    /// and router state stays unchanged.
    #[error("render target missing for screen {screen}")]
    MissingTarget {
        /// Screen whose target could not be found.
        screen: ScreenId,
    },

    /// No module was registered for the screen.
    #[error("screen {screen} is not registered")]
    NotRegistered {
        /// The unregistered screen.
        screen: ScreenId,
    },
}

/// Lifecycle contract a screen provides to the router.
///
/// The router consults [`ScreenModule::capabilities`] and never assumes both
/// methods exist. `init` is additionally guarded by the router so it runs at
/// most once per process, but modules may self-track as well.
pub trait ScreenModule {
    /// Which lifecycle capabilities this module implements.
    fn capabilities(&self) -> ModuleCapabilities {
        ModuleCapabilities::default()
    }

    /// One-time setup. Called at most once, before the first `load`.
    fn init(&mut self) {}

    /// Activation hook, called on every activation and re-entrant trigger.
    ///
    /// # Errors
    ///
    /// [`ScreenError::MissingTarget`] when the screen's render target cannot
    /// be found; the router then abandons the transition.
    fn load(&mut self) -> Result<(), ScreenError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;
    impl ScreenModule for Bare {}

    #[test]
    fn default_module_loads_successfully() {
        let mut module = Bare;
        assert_eq!(module.capabilities(), ModuleCapabilities::default());
        assert_eq!(module.load(), Ok(()));
    }

    #[test]
    fn capability_presets() {
        assert!(!ModuleCapabilities::load_only().init);
        assert!(ModuleCapabilities::load_only().load);
        assert!(ModuleCapabilities::init_only().init);
        assert!(!ModuleCapabilities::init_only().load);
    }

    #[test]
    fn errors_render_with_screen_name() {
        let err = ScreenError::MissingTarget { screen: ScreenId("player") };
        assert_eq!(err.to_string(), "render target missing for screen player");
    }
}
