//! Screen routing state machine.
//!
//! Owns exactly one active screen at a time, mediates transitions through
//! the route table, records a bounded history for the back key, and invokes
//! screen module lifecycle capabilities.
//!
//! Failure semantics: an unresolvable route recovers locally by falling back
//! to the home screen; a screen whose render target is missing leaves the
//! state machine exactly where it was. Nothing here escalates to the host.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::{
    action::ShellAction,
    history::NavigationHistory,
    route::RouteTable,
    screen::{ScreenError, ScreenId, ScreenModule},
};

/// Designated screens the router treats specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterConfig {
    /// Screen active at startup.
    pub start: ScreenId,
    /// Fallback screen for unresolved routes and empty history.
    pub home: ScreenId,
    /// Playback screen; back always navigates away from it.
    pub player: ScreenId,
}

/// Routing state: active screen, previous screen, and history.
///
/// Initialized once at application start and mutated only through
/// [`NavigationRouter`] operations.
#[derive(Debug, Clone)]
pub struct RouterState {
    active: ScreenId,
    previous: Option<ScreenId>,
    history: NavigationHistory,
}

impl RouterState {
    /// Currently active screen.
    pub fn active(&self) -> ScreenId {
        self.active
    }

    /// Screen active before the last transition, if any.
    pub fn previous(&self) -> Option<ScreenId> {
        self.previous
    }

    /// Navigation history, oldest-first.
    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }
}

/// Result of a hardware back-key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackOutcome {
    /// The shell consumed the key.
    Handled {
        /// Side effects to execute.
        actions: Vec<ShellAction>,
    },
    /// Nothing to go back to; the host should interpret this as an exit
    /// request.
    Unhandled,
}

/// Screen routing state machine.
///
/// Screens are registered once at startup and never destroyed; only the
/// active flag moves between them.
pub struct NavigationRouter {
    config: RouterConfig,
    routes: RouteTable,
    screens: HashMap<ScreenId, Box<dyn ScreenModule>>,
    /// Screens whose `init` capability has already run.
    initialized: HashSet<ScreenId>,
    state: RouterState,
}

impl NavigationRouter {
    /// Create a router with the given designated screens.
    ///
    /// The start screen becomes active immediately; its module lifecycle
    /// runs on [`NavigationRouter::start`].
    pub fn new(config: RouterConfig) -> Self {
        Self {
            config,
            routes: RouteTable::new(),
            screens: HashMap::new(),
            initialized: HashSet::new(),
            state: RouterState {
                active: config.start,
                previous: None,
                history: NavigationHistory::new(),
            },
        }
    }

    /// Register `screen` under `route_key` with its module.
    ///
    /// Re-registering a screen replaces its module and route mapping.
    pub fn register(
        &mut self,
        screen: ScreenId,
        route_key: impl Into<String>,
        module: Box<dyn ScreenModule>,
    ) {
        self.routes.insert(route_key, screen);
        self.screens.insert(screen, module);
    }

    /// Run the start screen's lifecycle.
    ///
    /// Call once after registration. Emits the initial
    /// [`ShellAction::ScreenChanged`] so hosts observe the starting screen
    /// the same way as any other transition.
    pub fn start(&mut self) -> Vec<ShellAction> {
        let screen = self.config.start;
        if let Err(err) = self.run_lifecycle(screen) {
            warn!(%screen, %err, "start screen failed to load");
            return Vec::new();
        }
        vec![ShellAction::ScreenChanged { screen, previous: None }]
    }

    /// Routing configuration.
    pub fn config(&self) -> RouterConfig {
        self.config
    }

    /// Routing state (active/previous/history).
    pub fn state(&self) -> &RouterState {
        &self.state
    }

    /// Currently active screen.
    pub fn active(&self) -> ScreenId {
        self.state.active
    }

    /// Screen active before the last transition, if any.
    pub fn previous(&self) -> Option<ScreenId> {
        self.state.previous
    }

    /// Navigation history.
    pub fn history(&self) -> &NavigationHistory {
        &self.state.history
    }

    /// Route table consulted by [`NavigationRouter::navigate_to`].
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// True when `screen` has a registered module.
    pub fn is_registered(&self, screen: ScreenId) -> bool {
        self.screens.contains_key(&screen)
    }

    /// Navigate to the screen mapped to `route`.
    ///
    /// Unmapped keys log a warning and fall back to the home screen.
    /// Navigating to the already-active screen is a re-entrant trigger: the
    /// module's `load` runs again but history and the previous-screen marker
    /// stay untouched.
    pub fn navigate_to(&mut self, route: &str) -> Vec<ShellAction> {
        match self.routes.resolve(route) {
            Some(screen) => self.enter(screen, true),
            None => {
                warn!(route, "unknown route, falling back to home");
                let home = self.config.home;
                self.enter(home, true)
            },
        }
    }

    /// Navigate to the most recent history entry.
    ///
    /// The entry is consumed only once the transition lands; the transition
    /// itself does not push. With empty history, falls back to navigating
    /// home.
    pub fn go_back(&mut self) -> Vec<ShellAction> {
        match self.state.history.top() {
            Some(target) => {
                let actions = self.enter(target, false);
                // An abandoned transition must not eat the back step.
                if !actions.is_empty() {
                    self.state.history.pop();
                }
                actions
            },
            None => {
                debug!("history empty, falling back to home");
                let home = self.config.home;
                self.enter(home, true)
            },
        }
    }

    /// Interpret the hardware back key.
    ///
    /// Strict priority, short-circuiting on the first match:
    /// 1. an open modal is closed;
    /// 2. the player screen goes back;
    /// 3. any non-home screen goes back;
    /// 4. otherwise the key is unhandled and the host may exit.
    pub fn handle_back(&mut self, modal_open: bool) -> BackOutcome {
        if modal_open {
            return BackOutcome::Handled { actions: vec![ShellAction::CloseModal] };
        }
        if self.state.active == self.config.player {
            return BackOutcome::Handled { actions: self.go_back() };
        }
        if self.state.active != self.config.home {
            return BackOutcome::Handled { actions: self.go_back() };
        }
        BackOutcome::Unhandled
    }

    /// Transition to `screen`, pushing history when `push_history` is set.
    fn enter(&mut self, screen: ScreenId, push_history: bool) -> Vec<ShellAction> {
        if screen == self.state.active {
            // Re-entrant trigger: refresh content, not a state change.
            if let Err(err) = self.run_lifecycle(screen) {
                warn!(%screen, %err, "re-entrant load failed");
            }
            return Vec::new();
        }

        // Lifecycle first: the state machine must never advance to a screen
        // whose render target was not found.
        if let Err(err) = self.run_lifecycle(screen) {
            warn!(%screen, %err, "transition abandoned");
            return Vec::new();
        }

        let previous = self.state.active;
        if push_history {
            self.state.history.push(previous);
        }
        self.state.previous = Some(previous);
        self.state.active = screen;
        debug!(%screen, %previous, "screen changed");

        vec![ShellAction::ScreenChanged { screen, previous: Some(previous) }]
    }

    /// Run `init` (once, globally) and `load` per the module's capabilities.
    fn run_lifecycle(&mut self, screen: ScreenId) -> Result<(), ScreenError> {
        let Some(module) = self.screens.get_mut(&screen) else {
            return Err(ScreenError::NotRegistered { screen });
        };

        let caps = module.capabilities();
        if caps.init && self.initialized.insert(screen) {
            module.init();
        }
        if caps.load {
            module.load()?;
        }
        Ok(())
    }
}
