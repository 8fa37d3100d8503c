//! Shell state machine.
//!
//! Ties the focus engine and the router together behind a single
//! event-driven entry point. The host delivers one [`ShellEvent`] at a time
//! and executes the returned [`ShellAction`]s; no operation blocks, sleeps,
//! or re-enters. This is the single writer for both the focus and routing
//! state, per the one-input-at-a-time discipline of the surrounding host.

use crate::{
    action::ShellAction,
    event::ShellEvent,
    focus::FocusEngine,
    router::{BackOutcome, NavigationRouter},
    screen::ScreenId,
    surface::{ElementId, FocusableSurface},
};

/// Application shell: focus engine + router over a focusable surface.
///
/// Generic over the surface so production hosts and in-memory test doubles
/// run the identical state machine.
pub struct Shell<S: FocusableSurface> {
    surface: S,
    focus: FocusEngine,
    router: NavigationRouter,
    /// Modal overlay state, tracked by the host's UI and mirrored here.
    modal_open: bool,
}

impl<S: FocusableSurface> Shell<S> {
    /// Create a shell over `surface` with a registered router.
    pub fn new(surface: S, router: NavigationRouter) -> Self {
        Self { surface, focus: FocusEngine::new(), router, modal_open: false }
    }

    /// Run the start screen's lifecycle and focus its first element.
    ///
    /// Call once before delivering events.
    pub fn start(&mut self) -> Vec<ShellAction> {
        let mut actions = self.router.start();
        actions.extend(self.focus.focus_first(&self.surface, self.router.active()));
        actions.push(ShellAction::Render);
        actions
    }

    /// Process one host event and return the actions to execute.
    pub fn handle(&mut self, event: ShellEvent) -> Vec<ShellAction> {
        let active = self.router.active();
        let mut actions = match event {
            ShellEvent::Direction(direction) => {
                self.focus.navigate(&self.surface, active, direction)
            },
            ShellEvent::Select => self.focus.select(&self.surface, active),
            ShellEvent::Back => self.handle_back(),
            ShellEvent::NavigateTo { route } => {
                let actions = self.router.navigate_to(&route);
                self.refocus_after_router(actions)
            },
            ShellEvent::ModalOpened => {
                self.modal_open = true;
                Vec::new()
            },
            ShellEvent::ModalClosed => {
                self.modal_open = false;
                Vec::new()
            },
            ShellEvent::SurfaceChanged => self.focus.refresh(&self.surface, active),
        };
        actions.push(ShellAction::Render);
        actions
    }

    /// Surface the shell navigates over.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, for hosts that re-render content.
    ///
    /// After mutating, deliver [`ShellEvent::SurfaceChanged`] so focus is
    /// re-validated.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Focus engine state.
    pub fn focused(&self) -> Option<ElementId> {
        self.focus.current()
    }

    /// Currently active screen.
    pub fn active_screen(&self) -> ScreenId {
        self.router.active()
    }

    /// The router owned by this shell.
    pub fn router(&self) -> &NavigationRouter {
        &self.router
    }

    /// True while the host reports a modal overlay open.
    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    /// Back-key dispatch; unhandled maps to a host exit request.
    fn handle_back(&mut self) -> Vec<ShellAction> {
        match self.router.handle_back(self.modal_open) {
            BackOutcome::Handled { actions } => {
                if actions.contains(&ShellAction::CloseModal) {
                    self.modal_open = false;
                }
                self.refocus_after_router(actions)
            },
            BackOutcome::Unhandled => vec![ShellAction::Quit],
        }
    }

    /// After a screen change the old focus handle is dead; re-validate so
    /// the new screen starts with its first candidate focused.
    fn refocus_after_router(&mut self, mut actions: Vec<ShellAction>) -> Vec<ShellAction> {
        let changed =
            actions.iter().any(|action| matches!(action, ShellAction::ScreenChanged { .. }));
        if changed {
            actions.extend(self.focus.refresh(&self.surface, self.router.active()));
        }
        actions
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::{
        event::Direction,
        geometry::Rect,
        router::RouterConfig,
        screen::ScreenModule,
        surface::{FocusableElement, RowId},
    };

    const SPLASH: ScreenId = ScreenId("splash");
    const HOME: ScreenId = ScreenId("home");
    const PLAYER: ScreenId = ScreenId("player");

    struct Noop;
    impl ScreenModule for Noop {}

    /// Per-screen element lists keyed by screen id.
    #[derive(Default)]
    struct MapSurface {
        screens: HashMap<ScreenId, Vec<FocusableElement>>,
        rows: HashMap<ElementId, RowId>,
    }

    impl MapSurface {
        fn add(&mut self, screen: ScreenId, id: u64, left: f32, row: Option<u32>) -> ElementId {
            let element = ElementId(id);
            self.screens
                .entry(screen)
                .or_default()
                .push(FocusableElement::new(element, Rect::new(0.0, left, 100.0, 10.0)));
            if let Some(row) = row {
                self.rows.insert(element, RowId(row));
            }
            element
        }
    }

    impl FocusableSurface for MapSurface {
        fn focusables(&self, screen: ScreenId) -> Vec<FocusableElement> {
            self.screens.get(&screen).cloned().unwrap_or_default()
        }

        fn row_of(&self, element: ElementId) -> Option<RowId> {
            self.rows.get(&element).copied()
        }
    }

    fn shell() -> (Shell<MapSurface>, ElementId, ElementId) {
        let mut surface = MapSurface::default();
        let home_first = surface.add(HOME, 1, 0.0, Some(1));
        let home_second = surface.add(HOME, 2, 110.0, Some(1));
        surface.add(PLAYER, 10, 0.0, None);

        let mut router =
            NavigationRouter::new(RouterConfig { start: SPLASH, home: HOME, player: PLAYER });
        router.register(SPLASH, "#/splash", Box::new(Noop));
        router.register(HOME, "#/home", Box::new(Noop));
        router.register(PLAYER, "#/player", Box::new(Noop));

        (Shell::new(surface, router), home_first, home_second)
    }

    #[test]
    fn start_renders_and_reports_start_screen() {
        let (mut shell, ..) = shell();

        let actions = shell.start();

        assert_eq!(actions.first(), Some(&ShellAction::ScreenChanged {
            screen: SPLASH,
            previous: None
        }));
        assert_eq!(actions.last(), Some(&ShellAction::Render));
        assert_eq!(shell.active_screen(), SPLASH);
    }

    #[test]
    fn screen_change_refocuses_first_candidate() {
        let (mut shell, home_first, _) = shell();
        shell.start();

        let actions = shell.handle(ShellEvent::NavigateTo { route: "#/home".into() });

        assert!(actions.contains(&ShellAction::FocusChanged { element: home_first }));
        assert_eq!(shell.focused(), Some(home_first));
    }

    #[test]
    fn directions_drive_the_focus_engine() {
        let (mut shell, home_first, home_second) = shell();
        shell.start();
        shell.handle(ShellEvent::NavigateTo { route: "#/home".into() });

        shell.handle(ShellEvent::Direction(Direction::Right));
        assert_eq!(shell.focused(), Some(home_second));

        shell.handle(ShellEvent::Direction(Direction::Left));
        assert_eq!(shell.focused(), Some(home_first));
    }

    #[test]
    fn select_emits_activate_for_focused_element() {
        let (mut shell, home_first, _) = shell();
        shell.start();
        shell.handle(ShellEvent::NavigateTo { route: "#/home".into() });

        let actions = shell.handle(ShellEvent::Select);

        assert!(actions.contains(&ShellAction::Activate { element: home_first }));
    }

    #[test]
    fn back_with_modal_closes_modal_and_clears_flag() {
        let (mut shell, ..) = shell();
        shell.start();
        shell.handle(ShellEvent::NavigateTo { route: "#/home".into() });
        shell.handle(ShellEvent::ModalOpened);
        assert!(shell.modal_open());

        let actions = shell.handle(ShellEvent::Back);

        assert!(actions.contains(&ShellAction::CloseModal));
        assert!(!shell.modal_open());
        assert_eq!(shell.active_screen(), HOME, "go_back not taken");
    }

    #[test]
    fn back_on_home_requests_exit() {
        let (mut shell, ..) = shell();
        shell.start();
        shell.handle(ShellEvent::NavigateTo { route: "#/home".into() });

        let actions = shell.handle(ShellEvent::Back);

        assert_eq!(actions, vec![ShellAction::Quit, ShellAction::Render]);
    }

    #[test]
    fn back_from_player_returns_and_refocuses() {
        let (mut shell, home_first, _) = shell();
        shell.start();
        shell.handle(ShellEvent::NavigateTo { route: "#/home".into() });
        shell.handle(ShellEvent::NavigateTo { route: "#/player".into() });
        assert_ne!(shell.focused(), Some(home_first));

        let actions = shell.handle(ShellEvent::Back);

        assert_eq!(shell.active_screen(), HOME);
        assert!(actions.contains(&ShellAction::FocusChanged { element: home_first }));
    }

    #[test]
    fn surface_changed_heals_focus() {
        let (mut shell, home_first, home_second) = shell();
        shell.start();
        shell.handle(ShellEvent::NavigateTo { route: "#/home".into() });
        shell.handle(ShellEvent::Direction(Direction::Right));
        assert_eq!(shell.focused(), Some(home_second));

        // Content re-render drops the focused element.
        if let Some(elements) = shell.surface_mut().screens.get_mut(&HOME) {
            elements.retain(|e| e.id != home_second);
        }
        shell.handle(ShellEvent::SurfaceChanged);

        assert_eq!(shell.focused(), Some(home_first));
    }

    #[test]
    fn modal_events_only_toggle_the_flag() {
        let (mut shell, ..) = shell();
        shell.start();

        let actions = shell.handle(ShellEvent::ModalOpened);
        assert_eq!(actions, vec![ShellAction::Render]);
        assert!(shell.modal_open());

        let actions = shell.handle(ShellEvent::ModalClosed);
        assert_eq!(actions, vec![ShellAction::Render]);
        assert!(!shell.modal_open());
    }
}
