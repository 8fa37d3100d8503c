//! End-to-end behavior tests for the shell over harness doubles.
//!
//! Each test builds a small TV-style app (screens, routes, card rows) and
//! drives it with host events, asserting on the produced action stream and
//! the observable state afterwards.

use std::sync::Arc;

use tenfoot_core::{
    Direction, NavigationRouter, Rect, RouterConfig, RowId, ScreenId, Shell, ShellAction,
    ShellEvent,
};
use tenfoot_harness::{GridSurface, ModuleProbe, RecordingModule};

const SPLASH: ScreenId = ScreenId("splash");
const HOME: ScreenId = ScreenId("home");
const DISCOVER: ScreenId = ScreenId("discover");
const PLAYER: ScreenId = ScreenId("player");

struct Fixture {
    shell: Shell<GridSurface>,
    home: Arc<ModuleProbe>,
    discover: Arc<ModuleProbe>,
}

/// Splash + home (two rows and a rowless button) + discover + player.
fn fixture() -> Fixture {
    let mut surface = GridSurface::new();
    // Home row 0: three cards, ids 0..3.
    surface.add_row(HOME, RowId(0), [
        Rect::new(0.0, 0.0, 100.0, 50.0),
        Rect::new(0.0, 110.0, 100.0, 50.0),
        Rect::new(0.0, 220.0, 100.0, 50.0),
    ]);
    // Home row 1: two wider cards, ids 3..5.
    surface.add_row(HOME, RowId(1), [
        Rect::new(60.0, 0.0, 140.0, 50.0),
        Rect::new(60.0, 150.0, 140.0, 50.0),
    ]);
    // Rowless "view all" button, id 5.
    surface.add_rowless(HOME, Rect::new(120.0, 0.0, 80.0, 30.0));
    // Discover row, ids 6..8.
    surface.add_row(DISCOVER, RowId(2), [
        Rect::new(0.0, 0.0, 100.0, 50.0),
        Rect::new(0.0, 110.0, 100.0, 50.0),
    ]);
    // Player transport control, id 8.
    surface.add_rowless(PLAYER, Rect::new(0.0, 0.0, 200.0, 40.0));

    let mut router =
        NavigationRouter::new(RouterConfig { start: SPLASH, home: HOME, player: PLAYER });
    let (splash_module, _) = RecordingModule::new(SPLASH);
    let (home_module, home) = RecordingModule::new(HOME);
    let (discover_module, discover) = RecordingModule::new(DISCOVER);
    let (player_module, _) = RecordingModule::new(PLAYER);
    router.register(SPLASH, "#/splash", splash_module);
    router.register(HOME, "#/home", home_module);
    router.register(DISCOVER, "#/discover", discover_module);
    router.register(PLAYER, "#/player", player_module);

    let mut shell = Shell::new(surface, router);
    shell.start();

    Fixture { shell, home, discover }
}

/// One line per action, for trace snapshots.
fn trace(actions: &[ShellAction]) -> String {
    actions
        .iter()
        .map(|action| match action {
            ShellAction::Render => "render".to_string(),
            ShellAction::FocusChanged { element } => format!("focus {element}"),
            ShellAction::ScrollIntoView { element } => format!("scroll {element}"),
            ShellAction::Activate { element } => format!("activate {element}"),
            ShellAction::ScreenChanged { screen, previous: Some(previous) } => {
                format!("screen {screen} <- {previous}")
            },
            ShellAction::ScreenChanged { screen, previous: None } => format!("screen {screen}"),
            ShellAction::CloseModal => "close-modal".to_string(),
            ShellAction::Quit => "quit".to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn canonical_journey_action_trace() {
    let Fixture { mut shell, .. } = fixture();

    let events = [
        ShellEvent::NavigateTo { route: "#/home".into() },
        ShellEvent::Direction(Direction::Down),
        ShellEvent::Direction(Direction::Right),
        ShellEvent::Select,
        ShellEvent::NavigateTo { route: "#/player".into() },
        ShellEvent::Back,
        ShellEvent::Back,
    ];

    let mut actions = Vec::new();
    for event in events {
        actions.extend(shell.handle(event));
    }

    insta::assert_snapshot!(trace(&actions), @r"
    screen home <- splash
    focus #0
    scroll #0
    render
    focus #3
    scroll #3
    render
    focus #4
    scroll #4
    render
    activate #4
    render
    screen player <- home
    focus #8
    scroll #8
    render
    screen home <- player
    focus #0
    scroll #0
    render
    quit
    render
    ");
}

#[test]
fn reentrant_route_reloads_without_state_change() {
    let Fixture { mut shell, home, .. } = fixture();
    shell.handle(ShellEvent::NavigateTo { route: "#/home".into() });
    assert_eq!(home.load_calls(), 1);
    let history_before = shell.router().history().len();

    let actions = shell.handle(ShellEvent::NavigateTo { route: "#/home".into() });

    assert_eq!(home.load_calls(), 2, "re-entrant trigger re-runs load");
    assert_eq!(shell.router().history().len(), history_before);
    assert_eq!(shell.router().previous(), Some(SPLASH));
    assert!(
        !actions.iter().any(|a| matches!(a, ShellAction::ScreenChanged { .. })),
        "not a state change"
    );
}

#[test]
fn unknown_route_lands_on_home() {
    let Fixture { mut shell, .. } = fixture();

    shell.handle(ShellEvent::NavigateTo { route: "#/unknown".into() });

    assert_eq!(shell.active_screen(), HOME);
}

#[test]
fn history_caps_at_ten_entries() {
    let Fixture { mut shell, .. } = fixture();

    for _ in 0..7 {
        shell.handle(ShellEvent::NavigateTo { route: "#/home".into() });
        shell.handle(ShellEvent::NavigateTo { route: "#/discover".into() });
    }

    assert_eq!(shell.router().history().len(), 10);
}

#[test]
fn modal_close_wins_over_go_back_even_on_home() {
    let Fixture { mut shell, .. } = fixture();
    shell.handle(ShellEvent::NavigateTo { route: "#/home".into() });
    shell.handle(ShellEvent::ModalOpened);
    let history_before = shell.router().history().len();

    let actions = shell.handle(ShellEvent::Back);

    assert!(actions.contains(&ShellAction::CloseModal));
    assert!(!actions.contains(&ShellAction::Quit));
    assert_eq!(shell.active_screen(), HOME);
    assert_eq!(shell.router().history().len(), history_before);

    // With the modal gone, back on home is unhandled: host exit request.
    let actions = shell.handle(ShellEvent::Back);
    assert!(actions.contains(&ShellAction::Quit));
}

#[test]
fn missing_render_target_abandons_transition() {
    let Fixture { mut shell, discover, .. } = fixture();
    shell.handle(ShellEvent::NavigateTo { route: "#/home".into() });
    let focused_before = shell.focused();
    discover.set_fail_load(true);

    let actions = shell.handle(ShellEvent::NavigateTo { route: "#/discover".into() });

    assert_eq!(shell.active_screen(), HOME, "state must not advance");
    assert_eq!(shell.focused(), focused_before, "focus untouched");
    assert!(!actions.iter().any(|a| matches!(a, ShellAction::ScreenChanged { .. })));

    // Once the target renders, the same route works.
    discover.set_fail_load(false);
    shell.handle(ShellEvent::NavigateTo { route: "#/discover".into() });
    assert_eq!(shell.active_screen(), DISCOVER);
}

#[test]
fn surface_rerender_reseats_focus_on_first_candidate() {
    let Fixture { mut shell, .. } = fixture();
    shell.handle(ShellEvent::NavigateTo { route: "#/home".into() });
    shell.handle(ShellEvent::Direction(Direction::Right));
    let focused = match shell.focused() {
        Some(id) => id,
        None => unreachable!("navigation must have focused a card"),
    };

    shell.surface_mut().remove(focused);
    shell.handle(ShellEvent::SurfaceChanged);

    assert_ne!(shell.focused(), Some(focused));
    assert!(shell.focused().is_some(), "first candidate reselected");
}

#[test]
fn init_runs_once_across_many_activations() {
    let Fixture { mut shell, home, .. } = fixture();

    shell.handle(ShellEvent::NavigateTo { route: "#/home".into() });
    shell.handle(ShellEvent::NavigateTo { route: "#/discover".into() });
    shell.handle(ShellEvent::NavigateTo { route: "#/home".into() });
    shell.handle(ShellEvent::NavigateTo { route: "#/home".into() });

    assert_eq!(home.init_calls(), 1);
    assert_eq!(home.load_calls(), 3);
}
