//! Demo screen catalog.
//!
//! Defines the card layouts the terminal host navigates over and the
//! screen modules the router drives through their lifecycle. Layout
//! coordinates live in an abstract pixel space so the focus engine can
//! compare horizontal centers; the renderer maps them to terminal cells.

use std::collections::HashMap;

use tenfoot_core::{
    ElementId, FocusableElement, FocusableSurface, ModuleCapabilities, NavigationRouter, Rect,
    RouterConfig, RowId, ScreenError, ScreenId, ScreenModule, Shell,
};
use tracing::info;

/// Splash screen shown before the router lands on home.
pub const SPLASH: ScreenId = ScreenId("splash");
/// Home screen with the main card rails.
pub const HOME: ScreenId = ScreenId("home");
/// Discover screen.
pub const DISCOVER: ScreenId = ScreenId("discover");
/// Library screen.
pub const LIBRARY: ScreenId = ScreenId("library");
/// Search screen.
pub const SEARCH: ScreenId = ScreenId("search");
/// Settings screen with a rowless option column.
pub const SETTINGS: ScreenId = ScreenId("settings");
/// Full-screen playback screen.
pub const PLAYER: ScreenId = ScreenId("player");

/// Card geometry in abstract pixels.
const CARD_WIDTH: f32 = 160.0;
const CARD_HEIGHT: f32 = 90.0;
const CARD_STRIDE: f32 = 180.0;
const ROW_STRIDE: f32 = 110.0;

/// A focusable card with a display label.
#[derive(Debug, Clone)]
struct Card {
    element: FocusableElement,
    label: String,
}

/// In-memory card layout for every demo screen.
///
/// Implements [`FocusableSurface`] by returning each screen's cards in
/// document order. Row membership is stored per element and queried by
/// the focus engine through [`FocusableSurface::row_of`].
#[derive(Debug, Default)]
pub struct CardSurface {
    screens: HashMap<ScreenId, Vec<Card>>,
    rows: HashMap<ElementId, RowId>,
    next_id: u64,
}

impl CardSurface {
    /// Build the demo catalog.
    pub fn demo() -> Self {
        let mut surface = Self::default();

        surface.add_rail(HOME, RowId(0), "Trending", 5);
        surface.add_rail(HOME, RowId(1), "Continue", 4);
        surface.add_rail(HOME, RowId(2), "For You", 6);
        surface.add_rail(DISCOVER, RowId(0), "New", 4);
        surface.add_rail(DISCOVER, RowId(1), "Popular", 4);
        surface.add_rail(LIBRARY, RowId(0), "Saved", 3);
        surface.add_rail(SEARCH, RowId(0), "Recent", 3);
        surface.add_rail(SEARCH, RowId(1), "Suggested", 5);

        // Settings is a single column of rowless options; up/down walks
        // them in document order.
        for (i, label) in ["Profile", "Playback", "About"].iter().enumerate() {
            surface.add_button(SETTINGS, label, i);
        }

        // Player transport controls, rowless by design.
        for (i, label) in ["Play/Pause", "Restart", "Details"].iter().enumerate() {
            surface.add_button(PLAYER, label, i);
        }

        surface
    }

    /// Label of an element, if it exists.
    pub fn label(&self, element: ElementId) -> Option<&str> {
        self.screens
            .values()
            .flatten()
            .find(|card| card.element.id == element)
            .map(|card| card.label.as_str())
    }

    /// Cards of a screen in document order, with row membership.
    pub(crate) fn cards(&self, screen: ScreenId) -> Vec<(FocusableElement, Option<RowId>, &str)> {
        self.screens.get(&screen).map_or_else(Vec::new, |cards| {
            cards
                .iter()
                .map(|card| {
                    (card.element, self.rows.get(&card.element.id).copied(), card.label.as_str())
                })
                .collect()
        })
    }

    fn add_rail(&mut self, screen: ScreenId, row: RowId, title: &str, count: usize) {
        let top = row.0 as f32 * ROW_STRIDE;
        for i in 0..count {
            let bounds = Rect::new(top, i as f32 * CARD_STRIDE, CARD_WIDTH, CARD_HEIGHT);
            let id = self.push(screen, bounds, format!("{title} {}", i + 1));
            self.rows.insert(id, row);
        }
    }

    fn add_button(&mut self, screen: ScreenId, label: &str, index: usize) {
        let top = index as f32 * ROW_STRIDE;
        let bounds = Rect::new(top, 0.0, CARD_WIDTH * 2.0, CARD_HEIGHT / 2.0);
        self.push(screen, bounds, label.to_string());
    }

    fn push(&mut self, screen: ScreenId, bounds: Rect, label: String) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.screens
            .entry(screen)
            .or_default()
            .push(Card { element: FocusableElement::new(id, bounds), label });
        id
    }
}

impl FocusableSurface for CardSurface {
    fn focusables(&self, screen: ScreenId) -> Vec<FocusableElement> {
        self.screens
            .get(&screen)
            .map_or_else(Vec::new, |cards| cards.iter().map(|card| card.element).collect())
    }

    fn row_of(&self, element: ElementId) -> Option<RowId> {
        self.rows.get(&element).copied()
    }
}

/// Screen module backing every demo screen.
///
/// `load` always succeeds; the demo has no render targets that can go
/// missing. Lifecycle calls are logged so `--log` output shows the
/// init-once and load-per-activation contract in action.
struct DemoModule {
    screen: ScreenId,
    capabilities: ModuleCapabilities,
}

impl DemoModule {
    fn new(screen: ScreenId, capabilities: ModuleCapabilities) -> Box<Self> {
        Box::new(Self { screen, capabilities })
    }
}

impl ScreenModule for DemoModule {
    fn capabilities(&self) -> ModuleCapabilities {
        self.capabilities
    }

    fn init(&mut self) {
        info!(screen = %self.screen, "module init");
    }

    fn load(&mut self) -> Result<(), ScreenError> {
        info!(screen = %self.screen, "module load");
        Ok(())
    }
}

/// Build the demo shell: catalog surface plus a fully registered router.
pub fn demo_shell() -> Shell<CardSurface> {
    let mut router =
        NavigationRouter::new(RouterConfig { start: SPLASH, home: HOME, player: PLAYER });

    router.register(SPLASH, "#/splash", DemoModule::new(SPLASH, ModuleCapabilities::init_only()));
    router.register(HOME, "#/home", DemoModule::new(HOME, ModuleCapabilities::default()));
    router.register(
        DISCOVER,
        "#/discover",
        DemoModule::new(DISCOVER, ModuleCapabilities::default()),
    );
    router.register(LIBRARY, "#/library", DemoModule::new(LIBRARY, ModuleCapabilities::load_only()));
    router.register(SEARCH, "#/search", DemoModule::new(SEARCH, ModuleCapabilities::load_only()));
    router.register(
        SETTINGS,
        "#/settings",
        DemoModule::new(SETTINGS, ModuleCapabilities::default()),
    );
    router.register(PLAYER, "#/player", DemoModule::new(PLAYER, ModuleCapabilities::default()));

    Shell::new(CardSurface::demo(), router)
}
