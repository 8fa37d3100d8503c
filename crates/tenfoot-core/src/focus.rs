//! Directional focus engine.
//!
//! Deterministic selection of "the next focused element" given a direction
//! and the current focus, scoped to the active screen. The engine is a pure
//! state machine: it holds only an element handle and queries the
//! [`FocusableSurface`] fresh on every operation, so stale handles are
//! detected and healed instead of trusted.
//!
//! Every operation is total. An empty or malformed surface is a silent
//! no-op, never an error.

use tracing::debug;

use crate::{
    action::ShellAction,
    event::Direction,
    geometry::nearest_center_x,
    screen::ScreenId,
    surface::{ElementId, FocusableElement, FocusableSurface, RowId},
};

/// Focus state: the single focused element, if any.
///
/// There is exactly one focus per shell instance. The referenced element must
/// exist, visible and enabled, on the active screen; the engine re-validates
/// this before every operation and clears or reselects when violated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusState {
    current: Option<ElementId>,
}

impl FocusState {
    /// Currently focused element, if any.
    pub fn current(&self) -> Option<ElementId> {
        self.current
    }
}

/// Directional focus state machine.
///
/// Owns its [`FocusState`]; all mutation funnels through these operations.
#[derive(Debug, Clone, Default)]
pub struct FocusEngine {
    state: FocusState,
}

impl FocusEngine {
    /// Create an engine with no focus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently focused element, if any.
    pub fn current(&self) -> Option<ElementId> {
        self.state.current
    }

    /// Focus state snapshot.
    pub fn state(&self) -> FocusState {
        self.state
    }

    /// Drop the current focus without reselecting.
    pub fn clear(&mut self) {
        self.state.current = None;
    }

    /// Focus candidates of `screen` in document order.
    ///
    /// Filters the surface's elements to `visible && enabled`. Empty when
    /// none qualify.
    pub fn candidates<S>(surface: &S, screen: ScreenId) -> Vec<FocusableElement>
    where
        S: FocusableSurface + ?Sized,
    {
        surface.focusables(screen).into_iter().filter(FocusableElement::focusable).collect()
    }

    /// Unconditionally focus `element`.
    ///
    /// Always emits [`ShellAction::FocusChanged`] and
    /// [`ShellAction::ScrollIntoView`], even when `element` already holds
    /// focus.
    pub fn set_focus(&mut self, element: ElementId) -> Vec<ShellAction> {
        debug!(%element, "focus set");
        self.state.current = Some(element);
        vec![
            ShellAction::FocusChanged { element },
            ShellAction::ScrollIntoView { element },
        ]
    }

    /// Focus the first candidate of `screen`. No-op when none qualify.
    pub fn focus_first<S>(&mut self, surface: &S, screen: ScreenId) -> Vec<ShellAction>
    where
        S: FocusableSurface + ?Sized,
    {
        let candidates = Self::candidates(surface, screen);
        self.focus_first_of(&candidates)
    }

    /// Move focus one step in `direction`.
    ///
    /// Stale or absent focus falls back to [`FocusEngine::focus_first`].
    /// Horizontal moves are scoped to the current row (screen-wide when the
    /// element is in no row) with no wraparound; vertical moves cross to the
    /// adjacent row's nearest-center element, falling back to rowless
    /// elements past the first/last row.
    pub fn navigate<S>(
        &mut self,
        surface: &S,
        screen: ScreenId,
        direction: Direction,
    ) -> Vec<ShellAction>
    where
        S: FocusableSurface + ?Sized,
    {
        let candidates = Self::candidates(surface, screen);
        let Some(current) = self.valid_current(&candidates) else {
            return self.focus_first_of(&candidates);
        };

        match direction {
            Direction::Left | Direction::Right => {
                self.step_in_row(surface, &candidates, current, direction)
            },
            Direction::Up | Direction::Down => {
                self.step_across_rows(surface, &candidates, current, direction)
            },
        }
    }

    /// Activate the focused element, or focus the first candidate when
    /// nothing valid holds focus.
    pub fn select<S>(&mut self, surface: &S, screen: ScreenId) -> Vec<ShellAction>
    where
        S: FocusableSurface + ?Sized,
    {
        let candidates = Self::candidates(surface, screen);
        match self.valid_current(&candidates) {
            Some(element) => vec![ShellAction::Activate { element }],
            None => self.focus_first_of(&candidates),
        }
    }

    /// Re-validate the current focus after a content re-render.
    ///
    /// Keeps a still-valid focus untouched; otherwise clears it and focuses
    /// the screen's first candidate.
    pub fn refresh<S>(&mut self, surface: &S, screen: ScreenId) -> Vec<ShellAction>
    where
        S: FocusableSurface + ?Sized,
    {
        let candidates = Self::candidates(surface, screen);
        if self.valid_current(&candidates).is_some() {
            return Vec::new();
        }
        self.state.current = None;
        self.focus_first_of(&candidates)
    }

    /// Current focus if it still names a candidate, `None` otherwise.
    fn valid_current(&self, candidates: &[FocusableElement]) -> Option<ElementId> {
        self.state.current.filter(|id| candidates.iter().any(|e| e.id == *id))
    }

    fn focus_first_of(&mut self, candidates: &[FocusableElement]) -> Vec<ShellAction> {
        match candidates.first() {
            Some(first) => self.set_focus(first.id),
            None => Vec::new(),
        }
    }

    /// Horizontal step within the current row, screen-wide when rowless.
    fn step_in_row<S>(
        &mut self,
        surface: &S,
        candidates: &[FocusableElement],
        current: ElementId,
        direction: Direction,
    ) -> Vec<ShellAction>
    where
        S: FocusableSurface + ?Sized,
    {
        let lane: Vec<ElementId> = match surface.row_of(current) {
            Some(row) => candidates
                .iter()
                .filter(|e| surface.row_of(e.id) == Some(row))
                .map(|e| e.id)
                .collect(),
            None => candidates.iter().map(|e| e.id).collect(),
        };

        let Some(pos) = lane.iter().position(|&id| id == current) else {
            return Vec::new();
        };

        // No wraparound: requests beyond either boundary are dropped.
        let target = match direction {
            Direction::Left => pos.checked_sub(1).map(|i| lane[i]),
            Direction::Right => lane.get(pos + 1).copied(),
            Direction::Up | Direction::Down => None,
        };

        match target {
            Some(element) => self.set_focus(element),
            None => Vec::new(),
        }
    }

    /// Vertical step across rows, or through the flat list when rowless.
    fn step_across_rows<S>(
        &mut self,
        surface: &S,
        candidates: &[FocusableElement],
        current: ElementId,
        direction: Direction,
    ) -> Vec<ShellAction>
    where
        S: FocusableSurface + ?Sized,
    {
        let Some(row) = surface.row_of(current) else {
            // Not in a row: the whole screen is one flat ordered list.
            let Some(pos) = candidates.iter().position(|e| e.id == current) else {
                return Vec::new();
            };
            let target = match direction {
                Direction::Up => pos.checked_sub(1).map(|i| candidates[i].id),
                Direction::Down => candidates.get(pos + 1).map(|e| e.id),
                Direction::Left | Direction::Right => None,
            };
            return match target {
                Some(element) => self.set_focus(element),
                None => Vec::new(),
            };
        };

        let rows = ordered_rows(surface, candidates);
        let Some(row_pos) = rows.iter().position(|&r| r == row) else {
            return Vec::new();
        };

        let adjacent = match direction {
            Direction::Up => row_pos.checked_sub(1).map(|i| rows[i]),
            Direction::Down => rows.get(row_pos + 1).copied(),
            Direction::Left | Direction::Right => None,
        };

        match adjacent {
            Some(next_row) => self.enter_row(surface, candidates, current, next_row),
            None => self.fall_back_to_rowless(surface, candidates, direction),
        }
    }

    /// Move into `next_row`, landing on its nearest-center element.
    fn enter_row<S>(
        &mut self,
        surface: &S,
        candidates: &[FocusableElement],
        current: ElementId,
        next_row: RowId,
    ) -> Vec<ShellAction>
    where
        S: FocusableSurface + ?Sized,
    {
        let Some(reference) =
            candidates.iter().find(|e| e.id == current).map(|e| e.bounds.center_x())
        else {
            return Vec::new();
        };

        let members: Vec<&FocusableElement> =
            candidates.iter().filter(|e| surface.row_of(e.id) == Some(next_row)).collect();

        match nearest_center_x(reference, members.iter().map(|e| e.bounds.center_x())) {
            Some(idx) => self.set_focus(members[idx].id),
            None => Vec::new(),
        }
    }

    /// Past the first/last row: land on elements that belong to no row.
    ///
    /// First rowless element when moving down, last when moving up. No-op
    /// when none exist.
    fn fall_back_to_rowless<S>(
        &mut self,
        surface: &S,
        candidates: &[FocusableElement],
        direction: Direction,
    ) -> Vec<ShellAction>
    where
        S: FocusableSurface + ?Sized,
    {
        let rowless: Vec<ElementId> =
            candidates.iter().filter(|e| surface.row_of(e.id).is_none()).map(|e| e.id).collect();

        let target = match direction {
            Direction::Down => rowless.first().copied(),
            Direction::Up => rowless.last().copied(),
            Direction::Left | Direction::Right => None,
        };

        match target {
            Some(element) => self.set_focus(element),
            None => Vec::new(),
        }
    }
}

/// Distinct rows of the candidate list in document order.
fn ordered_rows<S>(surface: &S, candidates: &[FocusableElement]) -> Vec<RowId>
where
    S: FocusableSurface + ?Sized,
{
    let mut rows = Vec::new();
    for element in candidates {
        if let Some(row) = surface.row_of(element.id)
            && !rows.contains(&row)
        {
            rows.push(row);
        }
    }
    rows
}
