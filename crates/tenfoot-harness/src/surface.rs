//! In-memory focusable surface.
//!
//! A [`GridSurface`] stands in for whatever renders screens in production.
//! Tests lay out rows and rowless elements with explicit bounds, then hide,
//! disable or remove elements between operations to simulate content
//! re-renders.

use std::collections::HashMap;

use tenfoot_core::{ElementId, FocusableElement, FocusableSurface, Rect, RowId, ScreenId};

/// Builder-style in-memory surface keyed by screen.
#[derive(Debug, Clone, Default)]
pub struct GridSurface {
    screens: HashMap<ScreenId, Vec<FocusableElement>>,
    rows: HashMap<ElementId, RowId>,
    next_id: u64,
}

impl GridSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row of elements to `screen` in document order.
    ///
    /// Returns the ids of the created elements.
    pub fn add_row(
        &mut self,
        screen: ScreenId,
        row: RowId,
        bounds: impl IntoIterator<Item = Rect>,
    ) -> Vec<ElementId> {
        bounds
            .into_iter()
            .map(|rect| {
                let id = self.push(screen, rect);
                self.rows.insert(id, row);
                id
            })
            .collect()
    }

    /// Append a rowless element (e.g. a top-level button) to `screen`.
    pub fn add_rowless(&mut self, screen: ScreenId, bounds: Rect) -> ElementId {
        self.push(screen, bounds)
    }

    /// Mark an element invisible.
    pub fn hide(&mut self, element: ElementId) {
        self.update(element, |e| e.visible = false);
    }

    /// Mark an element visible again.
    pub fn show(&mut self, element: ElementId) {
        self.update(element, |e| e.visible = true);
    }

    /// Mark an element disabled.
    pub fn disable(&mut self, element: ElementId) {
        self.update(element, |e| e.enabled = false);
    }

    /// Mark an element enabled again.
    pub fn enable(&mut self, element: ElementId) {
        self.update(element, |e| e.enabled = true);
    }

    /// Remove an element entirely, as a re-render would.
    pub fn remove(&mut self, element: ElementId) {
        for elements in self.screens.values_mut() {
            elements.retain(|e| e.id != element);
        }
        self.rows.remove(&element);
    }

    /// True when `element` exists on any screen.
    pub fn contains(&self, element: ElementId) -> bool {
        self.screens.values().any(|elements| elements.iter().any(|e| e.id == element))
    }

    fn push(&mut self, screen: ScreenId, bounds: Rect) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.screens.entry(screen).or_default().push(FocusableElement::new(id, bounds));
        id
    }

    fn update(&mut self, element: ElementId, apply: impl Fn(&mut FocusableElement)) {
        for elements in self.screens.values_mut() {
            if let Some(e) = elements.iter_mut().find(|e| e.id == element) {
                apply(e);
            }
        }
    }
}

impl FocusableSurface for GridSurface {
    fn focusables(&self, screen: ScreenId) -> Vec<FocusableElement> {
        self.screens.get(&screen).cloned().unwrap_or_default()
    }

    fn row_of(&self, element: ElementId) -> Option<RowId> {
        self.rows.get(&element).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: ScreenId = ScreenId("test");

    #[test]
    fn rows_preserve_document_order() {
        let mut surface = GridSurface::new();
        let ids = surface.add_row(SCREEN, RowId(0), [
            Rect::new(0.0, 0.0, 100.0, 50.0),
            Rect::new(0.0, 110.0, 100.0, 50.0),
        ]);

        let elements = surface.focusables(SCREEN);
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].id, ids[0]);
        assert_eq!(elements[1].id, ids[1]);
        assert_eq!(surface.row_of(ids[0]), Some(RowId(0)));
    }

    #[test]
    fn rowless_elements_have_no_row() {
        let mut surface = GridSurface::new();
        let id = surface.add_rowless(SCREEN, Rect::new(0.0, 0.0, 60.0, 30.0));

        assert_eq!(surface.row_of(id), None);
    }

    #[test]
    fn hide_and_remove_change_visibility() {
        let mut surface = GridSurface::new();
        let ids = surface.add_row(SCREEN, RowId(0), [Rect::new(0.0, 0.0, 100.0, 50.0)]);

        surface.hide(ids[0]);
        assert!(!surface.focusables(SCREEN)[0].visible);

        surface.show(ids[0]);
        assert!(surface.focusables(SCREEN)[0].visible);

        surface.remove(ids[0]);
        assert!(!surface.contains(ids[0]));
        assert_eq!(surface.row_of(ids[0]), None);
    }
}
