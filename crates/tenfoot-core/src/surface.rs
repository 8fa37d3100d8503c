//! Focusable-surface seam.
//!
//! The [`FocusableSurface`] trait decouples the focus engine from whatever
//! renders the screen. A surface answers two questions: which interactive
//! elements are currently on a screen (in document order, with geometry), and
//! which row container an element belongs to. Any rendering technology can
//! implement it, including a pure in-memory test double.

use crate::{geometry::Rect, screen::ScreenId};

/// Opaque handle for a focusable element.
///
/// Handles are owned by the currently rendered screen; the engine holds only
/// the id and re-validates it against the surface before every operation, so
/// a handle never outlives a screen transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque handle for a row container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u32);

/// A focusable element as reported by the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusableElement {
    /// Opaque element handle.
    pub id: ElementId,
    /// Bounding box in canvas coordinates.
    pub bounds: Rect,
    /// Element is currently rendered.
    pub visible: bool,
    /// Element accepts activation.
    pub enabled: bool,
}

impl FocusableElement {
    /// Create a visible, enabled element.
    pub const fn new(id: ElementId, bounds: Rect) -> Self {
        Self { id, bounds, visible: true, enabled: true }
    }

    /// Element qualifies as a focus candidate.
    pub fn focusable(&self) -> bool {
        self.visible && self.enabled
    }
}

/// Queryable view of a screen's interactive elements.
///
/// Implementations return elements in document/traversal order. They may
/// include invisible or disabled entries; the engine filters them. Row
/// membership is reverse-looked-up per element and never cached by the
/// engine, so surfaces are free to regroup elements between calls.
pub trait FocusableSurface {
    /// Interactive elements of `screen` in document order.
    fn focusables(&self, screen: ScreenId) -> Vec<FocusableElement>;

    /// Row container of `element`, if it belongs to one.
    fn row_of(&self, element: ElementId) -> Option<RowId>;
}
