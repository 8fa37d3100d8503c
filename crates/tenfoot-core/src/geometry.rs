//! Bounding-box geometry for focus navigation.
//!
//! Elements report their position as a [`Rect`] in an abstract pixel space.
//! The focus engine only ever compares horizontal centers; the scroll helper
//! computes the viewport nudge a host applies when focus lands off-screen.

/// Axis-aligned bounding box of a focusable element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Distance from the top edge of the canvas.
    pub top: f32,
    /// Distance from the left edge of the canvas.
    pub left: f32,
    /// Box width.
    pub width: f32,
    /// Box height.
    pub height: f32,
}

impl Rect {
    /// Create a rect from top/left/width/height.
    pub const fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self { top, left, width, height }
    }

    /// Horizontal center of the box.
    pub fn center_x(&self) -> f32 {
        self.left + self.width / 2.0
    }

    /// Right edge of the box.
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Bottom edge of the box.
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Viewport shift needed to bring `target` fully into `viewport`.
///
/// Returns `(dx, dy)` to add to the current scroll offset. Zero on both axes
/// when the target is already contained. When the target is larger than the
/// viewport its top/left edge wins.
pub fn scroll_adjustment(viewport: Rect, target: Rect) -> (f32, f32) {
    let dx = if target.left < viewport.left {
        target.left - viewport.left
    } else if target.right() > viewport.right() {
        target.right() - viewport.right()
    } else {
        0.0
    };

    let dy = if target.top < viewport.top {
        target.top - viewport.top
    } else if target.bottom() > viewport.bottom() {
        target.bottom() - viewport.bottom()
    } else {
        0.0
    };

    // Oversized targets align to their top/left edge.
    let dx = if target.width > viewport.width { target.left - viewport.left } else { dx };
    let dy = if target.height > viewport.height { target.top - viewport.top } else { dy };

    (dx, dy)
}

/// Index of the candidate whose horizontal center is nearest to `reference`.
///
/// Ties keep the earliest candidate (document order). `None` for an empty
/// iterator.
pub(crate) fn nearest_center_x<I>(reference: f32, centers: I) -> Option<usize>
where
    I: IntoIterator<Item = f32>,
{
    let mut best: Option<(usize, f32)> = None;
    for (idx, center) in centers.into_iter().enumerate() {
        let distance = (center - reference).abs();
        match best {
            Some((_, current)) if distance >= current => {},
            _ => best = Some((idx, distance)),
        }
    }
    best.map(|(idx, _)| idx)
}
