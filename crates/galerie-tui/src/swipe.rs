//! Horizontal swipe detection for the artwork viewer.
//!
//! Mouse drags are tracked in cells and converted to logical pixels with
//! nominal cell metrics, so the same thresholds hold across font sizes.

/// Nominal terminal cell size in logical pixels.
const CELL_WIDTH_PX: f64 = 8.0;
const CELL_HEIGHT_PX: f64 = 16.0;

/// Minimum horizontal travel for a gesture to count as a swipe.
pub const MIN_SWIPE_X: f64 = 60.0;

/// Horizontal travel must dominate vertical by this factor, so diagonal
/// scrolls inside the viewer are not misread as swipes.
pub const HORIZONTAL_DOMINANCE: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Leftward drag, advance to the next item.
    Next,
    /// Rightward drag, go back to the previous item.
    Prev,
}

/// Classify a finished drag by its total displacement in logical pixels.
pub fn classify(dx: f64, dy: f64) -> Option<SwipeDirection> {
    if dx.abs() < MIN_SWIPE_X || dx.abs() < HORIZONTAL_DOMINANCE * dy.abs() {
        return None;
    }
    Some(if dx < 0.0 {
        SwipeDirection::Next
    } else {
        SwipeDirection::Prev
    })
}

/// Accumulates one mouse drag, in cells, from press to release.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    origin: Option<(u16, u16)>,
    last: (u16, u16),
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, column: u16, row: u16) {
        self.origin = Some((column, row));
        self.last = (column, row);
    }

    pub fn update(&mut self, column: u16, row: u16) {
        if self.origin.is_some() {
            self.last = (column, row);
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    /// End the drag and classify it. Resets the tracker either way.
    pub fn finish(&mut self, column: u16, row: u16) -> Option<SwipeDirection> {
        self.update(column, row);
        let (ox, oy) = self.origin.take()?;
        let (cx, cy) = self.last;
        let dx = (cx as f64 - ox as f64) * CELL_WIDTH_PX;
        let dy = (cy as f64 - oy as f64) * CELL_HEIGHT_PX;
        classify(dx, dy)
    }

    pub fn reset(&mut self) {
        self.origin = None;
    }
}
