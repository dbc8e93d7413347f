//! Logical input commands and swipe gesture detection.
//!
//! Front ends translate raw events (keys, clicks, drags) into [`Command`]s
//! through a dispatch table; nothing downstream sees the raw event.

/// Navigation request for the slide navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    Next,
    Previous,
    JumpTo(usize),
}

/// Everything a front end can ask the presenter to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Nav(NavAction),
    ToggleFullscreen,
    ToggleHelp,
    SpinWheel,
    FocusNextCta,
    ActivateCta,
    Dismiss,
    Quit,
}

/// A pointer position in front-end units (terminal cells, pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Detects horizontal swipes from a press/release pair.
///
/// A swipe counts when the horizontal travel dominates the vertical travel
/// and exceeds `threshold`. Dragging leftwards means "next".
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: u32,
    start: Option<Point>,
}

impl SwipeTracker {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn press(&mut self, at: Point) {
        self.start = Some(at);
    }

    /// Finish the gesture. The tracker is reset either way.
    pub fn release(&mut self, at: Point) -> Option<NavAction> {
        let start = self.start.take()?;
        let dx = start.x - at.x;
        let dy = start.y - at.y;
        if dx.unsigned_abs() > dy.unsigned_abs() && dx.unsigned_abs() > self.threshold {
            Some(if dx > 0 {
                NavAction::Next
            } else {
                NavAction::Previous
            })
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}
