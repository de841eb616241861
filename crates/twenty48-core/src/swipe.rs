//! Turning pointer gestures into swipe directions.

use crate::geom::{Direction, Point};

/// Horizontal displacement is divided by this before classification:
/// a terminal cell is roughly twice as tall as it is wide.
pub const DEFAULT_COLUMN_DIVISOR: i32 = 2;

/// Classify a displacement. `None` if the gesture is shorter than
/// `threshold` on both axes; otherwise the dominant axis wins, with ties
/// going to the vertical axis.
///
/// ```
/// use twenty48_core::{Direction, Point, classify};
/// assert_eq!(classify(Point::new(-5, 1), 2), Some(Direction::Left));
/// assert_eq!(classify(Point::new(1, 1), 2), None);
/// ```
pub fn classify(delta: Point, threshold: i32) -> Option<Direction> {
    let (ax, ay) = (delta.x.abs(), delta.y.abs());
    if ax < threshold && ay < threshold {
        return None;
    }
    let dir = if ax > ay {
        if delta.x > 0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if delta.y > 0 {
        Direction::Down
    } else {
        Direction::Up
    };
    Some(dir)
}

/// Tracks a press → release drag and classifies it on release.
#[derive(Clone, Debug)]
pub struct SwipeTracker {
    threshold: i32,
    column_divisor: i32,
    origin: Option<Point>,
}

impl SwipeTracker {
    pub fn new(threshold: i32) -> Self {
        Self {
            threshold,
            column_divisor: DEFAULT_COLUMN_DIVISOR,
            origin: None,
        }
    }

    /// Set the horizontal divisor (builder). Values below 1 are treated as 1.
    pub fn with_column_divisor(mut self, divisor: i32) -> Self {
        self.column_divisor = divisor.max(1);
        self
    }

    /// Start a gesture at `pos`, discarding any gesture in progress.
    pub fn press(&mut self, pos: Point) {
        self.origin = Some(pos);
    }

    /// End the gesture at `pos`. Returns the swipe direction, if the drag
    /// was long enough. A release without a press yields `None`.
    pub fn release(&mut self, pos: Point) -> Option<Direction> {
        let origin = self.origin.take()?;
        let d = pos - origin;
        classify(Point::new(d.x / self.column_divisor, d.y), self.threshold)
    }

    pub fn cancel(&mut self) {
        self.origin = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }
}
