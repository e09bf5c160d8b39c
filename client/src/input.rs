//! Click buffering: two consecutive clicks on distinct valid grid points form
//! one move submission.
//!
//! Grid points arrive as "x,y" lines on standard input; the mouse-to-grid
//! mapping of a graphical frontend would feed the same buffer.

use log::warn;
use shared::Point;

/// Parses a single "x,y" input line into a grid point.
pub fn parse_point(line: &str) -> Option<Point> {
    let (x, y) = line.trim().split_once(',')?;
    Some(Point::new(
        x.trim().parse().ok()?,
        y.trim().parse().ok()?,
    ))
}

/// Holds at most one pending click while waiting for its pair.
#[derive(Debug, Default)]
pub struct ClickBuffer {
    pending: Option<Point>,
}

impl ClickBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a click. Returns the move pair once a second distinct point
    /// arrives; the buffer is then cleared, regardless of what the server
    /// later says about the move. Out-of-bounds points are ignored, and
    /// repeating the pending point keeps it pending.
    pub fn push(&mut self, point: Point) -> Option<(Point, Point)> {
        if !point.in_bounds() {
            warn!("Ignoring out-of-bounds point ({}, {})", point.x, point.y);
            return None;
        }

        match self.pending {
            None => {
                self.pending = Some(point);
                None
            }
            Some(first) if first == point => None,
            Some(first) => {
                self.pending = None;
                Some((first, point))
            }
        }
    }

    pub fn pending(&self) -> Option<Point> {
        self.pending
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}
