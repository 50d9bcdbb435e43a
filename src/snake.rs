use std::collections::VecDeque;

use crate::config::GridSize;
use crate::error::ConfigError;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: self.x.rem_euclid(i32::from(bounds.width)),
            y: self.y.rem_euclid(i32::from(bounds.height)),
        }
    }

    /// Neighbouring cell one step towards `direction`, wrapped around the grid edges.
    #[must_use]
    pub fn step(self, direction: Direction, bounds: GridSize) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
        .wrapped(bounds)
    }
}

/// Snake body stored tail first, head last.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `head`.
    #[must_use]
    pub fn new(head: Position) -> Self {
        Self {
            body: VecDeque::from([head]),
        }
    }

    /// Creates a snake from explicit segments, ordered tail to head.
    pub fn from_segments(segments: Vec<Position>, bounds: GridSize) -> Result<Self, ConfigError> {
        if segments.is_empty() {
            return Err(ConfigError::EmptySnake);
        }

        for (index, segment) in segments.iter().enumerate() {
            if !segment.is_within_bounds(bounds) {
                return Err(ConfigError::OutOfBounds {
                    position: *segment,
                    grid: bounds,
                });
            }
            if segments[..index].contains(segment) {
                return Err(ConfigError::OverlappingSegments(*segment));
            }
        }

        Ok(Self {
            body: VecDeque::from(segments),
        })
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        // The body is never empty: every constructor inserts at least one
        // segment and `advance` pushes before it pops.
        self.body[self.body.len() - 1]
    }

    /// Returns the oldest segment.
    #[must_use]
    pub fn tail(&self) -> Position {
        self.body[0]
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if moving the head onto `next` would hit the body.
    ///
    /// Without growth the tail leaves its cell during the same tick, so that
    /// cell does not count.
    #[must_use]
    pub fn would_collide(&self, next: Position, grows: bool) -> bool {
        let vacated = usize::from(!grows);
        self.body.iter().skip(vacated).any(|segment| *segment == next)
    }

    /// Pushes `next` as the new head and drops the tail unless growing.
    pub fn advance(&mut self, next: Position, grows: bool) {
        self.body.push_back(next);
        if !grows {
            let _ = self.body.pop_front();
        }
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over segments from tail to head.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = &Position> {
        self.body.iter()
    }

    /// Iterates over segments behind the head, tail first.
    pub fn body(&self) -> impl Iterator<Item = &Position> {
        self.body.iter().take(self.body.len() - 1)
    }
}
