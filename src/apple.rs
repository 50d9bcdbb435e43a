use rand::Rng;

use crate::config::{GridSize, MAX_REJECTION_SAMPLES};
use crate::snake::{Position, Snake};

/// Draws a uniformly random cell of the grid.
#[must_use]
pub fn random_cell<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    }
}

/// Picks a free cell for the next apple, or `None` when the snake covers the board.
///
/// Random cells are drawn until one is free. After [`MAX_REJECTION_SAMPLES`]
/// misses the free cells are enumerated and one is drawn from that list, so
/// crowded boards still finish in bounded time with a uniform pick.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    if snake.len() >= bounds.total_cells() {
        return None;
    }

    for _ in 0..MAX_REJECTION_SAMPLES {
        let candidate = random_cell(rng, bounds);
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    let candidates = free_cells(bounds, snake);
    log::debug!(
        "apple sampling fell back to enumeration, {} free cells",
        candidates.len()
    );
    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

fn free_cells(bounds: GridSize, snake: &Snake) -> Vec<Position> {
    let mut candidates = Vec::with_capacity(bounds.total_cells().saturating_sub(snake.len()));

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    candidates
}
