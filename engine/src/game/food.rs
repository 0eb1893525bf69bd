use crate::rng::GameRng;

use super::snake::Snake;
use super::types::Point;

const MAX_RANDOM_ATTEMPTS: usize = 100;

/// Picks a free cell for the next food. Random cells are sampled up to a
/// fixed budget, then the grid is scanned row by row so placement always
/// terminates. Returns `None` only when the snake covers the whole grid.
pub fn place(rng: &mut GameRng, snake: &Snake, grid_size: i32) -> Option<Point> {
    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let candidate = Point::new(rng.random_range(0..grid_size), rng.random_range(0..grid_size));
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    for y in 0..grid_size {
        for x in 0..grid_size {
            let candidate = Point::new(x, y);
            if !snake.occupies(candidate) {
                return Some(candidate);
            }
        }
    }

    None
}
