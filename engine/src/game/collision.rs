use super::snake::Snake;
use super::types::{GameEndReason, Point};

/// Classifies a proposed head position against the grid bounds and the body
/// as it stands before this tick's mutation. The tail cell still counts as
/// occupied here even though a non-growth move is about to vacate it.
pub fn classify(target: Point, snake: &Snake, grid_size: i32) -> Option<GameEndReason> {
    if target.x < 0 || target.y < 0 || target.x >= grid_size || target.y >= grid_size {
        return Some(GameEndReason::WallCollision);
    }
    if snake.occupies(target) {
        return Some(GameEndReason::SelfCollision);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID_SIZE: i32 = 12;

    fn row_snake() -> Snake {
        Snake::from_cells(&[Point::new(6, 6), Point::new(5, 6), Point::new(4, 6)])
    }

    #[test]
    fn test_free_cell_is_ok() {
        assert_eq!(classify(Point::new(7, 6), &row_snake(), GRID_SIZE), None);
    }

    #[test]
    fn test_outside_bounds_is_wall() {
        let snake = row_snake();
        assert_eq!(
            classify(Point::new(-1, 6), &snake, GRID_SIZE),
            Some(GameEndReason::WallCollision)
        );
        assert_eq!(
            classify(Point::new(12, 6), &snake, GRID_SIZE),
            Some(GameEndReason::WallCollision)
        );
        assert_eq!(
            classify(Point::new(6, -1), &snake, GRID_SIZE),
            Some(GameEndReason::WallCollision)
        );
        assert_eq!(
            classify(Point::new(6, 12), &snake, GRID_SIZE),
            Some(GameEndReason::WallCollision)
        );
    }

    #[test]
    fn test_body_cell_is_self_collision() {
        assert_eq!(
            classify(Point::new(5, 6), &row_snake(), GRID_SIZE),
            Some(GameEndReason::SelfCollision)
        );
    }

    #[test]
    fn test_tail_cell_still_counts_as_occupied() {
        // 2x2 curl: the head could only reach the tail cell this tick, and
        // that still classifies as a self-collision.
        let snake = Snake::from_cells(&[
            Point::new(6, 5),
            Point::new(6, 6),
            Point::new(5, 6),
            Point::new(5, 5),
        ]);
        assert_eq!(
            classify(Point::new(5, 5), &snake, GRID_SIZE),
            Some(GameEndReason::SelfCollision)
        );
    }
}
