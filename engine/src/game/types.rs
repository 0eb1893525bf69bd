/// Grid cell. Signed so a proposed head one step past the edge is
/// representable for wall classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, direction: Direction) -> Point {
        let (dx, dy) = direction.offset();
        Point::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Idle,
    Running,
    Paused,
    Over,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEndReason {
    WallCollision,
    SelfCollision,
    /// The snake filled the grid and no cell is left for food.
    BoardFull,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_opposite_pairs() {
        assert!(Direction::Left.is_opposite(&Direction::Right));
        assert!(Direction::Up.is_opposite(&Direction::Down));
        assert!(!Direction::Left.is_opposite(&Direction::Up));
        assert!(!Direction::Right.is_opposite(&Direction::Right));
    }

    #[test]
    fn test_step_moves_one_cell() {
        let origin = Point::new(6, 6);
        assert_eq!(origin.step(Direction::Right), Point::new(7, 6));
        assert_eq!(origin.step(Direction::Left), Point::new(5, 6));
        assert_eq!(origin.step(Direction::Up), Point::new(6, 5));
        assert_eq!(origin.step(Direction::Down), Point::new(6, 7));
    }
}
