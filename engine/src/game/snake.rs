use std::collections::{HashSet, VecDeque};

use super::types::Point;

/// Snake body, head-first, with a set index for O(1) occupancy checks.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
}

impl Snake {
    /// Builds a snake with its head at `head` and the body extending left.
    pub fn new(head: Point, length: usize) -> Self {
        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();

        for i in 0..length as i32 {
            let segment = Point::new(head.x - i, head.y);
            body.push_back(segment);
            body_set.insert(segment);
        }

        Self { body, body_set }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.body_set.contains(&point)
    }

    pub fn push_head(&mut self, point: Point) {
        self.body.push_front(point);
        self.body_set.insert(point);
    }

    pub fn pop_tail(&mut self) {
        let tail = self
            .body
            .pop_back()
            .expect("Snake body should never be empty");
        self.body_set.remove(&tail);
    }

    pub fn cells(&self) -> Vec<Point> {
        self.body.iter().copied().collect()
    }

    #[cfg(test)]
    pub fn from_cells(cells: &[Point]) -> Self {
        Self {
            body: cells.iter().copied().collect(),
            body_set: cells.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_extends_left_from_head() {
        let snake = Snake::new(Point::new(6, 6), 3);
        assert_eq!(
            snake.cells(),
            vec![Point::new(6, 6), Point::new(5, 6), Point::new(4, 6)]
        );
        assert_eq!(snake.head(), Point::new(6, 6));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_push_head_and_pop_tail_keep_index_in_sync() {
        let mut snake = Snake::new(Point::new(6, 6), 3);
        snake.push_head(Point::new(7, 6));
        assert!(snake.occupies(Point::new(7, 6)));
        assert!(snake.occupies(Point::new(4, 6)));

        snake.pop_tail();
        assert!(!snake.occupies(Point::new(4, 6)));
        assert_eq!(snake.len(), 3);
    }
}
