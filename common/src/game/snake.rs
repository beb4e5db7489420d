use std::collections::{HashSet, VecDeque};

use super::types::Point;

/// Snake body, head first. `body_set` mirrors `body` for O(1) occupancy
/// checks; the two are kept in lockstep by `advance` and `grow`.
#[derive(Clone, Debug, PartialEq)]
pub struct Snake {
    pub body: VecDeque<Point>,
    pub body_set: HashSet<Point>,
}

impl Snake {
    pub fn new(start: Point) -> Self {
        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();
        body.push_back(start);
        body_set.insert(start);

        Self { body, body_set }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, pos: &Point) -> bool {
        self.body_set.contains(pos)
    }

    /// Constant-length move: the tail cell is vacated before the new head is
    /// added, so stepping onto the vacated cell keeps the set consistent.
    pub fn advance(&mut self, new_head: Point) {
        let tail = self
            .body
            .pop_back()
            .expect("Snake body should never be empty");
        self.body_set.remove(&tail);
        self.body.push_front(new_head);
        self.body_set.insert(new_head);
    }

    /// Growth move: the tail stays, length increases by one.
    pub fn grow(&mut self, new_head: Point) {
        self.body.push_front(new_head);
        self.body_set.insert(new_head);
    }

    #[cfg(test)]
    pub(crate) fn from_cells(cells: Vec<Point>) -> Self {
        let body: VecDeque<Point> = cells.into_iter().collect();
        let body_set: HashSet<Point> = body.iter().copied().collect();
        Self { body, body_set }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_single_segment() {
        let snake = Snake::new(Point::new(10, 10));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Point::new(10, 10));
        assert_eq!(snake.tail(), Point::new(10, 10));
    }

    #[test]
    fn test_advance_keeps_length_and_set_in_sync() {
        let mut snake = Snake::from_cells(vec![
            Point::new(5, 5),
            Point::new(4, 5),
            Point::new(3, 5),
        ]);

        snake.advance(Point::new(6, 5));

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Point::new(6, 5));
        assert!(!snake.occupies(&Point::new(3, 5)));
        assert_eq!(snake.body_set.len(), snake.len());
    }

    #[test]
    fn test_advance_onto_vacated_tail_cell() {
        // 2x2 loop: the new head lands exactly where the tail just left.
        let mut snake = Snake::from_cells(vec![
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(2, 2),
            Point::new(1, 2),
        ]);

        snake.advance(Point::new(1, 2));

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Point::new(1, 2));
        assert!(snake.occupies(&Point::new(1, 2)));
        assert_eq!(snake.body_set.len(), snake.len());
    }

    #[test]
    fn test_grow_extends_length() {
        let mut snake = Snake::new(Point::new(10, 10));
        snake.grow(Point::new(11, 10));

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Point::new(11, 10));
        assert_eq!(snake.tail(), Point::new(10, 10));
    }
}
