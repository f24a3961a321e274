use std::collections::VecDeque;
use std::fmt;

use crate::Point;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// The neighbouring cell one step away. No bounds checking.
    pub fn advance(self, from: Point) -> Point {
        let (dx, dy) = match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        };

        Point::new(from.x + dx, from.y + dy)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Up => "up",
            Down => "down",
            Left => "left",
            Right => "right",
        };
        f.write_str(name)
    }
}

/// Body segments, head first. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Point>,
}

impl Snake {
    pub fn new(head: Point) -> Self {
        Snake { body: VecDeque::from([head]) }
    }

    /// Builds a snake from head-first segments, `None` if there are none.
    pub fn from_segments<I: IntoIterator<Item = Point>>(segments: I) -> Option<Self> {
        let body: VecDeque<Point> = segments.into_iter().collect();
        if body.is_empty() {
            None
        } else {
            Some(Snake { body })
        }
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.body.contains(&p)
    }

    /// Moves the head onto `new_head`. The tail stays put when the snake has
    /// just eaten, otherwise it is dropped and returned.
    pub fn grow_or_slide(&mut self, new_head: Point, ate_target: bool) -> Option<Point> {
        self.body.push_front(new_head);

        if ate_target {
            None
        } else {
            self.body.pop_back()
        }
    }

    /// Whether `head` lands on any segment behind the current head.
    pub fn hit_self(&self, head: Point) -> bool {
        self.body.iter().skip(1).any(|&segment| segment == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Direction::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn advance_moves_exactly_one_axis_by_one() {
        let heads = [Point::new(0, 0), Point::new(25, 12), Point::new(-3, 7)];

        for head in heads {
            for dir in Direction::ALL {
                let next = dir.advance(head);
                let (dx, dy) = ((next.x - head.x).abs(), (next.y - head.y).abs());
                assert_eq!(dx + dy, 1, "{} from {:?}", dir, head);
            }
        }
    }

    #[test]
    fn advance_offsets() {
        let p = Point::new(5, 5);

        assert_eq!(Up.advance(p), Point::new(5, 4));
        assert_eq!(Down.advance(p), Point::new(5, 6));
        assert_eq!(Left.advance(p), Point::new(4, 5));
        assert_eq!(Right.advance(p), Point::new(6, 5));
    }

    #[test]
    fn opposites() {
        assert!(Up.is_opposite(Down));
        assert!(Left.is_opposite(Right));
        assert!(!Up.is_opposite(Left));
        assert!(!Right.is_opposite(Right));
    }

    #[test]
    fn slide_keeps_length() {
        let mut snake = Snake::from_segments([Point::new(2, 0), Point::new(1, 0)]).unwrap();

        let vacated = snake.grow_or_slide(Point::new(3, 0), false);

        assert_eq!(vacated, Some(Point::new(1, 0)));
        assert_eq!(snake.segments().collect::<Vec<_>>(), vec![Point::new(3, 0), Point::new(2, 0)]);
    }

    #[test]
    fn eating_grows_by_one() {
        let mut snake = Snake::new(Point::new(2, 0));

        let vacated = snake.grow_or_slide(Point::new(3, 0), true);

        assert_eq!(vacated, None);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Point::new(3, 0));
    }

    #[test]
    fn hit_self_ignores_head() {
        let snake = Snake::from_segments([Point::new(3, 0), Point::new(2, 0), Point::new(1, 0)]).unwrap();

        assert!(!snake.hit_self(Point::new(3, 0)));
        assert!(snake.hit_self(Point::new(2, 0)));
        assert!(snake.hit_self(Point::new(1, 0)));
        assert!(!snake.hit_self(Point::new(4, 0)));
    }

    #[test]
    fn empty_snake_is_rejected() {
        assert_eq!(Snake::from_segments(Vec::new()), None);
    }
}
