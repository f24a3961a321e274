use std::collections::BTreeMap;
use std::io;

use crossterm::style::Color;

use crate::Point;

pub const HEAD_CHAR: char = '@';
pub const BODY_CHAR: char = 'o';
pub const TARGET_CHAR: char = '*';

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub point: Point,
    pub glyph: char,
    pub color: Color,
}

impl Cell {
    pub fn new(point: Point, glyph: char, color: Color) -> Self {
        Cell { point, glyph, color }
    }
}

/// Everything drawn for one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub cells: Vec<Cell>,
    pub score: String,
    pub debug: Option<[String; 3]>,
}

pub trait RenderSink {
    fn render(&mut self, frame: &Frame) -> io::Result<()>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Change {
    Erase(Point),
    Draw(Cell),
}

/// What is currently on screen, keyed by grid point.
#[derive(Default, Debug)]
pub struct Canvas {
    drawn: BTreeMap<Point, Cell>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the drawn set with `cells` and returns the changes needed to
    /// get there. Later cells win when two share a point.
    pub fn update(&mut self, cells: &[Cell]) -> Vec<Change> {
        let next: BTreeMap<Point, Cell> = cells.iter().map(|c| (c.point, *c)).collect();

        let erased = self.drawn.keys()
            .filter(|p| !next.contains_key(*p))
            .map(|p| Change::Erase(*p));
        let drawn = next.values()
            .filter(|c| self.drawn.get(&c.point) != Some(*c))
            .map(|c| Change::Draw(*c));
        let changes = erased.chain(drawn).collect();

        self.drawn = next;
        changes
    }

    #[cfg(test)]
    fn get(&self, p: Point) -> Option<&Cell> {
        self.drawn.get(&p)
    }

    pub fn clear(&mut self) {
        self.drawn.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn body(x: i16) -> Cell {
        Cell::new(Point::new(x, 0), BODY_CHAR, Color::Blue)
    }

    fn head(x: i16) -> Cell {
        Cell::new(Point::new(x, 0), HEAD_CHAR, Color::Green)
    }

    #[test]
    fn first_update_draws_everything() {
        let mut canvas = Canvas::new();

        let changes = canvas.update(&[head(1), body(0)]);

        assert_eq!(changes, vec![Change::Draw(body(0)), Change::Draw(head(1))]);
    }

    #[test]
    fn only_changed_cells_are_touched() {
        let mut canvas = Canvas::new();
        canvas.update(&[head(2), body(1), body(0)]);

        let changes = canvas.update(&[head(3), body(2), body(1)]);

        assert_eq!(changes, vec![Change::Erase(Point::new(0, 0)), Change::Draw(body(2)), Change::Draw(head(3))]);
        assert_eq!(canvas.get(Point::new(1, 0)), Some(&body(1)));
        assert_eq!(canvas.get(Point::new(0, 0)), None);
    }

    #[test]
    fn identical_frame_is_a_no_op() {
        let mut canvas = Canvas::new();
        canvas.update(&[head(1), body(0)]);

        assert!(canvas.update(&[head(1), body(0)]).is_empty());
    }
}
