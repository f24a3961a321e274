use crate::error::{Error, Result};
use crate::{Coord, Point};

/// Outer box dimensions must leave at least a 3x3 playable area, so the
/// center is always a playable cell.
pub const MIN_SIDE: u16 = 5;
pub const MAX_SIDE: u16 = 1000;

/// The bordered game box. `width` and `height` include the one-cell border on
/// each edge, so the playable area is `(width - 2) x (height - 2)` cells with
/// coordinates starting at 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let valid = |side: u16| (MIN_SIDE..=MAX_SIDE).contains(&side);
        if !valid(width) || !valid(height) {
            return Err(Error::InvalidGrid { width, height, min: MIN_SIDE, max: MAX_SIDE });
        }

        Ok(Grid { width, height })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of playable columns, i.e. `x` ranges over `0..columns`.
    pub fn columns(&self) -> Coord {
        (self.width - 2) as Coord
    }

    /// Number of playable rows, i.e. `y` ranges over `0..rows`.
    pub fn rows(&self) -> Coord {
        (self.height - 2) as Coord
    }

    pub fn cell_count(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as Coord, (self.height / 2) as Coord)
    }

    pub fn is_out_of_bounds(&self, p: Point) -> bool {
        p.x < 0 || p.x >= self.columns() || p.y < 0 || p.y >= self.rows()
    }
}
