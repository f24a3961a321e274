pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod input;
pub mod logger;
pub mod render;
pub mod snake;
pub mod target;
pub mod term;

pub use error::Error;

/// Grid coordinate. Signed so a head that leaves the board can still be represented.
pub type Coord = i16;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Point { x, y }
    }
}
