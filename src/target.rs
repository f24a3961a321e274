use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::Grid;
use crate::snake::Snake;
use crate::Point;

/// A uniformly random playable cell.
pub fn random_point<R: Rng + ?Sized>(rng: &mut R, grid: &Grid) -> Point {
    Point::new(rng.gen_range(0..grid.columns()), rng.gen_range(0..grid.rows()))
}

/// A random cell not covered by the snake, or `None` when the board is full.
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: &Grid, snake: &Snake) -> Option<Point> {
    let free: Vec<Point> = (0..grid.rows())
        .flat_map(|y| (0..grid.columns()).map(move |x| Point::new(x, y)))
        .filter(|p| !snake.contains(*p))
        .collect();

    let res = free.choose(rng).copied();
    if let Some(target) = res {
        debug!("Target spawned at {:?}", target);
    }
    res
}
