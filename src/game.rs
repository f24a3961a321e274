use crossterm::style::Color;
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::grid::Grid;
use crate::input::Command;
use crate::render::{Cell, Frame, BODY_CHAR, HEAD_CHAR, TARGET_CHAR};
use crate::snake::{Direction, Snake};
use crate::target;
use crate::Point;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    HitWall,
    HitSelf,
    Quit,
    /// The snake covers every cell, no target can be placed.
    BoardFull,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Running,
    Over(GameOverReason),
}

/// Result of a single tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Moved { head: Point, vacated: Option<Point>, ate: bool },
    Crashed(GameOverReason),
    /// The game was already over, nothing happened.
    Halted,
}

/// The state of one game. Keys go through `handle`, time through `tick`.
pub struct Game {
    grid: Grid,
    snake: Snake,
    direction: Direction,
    pending: Option<Direction>,
    target: Option<Point>,
    score: u32,
    state: GameState,
    debug: bool,
    rng: StdRng,
}

impl Game {
    /// A one-segment snake in the middle of the grid, heading right.
    /// `seed` makes target placement reproducible.
    pub fn new(grid: Grid, seed: Option<u64>) -> Self {
        Self::from_parts(grid, Snake::new(grid.center()), Direction::Right, seed)
    }

    pub fn from_parts(grid: Grid, snake: Snake, direction: Direction, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Game {
            grid,
            snake,
            direction,
            pending: None,
            target: None,
            score: 0,
            state: GameState::Running,
            debug: false,
            rng,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.pending.unwrap_or(self.direction)
    }

    pub fn target(&self) -> Option<Point> {
        self.target
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, GameState::Over(_))
    }

    /// Puts the target at `p`, replacing any existing one.
    pub fn place_target(&mut self, p: Point) {
        self.target = Some(p);
    }

    /// Applies a key command. Returns false if it was ignored.
    pub fn handle(&mut self, command: Command) -> bool {
        if self.is_over() {
            return false;
        }

        match command {
            Command::Quit => {
                self.finish(GameOverReason::Quit);
                true
            }
            // Checked against both the pending turn and the heading of the
            // last tick, so two quick turns can't fold the snake onto its neck.
            Command::Turn(dir) if dir.is_opposite(self.direction()) || dir.is_opposite(self.direction) => false,
            Command::Turn(dir) => {
                self.pending = Some(dir);
                true
            }
        }
    }

    pub fn tick(&mut self) -> Step {
        if self.is_over() {
            return Step::Halted;
        }

        if let Some(dir) = self.pending.take() {
            self.direction = dir;
        }

        let head = self.direction.advance(self.snake.head());
        let ate = self.target == Some(head);

        // The body is left as it was, so the last frame never shows an invalid head
        if self.grid.is_out_of_bounds(head) {
            return self.crash(GameOverReason::HitWall);
        }
        if self.snake.hit_self(head) {
            return self.crash(GameOverReason::HitSelf);
        }

        let vacated = self.snake.grow_or_slide(head, ate);

        if ate {
            self.score += 1;
            self.target = None;
            debug!("Target eaten at {:?}, score {}", head, self.score);
        }

        if self.target.is_none() {
            self.target = target::spawn(&mut self.rng, &self.grid, &self.snake);
            if self.target.is_none() {
                self.finish(GameOverReason::BoardFull);
            }
        }

        if self.debug {
            let [pos, dir, oob] = self.debug_lines();
            debug!("{} | {} | {}", pos, dir, oob);
        }

        Step::Moved { head, vacated, ate }
    }

    pub fn frame(&self) -> Frame {
        let mut cells: Vec<Cell> = self.snake.segments()
            .enumerate()
            .map(|(i, p)| match i {
                0 => Cell::new(p, HEAD_CHAR, Color::Green),
                _ => Cell::new(p, BODY_CHAR, Color::Blue),
            })
            .collect();

        if let Some(t) = self.target {
            cells.push(Cell::new(t, TARGET_CHAR, Color::Yellow));
        }

        Frame {
            cells,
            score: format!("Score: {}", self.score),
            debug: if self.debug { Some(self.debug_lines()) } else { None },
        }
    }

    pub fn debug_lines(&self) -> [String; 3] {
        let head = self.snake.head();
        [
            format!("Snake: {} {}", head.x, head.y),
            format!("Dir: {}", self.direction),
            format!("Out of bounds: {}", self.grid.is_out_of_bounds(head)),
        ]
    }

    ///////////////////////////////////////////////////////////////////////////

    fn crash(&mut self, reason: GameOverReason) -> Step {
        self.finish(reason);
        Step::Crashed(reason)
    }

    fn finish(&mut self, reason: GameOverReason) {
        info!("Game over ({:?}), score {}", reason, self.score);
        self.state = GameState::Over(reason);
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction::*;
    use pretty_assertions::assert_eq;

    fn game() -> Game {
        Game::new(Grid::new(50, 25).unwrap(), Some(42))
    }

    #[test]
    fn turning_back_is_rejected() {
        let mut game = game();

        assert!(!game.handle(Command::Turn(Left)));
        assert_eq!(game.direction(), Right);
    }

    #[test]
    fn reversing_a_pending_turn_is_rejected() {
        let mut game = game();

        assert!(game.handle(Command::Turn(Up)));
        assert!(!game.handle(Command::Turn(Down)));
        assert_eq!(game.direction(), Up);
        game.tick();

        assert_eq!(game.snake().head(), Point::new(25, 11));
    }

    #[test]
    fn latest_turn_wins_within_a_tick() {
        let snake = Snake::from_segments([Point::new(5, 5), Point::new(5, 6)]).unwrap();
        let mut game = Game::from_parts(Grid::new(20, 20).unwrap(), snake, Up, Some(1));

        assert!(game.handle(Command::Turn(Left)));
        assert!(game.handle(Command::Turn(Up)));
        game.tick();

        assert_eq!(game.snake().head(), Point::new(5, 4));
    }

    #[test]
    fn quick_double_turn_cannot_reverse() {
        let mut game = game();

        assert!(game.handle(Command::Turn(Up)));
        // still heading right until the next tick
        assert!(!game.handle(Command::Turn(Left)));
        game.tick();

        assert_eq!(game.direction(), Up);
        assert_eq!(game.snake().head(), Point::new(25, 11));
    }

    #[test]
    fn frame_lists_head_body_and_target() {
        let snake = Snake::from_segments([Point::new(3, 3), Point::new(2, 3)]).unwrap();
        let mut game = Game::from_parts(Grid::new(10, 10).unwrap(), snake, Right, Some(1));
        game.place_target(Point::new(6, 6));

        let frame = game.frame();

        assert_eq!(frame.cells, vec![
            Cell::new(Point::new(3, 3), HEAD_CHAR, Color::Green),
            Cell::new(Point::new(2, 3), BODY_CHAR, Color::Blue),
            Cell::new(Point::new(6, 6), TARGET_CHAR, Color::Yellow),
        ]);
        assert_eq!(frame.score, "Score: 0");
        assert_eq!(frame.debug, None);
    }

    #[test]
    fn debug_readout() {
        let game = game().with_debug(true);

        assert_eq!(game.frame().debug, Some([
            "Snake: 25 12".to_string(),
            "Dir: right".to_string(),
            "Out of bounds: false".to_string(),
        ]));
    }

    #[test]
    fn ticks_after_game_over_do_nothing() {
        let mut game = game();
        game.handle(Command::Quit);

        assert_eq!(game.tick(), Step::Halted);
        assert_eq!(game.snake().head(), Point::new(25, 12));
        assert!(!game.handle(Command::Turn(Up)));
    }
}
