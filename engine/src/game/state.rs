use crate::log;
use crate::rng::GameRng;
use crate::settings::GameSettings;

use super::collision;
use super::food;
use super::snake::Snake;
use super::types::{Direction, GameEndReason, GamePhase, Point};

const INITIAL_SNAKE_LENGTH: usize = 3;
const INITIAL_DIRECTION: Direction = Direction::Right;

/// Result of a single tick, as seen by the loop driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Head advanced, tail vacated, length unchanged.
    Moved,
    /// Food eaten: score increased, snake grew, new food placed.
    Ate,
    /// The game just ended on this tick.
    Ended {
        reason: GameEndReason,
        new_record: bool,
    },
    /// Tick arrived while not running and was ignored.
    Skipped,
}

/// Immutable view handed to renderers.
#[derive(Clone, Debug)]
pub struct StateSnapshot {
    pub grid_size: i32,
    pub snake: Vec<Point>,
    pub food: Option<Point>,
    pub direction: Direction,
    pub score: u32,
    pub high_score: u32,
    pub phase: GamePhase,
    pub end_reason: Option<GameEndReason>,
}

/// The single-snake state machine: owns the body, direction buffer, food,
/// score and phase. All phase transitions happen here.
pub struct GameState {
    grid_size: i32,
    food_score: u32,
    snake: Snake,
    direction: Direction,
    pending_direction: Option<Direction>,
    food: Option<Point>,
    score: u32,
    high_score: u32,
    phase: GamePhase,
    end_reason: Option<GameEndReason>,
}

impl GameState {
    pub fn new(settings: &GameSettings, high_score: u32, rng: &mut GameRng) -> Self {
        let grid_size = settings.grid_size;
        let snake = Self::initial_snake(grid_size);
        let food = food::place(rng, &snake, grid_size);

        Self {
            grid_size,
            food_score: settings.food_score,
            snake,
            direction: INITIAL_DIRECTION,
            pending_direction: None,
            food,
            score: 0,
            high_score,
            phase: GamePhase::Idle,
            end_reason: None,
        }
    }

    fn initial_snake(grid_size: i32) -> Snake {
        Snake::new(
            Point::new(grid_size / 2, grid_size / 2),
            INITIAL_SNAKE_LENGTH,
        )
    }

    /// Idle -> Running. Returns false (and does nothing) from any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase == GamePhase::Idle {
            self.phase = GamePhase::Running;
            true
        } else {
            false
        }
    }

    /// Running <-> Paused. Ignored while Idle or Over; returns the new phase
    /// when a transition happened.
    pub fn toggle_pause(&mut self) -> Option<GamePhase> {
        match self.phase {
            GamePhase::Running => {
                self.phase = GamePhase::Paused;
                Some(GamePhase::Paused)
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Running;
                Some(GamePhase::Running)
            }
            GamePhase::Idle | GamePhase::Over => None,
        }
    }

    /// Resets everything except the high score and returns to Idle.
    pub fn restart(&mut self, rng: &mut GameRng) {
        self.snake = Self::initial_snake(self.grid_size);
        self.direction = INITIAL_DIRECTION;
        self.pending_direction = None;
        self.food = food::place(rng, &self.snake, self.grid_size);
        self.score = 0;
        self.phase = GamePhase::Idle;
        self.end_reason = None;
    }

    /// Buffers a direction change for the next tick. A direction opposite to
    /// the live heading is rejected even if another turn is already buffered.
    /// All input is ignored once the game is over.
    pub fn buffer_direction(&mut self, direction: Direction) {
        if self.phase == GamePhase::Over {
            return;
        }
        if direction.is_opposite(&self.direction) {
            return;
        }
        self.pending_direction = Some(direction);
    }

    /// Advances the game by one cell. Commits the buffered direction, moves
    /// the head, resolves collisions and food, and reports what happened.
    pub fn tick(&mut self, rng: &mut GameRng) -> TickOutcome {
        if self.phase != GamePhase::Running {
            return TickOutcome::Skipped;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let target = self.snake.head().step(self.direction);
        if let Some(reason) = collision::classify(target, &self.snake, self.grid_size) {
            return self.finish(reason);
        }

        self.snake.push_head(target);

        if self.food == Some(target) {
            self.score += self.food_score;
            log!(
                "Ate food at ({}, {}). Score: {}",
                target.x,
                target.y,
                self.score
            );
            match food::place(rng, &self.snake, self.grid_size) {
                Some(food) => {
                    self.food = Some(food);
                    TickOutcome::Ate
                }
                None => {
                    self.food = None;
                    self.finish(GameEndReason::BoardFull)
                }
            }
        } else {
            self.snake.pop_tail();
            TickOutcome::Moved
        }
    }

    fn finish(&mut self, reason: GameEndReason) -> TickOutcome {
        self.phase = GamePhase::Over;
        self.end_reason = Some(reason);
        let new_record = self.score > self.high_score;
        if new_record {
            self.high_score = self.score;
        }
        TickOutcome::Ended { reason, new_record }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            grid_size: self.grid_size,
            snake: self.snake.cells(),
            food: self.food,
            direction: self.direction,
            score: self.score,
            high_score: self.high_score,
            phase: self.phase,
            end_reason: self.end_reason,
        }
    }

    #[cfg(test)]
    fn set_food(&mut self, food: Point) {
        self.food = Some(food);
    }

    #[cfg(test)]
    fn set_snake(&mut self, cells: &[Point], direction: Direction) {
        self.snake = Snake::from_cells(cells);
        self.direction = direction;
        self.pending_direction = None;
    }
}
