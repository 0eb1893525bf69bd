mod collision;
mod food;
mod snake;
mod state;
mod types;

pub use snake::Snake;
pub use state::{GameState, StateSnapshot, TickOutcome};
pub use types::{Direction, GameEndReason, GamePhase, Point};
