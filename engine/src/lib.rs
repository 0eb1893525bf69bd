pub mod logger;

mod game;
mod rng;
mod score_store;
mod session;
mod settings;

pub use game::{
    Direction, GameEndReason, GamePhase, GameState, Point, Snake, StateSnapshot, TickOutcome,
};
pub use rng::GameRng;
pub use score_store::{FileScoreStore, ScoreStore};
pub use session::{GameOverSummary, GameSession, Renderer, SessionCommand};
pub use settings::GameSettings;
