use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Instant, Interval};

use crate::game::{Direction, GameEndReason, GamePhase, GameState, StateSnapshot, TickOutcome};
use crate::log;
use crate::rng::GameRng;
use crate::score_store::ScoreStore;
use crate::settings::GameSettings;

/// Commands a session accepts from its input source. Closing the channel
/// behaves like `Quit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Start,
    Turn(Direction),
    TogglePause,
    Restart,
    Quit,
}

#[derive(Clone, Debug)]
pub struct GameOverSummary {
    pub final_score: u32,
    pub high_score: u32,
    pub new_record: bool,
    pub reason: GameEndReason,
}

/// Presentation seam: consumes immutable snapshots, never reaches back into
/// the game state.
pub trait Renderer {
    fn render(&mut self, snapshot: &StateSnapshot);
    fn game_over(&mut self, summary: &GameOverSummary);
}

/// Owns the state machine and serializes ticks and input commands onto one
/// task, so a command never interrupts a tick and takes effect at the next
/// tick through the direction buffer.
pub struct GameSession<S: ScoreStore, R: Renderer> {
    state: GameState,
    rng: GameRng,
    store: S,
    renderer: R,
    tick_interval: Duration,
}

impl<S: ScoreStore, R: Renderer> GameSession<S, R> {
    pub fn new(settings: &GameSettings, store: S, renderer: R, mut rng: GameRng) -> Self {
        let high_score = store.load_high_score();
        let state = GameState::new(settings, high_score, &mut rng);
        Self {
            state,
            rng,
            store,
            renderer,
            tick_interval: settings.tick_interval(),
        }
    }

    pub async fn run(mut self, mut commands: mpsc::UnboundedReceiver<SessionCommand>) {
        self.renderer.render(&self.state.snapshot());

        // Replaced whenever the game (re)enters Running, so a resume never
        // inherits a stale schedule. Only polled while Running.
        let mut ticker = new_ticker(self.tick_interval);

        loop {
            tokio::select! {
                _ = ticker.tick(), if self.state.phase() == GamePhase::Running => {
                    self.handle_tick();
                }
                command = commands.recv() => {
                    let Some(command) = command else { break };
                    match command {
                        SessionCommand::Start => {
                            if self.state.start() {
                                ticker = new_ticker(self.tick_interval);
                                self.renderer.render(&self.state.snapshot());
                            }
                        }
                        SessionCommand::Turn(direction) => {
                            self.state.buffer_direction(direction);
                        }
                        SessionCommand::TogglePause => {
                            match self.state.toggle_pause() {
                                Some(GamePhase::Running) => {
                                    ticker = new_ticker(self.tick_interval);
                                    self.renderer.render(&self.state.snapshot());
                                }
                                Some(_) => self.renderer.render(&self.state.snapshot()),
                                None => {}
                            }
                        }
                        SessionCommand::Restart => {
                            self.state.restart(&mut self.rng);
                            self.renderer.render(&self.state.snapshot());
                        }
                        SessionCommand::Quit => break,
                    }
                }
            }
        }
    }

    fn handle_tick(&mut self) {
        match self.state.tick(&mut self.rng) {
            TickOutcome::Moved | TickOutcome::Ate => {
                self.renderer.render(&self.state.snapshot());
            }
            TickOutcome::Ended { reason, new_record } => {
                log!(
                    "Game over: {:?}. Final score: {}",
                    reason,
                    self.state.score()
                );
                if new_record {
                    self.store.save_high_score(self.state.high_score());
                }
                self.renderer.render(&self.state.snapshot());
                self.renderer.game_over(&GameOverSummary {
                    final_score: self.state.score(),
                    high_score: self.state.high_score(),
                    new_record,
                    reason,
                });
            }
            TickOutcome::Skipped => {}
        }
    }
}

/// First tick fires one full period after scheduling, matching a plain
/// repeating timer rather than tokio's fire-immediately default.
fn new_ticker(period: Duration) -> Interval {
    time::interval_at(Instant::now() + period, period)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingRenderer {
        snapshots: Arc<Mutex<Vec<StateSnapshot>>>,
        summaries: Arc<Mutex<Vec<GameOverSummary>>>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, snapshot: &StateSnapshot) {
            self.snapshots.lock().unwrap().push(snapshot.clone());
        }

        fn game_over(&mut self, summary: &GameOverSummary) {
            self.summaries.lock().unwrap().push(summary.clone());
        }
    }

    #[derive(Clone, Default)]
    struct FakeStore {
        saved: Arc<Mutex<Option<u32>>>,
        initial: u32,
    }

    impl ScoreStore for FakeStore {
        fn load_high_score(&self) -> u32 {
            self.initial
        }

        fn save_high_score(&mut self, score: u32) {
            *self.saved.lock().unwrap() = Some(score);
        }
    }

    fn fast_settings(grid_size: i32) -> GameSettings {
        GameSettings {
            grid_size,
            tick_interval_ms: 50,
            food_score: 10,
        }
    }

    #[tokio::test]
    async fn test_session_renders_initial_state_and_quits() {
        let renderer = RecordingRenderer::default();
        let snapshots = renderer.snapshots.clone();
        let session = GameSession::new(
            &fast_settings(12),
            FakeStore::default(),
            renderer,
            GameRng::new(42),
        );

        let (sender, receiver) = mpsc::unbounded_channel();
        sender.send(SessionCommand::Quit).unwrap();
        session.run(receiver).await;

        let snapshots = snapshots.lock().unwrap();
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].phase, GamePhase::Idle);
    }

    #[tokio::test]
    async fn test_session_runs_to_game_over_exactly_once() {
        let renderer = RecordingRenderer::default();
        let summaries = renderer.summaries.clone();
        let store = FakeStore {
            initial: 100,
            ..FakeStore::default()
        };
        let saved = store.saved.clone();

        // 4x4 grid, head at (2, 2) moving right: the wall is two ticks away
        // (at most one food pickup on the way).
        let session = GameSession::new(&fast_settings(4), store, renderer, GameRng::new(42));

        let (sender, receiver) = mpsc::unbounded_channel();
        sender.send(SessionCommand::Start).unwrap();
        let run = tokio::spawn(session.run(receiver));

        tokio::time::sleep(Duration::from_millis(400)).await;
        sender.send(SessionCommand::Quit).unwrap();
        run.await.unwrap();

        let summaries = summaries.lock().unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].reason, GameEndReason::WallCollision);
        assert_eq!(summaries[0].high_score, 100);
        assert!(!summaries[0].new_record);
        // No score here beats a high score of 100, so nothing is persisted.
        assert_eq!(*saved.lock().unwrap(), None);
    }

    #[tokio::test]
    async fn test_commands_drive_phase_transitions() {
        let renderer = RecordingRenderer::default();
        let snapshots = renderer.snapshots.clone();
        let session = GameSession::new(
            &fast_settings(12),
            FakeStore::default(),
            renderer,
            GameRng::new(42),
        );

        let (sender, receiver) = mpsc::unbounded_channel();
        sender.send(SessionCommand::Start).unwrap();
        sender.send(SessionCommand::TogglePause).unwrap();
        sender.send(SessionCommand::TogglePause).unwrap();
        sender.send(SessionCommand::Quit).unwrap();
        session.run(receiver).await;

        let phases: Vec<GamePhase> = snapshots.lock().unwrap().iter().map(|s| s.phase).collect();
        assert_eq!(
            phases,
            vec![
                GamePhase::Idle,
                GamePhase::Running,
                GamePhase::Paused,
                GamePhase::Running,
            ]
        );
    }
}
