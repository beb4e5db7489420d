use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::interval;

use crate::config::ConfigContentProvider;
use crate::log;
use crate::scores::HighScoreStore;

use super::game_state::{GameState, TickEvent};
use super::input::GameCommand;
use super::session_rng::SessionRng;
use super::settings::SnakeSettings;
use super::types::GamePhase;

/// Receives read-only state snapshots after every tick and every handled
/// input. Implemented by the rendering side; never mutates game state.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, state: GameState) -> impl Future<Output = ()> + Send;
}

#[derive(Clone, Copy, Debug)]
pub struct GameOutcome {
    pub score: u32,
    pub high_score: u32,
}

#[derive(Clone)]
pub struct SnakeSessionState {
    pub game_state: Arc<Mutex<GameState>>,
    pub rng: Arc<Mutex<SessionRng>>,
    pub tick: Arc<Mutex<u64>>,
    pub tick_interval: Duration,
}

impl SnakeSessionState {
    pub fn create(settings: &SnakeSettings, high_score: u32, seed: u64) -> Self {
        let mut rng = SessionRng::new(seed);
        let game_state = GameState::new(settings, high_score, &mut rng);

        Self {
            game_state: Arc::new(Mutex::new(game_state)),
            rng: Arc::new(Mutex::new(rng)),
            tick: Arc::new(Mutex::new(0u64)),
            tick_interval: settings.tick_interval(),
        }
    }

    pub async fn apply_command(&self, command: GameCommand) {
        let mut game_state = self.game_state.lock().await;
        game_state.apply_command(command);
    }

    /// Brings the aggregate back to its waiting state for the next game.
    /// The high score survives inside the aggregate; the tick counter starts
    /// over.
    pub async fn reset(&self) {
        let mut game_state = self.game_state.lock().await;
        let mut rng = self.rng.lock().await;
        game_state.reset(&mut rng);
        *self.tick.lock().await = 0;
    }

    pub async fn snapshot(&self) -> GameState {
        self.game_state.lock().await.clone()
    }
}

pub struct SnakeSession;

impl SnakeSession {
    /// Drives the session at a fixed tick cadence until game over. The
    /// interval is owned by this future, so dropping it (client teardown)
    /// or returning from it (game over) deregisters the timer on every
    /// exit path.
    pub async fn run<TProvider>(
        session_state: SnakeSessionState,
        broadcaster: impl GameBroadcaster,
        score_store: Arc<HighScoreStore<TProvider>>,
    ) -> GameOutcome
    where
        TProvider: ConfigContentProvider + Send + Sync + 'static,
    {
        let mut tick_interval_timer = interval(session_state.tick_interval);

        loop {
            tick_interval_timer.tick().await;

            let mut game_state = session_state.game_state.lock().await;
            let mut rng = session_state.rng.lock().await;
            let events = game_state.update(&mut rng);
            drop(rng);

            let mut tick_value = session_state.tick.lock().await;
            *tick_value += 1;
            drop(tick_value);

            for event in &events {
                if let TickEvent::HighScoreRaised { high_score } = event {
                    // Fire and forget: a failed write is logged inside the
                    // store and the in-memory value stays authoritative.
                    score_store.save(*high_score);
                }
            }

            let snapshot = game_state.clone();
            let game_over = game_state.phase == GamePhase::GameOver;
            drop(game_state);

            broadcaster.broadcast_state(snapshot).await;

            if game_over {
                break;
            }
        }

        let ticks = *session_state.tick.lock().await;
        let game_state = session_state.game_state.lock().await;
        log!("Session finished after {} ticks", ticks);

        GameOutcome {
            score: game_state.score,
            high_score: game_state.high_score,
        }
    }
}
