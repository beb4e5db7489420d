use std::sync::Arc;

use tokio::sync::mpsc;

use common::game::{GameBroadcaster, SnakeSession, SnakeSessionState, map_key};
use common::log;
use common::scores::HighScoreStore;

use crate::broadcaster::LocalBroadcaster;
use crate::config::Config;
use crate::state::{AppState, ClientCommand, SharedState};

/// Owns the engine for the lifetime of the window: one aggregate, one
/// session run per game, reset between games. UI commands are fed into the
/// running session; the shared state flips to the game-over screen between
/// runs. Returns when the UI side hangs up.
pub async fn game_task(
    config: Config,
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
) {
    let score_store = Arc::new(HighScoreStore::from_yaml_file(&config.scores.location));
    let high_score = score_store.load();
    log!("Loaded high score: {}", high_score);

    let seed: u64 = rand::random();
    let session_state = SnakeSessionState::create(&config.snake, high_score, seed);
    log!("Created game session with seed {}", seed);

    let broadcaster = LocalBroadcaster::new(shared_state.clone());

    loop {
        shared_state.set_state(AppState::InGame {
            game_state: Some(session_state.snapshot().await),
        });

        let run_state = session_state.clone();
        let run_broadcaster = broadcaster.clone();
        let run_store = score_store.clone();
        let mut game_handle = tokio::spawn(async move {
            SnakeSession::run(run_state, run_broadcaster, run_store).await
        });

        let outcome = loop {
            tokio::select! {
                result = &mut game_handle => {
                    match result {
                        Ok(outcome) => break outcome,
                        Err(e) => {
                            log!("Game session task failed: {}", e);
                            return;
                        }
                    }
                }
                Some(command) = command_rx.recv() => {
                    match command {
                        ClientCommand::Key(key) => {
                            session_state.apply_command(map_key(key)).await;
                            let snapshot = session_state.snapshot().await;
                            broadcaster.broadcast_state(snapshot).await;
                        }
                        // Only meaningful on the game-over screen.
                        ClientCommand::PlayAgain => {}
                    }
                }
            }
        };

        let last_game_state = session_state.snapshot().await;
        shared_state.set_state(AppState::GameOver {
            outcome,
            last_game_state,
        });

        loop {
            let Some(command) = command_rx.recv().await else {
                return;
            };
            if matches!(command, ClientCommand::PlayAgain) {
                break;
            }
        }

        session_state.reset().await;
    }
}
