use std::sync::{Arc, Mutex};

use common::game::{GameKey, GameOutcome, GameState};

#[derive(Clone, Copy, Debug)]
pub enum ClientCommand {
    Key(GameKey),
    PlayAgain,
}

#[derive(Clone, Debug)]
pub enum AppState {
    InGame {
        game_state: Option<GameState>,
    },
    GameOver {
        outcome: GameOutcome,
        last_game_state: GameState,
    },
}

/// State cell shared between the game task and the UI thread. The game task
/// is the only writer; the UI reads a clone every frame.
#[derive(Clone)]
pub struct SharedState {
    state: Arc<Mutex<AppState>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState::InGame { game_state: None })),
        }
    }

    pub fn set_state(&self, state: AppState) {
        *self.state.lock().unwrap() = state;
    }

    pub fn get_state(&self) -> AppState {
        self.state.lock().unwrap().clone()
    }

    /// Replaces only the in-game snapshot; a stale broadcast arriving after
    /// the game-over screen is already up is dropped.
    pub fn update_game_state(&self, game_state: GameState) {
        let mut state = self.state.lock().unwrap();
        if let AppState::InGame { game_state: slot } = &mut *state {
            *slot = Some(game_state);
        }
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}
