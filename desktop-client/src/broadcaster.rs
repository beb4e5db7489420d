use common::game::{GameBroadcaster, GameState};

use crate::state::SharedState;

/// In-process render bridge: snapshots from the session land in the shared
/// state cell the UI draws from.
#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, state: GameState) {
        self.shared_state.update_game_state(state);
    }
}
