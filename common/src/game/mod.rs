mod game_state;
mod input;
mod session;
mod session_rng;
mod settings;
mod snake;
mod types;

pub use game_state::{GameState, TickEvent};
pub use input::{GameCommand, GameKey, map_key};
pub use session::{GameBroadcaster, GameOutcome, SnakeSession, SnakeSessionState};
pub use session_rng::SessionRng;
pub use settings::SnakeSettings;
pub use snake::Snake;
pub use types::{Direction, FieldSize, GamePhase, Point};
