use super::types::Direction;

/// The keys the game reacts to, already stripped of everything
/// frontend-specific. The rendering layer translates its raw key events
/// into these before anything touches game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    W,
    A,
    S,
    D,
    Space,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Turn(Direction),
    Start,
}

pub fn map_key(key: GameKey) -> GameCommand {
    match key {
        GameKey::ArrowUp | GameKey::W => GameCommand::Turn(Direction::Up),
        GameKey::ArrowDown | GameKey::S => GameCommand::Turn(Direction::Down),
        GameKey::ArrowLeft | GameKey::A => GameCommand::Turn(Direction::Left),
        GameKey::ArrowRight | GameKey::D => GameCommand::Turn(Direction::Right),
        GameKey::Space => GameCommand::Start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_directions() {
        assert_eq!(map_key(GameKey::ArrowUp), GameCommand::Turn(Direction::Up));
        assert_eq!(
            map_key(GameKey::ArrowDown),
            GameCommand::Turn(Direction::Down)
        );
        assert_eq!(
            map_key(GameKey::ArrowLeft),
            GameCommand::Turn(Direction::Left)
        );
        assert_eq!(
            map_key(GameKey::ArrowRight),
            GameCommand::Turn(Direction::Right)
        );
    }

    #[test]
    fn test_wasd_mirrors_arrows() {
        assert_eq!(map_key(GameKey::W), map_key(GameKey::ArrowUp));
        assert_eq!(map_key(GameKey::A), map_key(GameKey::ArrowLeft));
        assert_eq!(map_key(GameKey::S), map_key(GameKey::ArrowDown));
        assert_eq!(map_key(GameKey::D), map_key(GameKey::ArrowRight));
    }

    #[test]
    fn test_space_starts() {
        assert_eq!(map_key(GameKey::Space), GameCommand::Start);
    }
}
