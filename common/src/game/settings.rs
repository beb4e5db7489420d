use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;

use super::types::{Direction, FieldSize, Point};

pub const DEFAULT_FIELD_WIDTH: usize = 40;
pub const DEFAULT_FIELD_HEIGHT: usize = 40;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnakeSettings {
    pub field_width: usize,
    pub field_height: usize,
    pub tick_interval_ms: u64,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl SnakeSettings {
    pub fn field_size(&self) -> FieldSize {
        FieldSize {
            width: self.field_width,
            height: self.field_height,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// The fixed spawn cell: the field's quarter point, clear of the edges
    /// on every default-sized board.
    pub fn start_position(&self) -> Point {
        Point::new(self.field_width / 4, self.field_height / 4)
    }

    pub fn start_direction(&self) -> Direction {
        Direction::Right
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.field_width < 10 || self.field_width > 100 {
            return Err("Field width must be between 10 and 100".to_string());
        }
        if self.field_height < 10 || self.field_height > 100 {
            return Err("Field height must be between 10 and 100".to_string());
        }
        if self.tick_interval_ms < 50 || self.tick_interval_ms > 5000 {
            return Err("Tick interval must be between 50ms and 5000ms".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert_eq!(SnakeSettings::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_start_position() {
        let settings = SnakeSettings::default();
        assert_eq!(settings.start_position(), Point::new(10, 10));
        assert_eq!(settings.start_direction(), Direction::Right);
    }

    #[test]
    fn test_field_width_out_of_range() {
        for field_width in [5, 500] {
            let settings = SnakeSettings {
                field_width,
                ..SnakeSettings::default()
            };
            assert!(settings.validate().is_err());
        }
    }

    #[test]
    fn test_tick_interval_out_of_range() {
        for tick_interval_ms in [10, 10_000] {
            let settings = SnakeSettings {
                tick_interval_ms,
                ..SnakeSettings::default()
            };
            assert!(settings.validate().is_err());
        }
    }
}
