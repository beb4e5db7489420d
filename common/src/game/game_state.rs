use crate::log;

use super::input::GameCommand;
use super::session_rng::SessionRng;
use super::settings::SnakeSettings;
use super::snake::Snake;
use super::types::{Direction, FieldSize, GamePhase, Point};

const FOOD_PLACEMENT_ATTEMPTS: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickEvent {
    FoodEaten { score: u32 },
    HighScoreRaised { high_score: u32 },
    SelfCollision,
}

/// The authoritative game aggregate. All mutation goes through
/// `apply_command` (input) and `update` (tick); the rendering layer only
/// ever sees clones.
#[derive(Clone, Debug)]
pub struct GameState {
    pub snake: Snake,
    pub food: Point,
    /// Direction used by the most recent tick.
    pub direction: Direction,
    /// Latest legally accepted turn, consumed at the next tick boundary.
    pub pending_direction: Option<Direction>,
    pub phase: GamePhase,
    pub score: u32,
    pub high_score: u32,
    pub field_size: FieldSize,
    start_position: Point,
    start_direction: Direction,
}

impl GameState {
    pub fn new(settings: &SnakeSettings, high_score: u32, rng: &mut SessionRng) -> Self {
        let start_position = settings.start_position();
        let start_direction = settings.start_direction();

        let mut state = Self {
            snake: Snake::new(start_position),
            food: start_position,
            direction: start_direction,
            pending_direction: None,
            phase: GamePhase::Waiting,
            score: 0,
            high_score,
            field_size: settings.field_size(),
            start_position,
            start_direction,
        };
        state.place_food(rng);
        state
    }

    /// Back to the initial waiting state. The high score survives.
    pub fn reset(&mut self, rng: &mut SessionRng) {
        self.snake = Snake::new(self.start_position);
        self.direction = self.start_direction;
        self.pending_direction = None;
        self.phase = GamePhase::Waiting;
        self.score = 0;
        self.place_food(rng);
    }

    pub fn start(&mut self) {
        if self.phase == GamePhase::Waiting {
            self.phase = GamePhase::Playing;
        }
    }

    pub fn end(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::GameOver;
            log!("Game over. Final score: {}", self.score);
        }
    }

    pub fn apply_command(&mut self, command: GameCommand) {
        match command {
            GameCommand::Start => self.start(),
            GameCommand::Turn(direction) => self.queue_direction(direction),
        }
    }

    /// A turn is queued only while playing and only if it does not reverse
    /// the committed direction; everything else leaves the queue untouched.
    pub fn queue_direction(&mut self, direction: Direction) {
        if self.phase == GamePhase::Playing && !direction.is_opposite(&self.direction) {
            self.pending_direction = Some(direction);
        }
    }

    /// One simulation step. A no-op unless the game is in progress, so a
    /// stale timer fire after game over cannot corrupt anything.
    pub fn update(&mut self, rng: &mut SessionRng) -> Vec<TickEvent> {
        let mut events = Vec::new();

        if self.phase != GamePhase::Playing {
            return events;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let new_head = self.next_head_position();

        // The cell the tail vacates this tick is legal to enter; anything
        // else already occupied ends the game with the pre-tick body intact.
        if self.snake.occupies(&new_head) && new_head != self.snake.tail() {
            self.phase = GamePhase::GameOver;
            log!(
                "Self collision at ({}, {}). Final score: {}",
                new_head.x,
                new_head.y,
                self.score
            );
            events.push(TickEvent::SelfCollision);
            return events;
        }

        if new_head == self.food {
            self.snake.grow(new_head);
            self.score += 1;
            log!(
                "Ate food at ({}, {}). Score: {}",
                new_head.x,
                new_head.y,
                self.score
            );
            events.push(TickEvent::FoodEaten { score: self.score });

            if self.score > self.high_score {
                self.high_score = self.score;
                log!("New high score: {}", self.high_score);
                events.push(TickEvent::HighScoreRaised {
                    high_score: self.high_score,
                });
            }

            self.place_food(rng);
        } else {
            self.snake.advance(new_head);
        }

        events
    }

    fn next_head_position(&self) -> Point {
        let head = self.snake.head();
        match self.direction {
            Direction::Up => Point::new(head.x, wrapping_dec(head.y, self.field_size.height)),
            Direction::Down => Point::new(head.x, wrapping_inc(head.y, self.field_size.height)),
            Direction::Left => Point::new(wrapping_dec(head.x, self.field_size.width), head.y),
            Direction::Right => Point::new(wrapping_inc(head.x, self.field_size.width), head.y),
        }
    }

    /// Uniform draw, retried while the cell is on the snake. If every
    /// attempt lands on the snake the previous food stays where it was and
    /// the game carries on.
    fn place_food(&mut self, rng: &mut SessionRng) {
        for _ in 0..FOOD_PLACEMENT_ATTEMPTS {
            let pos = Point::new(
                rng.random_range(0..self.field_size.width),
                rng.random_range(0..self.field_size.height),
            );

            if self.snake.occupies(&pos) {
                continue;
            }

            self.food = pos;
            log!("Food spawned at ({}, {})", pos.x, pos.y);
            return;
        }

        log!(
            "No free cell for food after {} attempts, keeping ({}, {})",
            FOOD_PLACEMENT_ATTEMPTS,
            self.food.x,
            self.food.y
        );
    }
}

fn wrapping_inc(value: usize, max: usize) -> usize {
    if value + 1 >= max { 0 } else { value + 1 }
}

fn wrapping_dec(value: usize, max: usize) -> usize {
    if value == 0 { max - 1 } else { value - 1 }
}
