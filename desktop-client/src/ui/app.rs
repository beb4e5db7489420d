use std::time::Duration;

use eframe::egui;

use common::game::{GameKey, GameOutcome, GamePhase, GameState};

use crate::command_sender::CommandSender;
use crate::state::{AppState, ClientCommand, SharedState};

use super::board::draw_board;

pub struct SnakeApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    theme_tick: u64,
}

impl SnakeApp {
    pub fn new(shared_state: SharedState, command_sender: CommandSender) -> Self {
        Self {
            shared_state,
            command_sender,
            theme_tick: 0,
        }
    }

    fn handle_input(&self, ctx: &egui::Context) {
        let pressed = ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowUp) {
                Some(GameKey::ArrowUp)
            } else if i.key_pressed(egui::Key::ArrowDown) {
                Some(GameKey::ArrowDown)
            } else if i.key_pressed(egui::Key::ArrowLeft) {
                Some(GameKey::ArrowLeft)
            } else if i.key_pressed(egui::Key::ArrowRight) {
                Some(GameKey::ArrowRight)
            } else if i.key_pressed(egui::Key::W) {
                Some(GameKey::W)
            } else if i.key_pressed(egui::Key::A) {
                Some(GameKey::A)
            } else if i.key_pressed(egui::Key::S) {
                Some(GameKey::S)
            } else if i.key_pressed(egui::Key::D) {
                Some(GameKey::D)
            } else if i.key_pressed(egui::Key::Space) {
                Some(GameKey::Space)
            } else {
                None
            }
        });

        if let Some(key) = pressed {
            self.command_sender.send(ClientCommand::Key(key));
        }
    }

    fn render_game(&self, ui: &mut egui::Ui, state: &GameState) {
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.heading(format!(
                "Score: {}    High Score: {}",
                state.score, state.high_score
            ));
            ui.add_space(8.0);

            draw_board(ui, state, self.theme_tick);

            if state.phase == GamePhase::Waiting {
                ui.add_space(8.0);
                ui.label("Press SPACE to start");
                ui.label("Arrow keys or WASD to move");
            }
        });
    }

    fn render_game_over(&self, ui: &mut egui::Ui, outcome: &GameOutcome, last_state: &GameState) {
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.heading("Game Over!");
            ui.label(format!("Final score: {}", outcome.score));
            if outcome.score > 0 && outcome.score == outcome.high_score {
                ui.label("New high score!");
            } else {
                ui.label(format!("High score: {}", outcome.high_score));
            }
            ui.add_space(8.0);

            draw_board(ui, last_state, self.theme_tick);

            ui.add_space(8.0);
            if ui.button("Play Again").clicked() {
                self.command_sender.send(ClientCommand::PlayAgain);
            }
        });
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.theme_tick = self.theme_tick.wrapping_add(1);
        self.handle_input(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.shared_state.get_state() {
            AppState::InGame { game_state: None } => {
                ui.centered_and_justified(|ui| {
                    ui.label("Waiting for game state...");
                });
            }
            AppState::InGame {
                game_state: Some(state),
            } => {
                self.render_game(ui, &state);
            }
            AppState::GameOver {
                outcome,
                last_game_state,
            } => {
                self.render_game_over(ui, &outcome, &last_game_state);
            }
        });

        // Snapshots arrive from the game task between frames; keep
        // repainting slightly faster than the tick cadence.
        ctx.request_repaint_after(Duration::from_millis(50));
    }
}
