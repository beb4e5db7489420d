mod broadcaster;
mod command_sender;
mod config;
mod game_task;
mod state;
mod ui;

use clap::Parser;
use eframe::egui;
use tokio::sync::mpsc;

use common::logger::init_logger;

use command_sender::CommandSender;
use state::SharedState;
use ui::SnakeApp;

#[derive(Parser)]
#[command(about = "Desktop snake game")]
struct Args {
    /// Path to the client configuration file.
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(None);

    let config = config::load_config(&args.config);
    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let task_state = shared_state.clone();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
        rt.block_on(game_task::game_task(config, task_state, command_rx));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 760.0])
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(|_cc| {
            Ok(Box::new(SnakeApp::new(
                shared_state,
                CommandSender::new(command_tx),
            )))
        }),
    )?;

    Ok(())
}
