//! Playdoku desktop application using egui/eframe.

use clap::Parser;
use eframe::{
    NativeOptions,
    egui::{Vec2, ViewportBuilder},
};
use playdoku_client::{Difficulty, HttpPuzzleService};

use crate::app::PlaydokuApp;

mod action;
mod app;
mod async_work;
mod handler;
mod input;
mod state;
mod ui;
mod view_model;

/// Command line options for the player.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Options {
    /// Base URL of the puzzle service.
    #[arg(long, default_value = "http://localhost:8080/api")]
    service_url: String,

    /// Difficulty for new games (easy, medium, hard). Omit for random.
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Number of hints available per game.
    #[arg(long, default_value_t = state::DEFAULT_HINT_BUDGET)]
    hints: u8,
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let options = Options::parse();

    let service = match HttpPuzzleService::new(options.service_url.clone()) {
        Ok(service) => service,
        Err(err) => {
            log::error!("cannot construct puzzle service client: {err}");
            std::process::exit(1);
        }
    };

    let native_options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_resizable(true)
            .with_inner_size(Vec2::new(760.0, 560.0))
            .with_min_inner_size(Vec2::new(480.0, 420.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Playdoku",
        native_options,
        Box::new(move |_cc| {
            Ok(Box::new(PlaydokuApp::new(
                service,
                options.difficulty,
                options.hints,
            )))
        }),
    )
}
