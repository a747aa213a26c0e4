// main.rs - egui driver for the Life board
//
// Runs the board on a timer, paints live cells and translates clicks into
// cell edits.

use std::time::{Duration, Instant};

use eframe::egui;
use egui::Color32;
use life_board::{LifeBoard, patterns};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod ui;

use config::ViewerConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ViewerConfig::from_env();
    let board = LifeBoard::new(config.cols, config.rows)?;
    info!(cols = config.cols, rows = config.rows, "starting life viewer");

    let width = config.extent(config.cols).max(640.0) + 32.0;
    let height = config.extent(config.rows) + 200.0;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([width, height]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(LifeViewer::new(board, config))),
    )?;
    Ok(())
}

/// Viewer state around the board. The generation count lives here; the
/// board itself does not track one.
pub struct LifeViewer {
    board: LifeBoard,
    config: ViewerConfig,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub generation: u64,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
}

impl LifeViewer {
    pub fn new(board: LifeBoard, config: ViewerConfig) -> Self {
        Self {
            board,
            last_update: Instant::now(),
            update_interval: config.tick_interval,
            generation: 0,
            live_color: config.live_color,
            dead_color: config.dead_color,
            selected_pattern: 0,
            config,
        }
    }

    pub fn is_running(&self) -> bool {
        !self.board.is_paused()
    }

    pub fn toggle_running(&mut self) {
        self.board.toggle_pause();
        if self.is_running() {
            self.last_update = Instant::now();
        }
    }

    fn stop(&mut self) {
        if self.is_running() {
            self.board.toggle_pause();
        }
    }

    /// Advances the board if the tick interval has elapsed.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() || self.last_update.elapsed() < self.update_interval {
            return false;
        }
        self.last_update = Instant::now();
        if self.board.update() {
            self.generation += 1;
        }
        true
    }

    pub fn clear(&mut self) {
        self.stop();
        self.board.clear();
        self.generation = 0;
    }

    pub fn randomize(&mut self) {
        self.stop();
        self.board.clear();
        self.board.randomize(&mut rand::rng(), self.config.random_density);
        self.generation = 0;
    }

    /// Clears the board and stamps the selected pattern in the middle.
    pub fn apply_selected_pattern(&mut self) {
        let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) else {
            return;
        };
        self.stop();
        self.board.clear();
        self.generation = 0;

        let (cols, rows) = self.board.size();
        let x = cols.saturating_sub(pattern.width()) / 2;
        let y = rows.saturating_sub(pattern.height()) / 2;
        if let Err(err) = self.board.stamp(pattern, x, y) {
            warn!(pattern = pattern.name, %err, "pattern does not fit the board");
        }
    }

    /// Sets or unsets the cell under the pointer.
    pub fn paint(&mut self, x: usize, y: usize, alive: bool) {
        let result = if alive {
            self.board.set_cell(x, y)
        } else {
            self.board.unset_cell(x, y)
        };
        if let Err(err) = result {
            warn!(%err, "ignored edit");
        }
    }

    pub fn board(&self) -> &LifeBoard {
        &self.board
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }
}
