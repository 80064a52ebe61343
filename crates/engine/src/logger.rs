use std::fs::{self, File};
use std::io::Write;

use crate::board::{square_to_label, Board};
use crate::types::{Move, Piece, Side};

/// Session log, accumulated in memory and flushed to a file under `logs/`
/// when the game ends.
#[derive(Debug)]
pub struct GameLogger {
    pub log_buffer: String,
    move_count: u32,
}

impl GameLogger {
    pub fn new() -> Self {
        let mut logger = Self {
            log_buffer: String::with_capacity(64 * 1024),
            move_count: 0,
        };

        logger.log("=== Console Chess Game Log ===");
        logger.log(&format!(
            "Date: {}",
            chrono::Local::now().format("%m/%d/%Y %H:%M:%S")
        ));
        logger
    }

    pub fn log(&mut self, message: &str) {
        self.log_buffer.push_str(message);
        self.log_buffer.push('\n');
    }

    pub fn log_move(&mut self, side: Side, mv: Move, captured: Option<Piece>) {
        self.move_count += 1;
        let capture_note = match captured {
            Some(piece) => format!(" takes {}:{}", piece.side.letter(), piece.kind.symbol()),
            None => String::new(),
        };
        self.log(&format!(
            "{}. {} {} -> {}{}",
            self.move_count,
            side.name(),
            square_to_label(mv.from),
            square_to_label(mv.to),
            capture_note
        ));
    }

    /// Rejections are logged without a cause; the engine does not report one.
    pub fn log_rejected(&mut self, side: Side, mv: Move) {
        self.log(&format!(
            "   {} rejected: {} -> {}",
            side.name(),
            square_to_label(mv.from),
            square_to_label(mv.to)
        ));
    }

    pub fn log_position(&mut self, board: &Board) {
        for line in board.snapshot_lines() {
            self.log(&line);
        }
    }

    pub fn log_winner(&mut self, winner: Side) {
        self.log(&format!("Winner: {}", winner.name()));
    }

    /// Write the buffer to a timestamped file and return its path.
    pub fn save_to_file(&mut self, reason: &str) -> Result<String, String> {
        if let Err(e) = fs::create_dir_all("logs") {
            return Err(format!("Failed to create logs directory: {}", e));
        }

        let now = chrono::Local::now();
        let filename = format!("logs/{}.txt", now.format("%m_%d_%Y_%H_%M_%S"));

        self.log(&format!("Game ended: {}", reason));

        match File::create(&filename) {
            Ok(mut file) => {
                if let Err(e) = file.write_all(self.log_buffer.as_bytes()) {
                    return Err(format!("Failed to write log file: {}", e));
                }
                Ok(filename)
            }
            Err(e) => Err(format!("Failed to create log file: {}", e)),
        }
    }
}

impl Default for GameLogger {
    fn default() -> Self {
        Self::new()
    }
}
