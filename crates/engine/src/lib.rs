pub mod board;
pub mod game;
pub mod logger;
pub mod types;

pub use board::*;
pub use game::*;
pub use logger::GameLogger;
pub use types::*;
