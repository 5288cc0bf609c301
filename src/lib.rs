pub mod config;
pub mod engine;
pub mod logger;

pub use engine::session::TicTacToeSession;
