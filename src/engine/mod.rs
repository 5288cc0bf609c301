mod board;
mod bot;
mod game_state;
mod session_rng;
mod types;
mod win_detector;

pub mod session;

pub use board::{BOARD_SIZE, Board};
pub use bot::best_move;
pub use game_state::TicTacToeGameState;
pub use session_rng::SessionRng;
pub use types::{FirstPlayerMode, GameStatus, Mark, Position, WinningLine};
pub use win_detector::{board_status, check_win, check_win_with_line};
