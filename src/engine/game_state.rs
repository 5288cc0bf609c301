use super::board::Board;
use super::types::{GameStatus, Mark, Position};
use super::win_detector::board_status;

/// Turn-alternating wrapper around a board. X always opens; which player
/// holds X is the session layer's concern.
#[derive(Clone, Debug)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, pos: Position) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        self.board.place(pos, self.current_mark)?;
        self.last_move = Some(pos);

        self.status = board_status(&self.board);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_with_x() {
        let state = TicTacToeGameState::new();
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.last_move, None);
    }

    #[test]
    fn test_place_mark_alternates_turns() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(Position::new(0, 0)).unwrap();
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.board.mark_at(Position::new(0, 0)), Some(Mark::X));
        state.place_mark(Position::new(1, 1)).unwrap();
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.last_move, Some(Position::new(1, 1)));
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(Position::new(0, 0)).unwrap();
        let result = state.place_mark(Position::new(0, 0));
        assert!(result.is_err());
        // the failed move must not consume the turn
        assert_eq!(state.current_mark, Mark::O);
    }

    #[test]
    fn test_win_ends_the_game() {
        let mut state = TicTacToeGameState::new();
        // X: top row, O: middle row
        state.place_mark(Position::new(0, 0)).unwrap();
        state.place_mark(Position::new(0, 1)).unwrap();
        state.place_mark(Position::new(1, 0)).unwrap();
        state.place_mark(Position::new(1, 1)).unwrap();
        state.place_mark(Position::new(2, 0)).unwrap();

        assert_eq!(state.status, GameStatus::XWon);
        assert_eq!(state.winner(), Some(Mark::X));
        // the winning side stays recorded as the last mover
        assert_eq!(state.current_mark, Mark::X);
        assert!(state.place_mark(Position::new(2, 2)).is_err());
    }

    #[test]
    fn test_draw_ends_the_game() {
        let mut state = TicTacToeGameState::new();
        // X O X / X O O / O X X, played in an order that never completes
        // a line early.
        let moves = [
            Position::new(0, 0), // X
            Position::new(1, 0), // O
            Position::new(2, 0), // X
            Position::new(1, 1), // O
            Position::new(0, 1), // X
            Position::new(2, 1), // O
            Position::new(1, 2), // X
            Position::new(0, 2), // O
            Position::new(2, 2), // X
        ];
        for pos in moves {
            state.place_mark(pos).unwrap();
        }
        assert_eq!(state.status, GameStatus::Draw);
        assert_eq!(state.winner(), None);
    }
}
