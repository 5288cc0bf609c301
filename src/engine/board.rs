use super::types::{Mark, Position};

pub const BOARD_SIZE: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Builds a board from row-major rows, `rows[y][x]`.
    pub fn from_rows(rows: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells: rows }
    }

    pub fn mark_at(&self, pos: Position) -> Option<Mark> {
        self.cells.get(pos.y).and_then(|row| row.get(pos.x)).copied()
    }

    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), String> {
        if mark == Mark::Empty {
            return Err("Cannot place an empty mark".to_string());
        }
        if pos.x >= BOARD_SIZE || pos.y >= BOARD_SIZE {
            return Err("Position out of bounds".to_string());
        }
        if self.cells[pos.y][pos.x] != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }
        self.cells[pos.y][pos.x] = mark;
        Ok(())
    }

    /// Resets a cell to Empty. The search uses this to roll back
    /// speculative moves.
    pub fn clear(&mut self, pos: Position) {
        if pos.x < BOARD_SIZE && pos.y < BOARD_SIZE {
            self.cells[pos.y][pos.x] = Mark::Empty;
        }
    }

    // Unvalidated write for the search's speculative moves; `pos` must come
    // from `available_moves`.
    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.y][pos.x] = mark;
    }

    pub(crate) fn grid(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    /// Empty cells in row-major order. The order is contractual: the search
    /// keeps the first of several equally-scored moves, so it determines
    /// which one the bot actually plays.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (y, row) in self.cells.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(x, y));
                }
            }
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::Mark::{Empty, O, X};

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(!board.is_full());
        assert_eq!(board.available_moves().len(), 9);
    }

    #[test]
    fn test_available_moves_are_row_major() {
        let mut board = Board::new();
        board.place(Position::new(0, 0), X).unwrap();
        board.place(Position::new(1, 1), O).unwrap();
        let moves = board.available_moves();
        assert_eq!(
            moves,
            vec![
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(0, 2),
                Position::new(1, 2),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_place_and_clear_round_trip() {
        let mut board = Board::new();
        board.place(Position::new(2, 1), X).unwrap();
        let snapshot = board;
        board.place(Position::new(0, 2), O).unwrap();
        board.clear(Position::new(0, 2));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_place_on_occupied_cell_fails() {
        let mut board = Board::new();
        board.place(Position::new(1, 1), X).unwrap();
        let result = board.place(Position::new(1, 1), O);
        assert!(result.is_err());
        assert_eq!(board.mark_at(Position::new(1, 1)), Some(X));
    }

    #[test]
    fn test_place_out_of_bounds_fails() {
        let mut board = Board::new();
        assert!(board.place(Position::new(3, 0), X).is_err());
        assert!(board.place(Position::new(0, 3), X).is_err());
        assert_eq!(board.mark_at(Position::new(3, 0)), None);
    }

    #[test]
    fn test_place_empty_mark_fails() {
        let mut board = Board::new();
        assert!(board.place(Position::new(0, 0), Empty).is_err());
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board = Board::from_rows([[X, O, X], [O, X, O], [O, X, O]]);
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }
}
