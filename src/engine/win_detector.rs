use super::board::{BOARD_SIZE, Board};
use super::types::{GameStatus, Mark, Position, WinningLine};

// 3 rows, 3 columns, 2 diagonals, as (x, y) cells.
const LINES: [[(usize, usize); BOARD_SIZE]; 8] = [
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let grid = board.grid();
    for line in LINES {
        let (x0, y0) = line[0];
        let mark = grid[y0][x0];
        if mark == Mark::Empty {
            continue;
        }
        if line.iter().all(|&(x, y)| grid[y][x] == mark) {
            return Some(WinningLine {
                mark,
                cells: line.map(|(x, y)| Position::new(x, y)),
            });
        }
    }
    None
}

/// Terminal-state query. The winner check comes first: a full board with a
/// completed line is a win, not a draw.
pub fn board_status(board: &Board) -> GameStatus {
    if let Some(mark) = check_win(board) {
        return match mark {
            Mark::X => GameStatus::XWon,
            Mark::O => GameStatus::OWon,
            Mark::Empty => unreachable!(),
        };
    }

    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
