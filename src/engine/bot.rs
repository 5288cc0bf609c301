use super::board::Board;
use super::types::{Mark, Position};
use super::win_detector::check_win;

/// Best move for `bot_mark` assuming both sides play out the position
/// optimally. Returns None when the position is already terminal.
///
/// The board is borrowed for the duration of the call and left exactly as
/// it was: every speculative mark the search places is cleared before the
/// enclosing branch returns.
pub fn best_move(board: &mut Board, bot_mark: Mark) -> Option<Position> {
    let opponent_mark = bot_mark.opponent()?;
    let (_, position) = minimax(board, bot_mark, opponent_mark, true, i32::MIN, i32::MAX);
    position
}

/// Exhaustive minimax with alpha-beta pruning over a fixed ±1 scale, always
/// scored from the bot's perspective (no negamax negation). Scores: +1 the
/// bot wins, 0 draw, -1 the opponent wins.
fn minimax(
    board: &mut Board,
    bot_mark: Mark,
    opponent_mark: Mark,
    is_maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> (i32, Option<Position>) {
    if check_win(board).is_some() {
        // The winner is always the side that just moved, never the side
        // currently asked to move.
        let score = if is_maximizing { -1 } else { 1 };
        return (score, None);
    }
    if board.is_full() {
        return (0, None);
    }

    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };
    let mut best_position = None;

    for pos in board.available_moves() {
        let mark = if is_maximizing { bot_mark } else { opponent_mark };
        board.set(pos, mark);
        let (score, _) = minimax(board, bot_mark, opponent_mark, !is_maximizing, alpha, beta);
        board.clear(pos);

        if is_maximizing {
            // Strict comparison: the first equal-scoring move in row-major
            // scan order is kept.
            if score > best_score {
                best_score = score;
                best_position = Some(pos);
            }
            alpha = alpha.max(best_score);
        } else {
            if score < best_score {
                best_score = score;
                best_position = Some(pos);
            }
            beta = beta.min(best_score);
        }

        if beta <= alpha {
            break;
        }
    }

    (best_score, best_position)
}
