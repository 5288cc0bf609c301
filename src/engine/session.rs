use crate::config::{Config, Validate};
use crate::log;

use super::board::Board;
use super::bot::best_move;
use super::game_state::TicTacToeGameState;
use super::session_rng::SessionRng;
use super::types::{FirstPlayerMode, GameStatus, Mark, Position, WinningLine};
use super::win_detector::check_win_with_line;

/// Cumulative round results, kept in memory for the lifetime of the
/// session. Zeroed at construction and on `reset_scores`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Scores {
    pub human_wins: u32,
    pub bot_wins: u32,
    pub draws: u32,
}

/// What a single human move led to: the bot's reply, if it got one, and
/// the status the round ended up in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TurnOutcome {
    pub bot_move: Option<Position>,
    pub status: GameStatus,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GameOverReport {
    pub status: GameStatus,
    pub winning_line: Option<WinningLine>,
    pub scores: Scores,
}

/// A human-versus-bot game on one machine. Fully synchronous: the bot's
/// reply is computed inside `play_human_move`, so the caller never observes
/// a board waiting on the bot.
pub struct TicTacToeSession {
    state: TicTacToeGameState,
    human_mark: Mark,
    bot_mark: Mark,
    first_player: FirstPlayerMode,
    scores: Scores,
    rng: SessionRng,
}

impl TicTacToeSession {
    pub fn new(config: &Config, rng: SessionRng) -> Result<Self, String> {
        config.validate()?;

        let mut session = Self {
            state: TicTacToeGameState::new(),
            human_mark: Mark::X,
            bot_mark: Mark::O,
            first_player: config.first_player,
            scores: Scores::default(),
            rng,
        };
        session.assign_marks();
        session.play_bot_turn();
        Ok(session)
    }

    /// Applies the human's move, then the bot's reply while the round is
    /// still live. Terminal rounds are scored exactly once, here.
    pub fn play_human_move(&mut self, pos: Position) -> Result<TurnOutcome, String> {
        if self.state.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }
        if self.state.current_mark != self.human_mark {
            return Err("Not your turn".to_string());
        }

        self.state.place_mark(pos)?;
        let bot_move = self.play_bot_turn();
        self.record_finished_round();

        Ok(TurnOutcome {
            bot_move,
            status: self.state.status,
        })
    }

    /// Clears the board for the next round, keeping the scores. In Random
    /// mode the sides are redrawn, so the opener may change between rounds.
    pub fn new_round(&mut self) {
        self.state = TicTacToeGameState::new();
        self.assign_marks();
        log!(
            "New round: human plays {:?}, bot plays {:?}",
            self.human_mark,
            self.bot_mark
        );
        self.play_bot_turn();
    }

    pub fn reset_scores(&mut self) {
        self.scores = Scores::default();
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn current_mark(&self) -> Mark {
        self.state.current_mark
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn bot_mark(&self) -> Mark {
        self.bot_mark
    }

    pub fn last_move(&self) -> Option<Position> {
        self.state.last_move
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Everything a shell needs for its game-over dialog, or None while the
    /// round is still live.
    pub fn game_over_report(&self) -> Option<GameOverReport> {
        if self.state.status == GameStatus::InProgress {
            return None;
        }
        Some(GameOverReport {
            status: self.state.status,
            winning_line: check_win_with_line(&self.state.board),
            scores: self.scores,
        })
    }

    fn assign_marks(&mut self) {
        let human_gets_x = match self.first_player {
            FirstPlayerMode::Human => true,
            FirstPlayerMode::Bot => false,
            FirstPlayerMode::Random => self.rng.random_bool(),
        };
        if human_gets_x {
            self.human_mark = Mark::X;
            self.bot_mark = Mark::O;
        } else {
            self.human_mark = Mark::O;
            self.bot_mark = Mark::X;
        }
    }

    fn play_bot_turn(&mut self) -> Option<Position> {
        if self.state.status != GameStatus::InProgress
            || self.state.current_mark != self.bot_mark
        {
            return None;
        }

        let pos = best_move(&mut self.state.board, self.bot_mark)?;
        // cannot fail: best_move only ever returns an empty cell
        self.state.place_mark(pos).ok()?;
        log!("Bot ({:?}) played ({}, {})", self.bot_mark, pos.x, pos.y);
        Some(pos)
    }

    fn record_finished_round(&mut self) {
        match self.state.status {
            GameStatus::InProgress => {}
            GameStatus::Draw => {
                self.scores.draws += 1;
                log!("Round over: draw");
            }
            GameStatus::XWon | GameStatus::OWon => {
                if self.state.winner() == Some(self.bot_mark) {
                    self.scores.bot_wins += 1;
                    log!("Round over: bot ({:?}) wins", self.bot_mark);
                } else {
                    self.scores.human_wins += 1;
                    log!("Round over: human ({:?}) wins", self.human_mark);
                }
            }
        }
    }
}
