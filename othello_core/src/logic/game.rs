use crate::logic::board::{Board, Coord};
use crate::logic::rules::MoveError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    /// Neither side can move. `None` means a drawn count.
    Finished { winner: Option<char> },
}

/// One entry of the game record. `coord` is `None` for a forced pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub coord: Option<Coord>,
    pub symbol: char,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub turn: char,
    pub status: GameStatus,
    pub history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// Starts a game on the given board; player one moves first.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        let turn = board.p1_symbol();
        Self {
            board,
            turn,
            status: GameStatus::Playing,
            history: Vec::new(),
        }
    }

    /// Applies a move for `symbol`, records it, and advances the turn.
    ///
    /// A side with no reply is passed over automatically (recorded as a pass
    /// in the history); when neither side can move the game finishes with the
    /// winner decided by piece count.
    pub fn make_move(&mut self, coord: Coord, symbol: char) -> Result<(), MoveError> {
        if self.status != GameStatus::Playing {
            return Err(MoveError::GameOver);
        }
        if symbol != self.turn {
            return Err(MoveError::NotYourTurn(symbol));
        }

        self.board.play_move(coord, symbol)?;
        self.history.push(MoveRecord {
            coord: Some(coord),
            symbol,
        });
        self.advance_turn();
        Ok(())
    }

    fn advance_turn(&mut self) {
        let mover = self.turn;
        let Some(opponent) = self.board.opponent_of(mover) else {
            return;
        };

        if self.board.has_legal_move(opponent) {
            self.turn = opponent;
        } else if self.board.has_legal_move(mover) {
            log::debug!("'{opponent}' has no reply and passes");
            self.history.push(MoveRecord {
                coord: None,
                symbol: opponent,
            });
        } else {
            self.status = GameStatus::Finished {
                winner: self.winner_by_count(),
            };
        }
    }

    fn winner_by_count(&self) -> Option<char> {
        let (p1, p2) = self.scores();
        match p1.cmp(&p2) {
            std::cmp::Ordering::Greater => Some(self.board.p1_symbol()),
            std::cmp::Ordering::Less => Some(self.board.p2_symbol()),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Piece counts as `(player one, player two)`.
    #[must_use]
    pub fn scores(&self) -> (usize, usize) {
        (
            self.board.count_score(self.board.p1_symbol()),
            self.board.count_score(self.board.p2_symbol()),
        )
    }
}
