use crate::logic::board::{Board, Coord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod config;
pub mod eval;
pub mod search;

/// Counters for one invocation of the move selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States visited by the recursive evaluator, the root included.
    pub nodes: u64,
    /// States scored with the static utility.
    pub leaves: u64,
    pub time_ms: u64,
}

/// Result of one move selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// `None` when the root position itself has no legal move.
    pub best: Option<Coord>,
    /// Root value under the material-count utility.
    pub value: i32,
    pub stats: SearchStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("agent symbol '{0}' matches neither player registered on the board")]
    UnrecognizedSymbol(char),
    #[error("search exceeded the recursion guard of {max_plies} plies")]
    DepthExceeded { max_plies: u32 },
}

pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> i32;
}

pub trait Searcher {
    /// Selects a move for `symbol` on `board`, or reports why none could be
    /// produced. An `Ok` outcome with no move means the position is terminal
    /// for `symbol`.
    fn choose_move(&mut self, board: &Board, symbol: char) -> Result<SearchOutcome, SearchError>;
}
