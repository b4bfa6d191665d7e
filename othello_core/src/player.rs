use crate::engine::config::EngineConfig;
use crate::engine::search::MinimaxEngine;
use crate::engine::{SearchError, Searcher};
use crate::logic::board::{Board, Coord};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("player input failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A game agent. `Ok(None)` means the agent has no legal move and passes.
pub trait Player {
    fn symbol(&self) -> char;
    fn next_move(&mut self, board: &Board) -> Result<Option<Coord>, PlayerError>;
}

/// Agent backed by the exhaustive minimax engine. Stateless apart from its
/// symbol and counters, so `Clone` hands the caller an independent copy.
#[derive(Debug, Clone)]
pub struct MinimaxPlayer {
    symbol: char,
    engine: MinimaxEngine,
}

impl MinimaxPlayer {
    #[must_use]
    pub fn new(symbol: char) -> Self {
        Self::with_config(symbol, EngineConfig::default())
    }

    #[must_use]
    pub const fn with_config(symbol: char, config: EngineConfig) -> Self {
        Self {
            symbol,
            engine: MinimaxEngine::new(config),
        }
    }
}

impl Player for MinimaxPlayer {
    fn symbol(&self) -> char {
        self.symbol
    }

    fn next_move(&mut self, board: &Board) -> Result<Option<Coord>, PlayerError> {
        let outcome = self.engine.choose_move(board, self.symbol)?;
        Ok(outcome.best)
    }
}

/// Uniform random choice over the legal moves. Mostly a sparring partner for
/// the minimax agent in tests and on the command line.
#[derive(Clone)]
pub struct RandomPlayer {
    symbol: char,
    rng: StdRng,
}

impl RandomPlayer {
    #[must_use]
    pub fn new(symbol: char) -> Self {
        Self {
            symbol,
            rng: StdRng::from_entropy(),
        }
    }

    #[must_use]
    pub fn seeded(symbol: char, seed: u64) -> Self {
        Self {
            symbol,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn symbol(&self) -> char {
        self.symbol
    }

    fn next_move(&mut self, board: &Board) -> Result<Option<Coord>, PlayerError> {
        if board.opponent_of(self.symbol).is_none() {
            return Err(SearchError::UnrecognizedSymbol(self.symbol).into());
        }
        Ok(board.legal_moves(self.symbol).choose(&mut self.rng).copied())
    }
}
