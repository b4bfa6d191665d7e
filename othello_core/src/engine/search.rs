use crate::engine::config::EngineConfig;
use crate::engine::eval::MaterialEvaluator;
use crate::engine::{Evaluator, SearchError, SearchOutcome, SearchStats, Searcher};
use crate::logic::board::{Board, Coord};
use std::time::Instant;

/// Exhaustive minimax over the full game tree.
///
/// No pruning, no tables, no move ordering: every state is expanded until a
/// position with no legal move for the acting symbol, which is scored with
/// the material-count utility. The minimizing and maximizing routines
/// alternate, switching the acting symbol at every ply. The only bounds are
/// the `max_plies` recursion guard and the opt-in `cutoff_plies` heuristic
/// cutoff from [`EngineConfig`].
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    config: EngineConfig,
    evaluator: MaterialEvaluator,
    nodes: u64,
    leaves: u64,
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl MinimaxEngine {
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self {
            config,
            evaluator: MaterialEvaluator,
            nodes: 0,
            leaves: 0,
        }
    }

    /// One owned successor per legal move of `symbol`, in row-major move
    /// order, each tagged with the move that produced it. An empty vector
    /// signals a terminal (or pass) state. The input board is not touched.
    #[must_use]
    pub fn successors(&self, symbol: char, board: &Board) -> Vec<Board> {
        let mut states = Vec::new();
        for coord in board.legal_moves(symbol) {
            let mut child = board.clone();
            // Legality was established by the enumeration above.
            if child.play_move(coord, symbol).is_ok() {
                child.set_origin(coord);
                states.push(child);
            }
        }
        states
    }

    fn static_value(&mut self, board: &Board) -> i32 {
        self.leaves += 1;
        self.evaluator.evaluate(board)
    }

    /// Shared skeleton of the two recursive routines: depth guard, cutoff,
    /// terminal evaluation, then one recursive call per successor keeping
    /// the child preferred by `better`.
    fn extremal_value(
        &mut self,
        board: &Board,
        symbol: char,
        ply: u32,
        minimizing: bool,
    ) -> Result<(Option<Coord>, i32), SearchError> {
        self.nodes += 1;

        if ply > self.config.max_plies {
            return Err(SearchError::DepthExceeded {
                max_plies: self.config.max_plies,
            });
        }
        if let Some(cutoff) = self.config.cutoff_plies {
            if ply >= cutoff {
                return Ok((None, self.static_value(board)));
            }
        }

        let children = self.successors(symbol, board);
        if children.is_empty() {
            return Ok((None, self.static_value(board)));
        }

        let opponent = board
            .opponent_of(symbol)
            .ok_or(SearchError::UnrecognizedSymbol(symbol))?;

        let mut best_coord = None;
        let mut best_value = 0;
        for child in children {
            let (_, value) = self.extremal_value(&child, opponent, ply + 1, !minimizing)?;
            let better = if minimizing {
                value < best_value
            } else {
                value > best_value
            };
            if best_coord.is_none() || better {
                best_value = value;
                best_coord = child.origin();
            }
        }
        Ok((best_coord, best_value))
    }

    /// Minimizing routine: best achievable value for the minimizer from this
    /// state downward, with the move that achieves it.
    pub fn min_value(
        &mut self,
        board: &Board,
        symbol: char,
        ply: u32,
    ) -> Result<(Option<Coord>, i32), SearchError> {
        self.extremal_value(board, symbol, ply, true)
    }

    /// Maximizing routine, the root entry point of the recursion.
    pub fn max_value(
        &mut self,
        board: &Board,
        symbol: char,
        ply: u32,
    ) -> Result<(Option<Coord>, i32), SearchError> {
        self.extremal_value(board, symbol, ply, false)
    }
}

impl Searcher for MinimaxEngine {
    fn choose_move(&mut self, board: &Board, symbol: char) -> Result<SearchOutcome, SearchError> {
        if board.opponent_of(symbol).is_none() {
            return Err(SearchError::UnrecognizedSymbol(symbol));
        }

        self.nodes = 0;
        self.leaves = 0;
        let started = Instant::now();

        // The root always maximizes, whichever side the agent plays; the
        // utility stays oriented as player one minus player two.
        let (best, value) = self.max_value(board, symbol, 0)?;

        #[allow(clippy::cast_possible_truncation)]
        let stats = SearchStats {
            nodes: self.nodes,
            leaves: self.leaves,
            time_ms: started.elapsed().as_millis() as u64,
        };
        log::debug!(
            "minimax for '{}': value {}, {} nodes ({} leaves) in {} ms",
            symbol,
            value,
            stats.nodes,
            stats.leaves,
            stats.time_ms
        );
        Ok(SearchOutcome { best, value, stats })
    }
}
