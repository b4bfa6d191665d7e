use crate::engine::Evaluator;
use crate::logic::board::Board;

/// Material-count utility: player one's piece count minus player two's,
/// whoever is to move and whoever is maximizing. The sign orientation is a
/// property of the search routines, not of this function.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

impl Evaluator for MaterialEvaluator {
    #[allow(clippy::cast_possible_wrap)]
    fn evaluate(&self, board: &Board) -> i32 {
        let p1 = board.count_score(board.p1_symbol()) as i32;
        let p2 = board.count_score(board.p2_symbol()) as i32;
        p1 - p2
    }
}
