use crate::logic::board::{Board, Coord};
use thiserror::Error;

/// Row/column deltas, one per compass direction.
pub type Direction = (isize, isize);

pub const DIRECTIONS: [Direction; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("coordinate ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },
    #[error("a move at ({row}, {col}) flanks no opposing pieces")]
    NoFlank { row: usize, col: usize },
    #[error("symbol '{0}' is not registered on this board")]
    UnknownSymbol(char),
    #[error("it is not '{0}' to move")]
    NotYourTurn(char),
    #[error("the game is already over")]
    GameOver,
}

/// One step from `from` along `dir`, `None` when it leaves the board.
#[must_use]
pub fn step(from: Coord, dir: Direction, dim: usize) -> Option<Coord> {
    let row = from.row.checked_add_signed(dir.0)?;
    let col = from.col.checked_add_signed(dir.1)?;
    (row < dim && col < dim).then_some(Coord::new(row, col))
}

/// Length of the opposing run that a `symbol` move at `from` would capture
/// along `dir`: the number of consecutive opponent pieces immediately next to
/// `from`, provided the run is closed off by a `symbol` piece. Zero when the
/// direction captures nothing.
#[must_use]
pub fn flanked_run(board: &Board, from: Coord, dir: Direction, symbol: char) -> usize {
    let Some(opponent) = board.opponent_of(symbol) else {
        return 0;
    };
    let mut run = 0;
    let mut cur = from;
    loop {
        let Some(next) = step(cur, dir, board.dimension()) else {
            return 0;
        };
        match board.cell(next) {
            Some(s) if s == opponent => {
                run += 1;
                cur = next;
            }
            Some(s) if s == symbol => return run,
            _ => return 0,
        }
    }
}

/// Full legality check for placing `symbol` at `coord`: the symbol must be
/// registered, the cell on the board and empty, and at least one direction
/// must flank an opposing run.
pub fn validate_move(board: &Board, coord: Coord, symbol: char) -> Result<(), MoveError> {
    if board.opponent_of(symbol).is_none() {
        return Err(MoveError::UnknownSymbol(symbol));
    }
    if !board.in_bounds(coord) {
        return Err(MoveError::OutOfBounds {
            row: coord.row,
            col: coord.col,
        });
    }
    if board.cell(coord).is_some() {
        return Err(MoveError::CellOccupied {
            row: coord.row,
            col: coord.col,
        });
    }
    if DIRECTIONS
        .iter()
        .any(|&dir| flanked_run(board, coord, dir, symbol) > 0)
    {
        Ok(())
    } else {
        Err(MoveError::NoFlank {
            row: coord.row,
            col: coord.col,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stays_on_board() {
        assert_eq!(step(Coord::new(0, 0), (-1, 0), 4), None);
        assert_eq!(step(Coord::new(3, 3), (1, 1), 4), None);
        assert_eq!(step(Coord::new(1, 1), (1, -1), 4), Some(Coord::new(2, 0)));
    }

    #[test]
    fn test_flanked_run_basic() {
        let board = Board::new();
        // (0,1) -> south: O at (1,1) closed by X at (2,1).
        assert_eq!(flanked_run(&board, Coord::new(0, 1), (1, 0), 'X'), 1);
        // (0,1) -> south-east: X at (1,2) is no opposing run.
        assert_eq!(flanked_run(&board, Coord::new(0, 1), (1, 1), 'X'), 0);
    }

    #[test]
    fn test_flanked_run_open_end() {
        let mut board = Board::new();
        board.clear();
        // O O with no closing X: nothing is flanked.
        board.set_cell(Coord::new(1, 1), Some('O'));
        board.set_cell(Coord::new(1, 2), Some('O'));
        assert_eq!(flanked_run(&board, Coord::new(1, 0), (0, 1), 'X'), 0);

        // Close the run and the whole pair is captured.
        board.set_cell(Coord::new(1, 3), Some('X'));
        assert_eq!(flanked_run(&board, Coord::new(1, 0), (0, 1), 'X'), 2);
    }

    #[test]
    fn test_validate_move_errors() {
        let board = Board::new();
        assert_eq!(
            validate_move(&board, Coord::new(0, 1), 'Z'),
            Err(MoveError::UnknownSymbol('Z'))
        );
        assert_eq!(
            validate_move(&board, Coord::new(7, 0), 'X'),
            Err(MoveError::OutOfBounds { row: 7, col: 0 })
        );
        assert_eq!(
            validate_move(&board, Coord::new(0, 0), 'X'),
            Err(MoveError::NoFlank { row: 0, col: 0 })
        );
        assert!(validate_move(&board, Coord::new(0, 1), 'X').is_ok());
    }
}
