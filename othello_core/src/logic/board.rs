use crate::logic::rules::{self, MoveError};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_DIM: usize = 4;
pub const DEFAULT_P1: char = 'X';
pub const DEFAULT_P2: char = 'O';

/// A (row, column) cell address, zero-based, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Algebraic form: column letter, one-based row number.
        let col = char::from(b'a' + (self.col % 26) as u8);
        write!(f, "{}{}", col, self.row + 1)
    }
}

/// Board state for the reduced Othello variant.
///
/// A square grid of `dim` cells per side, each empty or holding one of the
/// two registered player symbols. The board also carries an optional "origin
/// move" tag naming the move that produced this state; the search engine uses
/// it to propagate the chosen move out of a recursion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    dim: usize,
    cells: Vec<Option<char>>,
    p1: char,
    p2: char,
    origin: Option<Coord>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard 4x4 board, `'X'` vs `'O'`, centre seeded.
    #[must_use]
    pub fn new() -> Self {
        Self::with_symbols(DEFAULT_DIM, DEFAULT_P1, DEFAULT_P2)
    }

    /// Default symbols on a board of the given (even) dimension.
    #[must_use]
    pub fn with_dimension(dim: usize) -> Self {
        Self::with_symbols(dim, DEFAULT_P1, DEFAULT_P2)
    }

    /// Custom symbols. `dim` must be even and at least 2; the symbols must
    /// differ.
    #[must_use]
    pub fn with_symbols(dim: usize, p1: char, p2: char) -> Self {
        debug_assert!(dim >= 2 && dim % 2 == 0, "board dimension must be even");
        debug_assert!(p1 != p2, "player symbols must differ");
        let mut board = Self {
            dim,
            cells: vec![None; dim * dim],
            p1,
            p2,
            origin: None,
        };
        board.seed_centre();
        board
    }

    // Standard 2x2 opening: p2 on the main diagonal, p1 on the other, so
    // that p1 moving first matches the usual dark-first convention.
    fn seed_centre(&mut self) {
        let hi = self.dim / 2;
        let lo = hi - 1;
        self.set_cell(Coord::new(lo, lo), Some(self.p2));
        self.set_cell(Coord::new(lo, hi), Some(self.p1));
        self.set_cell(Coord::new(hi, lo), Some(self.p1));
        self.set_cell(Coord::new(hi, hi), Some(self.p2));
    }

    /// Empties every cell. Used to stage hand-built positions.
    pub fn clear(&mut self) {
        self.cells = vec![None; self.dim * self.dim];
        self.origin = None;
    }

    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dim
    }

    #[must_use]
    pub const fn p1_symbol(&self) -> char {
        self.p1
    }

    #[must_use]
    pub const fn p2_symbol(&self) -> char {
        self.p2
    }

    /// The other registered symbol, or `None` when `symbol` is not
    /// registered on this board.
    #[must_use]
    pub const fn opponent_of(&self, symbol: char) -> Option<char> {
        if symbol == self.p1 {
            Some(self.p2)
        } else if symbol == self.p2 {
            Some(self.p1)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.dim && coord.col < self.dim
    }

    /// Cell content; `None` for empty or out-of-bounds coordinates.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<char> {
        if !self.in_bounds(coord) {
            return None;
        }
        self.cells.get(coord.row * self.dim + coord.col).copied()?
    }

    /// Overwrites a cell without any rule checking. Out-of-bounds writes are
    /// ignored. Used to stage positions; regular play goes through
    /// [`Board::play_move`].
    pub fn set_cell(&mut self, coord: Coord, value: Option<char>) {
        if !self.in_bounds(coord) {
            return;
        }
        let idx = coord.row * self.dim + coord.col;
        if let Some(cell) = self.cells.get_mut(idx) {
            *cell = value;
        }
    }

    #[must_use]
    pub fn count_score(&self, symbol: char) -> usize {
        self.cells.iter().filter(|c| **c == Some(symbol)).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn is_legal_move(&self, coord: Coord, symbol: char) -> bool {
        rules::validate_move(self, coord, symbol).is_ok()
    }

    /// All legal moves for `symbol`, in row-major order.
    #[must_use]
    pub fn legal_moves(&self, symbol: char) -> Vec<Coord> {
        let mut moves = Vec::new();
        for row in 0..self.dim {
            for col in 0..self.dim {
                let coord = Coord::new(row, col);
                if self.is_legal_move(coord, symbol) {
                    moves.push(coord);
                }
            }
        }
        moves
    }

    #[must_use]
    pub fn has_legal_move(&self, symbol: char) -> bool {
        for row in 0..self.dim {
            for col in 0..self.dim {
                if self.is_legal_move(Coord::new(row, col), symbol) {
                    return true;
                }
            }
        }
        false
    }

    /// Validates and applies a move in place: places `symbol` on `coord` and
    /// flips every flanked opposing run in all eight directions.
    pub fn play_move(&mut self, coord: Coord, symbol: char) -> Result<(), MoveError> {
        rules::validate_move(self, coord, symbol)?;

        // Capture every run before mutating; the directions are disjoint but
        // recolouring one of them must not feed into the next scan.
        let runs: Vec<(rules::Direction, usize)> = rules::DIRECTIONS
            .iter()
            .map(|&dir| (dir, rules::flanked_run(self, coord, dir, symbol)))
            .collect();

        for (dir, run) in runs {
            let mut cur = coord;
            for _ in 0..run {
                if let Some(next) = rules::step(cur, dir, self.dim) {
                    self.set_cell(next, Some(symbol));
                    cur = next;
                }
            }
        }
        self.set_cell(coord, Some(symbol));
        Ok(())
    }

    /// The move that produced this state, if it was tagged as a successor.
    #[must_use]
    pub const fn origin(&self) -> Option<Coord> {
        self.origin
    }

    pub fn set_origin(&mut self, coord: Coord) {
        self.origin = Some(coord);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.dim {
            write!(f, " {}", char::from(b'a' + (col % 26) as u8))?;
        }
        writeln!(f)?;
        for row in 0..self.dim {
            write!(f, "{:>2}", row + 1)?;
            for col in 0..self.dim {
                match self.cell(Coord::new(row, col)) {
                    Some(symbol) => write!(f, " {symbol}")?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
