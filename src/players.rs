use othello_core::logic::board::{Board, Coord};
use othello_core::player::{Player, PlayerError};
use std::io::{self, BufRead, Write};

/// Terminal-driven player. Prompts until it reads a legal coordinate, in
/// either algebraic form (`b3`) or one-based `row col` form (`3 2`).
pub struct HumanPlayer {
    symbol: char,
}

impl HumanPlayer {
    pub const fn new(symbol: char) -> Self {
        Self { symbol }
    }
}

impl Player for HumanPlayer {
    fn symbol(&self) -> char {
        self.symbol
    }

    fn next_move(&mut self, board: &Board) -> Result<Option<Coord>, PlayerError> {
        let moves = board.legal_moves(self.symbol);
        if moves.is_empty() {
            return Ok(None);
        }

        let mut line = String::new();
        loop {
            let options = moves
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            print!("'{}' to move [{options}] > ", self.symbol);
            io::stdout().flush().map_err(PlayerError::Io)?;

            line.clear();
            let read = io::stdin().lock().read_line(&mut line).map_err(PlayerError::Io)?;
            if read == 0 {
                return Err(PlayerError::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "stdin closed while a move was expected",
                )));
            }

            match parse_coord(line.trim(), board.dimension()) {
                Some(coord) if board.is_legal_move(coord, self.symbol) => {
                    return Ok(Some(coord));
                }
                Some(coord) => println!("{coord} is not a legal move"),
                None => println!("could not read a coordinate from {:?}", line.trim()),
            }
        }
    }
}

/// Parses `b3` (column letter, one-based row) or `3 2` (one-based row and
/// column). Returns `None` for anything off the board.
pub fn parse_coord(input: &str, dim: usize) -> Option<Coord> {
    let text = input.trim().to_ascii_lowercase();
    let first = text.chars().next()?;

    let coord = if first.is_ascii_alphabetic() {
        let col = (first as usize).checked_sub('a' as usize)?;
        let row: usize = text.get(1..)?.trim().parse().ok()?;
        Coord::new(row.checked_sub(1)?, col)
    } else {
        let mut parts = text.split_whitespace();
        let row: usize = parts.next()?.parse().ok()?;
        let col: usize = parts.next()?.parse().ok()?;
        Coord::new(row.checked_sub(1)?, col.checked_sub(1)?)
    };

    (coord.row < dim && coord.col < dim).then_some(coord)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algebraic() {
        assert_eq!(parse_coord("b3", 4), Some(Coord::new(2, 1)));
        assert_eq!(parse_coord(" D1 ", 4), Some(Coord::new(0, 3)));
        assert_eq!(parse_coord("e1", 4), None);
        assert_eq!(parse_coord("a9", 4), None);
    }

    #[test]
    fn test_parse_numeric_pair() {
        assert_eq!(parse_coord("3 2", 4), Some(Coord::new(2, 1)));
        assert_eq!(parse_coord("1 4", 4), Some(Coord::new(0, 3)));
        assert_eq!(parse_coord("0 1", 4), None);
        assert_eq!(parse_coord("5 1", 4), None);
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_coord("", 4), None);
        assert_eq!(parse_coord("xx", 4), None);
        assert_eq!(parse_coord("3", 4), None);
    }
}
