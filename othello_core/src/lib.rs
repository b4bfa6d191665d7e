//! Core crate for a reduced-board Othello/Reversi variant: board and rules,
//! game state, the minimax decision engine and the player abstractions.

pub mod engine;
pub mod logic;
pub mod player;
