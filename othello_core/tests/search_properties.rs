#[cfg(test)]
mod tests {
    use othello_core::engine::config::EngineConfig;
    use othello_core::engine::search::MinimaxEngine;
    use othello_core::engine::{SearchError, Searcher};
    use othello_core::logic::board::{Board, Coord};
    use othello_core::logic::game::{GameState, GameStatus};
    use othello_core::player::{MinimaxPlayer, Player, RandomPlayer};

    fn filled_board() -> Board {
        let mut board = Board::new();
        for row in 0..board.dimension() {
            for col in 0..board.dimension() {
                let symbol = if row < 2 { 'X' } else { 'O' };
                board.set_cell(Coord::new(row, col), Some(symbol));
            }
        }
        board
    }

    #[test]
    fn test_selector_returns_an_available_opening_move() {
        // 4x4 board seeded with the standard 2x2 centre, agent plays
        // player one.
        let board = Board::new();
        let mut engine = MinimaxEngine::default();

        let outcome = engine.choose_move(&board, board.p1_symbol()).unwrap();
        let best = outcome.best.unwrap();
        assert!(board.legal_moves(board.p1_symbol()).contains(&best));
        assert!(outcome.stats.nodes > 1);
    }

    #[test]
    fn test_selector_is_deterministic_across_clones() {
        let board = Board::new();
        let mut engine = MinimaxEngine::default();

        let first = engine.choose_move(&board, 'X').unwrap();
        let second = engine.choose_move(&board.clone(), 'X').unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unrecognized_agent_never_yields_coordinates() {
        let board = Board::new();
        let mut engine = MinimaxEngine::default();
        assert_eq!(
            engine.choose_move(&board, '?'),
            Err(SearchError::UnrecognizedSymbol('?'))
        );
    }

    #[test]
    fn test_filled_board_is_terminal_for_both_symbols() {
        let board = filled_board();
        let mut engine = MinimaxEngine::default();

        assert!(engine.successors('X', &board).is_empty());
        assert!(engine.successors('O', &board).is_empty());

        let outcome = engine.choose_move(&board, 'X').unwrap();
        assert_eq!(outcome.best, None);
        assert_eq!(outcome.value, 0); // two full rows each
        assert_eq!(outcome.stats.nodes, 1);
    }

    #[test]
    fn test_depth_guard_is_an_error_not_a_crash() {
        let config = EngineConfig {
            max_plies: 3,
            cutoff_plies: None,
        };
        let mut engine = MinimaxEngine::new(config);
        assert_eq!(
            engine.choose_move(&Board::new(), 'X'),
            Err(SearchError::DepthExceeded { max_plies: 3 })
        );
    }

    #[test]
    fn test_minimax_finishes_a_game_against_random() {
        let mut game = GameState::new();
        let mut minimax = MinimaxPlayer::new(game.board.p1_symbol());
        let mut random = RandomPlayer::seeded(game.board.p2_symbol(), 42);

        let mut plies = 0;
        while game.status == GameStatus::Playing {
            let turn = game.turn;
            let player: &mut dyn Player = if turn == minimax.symbol() {
                &mut minimax
            } else {
                &mut random
            };
            let coord = player
                .next_move(&game.board)
                .unwrap()
                .expect("side to move always has a move");
            game.make_move(coord, turn).unwrap();

            plies += 1;
            assert!(plies <= 32, "game did not terminate");
        }

        let (p1, p2) = game.scores();
        match game.status {
            GameStatus::Finished { winner: Some(w) } if w == game.board.p1_symbol() => {
                assert!(p1 > p2);
            }
            GameStatus::Finished { winner: Some(_) } => assert!(p2 > p1),
            GameStatus::Finished { winner: None } => assert_eq!(p1, p2),
            GameStatus::Playing => unreachable!(),
        }
    }
}
