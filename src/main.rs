use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use othello_core::engine::config::EngineConfig;
use othello_core::logic::board::Board;
use othello_core::logic::game::{GameState, GameStatus};
use othello_core::player::{MinimaxPlayer, Player, RandomPlayer};
use std::fs;
use std::path::PathBuf;

mod players;

use players::HumanPlayer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    Human,
    Minimax,
    Random,
}

#[derive(Debug, Parser)]
#[command(name = "othello", about = "Reduced-board Othello against a minimax engine")]
struct Args {
    /// Board dimension; must be even.
    #[arg(long, default_value_t = 4)]
    size: usize,

    /// Who plays 'X' (moves first).
    #[arg(long, value_enum, default_value = "human")]
    p1: PlayerKind,

    /// Who plays 'O'.
    #[arg(long, value_enum, default_value = "minimax")]
    p2: PlayerKind,

    /// JSON file with engine parameters (max_plies, cutoff_plies).
    #[arg(long)]
    engine_config: Option<PathBuf>,

    /// Seed for random players, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,
}

fn build_player(
    kind: PlayerKind,
    symbol: char,
    config: &EngineConfig,
    seed: Option<u64>,
) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::new(symbol)),
        PlayerKind::Minimax => Box::new(MinimaxPlayer::with_config(symbol, *config)),
        PlayerKind::Random => match seed {
            Some(seed) => Box::new(RandomPlayer::seeded(symbol, seed)),
            None => Box::new(RandomPlayer::new(symbol)),
        },
    }
}

fn load_engine_config(path: Option<&PathBuf>) -> Result<EngineConfig> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading engine config {}", path.display()))?;
            EngineConfig::load_from_json(&json)
                .with_context(|| format!("parsing engine config {}", path.display()))
        }
        None => Ok(EngineConfig::default()),
    }
}

fn run(args: &Args) -> Result<()> {
    if args.size < 4 || args.size % 2 != 0 {
        bail!("board size must be an even number of at least 4, got {}", args.size);
    }
    if args.size > 8 {
        bail!("the exhaustive search is not practical beyond size 8");
    }

    let config = load_engine_config(args.engine_config.as_ref())?;
    tracing::info!(size = args.size, max_plies = config.max_plies, "starting game");

    let mut game = GameState::with_board(Board::with_dimension(args.size));
    let mut p1 = build_player(args.p1, game.board.p1_symbol(), &config, args.seed);
    let mut p2 = build_player(args.p2, game.board.p2_symbol(), &config, args.seed.map(|s| s + 1));

    println!("{}", game.board);
    while game.status == GameStatus::Playing {
        let turn = game.turn;
        let player = if turn == game.board.p1_symbol() {
            p1.as_mut()
        } else {
            p2.as_mut()
        };

        let Some(coord) = player.next_move(&game.board)? else {
            // The game state passes a move-less side over automatically, so a
            // queried player always has at least one legal move.
            bail!("player '{turn}' produced no move although moves are available");
        };
        game.make_move(coord, turn)
            .with_context(|| format!("applying {coord} for '{turn}'"))?;

        println!("'{turn}' plays {coord}");
        println!("{}", game.board);
    }

    let (p1_score, p2_score) = game.scores();
    println!(
        "final score: '{}' {} - {} '{}'",
        game.board.p1_symbol(),
        p1_score,
        p2_score,
        game.board.p2_symbol()
    );
    match game.status {
        GameStatus::Finished { winner: Some(winner) } => println!("'{winner}' wins"),
        GameStatus::Finished { winner: None } => println!("draw"),
        GameStatus::Playing => {}
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    run(&args)
}
