//! Engine-vs-engine game runner.
//!
//! Run with:
//! `cargo run --release --bin self_play`
//! `RUST_LOG=debug cargo run --release --bin self_play -- --black random --seed 7`

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mailbox_chess::engines::engine_negamax::NegamaxEngine;
use mailbox_chess::engines::engine_random::RandomEngine;
use mailbox_chess::engines::engine_trait::Engine;
use mailbox_chess::game_state::chess_game::{Chess, GameOutcome};
use mailbox_chess::game_state::chess_types::Color;
use mailbox_chess::search::negamax::SearchConfig;
use mailbox_chess::utils::render_board::render_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    Negamax,
    Random,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Engine playing White
    #[arg(long, value_enum, default_value = "negamax")]
    white: PlayerKind,

    /// Engine playing Black
    #[arg(long, value_enum, default_value = "random")]
    black: PlayerKind,

    /// Plies searched beneath each root move by negamax players
    #[arg(short, long, default_value = "3")]
    depth: u8,

    /// Stop after this many plies even if the game is not over
    #[arg(long, default_value = "200")]
    max_plies: u32,

    /// Seed for random players; omitted means OS entropy
    #[arg(long)]
    seed: Option<u64>,

    /// Starting placement, optionally with side-to-move and castling fields
    #[arg(long)]
    position: Option<String>,

    /// Print the board after every move
    #[arg(short, long)]
    verbose: bool,
}

fn build_player(kind: PlayerKind, depth: u8, seed: Option<u64>) -> Box<dyn Engine> {
    match kind {
        PlayerKind::Negamax => Box::new(NegamaxEngine::new(SearchConfig { depth })),
        PlayerKind::Random => match seed {
            Some(seed) => Box::new(RandomEngine::seeded(seed)),
            None => Box::new(RandomEngine::new()),
        },
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut game = Chess::new();
    if let Some(position) = &args.position {
        game.load_starting_position(position)?;
    }

    let mut white = build_player(args.white, args.depth, args.seed);
    // Offset so two random players with one seed do not mirror each other.
    let mut black = build_player(args.black, args.depth, args.seed.map(|s| s.wrapping_add(1)));
    info!(white = white.name(), black = black.name(), "starting game");

    println!("{}", render_board(game.board()));

    let mut plies = 0;
    while game.outcome() == GameOutcome::InProgress && plies < args.max_plies {
        let side = game.side_to_move();
        let player = match side {
            Color::White => &mut white,
            Color::Black => &mut black,
        };

        let output = player.choose_move(game.board(), game.move_context(), side)?;
        let Some(mv) = output.best_move else {
            break;
        };
        game.commit(mv)?;
        plies += 1;

        if args.verbose {
            match output.score {
                Some(score) => println!("{plies:>3}. {side:?} {mv} (score {score})"),
                None => println!("{plies:>3}. {side:?} {mv}"),
            }
            for line in &output.info_lines {
                println!("     {line}");
            }
            println!("{}", render_board(game.board()));
        }
    }

    println!("{}", render_board(game.board()));
    match game.outcome() {
        GameOutcome::Checkmate { winner } => {
            println!("checkmate, {winner:?} wins after {plies} plies")
        }
        GameOutcome::Stalemate => println!("stalemate after {plies} plies"),
        GameOutcome::InsufficientMaterial => println!("draw by bare kings after {plies} plies"),
        GameOutcome::InProgress => println!("stopped after {plies} plies"),
    }
    println!("final state {}", game.serialize_board());
    Ok(())
}
