use clap::{Parser, ValueEnum};
use serde::Serialize;

use okiya::{Board, Game, Node, Player, RandomizedSolver, Solver, WeakenedSolver};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Policy {
    /// Optimal play, first-encountered tie-break
    Best,
    /// Optimal play, stable-hash-rotated tie-break
    Randomized,
    /// Deliberately beatable: worst top-level choice
    Weakened,
}

#[derive(Debug, Parser)]
#[command(name = "solve", about = "Okiya exhaustive board solver")]
struct Args {
    /// 16 cards in two-character notation, space- or comma-separated.
    /// Suit glyphs and the C/D/H/S letters are both accepted,
    /// e.g. "KH JS JH QC QD JC KS AS JD QS KD QH KC AD AH AC"
    #[arg(long)]
    board: String,

    /// Move-selection policy
    #[arg(long, value_enum, default_value_t = Policy::Best)]
    policy: Policy,

    /// Player A token bitset, for resuming a mid-game position
    #[arg(long, default_value_t = 0)]
    tokens_a: u16,

    /// Player B token bitset, for resuming a mid-game position
    #[arg(long, default_value_t = 0)]
    tokens_b: u16,

    /// Side to move: 0 = A, 1 = B
    #[arg(long, default_value_t = 0)]
    side: u8,

    /// Cell played last; required once any tokens are set
    #[arg(long)]
    last_cell: Option<u8>,

    /// Emit the result as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Output {
    value: i32,
    moves: Vec<u8>,
    cards: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let board: Board = args.board.parse().map_err(|e| format!("Board error: {e}"))?;
    let side = match args.side {
        0 => Player::A,
        1 => Player::B,
        other => return Err(format!("Side must be 0 or 1, got {other}").into()),
    };
    let root = Node::from_parts(args.tokens_a, args.tokens_b, side, args.last_cell)
        .map_err(|e| format!("State error: {e}"))?;

    let game = Game::new(board);
    let (value, moves) = match args.policy {
        Policy::Best => {
            let result = Solver::new(&game).search(&root);
            (result.value, result.principal_variation)
        }
        Policy::Randomized => {
            let (moves, value) = RandomizedSolver::new(&game, root).play_out();
            (value, moves)
        }
        Policy::Weakened => {
            let (moves, value) = WeakenedSolver::new(&game, root).play_out();
            (value, moves)
        }
    };

    let cards = moves
        .iter()
        .map(|&cell| game.board().card(cell).to_string())
        .collect::<Vec<_>>();

    if args.json {
        let out = Output { value, moves, cards };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("score: {value}");
        println!(
            "line:  {}",
            moves
                .iter()
                .zip(&cards)
                .map(|(cell, card)| format!("{card}@{cell}"))
                .collect::<Vec<_>>()
                .join(" ")
        );
    }

    Ok(())
}
