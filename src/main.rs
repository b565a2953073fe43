//! Breakthrough-Rust: play Breakthrough in the terminal.
//!
//! ## Usage
//!
//! - `breakthrough-rust` - Human (side A) against minimax (side B)
//! - `breakthrough-rust play [LAYOUT] --a random --b minimax` - Choose players
//! - `breakthrough-rust demo` - Watch minimax play the greedy strategy

use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use fastrand::Rng;

use breakthrough_rust::board::Board;
use breakthrough_rust::config::GameConfig;
use breakthrough_rust::constants::{DEFAULT_DEPTH, DEFAULT_SIZE};
use breakthrough_rust::game::{Game, GameResult, Outcome};
use breakthrough_rust::human::HumanPlayer;
use breakthrough_rust::layout::load_layout;
use breakthrough_rust::player::{GreedyPlayer, MinimaxPlayer, Player, RandomPlayer};
use breakthrough_rust::types::{Move, Side};

/// Breakthrough-Rust: Breakthrough with a minimax opponent
#[derive(Parser)]
#[command(name = "breakthrough-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log game and search details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal
    Play(PlayArgs),
    /// Watch minimax (side A) play greedy (side B)
    Demo {
        /// Search depth in plies
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: u32,
        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args)]
struct PlayArgs {
    /// Board layout file; the standard opening is used when omitted
    layout: Option<PathBuf>,

    /// Rows of the standard board
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    rows: usize,

    /// Columns of the standard board
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    cols: usize,

    /// Minimax search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Who plays side A (moves first, starts at the bottom)
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    a: PlayerKind,

    /// Who plays side B
    #[arg(long, value_enum, default_value_t = PlayerKind::Minimax)]
    b: PlayerKind,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            layout: None,
            rows: DEFAULT_SIZE,
            cols: DEFAULT_SIZE,
            depth: DEFAULT_DEPTH,
            seed: None,
            a: PlayerKind::Human,
            b: PlayerKind::Minimax,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PlayerKind {
    Human,
    Random,
    Greedy,
    Minimax,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Some(Commands::Play(args)) => run_play(args),
        Some(Commands::Demo { depth, seed }) => run_demo(depth, seed),
        None => run_play(PlayArgs::default()),
    }
}

fn master_rng(seed: Option<u64>) -> Rng {
    match seed {
        Some(seed) => Rng::with_seed(seed),
        None => Rng::new(),
    }
}

fn make_player(kind: PlayerKind, side: Side, depth: u32, rng: &mut Rng) -> Box<dyn Player> {
    let rng = Rng::with_seed(rng.u64(..));
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::new(
            side,
            BufReader::new(io::stdin()),
            io::stdout(),
        )),
        PlayerKind::Random => Box::new(RandomPlayer::new(side, rng)),
        PlayerKind::Greedy => Box::new(GreedyPlayer::new(side, rng)),
        PlayerKind::Minimax => Box::new(MinimaxPlayer::new(side, depth, rng)),
    }
}

fn print_move(board: &Board, mv: Move) {
    println!(
        "Side {} plays {} -> {}",
        mv.side,
        mv.src.to_algebraic(board.rows()),
        mv.dest.to_algebraic(board.rows())
    );
    println!("{board}");
}

fn print_result(result: GameResult) {
    match result.outcome {
        Outcome::Decided => println!(
            "Side {} wins after {} plies.",
            result.winner, result.plies
        ),
        Outcome::Forfeit => println!(
            "Side {} has no legal move; side {} wins after {} plies.",
            result.winner.opponent(),
            result.winner,
            result.plies
        ),
    }
}

fn run_play(args: PlayArgs) -> Result<()> {
    let config = GameConfig::default()
        .with_size(args.rows, args.cols)
        .with_depth(args.depth);

    let board = match &args.layout {
        Some(path) => load_layout(path, config)
            .with_context(|| format!("failed to load layout {}", path.display()))?,
        None => Board::standard(config).context("failed to set up the standard board")?,
    };

    let mut rng = master_rng(args.seed);
    let depth = board.config().depth;
    let players = [
        make_player(args.a, Side::A, depth, &mut rng),
        make_player(args.b, Side::B, depth, &mut rng),
    ];
    let mut game = Game::new(board, players).context("failed to start game")?;

    println!("{}", game.board());
    let result = game.run(print_move)?;
    print_result(result);
    Ok(())
}

fn run_demo(depth: u32, seed: Option<u64>) -> Result<()> {
    println!("Breakthrough-Rust: minimax (A, depth {depth}) vs greedy (B)\n");

    let config = GameConfig::default().with_depth(depth);
    let board = Board::standard(config)?;
    let mut rng = master_rng(seed);
    let players = [
        make_player(PlayerKind::Minimax, Side::A, depth, &mut rng),
        make_player(PlayerKind::Greedy, Side::B, depth, &mut rng),
    ];
    let mut game = Game::new(board, players)?;

    println!("{}", game.board());
    let result = game.run(print_move)?;
    print_result(result);
    Ok(())
}
