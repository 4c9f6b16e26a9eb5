//! Snake & Ladders in the terminal.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use snakes_ladders::core::{ModeKind, DEFAULT_LADDERS, DEFAULT_SNAKES};
use snakes_ladders::{draw_board, GameConfig, GameEngine, TextRenderer};

/// Snake & Ladders for 2-4 players
#[derive(Parser, Debug)]
#[command(name = "snakes-ladders")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of players (2-4)
    #[arg(short, long, default_value_t = 2)]
    players: usize,

    /// Player name, once per player in seat order (blank = "Player N")
    #[arg(short, long = "name")]
    names: Vec<String>,

    /// Game mode
    #[arg(short, long, value_enum, default_value_t = Mode::Normal)]
    mode: Mode,

    /// Magic key value (1-6), required in magic-key mode
    #[arg(short = 'k', long)]
    magic_key: Option<String>,

    /// Random seed (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of snakes
    #[arg(long, default_value_t = DEFAULT_SNAKES)]
    snakes: usize,

    /// Number of ladders
    #[arg(long, default_value_t = DEFAULT_LADDERS)]
    ladders: usize,

    /// Roll automatically instead of waiting for Enter
    #[arg(short, long)]
    auto: bool,

    /// Stop after this many rolls (auto mode only)
    #[arg(long, default_value_t = 10_000)]
    max_turns: u32,
}

/// Game mode as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Every roll moves.
    Normal,
    /// Roll the magic key once before moving.
    MagicKey,
}

impl From<Mode> for ModeKind {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Normal => ModeKind::Normal,
            Mode::MagicKey => ModeKind::MagicKey,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = GameConfig::builder()
        .player_count(args.players)
        .names(args.names)
        .mode(args.mode.into())
        .magic_key_input(args.magic_key)
        .snakes(args.snakes)
        .ladders(args.ladders)
        .seed(args.seed)
        .build()
        .context("invalid game configuration")?;

    let mut engine = GameEngine::new(config).context("could not generate a board")?;
    let mut renderer = TextRenderer::new(engine.config().player_names.clone());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    writeln!(out, "Welcome to Snake & Ladders (seed {})", engine.seed())?;
    if let Some(key) = engine.config().mode.magic_key() {
        writeln!(out, "Magic key mode: roll a {} before your moves count", key.value())?;
    }
    write!(out, "{}", draw_board(engine.board(), engine.players()))?;

    let mut turns = 0;
    while let Ok(player) = engine.current_player() {
        if args.auto {
            if turns >= args.max_turns {
                writeln!(out, "Stopping after {} rolls without a winner", turns)?;
                break;
            }
        } else {
            write!(out, "{}, press Enter to roll (q to quit): ", engine.player(player).name)?;
            out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 || line.trim().eq_ignore_ascii_case("q") {
                break;
            }
        }

        let record = engine.roll_dice(&mut renderer)?;
        turns += 1;

        writeln!(out, "{}", record)?;
        for line in renderer.drain_lines() {
            writeln!(out, "  {}", line)?;
        }
        if !args.auto {
            write!(out, "{}", draw_board(engine.board(), engine.players()))?;
        }
    }

    if let Some(winner) = engine.winner() {
        write!(out, "{}", draw_board(engine.board(), engine.players()))?;
        writeln!(
            out,
            "{} wins after {} rolls",
            engine.player(winner).name,
            engine.history().len()
        )?;
    }

    Ok(())
}
