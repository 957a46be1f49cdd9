use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use flexi_logger::{LogSpecification, Logger, LoggerHandle, opt_format};
use pairs_core::{BoardGenerator, Leaderboard, RandomBoardGenerator, ScoreStorage};

use crate::play::{PlayOutcome, Session};
use crate::render::draw_leaderboard;
use crate::storage::JsonFileStorage;

mod play;
mod render;
mod storage;

#[derive(Parser, Debug)]
#[command(version, about = "Find the matching pairs on a 4x4 board", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Where the high scores are kept
    #[arg(long, global = true, default_value = "highscores.json")]
    scores: PathBuf,

    /// Force a seed instead of random
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// How long a mismatched pair stays visible, in milliseconds
    #[arg(long, global = true, default_value_t = 1500)]
    pause_ms: u64,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Play a round and record the score
    Play,
    /// Show the best scores
    Highscore,
    /// Forget every recorded score
    Reset,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _logger = init_logging(&args.verbose)?;
    log::debug!("{args:?}");

    let mut storage = JsonFileStorage::new(&args.scores);
    let stdout = io::stdout();

    match args.command {
        Some(Command::Play) => play(&args, &mut storage),
        Some(Command::Highscore) => highscore(&storage, &mut stdout.lock()),
        Some(Command::Reset) => reset(&mut storage, &mut stdout.lock()),
        None => {
            Args::command().print_help()?;
            println!("\nRun `pairs play` to start a round.");
            Ok(())
        }
    }
}

fn init_logging(verbose: &clap_verbosity_flag::Verbosity) -> Result<LoggerHandle> {
    let spec = LogSpecification::builder()
        .default(verbose.log_level_filter())
        .build();
    Ok(Logger::with(spec).format(opt_format).start()?)
}

fn play(args: &Args, storage: &mut impl ScoreStorage) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {seed}");
    let board = RandomBoardGenerator::new(seed).generate();

    let stdin = io::stdin();
    let mut session = Session::new(
        stdin.lock(),
        io::stdout(),
        Duration::from_millis(args.pause_ms),
    );
    match session.play(board, storage)? {
        PlayOutcome::Saved { score } | PlayOutcome::SaveFailed { score } => {
            log::info!("Round finished with score {score}")
        }
        PlayOutcome::Abandoned => {}
    }
    Ok(())
}

fn highscore(storage: &impl ScoreStorage, out: &mut impl Write) -> Result<()> {
    draw_leaderboard(out, &storage.load())?;
    Ok(())
}

fn reset(storage: &mut impl ScoreStorage, out: &mut impl Write) -> Result<()> {
    match storage.save(&Leaderboard::clear()) {
        Ok(()) => writeln!(out, "High scores cleared.")?,
        Err(err) => writeln!(out, "Could not clear high scores: {err}")?,
    }
    Ok(())
}
