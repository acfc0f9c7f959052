//! Summit Binary
//!
//! Loads a board, solves the climbing game from its start vertex, and prints
//! the replayed decisions that realize the solved score.
//!
//! Usage: summit --board boards/easy.json [--climbers 2] [--days 4] ...

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use summit::board::Layout;
use summit::cards::Catalog;
use summit::solver::Config;
use summit::solver::Solver;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, required = true, help = "Board layout as JSON")]
    board: PathBuf,
    #[arg(long, default_value_t = 1, help = "Climbers in the party (1 or 2)")]
    climbers: usize,
    #[arg(long, help = "Card catalog, e.g. \"M1*5 M2*3 A1*2\" (standard deck if omitted)")]
    catalog: Option<String>,
    #[arg(long, default_value_t = summit::DAYS)]
    days: usize,
    #[arg(long, default_value_t = summit::HAND_SIZE)]
    hand: usize,
    #[arg(long, default_value_t = summit::PLAY_SIZE)]
    play: usize,
    #[arg(long, default_value_t = summit::SAMPLES, help = "Draws explored per chance node")]
    samples: usize,
    #[arg(long, default_value_t = summit::MAX_ACC)]
    ceiling: i32,
    #[arg(long, default_value_t = summit::START_ACC)]
    initial: i32,
    #[arg(long, default_value_t = summit::SCORE_WEIGHT)]
    weight: i32,
    #[arg(long, default_value_t = summit::PARALLEL_DEPTH, help = "Levels searched as separate tasks")]
    parallel: usize,
    #[arg(long, default_value_t = summit::SEED)]
    seed: u64,
    #[arg(long, help = "Enforce vertex crowding limits")]
    limits: bool,
    #[arg(long, help = "Worker threads (all cores if omitted)")]
    threads: Option<usize>,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            days: args.days,
            hand: args.hand,
            play: args.play,
            samples: args.samples,
            ceiling: args.ceiling,
            initial: args.initial,
            weight: args.weight,
            parallel: args.parallel,
            seed: args.seed,
            limits: args.limits,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    summit::log();
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(args.threads.unwrap_or_else(num_cpus::get))
        .enable_all()
        .build()?
        .block_on(run(args))
}

async fn run(args: Args) -> anyhow::Result<()> {
    let board = Layout::load(&args.board)?;
    let catalog = match args.catalog.as_deref() {
        Some(catalog) => Catalog::try_from(catalog)?,
        None => Catalog::default(),
    };
    log::info!("{:<32}{:<16}", "catalog", catalog.to_string());
    let solver = Arc::new(Solver::new(board, catalog, Config::from(&args))?);
    let start = solver.start(args.climbers)?;
    let value = solver.solve(start).await?;
    log::info!("{:<32}{:<16}", "worst-case score", value);
    log::info!("{:<32}{:<16}", "evaluations", solver.evaluations());
    for step in solver.trace(start).await? {
        println!("{}", step);
    }
    Ok(())
}
