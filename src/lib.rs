//! Solver for a multi-day mountain climbing card game.
//!
//! Climbers spend movement and acclimatization cards to ascend a board of
//! altitude tiers. The crate precomputes Pareto-optimal path costs over the
//! board, then searches the day-by-day game tree for the best score that can
//! be guaranteed against sampled card draws.
pub mod board;
pub mod cards;
pub mod climbing;
pub mod paths;
pub mod solver;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Board rewards and composite game values.
pub type Score = i32;
/// Ascend and descend budgets spent or paid by cards.
pub type Cost = u32;
/// Climber health-like resource, adjusted by cards, vertices, and tents.
pub type Acclimatization = i32;
/// Zero-based day counter.
pub type Day = usize;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Cards held after each refill.
pub const HAND_SIZE: usize = 6;
/// Cards played per day (shared between climbers in the two-climber game).
pub const PLAY_SIZE: usize = 3;
/// Days in one game.
pub const DAYS: Day = 7;
/// Acclimatization ceiling.
pub const MAX_ACC: Acclimatization = 6;
/// Acclimatization floor every climber must keep after a move.
pub const MIN_ACC: Acclimatization = 1;
/// Acclimatization a climber starts with.
pub const START_ACC: Acclimatization = 1;
/// Acclimatization gained by ending a day on a tent.
pub const TENT_BONUS: Acclimatization = 1;
/// Reward multiplier in the composite score (acclimatization breaks ties).
pub const SCORE_WEIGHT: Score = 100;

// ============================================================================
// SEARCH PARAMETERS
// ============================================================================
/// Random draws explored at each chance node. A heuristic stand-in for the
/// adversarial minimum over every possible draw.
pub const SAMPLES: usize = 3;
/// Search levels below the root whose children run as separate tasks.
pub const PARALLEL_DEPTH: usize = 2;
/// Base seed for chance-node sampling.
pub const SEED: u64 = 0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
