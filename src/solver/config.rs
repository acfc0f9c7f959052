use crate::Acclimatization;
use crate::Day;
use crate::Score;

/// Game rules and search knobs for one solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// days in the game
    pub days: Day,
    /// target hand size after a refill
    pub hand: usize,
    /// cards played per day, shared between climbers
    pub play: usize,
    /// random draws explored per chance node
    pub samples: usize,
    /// acclimatization ceiling
    pub ceiling: Acclimatization,
    /// acclimatization every climber starts with
    pub initial: Acclimatization,
    /// reward multiplier in the composite score
    pub weight: Score,
    /// search levels whose children run as separate tasks
    pub parallel: usize,
    /// base seed for chance-node sampling
    pub seed: u64,
    /// enforce vertex crowding limits
    pub limits: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            days: crate::DAYS,
            hand: crate::HAND_SIZE,
            play: crate::PLAY_SIZE,
            samples: crate::SAMPLES,
            ceiling: crate::MAX_ACC,
            initial: crate::START_ACC,
            weight: crate::SCORE_WEIGHT,
            parallel: crate::PARALLEL_DEPTH,
            seed: crate::SEED,
            limits: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.hand > 0, "hand size must be positive");
        anyhow::ensure!(self.play > 0, "play size must be positive");
        anyhow::ensure!(
            self.play <= self.hand,
            "play size {} exceeds hand size {}",
            self.play,
            self.hand
        );
        anyhow::ensure!(self.samples > 0, "at least one sample per chance node");
        anyhow::ensure!(
            self.ceiling >= crate::MIN_ACC,
            "acclimatization ceiling {} below the floor {}",
            self.ceiling,
            crate::MIN_ACC
        );
        anyhow::ensure!(
            (crate::MIN_ACC..=self.ceiling).contains(&self.initial),
            "initial acclimatization {} outside {}..={}",
            self.initial,
            crate::MIN_ACC,
            self.ceiling
        );
        anyhow::ensure!(self.weight > 0, "score weight must be positive");
        Ok(())
    }
}
