use super::step::ClimberMove;
use crate::Acclimatization;
use crate::MIN_ACC;
use crate::Score;
use crate::TENT_BONUS;
use petgraph::graph::NodeIndex;

/// A climber between days: where it stands, where its tent is pitched (at most
/// one per game, never moved), the best reward it has reached, and its current
/// acclimatization.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Climber {
    pub at: NodeIndex,
    pub tent: Option<NodeIndex>,
    pub reward: Score,
    pub acc: Acclimatization,
}

impl Climber {
    pub fn new(at: NodeIndex, reward: Score, acc: Acclimatization) -> Self {
        Self {
            at,
            tent: None,
            reward,
            acc,
        }
    }
    /// Lands a move. Ending on any pitched tent grants the tent bonus; the
    /// climber must keep at least the minimum acclimatization, and never
    /// exceeds the ceiling.
    pub fn land(&self, step: &ClimberMove, tents: &[NodeIndex], ceiling: Acclimatization) -> Option<Self> {
        let bonus = match tents.contains(&step.at) {
            true => TENT_BONUS,
            false => 0,
        };
        let acc = step.acc + bonus;
        (acc >= MIN_ACC).then(|| Self {
            at: step.at,
            tent: step.tent,
            reward: self.reward.max(step.reward),
            acc: acc.min(ceiling),
        })
    }
    /// reward weighted over acclimatization
    pub fn score(&self, weight: Score) -> Score {
        self.reward * weight + self.acc
    }
}

impl std::fmt::Display for Climber {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "@{}", self.at.index())?;
        if let Some(tent) = self.tent {
            write!(f, "({})", tent.index())?;
        }
        write!(f, ": score={}, acc={}", self.reward, self.acc)
    }
}
