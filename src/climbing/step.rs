use crate::Acclimatization;
use crate::Score;
use petgraph::graph::NodeIndex;

/// One candidate outcome of a climber's day, before tent bonuses and the
/// acclimatization floor are applied.
///
/// `tent` is the climber's tent after the move: unchanged if one was already
/// pitched, otherwise possibly pitched at the destination. `acc` is already
/// clamped at the ceiling. `via` explains the walk and does not take part in
/// deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClimberMove {
    pub at: NodeIndex,
    pub tent: Option<NodeIndex>,
    pub reward: Score,
    pub acc: Acclimatization,
    pub via: Vec<NodeIndex>,
}

impl ClimberMove {
    pub fn key(&self) -> (NodeIndex, Option<NodeIndex>, Score, Acclimatization) {
        (self.at, self.tent, self.reward, self.acc)
    }
}
