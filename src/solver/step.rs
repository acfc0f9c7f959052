use super::state::State;
use crate::Day;
use crate::cards::Packed;
use petgraph::graph::NodeIndex;

/// One way to spend a day: the cards each climber plays, the walk each one
/// takes, and the state the party lands in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub cards: Vec<Packed>,
    pub vias: Vec<Vec<NodeIndex>>,
    pub next: State,
}

/// A traced decision, one per day of the replayed game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub day: Day,
    /// cards played, per climber
    pub cards: Vec<Packed>,
    /// the same cards by name
    pub played: Vec<String>,
    /// vertices walked through, per climber
    pub vias: Vec<Vec<NodeIndex>>,
    /// the state after the move
    pub state: State,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "day {}", self.day)?;
        for ((climber, played), via) in self
            .state
            .party
            .climbers()
            .iter()
            .zip(self.played.iter())
            .zip(self.vias.iter())
        {
            let via = via
                .iter()
                .map(|v| v.index().to_string())
                .collect::<Vec<_>>()
                .join(">");
            writeln!(f, "  {:<8} {:<28} via {}", played, climber.to_string(), via)?;
        }
        write!(
            f,
            "  hand={} deck={}",
            self.state.hand.size(),
            self.state.deck.size()
        )
    }
}
