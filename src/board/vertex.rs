use crate::Acclimatization;
use crate::Cost;
use crate::Score;
use serde::Deserialize;
use serde::Serialize;

/// A space on the board.
///
/// Fixed at load time. `tier` orders spaces by altitude (higher is further up
/// the mountain) and every move crosses from one tier to another. `reward` is
/// the score a climber banks once it has stood there, `entry` the card cost
/// of stepping in. `limit` caps how many climbers may stand at this tier or
/// above at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex {
    pub reward: Score,
    pub entry: Cost,
    pub tier: u8,
    #[serde(default)]
    pub acclimatization: Acclimatization,
    #[serde(default = "Vertex::unlimited")]
    pub limit: u8,
    #[serde(default)]
    pub start: bool,
}

impl Vertex {
    fn unlimited() -> u8 {
        u8::MAX
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{:+}{}]{}",
            self.acclimatization,
            self.entry,
            if self.start { "*" } else { "" }
        )
    }
}
