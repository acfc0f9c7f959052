use crate::Score;
use crate::cards::Packed;
use crate::climbing::Climber;
use petgraph::graph::NodeIndex;
use std::hash::Hash;
use std::hash::Hasher;

/// The climbers on the mountain. The two-climber party is an unordered pair:
/// swapping the climbers yields an equal value with an equal hash, so mirrored
/// positions share one memo entry.
#[derive(Debug, Clone, Copy)]
pub enum Party {
    Solo(Climber),
    Pair([Climber; 2]),
}

impl Party {
    pub fn climbers(&self) -> &[Climber] {
        match self {
            Self::Solo(climber) => std::slice::from_ref(climber),
            Self::Pair(pair) => pair.as_slice(),
        }
    }
    /// pitched tents, in climber order
    pub fn tents(&self) -> Vec<NodeIndex> {
        self.climbers().iter().filter_map(|c| c.tent).collect()
    }
    /// where everyone stands, in climber order
    pub fn spots(&self) -> Vec<NodeIndex> {
        self.climbers().iter().map(|c| c.at).collect()
    }
    pub fn score(&self, weight: Score) -> Score {
        self.climbers().iter().map(|c| c.score(weight)).sum()
    }
    fn sorted(&self) -> (Climber, Option<Climber>) {
        match *self {
            Self::Solo(a) => (a, None),
            Self::Pair([a, b]) => (a.min(b), Some(a.max(b))),
        }
    }
}

impl From<Vec<Climber>> for Party {
    fn from(climbers: Vec<Climber>) -> Self {
        match climbers.as_slice() {
            [a] => Self::Solo(*a),
            [a, b] => Self::Pair([*a, *b]),
            _ => panic!("parties have one or two climbers, not {}", climbers.len()),
        }
    }
}

impl PartialEq for Party {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

impl Eq for Party {}

impl Hash for Party {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted().hash(state);
    }
}

/// Everything that decides the rest of the game: climbers, the hand, and the
/// undealt deck. Played cards are gone for good until the deck reshuffles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    pub party: Party,
    pub hand: Packed,
    pub deck: Packed,
}

impl State {
    /// empty hand and empty deck, so the first refill deals from a full shuffle
    pub fn new(party: Party) -> Self {
        Self {
            party,
            hand: Packed::empty(),
            deck: Packed::empty(),
        }
    }
    /// each climber's best reward times the weight, plus its acclimatization
    pub fn score(&self, weight: Score) -> Score {
        self.party.score(weight)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let climbers = self
            .party
            .climbers()
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>();
        write!(
            f,
            "{} hand={} deck={}",
            climbers.join(" "),
            self.hand.size(),
            self.deck.size()
        )
    }
}
