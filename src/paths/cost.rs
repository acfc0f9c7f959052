use crate::Cost;
use crate::Score;
use crate::board::Board;
use petgraph::graph::NodeIndex;

/// One Pareto candidate for walking between two vertices.
///
/// `reward` is the best vertex reward touched along the way, `up` and `down`
/// the ascend and descend budgets the walk consumes. `via` lists the vertices
/// left behind in order (origin included, destination excluded) and only
/// serves to explain a move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathCost {
    pub reward: Score,
    pub up: Cost,
    pub down: Cost,
    pub via: Vec<NodeIndex>,
}

impl PathCost {
    /// standing still
    pub fn stay(reward: Score) -> Self {
        Self {
            reward,
            up: 0,
            down: 0,
            via: Vec::new(),
        }
    }
    /// a single move a -> b. the reward is the higher endpoint's and the
    /// entry cost of b is paid from whichever budget the direction needs.
    pub fn step(board: &Board, a: NodeIndex, b: NodeIndex) -> Self {
        let (from, into) = (board.vertex(a), board.vertex(b));
        debug_assert!(from.tier != into.tier);
        match into.tier > from.tier {
            true => Self {
                reward: into.reward,
                up: into.entry,
                down: 0,
                via: vec![a],
            },
            false => Self {
                reward: from.reward,
                up: 0,
                down: into.entry,
                via: vec![a],
            },
        }
    }
    /// no worse in any dimension: cheaper or equal both ways, reward at least as good
    pub fn dominates(&self, other: &Self) -> bool {
        self.up <= other.up && self.down <= other.down && self.reward >= other.reward
    }
}

/// concatenation of two walks sharing an endpoint
impl std::ops::Add for &PathCost {
    type Output = PathCost;
    fn add(self, rhs: Self) -> Self::Output {
        PathCost {
            reward: self.reward.max(rhs.reward),
            up: self.up + rhs.up,
            down: self.down + rhs.down,
            via: self.via.iter().chain(rhs.via.iter()).copied().collect(),
        }
    }
}

impl std::fmt::Display for PathCost {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "(reward={} up={} down={})", self.reward, self.up, self.down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cost(reward: Score, up: Cost, down: Cost) -> PathCost {
        PathCost {
            reward,
            up,
            down,
            via: Vec::new(),
        }
    }

    #[test]
    fn dominance() {
        assert!(cost(5, 1, 1).dominates(&cost(5, 1, 1)));
        assert!(cost(5, 1, 1).dominates(&cost(4, 2, 1)));
        assert!(!cost(5, 1, 1).dominates(&cost(6, 2, 2)));
        assert!(!cost(5, 1, 2).dominates(&cost(5, 2, 1)));
    }

    #[test]
    fn concatenation() {
        let a = PathCost {
            via: vec![NodeIndex::new(0)],
            ..cost(3, 1, 0)
        };
        let b = PathCost {
            via: vec![NodeIndex::new(1)],
            ..cost(2, 0, 2)
        };
        let ab = &a + &b;
        assert_eq!((ab.reward, ab.up, ab.down), (3, 1, 2));
        assert_eq!(ab.via, vec![NodeIndex::new(0), NodeIndex::new(1)]);
    }
}
