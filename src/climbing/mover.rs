use super::climber::Climber;
use super::step::ClimberMove;
use crate::Acclimatization;
use crate::board::Board;
use crate::cards::Catalog;
use crate::cards::Packed;
use crate::paths::PathIndex;
use std::collections::HashSet;

/// Generates every distinct move a climber can make with a set of played
/// cards, by matching each way of allocating the cards against the path
/// frontiers out of the climber's vertex.
#[derive(Debug, Clone, Copy)]
pub struct Mover<'a> {
    board: &'a Board,
    paths: &'a PathIndex,
    catalog: &'a Catalog,
    ceiling: Acclimatization,
}

impl<'a> Mover<'a> {
    pub fn new(
        board: &'a Board,
        paths: &'a PathIndex,
        catalog: &'a Catalog,
        ceiling: Acclimatization,
    ) -> Self {
        Self {
            board,
            paths,
            catalog,
            ceiling,
        }
    }
    /// Candidate moves in allocation order, then destination order, then
    /// frontier order. Duplicates by (destination, tent, reward, acc) keep
    /// the first walk found.
    ///
    /// A climber without a tent may pitch one at its destination when the
    /// ascend budget left after arriving still covers the destination's entry
    /// cost once more.
    pub fn moves(&self, climber: &Climber, cards: Packed) -> Vec<ClimberMove> {
        let mut seen = HashSet::new();
        let mut moves = Vec::new();
        for split in self.catalog.allocations(cards) {
            for (b, costs) in self.paths.reachable(climber.at) {
                let into = self.board.vertex(b);
                let acc = (climber.acc + split.acc + into.acclimatization).min(self.ceiling);
                if acc < 0 {
                    continue;
                }
                for cost in costs.iter().filter(|c| split.covers(c.up, c.down)) {
                    let reward = climber.reward.max(cost.reward);
                    let stay = ClimberMove {
                        at: b,
                        tent: climber.tent,
                        reward,
                        acc,
                        via: cost.via.clone(),
                    };
                    let pitch = match climber.tent.is_none() && cost.up + into.entry <= split.up {
                        true => Some(ClimberMove {
                            tent: Some(b),
                            ..stay.clone()
                        }),
                        false => None,
                    };
                    for candidate in std::iter::once(stay).chain(pitch) {
                        if seen.insert(candidate.key()) {
                            moves.push(candidate);
                        }
                    }
                }
            }
        }
        moves
    }
}
