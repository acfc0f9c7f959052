use super::catalog::Catalog;
use super::subsets::Subsets;
use crate::Cost;

/// Feasibility frontier of a single turn's card budget.
///
/// Indexed by ascend total, holds the largest descend total that some legal
/// play (a fixed number of cards drawn from the full catalog, each movement
/// card committed to one direction) can pay for alongside at least that much
/// ascent. Moves may overpay, so a path costing (up, down) is affordable in
/// one turn exactly when `down <= bound(up)`. The step function never rises
/// as the ascend total grows.
///
/// Paths outside the frontier can never be walked in one day and are pruned
/// from the path index before they multiply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontier(Vec<Cost>);

impl Frontier {
    pub fn new(catalog: &Catalog, play: usize) -> Self {
        let mut best = Vec::<Option<Cost>>::new();
        for usage in Subsets::from((play.min(catalog.size()), catalog.full())) {
            for split in catalog.allocations(usage) {
                let up = split.up as usize;
                if best.len() <= up {
                    best.resize(up + 1, None);
                }
                best[up] = best[up].max(Some(split.down));
            }
        }
        let mut reach = 0;
        let mut bound = best
            .into_iter()
            .rev()
            .map(|down| {
                reach = reach.max(down.unwrap_or(0));
                reach
            })
            .collect::<Vec<_>>();
        bound.reverse();
        log::debug!("{:<32}{:?}", "feasibility frontier", bound);
        Self(bound)
    }
    /// largest descend total payable together with `up` ascent
    pub fn bound(&self, up: Cost) -> Option<Cost> {
        self.0.get(up as usize).copied()
    }
    /// whether one turn can ever pay for a path costing (up, down).
    /// the zero cost is always admitted: playing no movement card stays put.
    pub fn admits(&self, up: Cost, down: Cost) -> bool {
        (up == 0 && down == 0) || self.bound(up).map_or(false, |max| down <= max)
    }
    /// largest ascend total any play reaches
    pub fn reach(&self) -> Cost {
        self.0.len().saturating_sub(1) as Cost
    }
}
