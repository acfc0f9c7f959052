use crate::Acclimatization;
use crate::Cost;

/// One way to spend a played card multiset: the ascend budget and descend
/// budget its movement cards pay for, plus the acclimatization its
/// acclimatization cards grant.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Allocation {
    pub up: Cost,
    pub down: Cost,
    pub acc: Acclimatization,
}

impl Allocation {
    /// whether this budget pays for a path costing (up, down)
    pub fn covers(&self, up: Cost, down: Cost) -> bool {
        up <= self.up && down <= self.down
    }
}
