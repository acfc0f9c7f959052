/// Packed represents a multiset of card kinds. Each kind owns a 3-bit field
/// of a single u64, so a multiset holds at most 7 copies of each of 21 kinds.
/// Copy, hash, and compare are all single-word operations, which matters when
/// millions of game states are keyed by their hand and deck.
///
/// Every field stays within 0..=7. Arithmetic that would leave that range is a
/// logic error and panics rather than silently corrupting a neighbour field.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Packed(u64);

impl Packed {
    /// number of kind fields
    pub const FIELDS: usize = 21;
    /// copies of one kind a field can hold
    pub const DEPTH: usize = 7;
    const WIDTH: usize = 3;

    pub const fn empty() -> Self {
        Self(0)
    }
    /// a single card of the given kind
    pub fn unit(kind: usize) -> Self {
        assert!(kind < Self::FIELDS, "card kind {} out of range", kind);
        Self(1 << (Self::WIDTH * kind))
    }
    pub fn count(&self, kind: usize) -> usize {
        ((self.0 >> (Self::WIDTH * kind)) & 0b111) as usize
    }
    pub fn size(&self) -> usize {
        (0..Self::FIELDS).map(|kind| self.count(kind)).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    /// field-wise subset test
    pub fn contains(&self, other: &Self) -> bool {
        (0..Self::FIELDS).all(|kind| self.count(kind) >= other.count(kind))
    }
    pub fn insert(self, kind: usize, n: usize) -> Self {
        assert!(
            self.count(kind) + n <= Self::DEPTH,
            "card kind {} overflows its field",
            kind
        );
        Self(self.0 + (n as u64) * Self::unit(kind).0)
    }
    pub fn remove(self, kind: usize, n: usize) -> Self {
        assert!(
            self.count(kind) >= n,
            "card kind {} underflows its field",
            kind
        );
        Self(self.0 - (n as u64) * Self::unit(kind).0)
    }
    /// (kind, count) for every kind present, ascending by kind
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..Self::FIELDS)
            .map(|kind| (kind, self.count(kind)))
            .filter(|(_, n)| *n > 0)
    }
}

/// field-wise multiset union
impl std::ops::Add for Packed {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        rhs.iter().fold(self, |sum, (kind, n)| sum.insert(kind, n))
    }
}

/// field-wise multiset difference. rhs must be a sub-multiset of self,
/// in which case no field borrows from its neighbour.
impl std::ops::Sub for Packed {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        assert!(self.contains(&rhs), "card multiset underflow");
        Self(self.0 - rhs.0)
    }
}

/// per-kind counts isomorphism
/// [2, 0, 1] -> kind 0 twice, kind 2 once
/// xxx ... 001 000 010
impl From<&[usize]> for Packed {
    fn from(counts: &[usize]) -> Self {
        assert!(counts.len() <= Self::FIELDS, "too many card kinds");
        counts
            .iter()
            .enumerate()
            .fold(Self::empty(), |packed, (kind, &n)| packed.insert(kind, n))
    }
}
impl From<Packed> for Vec<usize> {
    fn from(packed: Packed) -> Self {
        (0..Packed::FIELDS).map(|kind| packed.count(kind)).collect()
    }
}

/// u64 isomorphism
impl From<u64> for Packed {
    fn from(n: u64) -> Self {
        Self(n & ((1 << (Self::WIDTH * Self::FIELDS)) - 1))
    }
}
impl From<Packed> for u64 {
    fn from(packed: Packed) -> Self {
        packed.0
    }
}
