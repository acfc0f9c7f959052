use super::packed::Packed;

/// Combinatorial iterator over every distinct k-card sub-multiset of a
/// [`Packed`] origin.
///
/// Iteration order is fixed: per-kind counts descend lexicographically, i.e.
/// the first subset takes as many cards as possible from the lowest kinds, and
/// each step moves one card from the rightmost kind that can spare it towards
/// the higher kinds. Decision replays rely on this order being reproducible.
///
/// # Performance
///
/// - Memory: O(kinds): the counter array is the whole backtracking stack
/// - Time per `.next()`: O(kinds), no recursion and no allocation
pub struct Subsets {
    avail: [u8; Packed::FIELDS],
    picks: [u8; Packed::FIELDS],
    done: bool,
}

impl Subsets {
    /// Number of size-k sub-multisets, the coefficient of x^k in
    /// the product over kinds of (1 + x + ... + x^count).
    pub fn combinations(k: usize, origin: Packed) -> usize {
        origin
            .iter()
            .fold(vec![1usize], |poly, (_, n)| {
                (0..poly.len() + n)
                    .map(|i| (i.saturating_sub(n)..=i).filter_map(|j| poly.get(j)).sum::<usize>())
                    .collect()
            })
            .get(k)
            .copied()
            .unwrap_or(0)
    }
    fn look(&self) -> Packed {
        self.picks
            .iter()
            .enumerate()
            .fold(Packed::empty(), |packed, (kind, &n)| packed.insert(kind, n as usize))
    }
    /// Greedily place n cards into kinds from..FIELDS, lowest kind first.
    /// False if they do not fit.
    fn fill(&mut self, from: usize, mut n: usize) -> bool {
        for kind in from..Packed::FIELDS {
            let take = n.min(self.avail[kind] as usize);
            self.picks[kind] = take as u8;
            n -= take;
        }
        n == 0
    }
    /// Step to the lexicographically next smaller pick vector.
    fn advance(&mut self) {
        let mut spare = 0usize;
        let mut carry = 0usize;
        for kind in (0..Packed::FIELDS).rev() {
            if self.picks[kind] > 0 && spare > carry {
                self.picks[kind] -= 1;
                self.fill(kind + 1, carry + 1);
                return;
            }
            spare += self.avail[kind] as usize;
            carry += self.picks[kind] as usize;
        }
        self.done = true;
    }
}

impl Iterator for Subsets {
    type Item = Packed;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            None
        } else {
            let last = self.look();
            self.advance();
            Some(last)
        }
    }
}

/// size and origin are immutable and must be decided at construction
impl From<(usize, Packed)> for Subsets {
    fn from((k, origin): (usize, Packed)) -> Self {
        let mut avail = [0u8; Packed::FIELDS];
        for (kind, n) in origin.iter() {
            avail[kind] = n as u8;
        }
        let mut this = Self {
            avail,
            picks: [0u8; Packed::FIELDS],
            done: false,
        };
        this.done = !this.fill(0, k);
        this
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn deck() -> Packed {
        Packed::from([5, 3, 2, 1, 1, 1, 1, 2, 1, 1].as_slice())
    }

    #[test]
    fn choose_0() {
        let mut iter = Subsets::from((0, deck()));
        assert_eq!(iter.next(), Some(Packed::empty()));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn choose_too_many() {
        let origin = Packed::from([2, 1].as_slice());
        assert_eq!(Subsets::from((4, origin)).count(), 0);
        assert_eq!(Subsets::from((1, Packed::empty())).count(), 0);
    }

    #[test]
    fn choose_all() {
        let mut iter = Subsets::from((deck().size(), deck()));
        assert_eq!(iter.next(), Some(deck()));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn descending_order() {
        let origin = Packed::from([2, 1, 1].as_slice());
        let mut iter = Subsets::from((2, origin));
        assert_eq!(iter.next(), Some(Packed::from([2, 0, 0].as_slice())));
        assert_eq!(iter.next(), Some(Packed::from([1, 1, 0].as_slice())));
        assert_eq!(iter.next(), Some(Packed::from([1, 0, 1].as_slice())));
        assert_eq!(iter.next(), Some(Packed::from([0, 1, 1].as_slice())));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn skips_empty_kinds() {
        let origin = Packed::from([1, 0, 0, 2].as_slice());
        let picks = Subsets::from((2, origin)).collect::<Vec<_>>();
        assert_eq!(
            picks,
            vec![
                Packed::from([1, 0, 0, 1].as_slice()),
                Packed::from([0, 0, 0, 2].as_slice()),
            ]
        );
    }

    #[test]
    fn distinct_bounded_and_complete() {
        for k in 0..=8 {
            let picks = Subsets::from((k, deck())).collect::<Vec<_>>();
            let unique = picks.iter().copied().collect::<HashSet<_>>();
            assert_eq!(picks.len(), unique.len());
            assert_eq!(picks.len(), Subsets::combinations(k, deck()));
            assert!(picks.iter().all(|p| p.size() == k));
            assert!(picks.iter().all(|p| deck().contains(p)));
        }
    }

    #[test]
    fn closed_form_counts() {
        assert_eq!(Subsets::combinations(0, deck()), 1);
        assert_eq!(Subsets::combinations(1, deck()), 10);
        assert_eq!(Subsets::combinations(2, Packed::from([2, 1, 1].as_slice())), 4);
        assert_eq!(Subsets::combinations(3, Packed::from([1, 1, 1, 1].as_slice())), 4);
        assert_eq!(Subsets::combinations(9, Packed::from([2, 1].as_slice())), 0);
    }
}
