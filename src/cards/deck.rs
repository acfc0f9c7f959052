use super::packed::Packed;
use rand::Rng;

/// Shuffle-and-draw over a card multiset.
impl Packed {
    /// Draws k cards uniformly without replacement, as if the multiset were
    /// shuffled and the top k cards dealt.
    ///
    /// Each draw takes one uniform roll against the cumulative counts of the
    /// cards still remaining, so a seeded rng reproduces the same hand.
    pub fn sample<R>(&self, k: usize, rng: &mut R) -> Packed
    where
        R: Rng + ?Sized,
    {
        let n = self.size();
        assert!(n > 0 && k <= n, "cannot draw {} of {} cards", k, n);
        if k == n {
            return *self;
        }
        let mut drawn = Packed::empty();
        let mut rest = *self;
        for remaining in (n - k + 1..=n).rev() {
            let roll = rng.random_range(1..=remaining);
            let kind = rest
                .iter()
                .scan(0, |sum, (kind, count)| {
                    *sum += count;
                    Some((kind, *sum))
                })
                .find(|(_, sum)| *sum >= roll)
                .map(|(kind, _)| kind)
                .expect("roll within remaining cards");
            drawn = drawn.insert(kind, 1);
            rest = rest.remove(kind, 1);
        }
        drawn
    }
}
