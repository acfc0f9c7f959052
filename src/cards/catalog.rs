use super::allocation::Allocation;
use super::card::Card;
use super::packed::Packed;
use crate::Acclimatization;
use anyhow::Context;
use std::collections::HashSet;

/// The fixed set of card kinds in play and how many copies of each the deck
/// holds. Kind indices into every [`Packed`] multiset are positions in this
/// list, so a catalog is built once and shared read-only by every component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    cards: Vec<(Card, usize)>,
}

impl Catalog {
    pub fn new(cards: Vec<(Card, usize)>) -> anyhow::Result<Self> {
        anyhow::ensure!(!cards.is_empty(), "catalog has no cards");
        anyhow::ensure!(
            cards.len() <= Packed::FIELDS,
            "catalog has {} kinds, at most {} fit a packed multiset",
            cards.len(),
            Packed::FIELDS
        );
        if let Some((card, n)) = cards
            .iter()
            .find(|(_, n)| *n == 0 || *n > Packed::DEPTH)
        {
            anyhow::bail!("{} has {} copies, expected 1..={}", card, n, Packed::DEPTH);
        }
        let mut seen = HashSet::new();
        if let Some((card, _)) = cards.iter().find(|(card, _)| !seen.insert(*card)) {
            anyhow::bail!("{} listed twice", card);
        }
        Ok(Self { cards })
    }
    /// number of distinct kinds
    pub fn kinds(&self) -> usize {
        self.cards.len()
    }
    /// number of physical cards
    pub fn size(&self) -> usize {
        self.cards.iter().map(|(_, n)| n).sum()
    }
    pub fn card(&self, kind: usize) -> Card {
        self.cards[kind].0
    }
    pub fn kind(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|(c, _)| c == card)
    }
    /// the whole deck as a multiset
    pub fn full(&self) -> Packed {
        self.cards
            .iter()
            .enumerate()
            .fold(Packed::empty(), |deck, (kind, (_, n))| deck.insert(kind, *n))
    }
    /// Concatenated card names, lowest kind first. `-` when empty.
    pub fn render(&self, cards: Packed) -> String {
        match cards.is_empty() {
            true => String::from("-"),
            false => cards
                .iter()
                .flat_map(|(kind, n)| std::iter::repeat_n(self.card(kind), n))
                .map(|card| card.to_string())
                .collect(),
        }
    }
    /// Every distinct way to commit the movement cards of a played multiset to
    /// ascending or descending. A card pays for one direction with its full
    /// magnitude and is never split. Acclimatization cards add up regardless.
    ///
    /// Within a kind, splits that send more copies up come first.
    pub fn allocations(&self, cards: Packed) -> Vec<Allocation> {
        let acc = cards
            .iter()
            .map(|(kind, n)| self.card(kind).acc() * n as Acclimatization)
            .sum::<Acclimatization>();
        cards
            .iter()
            .map(|(kind, n)| (self.card(kind), n as u32))
            .filter(|(card, _)| card.is_move())
            .fold(vec![(0, 0)], |splits, (card, n)| {
                let mut seen = HashSet::new();
                splits
                    .into_iter()
                    .flat_map(|(up, down)| {
                        (0..=n)
                            .rev()
                            .map(move |k| (up + k * card.up(), down + (n - k) * card.down()))
                    })
                    .filter(|split| seen.insert(*split))
                    .collect()
            })
            .into_iter()
            .map(|(up, down)| Allocation { up, down, acc })
            .collect()
    }
}

/// The standard 18-card deck.
impl Default for Catalog {
    fn default() -> Self {
        Self {
            cards: vec![
                (Card::Move(1, 1), 5),
                (Card::Move(2, 2), 3),
                (Card::Move(3, 3), 2),
                (Card::Move(1, 3), 1),
                (Card::Move(1, 2), 1),
                (Card::Move(2, 3), 1),
                (Card::Acc(0), 1),
                (Card::Acc(1), 2),
                (Card::Acc(2), 1),
                (Card::Acc(3), 1),
            ],
        }
    }
}

/// str isomorphism
/// "M1*5 M2*3 A1" -> five M1, three M2, one A1
impl TryFrom<&str> for Catalog {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| -> anyhow::Result<(Card, usize)> {
                match token.split_once('*') {
                    None => Ok((Card::try_from(token)?, 1)),
                    Some((card, n)) => Ok((
                        Card::try_from(card)?,
                        n.parse::<usize>()
                            .with_context(|| format!("invalid count in {:?}", token))?,
                    )),
                }
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .and_then(Self::new)
    }
}

impl std::fmt::Display for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self
            .cards
            .iter()
            .map(|(card, n)| format!("{}*{}", card, n))
            .collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}
