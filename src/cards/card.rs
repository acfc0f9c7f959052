use crate::Acclimatization;
use crate::Cost;

/// A kind of card in the deck.
///
/// Movement cards carry independent ascend and descend magnitudes; when
/// played, the whole card pays for one direction only. Acclimatization cards
/// adjust the climber who plays them.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Card {
    Move(Cost, Cost),
    Acc(Acclimatization),
}

impl Card {
    /// ascend magnitude, zero for acclimatization cards
    pub fn up(&self) -> Cost {
        match self {
            Self::Move(up, _) => *up,
            Self::Acc(_) => 0,
        }
    }
    /// descend magnitude, zero for acclimatization cards
    pub fn down(&self) -> Cost {
        match self {
            Self::Move(_, down) => *down,
            Self::Acc(_) => 0,
        }
    }
    /// acclimatization adjustment, zero for movement cards
    pub fn acc(&self) -> Acclimatization {
        match self {
            Self::Move(..) => 0,
            Self::Acc(acc) => *acc,
        }
    }
    pub fn is_move(&self) -> bool {
        matches!(self, Self::Move(..))
    }
}

/// str isomorphism
/// M2  -> Move(2, 2)
/// M13 -> Move(1, 3)
/// A1  -> Acc(1)
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let digit = |c: char| {
            c.to_digit(10)
                .ok_or_else(|| anyhow::anyhow!("invalid card digit {:?} in {:?}", c, s))
        };
        let mut chars = s.chars();
        match (chars.next(), chars.collect::<Vec<_>>().as_slice()) {
            (Some('M'), [u]) => Ok(Self::Move(digit(*u)?, digit(*u)?)),
            (Some('M'), [u, d]) => Ok(Self::Move(digit(*u)?, digit(*d)?)),
            (Some('A'), ['-', a]) => Ok(Self::Acc(-(digit(*a)? as Acclimatization))),
            (Some('A'), [a]) => Ok(Self::Acc(digit(*a)? as Acclimatization)),
            _ => Err(anyhow::anyhow!("invalid card {:?}", s)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Move(up, down) if up == down => write!(f, "M{}", up),
            Self::Move(up, down) => write!(f, "M{}{}", up, down),
            Self::Acc(acc) => write!(f, "A{}", acc),
        }
    }
}
