//! Card types and ordering.

use core::fmt;

/// Card suit.
///
/// Declaration order is the ordering used by [`abs_rank`]:
/// Spade < Diamond < Club < Heart < Joker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spade,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Hearts.
    Heart,
    /// A joker. Cards with this suit ignore their rank.
    Joker,
}

impl Suit {
    const fn name(self) -> &'static str {
        match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Heart => "Heart",
            Self::Joker => "Joker",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// English rank names, indexed by rank minus one.
pub(crate) const RANK_NAMES: [&str; 13] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack",
    "Queen", "King",
];

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    ///
    /// Joker cards carry their insertion index here; it keeps the instances
    /// distinct and has no other meaning.
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but render numerically and sort past the named ranks of
    /// the same suit.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    /// Formats as `"{Rank} of {Suit}s"`, or the bare word `"Joker"` for
    /// joker-suited cards.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.suit == Suit::Joker {
            return f.write_str("Joker");
        }
        match RANK_NAMES.get((self.rank as usize).wrapping_sub(1)) {
            Some(name) => write!(f, "{name} of {}s", self.suit),
            None => write!(f, "{} of {}s", self.rank, self.suit),
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Returns a card's absolute rank, the key used by default sorting.
///
/// Standard ranks occupy a disjoint band of 13 per suit, so no Spade card
/// ever outranks a Diamond card.
#[must_use]
pub const fn abs_rank(card: Card) -> u16 {
    card.suit as u16 * 13 + card.rank as u16
}
