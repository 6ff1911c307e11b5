//! Deck construction.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Suit};

/// A deck transformation applied during construction.
///
/// Each transform consumes the current card sequence and returns its
/// replacement, which may differ in length. Transforms are the unit of
/// composition for [`new_deck`]; the factories in [`crate::options`]
/// cover sorting, shuffling, jokers, filtering, and multi-deck
/// combination.
pub type Transform = Box<dyn FnOnce(Vec<Card>) -> Vec<Card>>;

/// The four standard suits, in canonical deck order.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Diamond, Suit::Club, Suit::Heart];

/// Builds a deck of cards.
///
/// The canonical 52-card sequence runs Spade, Diamond, Club, Heart, each
/// suit in ascending rank order. Each transform is then applied in the
/// order given, feeding its output into the next.
///
/// # Example
///
/// ```
/// use deckrs::{Card, DECK_SIZE, Suit, new_deck};
///
/// let cards = new_deck(Vec::new());
/// assert_eq!(cards.len(), DECK_SIZE);
/// assert_eq!(cards[0], Card::new(Suit::Spade, 1));
/// ```
#[must_use]
pub fn new_deck(transforms: Vec<Transform>) -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in SUITS {
        for rank in 1..=13 {
            cards.push(Card::new(suit, rank));
        }
    }

    for transform in transforms {
        cards = transform(cards);
    }

    cards
}
