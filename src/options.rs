//! Composable deck transform options.
//!
//! Every factory here returns a [`Transform`] to pass to
//! [`new_deck`](crate::new_deck):
//!
//! ```
//! use deckrs::{jokers, new_deck, shuffle_seeded};
//!
//! let cards = new_deck(vec![jokers(2), shuffle_seeded(42)]);
//! assert_eq!(cards.len(), 54);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::time::{SystemTime, UNIX_EPOCH};

use crate::card::{Card, Suit, abs_rank};
use crate::deck::Transform;

/// Sorts cards ascending by [`abs_rank`].
///
/// The sort is stable, so duplicate cards introduced by [`repeat`] keep
/// their relative order.
///
/// # Example
///
/// ```
/// use deckrs::{Card, Suit, default_sort, new_deck, shuffle_seeded};
///
/// let cards = new_deck(vec![shuffle_seeded(7), default_sort()]);
/// assert_eq!(cards[0], Card::new(Suit::Spade, 1));
/// ```
#[must_use]
pub fn default_sort() -> Transform {
    Box::new(|mut cards: Vec<Card>| {
        cards.sort_by_key(|&card| abs_rank(card));
        cards
    })
}

/// Sorts cards with a caller-supplied comparator.
///
/// Any strict weak ordering works; an inconsistent comparator leaves the
/// order unspecified but never panics or drops cards.
///
/// # Example
///
/// Sorting in reverse order:
///
/// ```
/// use deckrs::{Card, Suit, abs_rank, new_deck, sort_by};
///
/// let cards = new_deck(vec![sort_by(|a, b| abs_rank(*b).cmp(&abs_rank(*a)))]);
/// assert_eq!(cards[0], Card::new(Suit::Heart, 13));
/// ```
#[must_use]
pub fn sort_by<F>(cmp: F) -> Transform
where
    F: FnMut(&Card, &Card) -> Ordering + 'static,
{
    Box::new(move |mut cards: Vec<Card>| {
        cards.sort_by(cmp);
        cards
    })
}

/// Shuffles cards into a uniformly random order.
///
/// Each invocation seeds its own generator from the system clock, so no
/// generator state is shared across calls. For a reproducible order use
/// [`shuffle_seeded`] or [`shuffle_with`].
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[must_use]
pub fn shuffle() -> Transform {
    Box::new(|mut cards: Vec<Card>| {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        cards.shuffle(&mut rng);
        cards
    })
}

/// Shuffles cards with a generator seeded from `seed`.
///
/// The same seed over the same input always produces the same order.
///
/// # Example
///
/// ```
/// use deckrs::{new_deck, shuffle_seeded};
///
/// let a = new_deck(vec![shuffle_seeded(7)]);
/// let b = new_deck(vec![shuffle_seeded(7)]);
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn shuffle_seeded(seed: u64) -> Transform {
    Box::new(move |mut cards: Vec<Card>| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        cards.shuffle(&mut rng);
        cards
    })
}

/// Shuffles cards with a caller-supplied generator.
///
/// # Example
///
/// ```
/// use deckrs::{new_deck, shuffle_with};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let rng = ChaCha8Rng::seed_from_u64(7);
/// let cards = new_deck(vec![shuffle_with(rng)]);
/// assert_eq!(cards.len(), 52);
/// ```
#[must_use]
pub fn shuffle_with<R>(mut rng: R) -> Transform
where
    R: Rng + 'static,
{
    Box::new(move |mut cards: Vec<Card>| {
        cards.shuffle(&mut rng);
        cards
    })
}

/// Appends `n` jokers to the deck.
///
/// Each joker's rank is its insertion index, which only keeps the
/// instances distinct; consumers must not read meaning into it.
///
/// # Example
///
/// ```
/// use deckrs::{Suit, jokers, new_deck};
///
/// let cards = new_deck(vec![jokers(4)]);
/// assert_eq!(cards.iter().filter(|c| c.suit == Suit::Joker).count(), 4);
/// ```
#[must_use]
pub fn jokers(n: usize) -> Transform {
    Box::new(move |mut cards: Vec<Card>| {
        cards.reserve(n);
        for i in 0..n {
            cards.push(Card::new(Suit::Joker, i as u8));
        }
        cards
    })
}

/// Removes every card for which `pred` returns `true`.
///
/// The predicate picks cards to drop, not to keep. Remaining cards stay
/// in their relative order.
///
/// # Example
///
/// ```
/// use deckrs::{filter, new_deck};
///
/// let cards = new_deck(vec![filter(|card| card.rank == 2 || card.rank == 4)]);
/// assert_eq!(cards.len(), 44);
/// ```
#[must_use]
pub fn filter<F>(mut pred: F) -> Transform
where
    F: FnMut(&Card) -> bool + 'static,
{
    Box::new(move |mut cards: Vec<Card>| {
        cards.retain(|card| !pred(card));
        cards
    })
}

/// Replaces the deck with `n` concatenated copies of itself.
///
/// `repeat(0)` empties the deck; `repeat(1)` leaves it unchanged.
///
/// # Example
///
/// ```
/// use deckrs::{new_deck, repeat};
///
/// let cards = new_deck(vec![repeat(3)]);
/// assert_eq!(cards.len(), 156);
/// ```
#[must_use]
pub fn repeat(n: usize) -> Transform {
    Box::new(move |cards: Vec<Card>| {
        let mut combined = Vec::with_capacity(cards.len() * n);
        for _ in 0..n {
            combined.extend_from_slice(&cards);
        }
        combined
    })
}
