//! A playing-card deck building library with optional `no_std` support.
//!
//! A deck is built by [`new_deck`], which produces the canonical 52-card
//! sequence and threads it through any number of composable [`Transform`]
//! options: sorting, shuffling, joker insertion, filtering, and
//! multi-deck combination.
//!
//! # Example
//!
//! ```
//! use deckrs::{filter, jokers, new_deck, shuffle_seeded};
//!
//! let cards = new_deck(vec![
//!     filter(|card| card.rank == 2),
//!     jokers(2),
//!     shuffle_seeded(42),
//! ]);
//! assert_eq!(cards.len(), 50);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
mod parse;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit, abs_rank};
pub use deck::{Transform, new_deck};
pub use error::ParseCardError;
#[cfg(feature = "std")]
pub use options::shuffle;
pub use options::{default_sort, filter, jokers, repeat, shuffle_seeded, shuffle_with, sort_by};
