//! Error types for card parsing.

use thiserror::Error;

/// Errors that can occur when parsing a card from its display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input does not match the `"{Rank} of {Suit}s"` shape.
    #[error("malformed card string")]
    Malformed,
    /// Unknown rank name.
    #[error("unknown rank name")]
    UnknownRank,
    /// Unknown suit name.
    #[error("unknown suit name")]
    UnknownSuit,
}
