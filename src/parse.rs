//! Parsing of the display format back into cards.

use core::str::FromStr;

use crate::card::{Card, RANK_NAMES, Suit};
use crate::error::ParseCardError;

fn rank_from_name(name: &str) -> Result<u8, ParseCardError> {
    RANK_NAMES
        .iter()
        .position(|&n| n == name)
        .map(|i| i as u8 + 1)
        .ok_or(ParseCardError::UnknownRank)
}

impl FromStr for Suit {
    type Err = ParseCardError;

    /// Parses a singular suit name, e.g. `"Heart"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Spade" => Ok(Self::Spade),
            "Diamond" => Ok(Self::Diamond),
            "Club" => Ok(Self::Club),
            "Heart" => Ok(Self::Heart),
            "Joker" => Ok(Self::Joker),
            _ => Err(ParseCardError::UnknownSuit),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the exact format produced by the card's `Display` impl:
    /// `"{Rank} of {Suit}s"`, or the bare word `"Joker"`.
    ///
    /// A parsed joker always has rank 0, so the joker insertion index does
    /// not survive a round trip.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "Joker" {
            return Ok(Self::new(Suit::Joker, 0));
        }

        let (rank_name, rest) = s.split_once(" of ").ok_or(ParseCardError::Malformed)?;
        let suit_name = rest.strip_suffix('s').ok_or(ParseCardError::Malformed)?;

        let rank = rank_from_name(rank_name)?;
        let suit: Suit = suit_name.parse()?;
        if suit == Suit::Joker {
            // The display side never produces "{Rank} of Jokers".
            return Err(ParseCardError::UnknownSuit);
        }

        Ok(Self::new(suit, rank))
    }
}
