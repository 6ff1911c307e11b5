//! Deck construction and transform integration tests.

use deckrs::{
    Card, DECK_SIZE, ParseCardError, Suit, abs_rank, default_sort, filter, jokers, new_deck,
    repeat, shuffle, shuffle_seeded, shuffle_with, sort_by,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

#[test]
fn canonical_deck_order() {
    let cards = new_deck(Vec::new());
    assert_eq!(cards.len(), DECK_SIZE);

    let suits = [Suit::Spade, Suit::Diamond, Suit::Club, Suit::Heart];
    for (i, &c) in cards.iter().enumerate() {
        assert_eq!(c.suit, suits[i / 13]);
        assert_eq!(c.rank, (i % 13) as u8 + 1);
    }
}

#[test]
fn display_formatting() {
    assert_eq!(card(Suit::Heart, 1).to_string(), "Ace of Hearts");
    assert_eq!(card(Suit::Spade, 2).to_string(), "Two of Spades");
    assert_eq!(card(Suit::Diamond, 9).to_string(), "Nine of Diamonds");
    assert_eq!(card(Suit::Club, 11).to_string(), "Jack of Clubs");
    assert_eq!(card(Suit::Joker, 7).to_string(), "Joker");
}

#[test]
fn abs_rank_bands_suits() {
    assert!(abs_rank(card(Suit::Spade, 13)) < abs_rank(card(Suit::Diamond, 1)));
    assert!(abs_rank(card(Suit::Club, 13)) < abs_rank(card(Suit::Heart, 1)));
}

#[test]
fn default_sort_orders_by_absolute_rank() {
    let cards = new_deck(vec![shuffle_seeded(3), default_sort()]);

    assert_eq!(cards[0], card(Suit::Spade, 1));
    assert_eq!(cards[DECK_SIZE - 1], card(Suit::Heart, 13));
    assert!(cards.windows(2).all(|w| abs_rank(w[0]) <= abs_rank(w[1])));
}

#[test]
fn sort_by_custom_comparator() {
    // Cards sorted in reverse
    let cards = new_deck(vec![sort_by(|a, b| abs_rank(*b).cmp(&abs_rank(*a)))]);

    assert_eq!(cards[0], card(Suit::Heart, 13));
    assert_eq!(cards[DECK_SIZE - 1], card(Suit::Spade, 1));
}

#[test]
fn shuffle_permutes_without_losing_cards() {
    let unshuffled = new_deck(Vec::new());
    let shuffled = new_deck(vec![shuffle()]);

    assert_ne!(shuffled, unshuffled);

    let mut resorted = shuffled;
    resorted.sort_by_key(|&c| abs_rank(c));
    assert_eq!(resorted, unshuffled);
}

#[test]
fn seeded_shuffle_is_deterministic() {
    let a = new_deck(vec![shuffle_seeded(99)]);
    let b = new_deck(vec![shuffle_seeded(99)]);
    let c = new_deck(vec![shuffle_seeded(100)]);

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn shuffle_with_matches_seeded_shuffle() {
    let a = new_deck(vec![shuffle_with(ChaCha8Rng::seed_from_u64(5))]);
    let b = new_deck(vec![shuffle_seeded(5)]);

    assert_eq!(a, b);
}

#[test]
fn jokers_append_without_disturbing_deck() {
    let plain = new_deck(Vec::new());
    let cards = new_deck(vec![jokers(4)]);

    assert_eq!(cards.len(), DECK_SIZE + 4);
    assert_eq!(&cards[..DECK_SIZE], &plain[..]);
    assert_eq!(cards.iter().filter(|c| c.suit == Suit::Joker).count(), 4);
}

#[test]
fn jokers_zero_is_a_no_op() {
    assert_eq!(new_deck(vec![jokers(0)]), new_deck(Vec::new()));
}

#[test]
fn filter_removes_matching_ranks() {
    let cards = new_deck(vec![filter(|card| card.rank == 2 || card.rank == 4)]);

    assert_eq!(cards.len(), DECK_SIZE - 8);
    assert!(cards.iter().all(|c| c.rank != 2 && c.rank != 4));
}

#[test]
fn repeat_concatenates_copies() {
    let plain = new_deck(Vec::new());
    let cards = new_deck(vec![repeat(3)]);

    assert_eq!(cards.len(), DECK_SIZE * 3);
    for chunk in cards.chunks(DECK_SIZE) {
        assert_eq!(chunk, &plain[..]);
    }
}

#[test]
fn repeat_zero_empties_the_deck() {
    assert!(new_deck(vec![repeat(0)]).is_empty());
}

#[test]
fn transforms_compose_in_order() {
    // Two copies first, then every King dropped from both.
    let cards = new_deck(vec![repeat(2), filter(|card| card.rank == 13)]);
    assert_eq!(cards.len(), (DECK_SIZE - 4) * 2);
}

#[test]
fn parse_card_strings() {
    assert_eq!(
        "Ace of Hearts".parse::<Card>().unwrap(),
        card(Suit::Heart, 1)
    );
    assert_eq!("Ten of Clubs".parse::<Card>().unwrap(), card(Suit::Club, 10));
    assert_eq!("Joker".parse::<Card>().unwrap(), card(Suit::Joker, 0));
    assert_eq!("Spade".parse::<Suit>().unwrap(), Suit::Spade);
}

#[test]
fn parse_rejects_bad_input() {
    assert_eq!(
        "Eleven of Hearts".parse::<Card>().unwrap_err(),
        ParseCardError::UnknownRank
    );
    assert_eq!(
        "Ace of Swords".parse::<Card>().unwrap_err(),
        ParseCardError::UnknownSuit
    );
    assert_eq!(
        "Ace of Jokers".parse::<Card>().unwrap_err(),
        ParseCardError::UnknownSuit
    );
    assert_eq!(
        "Ace Hearts".parse::<Card>().unwrap_err(),
        ParseCardError::Malformed
    );
}
