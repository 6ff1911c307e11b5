//! Deal a five-card hand from a freshly shuffled deck.

use deckrs::{jokers, new_deck, shuffle};

fn main() {
    let cards = new_deck(vec![jokers(2), shuffle()]);

    println!("Your hand:");
    for card in cards.iter().take(5) {
        println!("  {card}");
    }
    println!("({} cards remain in the deck)", cards.len() - 5);
}
