//! Decks of playing cards.

use crate::card::{Card, Rank, Suit};
use rand::Rng;
use std::collections::VecDeque;

/// An ordered stack of cards, drawn from the top.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a deck combining the given number of standard 52-card decks,
    /// each in fresh-deck order: hearts and clubs ace to king, followed by
    /// diamonds and spades king to ace.
    pub fn new(decks: usize) -> Self {
        let mut cards = VecDeque::with_capacity(decks * Suit::ALL.len() * Rank::ALL.len());
        for _ in 0..decks {
            for suit in Suit::ALL {
                let suit_cards = Rank::ALL.map(|rank| Card::new(suit, rank));
                if matches!(suit, Suit::Diamonds | Suit::Spades) {
                    cards.extend(suit_cards.into_iter().rev());
                } else {
                    cards.extend(suit_cards);
                }
            }
        }
        Self { cards }
    }

    /// Shuffles the deck in place with the Fisher-Yates algorithm.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let cards = self.cards.make_contiguous();
        for index in (1..cards.len()).rev() {
            let other = rng.random_range(0..=index);
            cards.swap(index, other);
        }
    }

    /// Removes and returns the top card, or [`None`] if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// The number of cards left.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the remaining cards from the top.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;
    use std::collections::HashMap;

    #[test]
    fn creating_single_deck_gives_52_distinct_cards() {
        let deck = Deck::new(1);
        assert_eq!(deck.len(), 52);

        let mut counts = HashMap::new();
        for card in deck.iter() {
            *counts.entry(*card).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 52);
    }

    #[test]
    fn creating_deck_uses_fresh_deck_order() {
        let deck = Deck::new(1);
        let cards: Vec<_> = deck.iter().copied().collect();
        assert_eq!(cards[0], Card::new(Suit::Hearts, Rank::Ace));
        assert_eq!(cards[12], Card::new(Suit::Hearts, Rank::King));
        assert_eq!(cards[13], Card::new(Suit::Clubs, Rank::Ace));
        assert_eq!(cards[26], Card::new(Suit::Diamonds, Rank::King));
        assert_eq!(cards[38], Card::new(Suit::Diamonds, Rank::Ace));
        assert_eq!(cards[39], Card::new(Suit::Spades, Rank::King));
        assert_eq!(cards[51], Card::new(Suit::Spades, Rank::Ace));
    }

    #[test]
    fn creating_combined_deck_repeats_each_card() {
        let deck = Deck::new(3);
        assert_eq!(deck.len(), 156);
        let aces_of_spades = deck
            .iter()
            .filter(|card| **card == Card::new(Suit::Spades, Rank::Ace))
            .count();
        assert_eq!(aces_of_spades, 3);
        assert!(Deck::new(0).is_empty());
    }

    #[test]
    fn drawing_takes_cards_from_the_top_until_empty() {
        let mut deck = Deck::new(1);
        assert_eq!(deck.draw(), Some(Card::new(Suit::Hearts, Rank::Ace)));
        assert_eq!(deck.draw(), Some(Card::new(Suit::Hearts, Rank::Two)));
        assert_eq!(deck.len(), 50);

        let mut drawn = 2;
        while deck.draw().is_some() {
            drawn += 1;
        }
        assert_eq!(drawn, 52);
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn shuffling_permutes_cards() {
        let mut deck = Deck::new(1);
        deck.shuffle(&mut Pcg64Mcg::seed_from_u64(7));

        assert_eq!(deck.len(), 52);
        assert_ne!(deck, Deck::new(1));

        let mut shuffled: Vec<_> = deck.iter().map(ToString::to_string).collect();
        let mut fresh: Vec<_> = Deck::new(1).iter().map(ToString::to_string).collect();
        shuffled.sort();
        fresh.sort();
        assert_eq!(shuffled, fresh);
    }

    #[test]
    fn shuffling_with_same_seed_is_reproducible() {
        let mut first = Deck::new(2);
        let mut second = Deck::new(2);
        first.shuffle(&mut Pcg64Mcg::seed_from_u64(42));
        second.shuffle(&mut Pcg64Mcg::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn shuffling_empty_deck_does_nothing() {
        let mut deck = Deck::new(0);
        deck.shuffle(&mut Pcg64Mcg::seed_from_u64(1));
        assert!(deck.is_empty());
    }

    proptest! {
        #[test]
        fn shuffling_preserves_card_counts(seed in any::<u64>(), decks in 0..4_usize) {
            let mut deck = Deck::new(decks);
            deck.shuffle(&mut Pcg64Mcg::seed_from_u64(seed));

            prop_assert_eq!(deck.len(), 52 * decks);
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    let card = Card::new(suit, rank);
                    prop_assert_eq!(deck.iter().filter(|c| **c == card).count(), decks);
                }
            }
        }
    }
}
