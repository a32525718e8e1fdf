// Copyright (C) 2025 Deckhand Developers
// SPDX-License-Identifier: Apache-2.0

//! The cards deck.
use log::trace;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, mem};

use crate::{Alphabet, Card, ParseCardError, Rank, Suit};

/// An ordered sequence of zero or more cards.
///
/// A deck does not enforce uniqueness, adding decks or decoding tokens may
/// produce duplicated or missing cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a standard deck.
    pub const SIZE: usize = 52;

    /// Creates a new deck with all cards in ordinal order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty deck.
    pub fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Parses a deck from a string of card symbols.
    ///
    /// All whitespace is removed before parsing and the resulting deck has
    /// one card for each remaining character.
    pub fn from_symbols(s: &str) -> Result<Self, ParseCardError> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
            .map(|(position, symbol)| {
                Card::from_symbol(symbol)
                    .ok_or(ParseCardError::UnknownSymbol { symbol, position })
            })
            .collect()
    }

    /// The deck cards from top to bottom.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates the cards from top to bottom.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffles the deck in place.
    ///
    /// This is the inside-out Durstenfeld shuffle: each card at index `i` is
    /// swapped with a card at a random index in `0..=i`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in 0..self.cards.len() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }

        trace!("Shuffled {} cards", self.cards.len());
    }

    /// Checks if the deck contains a card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Adds a card at the bottom of the deck.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Adds the cards of the given decks at the bottom of this deck.
    pub fn add_decks<'a, I>(&mut self, decks: I)
    where
        I: IntoIterator<Item = &'a Deck>,
    {
        for deck in decks {
            self.cards.extend_from_slice(&deck.cards);
        }
    }

    /// Removes `n` cards from the top of the deck and returns them.
    ///
    /// Panics if `n` is greater than the number of cards in the deck.
    pub fn draw(&mut self, n: usize) -> Deck {
        assert!(n <= self.cards.len(), "cannot draw {n} from {}", self.len());

        let rest = self.cards.split_off(n);
        Deck {
            cards: mem::replace(&mut self.cards, rest),
        }
    }

    /// Removes the top card of the deck, returns `None` if the deck is empty.
    pub fn draw_card(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Deals `rounds` cards to each hand one card at a time.
    ///
    /// Each round gives one card to every hand starting from the first one.
    /// If the deck runs out of cards the hands are partially dealt and this
    /// function returns false.
    #[must_use = "dealing stops early when the deck runs out of cards"]
    pub fn deal(&mut self, rounds: usize, hands: &mut [Deck]) -> bool {
        let mut cards = mem::take(&mut self.cards).into_iter();

        let complete = 'rounds: {
            for _ in 0..rounds {
                for hand in hands.iter_mut() {
                    match cards.next() {
                        Some(card) => hand.add_card(card),
                        None => break 'rounds false,
                    }
                }
            }

            true
        };

        self.cards = cards.collect();
        trace!(
            "Dealt {rounds} rounds to {} hands, {} cards left",
            hands.len(),
            self.cards.len()
        );

        complete
    }

    /// Renders the deck as a string of single character card symbols.
    pub fn symbols(&self, alphabet: Alphabet) -> String {
        self.cards.iter().map(|c| c.symbol(alphabet)).collect()
    }

    /// Renders the deck with the playing cards alphabet.
    pub fn symbol_string(&self) -> String {
        self.symbols(Alphabet::PlayingCards)
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl fmt::Display for Deck {
    /// Formats the cards separated by a space with a newline before every
    /// thirteenth card.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            match idx {
                0 => {}
                _ if idx % 13 == 0 => writeln!(f)?,
                _ => write!(f, " ")?,
            }

            if f.alternate() {
                write!(f, "{card:#}")?;
            } else {
                write!(f, "{card}")?;
            }
        }

        Ok(())
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Deck {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::rngs::StdRng;

    fn ordinals(deck: &Deck) -> Vec<u8> {
        deck.iter().map(Card::ordinal).collect()
    }

    fn deck_of(ordinals: &[u8]) -> Deck {
        ordinals
            .iter()
            .map(|&o| Card::try_from(o).unwrap())
            .collect()
    }

    #[test]
    fn new_deck_is_ordered() {
        let deck = Deck::new();
        assert_eq!(deck.len(), Deck::SIZE);
        assert_eq!(ordinals(&deck), (0..52).collect::<Vec<u8>>());

        let cards = deck.iter().copied().collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);

        // Spades first, diamonds last.
        assert_eq!(deck.cards()[0], Card::new(Rank::Ace, Suit::Spade));
        assert_eq!(deck.cards()[12], Card::new(Rank::King, Suit::Spade));
        assert_eq!(deck.cards()[51], Card::new(Rank::King, Suit::Diamond));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        assert_ne!(deck, Deck::new());
        let mut sorted = ordinals(&deck);
        sorted.sort_unstable();
        assert_eq!(sorted, ordinals(&Deck::new()));

        // Duplicates are preserved as well.
        let mut deck = deck_of(&[3, 3, 3, 9, 9, 40]);
        deck.shuffle(&mut rng);
        let mut sorted = ordinals(&deck);
        sorted.sort_unstable();
        assert_eq!(sorted, vec![3, 3, 3, 9, 9, 40]);
    }

    #[test]
    fn shuffle_is_reproducible() {
        let d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
        let d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
        let d3 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(43));
        assert_eq!(d1, d2);
        assert_ne!(d1, d3);
    }

    #[test]
    fn shuffle_small_decks() {
        let mut rng = StdRng::seed_from_u64(1);

        let mut deck = Deck::empty();
        deck.shuffle(&mut rng);
        assert!(deck.is_empty());

        let mut deck = deck_of(&[17]);
        deck.shuffle(&mut rng);
        assert_eq!(ordinals(&deck), vec![17]);
    }

    #[test]
    fn shuffle_is_uniform() {
        // All 6 orderings of a 3 cards deck should show up with similar
        // frequencies.
        let mut rng = StdRng::seed_from_u64(1234);
        let mut counts = std::collections::BTreeMap::new();
        for _ in 0..6_000 {
            let mut deck = deck_of(&[0, 1, 2]);
            deck.shuffle(&mut rng);
            *counts.entry(ordinals(&deck)).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), 6);
        for count in counts.values() {
            assert!((800..1200).contains(count), "{counts:?}");
        }
    }

    #[test]
    fn contains() {
        let mut deck = Deck::new();
        let hand = deck.draw(12);

        assert!(hand.contains(Card::new(Rank::Queen, Suit::Spade)));
        assert!(!hand.contains(Card::new(Rank::King, Suit::Spade)));
        assert!(!deck.contains(Card::new(Rank::Jack, Suit::Spade)));
        assert!(deck.contains(Card::new(Rank::King, Suit::Spade)));
        assert!(!Deck::empty().contains(Card::new(Rank::Ace, Suit::Spade)));
    }

    #[test]
    fn add_does_not_deduplicate() {
        let mut deck = deck_of(&[1, 2]);
        let other = deck_of(&[2, 3]);

        deck.add_card(Card::new(Rank::Ace, Suit::Spade));
        deck.add_decks([&other, &other]);
        assert_eq!(ordinals(&deck), vec![1, 2, 0, 2, 3, 2, 3]);

        deck.extend(deck_of(&[51]));
        assert_eq!(deck.len(), 8);
        assert_eq!(deck.cards()[7].ordinal(), 51);
    }

    #[test]
    fn draw_splits_deck() {
        let original = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(3));

        for n in [0, 1, 5, 51, 52] {
            let mut deck = original.clone();
            let drawn = deck.draw(n);
            assert_eq!(drawn.len(), n);
            assert_eq!(drawn.len() + deck.len(), original.len());

            // Putting the drawn cards back on top restores the order.
            let mut restored = drawn.clone();
            restored.add_decks([&deck]);
            assert_eq!(restored, original);
        }
    }

    #[test]
    fn drawn_cards_are_independent() {
        let mut deck = Deck::new();
        let mut drawn = deck.draw(2);

        drawn.add_card(Card::new(Rank::King, Suit::Diamond));
        deck.add_card(Card::new(Rank::Ace, Suit::Spade));

        assert_eq!(ordinals(&drawn), vec![0, 1, 51]);
        assert_eq!(deck.len(), 51);
        assert_eq!(deck.cards()[0].ordinal(), 2);
        assert_eq!(deck.cards()[50].ordinal(), 0);
    }

    #[test]
    #[should_panic(expected = "cannot draw 4 from 3")]
    fn draw_too_many() {
        let mut deck = deck_of(&[1, 2, 3]);
        let _ = deck.draw(4);
    }

    #[test]
    fn draw_card() {
        let mut deck = deck_of(&[10, 20]);
        assert_eq!(deck.draw_card(), Some(Card::try_from(10).unwrap()));
        assert_eq!(deck.draw_card(), Some(Card::try_from(20).unwrap()));
        assert_eq!(deck.draw_card(), None);
        assert!(deck.is_empty());
    }

    #[test]
    fn deal_round_robin() {
        let mut deck = Deck::new();
        let mut hands = vec![Deck::empty(), Deck::empty()];

        assert!(deck.deal(7, &mut hands));
        assert_eq!(ordinals(&hands[0]), vec![0, 2, 4, 6, 8, 10, 12]);
        assert_eq!(ordinals(&hands[1]), vec![1, 3, 5, 7, 9, 11, 13]);
        assert_eq!(deck.len(), 52 - 14);
        assert_eq!(deck.cards()[0].ordinal(), 14);
    }

    #[test]
    fn deal_appends_to_hands() {
        let mut deck = deck_of(&[5, 6, 7, 8]);
        let mut hands = vec![deck_of(&[40]), Deck::empty(), deck_of(&[41, 42])];

        assert!(deck.deal(1, &mut hands));
        assert_eq!(ordinals(&hands[0]), vec![40, 5]);
        assert_eq!(ordinals(&hands[1]), vec![6]);
        assert_eq!(ordinals(&hands[2]), vec![41, 42, 7]);
        assert_eq!(ordinals(&deck), vec![8]);
    }

    #[test]
    fn deal_stops_when_exhausted() {
        let mut deck = deck_of(&[0, 1, 2, 3, 4]);
        let mut hands = vec![Deck::empty(), Deck::empty(), Deck::empty()];

        assert!(!deck.deal(2, &mut hands));
        assert_eq!(ordinals(&hands[0]), vec![0, 3]);
        assert_eq!(ordinals(&hands[1]), vec![1, 4]);
        assert_eq!(ordinals(&hands[2]), vec![2]);
        assert!(deck.is_empty());
    }

    #[test]
    fn deal_nothing() {
        let mut deck = deck_of(&[0, 1]);
        assert!(deck.deal(0, &mut [Deck::empty()]));
        assert!(deck.deal(3, &mut []));
        assert_eq!(deck.len(), 2);

        // An empty deck with no rounds to deal is complete.
        assert!(Deck::empty().deal(0, &mut [Deck::empty()]));
        assert!(!Deck::empty().deal(1, &mut [Deck::empty()]));
    }

    #[test]
    fn deck_to_string() {
        let deck = Deck::new();
        let s = deck.to_string();
        let lines = s.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "AS 2S 3S 4S 5S 6S 7S 8S 9S TS JS QS KS");
        assert_eq!(lines[1], "AH 2H 3H 4H 5H 6H 7H 8H 9H TH JH QH KH");
        assert_eq!(lines[2], "AC 2C 3C 4C 5C 6C 7C 8C 9C TC JC QC KC");
        assert_eq!(lines[3], "AD 2D 3D 4D 5D 6D 7D 8D 9D TD JD QD KD");
        assert!(!s.ends_with('\n'));

        assert_eq!(format!("{:#}", deck_of(&[0, 14])), "A♠ 2♡");
        assert_eq!(Deck::empty().to_string(), "");
    }

    #[test]
    fn symbols_round_trip() {
        let deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(11));

        for alphabet in [Alphabet::Letters, Alphabet::PlayingCards] {
            let symbols = deck.symbols(alphabet);
            assert_eq!(symbols.chars().count(), Deck::SIZE);
            assert_eq!(Deck::from_symbols(&symbols).unwrap(), deck);
        }

        assert_eq!(
            Deck::new().symbols(Alphabet::Letters),
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz"
        );
        assert!(Deck::new().symbol_string().starts_with("🂡🂢🂣"));
    }

    #[test]
    fn from_symbols_strips_whitespace() {
        let deck = Deck::from_symbols("  AB C\n🂭\tz ").unwrap();
        assert_eq!(ordinals(&deck), vec![0, 1, 2, 11, 51]);

        // No length check, duplicates are kept.
        let deck = Deck::from_symbols("AAA").unwrap();
        assert_eq!(ordinals(&deck), vec![0, 0, 0]);
        assert!(Deck::from_symbols("").unwrap().is_empty());
    }

    #[test]
    fn from_symbols_unknown() {
        assert_eq!(
            Deck::from_symbols("A B 1"),
            Err(ParseCardError::UnknownSymbol {
                symbol: '1',
                position: 2
            })
        );
    }

    #[test]
    fn deck_serde() {
        let deck = deck_of(&[51, 0, 7]);
        let json = serde_json::to_string(&deck).unwrap();
        assert_eq!(json, r#"{"cards":[51,0,7]}"#);
        assert_eq!(serde_json::from_str::<Deck>(&json).unwrap(), deck);
    }
}
