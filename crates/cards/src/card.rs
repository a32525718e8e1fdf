// Copyright (C) 2025 Deckhand Developers
// SPDX-License-Identifier: Apache-2.0

//! Playing cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{
    alphabet::{self, Alphabet},
    error::ParseCardError,
};

/// A playing card.
///
/// A card is a single ordinal in `0..52` that combines the rank and suit:
///
/// ```text
///   ordinal = 13 * suit + (rank - 1)
///   rank    = ordinal % 13 + 1
///   suit    = ordinal / 13
/// ```
///
/// so that the 13 spades come first, followed by hearts, clubs and diamonds.
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(13 * suit as u8 + (rank as u8 - 1))
    }

    /// This card ordinal in `0..52`.
    pub const fn ordinal(&self) -> u8 {
        self.0
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::from_index(self.0 % 13)
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        Suit::from_index(self.0 / 13)
    }

    /// Returns the card rank and suit.
    pub fn rank_suit(&self) -> (Rank, Suit) {
        (self.rank(), self.suit())
    }

    /// Returns the single character for this card in the given alphabet.
    pub fn symbol(&self, alphabet: Alphabet) -> char {
        alphabet.symbol(*self)
    }

    /// Parses a single character symbol, letters are tried before the
    /// playing cards block.
    pub fn from_symbol(symbol: char) -> Option<Card> {
        alphabet::lookup(symbol)
    }
}

impl TryFrom<u8> for Card {
    type Error = ParseCardError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        if (ordinal as usize) < crate::Deck::SIZE {
            Ok(Card(ordinal))
        } else {
            Err(ParseCardError::InvalidOrdinal(ordinal))
        }
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl fmt::Display for Card {
    /// Formats the card as `QS`, or as `Q♠` with the alternate flag.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}{}", self.rank(), self.suit().symbol())
        } else {
            write!(f, "{}{}", self.rank(), self.suit())
        }
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let parsed = match (chars.next(), chars.next(), chars.next()) {
            (Some(rc), Some(sc), None) => Rank::from_char(rc).zip(Suit::from_char(sc)),
            _ => None,
        };

        parsed
            .map(|(rank, suit)| Card::new(rank, suit))
            .ok_or_else(|| ParseCardError::InvalidCode(s.to_string()))
    }
}

/// Card rank, or pip value, from Ace to King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Ace
    Ace = 1,
    /// Two
    Two,
    /// Three
    Three,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
}

impl Rank {
    const RANKS: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    const CHARS: [char; 13] = [
        'A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K',
    ];

    /// Returns all ranks from Ace to King.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::RANKS.into_iter()
    }

    /// The rank pip value, 1 for Ace up to 13 for King.
    pub const fn value(&self) -> u8 {
        *self as u8
    }

    /// Maps a zero based index to a rank.
    fn from_index(index: u8) -> Rank {
        Self::RANKS[index as usize]
    }

    fn from_char(c: char) -> Option<Rank> {
        let c = c.to_ascii_uppercase();
        Self::CHARS
            .iter()
            .position(|&rc| rc == c)
            .map(|idx| Self::RANKS[idx])
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::CHARS[*self as usize - 1])
    }
}

/// Card suit, in the canonical Spade, Heart, Club, Diamond order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit.
    Spade = 0,
    /// Hearts suit.
    Heart,
    /// Clubs suit.
    Club,
    /// Diamonds suit.
    Diamond,
}

impl Suit {
    const SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::SUITS.into_iter()
    }

    /// The Unicode glyph for this suit.
    pub const fn symbol(&self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Heart => '♡',
            Suit::Club => '♣',
            Suit::Diamond => '♢',
        }
    }

    fn from_index(index: u8) -> Suit {
        Self::SUITS[index as usize]
    }

    fn from_char(c: char) -> Option<Suit> {
        match c {
            'S' | 's' | '♠' | '♤' => Some(Suit::Spade),
            'H' | 'h' | '♡' | '♥' => Some(Suit::Heart),
            'C' | 'c' | '♣' | '♧' => Some(Suit::Club),
            'D' | 'd' | '♢' | '♦' => Some(Suit::Diamond),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Spade => 'S',
            Suit::Heart => 'H',
            Suit::Club => 'C',
            Suit::Diamond => 'D',
        };

        write!(f, "{suit}")
    }
}
