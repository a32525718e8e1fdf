// Copyright (C) 2025 Deckhand Developers
// SPDX-License-Identifier: Apache-2.0

//! Single character card alphabets.
use ahash::AHashMap;
use std::sync::LazyLock;

use crate::{Card, Deck};

/// The 52 ASCII letters in ordinal order.
const LETTERS: &[u8; Deck::SIZE] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Cards from the Unicode playing cards block in ordinal order.
///
/// The knight codepoints are skipped and the four 13-card runs follow the
/// block layout (spades, hearts, diamonds, clubs), so the third and fourth
/// runs show the glyphs of the other suit. Symbol strings produced by other
/// deckhand tools use this exact table.
const PLAYING_CARDS: [char; Deck::SIZE] = [
    '\u{1F0A1}', '\u{1F0A2}', '\u{1F0A3}', '\u{1F0A4}', '\u{1F0A5}', '\u{1F0A6}', '\u{1F0A7}',
    '\u{1F0A8}', '\u{1F0A9}', '\u{1F0AA}', '\u{1F0AB}', '\u{1F0AD}', '\u{1F0AE}', //
    '\u{1F0B1}', '\u{1F0B2}', '\u{1F0B3}', '\u{1F0B4}', '\u{1F0B5}', '\u{1F0B6}', '\u{1F0B7}',
    '\u{1F0B8}', '\u{1F0B9}', '\u{1F0BA}', '\u{1F0BB}', '\u{1F0BD}', '\u{1F0BE}', //
    '\u{1F0C1}', '\u{1F0C2}', '\u{1F0C3}', '\u{1F0C4}', '\u{1F0C5}', '\u{1F0C6}', '\u{1F0C7}',
    '\u{1F0C8}', '\u{1F0C9}', '\u{1F0CA}', '\u{1F0CB}', '\u{1F0CD}', '\u{1F0CE}', //
    '\u{1F0D1}', '\u{1F0D2}', '\u{1F0D3}', '\u{1F0D4}', '\u{1F0D5}', '\u{1F0D6}', '\u{1F0D7}',
    '\u{1F0D8}', '\u{1F0D9}', '\u{1F0DA}', '\u{1F0DB}', '\u{1F0DD}', '\u{1F0DE}',
];

static PLAYING_CARDS_INDEX: LazyLock<AHashMap<char, Card>> = LazyLock::new(|| {
    PLAYING_CARDS
        .iter()
        .zip(Deck::default())
        .map(|(&symbol, card)| (symbol, card))
        .collect()
});

/// A mapping between cards and single printable characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// ASCII letters, `A` for the Ace of spades up to `z` for the King of
    /// diamonds.
    Letters,
    /// Codepoints from the Unicode playing cards block.
    #[default]
    PlayingCards,
}

impl Alphabet {
    /// Returns the symbol for a card.
    pub fn symbol(&self, card: Card) -> char {
        let idx = card.ordinal() as usize;
        match self {
            Alphabet::Letters => LETTERS[idx] as char,
            Alphabet::PlayingCards => PLAYING_CARDS[idx],
        }
    }

    /// Returns the card for a symbol if the symbol is in this alphabet.
    pub fn card(&self, symbol: char) -> Option<Card> {
        match self {
            Alphabet::Letters => {
                let byte = u8::try_from(symbol).ok()?;
                let idx = LETTERS.iter().position(|&b| b == byte)?;
                Card::try_from(idx as u8).ok()
            }
            Alphabet::PlayingCards => PLAYING_CARDS_INDEX.get(&symbol).copied(),
        }
    }
}

/// Looks up a symbol in the letters alphabet first and then in the playing
/// cards one.
pub(crate) fn lookup(symbol: char) -> Option<Card> {
    Alphabet::Letters
        .card(symbol)
        .or_else(|| Alphabet::PlayingCards.card(symbol))
}
