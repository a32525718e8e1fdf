// Copyright (C) 2025 Deckhand Developers
// SPDX-License-Identifier: Apache-2.0

//! Deckhand share tokens.
//!
//! A share token is a short base 62 string that records the order of a deck
//! so that it can be sent over text channels and decoded back. There are two
//! token formats, tokens don't record which one produced them:
//!
//! - [Positional]: the deck is a 52 digits number in base 52, this is the
//!   format used for share strings. The top card is not encoded and always
//!   decodes as the Ace of spades.
//! - [Packed]: one byte for each card, longer tokens that keep every card.
//!
//! ```
//! # use deckhand_cards::Deck;
//! # use deckhand_codec::{Packed, Positional, TokenCodec};
//! let deck = Deck::new_and_shuffled(&mut rand::rng());
//!
//! let token = Packed.encode(&deck);
//! assert_eq!(Packed.decode(&token).unwrap(), deck);
//!
//! let token = Positional.encode(&deck);
//! let decoded = Positional.decode(&token).unwrap();
//! assert_eq!(decoded.cards()[1..], deck.cards()[1..]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use deckhand_cards::Deck;

mod error;
pub mod packed;
pub mod positional;
pub mod radix;

pub use error::TokenError;

/// A deck to token encoding.
pub trait TokenCodec {
    /// Encodes a deck order as a token.
    fn encode(&self, deck: &Deck) -> String;

    /// Decodes a token produced by [TokenCodec::encode].
    fn decode(&self, token: &str) -> Result<Deck, TokenError>;
}

/// The positional base 52 codec, see [positional].
#[derive(Debug, Clone, Copy, Default)]
pub struct Positional;

impl TokenCodec for Positional {
    fn encode(&self, deck: &Deck) -> String {
        positional::encode(deck)
    }

    fn decode(&self, token: &str) -> Result<Deck, TokenError> {
        positional::decode(token)
    }
}

/// The byte packed codec, see [packed].
#[derive(Debug, Clone, Copy, Default)]
pub struct Packed;

impl TokenCodec for Packed {
    fn encode(&self, deck: &Deck) -> String {
        packed::encode(deck)
    }

    fn decode(&self, token: &str) -> Result<Deck, TokenError> {
        packed::decode(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codecs_as_trait_objects() {
        let deck = Deck::new();
        let codecs: [&dyn TokenCodec; 2] = [&Positional, &Packed];

        for codec in codecs {
            let token = codec.encode(&deck);
            assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
            assert_eq!(codec.decode(&token).unwrap(), deck);
        }

        // Tokens are not tagged, the same text decodes differently.
        let token = Packed.encode(&deck);
        assert_ne!(Positional.decode(&token), Packed.decode(&token));
    }
}
