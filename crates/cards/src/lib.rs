// Copyright (C) 2025 Deckhand Developers
// SPDX-License-Identifier: Apache-2.0

//! Deckhand playing cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use deckhand_cards::{Card, Rank, Suit};
//! let qs = Card::new(Rank::Queen, Suit::Spade);
//! assert_eq!(qs.to_string(), "QS");
//! assert_eq!(qs.ordinal(), 11);
//! ```
//!
//! and a [Deck] type for shuffling, drawing and dealing cards:
//!
//! ```
//! # use deckhand_cards::{Card, Deck, Rank, Suit};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hand = deck.draw(5);
//! assert_eq!(hand.len(), 5);
//! assert_eq!(deck.len(), 47);
//!
//! // Deal 7 cards to two players.
//! let mut hands = vec![Deck::empty(), Deck::empty()];
//! assert!(deck.deal(7, &mut hands));
//! assert_eq!(deck.len(), 33);
//! ```
//!
//! Each card maps to a single character in one of the [Alphabet]s, a deck
//! can be rendered as a symbol string and parsed back:
//!
//! ```
//! # use deckhand_cards::{Alphabet, Deck};
//! let deck = Deck::new();
//! let symbols = deck.symbols(Alphabet::Letters);
//! assert_eq!(&symbols[..4], "ABCD");
//! assert_eq!(Deck::from_symbols(&symbols).unwrap(), deck);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod alphabet;
mod card;
mod deck;
mod error;

pub use alphabet::Alphabet;
pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use error::ParseCardError;
