// Copyright (C) 2025 Deckhand Developers
// SPDX-License-Identifier: Apache-2.0

//! The deck operations walkthrough.
use anyhow::{Result, bail};
use clap::ValueEnum;
use log::{info, warn};
use rand::Rng;
use std::io::Write;

use deckhand_cards::{Card, Deck, Rank, Suit};
use deckhand_codec::{Packed, Positional, TokenCodec};

/// The share token format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CodecKind {
    /// Base 52 digits, drops the top card.
    #[default]
    Positional,
    /// One byte per card.
    Packed,
}

impl CodecKind {
    fn codec(&self) -> &'static dyn TokenCodec {
        match self {
            CodecKind::Positional => &Positional,
            CodecKind::Packed => &Packed,
        }
    }
}

/// The walkthrough configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// A share token to start from instead of a fresh deck.
    pub token: Option<String>,
    /// The share token format.
    pub codec: CodecKind,
    /// Number of cards to draw after shuffling.
    pub draw: usize,
    /// Number of cards to deal to each player.
    pub deal: usize,
    /// Number of players.
    pub players: usize,
}

/// Runs the walkthrough writing the report to `out`.
pub fn run<R, W>(config: &Config, rng: &mut R, out: &mut W) -> Result<()>
where
    R: Rng + ?Sized,
    W: Write,
{
    let codec = config.codec.codec();

    let mut deck = match &config.token {
        Some(token) => {
            let deck = codec.decode(token)?;
            info!("Decoded {:?} token into {} cards", config.codec, deck.len());
            writeln!(out, "shared deck {}", deck.len())?;
            deck
        }
        None => {
            writeln!(out, "fresh deck")?;
            Deck::new()
        }
    };

    writeln!(out, "{deck}")?;
    writeln!(out, "sharestring:")?;
    writeln!(out, "{}", codec.encode(&deck))?;
    writeln!(out, "{}", deck.symbol_string())?;

    deck.shuffle(rng);
    writeln!(out, "\nshuffled")?;
    writeln!(out, "{}", codec.encode(&deck))?;
    writeln!(out, "{}", deck.symbol_string())?;

    if config.draw > deck.len() {
        bail!("Cannot draw {} cards from {} cards", config.draw, deck.len());
    }

    let hand = deck.draw(config.draw);
    writeln!(out, "\n{} cards drawn", hand.len())?;
    writeln!(out, "{hand}")?;

    writeln!(out, "\nrank, suit values of cards in drawn:")?;
    writeln!(out, "Card  Rank   Suit")?;
    for card in &hand {
        let (rank, suit) = card.rank_suit();
        writeln!(
            out,
            "{card} :  {rank}={:2}   {}={:2}",
            rank.value(),
            suit.symbol(),
            suit as u8
        )?;
    }

    let qs = Card::new(Rank::Queen, Suit::Spade);
    writeln!(
        out,
        "Drawn cards include the Queen of Spades? {}",
        hand.contains(qs)
    )?;
    let js = Card::new(Rank::Jack, Suit::Spade);
    writeln!(
        out,
        "Drawn cards include the Jack of Spades? {}",
        hand.contains(js)
    )?;

    let mut hands = vec![Deck::empty(); config.players];
    if !deck.deal(config.deal, &mut hands) {
        warn!("Deck ran out of cards while dealing");
    }

    writeln!(
        out,
        "\nDealing {} cards to {} players",
        config.deal, config.players
    )?;
    for (idx, player) in hands.iter().enumerate() {
        writeln!(out, "Player{}: {player}", idx + 1)?;
    }

    writeln!(out, "\n{} cards left in deck", deck.len())?;
    writeln!(out, "{deck}")?;

    deck.add_decks(std::iter::once(&hand).chain(&hands));
    writeln!(out, "\nReturning the cards to the deck")?;
    writeln!(out, "{deck}")?;

    Ok(())
}
