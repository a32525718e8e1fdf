// Copyright (C) 2025 Deckhand Developers
// SPDX-License-Identifier: Apache-2.0

//! Deckhand CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::io;

pub mod demo;

#[derive(Debug, Parser)]
struct Cli {
    /// A share token, multiple arguments are joined together.
    token: Vec<String>,
    /// The share token format.
    #[clap(long, short, value_enum, default_value_t = demo::CodecKind::Positional)]
    codec: demo::CodecKind,
    /// Seed for a repeatable shuffle.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Number of cards to draw.
    #[clap(long, default_value_t = 5)]
    draw: usize,
    /// Number of cards to deal to each player.
    #[clap(long, default_value_t = 7)]
    deal: usize,
    /// Number of players.
    #[clap(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=10))]
    players: u8,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let token = cli.token.concat();
    let config = demo::Config {
        token: (!token.is_empty()).then_some(token),
        codec: cli.codec,
        draw: cli.draw,
        deal: cli.deal,
        players: cli.players as usize,
    };

    let mut out = io::stdout().lock();
    match cli.seed {
        Some(seed) => demo::run(&config, &mut StdRng::seed_from_u64(seed), &mut out),
        None => demo::run(&config, &mut rand::rng(), &mut out),
    }
}
