// Copyright (C) 2025 Deckhand Developers
// SPDX-License-Identifier: Apache-2.0

//! Card parsing errors.
use thiserror::Error;

/// Errors that can occur when building cards from raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// A raw ordinal outside `0..52`.
    #[error("invalid card ordinal {0}")]
    InvalidOrdinal(u8),
    /// A character that is not in any card alphabet.
    #[error("unknown card symbol {symbol:?} at position {position}")]
    UnknownSymbol {
        /// The rejected character.
        symbol: char,
        /// Index of the character after whitespace removal.
        position: usize,
    },
    /// A string that is not a rank followed by a suit.
    #[error("invalid card code {0:?}")]
    InvalidCode(String),
}
