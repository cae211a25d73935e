// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A validated set of cards to evaluate.
use log::debug;
use std::{fmt, str::FromStr};
use thiserror::Error;

use showdown_cards::{Card, ParseCardError};

/// Errors returned when building a hand from invalid input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A card string is not a valid card notation.
    #[error(transparent)]
    InvalidCardNotation(#[from] ParseCardError),
    /// The hand doesn't have between 5 and 7 cards.
    #[error("invalid hand size {0}, a hand must have 5 to 7 cards")]
    InvalidHandSize(usize),
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// A hand of 5 to 7 distinct cards.
///
/// The cards are stored from the highest to the lowest so that evaluation
/// results don't depend on the order of the input cards.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; Hand::MAX_SIZE],
    len: usize,
}

impl Hand {
    /// The minimum number of cards in a hand.
    pub const MIN_SIZE: usize = 5;

    /// The maximum number of cards in a hand.
    pub const MAX_SIZE: usize = 7;

    /// Creates a hand from a slice of cards.
    pub fn new(cards: &[Card]) -> Result<Self, EvalError> {
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&cards.len()) {
            debug!("Rejected hand with {} cards", cards.len());
            return Err(EvalError::InvalidHandSize(cards.len()));
        }

        let mut seen = 0u64;
        for card in cards {
            let bit = 1u64 << card.id();
            if seen & bit != 0 {
                debug!("Rejected hand with duplicate card {card}");
                return Err(EvalError::DuplicateCard(*card));
            }

            seen |= bit;
        }

        let len = cards.len();
        let mut sorted = [Card::default(); Self::MAX_SIZE];
        sorted[..len].copy_from_slice(cards);
        sorted[..len].sort_unstable_by(|a, b| b.cmp(a));

        Ok(Self { cards: sorted, len })
    }

    /// Creates a hand from cards notations like `["AH", "KH", ...]`.
    pub fn parse<S: AsRef<str>>(cards: &[S]) -> Result<Self, EvalError> {
        let cards = cards
            .iter()
            .map(|s| s.as_ref().parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&cards)
    }

    /// The hand cards from the highest to the lowest.
    pub fn cards(&self) -> &[Card] {
        &self.cards[..self.len]
    }

    /// The number of cards in this hand.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false as a hand has at least 5 cards.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Checks if this hand contains the given card.
    pub fn contains(&self, card: &Card) -> bool {
        self.cards().contains(card)
    }
}

/// Parses cards separated by whitespace or commas.
impl FromStr for Hand {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(&Card::parse_list(s)?)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_cards(f, self.cards())
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand(")?;
        fmt_cards(f, self.cards())?;
        write!(f, ")")
    }
}

/// Writes cards separated by spaces.
pub(crate) fn fmt_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for (idx, card) in cards.iter().enumerate() {
        if idx > 0 {
            write!(f, " ")?;
        }

        write!(f, "{card}")?;
    }

    Ok(())
}
