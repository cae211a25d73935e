// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator computes the groupings for a hand once and then runs the
//! category detectors from the strongest to the weakest category, the first
//! detector that matches gives the hand category and the cards that make it.
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::Card;

use crate::{
    Hand,
    detect::{self, DETECTORS},
    group::Groupings,
    hand::{EvalError, fmt_cards},
};

/// A hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No other category.
    HighCard = 0,
    /// Two cards with the same rank.
    Pair,
    /// Two different pairs.
    TwoPair,
    /// Three cards with the same rank.
    ThreeOfAKind,
    /// Five cards with consecutive ranks.
    Straight,
    /// Five cards with the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards with the same rank.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
    /// An ace high straight flush.
    RoyalFlush,
}

impl HandCategory {
    const ALL: [HandCategory; 10] = {
        use HandCategory::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
    };

    /// Returns all categories from the weakest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        Self::ALL.into_iter()
    }

    /// The number of cards that make a hand of this category.
    pub fn num_cards(&self) -> usize {
        match self {
            HandCategory::HighCard => 1,
            HandCategory::Pair => 2,
            HandCategory::ThreeOfAKind => 3,
            HandCategory::TwoPair | HandCategory::FourOfAKind => 4,
            HandCategory::Straight
            | HandCategory::Flush
            | HandCategory::FullHouse
            | HandCategory::StraightFlush
            | HandCategory::RoyalFlush => 5,
        }
    }
}

impl TryFrom<u8> for HandCategory {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(value as usize).copied().ok_or(value)
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}

/// An evaluated hand with the cards that make its category.
///
/// The cards are listed from the most significant, for a full house the
/// trips come before the pair and for a straight the highest card is first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvaluatedHand {
    /// Ace to ten of the same suit.
    RoyalFlush([Card; 5]),
    /// Five consecutive cards of the same suit.
    StraightFlush([Card; 5]),
    /// The four cards with the same rank.
    FourOfAKind([Card; 4]),
    /// The trips followed by the pair.
    FullHouse([Card; 5]),
    /// The five highest cards of the flush suit.
    Flush([Card; 5]),
    /// Five consecutive cards.
    Straight([Card; 5]),
    /// The three cards with the same rank.
    ThreeOfAKind([Card; 3]),
    /// The highest pair followed by the second highest pair.
    TwoPair([Card; 4]),
    /// The pair cards.
    Pair([Card; 2]),
    /// The highest card.
    HighCard(Card),
}

impl EvaluatedHand {
    /// Evaluates a hand.
    ///
    /// ```
    /// # use showdown_eval::*;
    /// let hand = "KS KH KD 2C 2D 7H 9S".parse::<Hand>().unwrap();
    /// let value = EvaluatedHand::eval(&hand);
    /// assert_eq!(value.category(), HandCategory::FullHouse);
    /// assert_eq!(value.cards().len(), 5);
    /// ```
    pub fn eval(hand: &Hand) -> Self {
        let groupings = Groupings::new(hand);
        DETECTORS
            .iter()
            .find_map(|detect| detect(&groupings))
            .unwrap_or_else(|| detect::high_card(&groupings))
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        match self {
            EvaluatedHand::RoyalFlush(_) => HandCategory::RoyalFlush,
            EvaluatedHand::StraightFlush(_) => HandCategory::StraightFlush,
            EvaluatedHand::FourOfAKind(_) => HandCategory::FourOfAKind,
            EvaluatedHand::FullHouse(_) => HandCategory::FullHouse,
            EvaluatedHand::Flush(_) => HandCategory::Flush,
            EvaluatedHand::Straight(_) => HandCategory::Straight,
            EvaluatedHand::ThreeOfAKind(_) => HandCategory::ThreeOfAKind,
            EvaluatedHand::TwoPair(_) => HandCategory::TwoPair,
            EvaluatedHand::Pair(_) => HandCategory::Pair,
            EvaluatedHand::HighCard(_) => HandCategory::HighCard,
        }
    }

    /// The cards that make the hand category, most significant first.
    pub fn cards(&self) -> &[Card] {
        match self {
            EvaluatedHand::RoyalFlush(cards)
            | EvaluatedHand::StraightFlush(cards)
            | EvaluatedHand::FullHouse(cards)
            | EvaluatedHand::Flush(cards)
            | EvaluatedHand::Straight(cards) => cards.as_slice(),
            EvaluatedHand::FourOfAKind(cards) | EvaluatedHand::TwoPair(cards) => cards.as_slice(),
            EvaluatedHand::ThreeOfAKind(cards) => cards.as_slice(),
            EvaluatedHand::Pair(cards) => cards.as_slice(),
            EvaluatedHand::HighCard(card) => std::slice::from_ref(card),
        }
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.category())?;
        fmt_cards(f, self.cards())
    }
}

/// Validates and evaluates a set of 5 to 7 cards.
///
/// ```
/// # use showdown_eval::*;
/// let cards = Card::parse_list("AH KH QH JH TH").unwrap();
/// let value = evaluate(&cards).unwrap();
/// assert_eq!(value.category(), HandCategory::RoyalFlush);
///
/// assert!(evaluate(&cards[..4]).is_err());
/// ```
pub fn evaluate(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    Hand::new(cards).map(|hand| EvaluatedHand::eval(&hand))
}
