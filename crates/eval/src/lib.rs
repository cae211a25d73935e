// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown poker hand evaluator.
//!
//! Classifies a hand of 5, 6, or 7 cards into its strongest poker category and
//! returns the cards that make the category, the evaluator is a pure function
//! of the input cards so it can be called from parallel simulations without
//! any synchronization.
//!
//! To use the evaluator create a [Hand] and use [EvaluatedHand::eval], or use
//! [evaluate] to validate and evaluate a slice of cards:
//!
//! ```
//! # use showdown_eval::*;
//! let hand = Hand::parse(&["5H", "5D", "9C", "9S", "2H", "2D", "KS"]).unwrap();
//! let value = EvaluatedHand::eval(&hand);
//! assert_eq!(value.category(), HandCategory::TwoPair);
//! assert_eq!(value.to_string(), "Two Pair: 9S 9C 5H 5D");
//!
//! // Only the category is compared between hands.
//! let other = evaluate(&Card::parse_list("4S 4H 4D 4C 9C").unwrap()).unwrap();
//! assert!(other.category() > value.category());
//! ```
//!
//! Straights are ace high only, an ace doesn't make a low straight with
//! `2 3 4 5`.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod detect;
mod group;

pub mod eval;
pub use eval::{EvaluatedHand, HandCategory, evaluate};

mod hand;
pub use hand::{EvalError, Hand};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, ParseCardError, Rank, Suit};
