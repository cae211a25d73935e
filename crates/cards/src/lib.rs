// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = "TD".parse::<Card>().unwrap();
//! assert!(ah > td);
//!
//! // The suit can also come first.
//! assert_eq!("HA".parse::<Card>().unwrap(), ah);
//! ```
//!
//! and a [Deck] type for shuffling, sampling, and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use showdown_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! to sample 10 random 5-cards hands:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut counter = 0;
//! Deck::default().sample(&mut rand::rng(), 10, 5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
//!
//! The **`parallel`** feature enables parallel sampling with a given number of
//! tasks, the closure `task_id` can be used to store per task data to reduce
//! contention:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_sample() {
//! # use std::sync::atomic;
//! # use showdown_cards::Deck;
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default().par_sample(4, 10, 7, None, |task_id, hand| {
//!     assert_eq!(hand.len(), 7);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 40);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, ParseCardError, Rank, Suit};

mod deck;
pub use deck::Deck;
