// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Commands implementation.
use anyhow::{Result, bail};
use log::{debug, info};
use rand::{SeedableRng, rngs::SmallRng};
use serde::Serialize;
use std::{
    fmt,
    sync::{
        OnceLock,
        atomic::{AtomicU64, Ordering},
    },
    time::Instant,
};

use showdown_eval::{Card, Deck, EvaluatedHand, Hand, HandCategory, evaluate};

const NUM_CATEGORIES: usize = 10;

/// Hands sampling configuration.
#[derive(Debug)]
pub struct SampleConfig {
    /// Number of hands to sample.
    pub hands: usize,
    /// Number of cards in each hand.
    pub size: usize,
    /// Number of parallel tasks.
    pub tasks: usize,
    /// Optional seed for reproducible runs.
    pub seed: Option<u64>,
}

/// Hands count per category.
#[derive(Debug, Default)]
pub struct CategoryCounts([u64; NUM_CATEGORIES]);

impl CategoryCounts {
    /// Counts a hand category.
    pub fn add(&mut self, category: HandCategory) {
        self.0[category as usize] += 1;
    }

    /// The count for a category.
    pub fn get(&self, category: HandCategory) -> u64 {
        self.0[category as usize]
    }

    /// The total number of hands.
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Adds the counts from another tally.
    pub fn merge(&mut self, other: &CategoryCounts) {
        for (total, count) in self.0.iter_mut().zip(other.0) {
            *total += count;
        }
    }
}

impl From<&[AtomicU64]> for CategoryCounts {
    fn from(counters: &[AtomicU64]) -> Self {
        let mut counts = Self::default();
        for (count, counter) in counts.0.iter_mut().zip(counters) {
            *count = counter.load(Ordering::Relaxed);
        }

        counts
    }
}

impl fmt::Display for CategoryCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total().max(1) as f64;
        for category in HandCategory::categories().rev() {
            let count = self.get(category);
            writeln!(
                f,
                "{:<16} {:>12} {:>9.4}%",
                format!("{category}:"),
                count,
                100.0 * count as f64 / total
            )?;
        }

        Ok(())
    }
}

/// The evaluation output when printing as JSON.
#[derive(Debug, Serialize)]
struct EvalOutput<'a> {
    hand: String,
    category: HandCategory,
    cards: &'a [Card],
}

/// Evaluates a hand given as cards notations.
pub fn eval(cards: &[String], json: bool) -> Result<String> {
    let hand = cards.join(" ").parse::<Hand>()?;
    debug!("Evaluating {hand}");

    let value = EvaluatedHand::eval(&hand);
    if json {
        let output = EvalOutput {
            hand: hand.to_string(),
            category: value.category(),
            cards: value.cards(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    } else {
        Ok(value.to_string())
    }
}

/// Counts categories for randomly sampled hands.
///
/// With more than one task each task samples `hands / tasks` hands and the
/// remainder is sampled sequentially, so exactly `hands` hands are counted.
pub fn sample(config: &SampleConfig) -> Result<CategoryCounts> {
    if config.tasks == 0 {
        bail!("The number of tasks must be positive");
    }

    info!(
        "Sampling {} hands of {} cards with {} tasks",
        config.hands, config.size, config.tasks
    );

    let now = Instant::now();
    let deck = Deck::default();

    let counts = if config.tasks == 1 {
        sample_seq(&deck, config.hands, config.size, config.seed)?
    } else {
        // Per task counters to avoid contention.
        let task_counters = (0..config.tasks)
            .map(|_| {
                (0..NUM_CATEGORIES)
                    .map(|_| AtomicU64::new(0))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        let first_err = OnceLock::new();

        let samples_per_task = config.hands / config.tasks;
        if samples_per_task > 0 {
            deck.par_sample(
                config.tasks,
                samples_per_task,
                config.size,
                config.seed,
                |task_id, hand| match evaluate(hand) {
                    Ok(value) => {
                        task_counters[task_id][value.category() as usize]
                            .fetch_add(1, Ordering::Relaxed);
                    }
                    Err(e) => {
                        let _ = first_err.set(e);
                    }
                },
            );
        }

        if let Some(e) = first_err.into_inner() {
            return Err(e.into());
        }

        let mut counts = CategoryCounts::default();
        for counters in &task_counters {
            counts.merge(&CategoryCounts::from(counters.as_slice()));
        }

        // Tasks seeds are seed..seed + tasks, the remainder uses the next one.
        let remainder = config.hands % config.tasks;
        let seed = config.seed.map(|seed| seed.wrapping_add(config.tasks as u64));
        counts.merge(&sample_seq(&deck, remainder, config.size, seed)?);

        counts
    };

    log_rate(counts.total(), now);
    Ok(counts)
}

fn sample_seq(
    deck: &Deck,
    hands: usize,
    size: usize,
    seed: Option<u64>,
) -> Result<CategoryCounts> {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let mut counts = CategoryCounts::default();
    let mut first_err = None;

    deck.sample(&mut rng, hands, size, |hand| match evaluate(hand) {
        Ok(value) => counts.add(value.category()),
        Err(e) => {
            first_err.get_or_insert(e);
        }
    });

    match first_err {
        Some(e) => Err(e.into()),
        None => Ok(counts),
    }
}

/// Counts categories for all the hands of a given size.
pub fn enumerate(size: usize) -> Result<CategoryCounts> {
    if !(Hand::MIN_SIZE..=Hand::MAX_SIZE).contains(&size) {
        bail!(
            "Hand size must be between {} and {}",
            Hand::MIN_SIZE,
            Hand::MAX_SIZE
        );
    }

    info!("Enumerating all hands of {size} cards");

    let now = Instant::now();
    let mut counts = CategoryCounts::default();
    let mut first_err = None;

    Deck::default().for_each(size, |hand| match evaluate(hand) {
        Ok(value) => counts.add(value.category()),
        Err(e) => {
            first_err.get_or_insert(e);
        }
    });

    if let Some(e) = first_err {
        return Err(e.into());
    }

    log_rate(counts.total(), now);
    Ok(counts)
}

fn log_rate(total: u64, start: Instant) {
    let elapsed = start.elapsed().as_secs_f64();
    info!(
        "Evaluated {total} hands in {elapsed:.3}s ({:.0} hands/sec)",
        total as f64 / elapsed.max(f64::EPSILON)
    );
}
