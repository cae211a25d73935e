// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Estimates the final hand category frequencies for two hole cards by sampling
// random boards, run with:
//
// ```bash
// $ cargo r --release --features=parallel --example sample_odds -- AH KH
// ```
use clap::Parser;
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use showdown_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The first hole card.
    c1: Card,
    /// The second hole card.
    c2: Card,
    /// Number of parallel tasks.
    #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=256))]
    tasks: u16,
    /// Number of boards sampled by each task.
    #[clap(long, short, default_value_t = 250_000)]
    samples: usize,
}

fn main() {
    const BOARD_SIZE: usize = 5;
    const NUM_CATEGORIES: usize = 10;

    let cli = Cli::parse();
    let num_tasks = cli.tasks as usize;
    assert_ne!(cli.c1, cli.c2, "Hole cards must be different");

    // Create per task counters to avoid contention.
    let task_counters = (0..num_tasks)
        .map(|_| {
            (0..NUM_CATEGORIES)
                .map(|_| AtomicU64::new(0))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    // Remove the hole cards from the deck so that we don't sample them.
    let mut deck = Deck::default();
    deck.remove(cli.c1);
    deck.remove(cli.c2);

    let now = Instant::now();

    deck.par_sample(num_tasks, cli.samples, BOARD_SIZE, None, |task_id, board| {
        let mut cards = [cli.c1; 7];
        cards[1] = cli.c2;
        cards[2..].copy_from_slice(board);

        // Hole cards are removed from the deck so the hand is always valid.
        let hand = Hand::new(&cards).expect("Hole and board cards are distinct");
        let value = EvaluatedHand::eval(&hand);
        task_counters[task_id][value.category() as usize].fetch_add(1, Ordering::Relaxed);
    });

    let elapsed = now.elapsed().as_secs_f64();

    // Aggregate counters.
    let agg = (0..NUM_CATEGORIES)
        .map(|c| {
            task_counters
                .iter()
                .map(|counts| counts[c].load(Ordering::Relaxed))
                .sum::<u64>()
        })
        .collect::<Vec<_>>();

    let total = agg.iter().sum::<u64>();
    println!("Hole cards:      {} {}", cli.c1, cli.c2);
    println!("Total boards:    {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::categories().rev() {
        let count = agg[category as usize];
        println!(
            "{:<16} {:>10} {:>8.4}%",
            format!("{category}:"),
            count,
            100.0 * count as f64 / total.max(1) as f64
        );
    }
}
