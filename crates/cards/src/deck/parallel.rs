// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand sampling.
use rand::prelude::*;
use std::thread;

use super::{Deck, MAX_HAND};

impl Deck {
    /// Calls the given closure from `num_tasks` parallel tasks generating
    /// `samples_per_task` samples of size k.
    ///
    /// The closure takes an usize that is the task identifier (0..num_tasks)
    /// and a slice of cards of length k. Each task uses its own random
    /// generator, when `seed` is set task `i` is seeded with `seed + i` so
    /// that runs are reproducible.
    ///
    /// Panics if k is not 2 <= k <= 7 or if `num_tasks` is zero.
    pub fn par_sample<F>(
        &self,
        num_tasks: usize,
        samples_per_task: usize,
        k: usize,
        seed: Option<u64>,
        f: F,
    ) where
        F: Fn(usize, &[crate::Card]) + Send + Sync,
    {
        assert!((2..=MAX_HAND).contains(&k), "2 <= k <= 7");
        assert!(num_tasks > 0);

        if k > self.cards.len() {
            return;
        }

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let f = &f;
                s.spawn(move || {
                    let mut rng = match seed {
                        Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(task_id as u64)),
                        None => SmallRng::from_os_rng(),
                    };

                    self.sample(&mut rng, samples_per_task, k, |hand| f(task_id, hand));
                });
            }
        });
    }
}
