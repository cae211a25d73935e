// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown hand evaluator CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;

mod commands;

#[derive(Debug, Parser)]
#[clap(version, about = "Poker hand evaluator")]
struct Cli {
    /// Enable debug logs.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates a hand of 5 to 7 cards, e.g. `eval AH KH QH JH TH`.
    Eval {
        /// The hand cards, rank and suit in any order.
        #[clap(required = true, num_args = 1..)]
        cards: Vec<String>,
        /// Print the result as JSON.
        #[clap(long)]
        json: bool,
    },
    /// Counts the categories of random hands.
    Sample {
        /// Number of hands to sample.
        #[clap(long, short = 'n', default_value_t = 1_000_000)]
        hands: usize,
        /// Number of cards in each hand.
        #[clap(long, short, default_value_t = 7, value_parser = clap::value_parser!(u8).range(5..=7))]
        size: u8,
        /// Number of parallel tasks.
        #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=256))]
        tasks: u16,
        /// Seed for reproducible sampling.
        #[clap(long)]
        seed: Option<u64>,
    },
    /// Counts the categories of all the hands with the given number of cards.
    Enumerate {
        /// Number of cards in each hand.
        #[clap(long, short, default_value_t = 5, value_parser = clap::value_parser!(u8).range(5..=7))]
        size: u8,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    if let Err(e) = run(cli.command) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Eval { cards, json } => {
            println!("{}", commands::eval(&cards, json)?);
        }
        Command::Sample {
            hands,
            size,
            tasks,
            seed,
        } => {
            let config = commands::SampleConfig {
                hands,
                size: size as usize,
                tasks: tasks as usize,
                seed,
            };

            print!("{}", commands::sample(&config)?);
        }
        Command::Enumerate { size } => {
            print!("{}", commands::enumerate(size as usize)?);
        }
    }

    Ok(())
}
