// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use log::error;
use rand::prelude::*;
use std::io;

use showdown_eval::{Card, Rules};

pub mod classify;
pub mod game;
pub mod stats;

#[derive(Debug, Parser)]
#[clap(version, about = "Poker hand categories and showdown prediction game")]
struct Cli {
    /// Seed for shuffling and sampling.
    #[clap(long, global = true)]
    seed: Option<u64>,
    /// Count a suited A-2-3-4-5 as a straight flush.
    #[clap(long, global = true)]
    wheel_straight_flush: bool,
    /// Score a suited 9 to ace as a royal flush.
    #[clap(long, global = true)]
    highest_straight_flush: bool,
    /// Score three pairs as two pair and two three of a kind as a full house.
    #[clap(long, global = true)]
    count_all_pairs: bool,
    /// Use the conventional poker categories, enables all the rules flags.
    #[clap(long, global = true)]
    standard: bool,
    /// Logs verbosity, repeat for more details.
    #[clap(long, short, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play the showdown prediction game (default).
    Play {
        /// Number of hands to deal, asked each round if not set.
        #[clap(long, value_parser = clap::value_parser!(u16).range(1..=23))]
        hands: Option<u16>,
    },
    /// Print the category of a hand, e.g. `eval AH KH QH JH TH 2C 3D`.
    Eval {
        /// The hand cards.
        #[clap(required = true, num_args = 1..)]
        cards: Vec<Card>,
    },
    /// Print the categories distribution of random 7-cards hands.
    Stats {
        /// Number of hands to sample.
        #[clap(long, default_value_t = 100_000)]
        samples: usize,
    },
}

impl Cli {
    fn rules(&self) -> Rules {
        if self.standard {
            Rules::standard()
        } else {
            Rules {
                wheel_straight_flush: self.wheel_straight_flush,
                highest_straight_flush: self.highest_straight_flush,
                count_all_pairs: self.count_all_pairs,
            }
        }
    }

    fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let rules = cli.rules();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut stdout = io::stdout();
    match cli.command.unwrap_or(Command::Play { hands: None }) {
        Command::Play { hands } => {
            let config = game::Config {
                hands: hands.map(usize::from),
                rules,
            };

            game::Game::new(config, rng).run(&mut io::stdin().lock(), &mut stdout)
        }
        Command::Eval { cards } => classify::run(&cards, &rules, &mut stdout),
        Command::Stats { samples } => stats::run(&mut rng, samples, &rules, &mut stdout),
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(cli.log_level())
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}
