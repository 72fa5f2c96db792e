// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Categories distribution of random hands.
use ahash::HashMap;
use anyhow::Result;
use log::info;
use rand::Rng;
use std::{io::Write, time::Instant};

use showdown_eval::{Deck, HandCategory, Rules};

/// Samples random 7-cards hands and counts each category.
pub fn count_categories<R>(rng: &mut R, samples: usize, rules: &Rules) -> HashMap<HandCategory, usize>
where
    R: Rng + ?Sized,
{
    let mut counts = HashMap::default();
    Deck::default().sample(rng, samples, 7, |hand| {
        *counts
            .entry(HandCategory::eval_with_rules(hand, rules))
            .or_default() += 1;
    });

    counts
}

/// Samples random hands and prints the categories distribution.
pub fn run<R>(rng: &mut R, samples: usize, rules: &Rules, out: &mut impl Write) -> Result<()>
where
    R: Rng + ?Sized,
{
    let now = Instant::now();
    let counts = count_categories(rng, samples, rules);
    info!(
        "Evaluated {samples} hands in {:.3}s",
        now.elapsed().as_secs_f64()
    );

    writeln!(out, "Hands:           {samples}")?;
    for category in HandCategory::categories().rev() {
        let count = counts.get(&category).copied().unwrap_or_default();
        let pct = if samples == 0 {
            0.0
        } else {
            100.0 * count as f64 / samples as f64
        };

        writeln!(
            out,
            "{:<17}{count:<10}{pct:>8.4}%",
            format!("{category}:")
        )?;
    }

    Ok(())
}
