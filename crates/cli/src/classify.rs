// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Classifies a hand given on the command line.
use ahash::HashSet;
use anyhow::{Result, bail};
use log::warn;
use std::io::Write;

use showdown_eval::{Card, HandCategory, Rules};

/// Fewer cards can't make a straight or a flush.
const MIN_CARDS: usize = 5;

/// Number of cards in a hand, two hole cards and five community cards.
const HAND_SIZE: usize = 7;

/// Evaluates the cards and prints the category and its strength.
pub fn run(cards: &[Card], rules: &Rules, out: &mut impl Write) -> Result<()> {
    if cards.len() < MIN_CARDS {
        bail!(
            "At least {MIN_CARDS} cards are needed to evaluate a hand, got {}",
            cards.len()
        );
    }

    let mut seen = HashSet::default();
    if let Some(card) = cards.iter().find(|c| !seen.insert(**c)) {
        bail!("Duplicate card {card}");
    }

    if cards.len() != HAND_SIZE {
        warn!("Evaluating {} cards, a hand has {HAND_SIZE} cards", cards.len());
    }

    let category = HandCategory::eval_with_rules(cards, rules);
    writeln!(out, "{category} ({})", category.strength())?;

    Ok(())
}
