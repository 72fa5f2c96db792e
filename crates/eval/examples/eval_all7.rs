// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all7
// ```
//
// The standard rules column gives the usual 7 cards counts:
//
// ```text
// High Card:       23294460
// Pair:            58627800
// Two Pair:        31433400
// Three of a Kind: 6461620
// Straight:        6180020
// Flush:           4047644
// Full House:      3473184
// Four of a Kind:  224848
// Straight Flush:  37260
// Royal Flush:     4324
// ```
use std::time::Instant;

use showdown_eval::*;

fn main() {
    // Evaluate all 133M hands with both rule sets.
    let now = Instant::now();
    let mut default_counts = [0usize; 11];
    let mut standard_counts = [0usize; 11];
    let standard = Rules::standard();

    Deck::default().for_each(7, |hand| {
        let category = HandCategory::eval(hand);
        default_counts[category.strength() as usize] += 1;

        let category = HandCategory::eval_with_rules(hand, &standard);
        standard_counts[category.strength() as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = default_counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", 2.0 * total as f64 / elapsed);

    println!("{:<17}{:<13}Standard", "", "Default");
    for category in HandCategory::categories() {
        let idx = category.strength() as usize;
        println!(
            "{:<17}{:<13}{}",
            format!("{category}:"),
            default_counts[idx],
            standard_counts[idx]
        );
    }
}
