// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand category evaluation.
//!
//! The evaluator counts ranks and suits and sets a flag for each category the
//! cards qualify for, the strongest flag wins. Flushes and straights are
//! detected as five or more cards of a suit and as any run of five distinct
//! consecutive ranks among all the cards.
//!
//! The default [Rules] classify hands with a few known gaps:
//!
//! - a suited A-2-3-4-5 is not a straight flush, it scores as a flush;
//! - a suited 9 to ace is a straight flush, not a royal flush, as the suit scan
//!   stops at the lowest suited run;
//! - pairs are counted exactly, so three pairs score as a high card, and three
//!   of a kind with two pairs or with another three of a kind scores as three
//!   of a kind.
//!
//! Each gap can be closed with a [Rules] flag, [Rules::standard] closes all of
//! them and gives the conventional category of the best five cards.
use serde::{Deserialize, Serialize};

use crate::{Card, HandCategory, Rank, Suit};

/// The ace low straight values.
const WHEEL: [u8; 5] = [2, 3, 4, 5, 14];

/// The royal flush values.
const ROYAL: [u8; 5] = [10, 11, 12, 13, 14];

/// Evaluation rules.
///
/// The default rules keep the gaps listed in the module documentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// A suited A-2-3-4-5 counts as a straight flush.
    pub wheel_straight_flush: bool,
    /// The straight flush scan picks the highest suited run so that a suited 9
    /// to ace scores as a royal flush.
    pub highest_straight_flush: bool,
    /// Two or more pairs make two pair, three of a kind with any pair or with a
    /// second three of a kind makes a full house.
    pub count_all_pairs: bool,
}

impl Rules {
    /// Rules that give the conventional poker category.
    pub const fn standard() -> Self {
        Self {
            wheel_straight_flush: true,
            highest_straight_flush: true,
            count_all_pairs: true,
        }
    }
}

impl HandCategory {
    /// Evaluates the category of a hand with the default rules.
    ///
    /// The hand is usually 7 cards, two hole cards and five community cards,
    /// but any number of cards is accepted. Hands with fewer than 5 cards never
    /// qualify for a straight or a flush.
    ///
    /// ```
    /// # use showdown_eval::*;
    /// let hand = Card::parse_list("KS KD KH 7C 7D 2H 3S").unwrap();
    /// assert_eq!(HandCategory::eval(&hand), HandCategory::FullHouse);
    /// ```
    pub fn eval(cards: &[Card]) -> HandCategory {
        Self::eval_with_rules(cards, &Rules::default())
    }

    /// Evaluates the category of a hand with the given rules.
    pub fn eval_with_rules(cards: &[Card], rules: &Rules) -> HandCategory {
        let mut rank_counts = [0usize; 13];
        let mut suit_counts = [0usize; 4];
        for card in cards {
            rank_counts[card.rank() as usize] += 1;
            suit_counts[card.suit() as usize] += 1;
        }

        let pairs = rank_counts.iter().filter(|&&n| n == 2).count();
        let trips = rank_counts.iter().filter(|&&n| n == 3).count();
        let four_of_a_kind = rank_counts.contains(&4);
        let three_of_a_kind = trips > 0;

        let (pair, two_pair, full_house) = if rules.count_all_pairs {
            (pairs >= 1, pairs >= 2, trips >= 2 || (trips == 1 && pairs >= 1))
        } else {
            (pairs == 1, pairs == 2, three_of_a_kind && pairs == 1)
        };

        let flush = suit_counts.iter().any(|&n| n >= 5);

        // Distinct rank values in ascending order.
        let values = Rank::ranks()
            .filter(|&r| rank_counts[r as usize] > 0)
            .map(|r| r.value())
            .collect::<Vec<_>>();
        let straight = lowest_run(&values).is_some() || contains_all(&values, &WHEEL);

        let suited_run = if straight && flush {
            suited_run(cards, rules)
        } else {
            None
        };

        if suited_run == Some(ROYAL) {
            HandCategory::RoyalFlush
        } else if suited_run.is_some() {
            HandCategory::StraightFlush
        } else if four_of_a_kind {
            HandCategory::FourOfAKind
        } else if full_house {
            HandCategory::FullHouse
        } else if flush {
            HandCategory::Flush
        } else if straight {
            HandCategory::Straight
        } else if three_of_a_kind {
            HandCategory::ThreeOfAKind
        } else if two_pair {
            HandCategory::TwoPair
        } else if pair {
            HandCategory::Pair
        } else {
            HandCategory::HighCard
        }
    }
}

/// Returns the first run of five consecutive values in a sorted slice.
fn lowest_run(values: &[u8]) -> Option<&[u8]> {
    values.windows(5).find(|w| w[4] - w[0] == 4)
}

/// Returns the last run of five consecutive values in a sorted slice.
fn highest_run(values: &[u8]) -> Option<&[u8]> {
    values.windows(5).rfind(|w| w[4] - w[0] == 4)
}

fn contains_all(values: &[u8], needles: &[u8]) -> bool {
    needles.iter().all(|v| values.contains(v))
}

/// Returns the values of the first suited run of five cards.
///
/// Suits are scanned in a fixed order and the scan stops at the first suit with
/// a run, with 7 cards at most one suit can have five or more cards.
fn suited_run(cards: &[Card], rules: &Rules) -> Option<[u8; 5]> {
    for suit in Suit::suits() {
        let mut values = cards
            .iter()
            .filter(|c| c.suit() == suit)
            .map(|c| c.rank().value())
            .collect::<Vec<_>>();
        values.sort_unstable();

        let run = if rules.highest_straight_flush {
            highest_run(&values)
        } else {
            lowest_run(&values)
        };

        if let Some(run) = run.and_then(|r| <[u8; 5]>::try_from(r).ok()) {
            return Some(run);
        }

        if rules.wheel_straight_flush && contains_all(&values, &WHEEL) {
            return Some(WHEEL);
        }
    }

    None
}
