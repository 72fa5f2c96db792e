// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Classifies a hand, usually two hole cards and five community cards, into
//! one of ten categories from [HandCategory::HighCard] to
//! [HandCategory::RoyalFlush]. Hands are ranked by category only, there is no
//! kicker comparison between hands in the same category.
//!
//! To evaluate a hand use [HandCategory::eval] and compare categories or their
//! [strength](HandCategory::strength):
//!
//! ```
//! # use showdown_eval::*;
//! let h1 = Card::parse_list("AC 2D 3H 4S 5C 9D KH").unwrap();
//! let h2 = Card::parse_list("TH JH QH KH AH 2C 3D").unwrap();
//!
//! let c1 = HandCategory::eval(&h1);
//! let c2 = HandCategory::eval(&h2);
//! assert_eq!(c1, HandCategory::Straight);
//! assert_eq!(c2, HandCategory::RoyalFlush);
//! assert_eq!(c1.strength(), 5);
//! assert!(c2 > c1);
//! ```
//!
//! A [Showdown] evaluates many hands against the same board and picks the
//! winner.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod category;
pub use category::HandCategory;

pub mod eval;
pub use eval::Rules;

pub mod showdown;
pub use showdown::{Showdown, Winner};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit};
