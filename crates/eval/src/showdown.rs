// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown between hands sharing the same board.
use log::debug;

use crate::{Card, HandCategory, Rules};

/// The winning hand of a showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Winner {
    /// The index of the winning hand.
    pub index: usize,
    /// The winning hand category.
    pub category: HandCategory,
}

/// Returns the winner given the category of each hand.
///
/// Hands are compared by category only, the first hand that reaches the
/// strongest category is the winner and later hands with the same category
/// don't share the win. Returns `None` if there are no hands.
pub fn winner(categories: &[HandCategory]) -> Option<Winner> {
    let mut winner: Option<Winner> = None;
    for (index, &category) in categories.iter().enumerate() {
        if winner.is_none_or(|w| category > w.category) {
            winner = Some(Winner { index, category });
        }
    }

    winner
}

/// A board of community cards hands are evaluated against.
#[derive(Debug, Clone)]
pub struct Showdown {
    board: Vec<Card>,
    rules: Rules,
}

impl Showdown {
    /// Creates a showdown for the given board with the default rules.
    pub fn new(board: &[Card]) -> Self {
        Self {
            board: board.to_vec(),
            rules: Rules::default(),
        }
    }

    /// Sets the rules used to evaluate the hands.
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// The board cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The rules used to evaluate the hands.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Evaluates the hole cards combined with the board.
    pub fn eval_hand(&self, hole: &[Card]) -> HandCategory {
        let mut cards = Vec::with_capacity(hole.len() + self.board.len());
        cards.extend_from_slice(hole);
        cards.extend_from_slice(&self.board);
        HandCategory::eval_with_rules(&cards, &self.rules)
    }

    /// Evaluates each hand combined with the board.
    pub fn eval_hands(&self, hands: &[[Card; 2]]) -> Vec<HandCategory> {
        hands
            .iter()
            .enumerate()
            .map(|(idx, hole)| {
                let category = self.eval_hand(hole);
                debug!("Hand {} {} {} {category}", idx + 1, hole[0], hole[1]);
                category
            })
            .collect()
    }

    /// Evaluates all the hands and returns the winner.
    ///
    /// ```
    /// # use showdown_eval::*;
    /// let board = Card::parse_list("2C 7D 9H JS KC").unwrap();
    /// let hands = [
    ///     ["3C".parse().unwrap(), "4D".parse().unwrap()],
    ///     ["KD".parse().unwrap(), "KH".parse().unwrap()],
    /// ];
    ///
    /// let winner = Showdown::new(&board).winner(&hands).unwrap();
    /// assert_eq!(winner.index, 1);
    /// assert_eq!(winner.category, HandCategory::ThreeOfAKind);
    /// ```
    pub fn winner(&self, hands: &[[Card; 2]]) -> Option<Winner> {
        winner(&self.eval_hands(hands))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hole(s: &str) -> [Card; 2] {
        let cards = Card::parse_list(s).unwrap();
        [cards[0], cards[1]]
    }

    #[test]
    fn winner_first_max() {
        use HandCategory::*;

        assert_eq!(winner(&[]), None);

        let w = winner(&[Pair, Flush, HighCard, Flush]).unwrap();
        assert_eq!(w.index, 1);
        assert_eq!(w.category, Flush);

        // Equal categories don't replace the first hand.
        let w = winner(&[TwoPair, TwoPair, TwoPair]).unwrap();
        assert_eq!(w.index, 0);

        let w = winner(&[HighCard]).unwrap();
        assert_eq!(w, Winner { index: 0, category: HighCard });
    }

    #[test]
    fn showdown_eval_hands() {
        let board = Card::parse_list("TH JH QH 2C 7D").unwrap();
        let showdown = Showdown::new(&board);
        assert_eq!(showdown.board().len(), 5);

        let hands = [hole("AH KH"), hole("9H 8H"), hole("2D 2S"), hole("3S 4S")];
        let categories = showdown.eval_hands(&hands);
        assert_eq!(
            categories,
            vec![
                HandCategory::RoyalFlush,
                HandCategory::StraightFlush,
                HandCategory::ThreeOfAKind,
                HandCategory::HighCard,
            ]
        );

        let w = showdown.winner(&hands).unwrap();
        assert_eq!(w.index, 0);
        assert_eq!(w.category, HandCategory::RoyalFlush);
    }

    #[test]
    fn showdown_no_kicker() {
        // Ace high and seven high are both high card hands, the first one wins.
        let board = Card::parse_list("2C 4D 9H JS KC").unwrap();
        let hands = [hole("3S 7H"), hole("AD QD")];

        let w = Showdown::new(&board).winner(&hands).unwrap();
        assert_eq!(w.index, 0);
        assert_eq!(w.category, HandCategory::HighCard);
    }

    #[test]
    fn showdown_rules() {
        let board = Card::parse_list("2H 3H 4H KC 9D").unwrap();
        let hands = [hole("5C 5D"), hole("AH 5H")];

        let w = Showdown::new(&board).winner(&hands).unwrap();
        assert_eq!(w.index, 1);
        assert_eq!(w.category, HandCategory::Flush);

        let showdown = Showdown::new(&board).with_rules(Rules::standard());
        assert_eq!(showdown.rules(), &Rules::standard());

        let w = showdown.winner(&hands).unwrap();
        assert_eq!(w.index, 1);
        assert_eq!(w.category, HandCategory::StraightFlush);
    }
}
