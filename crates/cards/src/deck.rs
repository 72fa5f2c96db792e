// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards deck.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the top of the deck, returns `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals up to `n` cards, fewer if the deck runs out of cards.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        (0..n).map_while(|_| self.deal()).collect()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Hands are visited in lexicographic order of the cards positions in the
    /// deck. Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        let mut pos = [0usize; 7];
        pos.iter_mut().enumerate().for_each(|(i, p)| *p = i);

        let mut hand = [Card::new(Rank::Ace, Suit::Hearts); 7];
        loop {
            for (h, &p) in hand.iter_mut().zip(&pos[..k]) {
                *h = self.cards[p];
            }

            f(&hand[..k]);

            // Find the rightmost position that can still move forward.
            let mut i = k;
            while i > 0 && pos[i - 1] == n - k + i - 1 {
                i -= 1;
            }

            if i == 0 {
                break;
            }

            pos[i - 1] += 1;
            for j in i..k {
                pos[j] = pos[j - 1] + 1;
            }
        }
    }

    /// Calls the `f` closure for `samples` random k-cards hands.
    ///
    /// Cards are not removed from the deck. Panics if k is not 2 <= k <= 7.
    pub fn sample<R, F>(&self, rng: &mut R, samples: usize, k: usize, mut f: F)
    where
        R: Rng + ?Sized,
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let mut hand = Vec::with_capacity(k);
        for _ in 0..samples {
            hand.clear();
            hand.extend(self.cards.choose_multiple(rng, k).copied());
            f(&hand);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deck_unique_cards() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        assert_eq!(deck.count(), Deck::SIZE);

        while let Some(card) = deck.deal() {
            cards.insert(card);
        }

        assert!(deck.is_empty());
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn deck_draw() {
        let mut deck = Deck::default();

        // Cards are dealt from the end of the deck.
        let board = deck.draw(5);
        assert_eq!(board.len(), 5);
        assert_eq!(board[0], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(board[4], Card::new(Rank::Ten, Suit::Spades));
        assert_eq!(deck.count(), 47);

        // A short deck returns what is left.
        let rest = deck.draw(100);
        assert_eq!(rest.len(), 47);
        assert!(deck.draw(2).is_empty());
        assert_eq!(deck.deal(), None);
    }

    #[test]
    fn deck_seeded_shuffle() {
        let d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
        let d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
        let d3 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(43));

        let c1 = d1.into_iter().collect::<Vec<_>>();
        let c2 = d2.into_iter().collect::<Vec<_>>();
        let c3 = d3.into_iter().collect::<Vec<_>>();
        assert_eq!(c1, c2);
        assert_ne!(c1, c3);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), 50);

        let mut count = 0;
        deck.for_each(6, |cards| {
            assert_eq!(cards.len(), 6);
            count += 1;
        });
        assert_eq!(count, 15_890_700);
    }

    #[test]
    fn deck_for_each_small_deck() {
        let mut deck = Deck::default();
        let _ = deck.draw(46);
        assert_eq!(deck.count(), 6);

        let mut count = 0;
        deck.for_each(7, |_| count += 1);
        assert_eq!(count, 0);

        deck.for_each(6, |_| count += 1);
        assert_eq!(count, 1);
    }

    #[test]
    fn deck_sample() {
        let deck = Deck::default();
        let mut rng = StdRng::seed_from_u64(7);

        let mut count = 0;
        deck.sample(&mut rng, 100, 7, |hand| {
            assert_eq!(hand.len(), 7);
            let unique = hand.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), 7);
            count += 1;
        });
        assert_eq!(count, 100);
    }
}
