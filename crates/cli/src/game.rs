// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown prediction game.
//!
//! Each round deals a board and a number of hands, shows the player the first
//! hand and asks whether it will win, then evaluates all the hands and tells
//! the player if the prediction was right.
use anyhow::Result;
use log::{debug, info};
use rand::prelude::*;
use std::{
    fmt,
    io::{BufRead, Write},
};

use showdown_eval::{Card, Deck, HandCategory, Rules, Showdown, showdown};

/// Number of community cards.
const BOARD_SIZE: usize = 5;

/// Game config.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Number of hands to deal each round, if not set the player is asked.
    pub hands: Option<usize>,
    /// The rules used to evaluate hands.
    pub rules: Rules,
}

/// Errors for an invalid number of hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The number of hands is not a number.
    InvalidNumber,
    /// The number of hands is less than one.
    TooFewHands,
    /// The deck doesn't have enough cards for the hands and the board.
    NotEnoughCards(i64),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidNumber => write!(f, "Please enter a valid number for the hands."),
            GameError::TooFewHands => write!(f, "The number of hands must be at least 1."),
            GameError::NotEnoughCards(n) => write!(
                f,
                "Not enough cards to deal {n} hands. Please enter a smaller number."
            ),
        }
    }
}

impl std::error::Error for GameError {}

/// Checks that a deck with `deck_size` cards can deal a board and `hands` hands.
pub fn check_hands(hands: i64, deck_size: usize) -> Result<usize, GameError> {
    if hands < 1 {
        return Err(GameError::TooFewHands);
    }

    let needed = hands
        .checked_mul(2)
        .and_then(|n| n.checked_add(BOARD_SIZE as i64));
    match (needed, usize::try_from(hands)) {
        (Some(needed), Ok(hands)) if needed as u64 <= deck_size as u64 => Ok(hands),
        _ => Err(GameError::NotEnoughCards(hands)),
    }
}

/// Parses the number of hands entered by the player.
pub fn parse_hands(line: &str, deck_size: usize) -> Result<usize, GameError> {
    let hands = line
        .trim()
        .parse::<i64>()
        .map_err(|_| GameError::InvalidNumber)?;
    check_hands(hands, deck_size)
}

/// The player prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction {
    /// The player hand wins.
    Win,
    /// The player hand loses.
    Lose,
    /// Anything else, never correct.
    Unknown,
}

impl Prediction {
    /// Parses a prediction ignoring case and whitespace.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "win" => Prediction::Win,
            "lose" => Prediction::Lose,
            _ => Prediction::Unknown,
        }
    }

    /// Checks the prediction given whether the player won.
    pub fn is_correct(&self, player_won: bool) -> bool {
        matches!(
            (self, player_won),
            (Prediction::Win, true) | (Prediction::Lose, false)
        )
    }
}

/// The cards dealt for a round.
#[derive(Debug, Clone)]
pub struct Round {
    /// The community cards.
    pub board: Vec<Card>,
    /// Each hand hole cards, the first hand is the player hand.
    pub hands: Vec<[Card; 2]>,
}

impl Round {
    /// Deals the board and then two cards for each hand.
    pub fn deal(deck: &mut Deck, hands: usize) -> Result<Round, GameError> {
        let not_enough = || GameError::NotEnoughCards(hands as i64);

        let board = deck.draw(BOARD_SIZE);
        if board.len() < BOARD_SIZE {
            return Err(not_enough());
        }

        let hands = (0..hands)
            .map(|_| match (deck.deal(), deck.deal()) {
                (Some(c1), Some(c2)) => Ok([c1, c2]),
                _ => Err(not_enough()),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Round { board, hands })
    }
}

/// The prediction game.
#[derive(Debug)]
pub struct Game<R> {
    config: Config,
    rng: R,
}

impl<R: Rng> Game<R> {
    /// Creates a game that shuffles decks with the given rng.
    pub fn new(config: Config, rng: R) -> Self {
        Self { config, rng }
    }

    /// Runs rounds until the player doesn't want to play again or the input
    /// is closed.
    pub fn run(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
        let mut rounds = 0;
        loop {
            if !self.play_round(input, out)? {
                break;
            }

            rounds += 1;

            write!(out, "\nDo you want to play again? (yes/no): ")?;
            out.flush()?;

            match read_line(input)? {
                Some(answer) if answer.to_lowercase() == "yes" => continue,
                _ => break,
            }
        }

        info!("Played {rounds} rounds");
        writeln!(out, "Thank you for playing!")?;

        Ok(())
    }

    /// Plays a round, returns false if the input was closed.
    fn play_round(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> Result<bool> {
        let mut deck = Deck::new_and_shuffled(&mut self.rng);

        let res = match self.config.hands {
            Some(hands) => check_hands(hands as i64, deck.count()),
            None => {
                write!(out, "Enter the number of hands to deal: ")?;
                out.flush()?;

                let Some(line) = read_line(input)? else {
                    return Ok(false);
                };

                parse_hands(&line, deck.count())
            }
        };

        let round = match res.and_then(|hands| Round::deal(&mut deck, hands)) {
            Ok(round) => round,
            Err(e) => {
                debug!("Invalid number of hands: {e}");
                writeln!(out, "{e}")?;
                return Ok(true);
            }
        };

        writeln!(out, "Cards on the table: {}", join(&round.board))?;

        let showdown = Showdown::new(&round.board).with_rules(self.config.rules);
        let categories = showdown.eval_hands(&round.hands);

        let player_hand = &round.hands[0];
        writeln!(
            out,
            "Your Hand: {} | Hand Type: {}",
            join(player_hand),
            categories[0]
        )?;

        write!(out, "Do you predict you will win or lose? (win/lose): ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(false);
        };
        let prediction = Prediction::parse(&line);

        for (idx, (hand, category)) in round.hands.iter().zip(&categories).enumerate() {
            print_hand(out, idx, hand, *category)?;
        }

        if let Some(winner) = showdown::winner(&categories) {
            writeln!(
                out,
                "\nThe winner is Hand {} with a {}!",
                winner.index + 1,
                winner.category
            )?;

            let player_won = winner.index == 0;
            info!(
                "Winner hand {} {}, player prediction {prediction:?}",
                winner.index + 1,
                winner.category
            );

            if prediction.is_correct(player_won) {
                writeln!(out, "Your prediction was correct!")?;
            } else {
                writeln!(out, "Your prediction was incorrect.")?;
            }
        }

        Ok(true)
    }
}

fn print_hand(w: &mut impl Write, idx: usize, hand: &[Card], category: HandCategory) -> Result<()> {
    if idx == 0 {
        writeln!(w, "Your Hand: {} | Hand Type: {category}", join(hand))?;
    } else {
        writeln!(w, "Hand {}: {} | Hand Type: {category}", idx + 1, join(hand))?;
    }

    Ok(())
}

fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reads a trimmed line, returns `None` at the end of the input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    fn play(config: Config, seed: u64, input: &str) -> String {
        let mut game = Game::new(config, StdRng::seed_from_u64(seed));
        let mut out = Vec::new();
        game.run(&mut input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn hands_validation() {
        assert_eq!(parse_hands("3", Deck::SIZE), Ok(3));
        assert_eq!(parse_hands(" 23 ", Deck::SIZE), Ok(23));
        assert_eq!(parse_hands("abc", Deck::SIZE), Err(GameError::InvalidNumber));
        assert_eq!(parse_hands("", Deck::SIZE), Err(GameError::InvalidNumber));
        assert_eq!(parse_hands("0", Deck::SIZE), Err(GameError::TooFewHands));
        assert_eq!(parse_hands("-4", Deck::SIZE), Err(GameError::TooFewHands));
        assert_eq!(
            parse_hands("24", Deck::SIZE),
            Err(GameError::NotEnoughCards(24))
        );
        assert_eq!(
            check_hands(i64::MAX, Deck::SIZE),
            Err(GameError::NotEnoughCards(i64::MAX))
        );

        assert_eq!(
            GameError::NotEnoughCards(30).to_string(),
            "Not enough cards to deal 30 hands. Please enter a smaller number."
        );
    }

    #[test]
    fn prediction() {
        assert_eq!(Prediction::parse(" WIN "), Prediction::Win);
        assert_eq!(Prediction::parse("lose"), Prediction::Lose);
        assert_eq!(Prediction::parse("maybe"), Prediction::Unknown);

        assert!(Prediction::Win.is_correct(true));
        assert!(!Prediction::Win.is_correct(false));
        assert!(Prediction::Lose.is_correct(false));
        assert!(!Prediction::Lose.is_correct(true));
        assert!(!Prediction::Unknown.is_correct(true));
        assert!(!Prediction::Unknown.is_correct(false));
    }

    #[test]
    fn round_deal() {
        let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(1));
        let round = Round::deal(&mut deck, 23).unwrap();
        assert_eq!(round.board.len(), 5);
        assert_eq!(round.hands.len(), 23);
        assert_eq!(deck.count(), 1);

        let cards = round
            .board
            .iter()
            .chain(round.hands.iter().flatten())
            .collect::<HashSet<_>>();
        assert_eq!(cards.len(), 51);

        let mut deck = Deck::default();
        assert_eq!(
            Round::deal(&mut deck, 24).unwrap_err(),
            GameError::NotEnoughCards(24)
        );
    }

    #[test]
    fn game_round() {
        let output = play(Config::default(), 42, "3\nwin\nno\n");

        assert!(output.starts_with("Enter the number of hands to deal: Cards on the table: "));
        assert_eq!(output.matches("Your Hand: ").count(), 2);
        assert!(output.contains("Do you predict you will win or lose? (win/lose): "));
        assert!(output.contains("Hand 2: "));
        assert!(output.contains("Hand 3: "));
        assert!(!output.contains("Hand 4: "));
        assert!(output.contains("The winner is Hand "));
        assert!(output.contains("Your prediction was"));
        assert!(output.ends_with("Do you want to play again? (yes/no): Thank you for playing!\n"));
    }

    #[test]
    fn game_prediction_outcome() {
        // Winning and losing predictions are complementary for the same deal.
        let win = play(Config::default(), 7, "4\nwin\nno\n");
        let lose = play(Config::default(), 7, "4\nlose\nno\n");

        let win_correct = win.contains("Your prediction was correct!");
        let lose_correct = lose.contains("Your prediction was correct!");
        assert_ne!(win_correct, lose_correct);

        let player_won = win.contains("The winner is Hand 1 ");
        assert_eq!(win_correct, player_won);
    }

    #[test]
    fn game_is_deterministic() {
        let o1 = play(Config::default(), 99, "5\nlose\nyes\n2\nwin\nno\n");
        let o2 = play(Config::default(), 99, "5\nlose\nyes\n2\nwin\nno\n");
        assert_eq!(o1, o2);
        assert_eq!(o1.matches("Cards on the table: ").count(), 2);
    }

    #[test]
    fn game_invalid_hands() {
        let output = play(Config::default(), 1, "abc\nyes\n0\nyes\n30\nno\n");
        assert!(output.contains("Please enter a valid number for the hands.\n"));
        assert!(output.contains("The number of hands must be at least 1.\n"));
        assert!(output.contains(
            "Not enough cards to deal 30 hands. Please enter a smaller number.\n"
        ));
        assert!(!output.contains("Cards on the table: "));
        assert_eq!(output.matches("Do you want to play again?").count(), 3);
    }

    #[test]
    fn game_closed_input() {
        let output = play(Config::default(), 1, "");
        assert_eq!(
            output,
            "Enter the number of hands to deal: Thank you for playing!\n"
        );

        // Input closed before the prediction.
        let output = play(Config::default(), 1, "2\n");
        assert!(output.contains("Do you predict you will win or lose?"));
        assert!(!output.contains("The winner is"));
        assert!(output.ends_with("Thank you for playing!\n"));
    }

    #[test]
    fn game_configured_hands() {
        let config = Config {
            hands: Some(6),
            rules: Rules::standard(),
        };

        let output = play(config, 3, "win\nyes\nlose\nno\n");
        assert!(!output.contains("Enter the number of hands"));
        assert_eq!(output.matches("Cards on the table: ").count(), 2);
        assert_eq!(output.matches("Hand 6: ").count(), 2);
    }
}
