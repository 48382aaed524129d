use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::cards::{Card, ParseCardError};
use crate::types::CELL_COUNT;

/// The fixed card layout for one game: 16 distinct cards on cells 0..16,
/// row-major, immutable for the lifetime of a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cards: [Card; CELL_COUNT as usize],
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board must contain exactly {expected} cards, got {got}")]
    CardCount { expected: usize, got: usize },
    #[error("card {0} appears more than once on the board")]
    DuplicateCard(Card),
    #[error(transparent)]
    Card(#[from] ParseCardError),
}

impl Board {
    /// Validates distinctness eagerly; a shuffled full deal always passes.
    pub fn new(cards: [Card; CELL_COUNT as usize]) -> Result<Self, BoardError> {
        let mut seen = 0u16;
        for card in cards {
            let bit = 1u16 << card.index();
            if seen & bit != 0 {
                return Err(BoardError::DuplicateCard(card));
            }
            seen |= bit;
        }
        Ok(Self { cards })
    }

    pub fn from_cards(cards: &[Card]) -> Result<Self, BoardError> {
        let cards: [Card; CELL_COUNT as usize] =
            cards.try_into().map_err(|_| BoardError::CardCount {
                expected: CELL_COUNT as usize,
                got: cards.len(),
            })?;
        Self::new(cards)
    }

    #[inline]
    pub fn card(&self, cell: u8) -> Card {
        self.cards[cell as usize]
    }

    #[inline]
    pub fn cards(&self) -> &[Card; CELL_COUNT as usize] {
        &self.cards
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses 16 whitespace- or comma-separated cards in two-character notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|tok| !tok.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;
        Self::from_cards(&cards)
    }
}
