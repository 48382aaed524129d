use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    #[inline]
    pub fn index(self) -> u8 {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        }
    }

    #[inline]
    fn from_index(idx: u8) -> Self {
        debug_assert!(idx < 4);
        Self::ALL[(idx & 0b11) as usize]
    }

    /// Unicode glyph used by the two-character card notation.
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Suit::Clubs => '\u{2663}',
            Suit::Diamonds => '\u{2666}',
            Suit::Hearts => '\u{2665}',
            Suit::Spades => '\u{2660}',
        }
    }

    /// ASCII fallback letter accepted on parse.
    #[inline]
    pub fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    #[inline]
    fn from_symbol(ch: char) -> Option<Self> {
        let ch = if ch.is_ascii() { ch.to_ascii_uppercase() } else { ch };
        Suit::ALL
            .into_iter()
            .find(|s| s.glyph() == ch || s.letter() == ch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 4] = [Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

    #[inline]
    pub fn index(self) -> u8 {
        match self {
            Rank::Jack => 0,
            Rank::Queen => 1,
            Rank::King => 2,
            Rank::Ace => 3,
        }
    }

    #[inline]
    fn from_index(idx: u8) -> Self {
        debug_assert!(idx < 4);
        Self::ALL[(idx & 0b11) as usize]
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    #[inline]
    fn from_symbol(ch: char) -> Option<Self> {
        let ch = ch.to_ascii_uppercase();
        Rank::ALL.into_iter().find(|r| r.symbol() == ch)
    }
}

/// One of the 16 distinct cards, packed as `suit << 2 | rank`.
///
/// The packing is part of the board-input contract: a board may be supplied
/// as raw card indices in 0..16 as well as in two-character notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card(u8);

impl Card {
    #[inline]
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Card(suit.index() << 2 | rank.index())
    }

    /// Decode a raw card index; `None` when outside 0..16.
    #[inline]
    pub fn from_index(idx: u8) -> Option<Self> {
        (idx < 16).then_some(Card(idx))
    }

    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn suit(self) -> Suit {
        Suit::from_index(self.0 >> 2)
    }

    #[inline]
    pub fn rank(self) -> Rank {
        Rank::from_index(self.0 & 0b11)
    }

    /// Whether a follow-up card may legally be played after this one.
    #[inline]
    pub fn matches(self, other: Card) -> bool {
        self.rank() == other.rank() || self.suit() == other.suit()
    }

    /// Non-throwing twin of the `FromStr` parse.
    #[inline]
    pub fn try_parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseCardError {
    #[error("card notation must be exactly two characters, got {0:?}")]
    Length(String),
    #[error("unknown rank symbol {0:?}, expected one of J, Q, K, A")]
    Rank(char),
    #[error("unknown suit symbol {0:?}, expected a suit glyph or C, D, H, S")]
    Suit(char),
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank().symbol(), self.suit().glyph())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the two-character notation: rank symbol then suit glyph,
    /// with C/D/H/S accepted in place of the glyph.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseCardError::Length(s.to_owned()));
        };
        let rank = Rank::from_symbol(rank_ch).ok_or(ParseCardError::Rank(rank_ch))?;
        let suit = Suit::from_symbol(suit_ch).ok_or(ParseCardError::Suit(suit_ch))?;
        Ok(Card::new(suit, rank))
    }
}
