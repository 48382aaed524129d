use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Player, CELL_COUNT, TOKENS_MASK};

/// Immutable game-state value: whose turn it is, both players' token sets and
/// the most recently played cell. Moves produce a new `Node`; an existing one
/// is never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    tokens_a: u16,
    tokens_b: u16,
    side_to_move: Player,
    last_cell: Option<u8>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NodeError {
    #[error("cell {0} is outside the 16 board cells")]
    CellOutOfRange(u8),
    #[error("cell {0} already carries a token")]
    CellOccupied(u8),
    #[error("player token sets overlap on mask {0:#06x}")]
    OverlappingTokens(u16),
    #[error("last cell {0} carries no token of either player")]
    LastCellVacant(u8),
    #[error("a position with tokens on the board must name its last-played cell")]
    MissingLastCell,
}

impl Default for Node {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}

impl Node {
    /// The empty start position: no tokens, player A to move, no last cell.
    #[inline]
    pub fn initial() -> Self {
        Self {
            tokens_a: 0,
            tokens_b: 0,
            side_to_move: Player::A,
            last_cell: None,
        }
    }

    /// Reconstruct a mid-game position from raw parts, validating every
    /// invariant eagerly. Used when resuming analysis from external state.
    pub fn from_parts(
        tokens_a: u16,
        tokens_b: u16,
        side_to_move: Player,
        last_cell: Option<u8>,
    ) -> Result<Self, NodeError> {
        let overlap = tokens_a & tokens_b;
        if overlap != 0 {
            return Err(NodeError::OverlappingTokens(overlap));
        }
        let occupied = tokens_a | tokens_b;
        match last_cell {
            Some(cell) => {
                if cell >= CELL_COUNT {
                    return Err(NodeError::CellOutOfRange(cell));
                }
                if occupied & (1 << cell) == 0 {
                    return Err(NodeError::LastCellVacant(cell));
                }
            }
            None => {
                if occupied != 0 {
                    return Err(NodeError::MissingLastCell);
                }
            }
        }
        Ok(Self {
            tokens_a,
            tokens_b,
            side_to_move,
            last_cell,
        })
    }

    #[inline]
    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    #[inline]
    pub fn tokens(&self, player: Player) -> u16 {
        match player {
            Player::A => self.tokens_a,
            Player::B => self.tokens_b,
        }
    }

    /// Token set of the side about to move.
    #[inline]
    pub fn mover_tokens(&self) -> u16 {
        self.tokens(self.side_to_move)
    }

    /// Token set of the side that just moved.
    #[inline]
    pub fn opponent_tokens(&self) -> u16 {
        self.tokens(self.side_to_move.other())
    }

    /// Cells occupied by either player.
    #[inline]
    pub fn occupied(&self) -> u16 {
        self.tokens_a | self.tokens_b
    }

    /// Plies played so far.
    #[inline]
    pub fn token_count(&self) -> u32 {
        self.occupied().count_ones()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied() == TOKENS_MASK
    }

    /// The most recently played cell; `None` only at the empty start.
    #[inline]
    pub fn last_cell(&self) -> Option<u8> {
        self.last_cell
    }

    /// Place the mover's token on `cell`, flip the side to move and record the
    /// cell as last played. Fails on an occupied (or out-of-range) cell.
    pub fn add_token(self, cell: u8) -> Result<Self, NodeError> {
        if cell >= CELL_COUNT {
            return Err(NodeError::CellOutOfRange(cell));
        }
        if self.occupied() & (1 << cell) != 0 {
            return Err(NodeError::CellOccupied(cell));
        }
        Ok(self.add_token_unchecked(cell))
    }

    /// Occupancy-unchecked transition for the search hot path; callers must
    /// have filtered `cell` through legal-move generation first.
    #[inline]
    pub fn add_token_unchecked(self, cell: u8) -> Self {
        debug_assert!(cell < CELL_COUNT);
        debug_assert!(self.occupied() & (1 << cell) == 0);
        let bit = 1u16 << cell;
        let (tokens_a, tokens_b) = match self.side_to_move {
            Player::A => (self.tokens_a | bit, self.tokens_b),
            Player::B => (self.tokens_a, self.tokens_b | bit),
        };
        Self {
            tokens_a,
            tokens_b,
            side_to_move: self.side_to_move.other(),
            last_cell: Some(cell),
        }
    }

    /// Canonical bit packing of the whole state, the domain of the stable
    /// node key in [`crate::hash`].
    #[inline]
    pub fn packed(&self) -> u64 {
        let side: u64 = match self.side_to_move {
            Player::A => 0,
            Player::B => 1,
        };
        let last: u64 = match self.last_cell {
            Some(cell) => u64::from(cell) + 1,
            None => 0,
        };
        u64::from(self.tokens_a) | (u64::from(self.tokens_b) << 16) | (side << 32) | (last << 40)
    }
}
