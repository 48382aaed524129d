use serde::{Deserialize, Serialize};

/// Number of board cells (and cards): a 4x4 grid.
pub const CELL_COUNT: u8 = 16;

/// All 16 cell bits set.
pub const TOKENS_MASK: u16 = 0xFFFF;

/// The 2x2 interior block {5, 6, 9, 10}; barred as an opening move.
pub const CENTER_BLOCK_MASK: u16 = (1 << 5) | (1 << 6) | (1 << 9) | (1 << 10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Sign for converting a side-relative score into an absolute one
    /// (positive favors player A, who moves first from the initial state).
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Player::A => 1,
            Player::B => -1,
        }
    }
}

/// Board indexing helpers (4x4 board)
#[inline]
pub fn idx_to_rc(idx: u8) -> (u8, u8) {
    debug_assert!(idx < CELL_COUNT);
    (idx / 4, idx % 4)
}

#[inline]
pub fn rc_to_idx(r: u8, c: u8) -> Option<u8> {
    if r < 4 && c < 4 {
        Some(r * 4 + c)
    } else {
        None
    }
}

/// True for the four interior cells that are barred as opening moves.
#[inline]
pub fn is_center_block(cell: u8) -> bool {
    cell < CELL_COUNT && CENTER_BLOCK_MASK & (1 << cell) != 0
}
