use thiserror::Error;

use crate::board::Board;
use crate::cards::Card;
use crate::state::{Node, NodeError};
use crate::types::{is_center_block, CELL_COUNT};

/// Scratch buffer for candidate-move enumeration. A stack-allocated array of
/// board size; each enumeration fully owns the buffer it is handed.
pub type MoveBuffer = [u8; CELL_COUNT as usize];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("cell {0} is outside the 16 board cells")]
    OutOfRange(u8),
    #[error("the opening move may not target the center block (cell {0})")]
    CenterBlockOpening(u8),
    #[error("card {card} at cell {cell} shares neither rank nor suit with the last card {last}")]
    NoRankOrSuitMatch { cell: u8, card: Card, last: Card },
    #[error("cell {0} already carries a token")]
    Occupied(u8),
}

/// Rules engine: owns the immutable card layout and derives legality,
/// move application and nothing else. All state lives in [`Node`] values.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
}

impl Game {
    #[inline]
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Card on the cell played last, if any move has been made.
    #[inline]
    fn last_card(&self, node: &Node) -> Option<Card> {
        node.last_cell().map(|cell| self.board.card(cell))
    }

    /// Fill `out` with the legal moves at `node`, returning the count.
    ///
    /// Opening: every cell except the center block. Afterwards: unoccupied
    /// cells whose card shares rank or suit with the last-played card.
    pub fn populate_legal_moves(&self, node: &Node, out: &mut MoveBuffer) -> usize {
        let mut count = 0usize;
        match self.last_card(node) {
            None => {
                for cell in 0..CELL_COUNT {
                    if is_center_block(cell) {
                        continue;
                    }
                    out[count] = cell;
                    count += 1;
                }
            }
            Some(last) => {
                let occupied = node.occupied();
                for cell in 0..CELL_COUNT {
                    if occupied & (1 << cell) != 0 {
                        continue;
                    }
                    if !last.matches(self.board.card(cell)) {
                        continue;
                    }
                    out[count] = cell;
                    count += 1;
                }
            }
        }
        count
    }

    /// Allocating convenience wrapper around [`Self::populate_legal_moves`].
    pub fn legal_moves(&self, node: &Node) -> Vec<u8> {
        let mut buf: MoveBuffer = [0; CELL_COUNT as usize];
        let count = self.populate_legal_moves(node, &mut buf);
        buf[..count].to_vec()
    }

    /// Strict move application: validates the move and names the violated
    /// rule on failure.
    pub fn make_move(&self, node: Node, cell: u8) -> Result<Node, MoveError> {
        if cell >= CELL_COUNT {
            return Err(MoveError::OutOfRange(cell));
        }
        match self.last_card(&node) {
            Some(last) => {
                let card = self.board.card(cell);
                if !last.matches(card) {
                    return Err(MoveError::NoRankOrSuitMatch { cell, card, last });
                }
            }
            None => {
                if is_center_block(cell) {
                    return Err(MoveError::CenterBlockOpening(cell));
                }
            }
        }
        match node.add_token(cell) {
            Ok(child) => Ok(child),
            Err(NodeError::CellOccupied(c)) => Err(MoveError::Occupied(c)),
            Err(_) => unreachable!("cell range was validated above"),
        }
    }

    /// Non-throwing twin of [`Self::make_move`]: `None` on any illegal move,
    /// leaving the caller's node untouched.
    #[inline]
    pub fn try_make_move(&self, node: Node, cell: u8) -> Option<Node> {
        self.make_move(node, cell).ok()
    }

    /// Trusts that `cell` came out of legal-move generation for `node`.
    #[inline]
    pub fn make_move_unchecked(&self, node: Node, cell: u8) -> Node {
        debug_assert!(cell < CELL_COUNT);
        debug_assert!(match self.last_card(&node) {
            Some(last) => last.matches(self.board.card(cell)),
            None => !is_center_block(cell),
        });
        node.add_token_unchecked(cell)
    }
}
