use crate::engine::apply::{Game, MoveBuffer};
use crate::engine::score::{loss_score, terminal_value_at_root};
use crate::state::Node;
use crate::types::CELL_COUNT;

use super::negamax::negamax_counted;

/// Deliberately beatable solver: the top-level choice minimizes the mover's
/// resulting score. The weakening is confined to that choice — every child is
/// still evaluated with full correct negamax, so the reported score is the
/// true game-theoretic value of the line entered.
#[derive(Debug, Clone)]
pub struct WeakenedSolver<'a> {
    game: &'a Game,
    node: Node,
}

impl<'a> WeakenedSolver<'a> {
    #[inline]
    pub fn new(game: &'a Game, node: Node) -> Self {
        Self { game, node }
    }

    /// Current position of the play-out cursor.
    #[inline]
    pub fn node(&self) -> Node {
        self.node
    }

    /// Worst move plus absolute score at the cursor; no move when the
    /// position is terminal or blocked.
    pub fn select_move(&self) -> (Option<u8>, i32) {
        let (worst_move, relative) = self.select_move_relative();
        (worst_move, self.node.side_to_move().sign() * relative)
    }

    fn select_move_relative(&self) -> (Option<u8>, i32) {
        if let Some(value) = terminal_value_at_root(&self.node) {
            return (None, value);
        }

        let mut buf: MoveBuffer = [0; CELL_COUNT as usize];
        let count = self.game.populate_legal_moves(&self.node, &mut buf);
        if count == 0 {
            return (None, loss_score(&self.node));
        }

        let mut nodes = 0u64;
        let mut worst_move = None;
        let mut worst = i32::MAX;
        for &cell in &buf[..count] {
            let child = self.game.make_move_unchecked(self.node, cell);
            let value = -negamax_counted(self.game, &child, &mut nodes);
            if value < worst {
                worst = value;
                worst_move = Some(cell);
            }
        }
        (worst_move, worst)
    }

    /// Select and apply one move, advancing the cursor. The score is always
    /// reported; the move is `None` once the game is over.
    pub fn make_move(&mut self) -> (Option<u8>, i32) {
        let (worst_move, score) = self.select_move();
        if let Some(cell) = worst_move {
            self.node = self.game.make_move_unchecked(self.node, cell);
        }
        (worst_move, score)
    }

    /// Play out to a terminal position with both sides weakened, returning
    /// the move line and the score of the opening selection.
    pub fn play_out(&mut self) -> (Vec<u8>, i32) {
        let mut moves = Vec::new();
        let (first, score) = self.make_move();
        let Some(first) = first else {
            return (moves, score);
        };
        moves.push(first);
        loop {
            let (cell, _) = self.make_move();
            let Some(cell) = cell else { break };
            moves.push(cell);
        }
        (moves, score)
    }
}
