use tracing::trace;

use crate::engine::apply::{Game, MoveBuffer};
use crate::engine::score::{loss_score, terminal_value_at_root};
use crate::hash::node_key;
use crate::state::Node;
use crate::types::CELL_COUNT;

use super::negamax::negamax_counted;

/// Best-play solver with position-dependent tie-breaking: move enumeration
/// starts at an offset derived from the stable node key, so score-tied moves
/// resolve differently across structurally different positions while staying
/// perfectly reproducible for a fixed node. No process randomness is involved.
#[derive(Debug, Clone)]
pub struct RandomizedSolver<'a> {
    game: &'a Game,
    node: Node,
}

impl<'a> RandomizedSolver<'a> {
    #[inline]
    pub fn new(game: &'a Game, node: Node) -> Self {
        Self { game, node }
    }

    /// Current position of the play-out cursor.
    #[inline]
    pub fn node(&self) -> Node {
        self.node
    }

    /// Best move plus absolute score at the cursor; no move when the position
    /// is terminal or blocked.
    pub fn select_move(&self) -> (Option<u8>, i32) {
        let (best_move, relative) = self.select_move_relative();
        (best_move, self.node.side_to_move().sign() * relative)
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

        let start = (node_key(&self.node) % count as u64) as usize;
        let mut nodes = 0u64;
        let mut best_move = None;
        let mut best = i32::MIN;
        for offset in 0..count {
            let cell = buf[(start + offset) % count];
            let child = self.game.make_move_unchecked(self.node, cell);
            let value = -negamax_counted(self.game, &child, &mut nodes);
            if value > best {
                best = value;
                best_move = Some(cell);
            }
        }
        trace!(start, count, nodes, "rotated move selection");
        (best_move, best)
    }

    /// Select and apply one move, advancing the cursor. The score is always
    /// reported; the move is `None` once the game is over.
    pub fn make_move(&mut self) -> (Option<u8>, i32) {
        let (best_move, score) = self.select_move();
        if let Some(cell) = best_move {
            self.node = self.game.make_move_unchecked(self.node, cell);
        }
        (best_move, score)
    }

    /// Play out to a terminal position, returning the move line and the
    /// (constant, optimal) absolute score.
    pub fn play_out(&mut self) -> (Vec<u8>, i32) {
        let mut moves = Vec::new();
        let (first, score) = self.make_move();
        let Some(first) = first else {
            return (moves, score);
        };
        moves.push(first);
        loop {
            let (cell, step_score) = self.make_move();
            let Some(cell) = cell else { break };
            debug_assert_eq!(step_score, score);
            moves.push(cell);
        }
        (moves, score)
    }
}
