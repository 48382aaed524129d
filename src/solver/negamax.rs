use tracing::debug;

use crate::engine::apply::{Game, MoveBuffer};
use crate::engine::score::{loss_score, terminal_value, terminal_value_at_root};
use crate::state::Node;
use crate::types::CELL_COUNT;

use super::SearchResult;

/// Full-depth negamax value of `node`, relative to its side to move.
/// Every legal child is visited; there is no pruning and no caching — the
/// fixed 16-ply horizon keeps the tree small enough for exhaustive search.
pub fn negamax(game: &Game, node: &Node) -> i32 {
    let mut nodes = 0u64;
    negamax_counted(game, node, &mut nodes)
}

pub(crate) fn negamax_counted(game: &Game, node: &Node, nodes: &mut u64) -> i32 {
    *nodes += 1;
    if let Some(value) = terminal_value(node) {
        return value;
    }

    let mut buf: MoveBuffer = [0; CELL_COUNT as usize];
    let count = game.populate_legal_moves(node, &mut buf);
    if count == 0 {
        // Blocked: the mover has no matching cell left and loses.
        return loss_score(node);
    }

    let mut best = i32::MIN;
    for &cell in &buf[..count] {
        let child = game.make_move_unchecked(*node, cell);
        let value = -negamax_counted(game, &child, nodes);
        if value > best {
            best = value;
        }
    }
    best
}

/// Best move and side-relative value at `node`. `(None, value)` when the root
/// itself is terminal or blocked. Ties resolve to the first move encountered
/// in cell order.
pub(crate) fn search_root(game: &Game, node: &Node, nodes: &mut u64) -> (Option<u8>, i32) {
    *nodes += 1;
    if let Some(value) = terminal_value_at_root(node) {
        return (None, value);
    }

    let mut buf: MoveBuffer = [0; CELL_COUNT as usize];
    let count = game.populate_legal_moves(node, &mut buf);
    if count == 0 {
        return (None, loss_score(node));
    }

    let mut best_move = None;
    let mut best = i32::MIN;
    for &cell in &buf[..count] {
        let child = game.make_move_unchecked(*node, cell);
        let value = -negamax_counted(game, &child, nodes);
        if value > best {
            best = value;
            best_move = Some(cell);
        }
    }
    (best_move, best)
}

/// Best-play solver over one fixed board.
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    game: &'a Game,
}

impl<'a> Solver<'a> {
    #[inline]
    pub fn new(game: &'a Game) -> Self {
        Self { game }
    }

    /// Single best move plus absolute score. A terminal root yields no move
    /// and its terminal score; that is an answer, not an error.
    pub fn select_move(&self, node: &Node) -> (Option<u8>, i32) {
        let mut nodes = 0u64;
        let (best_move, relative) = search_root(self.game, node, &mut nodes);
        (best_move, node.side_to_move().sign() * relative)
    }

    /// Full-line solve: repeated best-move selection from `root` down to a
    /// terminal node. The absolute score is constant along the returned line.
    pub fn search(&self, root: &Node) -> SearchResult {
        let mut nodes = 0u64;
        let (best_move, relative) = search_root(self.game, root, &mut nodes);
        let value = root.side_to_move().sign() * relative;

        let mut principal_variation = Vec::new();
        let mut node = *root;
        let mut selected = best_move;
        while let Some(cell) = selected {
            principal_variation.push(cell);
            node = self.game.make_move_unchecked(node, cell);
            let (next, next_relative) = search_root(self.game, &node, &mut nodes);
            debug_assert_eq!(node.side_to_move().sign() * next_relative, value);
            selected = next;
        }

        debug!(
            value,
            nodes,
            line_len = principal_variation.len(),
            "full-line search complete"
        );
        SearchResult {
            value,
            best_move,
            principal_variation,
            nodes,
        }
    }
}
