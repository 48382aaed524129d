use serde::Serialize;

pub mod negamax;
pub mod randomized;
pub mod weakened;

pub use negamax::{negamax, Solver};
pub use randomized::RandomizedSolver;
pub use weakened::WeakenedSolver;

/// Outcome of a full-line solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Absolute score: positive favors player A, who opens the game.
    pub value: i32,
    /// Best move at the root; `None` when the root is already terminal.
    pub best_move: Option<u8>,
    /// Optimal move sequence from the root down to a terminal node.
    pub principal_variation: Vec<u8>,
    /// Nodes visited while solving, terminal nodes included.
    pub nodes: u64,
}
