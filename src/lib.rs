#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)] // 16-cell domain
#![allow(clippy::missing_errors_doc)]

pub mod types;
pub mod rules;
pub mod cards;
pub mod board;
pub mod state;
pub mod hash;

pub mod engine {
    pub mod apply;
    pub mod score;
}

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::{Board, BoardError};
pub use crate::cards::{Card, ParseCardError, Rank, Suit};
pub use crate::engine::apply::{Game, MoveError};
pub use crate::engine::score::{terminal_value, terminal_value_at_root, WIN_SCORE};
pub use crate::hash::node_key;
pub use crate::rules::{is_winning, WIN_PATTERNS};
pub use crate::solver::{negamax, RandomizedSolver, SearchResult, Solver, WeakenedSolver};
pub use crate::state::{Node, NodeError};
pub use crate::types::Player;
