use crate::rules::is_winning;
use crate::state::Node;

/// Magnitude of an immediate win. Scores shrink toward zero by one per token
/// already on the board, so a forced win prefers the shortest line and a
/// forced loss the longest.
pub const WIN_SCORE: i32 = 127;

/// Loss for the side to move at `node`.
#[inline]
pub fn loss_score(node: &Node) -> i32 {
    node.token_count() as i32 - WIN_SCORE
}

/// Win for the side to move at `node`.
#[inline]
pub fn win_score(node: &Node) -> i32 {
    WIN_SCORE - node.token_count() as i32
}

/// Terminal value relative to the side to move, or `None` while play
/// continues: a covered opponent pattern is a loss, a full board a draw.
///
/// A mover whose own tokens cover a pattern cannot be reached by legal
/// self-play; that case is asserted, not scored.
#[inline]
pub fn terminal_value(node: &Node) -> Option<i32> {
    if is_winning(node.opponent_tokens()) {
        return Some(loss_score(node));
    }
    debug_assert!(!is_winning(node.mover_tokens()));
    node.is_full().then_some(0)
}

/// Root variant of [`terminal_value`]: additionally recognizes a mover whose
/// tokens already cover a pattern. An externally supplied root may legally be
/// in that state and must not be mis-scored.
#[inline]
pub fn terminal_value_at_root(node: &Node) -> Option<i32> {
    if is_winning(node.opponent_tokens()) {
        return Some(loss_score(node));
    }
    if is_winning(node.mover_tokens()) {
        return Some(win_score(node));
    }
    node.is_full().then_some(0)
}
