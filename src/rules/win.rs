//! Win condition checking
//!
//! A player loses once they have no pieces left. The check runs against the
//! player about to move, right after the turn has been handed over.

use crate::board::{Board, Player};

/// Winner of the game, if `to_move` has been wiped out
pub fn check_winner(board: &Board, to_move: Player) -> Option<Player> {
    if board.count_pieces(to_move) == 0 {
        Some(to_move.opponent())
    } else {
        None
    }
}
