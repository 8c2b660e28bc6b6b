//! King promotion

use crate::board::{Board, PieceId};

/// Crown every man standing on its far row.
///
/// Returns the ids of the pieces promoted by this call.
pub fn check_promotion(board: &mut Board) -> Vec<PieceId> {
    let crowned: Vec<PieceId> = board
        .pieces()
        .iter()
        .filter(|p| p.should_promote())
        .map(|p| p.id)
        .collect();

    for &id in &crowned {
        board.promote(id);
    }

    crowned
}
