//! Capture rules
//!
//! A piece captures by jumping diagonally over an adjacent enemy onto the
//! empty square directly beyond it. Men jump forward only, kings both ways.
//! Captures are mandatory: if any piece of the player to move can jump,
//! that player must jump.

use crate::board::{Board, Piece, PieceId, Player, Pos};

/// A single available jump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureInfo {
    /// Square the jumping piece lands on
    pub landing: Pos,
    /// Square of the jumped enemy
    pub over: Pos,
    /// The jumped enemy
    pub captured: PieceId,
}

/// Jump along one direction, if the pattern piece - enemy - empty matches
#[inline]
fn jump(board: &Board, piece: &Piece, dx: i8, dy: i8) -> Option<CaptureInfo> {
    let over = piece.pos.offset(dx, dy)?;
    let landing = piece.pos.offset(dx * 2, dy * 2)?;

    if !Board::is_on_board(landing.x as i32, landing.y as i32) || !board.is_empty(landing) {
        return None;
    }

    let enemy = board.piece_at(over)?;
    if enemy.owner == piece.owner {
        return None;
    }

    Some(CaptureInfo {
        landing,
        over,
        captured: enemy.id,
    })
}

/// All jumps available to a piece from its current square
pub fn get_captures(board: &Board, piece: &Piece) -> Vec<CaptureInfo> {
    piece
        .directions()
        .iter()
        .filter_map(|&(dx, dy)| jump(board, piece, dx, dy))
        .collect()
}

/// Check if a piece can jump right now
#[inline]
pub fn can_capture(board: &Board, piece: &Piece) -> bool {
    piece
        .directions()
        .iter()
        .any(|&(dx, dy)| jump(board, piece, dx, dy).is_some())
}

/// Check if any piece of `owner` can jump, i.e. whether a capture is forced
pub fn any_player_can_capture(board: &Board, owner: Player) -> bool {
    board.pieces_of(owner).any(|p| can_capture(board, p))
}

/// Jump that lands on `target`, if the piece has one
pub fn capture_to(board: &Board, piece: &Piece, target: Pos) -> Option<CaptureInfo> {
    let dx = target.x as i32 - piece.pos.x as i32;
    let dy = target.y as i32 - piece.pos.y as i32;
    if dx.abs() != 2 || dy.abs() != 2 {
        return None;
    }

    let step = ((dx / 2) as i8, (dy / 2) as i8);
    if !piece.directions().contains(&step) {
        return None;
    }

    jump(board, piece, step.0, step.1)
}
