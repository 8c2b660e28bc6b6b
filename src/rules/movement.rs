//! Move legality for single steps and jumps

use thiserror::Error;

use crate::board::{Board, Piece, PieceId, Pos};

use super::capture::{capture_to, get_captures};

/// Why a command was ignored. No rejection changes the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejected {
    #[error("game is over")]
    GameOver,
    #[error("no piece selected")]
    NoSelection,
    #[error("no piece on {0}")]
    NoPiece(Pos),
    #[error("not this player's turn")]
    NotYourTurn,
    #[error("a capture is available and must be taken")]
    MustCapture,
    #[error("the capturing piece must continue its chain")]
    ChainLocked,
    #[error("piece is already selected")]
    AlreadySelected,
    #[error("{0} is not a playable square")]
    OffBoard(Pos),
    #[error("{0} is occupied")]
    Occupied(Pos),
    #[error("piece cannot reach {0}")]
    IllegalDelta(Pos),
}

/// Kind of a legal move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// One diagonal step
    Simple,
    /// Two diagonal steps over an enemy
    Capture { captured: PieceId, over: Pos },
}

/// Classify a move of `piece` onto `target`.
///
/// `must_capture` restricts the piece to jumps (forced capture).
pub fn classify_move(
    board: &Board,
    piece: &Piece,
    target: Pos,
    must_capture: bool,
) -> Result<MoveKind, MoveRejected> {
    if !Board::is_on_board(target.x as i32, target.y as i32) {
        return Err(MoveRejected::OffBoard(target));
    }
    if !board.is_empty(target) {
        return Err(MoveRejected::Occupied(target));
    }

    let dx = target.x as i32 - piece.pos.x as i32;
    let dy = target.y as i32 - piece.pos.y as i32;

    if dx.abs() == 1 && dy.abs() == 1 {
        if !piece.directions().contains(&(dx as i8, dy as i8)) {
            return Err(MoveRejected::IllegalDelta(target));
        }
        if must_capture {
            return Err(MoveRejected::MustCapture);
        }
        return Ok(MoveKind::Simple);
    }

    match capture_to(board, piece, target) {
        Some(info) => Ok(MoveKind::Capture {
            captured: info.captured,
            over: info.over,
        }),
        None => Err(MoveRejected::IllegalDelta(target)),
    }
}

/// Empty squares one diagonal step away in the piece's directions
pub fn simple_targets(board: &Board, piece: &Piece) -> Vec<Pos> {
    piece
        .directions()
        .iter()
        .filter_map(|&(dx, dy)| piece.pos.offset(dx, dy))
        .filter(|&pos| board.is_empty(pos))
        .collect()
}

/// Squares the piece may move to. Only jumps when a capture is forced.
pub fn legal_targets(board: &Board, piece: &Piece, must_capture: bool) -> Vec<Pos> {
    let mut targets: Vec<Pos> = get_captures(board, piece).iter().map(|c| c.landing).collect();
    if !must_capture {
        targets.extend(simple_targets(board, piece));
    }
    targets
}
