//! Pieces and their movement directions

use super::{Player, Pos, Rank};

/// Stable handle for a piece, unique within one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u8);

/// Diagonal steps for Player 1 men (towards row 0)
const UP: [(i8, i8); 2] = [(-1, -1), (1, -1)];
/// Diagonal steps for Player 2 men (towards row 7)
const DOWN: [(i8, i8); 2] = [(-1, 1), (1, 1)];
/// Kings go both ways
const ALL: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// A live piece on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub owner: Player,
    pub rank: Rank,
    pub pos: Pos,
}

impl Piece {
    pub fn new(id: PieceId, owner: Player, rank: Rank, pos: Pos) -> Self {
        Self { id, owner, rank, pos }
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    /// Unit diagonal steps this piece may move and capture along
    #[inline]
    pub fn directions(&self) -> &'static [(i8, i8)] {
        match (self.rank, self.owner) {
            (Rank::King, _) => &ALL,
            (Rank::Man, Player::One) => &UP,
            (Rank::Man, Player::Two) => &DOWN,
        }
    }

    /// Man standing on its crowning row
    #[inline]
    pub fn should_promote(&self) -> bool {
        self.rank == Rank::Man && self.pos.y == self.owner.promotion_row()
    }
}
