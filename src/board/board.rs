//! Board structure holding the live pieces

use thiserror::Error;

use super::piece::{Piece, PieceId};
use super::{Player, Pos, Rank, BOARD_SIZE};

/// Rejected custom position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("square {0} is not a playable square")]
    NotPlayable(Pos),
    #[error("square {0} is already occupied")]
    Occupied(Pos),
}

/// Game board: the unordered set of live pieces
#[derive(Debug, Clone)]
pub struct Board {
    pieces: Vec<Piece>,
    /// Next id handed out by `add_piece`
    next_id: u8,
}

impl Board {
    /// Empty board
    pub fn new() -> Self {
        Self {
            pieces: Vec::with_capacity(24),
            next_id: 0,
        }
    }

    /// Standard opening: Player 2 on rows 0-2, Player 1 on rows 5-7
    pub fn standard() -> Self {
        let mut board = Self::new();
        let size = BOARD_SIZE as u8;

        for y in 0..size {
            if (3..=4).contains(&y) {
                continue;
            }
            let owner = if y >= 4 { Player::One } else { Player::Two };

            for x in 0..size {
                let pos = Pos::new(x, y);
                if pos.is_dark() {
                    board.push(owner, Rank::Man, pos);
                }
            }
        }

        board
    }

    /// Build an arbitrary position
    pub fn from_pieces(pieces: &[(Player, Rank, Pos)]) -> Result<Self, BoardError> {
        let mut board = Self::new();
        for &(owner, rank, pos) in pieces {
            board.add_piece(owner, rank, pos)?;
        }
        Ok(board)
    }

    /// Add a piece, keeping the one-piece-per-dark-square invariant
    pub fn add_piece(&mut self, owner: Player, rank: Rank, pos: Pos) -> Result<PieceId, BoardError> {
        if !Self::is_on_board(pos.x as i32, pos.y as i32) {
            return Err(BoardError::NotPlayable(pos));
        }
        if self.piece_at(pos).is_some() {
            return Err(BoardError::Occupied(pos));
        }
        Ok(self.push(owner, rank, pos))
    }

    fn push(&mut self, owner: Player, rank: Rank, pos: Pos) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.pieces.push(Piece::new(id, owner, rank, pos));
        id
    }

    /// Whether `(x, y)` is inside the board and on a playable square
    #[inline]
    pub fn is_on_board(x: i32, y: i32) -> bool {
        Pos::is_playable(x, y)
    }

    /// Piece occupying a square
    #[inline]
    pub fn piece_at(&self, pos: Pos) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.pos == pos)
    }

    /// Check if square is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.piece_at(pos).is_none()
    }

    /// Look up a piece by id
    #[inline]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    #[inline]
    fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.iter_mut().find(|p| p.id == id)
    }

    /// All live pieces, in no particular order
    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Live pieces of one player
    pub fn pieces_of(&self, owner: Player) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(move |p| p.owner == owner)
    }

    /// Number of live pieces of a player
    #[inline]
    pub fn count_pieces(&self, owner: Player) -> usize {
        self.pieces_of(owner).count()
    }

    /// Remove a piece by id
    pub fn remove_piece(&mut self, id: PieceId) -> Option<Piece> {
        let idx = self.pieces.iter().position(|p| p.id == id)?;
        Some(self.pieces.swap_remove(idx))
    }

    /// Relocate a piece (without legality checks).
    /// Use `Game::attempt_move` for game moves.
    pub fn move_piece(&mut self, id: PieceId, to: Pos) -> bool {
        debug_assert!(self.is_empty(to));
        match self.get_mut(id) {
            Some(piece) => {
                piece.pos = to;
                true
            }
            None => false,
        }
    }

    /// Crown a piece
    pub fn promote(&mut self, id: PieceId) {
        if let Some(piece) = self.get_mut(id) {
            piece.rank = Rank::King;
        }
    }

    /// Total pieces on board
    #[inline]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
