//! Board representation for checkers

pub mod board;
pub mod piece;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::{Board, BoardError};
pub use piece::{Piece, PieceId};

use std::fmt;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
/// Pieces each player starts with
pub const PIECES_PER_PLAYER: usize = 12;

/// The two sides sharing the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Starts on rows 5-7 and moves first
    One,
    /// Starts on rows 0-2
    Two,
}

impl Player {
    /// Get opponent
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Row step a man of this player takes when moving forward
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Player::One => -1,
            Player::Two => 1,
        }
    }

    /// Row on which this player's men are crowned
    #[inline]
    pub fn promotion_row(self) -> u8 {
        match self {
            Player::One => 0,
            Player::Two => BOARD_SIZE as u8 - 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Piece rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Man,
    King,
}

/// Square on the board. `x` is the column, `y` the row (row 0 at the top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < BOARD_SIZE as u8 && y < BOARD_SIZE as u8);
        Self { x, y }
    }

    /// Inside the 8x8 grid, regardless of colour
    #[inline]
    pub fn is_valid(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_SIZE as i32 && y >= 0 && y < BOARD_SIZE as i32
    }

    /// Inside the grid and on a dark (playable) square
    #[inline]
    pub fn is_playable(x: i32, y: i32) -> bool {
        Self::is_valid(x, y) && (x + y) % 2 == 1
    }

    /// Square reached by stepping `(dx, dy)`, if it is still on the grid
    #[inline]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Pos> {
        let x = self.x as i32 + dx as i32;
        let y = self.y as i32 + dy as i32;
        if Self::is_valid(x, y) {
            Some(Pos::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// Whether this square may hold a piece
    #[inline]
    pub fn is_dark(self) -> bool {
        (self.x + self.y) % 2 == 1
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
