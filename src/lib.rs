//! Two-player checkers engine with a hotseat GUI
//!
//! Standard 8x8 checkers rules:
//! - Men move one square diagonally forward, kings both ways
//! - Captures jump an adjacent enemy and are mandatory
//! - A piece keeps jumping while it can (multi-jump)
//! - Men reaching the far row are crowned
//! - A player without pieces loses
//!
//! # Architecture
//!
//! - [`board`]: Pieces, squares and spatial queries
//! - [`rules`]: Captures, movement, promotion and win detection
//! - [`game`]: Turn controller applying the rules to commands
//! - [`ui`]: egui front end (drawing, input, move animation)
//! - [`config`]: Timing and window settings
//!
//! # Quick Start
//!
//! ```
//! use checkers::{Game, Player, Pos, Status};
//!
//! let mut game = Game::new();
//!
//! // Player 1 picks a piece and steps forward
//! game.select_piece(Pos::new(0, 5)).unwrap();
//! game.attempt_move(Pos::new(1, 4)).unwrap();
//!
//! // Illegal requests are ignored and leave the game untouched
//! assert!(game.select_piece(Pos::new(1, 4)).is_err());
//! assert_eq!(game.status(), Status::Turn(Player::Two));
//! ```

pub mod board;
pub mod config;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError, Piece, PieceId, Player, Pos, Rank, BOARD_SIZE};
pub use game::{ClickOutcome, Game, GameSnapshot, MoveOutcome, Status};
pub use rules::MoveRejected;
