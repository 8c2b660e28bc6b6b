//! Game rules for checkers
//!
//! This module implements the rule set:
//! - Capture rules (mandatory jumps, multi-jump chains)
//! - Movement (single diagonal steps, direction by rank)
//! - King promotion
//! - Win condition (opponent has no pieces left)

pub mod capture;
pub mod movement;
pub mod promotion;
pub mod win;

// Re-exports for convenient access
pub use capture::{any_player_can_capture, can_capture, capture_to, get_captures, CaptureInfo};
pub use movement::{classify_move, legal_targets, simple_targets, MoveKind, MoveRejected};
pub use promotion::check_promotion;
pub use win::check_winner;
