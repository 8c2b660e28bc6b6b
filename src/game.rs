//! Turn controller for a game of checkers
//!
//! [`Game`] owns the board and enforces the rules on every command:
//!
//! 1. **Selection**: the player to move picks one of their pieces. While a
//!    capture is available only pieces that can capture may be picked.
//! 2. **Move**: the selected piece steps or jumps. Jumps remove the enemy.
//! 3. **Promotion**: men reaching the far row are crowned right away.
//! 4. **Turn transition**: after a jump the same piece keeps the turn as long
//!    as it can jump again; otherwise the turn passes.
//! 5. **Win check**: a player left without pieces loses.
//!
//! Illegal commands are ignored. They return a [`MoveRejected`] describing why,
//! and leave the game exactly as it was.
//!
//! # Example
//!
//! ```
//! use checkers::{Game, Player, Pos, Status};
//!
//! let mut game = Game::new();
//! game.select_piece(Pos::new(2, 5)).unwrap();
//! let outcome = game.attempt_move(Pos::new(3, 4)).unwrap();
//!
//! assert!(outcome.turn_changed);
//! assert_eq!(game.status(), Status::Turn(Player::Two));
//! ```

use std::fmt;

use log::{debug, info, warn};

use crate::board::{Board, Piece, PieceId, Player, Pos};
use crate::rules::{
    any_player_can_capture, can_capture, check_promotion, check_winner, classify_move,
    legal_targets, MoveKind, MoveRejected,
};

/// Whose turn it is, or who won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Turn(Player),
    GameOver { winner: Player },
}

impl Status {
    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self, Status::GameOver { .. })
    }

    /// Player to move, `None` once the game is over
    #[inline]
    pub fn to_move(&self) -> Option<Player> {
        match self {
            Status::Turn(player) => Some(*player),
            Status::GameOver { .. } => None,
        }
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::GameOver { winner } => Some(*winner),
            Status::Turn(_) => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Turn(player) => write!(f, "{player} Turn"),
            Status::GameOver { winner } => write!(f, "{winner} wins!"),
        }
    }
}

/// Result of an applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub piece: PieceId,
    pub from: Pos,
    pub to: Pos,
    /// Jumped enemy and the square it stood on
    pub captured: Option<(PieceId, Pos)>,
    /// The moving piece was crowned by this move
    pub promoted: bool,
    /// The turn passed to the opponent
    pub turn_changed: bool,
    /// Set when this move ended the game
    pub winner: Option<Player>,
}

/// Result of a click on a square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected(PieceId),
    Moved(MoveOutcome),
}

/// Read-only copy of the game for presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub pieces: Vec<Piece>,
    pub status: Status,
    pub selection: Option<PieceId>,
    pub forced_capture: bool,
}

/// Checkers game state and rule enforcement
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    status: Status,
    /// The player to move must capture this turn
    forced_capture: bool,
    /// Piece in the middle of a multi-jump; it keeps the selection
    chain: Option<PieceId>,
    selection: Option<PieceId>,
}

impl Game {
    /// Standard opening position, Player 1 to move
    pub fn new() -> Self {
        Self::from_position(Board::standard(), Player::One)
    }

    /// Start from an arbitrary position
    pub fn from_position(board: Board, to_move: Player) -> Self {
        let forced_capture = any_player_can_capture(&board, to_move);
        let status = match check_winner(&board, to_move) {
            Some(winner) => Status::GameOver { winner },
            None => Status::Turn(to_move),
        };

        Self {
            board,
            status,
            forced_capture,
            chain: None,
            selection: None,
        }
    }

    /// Reset to the standard opening
    pub fn initialize_game(&mut self) {
        *self = Self::new();
        info!("new game started, {} to move", Player::One);
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Currently selected piece
    #[inline]
    pub fn selection(&self) -> Option<&Piece> {
        self.selection.and_then(|id| self.board.get(id))
    }

    #[inline]
    pub fn forced_capture(&self) -> bool {
        self.forced_capture
    }

    /// Piece locked in a multi-jump
    #[inline]
    pub fn chain(&self) -> Option<PieceId> {
        self.chain
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            pieces: self.board.pieces().to_vec(),
            status: self.status,
            selection: self.selection,
            forced_capture: self.forced_capture,
        }
    }

    /// Whether `piece` may be selected right now
    fn check_selectable(&self, piece: &Piece) -> Result<(), MoveRejected> {
        let to_move = self.status.to_move().ok_or(MoveRejected::GameOver)?;
        if piece.owner != to_move {
            return Err(MoveRejected::NotYourTurn);
        }
        if let Some(locked) = self.chain {
            return Err(if locked == piece.id {
                MoveRejected::AlreadySelected
            } else {
                MoveRejected::ChainLocked
            });
        }
        if self.selection == Some(piece.id) {
            return Err(MoveRejected::AlreadySelected);
        }
        if self.forced_capture && !can_capture(&self.board, piece) {
            return Err(MoveRejected::MustCapture);
        }
        Ok(())
    }

    /// Pieces the player to move may move this turn
    pub fn movable_pieces(&self) -> Vec<PieceId> {
        let Some(to_move) = self.status.to_move() else {
            return Vec::new();
        };
        if let Some(locked) = self.chain {
            return vec![locked];
        }

        self.board
            .pieces_of(to_move)
            .filter(|p| !self.forced_capture || can_capture(&self.board, p))
            .filter(|p| !legal_targets(&self.board, p, self.forced_capture).is_empty())
            .map(|p| p.id)
            .collect()
    }

    /// Squares a piece may move to right now
    pub fn legal_targets(&self, id: PieceId) -> Vec<Pos> {
        if !self.movable_pieces().contains(&id) {
            return Vec::new();
        }
        match self.board.get(id) {
            Some(piece) => legal_targets(&self.board, piece, self.forced_capture),
            None => Vec::new(),
        }
    }

    /// Select the piece on `pos` as the piece to move
    pub fn select_piece(&mut self, pos: Pos) -> Result<PieceId, MoveRejected> {
        let result = self.try_select(pos);
        match &result {
            Ok(id) => debug!("selected piece {:?} at {}", id, pos),
            Err(reason) => debug!("selection at {} ignored: {}", pos, reason),
        }
        result
    }

    fn try_select(&mut self, pos: Pos) -> Result<PieceId, MoveRejected> {
        if self.status.is_over() {
            return Err(MoveRejected::GameOver);
        }
        let piece = *self.board.piece_at(pos).ok_or(MoveRejected::NoPiece(pos))?;
        self.check_selectable(&piece)?;

        self.selection = Some(piece.id);
        Ok(piece.id)
    }

    /// Move the selected piece onto `target`
    pub fn attempt_move(&mut self, target: Pos) -> Result<MoveOutcome, MoveRejected> {
        let result = self.try_move(target);
        if let Err(reason) = &result {
            debug!("move to {} ignored: {}", target, reason);
        }
        result
    }

    fn try_move(&mut self, target: Pos) -> Result<MoveOutcome, MoveRejected> {
        let to_move = self.status.to_move().ok_or(MoveRejected::GameOver)?;
        let id = self.selection.ok_or(MoveRejected::NoSelection)?;
        let piece = *self.board.get(id).ok_or(MoveRejected::NoSelection)?;

        if piece.owner != to_move {
            return Err(MoveRejected::NotYourTurn);
        }
        if self.forced_capture && !can_capture(&self.board, &piece) {
            return Err(MoveRejected::MustCapture);
        }

        let kind = classify_move(&self.board, &piece, target, self.forced_capture)?;

        // Apply
        self.board.move_piece(id, target);
        let captured = match kind {
            MoveKind::Simple => None,
            MoveKind::Capture { captured, over } => {
                if self.board.remove_piece(captured).is_none() {
                    warn!("jumped piece {:?} at {} was not on the board", captured, over);
                }
                Some((captured, over))
            }
        };
        let promoted = check_promotion(&mut self.board).contains(&id);

        let mut outcome = MoveOutcome {
            piece: id,
            from: piece.pos,
            to: target,
            captured,
            promoted,
            turn_changed: false,
            winner: None,
        };

        // Chain continues while the same piece can jump again
        let can_continue = captured.is_some()
            && self.board.get(id).is_some_and(|moved| can_capture(&self.board, moved));

        if can_continue {
            self.chain = Some(id);
            debug!("{} continues capturing with {:?} from {}", to_move, id, target);
            return Ok(outcome);
        }

        self.pass_turn(to_move.opponent());
        outcome.turn_changed = true;
        outcome.winner = self.status.winner();

        Ok(outcome)
    }

    /// Hand the turn over and check for a winner
    fn pass_turn(&mut self, next: Player) {
        self.selection = None;
        self.chain = None;
        self.forced_capture = any_player_can_capture(&self.board, next);

        match check_winner(&self.board, next) {
            Some(winner) => {
                self.status = Status::GameOver { winner };
                info!("game over: {} wins", winner);
            }
            None => {
                self.status = Status::Turn(next);
                debug!("{} to move (forced capture: {})", next, self.forced_capture);
            }
        }
    }

    /// Handle a click on a square: select an own piece there, otherwise try
    /// to move the current selection onto it
    pub fn click(&mut self, pos: Pos) -> Result<ClickOutcome, MoveRejected> {
        let own_piece = match (self.board.piece_at(pos), self.status.to_move()) {
            (Some(piece), Some(to_move)) => piece.owner == to_move,
            _ => false,
        };

        if own_piece {
            self.select_piece(pos).map(ClickOutcome::Selected)
        } else {
            self.attempt_move(pos).map(ClickOutcome::Moved)
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
