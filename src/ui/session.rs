//! Session state for the checkers GUI: the game plus presentation timing

use std::time::{Duration, Instant};

use log::info;

use crate::config::AppConfig;
use crate::{ClickOutcome, Game, MoveRejected, Player, Pos, Status};

use super::tween::Tween;

pub struct Session {
    pub game: Game,
    /// Move currently sliding into place
    pub tween: Option<Tween>,
    /// When the finished game gets replaced by a new one
    reset_at: Option<Instant>,
    config: AppConfig,
}

impl Session {
    pub fn new(config: AppConfig) -> Self {
        Self {
            game: Game::new(),
            tween: None,
            reset_at: None,
            config,
        }
    }

    /// Start over immediately
    pub fn reset(&mut self) {
        self.game.initialize_game();
        self.tween = None;
        self.reset_at = None;
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Input is accepted only while no move is animating and the game runs
    #[inline]
    pub fn accepts_input(&self) -> bool {
        !self.is_animating() && !self.game.status().is_over()
    }

    /// Pointer resting on a square: pick up an own piece there
    pub fn hover(&mut self, pos: Pos) {
        if !self.accepts_input() {
            return;
        }
        let own_piece = match (self.game.board().piece_at(pos), self.game.status().to_move()) {
            (Some(piece), Some(to_move)) => piece.owner == to_move,
            _ => false,
        };
        if own_piece {
            // Ineligible pieces are simply not picked up
            let _ = self.game.select_piece(pos);
        }
    }

    /// Click on a square
    pub fn click(&mut self, pos: Pos, now: Instant) -> Result<(), MoveRejected> {
        if self.is_animating() {
            return Ok(());
        }

        if let ClickOutcome::Moved(outcome) = self.game.click(pos)? {
            self.tween = Some(Tween::new(
                outcome.piece,
                outcome.from,
                outcome.to,
                self.config.tween_frames,
            ));
            if let Some(winner) = outcome.winner {
                self.reset_at = Some(now + self.config.reset_delay);
                info!(
                    "{} wins, next game in {:.1}s",
                    winner,
                    self.config.reset_delay.as_secs_f32()
                );
            }
        }
        Ok(())
    }

    /// Advance one frame: step the animation and run a due reset
    pub fn tick(&mut self, now: Instant) {
        if let Some(tween) = &mut self.tween {
            tween.step();
            if tween.is_done() {
                self.tween = None;
            }
        }

        if self.reset_at.is_some_and(|at| now >= at) {
            self.reset();
        }
    }

    /// Time left before the automatic reset
    pub fn reset_remaining(&self, now: Instant) -> Option<Duration> {
        self.reset_at.map(|at| at.saturating_duration_since(now))
    }

    /// Banner text above the board
    pub fn top_message(&self) -> String {
        if self.is_animating() {
            return "...".to_string();
        }
        match self.game.status() {
            Status::Turn(player) => format!("{player} Turn"),
            Status::GameOver { winner: Player::One } => "Player 1 wins! Yay!".to_string(),
            Status::GameOver { winner: Player::Two } => "Player 2 wins! Woohoo!".to_string(),
        }
    }

    /// Player whose colors the banner uses
    pub fn banner_player(&self) -> Player {
        match self.game.status() {
            Status::Turn(player) => player,
            Status::GameOver { winner } => winner,
        }
    }
}
