//! Frame-stepped slide of a piece between two squares
//!
//! The game state is already updated when a tween starts; the tween only
//! decides where the piece is drawn meanwhile.

use crate::{PieceId, Pos};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub piece: PieceId,
    from: Pos,
    to: Pos,
    frames: u32,
    frame: u32,
}

impl Tween {
    pub fn new(piece: PieceId, from: Pos, to: Pos, frames: u32) -> Self {
        Self {
            piece,
            from,
            to,
            frames: frames.max(1),
            frame: 0,
        }
    }

    /// Advance one frame
    pub fn step(&mut self) {
        if !self.is_done() {
            self.frame += 1;
        }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.frame > self.frames
    }

    /// Completed share in [0, 1]
    #[inline]
    pub fn progress(&self) -> f32 {
        (self.frame.min(self.frames) as f32) / self.frames as f32
    }

    /// Board coordinates (fractional) to draw the piece at
    pub fn position(&self) -> (f32, f32) {
        let t = self.progress();
        let x = self.from.x as f32 + (self.to.x as f32 - self.from.x as f32) * t;
        let y = self.from.y as f32 + (self.to.y as f32 - self.from.y as f32) * t;
        (x, y)
    }
}
