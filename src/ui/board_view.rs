//! Board rendering for the checkers GUI

use crate::{Piece, PieceId, Pos, BOARD_SIZE};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::session::Session;
use super::theme::*;
use super::tween::Tween;

/// Pointer interaction with the board during one frame
#[derive(Debug, Default, Clone, Copy)]
pub struct BoardInput {
    pub hovered: Option<Pos>,
    pub clicked: Option<Pos>,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area (inside the frame)
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 36.9,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and report pointer input
    pub fn show(&mut self, ui: &mut egui::Ui, session: &Session) -> BoardInput {
        let available = ui.available_size();
        let screen = ui.ctx().screen_rect().size();

        // Square board scaled to the window
        let board_size = (screen.x.min(screen.y) * BOARD_SCALE).min(available.x.min(available.y)).max(64.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        painter.rect_filled(response.rect, CornerRadius::same(6), BOARD_FRAME);
        self.board_rect = response.rect.shrink(BOARD_MARGIN);

        self.draw_squares(&painter);

        let hovered = response.hover_pos().and_then(|p| self.screen_to_board(p));
        if session.accepts_input() {
            if let Some(pos) = hovered {
                painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, hover_square());
            }
            self.draw_targets(&painter, session);
        }

        self.draw_pieces(&painter, session);

        let clicked = if response.clicked() {
            response.interact_pointer_pos().and_then(|p| self.screen_to_board(p))
        } else {
            None
        };

        BoardInput { hovered, clicked }
    }

    /// Draw the 8x8 checkered squares
    fn draw_squares(&self, painter: &Painter) {
        for y in 0..BOARD_SIZE as u8 {
            for x in 0..BOARD_SIZE as u8 {
                let pos = Pos::new(x, y);
                let color = if pos.is_dark() { DARK_SQUARE } else { LIGHT_SQUARE };
                painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, color);
            }
        }
    }

    /// Highlight squares the selected piece can reach
    fn draw_targets(&self, painter: &Painter, session: &Session) {
        let Some(selected) = session.game.selection() else {
            return;
        };
        for pos in session.game.legal_targets(selected.id) {
            painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, target_square());
        }
    }

    /// Draw all live pieces, the animated one at its tweened position
    fn draw_pieces(&self, painter: &Painter, session: &Session) {
        let game = &session.game;
        let selected = game.selection().map(|p| p.id);
        let must_capture: Vec<PieceId> = if game.forced_capture() && session.accepts_input() {
            game.movable_pieces()
        } else {
            Vec::new()
        };

        for piece in game.board().pieces() {
            let center = match session.tween {
                Some(tween) if tween.piece == piece.id => self.tween_to_screen(&tween),
                _ => self.board_to_screen(piece.pos),
            };
            self.draw_piece(painter, piece, center);

            let radius = self.cell_size * PIECE_RADIUS_RATIO + MARKER_WIDTH;
            if selected == Some(piece.id) && session.accepts_input() {
                painter.circle_stroke(center, radius, Stroke::new(MARKER_WIDTH, SELECTION));
            } else if must_capture.contains(&piece.id) {
                painter.circle_stroke(center, radius, Stroke::new(MARKER_WIDTH, MUST_CAPTURE));
            }
        }
    }

    /// Draw a single piece
    fn draw_piece(&self, painter: &Painter, piece: &Piece, center: Pos2) {
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        let (fill, rim) = player_colors(piece.owner);

        // Shadow
        painter.circle_filled(center + Vec2::new(2.0, 2.0), radius, piece_shadow());

        // Body
        painter.circle_filled(center, radius, fill);
        painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * RIM_WIDTH_RATIO * 2.0, rim));

        if piece.is_king() {
            painter.circle_stroke(center, radius * 0.45, Stroke::new(radius * RIM_WIDTH_RATIO * 1.5, CROWN));
        }
    }

    /// Screen rectangle of a square
    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min + Vec2::new(pos.x as f32, pos.y as f32) * self.cell_size;
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x / self.cell_size).floor() as i32;
        let y = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(x, y) {
            Some(Pos::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// Convert board position to screen coordinates (square center)
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }

    fn tween_to_screen(&self, tween: &Tween) -> Pos2 {
        let (x, y) = tween.position();
        self.board_rect.min + Vec2::new(x + 0.5, y + 0.5) * self.cell_size
    }
}
