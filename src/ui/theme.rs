//! Theme constants for the checkers GUI

use egui::Color32;

use crate::Player;

// Board colors
pub const LIGHT_SQUARE: Color32 = Color32::from_rgb(240, 217, 181);
pub const DARK_SQUARE: Color32 = Color32::from_rgb(120, 84, 62);
pub const BOARD_FRAME: Color32 = Color32::from_rgb(70, 48, 36);
pub const WINDOW_BG: Color32 = Color32::from_rgb(40, 42, 46);

// Piece colors (primary fill, secondary rim)
pub const PLAYER1_PRIMARY: Color32 = Color32::from_rgb(0xE2, 0xD5, 0xA1);
pub const PLAYER1_SECONDARY: Color32 = Color32::from_rgb(0x98, 0x64, 0x5B);
pub const PLAYER2_PRIMARY: Color32 = Color32::from_rgb(0x98, 0x64, 0x5B);
pub const PLAYER2_SECONDARY: Color32 = Color32::from_rgb(0x54, 0x42, 0x47);
pub const CROWN: Color32 = Color32::from_rgb(255, 200, 60);

// Markers
pub const SELECTION: Color32 = Color32::from_rgb(80, 200, 120);
pub const MUST_CAPTURE: Color32 = Color32::from_rgb(230, 60, 60);

// Functions for colors that can't be const
pub fn hover_square() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 40)
}

pub fn target_square() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 200, 120, 90)
}

pub fn piece_shadow() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 0, 60)
}

// Text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
/// Share of the shorter window side the board takes up
pub const BOARD_SCALE: f32 = 0.78;
pub const PIECE_RADIUS_RATIO: f32 = 0.38;
pub const RIM_WIDTH_RATIO: f32 = 0.08;
pub const MARKER_WIDTH: f32 = 3.0;

/// Fill and rim colors of a player's pieces
pub fn player_colors(player: Player) -> (Color32, Color32) {
    match player {
        Player::One => (PLAYER1_PRIMARY, PLAYER1_SECONDARY),
        Player::Two => (PLAYER2_PRIMARY, PLAYER2_SECONDARY),
    }
}
