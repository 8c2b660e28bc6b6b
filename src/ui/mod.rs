//! GUI module for the checkers game
//!
//! This module provides a native Rust GUI using egui/eframe. It owns input,
//! drawing and move animation; every rule decision is delegated to [`Game`](crate::Game).

mod app;
mod board_view;
mod session;
mod theme;
mod tween;

pub use app::CheckersApp;
pub use session::Session;
pub use tween::Tween;
