//! Main application for the checkers GUI

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, TopBottomPanel};
use log::debug;

use super::board_view::BoardView;
use super::session::Session;
use super::theme::*;
use crate::config::AppConfig;
use crate::Player;

/// Main checkers application
pub struct CheckersApp {
    session: Session,
    board_view: BoardView,
}

impl CheckersApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self {
            session: Session::new(config),
            board_view: BoardView::default(),
        }
    }

    /// Banner naming whose turn it is, or the winner
    fn render_top_message(&self, ctx: &Context) {
        let (primary, secondary) = player_colors(self.session.banner_player());

        TopBottomPanel::top("top_message")
            .frame(Frame::new().fill(WINDOW_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    Frame::new()
                        .fill(secondary)
                        .corner_radius(CornerRadius::same(8))
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(self.session.top_message())
                                    .size(26.0)
                                    .strong()
                                    .color(primary),
                            );
                        });
                });
            });
    }

    /// Piece counts and reset countdown
    fn render_status_bar(&mut self, ctx: &Context, now: Instant) {
        TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(WINDOW_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let board = self.session.game.board();
                    for player in [Player::One, Player::Two] {
                        let (primary, _) = player_colors(player);
                        ui.label(RichText::new("●").size(16.0).color(primary));
                        ui.label(
                            RichText::new(format!("{}: {}", player, board.count_pieces(player)))
                                .size(13.0)
                                .color(TEXT_PRIMARY),
                        );
                        ui.add_space(12.0);
                    }

                    if self.session.game.forced_capture() && !self.session.game.status().is_over() {
                        ui.label(RichText::new("Capture!").size(13.0).strong().color(MUST_CAPTURE));
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("New Game (N)").clicked() {
                            self.session.reset();
                        }
                        if let Some(left) = self.session.reset_remaining(now) {
                            ui.label(
                                RichText::new(format!("New game in {:.0}s", left.as_secs_f32().ceil()))
                                    .size(12.0)
                                    .color(TEXT_SECONDARY),
                            );
                        } else {
                            ui.label(RichText::new("Hover to pick, click to move").size(11.0).color(TEXT_MUTED));
                        }
                    });
                });
            });
    }

    /// Render the main board and forward pointer input
    fn render_board(&mut self, ctx: &Context, now: Instant) {
        CentralPanel::default()
            .frame(Frame::new().fill(WINDOW_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    let input = self.board_view.show(ui, &self.session);

                    if let Some(pos) = input.hovered {
                        self.session.hover(pos);
                    }
                    if let Some(pos) = input.clicked {
                        if let Err(reason) = self.session.click(pos, now) {
                            debug!("click on {} ignored: {}", pos, reason);
                        }
                    }
                });
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        // N - New game
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.session.reset();
        }
    }
}

impl eframe::App for CheckersApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.handle_input(ctx);
        self.session.tick(now);

        self.render_top_message(ctx);
        self.render_status_bar(ctx, now);
        self.render_board(ctx, now);

        // Keep frames coming while a piece slides or a reset is pending
        if self.session.is_animating() {
            ctx.request_repaint();
        } else if self.session.reset_remaining(now).is_some() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
