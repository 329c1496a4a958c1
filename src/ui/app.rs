//! Main application window

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view;
use super::session::Session;
use super::theme::*;
use crate::config::{AppConfig, GameKind};
use crate::engine::{AiEngine, MoveResult};
use crate::game::GameState;
use crate::rules::{ConnectFour, Rules, TicTacToe};

/// Tic-tac-toe and connect-four against the computer
pub struct DuelApp {
    active: GameKind,
    tictactoe: Session<TicTacToe>,
    connect_four: Session<ConnectFour>,
    show_debug: bool,
}

impl DuelApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self::from_config(config)
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let tictactoe = Session::new(
            GameState::new(),
            config.tictactoe.ai_delay(),
            ["Player X", "Player O"],
        );
        let connect_four = Session::new(
            GameState::with_engine(AiEngine::with_max_depth(Some(config.connect_four.max_depth))),
            config.connect_four.ai_delay(),
            ["Player 1", "Player 2"],
        );
        Self {
            active: config.ui.start_game,
            tictactoe,
            connect_four,
            show_debug: config.ui.show_debug,
        }
    }

    #[inline]
    pub fn active(&self) -> GameKind {
        self.active
    }

    fn new_game(&mut self) {
        match self.active {
            GameKind::Tictactoe => self.tictactoe.reset(),
            GameKind::ConnectFour => self.connect_four.reset(),
        }
    }

    fn switch_to(&mut self, kind: GameKind) {
        if self.active != kind {
            self.active = kind;
            self.new_game();
        }
    }

    fn poll_reply(&mut self, now: Instant) {
        match self.active {
            GameKind::Tictactoe => self.tictactoe.poll_reply(now),
            GameKind::ConnectFour => self.connect_four.poll_reply(now),
        };
    }

    fn time_until_reply(&self, now: Instant) -> Option<std::time::Duration> {
        match self.active {
            GameKind::Tictactoe => self.tictactoe.time_until_reply(now),
            GameKind::ConnectFour => self.connect_four.time_until_reply(now),
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Tic-tac-toe").clicked() {
                        self.switch_to(GameKind::Tictactoe);
                        ui.close_menu();
                    }
                    if ui.button("Connect Four").clicked() {
                        self.switch_to(GameKind::ConnectFour);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let name = match self.active {
                        GameKind::Tictactoe => TicTacToe::NAME,
                        GameKind::ConnectFour => ConnectFour::NAME,
                    };
                    ui.label(format!("You vs computer - {name}"));
                });
            });
        });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        let show_debug = self.show_debug;
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                match self.active {
                    GameKind::Tictactoe => render_cards(ui, &self.tictactoe, show_debug),
                    GameKind::ConnectFour => render_cards(ui, &self.connect_four, show_debug),
                }
                ui.add_space(10.0);
                Self::card_frame().show(ui, |ui| {
                    if ui.button(RichText::new("New Game").size(14.0)).clicked() {
                        self.new_game();
                    }
                });
            });
    }

    fn render_board(&mut self, ctx: &Context, now: Instant) {
        CentralPanel::default().show(ctx, |ui| match self.active {
            GameKind::Tictactoe => {
                let session = &mut self.tictactoe;
                let accept = !session.is_thinking() && !session.state().is_terminal();
                let state = session.state();
                let clicked = board_view::show_tictactoe(
                    ui,
                    state.board(),
                    state.last_move(),
                    state.winning_line(),
                    accept,
                );
                if let Some(index) = clicked {
                    session.human_move(index, now);
                }
            }
            GameKind::ConnectFour => {
                let session = &mut self.connect_four;
                let accept = !session.is_thinking() && !session.state().is_terminal();
                let state = session.state();
                let clicked = board_view::show_connect_four(
                    ui,
                    state.board(),
                    state.last_move(),
                    state.winning_line(),
                    accept,
                );
                if let Some(col) = clicked {
                    session.human_move(col, now);
                }
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, toggle_debug) =
            ctx.input(|i| (i.key_pressed(egui::Key::N), i.key_pressed(egui::Key::D)));
        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if new_game {
            self.new_game();
        }
    }
}

fn render_cards<R: Rules>(ui: &mut egui::Ui, session: &Session<R>, show_debug: bool) {
    ui.label(RichText::new(R::NAME.to_uppercase()).size(20.0).strong().color(TEXT_PRIMARY));
    ui.add_space(12.0);

    DuelApp::card_frame().show(ui, |ui| {
        ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
        ui.add_space(6.0);
        ui.label(RichText::new(session.status()).size(18.0).strong().color(TEXT_PRIMARY));
        let (hint, color) = if session.is_thinking() {
            ("Computer is thinking...", THINKING)
        } else if session.state().is_terminal() {
            ("Game over", WIN_HIGHLIGHT)
        } else {
            ("Your move", READY)
        };
        ui.label(RichText::new(hint).size(12.0).color(color));
        ui.add_space(4.0);
        ui.label(
            RichText::new(format!("Move #{}", session.state().move_count()))
                .size(11.0)
                .color(TEXT_SECONDARY),
        );
    });

    if show_debug {
        ui.add_space(10.0);
        render_debug_card(ui, session.state().last_ai_result());
    }
}

fn render_debug_card<M: std::fmt::Debug>(ui: &mut egui::Ui, result: Option<&MoveResult<M>>) {
    DuelApp::card_frame().show(ui, |ui| {
        ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
        ui.add_space(6.0);

        let Some(result) = result else {
            ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
            return;
        };
        ui.label(RichText::new(format!("Move: {:?}", result.best_move)).size(12.0).strong().color(WIN_HIGHLIGHT));
        ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
        ui.label(
            RichText::new(format!("{} nodes, {} cutoffs", result.nodes, result.cutoffs))
                .size(10.0)
                .color(TEXT_SECONDARY),
        );
        ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_MUTED));
    });
}

impl eframe::App for DuelApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.handle_input(ctx);
        self.poll_reply(now);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx, now);

        if let Some(wait) = self.time_until_reply(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
