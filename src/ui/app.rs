//! Main application for the Tic-Tac-Toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardOverlay, BoardView};
use super::game_state::{GameMode, GameState, Phase};
use super::theme::*;
use crate::config::GameConfig;
use crate::rules::GameOutcome;

/// Main Tic-Tac-Toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Back to Menu (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Computer Insight (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match (self.state.phase, self.state.mode) {
                        (Phase::Menu, _) => "Menu",
                        (_, GameMode::VsComputer) => "Playing the computer",
                        (_, GameMode::VsFriend) => "Playing a friend",
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and computer insight
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                match self.state.phase {
                    Phase::InProgress => {
                        self.render_turn_card(ui);
                        ui.add_space(10.0);
                        self.render_actions_card(ui);
                    }
                    Phase::GameOver(outcome) => self.render_game_over_card(ui, outcome),
                    Phase::Menu | Phase::NameEntry { .. } => {
                        ui.label(RichText::new("Pick a game to start").size(12.0).color(TEXT_MUTED));
                    }
                }

                if self.show_debug && self.state.phase != Phase::Menu {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X").size(22.0).strong().color(X_COLOR));
            ui.label(RichText::new("O").size(22.0).strong().color(O_COLOR));
            ui.add_space(4.0);
            ui.label(RichText::new("TIC TAC TOE").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// "{name}'s Turn" with the mark to move
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let mark = self.state.current_turn;
            let accent = mark_color(mark);

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    mark.symbol(),
                    egui::FontId::proportional(26.0),
                    TEXT_PRIMARY,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let turn = self.state.turn_text().unwrap_or_default();
                    ui.label(RichText::new(turn).size(18.0).strong().color(accent));

                    let status = if self.state.is_human_turn() {
                        "Click an empty cell"
                    } else {
                        "Computer is moving..."
                    };
                    ui.label(RichText::new(status).size(12.0).color(TEXT_SECONDARY));
                });
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(egui::Color32::from_rgb(50, 53, 58))
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                if self.state.mode == GameMode::VsFriend {
                    btn_frame.show(ui, |ui| {
                        let hint = egui::Label::new(RichText::new("Hint (H)").size(12.0).color(TEXT_PRIMARY))
                            .sense(egui::Sense::click());
                        if ui.add(hint).clicked() {
                            self.state.request_hint();
                        }
                    });
                    ui.add_space(4.0);
                }

                btn_frame.show(ui, |ui| {
                    let menu = egui::Label::new(RichText::new("Menu (N)").size(12.0).color(TEXT_PRIMARY))
                        .sense(egui::Sense::click());
                    if ui.add(menu).clicked() {
                        self.state.reset();
                    }
                });
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Last search: chosen cell, score, nodes and time
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("COMPUTER INSIGHT").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                let Some(result) = &self.state.last_ai_result else {
                    ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
                    return;
                };

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(format!("{} - {}", result.mark, result.verdict()))
                                .size(11.0)
                                .strong()
                                .color(mark_color(result.mark)),
                        );
                        ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("{:.2}ms", result.time_us as f64 / 1000.0))
                                    .size(10.0)
                                    .color(TEXT_SECONDARY),
                            );
                            ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                        });
                    });
                });

                if let Some(pos) = result.best_move {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("-> row {}, col {}", pos.row + 1, pos.col + 1))
                            .size(12.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                }
            });
    }

    /// "GAME OVER", the result line and the NEW GAME button
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: GameOutcome) {
        let accent = match outcome {
            GameOutcome::Won(mark) => mark_color(mark),
            GameOutcome::Drawn => TEXT_SECONDARY,
        };
        let result = self.state.result_text().unwrap_or_default();

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 50, 70))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(20.0).strong().color(GAME_OVER_TEXT));
                    ui.add_space(8.0);
                    ui.label(RichText::new(result).size(18.0).strong().color(accent));
                    ui.add_space(12.0);

                    let button = egui::Button::new(RichText::new("NEW GAME").size(14.0).strong().color(TEXT_PRIMARY))
                        .fill(BUTTON_AI)
                        .corner_radius(CornerRadius::same(6));
                    if ui.add(button).clicked() {
                        self.state.reset();
                    }
                    ui.add_space(4.0);
                    ui.label(RichText::new("or press R").size(10.0).color(TEXT_MUTED));
                });
            });
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Main menu: pick an opponent
    fn render_menu(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.2);
            ui.label(RichText::new("TIC TAC TOE").size(42.0).strong().color(GRID_LINE));
            ui.add_space(8.0);
            ui.label(RichText::new("Choose Your Battle!").size(22.0).color(TEXT_SECONDARY));
            ui.add_space(32.0);

            let size = Vec2::new(220.0, 64.0);
            let ai = egui::Button::new(RichText::new("Play with AI").size(20.0).color(TEXT_PRIMARY))
                .fill(BUTTON_AI)
                .min_size(size);
            if ui.add(ai).clicked() {
                self.state.select_mode(GameMode::VsComputer);
            }
            ui.add_space(12.0);
            let friend = egui::Button::new(RichText::new("Play with a FRIEND").size(20.0).color(TEXT_PRIMARY))
                .fill(BUTTON_FRIEND)
                .min_size(size);
            if ui.add(friend).clicked() {
                self.state.select_mode(GameMode::VsFriend);
            }
        });
    }

    /// Name popup. Typing is read from raw events in `handle_input`.
    fn render_name_entry(&self, ui: &mut egui::Ui) {
        let prompt = self.state.name_prompt().unwrap_or_default();

        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.25);
            Frame::new()
                .fill(egui::Color32::from_rgb(240, 248, 255))
                .stroke(egui::Stroke::new(2.0, GRID_LINE))
                .corner_radius(CornerRadius::same(8))
                .inner_margin(24.0)
                .show(ui, |ui| {
                    ui.set_width(360.0);
                    ui.label(RichText::new("PLAYER SETUP").size(30.0).strong().color(GRID_LINE));
                    ui.add_space(12.0);
                    ui.label(RichText::new(prompt).size(20.0).color(egui::Color32::from_rgb(70, 70, 70)));
                    ui.add_space(8.0);
                    Frame::new()
                        .fill(egui::Color32::WHITE)
                        .stroke(egui::Stroke::new(1.0, egui::Color32::BLACK))
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.set_width(320.0);
                            ui.label(
                                RichText::new(format!("{}|", self.state.name_input))
                                    .size(24.0)
                                    .color(egui::Color32::BLACK),
                            );
                        });
                    ui.add_space(12.0);
                    ui.label(
                        RichText::new("Press ENTER when done, ESC to go back")
                            .size(14.0)
                            .color(egui::Color32::from_rgb(120, 120, 120)),
                    );
                });
        });
    }

    /// Draw the board and advance the game by one frame
    fn render_board(&mut self, ui: &mut egui::Ui) {
        let overlay = BoardOverlay {
            hover_mark: self
                .state
                .is_human_turn()
                .then_some(self.state.current_turn),
            last_move: self.state.last_move,
            suggested_move: self.state.suggested_move,
            winning_line: self.state.winning_line(),
        };

        let input = ui
            .vertical_centered(|ui| self.board_view.show(ui, &self.state.board, overlay))
            .inner;

        self.state.tick(&input);
    }

    fn render_central(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(egui::Color32::from_rgb(40, 42, 46)).inner_margin(12.0))
            .show(ctx, |ui| match self.state.phase {
                Phase::Menu => self.render_menu(ui),
                Phase::NameEntry { .. } => self.render_name_entry(ui),
                Phase::InProgress | Phase::GameOver(_) => self.render_board(ui),
            });
    }

    /// Handle keyboard shortcuts and name typing
    fn handle_input(&mut self, ctx: &Context) {
        if matches!(self.state.phase, Phase::NameEntry { .. }) {
            let (typed, enter, backspace, escape) = ctx.input(|i| {
                let typed: String = i
                    .events
                    .iter()
                    .filter_map(|e| match e {
                        egui::Event::Text(t) => Some(t.as_str()),
                        _ => None,
                    })
                    .collect();
                (
                    typed,
                    i.key_pressed(egui::Key::Enter),
                    i.key_pressed(egui::Key::Backspace),
                    i.key_pressed(egui::Key::Escape),
                )
            });

            for ch in typed.chars() {
                self.state.push_name_char(ch);
            }
            if backspace {
                self.state.pop_name_char();
            }
            if escape {
                self.state.cancel_name_entry();
            } else if enter {
                self.state.confirm_name();
            }
            return;
        }

        ctx.input(|i| {
            // D - Toggle insight panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // H - Hint (vs friend)
            if i.key_pressed(egui::Key::H) && self.state.mode == GameMode::VsFriend {
                self.state.request_hint();
            }

            // R - New game once the current one is over
            if i.key_pressed(egui::Key::R) && self.state.is_game_over() {
                self.state.reset();
            }

            // N - Back to menu at any time
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_central(ctx);

        // Computer moves happen on the next frame
        if self.state.is_in_progress() && !self.state.is_human_turn() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PointerInput;
    use crate::{Mark, Pos};

    #[test]
    fn test_app_starts_in_menu() {
        let app = TicTacToeApp::default();
        assert_eq!(app.state.phase, Phase::Menu);
        assert!(app.show_debug);
    }

    #[test]
    fn test_computer_answers_within_two_frames() {
        let mut app = TicTacToeApp::with_config(GameConfig::default());
        app.state.select_mode(GameMode::VsComputer);
        app.state.confirm_name();

        // Press places X, the release frame lets the computer answer
        app.state.tick(&PointerInput::press(Pos::new(0, 0)));
        app.state.tick(&PointerInput::IDLE);
        assert_eq!(app.state.current_turn, Mark::X);
        assert!(app.state.last_ai_result.is_some());
    }
}
