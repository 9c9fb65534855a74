//! Board rendering for the Tic-Tac-Toe GUI

use crate::player::PointerInput;
use crate::rules::Line;
use crate::{Board, Cell, Mark, Pos, BOARD_SIZE};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// What the board should highlight this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardOverlay {
    /// Mark shown in the hover preview; `None` disables hovering
    pub hover_mark: Option<Mark>,
    pub last_move: Option<Pos>,
    pub suggested_move: Option<Pos>,
    pub winning_line: Option<Line>,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 150.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and report pointer state mapped to cells
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: BoardOverlay) -> PointerInput {
        let available_size = ui.available_size();

        // Square board that fits the available space
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(90.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click_and_drag());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);
        self.draw_grid(&painter);

        if let (Some(mark), Some(pointer)) = (overlay.hover_mark, response.hover_pos()) {
            if let Some(pos) = self.screen_to_board(pointer) {
                if board.is_empty(pos) {
                    self.draw_hover_preview(&painter, pos, mark);
                }
            }
        }

        if let (Some(pos), Some(mark)) = (overlay.suggested_move, overlay.hover_mark) {
            self.draw_suggestion(&painter, pos, mark);
        }

        self.draw_marks(&painter, board);

        if let Some(pos) = overlay.last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = overlay.winning_line {
            self.draw_winning_line(&painter, &line);
        }

        // A tap may press and release within one frame; it counts as held for that frame
        let held = response.is_pointer_button_down_on() || response.clicked();
        let pressed = if held {
            response
                .interact_pointer_pos()
                .or_else(|| response.hover_pos())
                .and_then(|p| self.screen_to_board(p))
        } else {
            None
        };

        PointerInput { pressed, held }
    }

    /// Draw the two horizontal and two vertical separators
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let inner = self.inner_rect();

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            painter.line_segment(
                [
                    Pos2::new(inner.min.x + offset, inner.min.y),
                    Pos2::new(inner.min.x + offset, inner.max.y),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    Pos2::new(inner.min.x, inner.min.y + offset),
                    Pos2::new(inner.max.x, inner.min.y + offset),
                ],
                stroke,
            );
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if let Cell::Occupied(mark) = board.get_cell(row, col) {
                    self.draw_mark(painter, Pos::new(row as u8, col as u8), mark);
                }
            }
        }
    }

    /// Draw a single mark with a drop shadow
    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Mark) {
        let center = self.board_to_screen(pos);
        let shadow = Vec2::new(3.0, 3.0);

        self.paint_symbol(painter, center + shadow, mark, Stroke::new(MARK_STROKE_WIDTH, mark_shadow()));
        self.paint_symbol(painter, center, mark, Stroke::new(MARK_STROKE_WIDTH, mark_color(mark)));
    }

    fn paint_symbol(&self, painter: &Painter, center: Pos2, mark: Mark, stroke: Stroke) {
        let size = self.cell_size * MARK_SIZE_RATIO;
        match mark {
            Mark::X => {
                painter.line_segment(
                    [center + Vec2::new(-size, -size), center + Vec2::new(size, size)],
                    stroke,
                );
                painter.line_segment(
                    [center + Vec2::new(size, -size), center + Vec2::new(-size, size)],
                    stroke,
                );
            }
            Mark::O => {
                painter.circle_stroke(center, size, stroke);
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let corner = self.cell_rect(pos).right_bottom() - Vec2::splat(12.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Stroke through the completed line, from end cell to end cell
    fn draw_winning_line(&self, painter: &Painter, line: &Line) {
        let (first, last) = line.endpoints();
        let start = self.board_to_screen(first);
        let end = self.board_to_screen(last);
        let overshoot = (end - start).normalized() * self.cell_size * 0.35;

        painter.line_segment(
            [start - overshoot, end + overshoot],
            Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT),
        );
    }

    /// Hint: faded mark with a "?"
    fn draw_suggestion(&self, painter: &Painter, pos: Pos, mark: Mark) {
        let center = self.board_to_screen(pos);
        self.paint_symbol(painter, center, mark, Stroke::new(MARK_STROKE_WIDTH, suggestion_fill(mark)));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(self.cell_size * 0.25),
            TEXT_PRIMARY,
        );
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, mark: Mark) {
        let rect = self.cell_rect(pos).shrink(4.0);
        painter.rect_filled(rect, CornerRadius::same(6), hover_fill());
        self.paint_symbol(painter, rect.center(), mark, Stroke::new(MARK_STROKE_WIDTH * 0.5, suggestion_fill(mark)));
    }

    fn inner_rect(&self) -> Rect {
        self.board_rect.shrink(BOARD_MARGIN)
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.inner_rect().min
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.inner_rect().min;
        if relative.x < 0.0 || relative.y < 0.0 || self.cell_size <= 0.0 {
            return None;
        }
        let col = (relative.x / self.cell_size).floor() as usize;
        let row = (relative.y / self.cell_size).floor() as usize;
        Pos::checked(row, col)
    }

    /// Convert board position to the center of its cell on screen
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            cell_size: 100.0,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(300.0 + 2.0 * BOARD_MARGIN)),
        }
    }

    #[test]
    fn test_screen_to_board_cells() {
        let v = view();
        let m = BOARD_MARGIN;
        assert_eq!(v.screen_to_board(Pos2::new(m + 1.0, m + 1.0)), Some(Pos::new(0, 0)));
        assert_eq!(v.screen_to_board(Pos2::new(m + 150.0, m + 250.0)), Some(Pos::new(2, 1)));
        assert_eq!(v.screen_to_board(Pos2::new(m + 299.0, m + 299.0)), Some(Pos::new(2, 2)));
    }

    #[test]
    fn test_screen_to_board_outside() {
        let v = view();
        assert_eq!(v.screen_to_board(Pos2::new(1.0, 1.0)), None);
        assert_eq!(v.screen_to_board(Pos2::new(BOARD_MARGIN + 301.0, BOARD_MARGIN + 10.0)), None);
    }

    fn run_frame(ctx: &egui::Context, view: &mut BoardView, board: &Board, events: Vec<egui::Event>) -> PointerInput {
        let raw = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::splat(500.0))),
            events,
            ..Default::default()
        };
        let mut input = PointerInput::IDLE;
        let _ = ctx.run(raw, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                input = view.show(ui, board, BoardOverlay::default());
            });
        });
        input
    }

    fn primary(pos: Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    #[test]
    fn test_tap_within_one_frame_is_reported() {
        let ctx = egui::Context::default();
        let mut view = BoardView::default();
        let board = Board::new();

        run_frame(&ctx, &mut view, &board, Vec::new());
        let center = view.board_to_screen(Pos::new(1, 1));
        run_frame(&ctx, &mut view, &board, vec![egui::Event::PointerMoved(center)]);

        let tap = run_frame(&ctx, &mut view, &board, vec![primary(center, true), primary(center, false)]);
        assert_eq!(tap, PointerInput::press(Pos::new(1, 1)));

        // Released on the following frame
        let after = run_frame(&ctx, &mut view, &board, Vec::new());
        assert!(!after.held);
        assert_eq!(after.pressed, None);
    }

    #[test]
    fn test_tap_places_once_for_human() {
        use crate::player::{HumanPlayer, Player};

        let ctx = egui::Context::default();
        let mut view = BoardView::default();
        let mut board = Board::new();
        let mut human = HumanPlayer::new(Mark::X, "Ada");

        run_frame(&ctx, &mut view, &board, Vec::new());
        let corner = view.board_to_screen(Pos::new(0, 2));
        run_frame(&ctx, &mut view, &board, vec![egui::Event::PointerMoved(corner)]);

        let tap = run_frame(&ctx, &mut view, &board, vec![primary(corner, true), primary(corner, false)]);
        assert_eq!(human.decide_move(&mut board, &tap), Some(Pos::new(0, 2)));

        let after = run_frame(&ctx, &mut view, &board, Vec::new());
        assert_eq!(human.decide_move(&mut board, &after), None);
        assert!(!human.is_consumed());
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_board_to_screen_is_cell_center() {
        let v = view();
        for idx in 0..crate::TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            assert_eq!(v.screen_to_board(v.board_to_screen(pos)), Some(pos));
        }
    }
}
