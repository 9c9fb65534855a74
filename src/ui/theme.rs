//! Theme constants for the Tic-Tac-Toe GUI

use egui::Color32;

use crate::Mark;

// Board colors - night sky
pub const BOARD_BG: Color32 = Color32::from_rgb(30, 40, 60);
pub const GRID_LINE: Color32 = Color32::from_rgb(100, 149, 237); // Cornflower blue

// Marks
pub const X_COLOR: Color32 = Color32::from_rgb(34, 139, 34); // Forest green
pub const O_COLOR: Color32 = Color32::from_rgb(220, 20, 60); // Crimson

pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 215, 0);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(255, 215, 0);

pub fn mark_color(mark: Mark) -> Color32 {
    match mark {
        Mark::X => X_COLOR,
        Mark::O => O_COLOR,
    }
}

// Functions for colors that can't be const
pub fn hover_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 40)
}

pub fn mark_shadow() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 0, 150)
}

pub fn suggestion_fill(mark: Mark) -> Color32 {
    let c = mark_color(mark);
    Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), 90)
}

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(32, 34, 37);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Buttons
pub const BUTTON_AI: Color32 = Color32::from_rgb(100, 149, 237);
pub const BUTTON_FRIEND: Color32 = Color32::from_rgb(60, 179, 113);
pub const GAME_OVER_TEXT: Color32 = Color32::from_rgb(255, 100, 100);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const GRID_LINE_WIDTH: f32 = 3.0;
pub const MARK_SIZE_RATIO: f32 = 0.3;
pub const MARK_STROKE_WIDTH: f32 = 8.0;
pub const WIN_LINE_WIDTH: f32 = 6.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
