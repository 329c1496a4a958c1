//! Theme constants for the game window

use egui::Color32;

// Boards
pub const GRID_BG: Color32 = Color32::from_rgb(222, 184, 135);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 40, 20);
pub const RACK_BG: Color32 = Color32::from_rgb(40, 80, 170);
pub const RACK_HOLE: Color32 = Color32::from_rgb(28, 30, 36);

// Marks
pub const FIRST_MARK: Color32 = Color32::from_rgb(230, 70, 60);
pub const SECOND_MARK: Color32 = Color32::from_rgb(250, 205, 60);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 250, 252);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_preview(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 90)
}

// Panel
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const THINKING: Color32 = Color32::from_rgb(255, 180, 50);
pub const READY: Color32 = Color32::from_rgb(80, 200, 120);

// Sizes
pub const BOARD_MARGIN: f32 = 20.0;
pub const MARK_RADIUS_RATIO: f32 = 0.38;
pub const GRID_LINE_WIDTH: f32 = 4.0;
pub const WIN_LINE_WIDTH: f32 = 4.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
