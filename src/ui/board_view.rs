//! Board rendering and click handling

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Cell, ConnectFourBoard, Player, Pos, TicTacToeBoard, COLS, ROWS};

use super::theme::*;

/// Geometry of a square-celled grid drawn inside `rect`
#[derive(Debug, Clone, Copy)]
struct Grid {
    rect: Rect,
    cell: f32,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Largest grid of `rows` x `cols` square cells that fits the available space
    fn fit(available: Vec2, rows: usize, cols: usize) -> (Vec2, f32) {
        let inner = available - Vec2::splat(2.0 * BOARD_MARGIN);
        let cell = (inner.x / cols as f32).min(inner.y / rows as f32).max(8.0);
        (
            Vec2::new(cell * cols as f32, cell * rows as f32) + Vec2::splat(2.0 * BOARD_MARGIN),
            cell,
        )
    }

    fn origin(&self) -> Pos2 {
        self.rect.min + Vec2::splat(BOARD_MARGIN)
    }

    fn cell_center(&self, row: usize, col: usize) -> Pos2 {
        self.origin() + Vec2::new((col as f32 + 0.5) * self.cell, (row as f32 + 0.5) * self.cell)
    }

    /// Cell under a screen position
    fn cell_at(&self, screen: Pos2) -> Option<(usize, usize)> {
        let rel = screen - self.origin();
        if rel.x < 0.0 || rel.y < 0.0 {
            return None;
        }
        let col = (rel.x / self.cell) as usize;
        let row = (rel.y / self.cell) as usize;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// Column under a screen position, ignoring height
    fn column_at(&self, screen: Pos2) -> Option<usize> {
        let rel = screen.x - self.origin().x;
        if rel < 0.0 {
            return None;
        }
        let col = (rel / self.cell) as usize;
        (col < self.cols).then_some(col)
    }

    fn mark_radius(&self) -> f32 {
        self.cell * MARK_RADIUS_RATIO
    }
}

fn mark_color(player: Player) -> Color32 {
    match player {
        Player::First => FIRST_MARK,
        Player::Second => SECOND_MARK,
    }
}

/// Draw an X or an O centered on `center`
fn draw_tictactoe_mark(painter: &Painter, center: Pos2, radius: f32, player: Player) {
    let stroke = Stroke::new(radius * 0.25, mark_color(player));
    match player {
        Player::First => {
            let d = radius * 0.75;
            painter.line_segment([center + Vec2::new(-d, -d), center + Vec2::new(d, d)], stroke);
            painter.line_segment([center + Vec2::new(-d, d), center + Vec2::new(d, -d)], stroke);
        }
        Player::Second => {
            painter.circle_stroke(center, radius * 0.8, stroke);
        }
    }
}

/// Render the tic-tac-toe grid and return the clicked cell index, if any.
///
/// Clicks are only reported when `accept_input` is set and the cell is empty.
pub fn show_tictactoe(
    ui: &mut egui::Ui,
    board: &TicTacToeBoard,
    last_move: Option<usize>,
    winning_line: Option<&[usize]>,
    accept_input: bool,
) -> Option<usize> {
    let (size, cell) = Grid::fit(ui.available_size(), 3, 3);
    let (response, painter) = ui.allocate_painter(size, Sense::click());
    let grid = Grid {
        rect: response.rect,
        cell,
        rows: 3,
        cols: 3,
    };

    painter.rect_filled(grid.rect, CornerRadius::same(6), GRID_BG);
    let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
    let origin = grid.origin();
    let span = cell * 3.0;
    for i in 1..3 {
        let offset = i as f32 * cell;
        painter.line_segment([origin + Vec2::new(offset, 0.0), origin + Vec2::new(offset, span)], stroke);
        painter.line_segment([origin + Vec2::new(0.0, offset), origin + Vec2::new(span, offset)], stroke);
    }

    for (index, mark) in board.cells().iter().enumerate() {
        if let Cell::Mark(player) = *mark {
            let center = grid.cell_center(index / 3, index % 3);
            draw_tictactoe_mark(&painter, center, grid.mark_radius(), player);
        }
    }

    if let Some(index) = last_move {
        let center = grid.cell_center(index / 3, index % 3);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    if let Some(line) = winning_line {
        if let (Some(&first), Some(&last)) = (line.first(), line.last()) {
            let start = grid.cell_center(first / 3, first % 3);
            let end = grid.cell_center(last / 3, last % 3);
            painter.line_segment([start, end], Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT));
        }
    }

    if !accept_input {
        return None;
    }
    let (row, col) = response.hover_pos().and_then(|p| grid.cell_at(p))?;
    let index = row * 3 + col;
    if !board.is_empty(index) {
        return None;
    }
    draw_tictactoe_mark(&painter, grid.cell_center(row, col), grid.mark_radius(), Player::First);
    response.clicked().then_some(index)
}

/// Render the connect-four rack and return the clicked column, if any.
///
/// Hovering a column that still has room previews the cell the disc would
/// land in.
pub fn show_connect_four(
    ui: &mut egui::Ui,
    board: &ConnectFourBoard,
    last_move: Option<Pos>,
    winning_line: Option<&[Pos]>,
    accept_input: bool,
) -> Option<usize> {
    let (size, cell) = Grid::fit(ui.available_size(), ROWS, COLS);
    let (response, painter) = ui.allocate_painter(size, Sense::click());
    let grid = Grid {
        rect: response.rect,
        cell,
        rows: ROWS,
        cols: COLS,
    };

    painter.rect_filled(grid.rect, CornerRadius::same(10), RACK_BG);
    let radius = grid.mark_radius();
    for row in 0..ROWS {
        for col in 0..COLS {
            let center = grid.cell_center(row, col);
            let color = match board.get(Pos::new(row as u8, col as u8)) {
                Cell::Empty => RACK_HOLE,
                Cell::Mark(player) => mark_color(player),
            };
            painter.circle_filled(center, radius, color);
        }
    }

    if let Some(pos) = last_move {
        let center = grid.cell_center(pos.row as usize, pos.col as usize);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    if let Some(line) = winning_line {
        let stroke = Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT);
        for pos in line {
            let center = grid.cell_center(pos.row as usize, pos.col as usize);
            painter.circle_stroke(center, radius + 2.0, stroke);
        }
    }

    if !accept_input {
        return None;
    }
    let col = response.hover_pos().and_then(|p| grid.column_at(p))?;
    let row = board.available_row(col)?;
    painter.circle_filled(grid.cell_center(row, col), radius, hover_preview(FIRST_MARK));
    response.clicked().then_some(col)
}
