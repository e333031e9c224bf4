use super::{App, Config};
use crate::Grid;
use eframe::egui::{pos2, vec2, Painter, Pos2, Rect, Stroke};

/// Screen rectangle outlined for the cell at `(row, col)`.
///
/// Cells are `cell_size` apart and drawn one pixel smaller so neighbors stay separated.
pub fn cell_rect(origin: Pos2, row: usize, col: usize, cell_size: f32) -> Rect {
    let min = pos2(
        origin.x + col as f32 * cell_size,
        origin.y + row as f32 * cell_size,
    );
    Rect::from_min_size(min, vec2(cell_size - 1., cell_size - 1.))
}

/// Outline every live cell of `grid`.
pub fn draw_cells(painter: &Painter, origin: Pos2, grid: &Grid, cell_size: f32) {
    let stroke = Stroke::new(Config::STROKE_WIDTH, Config::CELL_COLOR);
    for (row, col) in grid.live_cells() {
        painter.rect_stroke(cell_rect(origin, row, col, cell_size), 0., stroke);
    }
}

impl App {
    pub(super) fn draw(&self, ui: &mut eframe::egui::Ui) {
        if let Some(grid) = &self.grid {
            let origin = ui.max_rect().min;
            draw_cells(ui.painter(), origin, grid, self.config.cell_size as f32);
        }
    }
}
