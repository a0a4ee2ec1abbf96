use crate::canvas::Canvas;
use crate::types::{Color, NamedColor, Style};

use super::{Field, GameState, Rect};

/// Maps field units onto a block of terminal cells.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub x: u16,
    pub y: u16,
    pub cols: u16,
    pub rows: u16,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl Viewport {
    /// The field this viewport shows, in field units.
    pub fn field(&self) -> Field {
        Field {
            width: self.cols as f32 * self.cell_width,
            height: self.rows as f32 * self.cell_height,
        }
    }

    /// Cells covered by `r`: at least one cell per axis.
    fn cells(&self, r: &Rect) -> (u16, u16, u16, u16) {
        let col = (r.x.max(0.0) / self.cell_width) as u16;
        let row = (r.y.max(0.0) / self.cell_height) as u16;
        let w = ((r.w / self.cell_width).ceil() as u16).max(1);
        let h = ((r.h / self.cell_height).ceil() as u16).max(1);
        (self.x + col, self.y + row, w, h)
    }

    fn fill_rect(&self, canvas: &mut Canvas, r: &Rect, ch: char, style: Style, z: i32) {
        let (x, y, w, h) = self.cells(r);
        let max_x = self.x + self.cols;
        let max_y = self.y + self.rows;
        if x >= max_x || y >= max_y {
            return;
        }
        canvas.fill(x, y, w.min(max_x - x), h.min(max_y - y), ch, style, z);
    }
}

/// Draw one frame: background, player, bullets, enemies, score.
pub fn draw(state: &GameState, view: &Viewport, canvas: &mut Canvas, accent: Color) {
    let black = Color::Named(NamedColor::Black);
    canvas.fill(view.x, view.y, view.cols, view.rows, ' ', Style::bg(black), 0);

    view.fill_rect(canvas, &state.player, '█', Style::fg(accent), 2);

    let bullet = Style::fg(Color::Named(NamedColor::Green)).bold();
    for b in &state.bullets {
        view.fill_rect(canvas, b, '|', bullet, 3);
    }

    let enemy = Style::fg(Color::Named(NamedColor::Magenta));
    for e in &state.enemies {
        view.fill_rect(canvas, e, '▓', enemy, 3);
    }

    let score = format!("Score: {}", state.score);
    let label = Style {
        fg: Some(Color::Named(NamedColor::White)),
        bg: Some(black),
        bold: true,
        dim: false,
    };
    canvas.text(view.x + 1, view.y + 1, &score, label, 4);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArcadeConfig;

    fn view() -> Viewport {
        Viewport {
            x: 0,
            y: 1,
            cols: 40,
            rows: 15,
            cell_width: 10.0,
            cell_height: 20.0,
        }
    }

    #[test]
    fn field_is_cells_times_cell_size() {
        assert_eq!(
            view().field(),
            Field {
                width: 400.0,
                height: 300.0
            }
        );
    }

    #[test]
    fn player_and_score_are_drawn() {
        let v = view();
        let state = GameState::new(v.field(), ArcadeConfig::default());
        let mut canvas = Canvas::new(40, 16);
        draw(&state, &v, &mut canvas, Color::Named(NamedColor::Cyan));
        let grid = canvas.rasterize();

        // Player at (200, 250) in field units, 4x2 cells, shifted down one row.
        assert_eq!(grid[13][20].ch, '█');
        assert_eq!(grid[14][23].ch, '█');
        assert_eq!(grid[13][24].ch, ' ');

        let row: String = grid[2][1..9].iter().map(|c| c.ch).collect();
        assert_eq!(row, "Score: 0");
    }
}
