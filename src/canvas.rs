//! Canvas — draw ops in, cell grids out.
//!
//! Views push `DrawOp`s onto a `Canvas`; `rasterize` paints them onto a
//! fixed-size cell grid in z-order, and `diff` computes what changed since
//! the previous grid. Nothing here knows about terminals or escape codes.

use crate::types::{Cell, CellChange, DrawOp, Style};

pub type Grid = Vec<Vec<Cell>>;

/// Placeholder for the right half of a double-width character.
pub const CONTINUATION: char = '\0';

pub struct Canvas {
    pub width: u16,
    pub height: u16,
    ops: Vec<DrawOp>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Canvas {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn put(&mut self, x: u16, y: u16, ch: char, style: Style, z_order: i32) {
        self.ops.push(DrawOp {
            x,
            y,
            ch,
            style,
            z_order,
        });
    }

    /// Write `text` starting at `(x, y)`, clipped at `max_x`. Returns the
    /// column after the last one written.
    pub fn text_clipped(
        &mut self,
        x: u16,
        y: u16,
        max_x: u16,
        text: &str,
        style: Style,
        z_order: i32,
    ) -> u16 {
        let mut col = x;
        for ch in text.chars() {
            let w = char_width(ch);
            if col + w > max_x {
                break;
            }
            self.put(col, y, ch, style, z_order);
            if w == 2 {
                self.put(col + 1, y, CONTINUATION, style, z_order);
            }
            col += w;
        }
        col
    }

    pub fn text(&mut self, x: u16, y: u16, text: &str, style: Style, z_order: i32) -> u16 {
        self.text_clipped(x, y, self.width, text, style, z_order)
    }

    pub fn fill(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: Style, z_order: i32) {
        for row in y..y.saturating_add(h).min(self.height) {
            for col in x..x.saturating_add(w).min(self.width) {
                self.put(col, row, ch, style, z_order);
            }
        }
    }

    /// Rasterize onto a grid. Higher z values paint over lower ones; ops
    /// with equal z keep their push order.
    pub fn rasterize(&self) -> Grid {
        let w = self.width as usize;
        let h = self.height as usize;
        let mut grid = vec![vec![Cell::default(); w]; h];

        let mut ops: Vec<_> = self.ops.iter().collect();
        ops.sort_by_key(|op| op.z_order);

        for op in ops {
            let x = op.x as usize;
            let y = op.y as usize;
            if x < w && y < h {
                grid[y][x] = Cell {
                    ch: op.ch,
                    style: op.style,
                };
            }
        }

        grid
    }
}

/// Compute a cell-level diff between two grids of the same size.
pub fn diff(prev: &[Vec<Cell>], next: &[Vec<Cell>]) -> Vec<CellChange> {
    let mut changes = Vec::new();
    for (y, (prev_row, next_row)) in prev.iter().zip(next.iter()).enumerate() {
        for (x, (prev_cell, next_cell)) in prev_row.iter().zip(next_row.iter()).enumerate() {
            if prev_cell != next_cell {
                changes.push(CellChange {
                    x: x as u16,
                    y: y as u16,
                    cell: next_cell.clone(),
                });
            }
        }
    }
    changes
}

/// Terminal column width of `ch`; emoji and pictographs take two.
pub fn char_width(ch: char) -> u16 {
    match ch as u32 {
        0x1F300..=0x1FAFF | 0x2600..=0x27BF => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, NamedColor};

    #[test]
    fn higher_z_wins() {
        let mut canvas = Canvas::new(3, 1);
        canvas.put(1, 0, 'b', Style::default(), 5);
        canvas.put(1, 0, 'a', Style::default(), 0);
        assert_eq!(canvas.rasterize()[0][1].ch, 'b');
    }

    #[test]
    fn out_of_bounds_ops_are_dropped() {
        let mut canvas = Canvas::new(2, 2);
        canvas.put(5, 0, 'x', Style::default(), 0);
        canvas.fill(1, 1, 10, 10, '#', Style::default(), 0);
        let grid = canvas.rasterize();
        assert_eq!(grid[1][1].ch, '#');
        assert_eq!(grid[0][1].ch, ' ');
    }

    #[test]
    fn text_clips_and_reserves_wide_cells() {
        let mut canvas = Canvas::new(10, 1);
        let end = canvas.text_clipped(0, 0, 4, "a📍bcd", Style::default(), 0);
        assert_eq!(end, 4);
        let grid = canvas.rasterize();
        assert_eq!(grid[0][1].ch, '📍');
        assert_eq!(grid[0][2].ch, CONTINUATION);
        assert_eq!(grid[0][3].ch, 'b');
        assert_eq!(grid[0][4].ch, ' ');
    }

    #[test]
    fn diff_reports_only_changed_cells() {
        let mut a = Canvas::new(3, 2);
        a.text(0, 0, "abc", Style::default(), 0);
        let mut b = Canvas::new(3, 2);
        b.text(0, 0, "abc", Style::default(), 0);
        b.put(2, 1, 'z', Style::fg(Color::Named(NamedColor::Red)), 0);

        let changes = diff(&a.rasterize(), &b.rasterize());
        assert_eq!(changes.len(), 1);
        assert_eq!((changes[0].x, changes[0].y, changes[0].cell.ch), (2, 1, 'z'));
    }
}
