//! Screen — pushes rasterized grids to the terminal.
//!
//! The first grid after construction (or after `invalidate`) is written in
//! full; later grids only write the cells that changed.

use std::io::Write;

use anyhow::Result;
use crossterm::{cursor, queue, style, terminal};

use crate::canvas::{self, CONTINUATION, Grid};
use crate::types::{Color, NamedColor, Style};

#[derive(Default)]
pub struct Screen {
    prev: Option<Grid>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget what is on screen, so the next `present` repaints everything.
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    pub fn present<W: Write>(&mut self, out: &mut W, grid: Grid) -> Result<()> {
        let same_shape = self.prev.as_ref().is_some_and(|prev| {
            prev.len() == grid.len() && prev.first().map(Vec::len) == grid.first().map(Vec::len)
        });

        match &self.prev {
            Some(prev) if same_shape => render_diff(out, prev, &grid)?,
            _ => render_full(out, &grid)?,
        }
        out.flush()?;
        self.prev = Some(grid);
        Ok(())
    }
}

fn render_full<W: Write>(out: &mut W, grid: &Grid) -> Result<()> {
    queue!(out, terminal::Clear(terminal::ClearType::All))?;
    for (y, row) in grid.iter().enumerate() {
        queue!(out, cursor::MoveTo(0, y as u16))?;
        for cell in row {
            if cell.ch == CONTINUATION {
                continue;
            }
            let cs = to_content_style(&cell.style);
            queue!(
                out,
                style::PrintStyledContent(style::StyledContent::new(cs, cell.ch))
            )?;
        }
    }
    Ok(())
}

fn render_diff<W: Write>(out: &mut W, prev: &Grid, next: &Grid) -> Result<()> {
    for change in canvas::diff(prev, next) {
        if change.cell.ch == CONTINUATION {
            continue;
        }
        let cs = to_content_style(&change.cell.style);
        queue!(
            out,
            cursor::MoveTo(change.x, change.y),
            style::PrintStyledContent(style::StyledContent::new(cs, change.cell.ch)),
        )?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Style conversion
// ---------------------------------------------------------------------------

pub fn to_content_style(s: &Style) -> style::ContentStyle {
    let mut cs = style::ContentStyle::default();
    if let Some(fg) = &s.fg {
        cs.foreground_color = Some(to_ct_color(fg));
    }
    if let Some(bg) = &s.bg {
        cs.background_color = Some(to_ct_color(bg));
    }
    if s.bold {
        cs.attributes.set(style::Attribute::Bold);
    }
    if s.dim {
        cs.attributes.set(style::Attribute::Dim);
    }
    cs
}

pub fn to_ct_color(c: &Color) -> style::Color {
    match c {
        Color::Named(n) => match n {
            NamedColor::Black => style::Color::Black,
            NamedColor::Red => style::Color::Red,
            NamedColor::Green => style::Color::Green,
            NamedColor::Yellow => style::Color::Yellow,
            NamedColor::Blue => style::Color::Blue,
            NamedColor::Magenta => style::Color::Magenta,
            NamedColor::Cyan => style::Color::Cyan,
            NamedColor::White => style::Color::White,
        },
        Color::Rgb { r, g, b } => style::Color::Rgb {
            r: *r,
            g: *g,
            b: *b,
        },
    }
}
