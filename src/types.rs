//! Shared boundary types for folio.
//!
//! This module defines the drawing contract between the views and the
//! screen (`DrawOp`s rasterized into `Cell` grids) and the small vocabulary
//! shared by the interpreter, palette and session (`Effect`, `Theme`,
//! `Section`, `Cue`).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Shared style primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Named(NamedColor),
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    pub fn fg(color: Color) -> Self {
        Style {
            fg: Some(color),
            ..Style::default()
        }
    }

    pub fn bg(color: Color) -> Self {
        Style {
            bg: Some(color),
            ..Style::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

// ---------------------------------------------------------------------------
// View → Screen boundary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct DrawOp {
    pub x: u16,
    pub y: u16,
    pub ch: char,
    pub style: Style,
    pub z_order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            ch: ' ',
            style: Style::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellChange {
    pub x: u16,
    pub y: u16,
    pub cell: Cell,
}

// ---------------------------------------------------------------------------
// Session vocabulary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Synthwave,
    Matrix,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Dark, Theme::Synthwave, Theme::Matrix];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Synthwave => "synthwave",
            Theme::Matrix => "matrix",
        }
    }

    /// Accent color used for headings, the prompt and the player sprite.
    pub fn accent(self) -> Color {
        match self {
            Theme::Dark => Color::Named(NamedColor::Cyan),
            Theme::Synthwave => Color::Named(NamedColor::Magenta),
            Theme::Matrix => Color::Named(NamedColor::Green),
        }
    }

    /// Color of interpreter output lines.
    pub fn output(self) -> Color {
        match self {
            Theme::Dark | Theme::Matrix => Color::Named(NamedColor::Green),
            Theme::Synthwave => Color::Rgb {
                r: 255,
                g: 170,
                b: 230,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Home,
    Projects,
    Stats,
    Achievements,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Projects,
        Section::Stats,
        Section::Achievements,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::Stats => "GitHub Stats",
            Section::Achievements => "Achievements",
        }
    }

    pub fn next(self) -> Section {
        let i = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

/// Named sound channels. Each can be switched off on its own; all of them
/// are silenced by the global mute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Typing,
    Click,
    Hover,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Celebration {
    Confetti,
    Fireworks,
    MatrixFlash,
}

/// A file the host is asked to write on the user's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: &'static str,
    pub contents: &'static str,
}

/// A side effect requested by a command or a palette item.
///
/// Effects describe *what* should happen; `Session::apply` decides *how*
/// against a `Host`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Navigate(Section),
    SetTheme(Theme),
    OpenLink(&'static str),
    Download(Download),
    ToggleSound,
    ShowText(String),
    Celebrate(Celebration),
    ClearScrollback,
    LaunchArcade,
}
