//! View — composes one full screen onto a `Canvas` from the app state.

use crate::arcade::draw as arcade_draw;
use crate::canvas::{Canvas, char_width};
use crate::github::StatsView;
use crate::interpreter::scrollback::Line;
use crate::menubar::menu_bar;
use crate::palette::Palette;
use crate::profile::PROFILE;
use crate::types::{Color, NamedColor, Section, Style, Theme};

use super::state::AppState;
use super::ui::Layout;

const Z_BASE: i32 = 0;
const Z_PALETTE: i32 = 10;
const Z_EFFECTS: i32 = 20;

pub fn compose(state: &AppState) -> Canvas {
    let layout = state.layout();
    let mut canvas = Canvas::new(layout.width, layout.height);

    // A matrix flash borrows the matrix accent for its duration.
    let theme = if state.effects.flashing() {
        Theme::Matrix
    } else {
        state.session.theme
    };

    if let Some(game) = state.arcade.state() {
        menu_bar(
            &mut canvas,
            layout.menu_y,
            &["[←][→] move", "[Space] fire", "[Esc] close", "[Ctrl-c] quit"],
        );
        let view = layout.arcade_viewport(&state.config.arcade);
        arcade_draw::draw(game, &view, &mut canvas, theme.accent());
    } else {
        if state.palette.is_open() {
            menu_bar(
                &mut canvas,
                layout.menu_y,
                &["[↑][↓] select", "[Enter] run", "[Esc] close"],
            );
        } else if state.skills.is_active() {
            menu_bar(
                &mut canvas,
                layout.menu_y,
                &["[Enter] keep filter", "[Esc] clear", "[Ctrl-c] quit"],
            );
        } else {
            menu_bar(
                &mut canvas,
                layout.menu_y,
                &["[Enter] run", "[Ctrl-k] palette", "[Tab] section", "[Ctrl-c] quit"],
            );
        }
        if layout.section_width > 0 {
            render_section(&mut canvas, &layout, state, theme);
        }
        render_terminal(&mut canvas, &layout, state, theme);
        if state.palette.is_open() {
            render_palette(&mut canvas, &layout, &state.palette, theme);
        }
    }

    render_status(&mut canvas, &layout, state);
    state.effects.draw(&mut canvas, Z_EFFECTS);
    canvas
}

// ---------------------------------------------------------------------------
// Section pane
// ---------------------------------------------------------------------------

fn render_section(canvas: &mut Canvas, layout: &Layout, state: &AppState, theme: Theme) {
    let accent = Style::fg(theme.accent());
    let plain = Style::default();
    let dim = Style::default().dim();
    let x = 1;
    let max_x = layout.section_width.saturating_sub(1);
    let bottom = layout.body_y + layout.body_height;
    let mut y = layout.body_y;

    let mut tab_x = x;
    for section in Section::ALL {
        let style = if section == state.session.section {
            Style::bg(theme.accent()).bold()
        } else {
            dim
        };
        let label = format!(" {} ", section.title());
        tab_x = canvas.text_clipped(tab_x, y, max_x, &label, style, Z_BASE);
    }
    y += 2;

    let mut line = |canvas: &mut Canvas, text: &str, style: Style| {
        if y < bottom {
            canvas.text_clipped(x, y, max_x, text, style, Z_BASE);
        }
        y += 1;
    };

    match state.session.section {
        Section::Home => {
            line(canvas, PROFILE.name, accent.bold());
            line(canvas, PROFILE.role, plain);
            line(canvas, "", plain);
            line(canvas, &format!("$ {}▌", state.typewriter.text()), accent);
            line(canvas, "", plain);
            line(canvas, &format!("Visitors: {}", state.store.visitor_count), dim);
            let sound = if state.session.sound.is_enabled() {
                "on"
            } else {
                "off"
            };
            line(
                canvas,
                &format!("Theme: {}  Sound: {sound}", state.session.theme.name()),
                dim,
            );
            line(canvas, "", plain);
            let search = if state.skills.is_active() {
                format!("Skills  / {}█", state.skills.query())
            } else if state.skills.query().is_empty() {
                "Skills  (Ctrl-f to search)".to_string()
            } else {
                format!("Skills  / {}", state.skills.query())
            };
            line(canvas, &search, accent.bold());
            let rows = state.skills.apply(PROFILE.skills);
            if rows.is_empty() {
                line(canvas, "No matching skills", dim);
            }
            for (area, list) in rows {
                line(canvas, &format!("{area}: {list}"), plain);
            }
        }
        Section::Projects => {
            line(
                canvas,
                &format!("Filter: {}  (Ctrl-f)", state.project_filter.label()),
                dim,
            );
            line(canvas, "", plain);
            for (number, project) in state.project_filter.apply(PROFILE.projects) {
                line(canvas, &format!("{number}. {}", project.title), accent.bold());
                line(canvas, &format!("   {}", project.summary), plain);
            }
            line(canvas, "", plain);
            line(canvas, "Type 'open N' in the terminal to view.", dim);
        }
        Section::Stats => {
            if state.stats == StatsView::Loading {
                line(canvas, "Fetching from GitHub...", dim);
            }
            for (label, value) in state.stats.rows() {
                line(canvas, &format!("{label:<14}{value}"), plain);
            }
            line(canvas, "", plain);
            line(canvas, &format!("github.com/{}", PROFILE.github_user), dim);
        }
        Section::Achievements => {
            for item in PROFILE.achievements {
                line(canvas, &format!("• {item}"), plain);
            }
        }
    }

    let border = Style::default().dim();
    for row in layout.body_y..bottom {
        canvas.put(layout.section_width - 1, row, '│', border, Z_BASE);
    }
}

// ---------------------------------------------------------------------------
// Terminal pane
// ---------------------------------------------------------------------------

/// Break `text` into rows of at most `width` columns.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = char_width(ch);
        if used + w > width {
            rows.push(std::mem::take(&mut row));
            used = 0;
        }
        row.push(ch);
        used += w;
    }
    rows.push(row);
    rows
}

fn render_terminal(canvas: &mut Canvas, layout: &Layout, state: &AppState, theme: Theme) {
    let x = layout.terminal_x + 1;
    let width = layout.terminal_width.saturating_sub(2);
    if width == 0 || layout.body_height < 3 {
        return;
    }
    let prompt = Style::fg(theme.accent()).bold();
    let output = Style::fg(theme.output());

    canvas.text(x, layout.body_y, "Terminal", Style::default().bold(), Z_BASE);

    // Rows between the title and the prompt.
    let log_rows = (layout.body_height - 2) as usize;
    let mut rows: Vec<(String, bool)> = Vec::new();
    for line in state.terminal.scrollback().lines() {
        match line {
            Line::Echo(text) => {
                for row in wrap(&format!("$ {text}"), width) {
                    rows.push((row, true));
                }
            }
            Line::Output(text) => {
                for row in wrap(text, width) {
                    rows.push((row, false));
                }
            }
        }
    }
    let start = rows.len().saturating_sub(log_rows);
    for (i, (text, echo)) in rows[start..].iter().enumerate() {
        let style = if *echo { prompt } else { output };
        canvas.text(x, layout.body_y + 1 + i as u16, text, style, Z_BASE);
    }

    // Prompt: keep the tail of long input visible.
    let prompt_y = layout.body_y + layout.body_height - 1;
    let col = canvas.text(x, prompt_y, "$ ", prompt, Z_BASE);
    let room = width.saturating_sub(3) as usize;
    let chars: Vec<char> = state.input.chars().collect();
    let visible: String = chars[chars.len().saturating_sub(room)..].iter().collect();
    let col = canvas.text(col, prompt_y, &visible, Style::default(), Z_BASE);
    if !state.palette.is_open() {
        canvas.put(col, prompt_y, '█', Style::fg(theme.accent()), Z_BASE);
    }
}

// ---------------------------------------------------------------------------
// Palette overlay
// ---------------------------------------------------------------------------

fn render_palette(canvas: &mut Canvas, layout: &Layout, palette: &Palette, theme: Theme) {
    let items = palette.visible();
    let w: u16 = 36.min(layout.width);
    let h: u16 = (items.len() as u16 + 4).min(layout.body_height);
    if w < 8 || h < 5 {
        return;
    }
    let x = (layout.width - w) / 2;
    let y = layout.body_y + layout.body_height.saturating_sub(h) / 3;
    let black = Color::Named(NamedColor::Black);
    let frame = Style {
        fg: Some(theme.accent()),
        bg: Some(black),
        bold: false,
        dim: false,
    };

    canvas.fill(x, y, w, h, ' ', Style::bg(black), Z_PALETTE);
    for col in x..x + w {
        canvas.put(col, y, '─', frame, Z_PALETTE + 1);
        canvas.put(col, y + h - 1, '─', frame, Z_PALETTE + 1);
    }
    for row in y..y + h {
        canvas.put(x, row, '│', frame, Z_PALETTE + 1);
        canvas.put(x + w - 1, row, '│', frame, Z_PALETTE + 1);
    }
    canvas.put(x, y, '┌', frame, Z_PALETTE + 2);
    canvas.put(x + w - 1, y, '┐', frame, Z_PALETTE + 2);
    canvas.put(x, y + h - 1, '└', frame, Z_PALETTE + 2);
    canvas.put(x + w - 1, y + h - 1, '┘', frame, Z_PALETTE + 2);

    let inner_max = x + w - 1;
    let query = format!("> {}█", palette.query());
    canvas.text_clipped(x + 2, y + 1, inner_max, &query, frame.bold(), Z_PALETTE + 1);

    if items.is_empty() {
        let none = Style {
            dim: true,
            ..Style::bg(black)
        };
        canvas.text_clipped(x + 2, y + 2, inner_max, "No matching commands", none, Z_PALETTE + 1);
        return;
    }
    let rows = h.saturating_sub(4) as usize;
    for (i, item) in items.iter().take(rows).enumerate() {
        let row = y + 2 + i as u16;
        let style = if i == palette.selected() {
            Style {
                fg: Some(black),
                bg: Some(theme.accent()),
                bold: true,
                dim: false,
            }
        } else {
            Style::bg(black)
        };
        let label = format!(" {:<width$}", item.label, width = (w - 5) as usize);
        canvas.text_clipped(x + 1, row, inner_max, &label, style, Z_PALETTE + 1);
    }
}

// ---------------------------------------------------------------------------
// Status bar
// ---------------------------------------------------------------------------

fn render_status(canvas: &mut Canvas, layout: &Layout, state: &AppState) {
    let dim = Style::default().dim();
    if let Some(status) = &state.session.status {
        canvas.text(1, layout.status_y, status, dim, Z_BASE);
    }
    if let Some(score) = state.last_score() {
        let text = format!("Last score: {score} ");
        let x = layout.width.saturating_sub(text.len() as u16);
        canvas.text(x, layout.status_y, &text, dim, Z_BASE);
    }
}
