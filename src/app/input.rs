use crossterm::event::{Event, KeyEvent, KeyEventKind, KeyModifiers};

use crate::arcade::GameKey;
use crate::config::matches_binding;
use crate::host::Host;
use crate::types::Cue;

use super::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    /// The screen was resized and must be repainted in full.
    Repaint,
    Quit,
}

pub fn handle_event(state: &mut AppState, event: Event, host: &mut dyn Host) -> Action {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key, host),
        Event::Resize(w, h) => {
            state.resize(w, h);
            Action::Repaint
        }
        _ => Action::Continue,
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent, host: &mut dyn Host) -> Action {
    let kb = state.config.key_bindings.clone();

    if matches_binding(&kb.quit, &key) {
        return Action::Quit;
    }

    if state.konami.push(key.code) {
        state.konami_unlocked(host);
        return Action::Continue;
    }

    if state.arcade.is_running() {
        if matches_binding(&kb.close, &key) {
            state.close_arcade();
        } else if matches_binding(&kb.arcade_left, &key) {
            state.arcade_key(GameKey::Left, host);
        } else if matches_binding(&kb.arcade_right, &key) {
            state.arcade_key(GameKey::Right, host);
        } else if matches_binding(&kb.arcade_fire, &key) {
            state.arcade_key(GameKey::Fire, host);
        }
        return Action::Continue;
    }

    if state.palette.is_open() {
        if matches_binding(&kb.close, &key) || matches_binding(&kb.palette, &key) {
            state.palette.close();
        } else if matches_binding(&kb.palette_up, &key) {
            state.palette.move_up();
            state.session.cue(Cue::Hover, host);
        } else if matches_binding(&kb.palette_down, &key) {
            state.palette.move_down();
            state.session.cue(Cue::Hover, host);
        } else if matches_binding(&kb.submit, &key) {
            state.execute_palette(host);
        } else if matches_binding("Backspace", &key) {
            state.palette.backspace();
        } else if let Some(ch) = typed_char(&key) {
            state.palette.push(ch);
        }
        return Action::Continue;
    }

    if state.skills.is_active() {
        if matches_binding(&kb.close, &key) {
            state.skills.cancel();
        } else if matches_binding(&kb.submit, &key) {
            state.skills.finish();
        } else if matches_binding("Backspace", &key) {
            state.skills.backspace();
        } else if let Some(ch) = typed_char(&key) {
            state.skills.push(ch);
        }
        return Action::Continue;
    }

    if matches_binding(&kb.palette, &key) {
        state.palette.toggle();
    } else if matches_binding(&kb.filter, &key) {
        state.filter_key(host);
    } else if matches_binding(&kb.next_section, &key) {
        state.session.section = state.session.section.next();
    } else if matches_binding(&kb.submit, &key) {
        state.submit_input(host);
    } else if matches_binding("Backspace", &key) {
        state.input.pop();
    } else if let Some(ch) = typed_char(&key) {
        state.input.push(ch);
    }
    Action::Continue
}

/// A printable character typed without Ctrl or Alt.
fn typed_char(key: &KeyEvent) -> Option<char> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        crossterm::event::KeyCode::Char(c) if !c.is_control() => Some(c),
        _ => None,
    }
}
