use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub key_bindings: KeyBindings,
    #[serde(default)]
    pub sound: SoundConfig,
    #[serde(default)]
    pub arcade: ArcadeConfig,
    /// Where `resume` writes its file. Defaults to the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<PathBuf>,
    /// Skip the GitHub API and show the fallback stats.
    #[serde(default)]
    pub offline: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub submit: String,
    pub palette: String,
    pub close: String,
    pub quit: String,
    pub next_section: String,
    /// Cycle the project category, or search skills on the home section.
    pub filter: String,
    pub palette_up: String,
    pub palette_down: String,
    pub arcade_left: String,
    pub arcade_right: String,
    pub arcade_fire: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            submit: "Enter".into(),
            palette: "Ctrl-k".into(),
            close: "Esc".into(),
            quit: "Ctrl-c".into(),
            next_section: "Tab".into(),
            filter: "Ctrl-f".into(),
            palette_up: "Up".into(),
            palette_down: "Down".into(),
            arcade_left: "Left".into(),
            arcade_right: "Right".into(),
            arcade_fire: "Space".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    /// Initial state of the global mute switch.
    pub enabled: bool,
    pub typing: bool,
    pub click: bool,
    pub hover: bool,
    pub success: bool,
    /// Ring on every third character of the home banner.
    pub typewriter_clicks: bool,
}

impl Default for SoundConfig {
    fn default() -> Self {
        SoundConfig {
            enabled: true,
            typing: true,
            click: true,
            hover: true,
            success: true,
            typewriter_clicks: false,
        }
    }
}

/// Tuning for the arcade. Distances are in field units; one terminal cell
/// is `cell_width` x `cell_height` units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub spawn_chance: f64,
    pub bullet_speed: f32,
    pub enemy_speed: f32,
    pub player_step: f32,
    pub kill_score: u32,
    pub frame_millis: u64,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        ArcadeConfig {
            spawn_chance: 0.02,
            bullet_speed: 5.0,
            enemy_speed: 2.0,
            player_step: 20.0,
            kill_score: 10,
            frame_millis: 16,
            cell_width: 10.0,
            cell_height: 20.0,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let config_path = config_dir().join("config.json");
        match std::fs::read_to_string(&config_path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("invalid config {} ({e}), using defaults", config_path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn download_dir(&self) -> PathBuf {
        self.download_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// `$HOME/.config/folio`, shared by the config, the persisted state and the log.
pub fn config_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
    let mut path = PathBuf::from(home);
    path.push(".config");
    path.push("folio");
    path
}

/// Check whether a crossterm `KeyEvent` matches a binding string from config.
pub fn matches_binding(binding: &str, event: &KeyEvent) -> bool {
    if let Some(rest) = binding.strip_prefix("Alt-") {
        if !event.modifiers.contains(KeyModifiers::ALT) {
            return false;
        }
        return named_or_char(rest, event.code);
    }

    if let Some(rest) = binding.strip_prefix("Ctrl-") {
        if !event.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        return named_or_char(rest, event.code);
    }

    // Plain bindings must not fire while Ctrl or Alt is held.
    if event.modifiers.contains(KeyModifiers::CONTROL)
        || event.modifiers.contains(KeyModifiers::ALT)
    {
        return false;
    }

    named_or_char(binding, event.code)
}

fn named_or_char(name: &str, code: KeyCode) -> bool {
    match name {
        "Right" => code == KeyCode::Right,
        "Left" => code == KeyCode::Left,
        "Up" => code == KeyCode::Up,
        "Down" => code == KeyCode::Down,
        "Enter" => code == KeyCode::Enter,
        "Esc" => code == KeyCode::Esc,
        "Space" => code == KeyCode::Char(' '),
        "Tab" => code == KeyCode::Tab,
        "Backspace" => code == KeyCode::Backspace,
        "Home" => code == KeyCode::Home,
        "End" => code == KeyCode::End,
        s => {
            if let Some(rest) = s.strip_prefix('F') {
                if let Ok(n) = rest.parse::<u8>() {
                    return code == KeyCode::F(n);
                }
            }
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => match code {
                    KeyCode::Char(k) => k.eq_ignore_ascii_case(&c),
                    _ => false,
                },
                _ => false,
            }
        }
    }
}
