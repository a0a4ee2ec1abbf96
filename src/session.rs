//! Session — the state one folio run owns explicitly (sound switch, theme,
//! visible section, status line) and the executor that turns `Effect`s into
//! host calls.

use crate::host::Host;
use crate::sound::SoundBoard;
use crate::types::{Cue, Effect, Section, Theme};

#[derive(Debug, Clone)]
pub struct Session {
    pub sound: SoundBoard,
    pub theme: Theme,
    pub section: Section,
    /// One-line message shown in the status bar until replaced.
    pub status: Option<String>,
}

impl Session {
    pub fn new(sound: SoundBoard, theme: Theme) -> Self {
        Session {
            sound,
            theme,
            section: Section::default(),
            status: None,
        }
    }

    pub fn cue(&self, cue: Cue, host: &mut dyn Host) {
        self.sound.play(cue, host);
    }

    /// Execute `effect` against `host`.
    ///
    /// Effects that act on state the session does not own (the scrollback,
    /// the arcade) are handed back to the caller.
    pub fn apply(&mut self, effect: Effect, host: &mut dyn Host) -> Option<Effect> {
        match effect {
            Effect::Navigate(section) => {
                self.section = section;
            }
            Effect::SetTheme(theme) => {
                log::info!("theme set to {}", theme.name());
                self.theme = theme;
                self.status = Some(format!("Theme: {}", theme.name()));
                self.cue(Cue::Click, host);
            }
            Effect::OpenLink(url) => {
                if let Err(e) = host.open_link(url) {
                    log::warn!("open link failed: {e:#}");
                    self.status = Some(format!("Could not open {url}"));
                }
            }
            Effect::Download(download) => match host.save_file(download.file_name, download.contents) {
                Ok(path) => {
                    self.status = Some(format!("Saved {}", path.display()));
                    self.cue(Cue::Success, host);
                }
                Err(e) => {
                    log::warn!("download failed: {e:#}");
                    self.status = Some(format!("Could not save {}", download.file_name));
                }
            },
            Effect::ToggleSound => {
                let on = self.sound.toggle();
                self.status = Some(if on { "Sound on" } else { "Sound muted" }.into());
            }
            Effect::ShowText(text) => {
                self.status = Some(text);
            }
            Effect::Celebrate(kind) => host.celebrate(kind),
            Effect::ClearScrollback | Effect::LaunchArcade => return Some(effect),
        }
        None
    }
}
