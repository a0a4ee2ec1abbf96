use crate::config::SoundConfig;
use crate::host::Host;
use crate::types::Cue;

/// Mute-aware sound cues.
///
/// `enabled` is the global switch toggled at runtime; the per-cue channels
/// come from config and stay fixed for the session.
#[derive(Debug, Clone)]
pub struct SoundBoard {
    enabled: bool,
    channels: SoundConfig,
}

impl SoundBoard {
    pub fn new(config: &SoundConfig) -> Self {
        SoundBoard {
            enabled: config.enabled,
            channels: config.clone(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the global switch and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn allows(&self, cue: Cue) -> bool {
        self.enabled
            && match cue {
                Cue::Typing => self.channels.typing,
                Cue::Click => self.channels.click,
                Cue::Hover => self.channels.hover,
                Cue::Success => self.channels.success,
            }
    }

    pub fn typewriter_clicks(&self) -> bool {
        self.channels.typewriter_clicks
    }

    pub fn play(&self, cue: Cue, host: &mut dyn Host) {
        if self.allows(cue) {
            host.play(cue);
        }
    }
}
