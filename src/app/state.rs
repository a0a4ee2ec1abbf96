use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::arcade::{Arcade, GameKey, Phase};
use crate::config::Config;
use crate::effects::Effects;
use crate::filters::{ProjectFilter, SkillSearch};
use crate::github::StatsView;
use crate::host::Host;
use crate::interpreter::{CommandTable, Terminal};
use crate::konami::Konami;
use crate::palette::Palette;
use crate::profile::{BANNER_PHRASES, PROFILE};
use crate::session::Session;
use crate::sound::SoundBoard;
use crate::store::Store;
use crate::typewriter::Typewriter;
use crate::types::{Cue, Effect, Section};

use super::ui::Layout;

pub struct AppState {
    pub config: Config,
    pub store: Store,
    pub session: Session,
    pub terminal: Terminal,
    /// The line being typed at the terminal prompt.
    pub input: String,
    pub palette: Palette,
    pub project_filter: ProjectFilter,
    pub skills: SkillSearch,
    pub stats: StatsView,
    pub arcade: Arcade,
    pub konami: Konami,
    pub typewriter: Typewriter,
    pub effects: Effects,
    pub rng: StdRng,
    pub term_width: u16,
    pub term_height: u16,
}

impl AppState {
    pub fn new(config: Config, store: Store, term_width: u16, term_height: u16) -> Self {
        let session = Session::new(SoundBoard::new(&config.sound), store.theme);
        let arcade = Arcade::new(config.arcade.clone());
        let mut effects = Effects::default();
        effects.resize(term_width, term_height);
        AppState {
            session,
            terminal: Terminal::new(CommandTable::new(&PROFILE)),
            input: String::new(),
            palette: Palette::default(),
            project_filter: ProjectFilter::default(),
            skills: SkillSearch::default(),
            stats: if config.offline {
                StatsView::Fallback
            } else {
                StatsView::Loading
            },
            arcade,
            konami: Konami::default(),
            typewriter: Typewriter::new(BANNER_PHRASES),
            effects,
            rng: StdRng::from_entropy(),
            config,
            store,
            term_width,
            term_height,
        }
    }

    pub fn layout(&self) -> Layout {
        Layout::compute(self.term_width, self.term_height)
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.term_width = width;
        self.term_height = height;
        self.effects.resize(width, height);
    }

    /// Open a fresh game sized to the current screen.
    pub fn launch_arcade(&mut self) {
        self.palette.close();
        let view = self.layout().arcade_viewport(&self.config.arcade);
        self.arcade.open(view.field());
        self.session.status = Some("DevOps Defender: destroy the incoming incidents!".into());
    }

    pub fn close_arcade(&mut self) {
        if let Some(score) = self.arcade.close() {
            self.session.status = Some(format!("Game over. Final score: {score}"));
        }
    }

    pub fn last_score(&self) -> Option<u32> {
        match self.arcade.phase() {
            Phase::Closed { score } => Some(*score),
            _ => None,
        }
    }

    pub fn arcade_key(&mut self, key: GameKey, host: &mut dyn Host) {
        if self.arcade.press(key) {
            self.session.cue(Cue::Click, host);
        }
    }

    /// Run the prompt's line through the interpreter and clear the prompt.
    pub fn submit_input(&mut self, host: &mut dyn Host) {
        let line = std::mem::take(&mut self.input);
        let leftover = self.terminal.submit(&line, &mut self.session, host);
        self.follow_up(leftover);
    }

    /// Execute the highlighted palette item, if any, and close the palette.
    pub fn execute_palette(&mut self, host: &mut dyn Host) {
        let Some(item) = self.palette.selected_item() else {
            return;
        };
        self.palette.close();
        let effect = item.action.effect(&PROFILE, &mut self.rng);
        log::debug!("palette: {}", item.label);
        let leftover = self.session.apply(effect, host);
        self.follow_up(leftover);
        self.session.cue(Cue::Success, host);
    }

    /// The filter key: next project category on the projects section,
    /// skill search on the home section.
    pub fn filter_key(&mut self, host: &mut dyn Host) {
        match self.session.section {
            Section::Projects => {
                self.project_filter = self.project_filter.next();
                self.session.status = Some(format!("Projects: {}", self.project_filter.label()));
                self.session.cue(Cue::Click, host);
            }
            Section::Home => self.skills.start(),
            Section::Stats | Section::Achievements => {}
        }
    }

    pub fn konami_unlocked(&mut self, host: &mut dyn Host) {
        if self.arcade.is_running() {
            return;
        }
        self.session.cue(Cue::Success, host);
        self.launch_arcade();
        self.session.status =
            Some("🎮 Konami Code Activated! Launching DevOps Defender...".into());
    }

    fn follow_up(&mut self, leftover: Option<Effect>) {
        match leftover {
            Some(Effect::LaunchArcade) => self.launch_arcade(),
            Some(other) => log::debug!("unhandled effect {other:?}"),
            None => {}
        }
    }

    /// Write the theme back to the store when it changed.
    pub fn persist_theme(&mut self) {
        if self.store.theme == self.session.theme {
            return;
        }
        self.store.theme = self.session.theme;
        if let Err(e) = self.store.save() {
            log::warn!("could not persist theme: {e:#}");
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::host::testing::Recorder;
    use crate::types::{Celebration, Theme};

    pub(crate) fn state() -> AppState {
        let dir = std::env::temp_dir().join(format!("folio-app-{}", std::process::id()));
        let mut config = Config::default();
        config.arcade.spawn_chance = 0.0;
        AppState::new(config, Store::open(dir.join("state.json")), 100, 30)
    }

    #[test]
    fn submitting_clears_prompt_and_fills_scrollback() {
        let mut s = state();
        let mut host = Recorder::default();
        s.input = "  WHOAMI ".into();
        s.submit_input(&mut host);
        assert!(s.input.is_empty());
        let lines = s.terminal.scrollback().lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].text().contains("Likesh Barve"));
        assert_eq!(host.cues, vec![Cue::Typing]);
    }

    #[test]
    fn hire_me_asks_host_for_confetti() {
        let mut s = state();
        let mut host = Recorder::default();
        s.input = "sudo hire me".into();
        s.submit_input(&mut host);
        assert_eq!(host.celebrations, vec![Celebration::Confetti]);
    }

    #[test]
    fn palette_theme_item_switches_theme_and_plays_success() {
        let mut s = state();
        let mut host = Recorder::default();
        s.palette.toggle();
        for ch in "matrix".chars() {
            s.palette.push(ch);
        }
        s.execute_palette(&mut host);
        assert!(!s.palette.is_open());
        assert_eq!(s.session.theme, Theme::Matrix);
        assert_eq!(host.cues, vec![Cue::Click, Cue::Success]);
    }

    #[test]
    fn konami_launches_arcade_sized_to_screen() {
        let mut s = state();
        let mut host = Recorder::default();
        s.konami_unlocked(&mut host);
        let game = s.arcade.state().unwrap();
        // 100 columns x 28 body rows at 10x20 units per cell.
        assert_eq!(game.field.width, 1000.0);
        assert_eq!(game.field.height, 560.0);
        assert_eq!(host.cues, vec![Cue::Success]);
    }

    #[test]
    fn closing_arcade_reports_score() {
        let mut s = state();
        s.launch_arcade();
        s.close_arcade();
        assert_eq!(s.last_score(), Some(0));
        assert_eq!(s.session.status.as_deref(), Some("Game over. Final score: 0"));
    }

    #[test]
    fn filter_key_depends_on_section() {
        let mut s = state();
        let mut host = Recorder::default();
        s.filter_key(&mut host);
        assert!(s.skills.is_active());
        assert_eq!(s.project_filter, ProjectFilter::All);

        s.skills.cancel();
        s.session.section = Section::Projects;
        s.filter_key(&mut host);
        assert!(!s.skills.is_active());
        assert_eq!(s.project_filter.label(), "AWS");
        assert_eq!(s.session.status.as_deref(), Some("Projects: AWS"));
        assert_eq!(host.cues, vec![Cue::Click]);
    }

    #[test]
    fn firing_plays_click() {
        let mut s = state();
        let mut host = Recorder::default();
        s.arcade_key(GameKey::Fire, &mut host);
        assert!(host.cues.is_empty());
        s.launch_arcade();
        s.arcade_key(GameKey::Fire, &mut host);
        assert_eq!(host.cues, vec![Cue::Click]);
    }
}
