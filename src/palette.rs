//! Palette — the Ctrl-K quick-action overlay.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::profile::{JOKES, Profile};
use crate::types::{Celebration, Download, Effect, Section, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteAction {
    Navigate(Section),
    DownloadResume,
    Theme(Theme),
    ContactEmail,
    ToggleSound,
    Surprise,
}

pub struct PaletteItem {
    pub label: &'static str,
    pub action: PaletteAction,
}

pub const ITEMS: &[PaletteItem] = &[
    PaletteItem {
        label: "Go to Home",
        action: PaletteAction::Navigate(Section::Home),
    },
    PaletteItem {
        label: "Go to Projects",
        action: PaletteAction::Navigate(Section::Projects),
    },
    PaletteItem {
        label: "Download Resume",
        action: PaletteAction::DownloadResume,
    },
    PaletteItem {
        label: "Theme: Dark",
        action: PaletteAction::Theme(Theme::Dark),
    },
    PaletteItem {
        label: "Theme: Synthwave",
        action: PaletteAction::Theme(Theme::Synthwave),
    },
    PaletteItem {
        label: "Theme: Matrix",
        action: PaletteAction::Theme(Theme::Matrix),
    },
    PaletteItem {
        label: "Email Me",
        action: PaletteAction::ContactEmail,
    },
    PaletteItem {
        label: "GitHub Stats",
        action: PaletteAction::Navigate(Section::Stats),
    },
    PaletteItem {
        label: "Toggle Sound",
        action: PaletteAction::ToggleSound,
    },
    PaletteItem {
        label: "Show Achievements",
        action: PaletteAction::Navigate(Section::Achievements),
    },
    PaletteItem {
        label: "Surprise Me",
        action: PaletteAction::Surprise,
    },
];

impl PaletteAction {
    /// Resolve to a concrete effect. `Surprise` rolls `rng` to pick one.
    pub fn effect<R: Rng>(self, profile: &Profile, rng: &mut R) -> Effect {
        match self {
            PaletteAction::Navigate(section) => Effect::Navigate(section),
            PaletteAction::DownloadResume => Effect::Download(Download {
                file_name: profile.resume_file,
                contents: profile.resume,
            }),
            PaletteAction::Theme(theme) => Effect::SetTheme(theme),
            PaletteAction::ContactEmail => Effect::OpenLink(profile.mailto),
            PaletteAction::ToggleSound => Effect::ToggleSound,
            PaletteAction::Surprise => match rng.gen_range(0..5) {
                0 => Effect::Celebrate(Celebration::Confetti),
                1 => Effect::Celebrate(Celebration::MatrixFlash),
                2 => Effect::Celebrate(Celebration::Fireworks),
                3 => {
                    let joke = JOKES.choose(rng).copied().unwrap_or_default();
                    Effect::ShowText(format!("😄 {joke}"))
                }
                _ => Effect::LaunchArcade,
            },
        }
    }
}

#[derive(Debug, Default)]
pub struct Palette {
    open: bool,
    query: String,
    selected: usize,
}

impl Palette {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open with an empty query, or close if already open.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.query.clear();
            self.selected = 0;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn push(&mut self, ch: char) {
        self.query.push(ch);
        self.selected = 0;
    }

    pub fn backspace(&mut self) {
        self.query.pop();
        self.selected = 0;
    }

    /// Items whose label contains the query, ignoring case.
    pub fn visible(&self) -> Vec<&'static PaletteItem> {
        let q = self.query.to_lowercase();
        ITEMS
            .iter()
            .filter(|item| item.label.to_lowercase().contains(&q))
            .collect()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let last = self.visible().len().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }

    pub fn selected_item(&self) -> Option<&'static PaletteItem> {
        self.visible().get(self.selected).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::PROFILE;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn toggle_resets_query() {
        let mut p = Palette::default();
        p.toggle();
        p.push('x');
        p.toggle();
        assert!(!p.is_open());
        p.toggle();
        assert!(p.is_open());
        assert_eq!(p.query(), "");
        assert_eq!(p.visible().len(), ITEMS.len());
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let mut p = Palette::default();
        p.toggle();
        for ch in "THEME".chars() {
            p.push(ch);
        }
        let labels: Vec<_> = p.visible().iter().map(|i| i.label).collect();
        assert_eq!(labels, ["Theme: Dark", "Theme: Synthwave", "Theme: Matrix"]);
    }

    #[test]
    fn selection_stays_within_visible_items() {
        let mut p = Palette::default();
        p.toggle();
        for ch in "go to".chars() {
            p.push(ch);
        }
        p.move_up();
        assert_eq!(p.selected(), 0);
        for _ in 0..5 {
            p.move_down();
        }
        assert_eq!(p.selected_item().map(|i| i.label), Some("Go to Projects"));
    }

    #[test]
    fn no_match_selects_nothing() {
        let mut p = Palette::default();
        p.toggle();
        p.push('#');
        assert!(p.selected_item().is_none());
    }

    #[test]
    fn email_opens_mailto() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            PaletteAction::ContactEmail.effect(&PROFILE, &mut rng),
            Effect::OpenLink("mailto:likeshbarve08@gmail.com")
        );
    }

    #[test]
    fn surprise_always_resolves_to_a_known_effect() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            match PaletteAction::Surprise.effect(&PROFILE, &mut rng) {
                Effect::Celebrate(_) | Effect::LaunchArcade => {}
                Effect::ShowText(text) => assert!(JOKES.iter().any(|j| text.contains(j))),
                other => panic!("unexpected {other:?}"),
            }
        }
    }
}
