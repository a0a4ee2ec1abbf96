//! Typewriter — the home banner that types a phrase, pauses, deletes it and
//! moves on to the next.

use std::time::Duration;

const TYPE_DELAY: Duration = Duration::from_millis(100);
const DELETE_DELAY: Duration = Duration::from_millis(50);
const HOLD_DELAY: Duration = Duration::from_millis(2000);
const NEXT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// How long to wait before the next `advance`.
    pub delay: Duration,
    /// A character was typed on a beat that should click.
    pub keystroke: bool,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    index: usize,
    shown: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Typewriter {
            phrases,
            index: 0,
            shown: 0,
            deleting: false,
        }
    }

    fn phrase(&self) -> &'static str {
        self.phrases.get(self.index).copied().unwrap_or("")
    }

    /// The visible prefix of the current phrase.
    pub fn text(&self) -> &'static str {
        let phrase = self.phrase();
        let end = phrase
            .char_indices()
            .nth(self.shown)
            .map_or(phrase.len(), |(i, _)| i);
        &phrase[..end]
    }

    pub fn advance(&mut self) -> Step {
        if self.phrases.is_empty() {
            return Step {
                delay: NEXT_DELAY,
                keystroke: false,
            };
        }

        let len = self.phrase().chars().count();
        let mut keystroke = false;
        let mut delay;
        if self.deleting {
            self.shown = self.shown.saturating_sub(1);
            delay = DELETE_DELAY;
        } else {
            self.shown = (self.shown + 1).min(len);
            delay = TYPE_DELAY;
            keystroke = self.shown % 3 == 0;
        }

        if !self.deleting && self.shown == len {
            self.deleting = true;
            delay = HOLD_DELAY;
        } else if self.deleting && self.shown == 0 {
            self.deleting = false;
            self.index = (self.index + 1) % self.phrases.len();
            delay = NEXT_DELAY;
        }

        Step { delay, keystroke }
    }
}
