use std::collections::VecDeque;

use crossterm::event::KeyCode;

const SEQUENCE: [KeyCode; 10] = [
    KeyCode::Up,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Char('b'),
    KeyCode::Char('a'),
];

/// Watches every key press for ↑↑↓↓←→←→BA.
#[derive(Debug, Default)]
pub struct Konami {
    recent: VecDeque<KeyCode>,
}

impl Konami {
    /// Record `code`; true when it completes the sequence.
    pub fn push(&mut self, code: KeyCode) -> bool {
        let code = match code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        self.recent.push_back(code);
        if self.recent.len() > SEQUENCE.len() {
            self.recent.pop_front();
        }
        if self.recent.iter().eq(SEQUENCE.iter()) {
            self.recent.clear();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(k: &mut Konami, keys: &[KeyCode]) -> Vec<bool> {
        keys.iter().map(|c| k.push(*c)).collect()
    }

    #[test]
    fn fires_on_last_key_only() {
        let mut k = Konami::default();
        let hits = feed(&mut k, &SEQUENCE);
        assert_eq!(hits.iter().filter(|h| **h).count(), 1);
        assert!(hits[9]);
    }

    #[test]
    fn tolerates_leading_noise_and_uppercase() {
        let mut k = Konami::default();
        feed(&mut k, &[KeyCode::Char('x'), KeyCode::Up, KeyCode::Enter]);
        let mut keys = SEQUENCE.to_vec();
        keys[8] = KeyCode::Char('B');
        keys[9] = KeyCode::Char('A');
        assert!(*feed(&mut k, &keys).last().unwrap());
    }

    #[test]
    fn broken_sequence_does_not_fire() {
        let mut k = Konami::default();
        let mut keys = SEQUENCE.to_vec();
        keys[4] = KeyCode::Right;
        assert!(!feed(&mut k, &keys).iter().any(|h| *h));
    }
}
