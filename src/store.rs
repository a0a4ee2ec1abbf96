//! Store — small JSON file of state that survives restarts: the chosen
//! theme and the visitor counter.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::Theme;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub visitor_count: u64,
    #[serde(skip)]
    path: PathBuf,
}

impl Store {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let mut store = match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<Store>(&json) {
                Ok(store) => store,
                Err(e) => {
                    log::warn!("invalid state file {} ({e}), starting fresh", path.display());
                    Store::default()
                }
            },
            Err(_) => Store::default(),
        };
        store.path = path;
        store
    }

    pub fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    /// Count one more visit and return the new total.
    pub fn record_visit(&mut self) -> u64 {
        self.visitor_count += 1;
        self.visitor_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("folio-store-{}-{name}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir.join("state.json")
    }

    #[test]
    fn missing_file_gives_defaults() {
        let store = Store::open(scratch("missing"));
        assert_eq!(store.theme, Theme::Dark);
        assert_eq!(store.visitor_count, 0);
    }

    #[test]
    fn theme_and_visits_survive_reopen() {
        let path = scratch("reopen");
        let mut store = Store::open(&path);
        store.theme = Theme::Matrix;
        assert_eq!(store.record_visit(), 1);
        store.save().unwrap();

        let mut again = Store::open(&path);
        assert_eq!(again.theme, Theme::Matrix);
        assert_eq!(again.record_visit(), 2);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let path = scratch("corrupt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        let store = Store::open(&path);
        assert_eq!(store.visitor_count, 0);
    }
}
