use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::{PrefsPatch, UserPreferences};

/// Persistence for the single `UserPreferences` record.
///
/// One JSON file, one logical writer (the dashboard controller). Reads fail
/// open to defaults and writes are best-effort: persistence must never block
/// or break the UI.
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the persisted record, or defaults when the file is missing or
    /// unparseable. Parse failures are logged and treated as absence.
    pub fn load(&self) -> UserPreferences {
        if !self.path.exists() {
            return UserPreferences::default();
        }

        match self.read_record() {
            Ok(prefs) => prefs,
            Err(e) => {
                log::warn!("Failed to load preferences, using defaults: {:#}", e);
                UserPreferences::default()
            }
        }
    }

    /// Serializes and writes the full record. Write failures are logged, not
    /// propagated.
    pub fn save(&self, prefs: &UserPreferences) {
        if let Err(e) = self.write_record(prefs) {
            log::error!("Failed to save preferences: {:#}", e);
        }
    }

    /// Loads the current record, shallow-merges `patch`, saves and returns
    /// the merged result.
    pub fn update(&self, patch: PrefsPatch) -> UserPreferences {
        let merged = self.load().merged(patch);
        self.save(&merged);
        merged
    }

    fn read_record(&self) -> Result<UserPreferences> {
        let file = File::open(&self.path)
            .context(format!("Failed to open preferences file: {:?}", self.path))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse preferences: {:?}", self.path))
    }

    fn write_record(&self, prefs: &UserPreferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .context(format!("Failed to create directory: {}", parent.display()))?;
            }
        }
        let file = File::create(&self.path)
            .context(format!("Failed to create file: {}", self.path.display()))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, prefs)
            .context(format!("Failed to serialize preferences to: {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Currency, Theme, TimeRange};
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> PrefsStore {
        PrefsStore::new(dir.path().join("prefs.json"))
    }

    #[test]
    fn load_on_empty_storage_returns_defaults() {
        let dir = tempdir().expect("tempdir");
        let store = store_in(&dir);

        let prefs = store.load();
        assert_eq!(prefs, UserPreferences::default());
        assert!(!prefs.selected_coins.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().expect("tempdir");
        let store = store_in(&dir);

        let prefs = UserPreferences {
            selected_coins: vec!["bitcoin".into(), "ethereum".into()],
            selected_coin: "ethereum".into(),
            currency: Currency::Eur,
            time_range: TimeRange::Day,
            theme: Theme::Dark,
        };

        store.save(&prefs);
        assert_eq!(store.load(), prefs);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        let store = store_in(&dir);
        std::fs::write(store.path(), "{not json").expect("write");

        assert_eq!(store.load(), UserPreferences::default());
    }

    #[test]
    fn update_changes_only_patched_fields_and_persists() {
        let dir = tempdir().expect("tempdir");
        let store = store_in(&dir);

        let initial = UserPreferences {
            selected_coins: vec!["bitcoin".into(), "ethereum".into()],
            selected_coin: "ethereum".into(),
            currency: Currency::Eur,
            time_range: TimeRange::Day,
            theme: Theme::Dark,
        };
        store.save(&initial);

        let updated = store.update(PrefsPatch {
            currency: Some(Currency::Usd),
            ..Default::default()
        });

        assert_eq!(updated.currency, Currency::Usd);
        assert_eq!(updated.selected_coins, initial.selected_coins);
        assert_eq!(updated.selected_coin, initial.selected_coin);
        assert_eq!(updated.time_range, initial.time_range);
        assert_eq!(updated.theme, initial.theme);

        // the change is visible to a subsequent load
        assert_eq!(store.load(), updated);
    }
}
