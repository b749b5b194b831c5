//! TOML-backed onboarding record.

use async_trait::async_trait;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

use crate::domain::errors::StoreError;
use crate::domain::ports::OnboardingStore;

const STATE_FILE_NAME: &str = "state.toml";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
struct OnboardingRecord {
    completed_terms_version: Option<u32>,
}

/// Persists the onboarding record as `state.toml` under the platform config
/// directory.
#[derive(Clone)]
pub struct TomlOnboardingStore {
    state_path: Option<PathBuf>,
}

impl Default for TomlOnboardingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TomlOnboardingStore {
    /// Creates a store rooted at the platform config directory.
    ///
    /// If project directories cannot be determined, persistence is disabled
    /// and onboarding will run again on every start.
    #[must_use]
    pub fn new() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("io", "cabview", "cabview") {
            Self {
                state_path: Some(proj_dirs.config_dir().join(STATE_FILE_NAME)),
            }
        } else {
            warn!("Failed to determine project directories. Onboarding persistence disabled.");
            Self { state_path: None }
        }
    }

    /// Creates a store rooted at a specific directory (useful for testing).
    #[must_use]
    pub fn with_dir(dir: &Path) -> Self {
        Self {
            state_path: Some(dir.join(STATE_FILE_NAME)),
        }
    }

    async fn load(&self) -> Result<OnboardingRecord, StoreError> {
        let Some(path) = &self.state_path else {
            return Ok(OnboardingRecord::default());
        };

        if !path.exists() {
            return Ok(OnboardingRecord::default());
        }

        let content = fs::read_to_string(path).await?;
        match toml::from_str(&content) {
            Ok(record) => Ok(record),
            Err(e) => {
                warn!("Failed to parse state file: {}. Resetting onboarding.", e);
                Ok(OnboardingRecord::default())
            }
        }
    }

    async fn save(&self, record: OnboardingRecord) -> Result<(), StoreError> {
        let Some(path) = &self.state_path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = toml::to_string(&record)?;
        fs::write(path, content).await?;

        Ok(())
    }
}

#[async_trait]
impl OnboardingStore for TomlOnboardingStore {
    async fn completed_version(&self) -> Result<Option<u32>, StoreError> {
        Ok(self.load().await?.completed_terms_version)
    }

    async fn mark_complete(&self, version: u32) -> Result<(), StoreError> {
        self.save(OnboardingRecord {
            completed_terms_version: Some(version),
        })
        .await
    }

    async fn reset(&self) -> Result<(), StoreError> {
        self.save(OnboardingRecord::default()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_fresh_store_has_no_record() {
        let dir = tempdir().unwrap();
        let store = TomlOnboardingStore::with_dir(dir.path());

        assert_eq!(store.completed_version().await.unwrap(), None);
        assert!(!store.is_complete(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_mark_complete_round_trips() {
        let dir = tempdir().unwrap();
        let store = TomlOnboardingStore::with_dir(dir.path());

        store.mark_complete(3).await.unwrap();

        assert_eq!(store.completed_version().await.unwrap(), Some(3));
        assert!(store.is_complete(3).await.unwrap());
    }

    #[tokio::test]
    async fn test_version_bump_reopens_onboarding() {
        let dir = tempdir().unwrap();
        let store = TomlOnboardingStore::with_dir(dir.path());

        store.mark_complete(1).await.unwrap();

        assert!(!store.is_complete(2).await.unwrap());
    }

    #[tokio::test]
    async fn test_reset_clears_the_record() {
        let dir = tempdir().unwrap();
        let store = TomlOnboardingStore::with_dir(dir.path());

        store.mark_complete(2).await.unwrap();
        store.reset().await.unwrap();

        assert_eq!(store.completed_version().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_state_file_degrades_to_incomplete() {
        let dir = tempdir().unwrap();
        let store = TomlOnboardingStore::with_dir(dir.path());

        tokio::fs::write(dir.path().join(STATE_FILE_NAME), "not [ valid")
            .await
            .unwrap();

        assert_eq!(store.completed_version().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_record_survives_reload_from_disk() {
        let dir = tempdir().unwrap();

        TomlOnboardingStore::with_dir(dir.path())
            .mark_complete(5)
            .await
            .unwrap();

        let reopened = TomlOnboardingStore::with_dir(dir.path());
        assert!(reopened.is_complete(5).await.unwrap());
    }
}
