//! Onboarding record port definition.

use crate::domain::errors::StoreError;
use async_trait::async_trait;

/// Port for the collaborator that persists onboarding completion.
///
/// Completion is recorded per terms version: bumping the current version
/// makes an old record incomplete again.
#[async_trait]
pub trait OnboardingStore: Send + Sync {
    /// The terms version this installation last completed onboarding for,
    /// or `None` if onboarding never completed.
    async fn completed_version(&self) -> Result<Option<u32>, StoreError>;

    /// Records that onboarding completed for `version`.
    async fn mark_complete(&self, version: u32) -> Result<(), StoreError>;

    /// Clears the record so onboarding runs again on the next start.
    async fn reset(&self) -> Result<(), StoreError>;

    /// Whether onboarding is complete for the given current terms version.
    async fn is_complete(&self, current_version: u32) -> Result<bool, StoreError> {
        Ok(self.completed_version().await? == Some(current_version))
    }
}

#[cfg(test)]
pub mod mock {
    use super::{OnboardingStore, StoreError};
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock onboarding store backed by memory.
    pub struct MockOnboardingStore {
        version: Arc<RwLock<Option<u32>>>,
        fail_writes: bool,
    }

    impl MockOnboardingStore {
        /// Store with no completion record.
        pub fn new() -> Self {
            Self {
                version: Arc::new(RwLock::new(None)),
                fail_writes: false,
            }
        }

        /// Store that already recorded completion for `version`.
        pub fn with_version(version: u32) -> Self {
            Self {
                version: Arc::new(RwLock::new(Some(version))),
                fail_writes: false,
            }
        }

        /// Store whose writes fail with an IO error.
        pub fn failing() -> Self {
            Self {
                version: Arc::new(RwLock::new(None)),
                fail_writes: true,
            }
        }

        /// The currently recorded version.
        pub async fn recorded_version(&self) -> Option<u32> {
            *self.version.read().await
        }
    }

    #[async_trait]
    impl OnboardingStore for MockOnboardingStore {
        async fn completed_version(&self) -> Result<Option<u32>, StoreError> {
            Ok(*self.version.read().await)
        }

        async fn mark_complete(&self, version: u32) -> Result<(), StoreError> {
            if self.fail_writes {
                return Err(StoreError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "mock write failure",
                )));
            }
            *self.version.write().await = Some(version);
            Ok(())
        }

        async fn reset(&self) -> Result<(), StoreError> {
            if self.fail_writes {
                return Err(StoreError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "mock write failure",
                )));
            }
            *self.version.write().await = None;
            Ok(())
        }
    }
}
