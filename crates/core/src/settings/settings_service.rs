//! Settings service implementation.

use log::debug;
use std::sync::Arc;

use super::settings_model::{SettingsUpdate, TherapistSettings};
use super::settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
use crate::errors::Result;

/// Service for managing per-owner settings.
pub struct SettingsService {
    repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    /// Creates a new SettingsService instance.
    pub fn new(repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self, owner_id: &str) -> Result<Option<TherapistSettings>> {
        self.repository.get_by_owner(owner_id)
    }

    async fn upsert_settings(&self, settings_update: SettingsUpdate) -> Result<TherapistSettings> {
        debug!("Upserting settings for owner {}", settings_update.owner_id);
        self.repository.upsert(settings_update).await
    }
}
