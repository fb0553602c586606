//! Settings repository and service traits.

use async_trait::async_trait;

use super::settings_model::{SettingsUpdate, TherapistSettings};
use crate::errors::Result;

/// Repository trait for per-owner settings.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Fetches the settings row for an owner. A missing row is `Ok(None)`,
    /// never an error.
    fn get_by_owner(&self, owner_id: &str) -> Result<Option<TherapistSettings>>;

    /// Creates the owner's settings row on first write, updates it after.
    async fn upsert(&self, settings_update: SettingsUpdate) -> Result<TherapistSettings>;
}

/// Service trait for per-owner settings.
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    fn get_settings(&self, owner_id: &str) -> Result<Option<TherapistSettings>>;

    async fn upsert_settings(&self, settings_update: SettingsUpdate) -> Result<TherapistSettings>;
}
