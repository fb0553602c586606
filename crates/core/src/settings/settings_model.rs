//! Therapist settings domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Per-owner configuration row. At most one exists per owner; it is created
/// on first write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TherapistSettings {
    pub id: String,
    pub owner_id: String,
    pub monthly_savings_goal: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Upsert payload for an owner's settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub owner_id: String,
    pub monthly_savings_goal: f64,
}
