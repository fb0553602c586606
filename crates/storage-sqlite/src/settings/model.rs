//! Database models for therapist settings.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use consulta_core::settings::TherapistSettings;

/// Database model for the per-owner settings row
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::therapist_settings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct TherapistSettingsDB {
    pub id: String,
    pub owner_id: String,
    pub monthly_savings_goal: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating the settings row on first write.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::therapist_settings)]
#[serde(rename_all = "camelCase")]
pub struct NewTherapistSettingsDB {
    pub id: String,
    pub owner_id: String,
    pub monthly_savings_goal: f64,
}

// Conversion to domain models
impl From<TherapistSettingsDB> for TherapistSettings {
    fn from(db: TherapistSettingsDB) -> Self {
        Self {
            id: db.id,
            owner_id: db.owner_id,
            monthly_savings_goal: db.monthly_savings_goal,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
