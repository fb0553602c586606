//! Settings repository backed by SQLite.

use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use consulta_core::errors::Result;
use consulta_core::settings::{SettingsRepositoryTrait, SettingsUpdate, TherapistSettings};

use super::model::{NewTherapistSettingsDB, TherapistSettingsDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::therapist_settings;

pub struct SettingsRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SettingsRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SettingsRepository { pool, writer }
    }
}

#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    fn get_by_owner(&self, owner_id: &str) -> Result<Option<TherapistSettings>> {
        let mut conn = get_connection(&self.pool)?;
        let row = therapist_settings::table
            .filter(therapist_settings::owner_id.eq(owner_id))
            .select(TherapistSettingsDB::as_select())
            .first::<TherapistSettingsDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(TherapistSettings::from))
    }

    async fn upsert(&self, settings_update: SettingsUpdate) -> Result<TherapistSettings> {
        self.writer
            .exec(move |conn| {
                let new_db = NewTherapistSettingsDB {
                    id: Uuid::new_v4().to_string(),
                    owner_id: settings_update.owner_id.clone(),
                    monthly_savings_goal: settings_update.monthly_savings_goal,
                };

                // The UNIQUE constraint on owner_id turns the second write
                // into an update of the existing row; the original id and
                // created_at are kept.
                diesel::insert_into(therapist_settings::table)
                    .values(&new_db)
                    .on_conflict(therapist_settings::owner_id)
                    .do_update()
                    .set((
                        therapist_settings::monthly_savings_goal
                            .eq(settings_update.monthly_savings_goal),
                        therapist_settings::updated_at.eq(chrono::Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                let row = therapist_settings::table
                    .filter(therapist_settings::owner_id.eq(&settings_update.owner_id))
                    .select(TherapistSettingsDB::as_select())
                    .first::<TherapistSettingsDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(TherapistSettings::from(row))
            })
            .await
    }
}
