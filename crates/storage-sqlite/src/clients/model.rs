//! Database models for clients.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use consulta_core::clients::{Client, ClientUpdate, NewClient};

/// Database model for clients
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::clients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ClientDB {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub monthly_sessions: i32,
    pub session_rate: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new client. Timestamps come from the
/// column defaults.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::clients)]
#[serde(rename_all = "camelCase")]
pub struct NewClientDB {
    pub id: Option<String>,
    pub owner_id: String,
    pub name: String,
    pub monthly_sessions: i32,
    pub session_rate: f64,
}

/// Changeset for partial client updates. `None` fields are skipped;
/// `updated_at` is always refreshed.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::clients)]
pub struct ClientChangesetDB {
    pub name: Option<String>,
    pub monthly_sessions: Option<i32>,
    pub session_rate: Option<f64>,
    pub updated_at: NaiveDateTime,
}

// Conversion to domain models
impl From<ClientDB> for Client {
    fn from(db: ClientDB) -> Self {
        Self {
            id: db.id,
            owner_id: db.owner_id,
            name: db.name,
            monthly_sessions: db.monthly_sessions,
            session_rate: db.session_rate,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewClient> for NewClientDB {
    fn from(domain: NewClient) -> Self {
        Self {
            id: None,
            owner_id: domain.owner_id,
            name: domain.name,
            monthly_sessions: domain.monthly_sessions,
            session_rate: domain.session_rate,
        }
    }
}

impl From<&ClientUpdate> for ClientChangesetDB {
    fn from(domain: &ClientUpdate) -> Self {
        Self {
            name: domain.name.clone(),
            monthly_sessions: domain.monthly_sessions,
            session_rate: domain.session_rate,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
