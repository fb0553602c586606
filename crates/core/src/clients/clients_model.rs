//! Client domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain model representing a client of the practice.
///
/// `monthly_sessions` and `session_rate` drive the gross income side of the
/// budget calculation: each client contributes `monthly_sessions *
/// session_rate` per month. Non-negative values are expected but not
/// enforced here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub monthly_sessions: i32,
    pub session_rate: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    pub owner_id: String,
    pub name: String,
    pub monthly_sessions: i32,
    pub session_rate: f64,
}

/// Partial update for an existing client. `None` fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientUpdate {
    pub id: String,
    pub owner_id: String,
    pub name: Option<String>,
    pub monthly_sessions: Option<i32>,
    pub session_rate: Option<f64>,
}
