//! Expense domain models.
//!
//! Costs are plain `f64` currency amounts. Negative values are not rejected;
//! they flow into the budget arithmetic as-is.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A recurring monthly expense on the personal side of the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalExpense {
    pub id: String,
    pub owner_id: String,
    pub description: String,
    pub cost: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a personal expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPersonalExpense {
    pub owner_id: String,
    pub description: String,
    pub cost: f64,
}

/// Partial update for a personal expense. `None` fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalExpenseUpdate {
    pub id: String,
    pub owner_id: String,
    pub description: Option<String>,
    pub cost: Option<f64>,
}

/// A recurring monthly expense of the professional activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalExpense {
    pub id: String,
    pub owner_id: String,
    pub description: String,
    pub cost: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a professional expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfessionalExpense {
    pub owner_id: String,
    pub description: String,
    pub cost: f64,
}

/// Partial update for a professional expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalExpenseUpdate {
    pub id: String,
    pub owner_id: String,
    pub description: Option<String>,
    pub cost: Option<f64>,
}
