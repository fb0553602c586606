//! Database models for expenses.
//!
//! Personal and professional expenses live in separate tables with the same
//! shape; the two model families below mirror that split.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use consulta_core::expenses::{
    NewPersonalExpense, NewProfessionalExpense, PersonalExpense, PersonalExpenseUpdate,
    ProfessionalExpense, ProfessionalExpenseUpdate,
};

/// Database model for personal expenses
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::personal_expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct PersonalExpenseDB {
    pub id: String,
    pub owner_id: String,
    pub description: String,
    pub cost: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a personal expense.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::personal_expenses)]
#[serde(rename_all = "camelCase")]
pub struct NewPersonalExpenseDB {
    pub id: Option<String>,
    pub owner_id: String,
    pub description: String,
    pub cost: f64,
}

/// Changeset for partial personal expense updates.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::personal_expenses)]
pub struct PersonalExpenseChangesetDB {
    pub description: Option<String>,
    pub cost: Option<f64>,
    pub updated_at: NaiveDateTime,
}

/// Database model for professional expenses
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::professional_expenses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalExpenseDB {
    pub id: String,
    pub owner_id: String,
    pub description: String,
    pub cost: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a professional expense.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::professional_expenses)]
#[serde(rename_all = "camelCase")]
pub struct NewProfessionalExpenseDB {
    pub id: Option<String>,
    pub owner_id: String,
    pub description: String,
    pub cost: f64,
}

/// Changeset for partial professional expense updates.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::professional_expenses)]
pub struct ProfessionalExpenseChangesetDB {
    pub description: Option<String>,
    pub cost: Option<f64>,
    pub updated_at: NaiveDateTime,
}

// Conversion to domain models
impl From<PersonalExpenseDB> for PersonalExpense {
    fn from(db: PersonalExpenseDB) -> Self {
        Self {
            id: db.id,
            owner_id: db.owner_id,
            description: db.description,
            cost: db.cost,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewPersonalExpense> for NewPersonalExpenseDB {
    fn from(domain: NewPersonalExpense) -> Self {
        Self {
            id: None,
            owner_id: domain.owner_id,
            description: domain.description,
            cost: domain.cost,
        }
    }
}

impl From<&PersonalExpenseUpdate> for PersonalExpenseChangesetDB {
    fn from(domain: &PersonalExpenseUpdate) -> Self {
        Self {
            description: domain.description.clone(),
            cost: domain.cost,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

impl From<ProfessionalExpenseDB> for ProfessionalExpense {
    fn from(db: ProfessionalExpenseDB) -> Self {
        Self {
            id: db.id,
            owner_id: db.owner_id,
            description: db.description,
            cost: db.cost,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewProfessionalExpense> for NewProfessionalExpenseDB {
    fn from(domain: NewProfessionalExpense) -> Self {
        Self {
            id: None,
            owner_id: domain.owner_id,
            description: domain.description,
            cost: domain.cost,
        }
    }
}

impl From<&ProfessionalExpenseUpdate> for ProfessionalExpenseChangesetDB {
    fn from(domain: &ProfessionalExpenseUpdate) -> Self {
        Self {
            description: domain.description.clone(),
            cost: domain.cost,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
