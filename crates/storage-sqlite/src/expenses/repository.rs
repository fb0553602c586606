//! Expense repositories backed by SQLite.

use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use consulta_core::errors::{DatabaseError, Result};
use consulta_core::expenses::{
    NewPersonalExpense, NewProfessionalExpense, PersonalExpense, PersonalExpenseRepositoryTrait,
    PersonalExpenseUpdate, ProfessionalExpense, ProfessionalExpenseRepositoryTrait,
    ProfessionalExpenseUpdate,
};

use super::model::{
    NewPersonalExpenseDB, NewProfessionalExpenseDB, PersonalExpenseChangesetDB, PersonalExpenseDB,
    ProfessionalExpenseChangesetDB, ProfessionalExpenseDB,
};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{personal_expenses, professional_expenses};

pub struct PersonalExpenseRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PersonalExpenseRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        PersonalExpenseRepository { pool, writer }
    }
}

#[async_trait]
impl PersonalExpenseRepositoryTrait for PersonalExpenseRepository {
    fn list(&self, owner_id: &str) -> Result<Vec<PersonalExpense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = personal_expenses::table
            .filter(personal_expenses::owner_id.eq(owner_id))
            .select(PersonalExpenseDB::as_select())
            .order(personal_expenses::created_at.asc())
            .load::<PersonalExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(PersonalExpense::from).collect())
    }

    async fn create(&self, new_expense: NewPersonalExpense) -> Result<PersonalExpense> {
        self.writer
            .exec(move |conn| {
                let mut new_db: NewPersonalExpenseDB = new_expense.into();
                new_db.id = Some(Uuid::new_v4().to_string());

                let row = diesel::insert_into(personal_expenses::table)
                    .values(&new_db)
                    .returning(PersonalExpenseDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(PersonalExpense::from(row))
            })
            .await
    }

    async fn update(&self, expense_update: PersonalExpenseUpdate) -> Result<PersonalExpense> {
        self.writer
            .exec(move |conn| {
                let changeset = PersonalExpenseChangesetDB::from(&expense_update);

                let affected = diesel::update(
                    personal_expenses::table
                        .filter(personal_expenses::id.eq(&expense_update.id))
                        .filter(personal_expenses::owner_id.eq(&expense_update.owner_id)),
                )
                .set(&changeset)
                .execute(conn)
                .map_err(StorageError::from)?;

                if affected == 0 {
                    return Err(DatabaseError::NotFound(format!(
                        "Personal expense {} not found",
                        expense_update.id
                    ))
                    .into());
                }

                let row = personal_expenses::table
                    .filter(personal_expenses::id.eq(&expense_update.id))
                    .filter(personal_expenses::owner_id.eq(&expense_update.owner_id))
                    .select(PersonalExpenseDB::as_select())
                    .first::<PersonalExpenseDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(PersonalExpense::from(row))
            })
            .await
    }

    async fn delete(&self, expense_id: &str, owner_id: &str) -> Result<usize> {
        let expense_id = expense_id.to_string();
        let owner_id = owner_id.to_string();
        self.writer
            .exec(move |conn| {
                Ok(diesel::delete(
                    personal_expenses::table
                        .filter(personal_expenses::id.eq(&expense_id))
                        .filter(personal_expenses::owner_id.eq(&owner_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}

pub struct ProfessionalExpenseRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ProfessionalExpenseRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ProfessionalExpenseRepository { pool, writer }
    }
}

#[async_trait]
impl ProfessionalExpenseRepositoryTrait for ProfessionalExpenseRepository {
    fn list(&self, owner_id: &str) -> Result<Vec<ProfessionalExpense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = professional_expenses::table
            .filter(professional_expenses::owner_id.eq(owner_id))
            .select(ProfessionalExpenseDB::as_select())
            .order(professional_expenses::created_at.asc())
            .load::<ProfessionalExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(ProfessionalExpense::from).collect())
    }

    async fn create(&self, new_expense: NewProfessionalExpense) -> Result<ProfessionalExpense> {
        self.writer
            .exec(move |conn| {
                let mut new_db: NewProfessionalExpenseDB = new_expense.into();
                new_db.id = Some(Uuid::new_v4().to_string());

                let row = diesel::insert_into(professional_expenses::table)
                    .values(&new_db)
                    .returning(ProfessionalExpenseDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(ProfessionalExpense::from(row))
            })
            .await
    }

    async fn update(
        &self,
        expense_update: ProfessionalExpenseUpdate,
    ) -> Result<ProfessionalExpense> {
        self.writer
            .exec(move |conn| {
                let changeset = ProfessionalExpenseChangesetDB::from(&expense_update);

                let affected = diesel::update(
                    professional_expenses::table
                        .filter(professional_expenses::id.eq(&expense_update.id))
                        .filter(professional_expenses::owner_id.eq(&expense_update.owner_id)),
                )
                .set(&changeset)
                .execute(conn)
                .map_err(StorageError::from)?;

                if affected == 0 {
                    return Err(DatabaseError::NotFound(format!(
                        "Professional expense {} not found",
                        expense_update.id
                    ))
                    .into());
                }

                let row = professional_expenses::table
                    .filter(professional_expenses::id.eq(&expense_update.id))
                    .filter(professional_expenses::owner_id.eq(&expense_update.owner_id))
                    .select(ProfessionalExpenseDB::as_select())
                    .first::<ProfessionalExpenseDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(ProfessionalExpense::from(row))
            })
            .await
    }

    async fn delete(&self, expense_id: &str, owner_id: &str) -> Result<usize> {
        let expense_id = expense_id.to_string();
        let owner_id = owner_id.to_string();
        self.writer
            .exec(move |conn| {
                Ok(diesel::delete(
                    professional_expenses::table
                        .filter(professional_expenses::id.eq(&expense_id))
                        .filter(professional_expenses::owner_id.eq(&owner_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
