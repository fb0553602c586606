//! Expense repository and service traits.

use async_trait::async_trait;

use super::expenses_model::{
    NewPersonalExpense, NewProfessionalExpense, PersonalExpense, PersonalExpenseUpdate,
    ProfessionalExpense, ProfessionalExpenseUpdate,
};
use crate::errors::Result;

/// Trait defining the contract for personal expense repository operations.
///
/// Every method filters strictly by `owner_id`.
#[async_trait]
pub trait PersonalExpenseRepositoryTrait: Send + Sync {
    /// Lists all personal expenses belonging to an owner.
    fn list(&self, owner_id: &str) -> Result<Vec<PersonalExpense>>;

    /// Creates a new personal expense.
    async fn create(&self, new_expense: NewPersonalExpense) -> Result<PersonalExpense>;

    /// Updates an expense, scoped to `(id, owner_id)`.
    async fn update(&self, expense_update: PersonalExpenseUpdate) -> Result<PersonalExpense>;

    /// Deletes an expense, scoped to `(id, owner_id)`. Returns the number of
    /// deleted records.
    async fn delete(&self, expense_id: &str, owner_id: &str) -> Result<usize>;
}

/// Trait defining the contract for professional expense repository operations.
#[async_trait]
pub trait ProfessionalExpenseRepositoryTrait: Send + Sync {
    /// Lists all professional expenses belonging to an owner.
    fn list(&self, owner_id: &str) -> Result<Vec<ProfessionalExpense>>;

    /// Creates a new professional expense.
    async fn create(&self, new_expense: NewProfessionalExpense) -> Result<ProfessionalExpense>;

    /// Updates an expense, scoped to `(id, owner_id)`.
    async fn update(&self, expense_update: ProfessionalExpenseUpdate)
        -> Result<ProfessionalExpense>;

    /// Deletes an expense, scoped to `(id, owner_id)`. Returns the number of
    /// deleted records.
    async fn delete(&self, expense_id: &str, owner_id: &str) -> Result<usize>;
}

/// Service surface over both expense families.
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    fn list_personal_expenses(&self, owner_id: &str) -> Result<Vec<PersonalExpense>>;
    async fn create_personal_expense(
        &self,
        new_expense: NewPersonalExpense,
    ) -> Result<PersonalExpense>;
    async fn update_personal_expense(
        &self,
        expense_update: PersonalExpenseUpdate,
    ) -> Result<PersonalExpense>;
    async fn delete_personal_expense(&self, expense_id: &str, owner_id: &str) -> Result<usize>;

    fn list_professional_expenses(&self, owner_id: &str) -> Result<Vec<ProfessionalExpense>>;
    async fn create_professional_expense(
        &self,
        new_expense: NewProfessionalExpense,
    ) -> Result<ProfessionalExpense>;
    async fn update_professional_expense(
        &self,
        expense_update: ProfessionalExpenseUpdate,
    ) -> Result<ProfessionalExpense>;
    async fn delete_professional_expense(&self, expense_id: &str, owner_id: &str)
        -> Result<usize>;
}
