//! Expense service implementation.

use log::debug;
use std::sync::Arc;

use super::expenses_model::{
    NewPersonalExpense, NewProfessionalExpense, PersonalExpense, PersonalExpenseUpdate,
    ProfessionalExpense, ProfessionalExpenseUpdate,
};
use super::expenses_traits::{
    ExpenseServiceTrait, PersonalExpenseRepositoryTrait, ProfessionalExpenseRepositoryTrait,
};
use crate::errors::Result;

/// Service for managing personal and professional expenses.
pub struct ExpenseService {
    personal_repository: Arc<dyn PersonalExpenseRepositoryTrait>,
    professional_repository: Arc<dyn ProfessionalExpenseRepositoryTrait>,
}

impl ExpenseService {
    /// Creates a new ExpenseService instance.
    pub fn new(
        personal_repository: Arc<dyn PersonalExpenseRepositoryTrait>,
        professional_repository: Arc<dyn ProfessionalExpenseRepositoryTrait>,
    ) -> Self {
        Self {
            personal_repository,
            professional_repository,
        }
    }
}

#[async_trait::async_trait]
impl ExpenseServiceTrait for ExpenseService {
    fn list_personal_expenses(&self, owner_id: &str) -> Result<Vec<PersonalExpense>> {
        self.personal_repository.list(owner_id)
    }

    async fn create_personal_expense(
        &self,
        new_expense: NewPersonalExpense,
    ) -> Result<PersonalExpense> {
        debug!(
            "Creating personal expense for owner {}",
            new_expense.owner_id
        );
        self.personal_repository.create(new_expense).await
    }

    async fn update_personal_expense(
        &self,
        expense_update: PersonalExpenseUpdate,
    ) -> Result<PersonalExpense> {
        self.personal_repository.update(expense_update).await
    }

    async fn delete_personal_expense(&self, expense_id: &str, owner_id: &str) -> Result<usize> {
        self.personal_repository.delete(expense_id, owner_id).await
    }

    fn list_professional_expenses(&self, owner_id: &str) -> Result<Vec<ProfessionalExpense>> {
        self.professional_repository.list(owner_id)
    }

    async fn create_professional_expense(
        &self,
        new_expense: NewProfessionalExpense,
    ) -> Result<ProfessionalExpense> {
        debug!(
            "Creating professional expense for owner {}",
            new_expense.owner_id
        );
        self.professional_repository.create(new_expense).await
    }

    async fn update_professional_expense(
        &self,
        expense_update: ProfessionalExpenseUpdate,
    ) -> Result<ProfessionalExpense> {
        self.professional_repository.update(expense_update).await
    }

    async fn delete_professional_expense(
        &self,
        expense_id: &str,
        owner_id: &str,
    ) -> Result<usize> {
        self.professional_repository
            .delete(expense_id, owner_id)
            .await
    }
}
