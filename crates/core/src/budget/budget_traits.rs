//! Budget service trait.

use super::budget_model::BudgetSummary;
use crate::errors::Result;

/// Trait defining the contract for the budget calculation.
pub trait BudgetServiceTrait: Send + Sync {
    /// Computes the owner's budget summary from a snapshot of their clients,
    /// expenses, and settings.
    ///
    /// The four underlying reads are independent; there is no transactional
    /// consistency guarantee across them. Any read failure aborts the whole
    /// calculation — no partial results.
    fn calculate_budget(&self, owner_id: &str) -> Result<BudgetSummary>;
}
