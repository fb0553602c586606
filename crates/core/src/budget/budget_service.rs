//! Budget calculation service implementation.

use log::{debug, error};
use std::sync::Arc;

use super::budget_model::BudgetSummary;
use super::budget_traits::BudgetServiceTrait;
use crate::clients::ClientRepositoryTrait;
use crate::constants::{
    IRPF_BRACKETS, IRPF_TOP_RATE, MONTHS_PER_YEAR, PROJECTION_MONTHS, VAT_RATE,
};
use crate::errors::Result;
use crate::expenses::{PersonalExpenseRepositoryTrait, ProfessionalExpenseRepositoryTrait};
use crate::settings::SettingsRepositoryTrait;

/// Selects the IRPF rate for an annual gross income.
///
/// Brackets are evaluated ascending, first match wins, upper bound
/// inclusive. Note the rate is later charged against the *monthly* gross,
/// not de-annualized; that simplification is part of the contract.
pub fn irpf_rate_for_annual_gross(annual_gross: f64) -> f64 {
    for (upper_bound, rate) in IRPF_BRACKETS {
        if annual_gross <= upper_bound {
            return rate;
        }
    }
    IRPF_TOP_RATE
}

/// Replaces non-finite amounts with zero so a stray NaN or infinity in a
/// stored record cannot poison the whole summary.
fn monetary(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Service computing the monthly/6-month budget projection.
///
/// Holds read handles to the four per-owner collections; never mutates
/// anything. The four reads are issued sequentially and independently, so a
/// concurrent edit from another request may land between them; that snapshot
/// looseness is accepted.
pub struct BudgetService {
    client_repository: Arc<dyn ClientRepositoryTrait>,
    personal_expense_repository: Arc<dyn PersonalExpenseRepositoryTrait>,
    professional_expense_repository: Arc<dyn ProfessionalExpenseRepositoryTrait>,
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl BudgetService {
    /// Creates a new BudgetService instance.
    pub fn new(
        client_repository: Arc<dyn ClientRepositoryTrait>,
        personal_expense_repository: Arc<dyn PersonalExpenseRepositoryTrait>,
        professional_expense_repository: Arc<dyn ProfessionalExpenseRepositoryTrait>,
        settings_repository: Arc<dyn SettingsRepositoryTrait>,
    ) -> Self {
        Self {
            client_repository,
            personal_expense_repository,
            professional_expense_repository,
            settings_repository,
        }
    }
}

impl BudgetServiceTrait for BudgetService {
    fn calculate_budget(&self, owner_id: &str) -> Result<BudgetSummary> {
        debug!("Calculating budget for owner {}", owner_id);

        // 1. Gross income: sessions x rate over all clients.
        let clients = self.client_repository.list(owner_id).map_err(|e| {
            error!("Error loading clients for budget calculation: {:?}", e);
            e
        })?;
        let gross_income: f64 = clients
            .iter()
            .map(|c| f64::from(c.monthly_sessions) * monetary(c.session_rate))
            .sum();

        // 2. Flat VAT on the monthly gross.
        let vat = gross_income * VAT_RATE;

        // 3. Bracket rate from the annualized gross, 4. charged against the
        // monthly gross.
        let irpf_rate = irpf_rate_for_annual_gross(gross_income * MONTHS_PER_YEAR);
        let income_tax = gross_income * irpf_rate;

        // 5. / 6. Expense totals, each an independent read.
        let total_professional: f64 = self
            .professional_expense_repository
            .list(owner_id)
            .map_err(|e| {
                error!("Error loading professional expenses: {:?}", e);
                e
            })?
            .iter()
            .map(|e| monetary(e.cost))
            .sum();

        let total_personal: f64 = self
            .personal_expense_repository
            .list(owner_id)
            .map_err(|e| {
                error!("Error loading personal expenses: {:?}", e);
                e
            })?
            .iter()
            .map(|e| monetary(e.cost))
            .sum();

        // 7. Net income after taxes and both expense categories.
        let net_income = gross_income - total_professional - income_tax - vat - total_personal;

        // 8.-10. Six-month projection against the savings goal; a missing
        // settings row means a goal of zero, not a failure.
        let monthly_savings_goal = self
            .settings_repository
            .get_by_owner(owner_id)
            .map_err(|e| {
                error!("Error loading settings for budget calculation: {:?}", e);
                e
            })?
            .map(|s| monetary(s.monthly_savings_goal))
            .unwrap_or(0.0);

        let projected_savings = net_income * PROJECTION_MONTHS;
        let savings_goal = monthly_savings_goal * PROJECTION_MONTHS;
        let difference = projected_savings - savings_goal;

        Ok(BudgetSummary {
            gross_income,
            vat,
            irpf_rate,
            income_tax,
            total_professional,
            total_personal,
            net_income,
            projected_savings,
            savings_goal,
            difference,
        })
    }
}
