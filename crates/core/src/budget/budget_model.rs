//! Budget summary model.

use serde::{Deserialize, Serialize};

/// Outcome of a budget calculation, all amounts in currency units per month
/// unless stated otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    /// Monthly gross income over all clients.
    pub gross_income: f64,
    /// Flat 21% VAT on the monthly gross.
    pub vat: f64,
    /// Bracket rate selected from the annualized gross.
    pub irpf_rate: f64,
    /// IRPF charged against the monthly gross.
    pub income_tax: f64,
    /// Sum of professional expense costs.
    pub total_professional: f64,
    /// Sum of personal expense costs.
    pub total_personal: f64,
    /// Gross minus taxes and both expense totals.
    pub net_income: f64,
    /// Net income projected over six months.
    pub projected_savings: f64,
    /// The owner's savings goal over the same six months.
    pub savings_goal: f64,
    /// Projected savings minus the goal.
    pub difference: f64,
}
