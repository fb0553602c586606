//! Budget module - the monthly/6-month budget projection.
//!
//! A single read-only aggregation over the owner's clients, expenses, and
//! settings. No state of its own; all data comes through the repository
//! traits at call time.

mod budget_model;
mod budget_service;
mod budget_traits;

#[cfg(test)]
mod budget_service_tests;

pub use budget_model::BudgetSummary;
pub use budget_service::{irpf_rate_for_annual_gross, BudgetService};
pub use budget_traits::BudgetServiceTrait;
