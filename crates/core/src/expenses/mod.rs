//! Expenses module - domain models, services, and traits.
//!
//! Personal and professional expenses are separate entities with identical
//! shapes: professional costs belong to the business side of the budget,
//! personal costs only reduce what is left at the end of the month.

mod expenses_model;
mod expenses_service;
mod expenses_traits;


pub use expenses_model::{
    NewPersonalExpense, NewProfessionalExpense, PersonalExpense, PersonalExpenseUpdate,
    ProfessionalExpense, ProfessionalExpenseUpdate,
};
pub use expenses_service::ExpenseService;
pub use expenses_traits::{
    ExpenseServiceTrait, PersonalExpenseRepositoryTrait, ProfessionalExpenseRepositoryTrait,
};
