//! SQLite storage implementation for personal and professional expenses.

mod model;
mod repository;

pub use model::{
    NewPersonalExpenseDB, NewProfessionalExpenseDB, PersonalExpenseChangesetDB, PersonalExpenseDB,
    ProfessionalExpenseChangesetDB, ProfessionalExpenseDB,
};
pub use repository::{PersonalExpenseRepository, ProfessionalExpenseRepository};
