//! Settings module - domain models, services, and traits.

mod settings_model;
mod settings_service;
mod settings_traits;


pub use settings_model::{SettingsUpdate, TherapistSettings};
pub use settings_service::SettingsService;
pub use settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
