//! SQLite storage implementation for therapist settings.

mod model;
mod repository;

pub use model::{NewTherapistSettingsDB, TherapistSettingsDB};
pub use repository::SettingsRepository;
