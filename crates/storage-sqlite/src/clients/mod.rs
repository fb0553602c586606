//! SQLite storage implementation for clients.

mod model;
mod repository;

pub use model::{ClientChangesetDB, ClientDB, NewClientDB};
pub use repository::ClientRepository;
