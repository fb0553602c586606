//! Client repository and service traits.
//!
//! These traits define the contract for client operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::clients_model::{Client, ClientUpdate, NewClient};
use crate::errors::Result;

/// Trait defining the contract for client repository operations.
///
/// Every method filters strictly by `owner_id`; this equality filter is the
/// sole authorization boundary in the system.
#[async_trait]
pub trait ClientRepositoryTrait: Send + Sync {
    /// Lists all clients belonging to an owner.
    fn list(&self, owner_id: &str) -> Result<Vec<Client>>;

    /// Creates a new client.
    async fn create(&self, new_client: NewClient) -> Result<Client>;

    /// Updates a client, scoped to `(id, owner_id)`.
    ///
    /// Returns `DatabaseError::NotFound` when no row matches.
    async fn update(&self, client_update: ClientUpdate) -> Result<Client>;

    /// Deletes a client, scoped to `(id, owner_id)`.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, client_id: &str, owner_id: &str) -> Result<usize>;
}

/// Trait defining the contract for client service operations.
#[async_trait]
pub trait ClientServiceTrait: Send + Sync {
    fn list_clients(&self, owner_id: &str) -> Result<Vec<Client>>;

    async fn create_client(&self, new_client: NewClient) -> Result<Client>;

    async fn update_client(&self, client_update: ClientUpdate) -> Result<Client>;

    async fn delete_client(&self, client_id: &str, owner_id: &str) -> Result<usize>;
}
