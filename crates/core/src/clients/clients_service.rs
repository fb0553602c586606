//! Client service implementation.

use log::debug;
use std::sync::Arc;

use super::clients_model::{Client, ClientUpdate, NewClient};
use super::clients_traits::{ClientRepositoryTrait, ClientServiceTrait};
use crate::errors::Result;

/// Service for managing the clients of a practice.
///
/// Input validation (negative rates, empty names) is deliberately left to
/// the presentation layer; the service only scopes and delegates.
pub struct ClientService {
    repository: Arc<dyn ClientRepositoryTrait>,
}

impl ClientService {
    /// Creates a new ClientService instance.
    pub fn new(repository: Arc<dyn ClientRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl ClientServiceTrait for ClientService {
    fn list_clients(&self, owner_id: &str) -> Result<Vec<Client>> {
        self.repository.list(owner_id)
    }

    async fn create_client(&self, new_client: NewClient) -> Result<Client> {
        debug!("Creating client for owner {}", new_client.owner_id);
        self.repository.create(new_client).await
    }

    async fn update_client(&self, client_update: ClientUpdate) -> Result<Client> {
        self.repository.update(client_update).await
    }

    async fn delete_client(&self, client_id: &str, owner_id: &str) -> Result<usize> {
        self.repository.delete(client_id, owner_id).await
    }
}
