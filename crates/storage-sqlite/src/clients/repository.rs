//! Client repository backed by SQLite.

use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use consulta_core::clients::{Client, ClientRepositoryTrait, ClientUpdate, NewClient};
use consulta_core::errors::{DatabaseError, Result};

use super::model::{ClientChangesetDB, ClientDB, NewClientDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::clients;

pub struct ClientRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ClientRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ClientRepository { pool, writer }
    }
}

#[async_trait]
impl ClientRepositoryTrait for ClientRepository {
    fn list(&self, owner_id: &str) -> Result<Vec<Client>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = clients::table
            .filter(clients::owner_id.eq(owner_id))
            .select(ClientDB::as_select())
            .order(clients::created_at.asc())
            .load::<ClientDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Client::from).collect())
    }

    async fn create(&self, new_client: NewClient) -> Result<Client> {
        self.writer
            .exec(move |conn| {
                let mut new_db: NewClientDB = new_client.into();
                new_db.id = Some(Uuid::new_v4().to_string());

                let row = diesel::insert_into(clients::table)
                    .values(&new_db)
                    .returning(ClientDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Client::from(row))
            })
            .await
    }

    async fn update(&self, client_update: ClientUpdate) -> Result<Client> {
        self.writer
            .exec(move |conn| {
                let changeset = ClientChangesetDB::from(&client_update);

                let affected = diesel::update(
                    clients::table
                        .filter(clients::id.eq(&client_update.id))
                        .filter(clients::owner_id.eq(&client_update.owner_id)),
                )
                .set(&changeset)
                .execute(conn)
                .map_err(StorageError::from)?;

                if affected == 0 {
                    return Err(DatabaseError::NotFound(format!(
                        "Client {} not found",
                        client_update.id
                    ))
                    .into());
                }

                let row = clients::table
                    .filter(clients::id.eq(&client_update.id))
                    .filter(clients::owner_id.eq(&client_update.owner_id))
                    .select(ClientDB::as_select())
                    .first::<ClientDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Client::from(row))
            })
            .await
    }

    async fn delete(&self, client_id: &str, owner_id: &str) -> Result<usize> {
        let client_id = client_id.to_string();
        let owner_id = owner_id.to_string();
        self.writer
            .exec(move |conn| {
                Ok(diesel::delete(
                    clients::table
                        .filter(clients::id.eq(&client_id))
                        .filter(clients::owner_id.eq(&owner_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
