//! Client management service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::client::{Client, ClientPayload},
    repository::Repository,
    services::non_empty,
};

#[derive(Clone)]
pub struct ClientsService {
    repository: Repository,
}

impl ClientsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn create(&self, data: ClientPayload) -> AppResult<Client> {
        data.validate()?;
        self.repository.clients.create(Uuid::new_v4(), &data).await
    }

    pub async fn list(&self) -> AppResult<Vec<Client>> {
        non_empty(self.repository.clients.list().await?, "No clients found")
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Client> {
        self.repository.clients.get_by_id(id).await
    }

    pub async fn update(&self, id: Uuid, data: ClientPayload) -> AppResult<Client> {
        data.validate()?;
        self.repository.clients.update(id, &data).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.clients.delete(id).await
    }
}
