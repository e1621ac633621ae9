//! Clients repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::client::{Client, ClientPayload},
};

#[derive(Clone)]
pub struct ClientsRepository {
    pool: Pool<Postgres>,
}

impl ClientsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get client by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Client> {
        sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Client not found".to_string()))
    }

    /// List all clients
    pub async fn list(&self) -> AppResult<Vec<Client>> {
        let rows = sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY last_name, first_name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Insert a client
    pub async fn create(&self, id: Uuid, data: &ClientPayload) -> AppResult<Client> {
        let row = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (id, first_name, last_name, email, address, is_active)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.address)
        .bind(data.is_active_or_default())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Replace a client's fields; omitted optional fields keep their stored value
    pub async fn update(&self, id: Uuid, data: &ClientPayload) -> AppResult<Client> {
        sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET first_name = $1, last_name = $2, email = $3,
                address = COALESCE($4, address), is_active = COALESCE($5, is_active)
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.address)
        .bind(data.is_active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Client not found".to_string()))
    }

    /// Delete a client
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Client not found".to_string()));
        }
        Ok(())
    }
}
