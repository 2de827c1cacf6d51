//! 基于 PostgreSQL 的用户存储

use sqlx::postgres::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use super::{
    model::{User, UserChanges},
    service::UserStore,
};
use crate::core::error::CoreError;

// age 统一转换为 BIGINT，INTEGER 列也能解码为 i64
const SELECT_USER: &str = "SELECT id, name, age::BIGINT AS age FROM users WHERE id = $1";
const SELECT_ALL_USERS: &str = "SELECT id, name, age::BIGINT AS age FROM users";
const INSERT_USER: &str = "INSERT INTO users (id, name, age) VALUES ($1, $2, $3) RETURNING id";
const UPDATE_USER: &str = "UPDATE users SET name = $2, age = $3 WHERE id = $1";
const DELETE_USER: &str = "DELETE FROM users WHERE id = $1";

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserStore for PgUserStore {
    async fn get_user(&self, id: Uuid) -> Result<User, CoreError> {
        let user = sqlx::query_as::<_, User>(SELECT_USER)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match user {
            Some(user) => Ok(user),
            None => {
                debug!("No rows were returned for user {}", id);
                Ok(User::default())
            }
        }
    }

    async fn get_all_users(&self) -> Result<Vec<User>, CoreError> {
        let users = sqlx::query_as::<_, User>(SELECT_ALL_USERS)
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn create_user(&self, user: User) -> Result<Uuid, CoreError> {
        let (id,): (Uuid,) = sqlx::query_as(INSERT_USER)
            .bind(user.id)
            .bind(&user.name)
            .bind(user.age)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                let duplicate = e
                    .as_database_error()
                    .is_some_and(|db_err| db_err.is_unique_violation());
                if duplicate {
                    CoreError::Conflict(format!("User {} already exists", user.id))
                } else {
                    CoreError::from(e)
                }
            })?;

        info!("Inserted a single record with id: {}", id);
        Ok(id)
    }

    async fn update_user(&self, id: Uuid, changes: UserChanges) -> Result<u64, CoreError> {
        let rows_affected = sqlx::query(UPDATE_USER)
            .bind(id)
            .bind(&changes.name)
            .bind(changes.age)
            .execute(&self.pool)
            .await?
            .rows_affected();

        info!("Updated user {}: {} row(s) affected", id, rows_affected);
        Ok(rows_affected)
    }

    async fn delete_user(&self, id: Uuid) -> Result<u64, CoreError> {
        let rows_affected = sqlx::query(DELETE_USER)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        info!("Deleted user {}: {} row(s) affected", id, rows_affected);
        Ok(rows_affected)
    }
}
