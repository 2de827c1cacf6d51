//! 内存用户存储，语义与 PostgreSQL 实现一致，数据不持久化

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use tracing::info;
use uuid::Uuid;

use super::{
    model::{User, UserChanges},
    service::UserStore,
};
use crate::core::error::CoreError;

#[derive(Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> CoreError {
    CoreError::InternalServerError("user store lock poisoned".to_string())
}

impl UserStore for MemoryUserStore {
    async fn get_user(&self, id: Uuid) -> Result<User, CoreError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.get(&id).cloned().unwrap_or_default())
    }

    async fn get_all_users(&self) -> Result<Vec<User>, CoreError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.values().cloned().collect())
    }

    async fn create_user(&self, user: User) -> Result<Uuid, CoreError> {
        let mut users = self.users.write().map_err(|_| poisoned())?;
        if users.contains_key(&user.id) {
            return Err(CoreError::Conflict(format!(
                "User {} already exists",
                user.id
            )));
        }

        let id = user.id;
        users.insert(id, user);
        info!("Inserted a single record with id: {}", id);
        Ok(id)
    }

    async fn update_user(&self, id: Uuid, changes: UserChanges) -> Result<u64, CoreError> {
        let mut users = self.users.write().map_err(|_| poisoned())?;
        match users.get_mut(&id) {
            Some(user) => {
                user.name = changes.name;
                user.age = changes.age;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_user(&self, id: Uuid) -> Result<u64, CoreError> {
        let mut users = self.users.write().map_err(|_| poisoned())?;
        Ok(u64::from(users.remove(&id).is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, age: i64) -> User {
        User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            age,
        }
    }

    #[tokio::test]
    async fn test_missing_user_is_empty() {
        let store = MemoryUserStore::new();
        let found = store.get_user(Uuid::new_v4()).await.unwrap();
        assert_eq!(found, User::default());
    }

    #[tokio::test]
    async fn test_duplicate_id_is_conflict() {
        let store = MemoryUserStore::new();
        let ada = user("Ada", 30);
        store.create_user(ada.clone()).await.unwrap();

        let err = store.create_user(ada).await.unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_keeps_id() {
        let store = MemoryUserStore::new();
        let ada = user("Ada", 30);
        store.create_user(ada.clone()).await.unwrap();

        let changes = UserChanges {
            name: "Ada Lovelace".to_string(),
            age: 36,
        };
        assert_eq!(store.update_user(ada.id, changes.clone()).await.unwrap(), 1);
        assert_eq!(store.update_user(Uuid::new_v4(), changes).await.unwrap(), 0);

        let updated = store.get_user(ada.id).await.unwrap();
        assert_eq!(updated.id, ada.id);
        assert_eq!(updated.name, "Ada Lovelace");
        assert_eq!(updated.age, 36);
    }

    #[tokio::test]
    async fn test_delete_counts() {
        let store = MemoryUserStore::new();
        let ada = user("Ada", 30);
        store.create_user(ada.clone()).await.unwrap();

        assert_eq!(store.delete_user(ada.id).await.unwrap(), 1);
        assert_eq!(store.delete_user(ada.id).await.unwrap(), 0);
        assert!(store.get_all_users().await.unwrap().is_empty());
    }
}
