use crate::users::{StoreError, User, UserStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// In-memory store with the same uniqueness semantics as the Postgres store.
/// Backs the unit and scenario tests, no persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Mutex<HashMap<Uuid, User>>,
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self
            .users
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(users.values().find(|user| user.email == email).cloned())
    }

    async fn save(&self, user: &User) -> Result<User, StoreError> {
        let mut users = self
            .users
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        if users
            .values()
            .any(|existing| existing.email == user.email && existing.id != user.id)
        {
            return Err(StoreError::DuplicateEmail);
        }

        users.insert(user.id, user.clone());

        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::Role;

    fn user(email: &str, name: &str) -> User {
        User::new(
            Uuid::new_v4(),
            email,
            name,
            "$argon2id$v=19$stub".to_string(),
            Role::User,
        )
    }

    #[tokio::test]
    async fn test_find_by_email_is_exact_match() -> Result<(), StoreError> {
        let store = MemoryStore::default();
        store.save(&user("alice@skydrop.dev", "Alice")).await?;

        assert!(store.find_by_email("alice@skydrop.dev").await?.is_some());
        assert!(store.find_by_email("Alice@skydrop.dev").await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_save_rejects_duplicate_email() -> Result<(), StoreError> {
        let store = MemoryStore::default();
        store.save(&user("alice@skydrop.dev", "Alice")).await?;

        let result = store.save(&user("alice@skydrop.dev", "Imposter")).await;
        assert!(matches!(result, Err(StoreError::DuplicateEmail)));

        let kept = store.find_by_email("alice@skydrop.dev").await?.unwrap();
        assert_eq!(kept.name, "Alice");

        Ok(())
    }

    #[tokio::test]
    async fn test_save_updates_same_id() -> Result<(), StoreError> {
        let store = MemoryStore::default();
        let mut alice = user("alice@skydrop.dev", "Alice");
        store.save(&alice).await?;

        alice.name = "Alice B.".to_string();
        store.save(&alice).await?;

        let kept = store.find_by_email("alice@skydrop.dev").await?.unwrap();
        assert_eq!(kept.name, "Alice B.");

        Ok(())
    }
}
