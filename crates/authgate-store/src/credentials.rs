//! Credential store trait and its in-memory implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use authgate_core::error::AppError;
use authgate_core::result::AppResult;
use authgate_entity::user::{NewUser, User};

/// Storage abstraction for user credential records.
///
/// Email lookups are case-insensitive; records are keyed by the lowercased
/// email address and insertion enforces uniqueness on that key.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Insert a new user. Fails with `DuplicateIdentity` if the email is
    /// already registered.
    async fn insert(&self, data: NewUser) -> AppResult<User>;

    /// Replace a user's password hash.
    async fn update_password_hash(&self, user_id: Uuid, password_hash: &str) -> AppResult<()>;

    /// Check whether an email is already registered (case-insensitive).
    async fn exists(&self, email: &str) -> AppResult<bool>;

    /// Count total users.
    async fn count(&self) -> AppResult<u64>;
}

/// In-memory credential store backed by a concurrent map.
///
/// The primary map is keyed by lowercased email; a secondary index maps
/// user ID back to the email key.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    users: Arc<DashMap<String, User>>,
    ids: Arc<DashMap<Uuid, String>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let key = email.to_lowercase();
        Ok(self.users.get(&key).map(|entry| entry.value().clone()))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let Some(key) = self.ids.get(&id).map(|entry| entry.value().clone()) else {
            return Ok(None);
        };
        Ok(self.users.get(&key).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, data: NewUser) -> AppResult<User> {
        let key = data.email.to_lowercase();
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: key.clone(),
            password_hash: data.password_hash,
            first_name: data.first_name,
            last_name: data.last_name,
            role: data.role,
            created_at: now,
            updated_at: now,
            created_by: data.created_by,
        };

        // The entry API makes the uniqueness check and the insert a single
        // atomic operation on the shard lock.
        match self.users.entry(key.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => {
                Err(AppError::duplicate_identity("Email already in use"))
            }
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(user.clone());
                self.ids.insert(user.id, key);
                debug!(user_id = %user.id, role = %user.role, "User record created");
                Ok(user)
            }
        }
    }

    async fn update_password_hash(&self, user_id: Uuid, password_hash: &str) -> AppResult<()> {
        let Some(key) = self.ids.get(&user_id).map(|entry| entry.value().clone()) else {
            return Err(AppError::not_found(format!("User {user_id} not found")));
        };

        match self.users.get_mut(&key) {
            Some(mut entry) => {
                let user = entry.value_mut();
                user.password_hash = password_hash.to_string();
                user.updated_at = Utc::now();
                Ok(())
            }
            None => Err(AppError::not_found(format!("User {user_id} not found"))),
        }
    }

    async fn exists(&self, email: &str) -> AppResult<bool> {
        Ok(self.users.contains_key(&email.to_lowercase()))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.users.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use authgate_entity::user::Role;

    fn new_user(email: &str, role: Role) -> NewUser {
        NewUser {
            email: email.to_string(),
            password_hash: "$argon2id$fake".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            role,
            created_by: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = MemoryCredentialStore::new();
        let user = store.insert(new_user("alice@mail.com", Role::User)).await.unwrap();

        let by_email = store.find_by_email("alice@mail.com").await.unwrap();
        assert_eq!(by_email.as_ref().map(|u| u.id), Some(user.id));

        let by_id = store.find_by_id(user.id).await.unwrap();
        assert_eq!(by_id.map(|u| u.email), Some("alice@mail.com".to_string()));
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_insensitive() {
        let store = MemoryCredentialStore::new();
        store.insert(new_user("Bob@Mail.Com", Role::User)).await.unwrap();

        let found = store.find_by_email("bob@mail.com").await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().email, "bob@mail.com");

        assert!(store.exists("BOB@MAIL.COM").await.unwrap());
        assert!(!store.exists("nobody@mail.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = MemoryCredentialStore::new();
        store.insert(new_user("carol@mail.com", Role::User)).await.unwrap();

        let err = store
            .insert(new_user("CAROL@mail.com", Role::Manager))
            .await
            .unwrap_err();
        assert_eq!(
            err.kind,
            authgate_core::error::ErrorKind::DuplicateIdentity
        );
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_password_hash() {
        let store = MemoryCredentialStore::new();
        let user = store.insert(new_user("dave@mail.com", Role::User)).await.unwrap();

        store
            .update_password_hash(user.id, "$argon2id$new")
            .await
            .unwrap();

        let reloaded = store.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(reloaded.password_hash, "$argon2id$new");
        assert!(reloaded.updated_at >= user.updated_at);
    }

    #[tokio::test]
    async fn test_update_password_hash_unknown_user() {
        let store = MemoryCredentialStore::new();
        let err = store
            .update_password_hash(Uuid::new_v4(), "$argon2id$new")
            .await
            .unwrap_err();
        assert_eq!(err.kind, authgate_core::error::ErrorKind::NotFound);
    }
}
