//! User account repository trait

use async_trait::async_trait;

use super::entity::User;
use crate::domain::DomainError;

/// Repository for user account persistence
#[async_trait]
pub trait UserRepository: Send + Sync + std::fmt::Debug {
    /// All accounts
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// One account by id
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError>;

    /// One account by login name
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Insert a new account, returning it with its assigned id
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Replace a persisted account
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Delete by id; false when no such account existed
    async fn delete(&self, id: i32) -> Result<bool, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;
    use std::sync::atomic::{AtomicI32, Ordering};

    /// In-memory implementation for service tests
    #[derive(Debug, Default)]
    pub struct MockUserRepository {
        users: RwLock<HashMap<i32, User>>,
        next_id: AtomicI32,
    }

    impl MockUserRepository {
        pub fn new() -> Self {
            Self {
                users: RwLock::new(HashMap::new()),
                next_id: AtomicI32::new(1),
            }
        }

        /// Seed an account directly, bypassing the pipeline
        pub fn seed(&self, user: User) -> User {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let user = user.with_id(id);
            self.users.write().unwrap().insert(id, user.clone());
            user
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_all(&self) -> Result<Vec<User>, DomainError> {
            let mut users: Vec<User> = self.users.read().unwrap().values().cloned().collect();
            users.sort_by_key(User::id);
            Ok(users)
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
            Ok(self.users.read().unwrap().get(&id).cloned())
        }

        async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
            Ok(self
                .users
                .read()
                .unwrap()
                .values()
                .find(|u| u.username() == username)
                .cloned())
        }

        async fn create(&self, user: User) -> Result<User, DomainError> {
            if self
                .users
                .read()
                .unwrap()
                .values()
                .any(|u| u.username() == user.username())
            {
                return Err(DomainError::conflict(format!(
                    "Username '{}' already exists",
                    user.username()
                )));
            }

            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let user = user.with_id(id);
            self.users.write().unwrap().insert(id, user.clone());
            Ok(user)
        }

        async fn update(&self, user: User) -> Result<User, DomainError> {
            let mut users = self.users.write().unwrap();
            if !users.contains_key(&user.id()) {
                return Err(DomainError::not_found(format!(
                    "User {} not found",
                    user.id()
                )));
            }

            users.insert(user.id(), user.clone());
            Ok(user)
        }

        async fn delete(&self, id: i32) -> Result<bool, DomainError> {
            Ok(self.users.write().unwrap().remove(&id).is_some())
        }
    }
}
