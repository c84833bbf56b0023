//! Profile repository trait

use async_trait::async_trait;

use super::entity::UserData;
use crate::domain::DomainError;

/// Repository for profile persistence and scoped lookups
#[async_trait]
pub trait UserDataRepository: Send + Sync + std::fmt::Debug {
    /// All profiles
    async fn find_all(&self) -> Result<Vec<UserData>, DomainError>;

    /// Profiles recruited at a given event
    async fn find_by_recruitment_event(&self, event_id: i32) -> Result<Vec<UserData>, DomainError>;

    /// Profiles in a department
    async fn find_by_department(&self, department_id: i32) -> Result<Vec<UserData>, DomainError>;

    /// Profiles in a school year
    async fn find_by_school_year(&self, school_year_id: i32) -> Result<Vec<UserData>, DomainError>;

    /// Profiles from a country
    async fn find_by_country(&self, country_id: i32) -> Result<Vec<UserData>, DomainError>;

    /// One profile by id
    async fn find_by_id(&self, id: i32) -> Result<Option<UserData>, DomainError>;

    /// The profile attached to an account, if any
    async fn find_by_user(&self, user_id: i32) -> Result<Option<UserData>, DomainError>;

    /// Insert a new profile, returning it with its assigned id
    async fn create(&self, user_data: UserData) -> Result<UserData, DomainError>;

    /// Replace a persisted profile
    async fn update(&self, user_data: UserData) -> Result<UserData, DomainError>;

    /// Delete by id; false when no such profile existed
    async fn delete(&self, id: i32) -> Result<bool, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;
    use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};

    /// In-memory implementation for service tests
    #[derive(Debug, Default)]
    pub struct MockUserDataRepository {
        profiles: RwLock<HashMap<i32, UserData>>,
        next_id: AtomicI32,
        writes: AtomicUsize,
    }

    impl MockUserDataRepository {
        pub fn new() -> Self {
            Self {
                profiles: RwLock::new(HashMap::new()),
                next_id: AtomicI32::new(1),
                writes: AtomicUsize::new(0),
            }
        }

        /// Seed a profile directly, bypassing the pipeline
        pub fn seed(&self, user_data: UserData) -> UserData {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let user_data = user_data.with_id(id);
            self.profiles.write().unwrap().insert(id, user_data.clone());
            user_data
        }

        /// Number of create/update/delete calls that reached the store
        pub fn write_count(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }

        fn filter<F>(&self, pred: F) -> Vec<UserData>
        where
            F: Fn(&UserData) -> bool,
        {
            let mut profiles: Vec<UserData> = self
                .profiles
                .read()
                .unwrap()
                .values()
                .filter(|p| pred(p))
                .cloned()
                .collect();
            profiles.sort_by_key(UserData::id);
            profiles
        }
    }

    #[async_trait]
    impl UserDataRepository for MockUserDataRepository {
        async fn find_all(&self) -> Result<Vec<UserData>, DomainError> {
            Ok(self.filter(|_| true))
        }

        async fn find_by_recruitment_event(
            &self,
            event_id: i32,
        ) -> Result<Vec<UserData>, DomainError> {
            Ok(self.filter(|p| p.recruitment_event_id() == event_id))
        }

        async fn find_by_department(
            &self,
            department_id: i32,
        ) -> Result<Vec<UserData>, DomainError> {
            Ok(self.filter(|p| p.department_id() == department_id))
        }

        async fn find_by_school_year(
            &self,
            school_year_id: i32,
        ) -> Result<Vec<UserData>, DomainError> {
            Ok(self.filter(|p| p.school_year_id() == school_year_id))
        }

        async fn find_by_country(&self, country_id: i32) -> Result<Vec<UserData>, DomainError> {
            Ok(self.filter(|p| p.country_id() == country_id))
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<UserData>, DomainError> {
            Ok(self.profiles.read().unwrap().get(&id).cloned())
        }

        async fn find_by_user(&self, user_id: i32) -> Result<Option<UserData>, DomainError> {
            Ok(self
                .profiles
                .read()
                .unwrap()
                .values()
                .find(|p| p.user_id() == user_id)
                .cloned())
        }

        async fn create(&self, user_data: UserData) -> Result<UserData, DomainError> {
            self.writes.fetch_add(1, Ordering::SeqCst);

            if self
                .profiles
                .read()
                .unwrap()
                .values()
                .any(|p| p.user_id() == user_data.user_id())
            {
                return Err(DomainError::conflict(format!(
                    "User {} already has a profile",
                    user_data.user_id()
                )));
            }

            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let user_data = user_data.with_id(id);
            self.profiles.write().unwrap().insert(id, user_data.clone());
            Ok(user_data)
        }

        async fn update(&self, user_data: UserData) -> Result<UserData, DomainError> {
            self.writes.fetch_add(1, Ordering::SeqCst);

            let mut profiles = self.profiles.write().unwrap();
            if !profiles.contains_key(&user_data.id()) {
                return Err(DomainError::not_found(format!(
                    "UserData {} not found",
                    user_data.id()
                )));
            }

            profiles.insert(user_data.id(), user_data.clone());
            Ok(user_data)
        }

        async fn delete(&self, id: i32) -> Result<bool, DomainError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(self.profiles.write().unwrap().remove(&id).is_some())
        }
    }
}
