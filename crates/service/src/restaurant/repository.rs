use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::restaurant::{self, Model, RestaurantCreate, RestaurantUpdate};

use crate::errors::ServiceError;

/// Persistence seam for restaurants. Every method maps to exactly one statement.
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn create(&self, input: &RestaurantCreate) -> Result<i32, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError>;
    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Model>, ServiceError>;
    /// Returns rows affected.
    async fn update(&self, id: i32, patch: &RestaurantUpdate) -> Result<u64, ServiceError>;
    /// Returns rows affected.
    async fn delete(&self, id: i32) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmRestaurantRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmRestaurantRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl RestaurantRepository for SeaOrmRestaurantRepository {
    async fn create(&self, input: &RestaurantCreate) -> Result<i32, ServiceError> {
        Ok(restaurant::create(&self.db, input).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError> {
        Ok(restaurant::find(&self.db, id).await?)
    }

    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Model>, ServiceError> {
        Ok(restaurant::list_page(&self.db, offset, limit).await?)
    }

    async fn update(&self, id: i32, patch: &RestaurantUpdate) -> Result<u64, ServiceError> {
        Ok(restaurant::update(&self.db, id, patch).await?)
    }

    async fn delete(&self, id: i32) -> Result<u64, ServiceError> {
        Ok(restaurant::delete(&self.db, id).await?)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    pub struct MockRestaurantRepository {
        rows: Mutex<BTreeMap<i32, Model>>,
        last_id: Mutex<i32>,
        calls: AtomicUsize,
        failing: AtomicBool,
    }

    impl MockRestaurantRepository {
        pub fn new() -> Self { Self::default() }

        /// Every call returns a database error.
        pub fn failing() -> Self {
            let repo = Self::default();
            repo.failing.store(true, Ordering::SeqCst);
            repo
        }

        /// Number of store calls seen so far, including failed ones.
        pub fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }

        fn enter(&self) -> Result<MutexGuard<'_, BTreeMap<i32, Model>>, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.load(Ordering::SeqCst) {
                return Err(ServiceError::Db("connection refused".into()));
            }
            self.rows.lock().map_err(|_| ServiceError::Db("mock store poisoned".into()))
        }
    }

    #[async_trait]
    impl RestaurantRepository for MockRestaurantRepository {
        async fn create(&self, input: &RestaurantCreate) -> Result<i32, ServiceError> {
            let mut rows = self.enter()?;
            let mut last_id = self.last_id.lock().map_err(|_| ServiceError::Db("mock store poisoned".into()))?;
            *last_id += 1;
            let now = Utc::now().into();
            let model = Model {
                id: *last_id,
                name: input.name.clone(),
                address: input.address.clone(),
                created_at: now,
                updated_at: now,
            };
            rows.insert(model.id, model);
            Ok(*last_id)
        }

        async fn get(&self, id: i32) -> Result<Option<Model>, ServiceError> {
            let rows = self.enter()?;
            Ok(rows.get(&id).cloned())
        }

        async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Model>, ServiceError> {
            let rows = self.enter()?;
            Ok(rows
                .values()
                .rev()
                .skip(usize::try_from(offset).unwrap_or(usize::MAX))
                .take(usize::try_from(limit).unwrap_or(usize::MAX))
                .cloned()
                .collect())
        }

        async fn update(&self, id: i32, patch: &RestaurantUpdate) -> Result<u64, ServiceError> {
            let mut rows = self.enter()?;
            match rows.get_mut(&id) {
                Some(model) if !patch.is_empty() => {
                    patch.apply_to(model);
                    model.updated_at = Utc::now().into();
                    Ok(1)
                }
                _ => Ok(0),
            }
        }

        async fn delete(&self, id: i32) -> Result<u64, ServiceError> {
            let mut rows = self.enter()?;
            Ok(rows.remove(&id).map_or(0, |_| 1))
        }
    }
}
