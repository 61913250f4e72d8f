use std::sync::Arc;
use tracing::{debug, instrument};

use models::restaurant::{Model, RestaurantCreate, RestaurantUpdate};

use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::restaurant::repository::RestaurantRepository;

/// Application service for restaurants.
/// Owns the paging defaults and the not-found policy; holds no state besides the store.
#[derive(Clone)]
pub struct RestaurantService {
    repo: Arc<dyn RestaurantRepository>,
}

impl RestaurantService {
    pub fn new(repo: Arc<dyn RestaurantRepository>) -> Self { Self { repo } }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: RestaurantCreate) -> Result<i32, ServiceError> {
        let id = self.repo.create(&input).await?;
        debug!(id, "restaurant created");
        Ok(id)
    }

    /// A missing row is `NotFound`, distinct from a failing store.
    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Model, ServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("restaurant"))
    }

    #[instrument(skip(self))]
    pub async fn list(&self, paging: Pagination) -> Result<Vec<Model>, ServiceError> {
        let (offset, limit) = paging.offset_limit();
        self.repo.list(offset, limit).await
    }

    /// Writes only the fields present in `patch`. An empty patch never reaches the store.
    /// Rows affected are not checked, so updating a missing id is acknowledged.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: RestaurantUpdate) -> Result<(), ServiceError> {
        if patch.is_empty() {
            debug!(id, "empty patch, nothing to write");
            return Ok(());
        }
        let rows = self.repo.update(id, &patch).await?;
        debug!(id, rows, "restaurant updated");
        Ok(())
    }

    /// Idempotent: deleting an absent id succeeds.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let rows = self.repo.delete(id).await?;
        debug!(id, rows, "restaurant deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restaurant::repository::mock::MockRestaurantRepository;

    fn service() -> (RestaurantService, Arc<MockRestaurantRepository>) {
        let repo = Arc::new(MockRestaurantRepository::new());
        (RestaurantService::new(repo.clone()), repo)
    }

    fn input(name: &str, address: &str) -> RestaurantCreate {
        RestaurantCreate { name: name.into(), address: address.into() }
    }

    #[tokio::test]
    async fn create_then_get_returns_same_fields() {
        let (svc, _) = service();
        let id = svc.create(input("Tani", "10 Pham Van Dong")).await.unwrap();
        let r = svc.get(id).await.unwrap();
        assert_eq!(r.id, id);
        assert_eq!(r.name, "Tani");
        assert_eq!(r.address, "10 Pham Van Dong");
    }

    #[tokio::test]
    async fn create_assigns_fresh_ids() {
        let (svc, _) = service();
        let a = svc.create(input("A", "a")).await.unwrap();
        let b = svc.create(input("B", "b")).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let (svc, _) = service();
        assert!(matches!(svc.get(404).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn list_first_page_of_twelve() {
        let (svc, _) = service();
        for i in 1..=12 {
            svc.create(input(&format!("r{i}"), "x")).await.unwrap();
        }
        let ids: Vec<i32> = svc.list(Pagination::new(1, 5)).await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![12, 11, 10, 9, 8]);

        let ids: Vec<i32> = svc.list(Pagination::new(3, 5)).await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn list_defaults_apply_to_non_positive_paging() {
        let (svc, _) = service();
        for i in 1..=8 {
            svc.create(input(&format!("r{i}"), "x")).await.unwrap();
        }
        let expected = svc.list(Pagination::new(1, 5)).await.unwrap();
        assert_eq!(svc.list(Pagination::new(0, 0)).await.unwrap(), expected);
        assert_eq!(svc.list(Pagination::new(-1, -5)).await.unwrap(), expected);
    }

    #[tokio::test]
    async fn list_empty_store_is_empty_vec() {
        let (svc, _) = service();
        assert!(svc.list(Pagination::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_name_keeps_address() {
        let (svc, _) = service();
        svc.create(input("One", "1 street")).await.unwrap();
        let id = svc.create(input("Two", "2 street")).await.unwrap();

        svc.update(id, RestaurantUpdate { name: Some("Mami".into()), address: None }).await.unwrap();
        let r = svc.get(id).await.unwrap();
        assert_eq!(r.name, "Mami");
        assert_eq!(r.address, "2 street");

        svc.update(id, RestaurantUpdate { name: None, address: Some("3 street".into()) }).await.unwrap();
        let r = svc.get(id).await.unwrap();
        assert_eq!(r.name, "Mami");
        assert_eq!(r.address, "3 street");
    }

    #[tokio::test]
    async fn empty_patch_skips_store() {
        let (svc, repo) = service();
        let id = svc.create(input("A", "a")).await.unwrap();
        let before = repo.calls();
        svc.update(id, RestaurantUpdate::default()).await.unwrap();
        assert_eq!(repo.calls(), before);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let (svc, _) = service();
        for _ in 0..3 {
            svc.create(input("x", "y")).await.unwrap();
        }
        svc.delete(3).await.unwrap();
        svc.delete(3).await.unwrap();
        assert!(matches!(svc.get(3).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let svc = RestaurantService::new(Arc::new(MockRestaurantRepository::failing()));
        assert!(matches!(svc.create(input("a", "b")).await, Err(ServiceError::Db(_))));
        assert!(matches!(svc.get(1).await, Err(ServiceError::Db(_))));
        assert!(matches!(svc.list(Pagination::default()).await, Err(ServiceError::Db(_))));
        let patch = RestaurantUpdate { name: Some("x".into()), address: None };
        assert!(matches!(svc.update(1, patch).await, Err(ServiceError::Db(_))));
        assert!(matches!(svc.delete(1).await, Err(ServiceError::Db(_))));
    }
}
