//! Service layer providing restaurant CRUD operations on top of models.
//! - Separates business rules (paging defaults, not-found policy) from data access.
//! - The store sits behind `RestaurantRepository` so handlers can run against a fake.

pub mod errors;
pub mod pagination;
pub mod restaurant;
#[cfg(test)]
pub mod test_support;

pub use restaurant::{RestaurantRepository, RestaurantService, SeaOrmRestaurantRepository};
