//! Restaurant module: repository abstraction plus the application service on top of it.

pub mod repository;
pub mod service;

pub use repository::{RestaurantRepository, SeaOrmRestaurantRepository};
pub use service::RestaurantService;
