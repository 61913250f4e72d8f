
/// Wire shape of the entity and its input projections
pub mod serde_tests;
