pub mod app_config;
pub mod memory_repo;
pub mod events;
pub mod seed;

pub use memory_repo::{InMemoryOrderRepository, InMemoryProductRepository};
pub use events::EventPublisher;
