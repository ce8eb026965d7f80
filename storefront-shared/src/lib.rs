pub mod models;
pub mod money;

pub use models::events::StorefrontEvent;
pub use money::{Cents, format_usd};
