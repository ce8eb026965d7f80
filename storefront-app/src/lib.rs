pub mod state;
pub mod store;
pub mod history;

pub use state::{reduce, Action, AppState};
pub use store::{Store, StoreError};
pub use history::{HistoryError, OrderHistory};
