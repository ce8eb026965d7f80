pub mod cart;
pub mod pricing;
pub mod models;
pub mod checkout;
pub mod lifecycle;

pub use cart::{CartLine, add_to_cart, item_count, remove_line, set_quantity};
pub use pricing::{PriceSummary, PricingConfig, PricingEngine};
pub use models::{Order, OrderLine, OrderStatus, PaymentMethod};
pub use checkout::{CheckoutError, CheckoutRequest, place_order};
pub use lifecycle::OrderError;
