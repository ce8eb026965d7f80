use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use crate::cart::CartLine;
use crate::models::{Order, OrderLine, OrderStatus, PaymentMethod};
use crate::pricing::PricingEngine;

/// Days between placing an order and its estimated delivery.
pub const DEFAULT_DELIVERY_DAYS: u64 = 5;

/// What the cart page collects before handing off to checkout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub shipping_address: String,
    /// Raw selector value, e.g. `credit-card`
    pub payment_method: Option<String>,
}

impl CheckoutRequest {
    pub fn new(shipping_address: &str, payment_method: &str) -> Self {
        Self {
            shipping_address: shipping_address.to_string(),
            payment_method: Some(payment_method.to_string()),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Your cart is empty.")]
    EmptyCart,

    #[error("Please provide a shipping address.")]
    MissingShippingAddress,

    #[error("Please select a payment method.")]
    MissingPaymentMethod,

    #[error("Unsupported payment method: {0}")]
    UnknownPaymentMethod(String),
}

impl CheckoutRequest {
    fn validate(&self) -> Result<(String, PaymentMethod), CheckoutError> {
        let address = self.shipping_address.trim();
        if address.is_empty() {
            return Err(CheckoutError::MissingShippingAddress);
        }

        let raw = self
            .payment_method
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .ok_or(CheckoutError::MissingPaymentMethod)?;
        let method = raw
            .parse::<PaymentMethod>()
            .map_err(CheckoutError::UnknownPaymentMethod)?;

        Ok((address.to_string(), method))
    }
}

/// Turn the cart into a pending order numbered `sequence`.
/// The caller clears the cart once the order is stored.
pub fn place_order(
    lines: &[CartLine],
    request: &CheckoutRequest,
    engine: &PricingEngine,
    placed_on: NaiveDate,
    sequence: u64,
    delivery_days: u64,
) -> Result<Order, CheckoutError> {
    if lines.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let (shipping_address, payment_method) = request.validate()?;
    let summary = engine.compute_summary(lines);
    debug!("Checkout summary: {:?}", summary);

    let estimated_delivery = placed_on
        .checked_add_days(Days::new(delivery_days))
        .unwrap_or(placed_on);

    let order = Order {
        id: Order::format_id(placed_on, sequence),
        placed_on,
        status: OrderStatus::Pending,
        items: lines.iter().map(OrderLine::from).collect(),
        summary,
        shipping_address,
        payment_method,
        estimated_delivery,
        delivered_on: None,
        tracking_number: None,
    };

    info!("Placed order {} for {} items", order.id, order.item_count());
    Ok(order)
}
