use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use storefront_shared::Cents;
use crate::cart::CartLine;
use crate::pricing::PriceSummary;

/// Order status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    CreditCard,
    Paypal,
    ApplePay,
    GooglePay,
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credit-card" => Ok(PaymentMethod::CreditCard),
            "paypal" => Ok(PaymentMethod::Paypal),
            "apple-pay" => Ok(PaymentMethod::ApplePay),
            "google-pay" => Ok(PaymentMethod::GooglePay),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::Paypal => "PayPal",
            PaymentMethod::ApplePay => "Apple Pay",
            PaymentMethod::GooglePay => "Google Pay",
        };
        write!(f, "{}", label)
    }
}

/// A purchased line, copied from the cart at checkout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderLine {
    pub id: String,
    pub product_id: String,
    pub title: String,
    pub image: String,
    pub unit_price_cents: Cents,
    pub quantity: u32,
}

impl OrderLine {
    pub fn line_total_cents(&self) -> Cents {
        self.unit_price_cents * self.quantity as Cents
    }
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id.clone(),
            product_id: line.product_id.clone(),
            title: line.title.clone(),
            image: line.image.clone(),
            unit_price_cents: line.unit_price_cents,
            quantity: line.quantity,
        }
    }
}

/// A placed order. The summary is frozen at checkout time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub placed_on: NaiveDate,
    pub status: OrderStatus,
    pub items: Vec<OrderLine>,
    pub summary: PriceSummary,
    pub shipping_address: String,
    pub payment_method: PaymentMethod,
    pub estimated_delivery: NaiveDate,
    pub delivered_on: Option<NaiveDate>,
    pub tracking_number: Option<String>,
}

impl Order {
    /// Order numbers look like `ORD-2024-001234`.
    pub fn format_id(placed_on: NaiveDate, sequence: u64) -> String {
        format!("ORD-{}-{:06}", placed_on.format("%Y"), sequence)
    }

    /// Sequence part of an order number, if it has one.
    pub fn sequence(&self) -> Option<u64> {
        self.id.rsplit('-').next()?.parse().ok()
    }

    /// Units across all lines
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn total_cents(&self) -> Cents {
        self.summary.total_cents
    }
}
