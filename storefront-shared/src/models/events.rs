use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ItemAddedEvent {
    pub event_id: Uuid,
    pub line_id: String,
    pub product_id: String,
    pub title: String,
    pub quantity: u32,
    pub timestamp: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ItemRemovedEvent {
    pub event_id: Uuid,
    pub line_id: String,
    pub product_id: String,
    pub title: String,
    pub timestamp: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CheckoutRejectedEvent {
    pub event_id: Uuid,
    pub reason: String,
    pub timestamp: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderPlacedEvent {
    pub event_id: Uuid,
    pub order_id: String,
    pub total_cents: i64,
    pub item_count: u32,
    pub timestamp: i64,
}

/// Fire-and-forget notifications emitted by the cart and checkout flow.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorefrontEvent {
    ItemAdded(ItemAddedEvent),
    ItemRemoved(ItemRemovedEvent),
    CheckoutRejected(CheckoutRejectedEvent),
    OrderPlaced(OrderPlacedEvent),
}

impl StorefrontEvent {
    pub fn item_added(line_id: &str, product_id: &str, title: &str, quantity: u32) -> Self {
        Self::ItemAdded(ItemAddedEvent {
            event_id: Uuid::new_v4(),
            line_id: line_id.to_string(),
            product_id: product_id.to_string(),
            title: title.to_string(),
            quantity,
            timestamp: Utc::now().timestamp(),
        })
    }

    pub fn item_removed(line_id: &str, product_id: &str, title: &str) -> Self {
        Self::ItemRemoved(ItemRemovedEvent {
            event_id: Uuid::new_v4(),
            line_id: line_id.to_string(),
            product_id: product_id.to_string(),
            title: title.to_string(),
            timestamp: Utc::now().timestamp(),
        })
    }

    pub fn checkout_rejected(reason: impl Into<String>) -> Self {
        Self::CheckoutRejected(CheckoutRejectedEvent {
            event_id: Uuid::new_v4(),
            reason: reason.into(),
            timestamp: Utc::now().timestamp(),
        })
    }

    pub fn order_placed(order_id: &str, total_cents: i64, item_count: u32) -> Self {
        Self::OrderPlaced(OrderPlacedEvent {
            event_id: Uuid::new_v4(),
            order_id: order_id.to_string(),
            total_cents,
            item_count,
            timestamp: Utc::now().timestamp(),
        })
    }

    pub fn event_id(&self) -> Uuid {
        match self {
            Self::ItemAdded(e) => e.event_id,
            Self::ItemRemoved(e) => e.event_id,
            Self::CheckoutRejected(e) => e.event_id,
            Self::OrderPlaced(e) => e.event_id,
        }
    }

    /// Short headline shown by the notification collaborator.
    pub fn title(&self) -> &'static str {
        match self {
            Self::ItemAdded(_) => "Added to Cart",
            Self::ItemRemoved(_) => "Item Removed",
            Self::CheckoutRejected(_) => "Missing Information",
            Self::OrderPlaced(_) => "Order Confirmed",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Self::ItemAdded(e) => format!("{} x {} added to your cart.", e.quantity, e.title),
            Self::ItemRemoved(_) => "Item has been removed from your cart.".to_string(),
            Self::CheckoutRejected(e) => e.reason.clone(),
            Self::OrderPlaced(e) => format!("Order {} has been successfully placed.", e.order_id),
        }
    }

    /// Rejections render as destructive notifications.
    pub fn is_destructive(&self) -> bool {
        matches!(self, Self::CheckoutRejected(_))
    }
}
