use chrono::NaiveDate;
use crate::models::{Order, OrderStatus};

/// Status transitions: Pending → Processing → Shipped → Delivered.
impl Order {
    /// Transition: Pending → Processing
    pub fn start_processing(&mut self) -> Result<(), OrderError> {
        self.transition(OrderStatus::Pending, OrderStatus::Processing)
    }

    /// Transition: Processing → Shipped (carrier tracking assigned)
    pub fn mark_shipped(&mut self, tracking_number: &str) -> Result<(), OrderError> {
        self.transition(OrderStatus::Processing, OrderStatus::Shipped)?;
        self.tracking_number = Some(tracking_number.to_string());
        Ok(())
    }

    /// Transition: Shipped → Delivered
    pub fn mark_delivered(&mut self, delivered_on: NaiveDate) -> Result<(), OrderError> {
        self.transition(OrderStatus::Shipped, OrderStatus::Delivered)?;
        self.delivered_on = Some(delivered_on);
        Ok(())
    }

    fn transition(&mut self, expected: OrderStatus, next: OrderStatus) -> Result<(), OrderError> {
        if self.status != expected {
            return Err(OrderError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }

        self.status = next;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition {
        from: OrderStatus,
        to: OrderStatus,
    },
}
