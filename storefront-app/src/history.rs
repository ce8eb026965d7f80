use std::sync::Arc;
use chrono::NaiveDate;
use tracing::info;
use storefront_core::{CoreError, OrderRepository};
use storefront_order::{Order, OrderError};

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error("Repository error: {0}")]
    Repository(#[from] CoreError),
}

/// Order history pages and status updates over an order repository
#[derive(Clone)]
pub struct OrderHistory {
    repo: Arc<dyn OrderRepository>,
}

impl OrderHistory {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }

    /// Newest first
    pub async fn list(&self) -> Result<Vec<Order>, HistoryError> {
        Ok(self.repo.list_orders().await?)
    }

    /// Unknown ids give `None`
    pub async fn find(&self, id: &str) -> Result<Option<Order>, HistoryError> {
        Ok(self.repo.get_order(id).await?)
    }

    pub async fn start_processing(&self, id: &str) -> Result<Order, HistoryError> {
        self.update(id, |order| order.start_processing()).await
    }

    pub async fn ship(&self, id: &str, tracking_number: &str) -> Result<Order, HistoryError> {
        self.update(id, |order| order.mark_shipped(tracking_number)).await
    }

    pub async fn deliver(&self, id: &str, delivered_on: NaiveDate) -> Result<Order, HistoryError> {
        self.update(id, |order| order.mark_delivered(delivered_on)).await
    }

    async fn update<F>(&self, id: &str, apply: F) -> Result<Order, HistoryError>
    where
        F: FnOnce(&mut Order) -> Result<(), OrderError>,
    {
        let mut order = self
            .repo
            .get_order(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;

        apply(&mut order)?;
        self.repo.save_order(&order).await?;
        info!("Order {} is now {}", order.id, order.status);
        Ok(order)
    }
}
