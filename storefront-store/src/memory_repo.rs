use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::info;
use storefront_catalog::{Product, ProductDetail};
use storefront_core::{CoreError, CoreResult, OrderRepository, ProductRepository};
use storefront_order::Order;
use crate::seed;

/// Catalog held in process memory, reset on restart
pub struct InMemoryProductRepository {
    products: Vec<ProductDetail>,
}

impl InMemoryProductRepository {
    pub fn new(products: Vec<ProductDetail>) -> Self {
        Self { products }
    }

    /// Repository preloaded with the mock catalog
    pub fn seeded() -> Self {
        Self::new(seed::catalog())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_product(&self, id: &str) -> CoreResult<Option<Product>> {
        Ok(self
            .products
            .iter()
            .find(|detail| detail.product.id == id)
            .map(|detail| detail.product.clone()))
    }

    async fn get_product_detail(&self, id: &str) -> CoreResult<Option<ProductDetail>> {
        Ok(self.products.iter().find(|detail| detail.product.id == id).cloned())
    }

    async fn list_products(&self) -> CoreResult<Vec<Product>> {
        Ok(self.products.iter().map(|detail| detail.product.clone()).collect())
    }
}

pub struct InMemoryOrderRepository {
    orders: RwLock<HashMap<String, Order>>,
}

impl InMemoryOrderRepository {
    pub fn new(orders: Vec<Order>) -> Self {
        let orders = orders.into_iter().map(|order| (order.id.clone(), order)).collect();
        Self {
            orders: RwLock::new(orders),
        }
    }

    /// Repository preloaded with the mock order history
    pub fn seeded() -> Self {
        Self::new(seed::orders())
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save_order(&self, order: &Order) -> CoreResult<()> {
        if order.id.is_empty() {
            return Err(CoreError::ValidationError("order id is empty".to_string()));
        }

        let mut orders = self.orders.write().await;
        orders.insert(order.id.clone(), order.clone());
        info!("Stored order {} ({})", order.id, order.status);
        Ok(())
    }

    async fn get_order(&self, id: &str) -> CoreResult<Option<Order>> {
        Ok(self.orders.read().await.get(id).cloned())
    }

    async fn list_orders(&self) -> CoreResult<Vec<Order>> {
        let mut orders: Vec<Order> = self.orders.read().await.values().cloned().collect();
        orders.sort_by(|a, b| b.placed_on.cmp(&a.placed_on).then_with(|| b.id.cmp(&a.id)));
        Ok(orders)
    }

    async fn next_sequence(&self) -> CoreResult<u64> {
        let orders = self.orders.read().await;
        let last = orders.values().filter_map(Order::sequence).max().unwrap_or(0);
        Ok(last + 1)
    }
}
