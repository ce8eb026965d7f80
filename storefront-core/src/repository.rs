use async_trait::async_trait;
use storefront_catalog::{filter_and_sort, PredicateSet, Product, ProductDetail, SortKey};
use storefront_order::Order;
use crate::CoreResult;

/// Read access to the product catalog
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_product(&self, id: &str) -> CoreResult<Option<Product>>;

    async fn get_product_detail(&self, id: &str) -> CoreResult<Option<ProductDetail>>;

    /// All products in catalog order
    async fn list_products(&self) -> CoreResult<Vec<Product>>;

    async fn filter_products(
        &self,
        predicates: &PredicateSet,
        sort: SortKey,
    ) -> CoreResult<Vec<Product>> {
        let products = self.list_products().await?;
        Ok(filter_and_sort(&products, predicates, sort))
    }
}

/// Order history storage
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn save_order(&self, order: &Order) -> CoreResult<()>;

    async fn get_order(&self, id: &str) -> CoreResult<Option<Order>>;

    /// Most recent first
    async fn list_orders(&self) -> CoreResult<Vec<Order>>;

    /// Sequence number for the next order id
    async fn next_sequence(&self) -> CoreResult<u64>;
}
