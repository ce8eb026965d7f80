use chrono::NaiveDate;
use tracing::{info, warn};
use storefront_catalog::{featured, filter_and_sort, Product};
use storefront_core::{CoreError, OrderRepository};
use storefront_order::{item_count, place_order, CartLine, CheckoutError, CheckoutRequest, Order, PriceSummary, PricingEngine};
use storefront_shared::StorefrontEvent;
use storefront_store::app_config::{CatalogConfig, Config};
use storefront_store::EventPublisher;
use crate::state::{reduce, Action, AppState};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
    #[error("Repository error: {0}")]
    Repository(#[from] CoreError),
}

/// Owns the application state. All mutation goes through `dispatch`, which
/// runs the reducer and forwards the resulting notifications.
pub struct Store {
    state: AppState,
    pricing: PricingEngine,
    catalog: CatalogConfig,
    delivery_days: u64,
    publisher: EventPublisher,
}

impl Store {
    pub fn new(config: &Config, publisher: EventPublisher) -> Self {
        Self {
            state: AppState::default(),
            pricing: PricingEngine::new(config.business_rules.pricing_config()),
            catalog: config.catalog.clone(),
            delivery_days: config.business_rules.delivery_days,
            publisher,
        }
    }

    /// Start from an existing cart instead of an empty one. Lines with a
    /// zero quantity are dropped.
    pub fn with_cart(mut self, mut cart: Vec<CartLine>) -> Self {
        cart.retain(|line| line.quantity > 0);
        self.state.cart = cart;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        let (next, events) = reduce(&self.state, action);
        self.state = next;
        for event in events {
            self.publisher.publish(event);
        }
    }

    /// Select a sidebar price band by label. Labels not in the configuration are ignored.
    pub fn select_price_range(&mut self, label: &str, selected: bool) {
        match self.catalog.price_range(label) {
            Some(range) => {
                let range = range.clone();
                self.dispatch(Action::TogglePriceRange { range, selected });
            }
            None => warn!("Ignoring unknown price range '{}'", label),
        }
    }

    /// Cart totals, recomputed on every call
    pub fn summary(&self) -> PriceSummary {
        self.pricing.compute_summary(&self.state.cart)
    }

    pub fn cart_count(&self) -> u32 {
        item_count(&self.state.cart)
    }

    /// Listing page view of `products` under the current filters and sort
    pub fn visible_products(&self, products: &[Product]) -> Vec<Product> {
        filter_and_sort(products, &self.state.predicates, self.state.sort)
    }

    pub fn featured_products(&self, products: &[Product]) -> Vec<Product> {
        featured(products, self.catalog.featured_count)
    }

    /// Place an order for the current cart and clear it.
    /// Missing checkout details are also published as a destructive notification.
    pub async fn checkout(
        &mut self,
        request: &CheckoutRequest,
        orders: &dyn OrderRepository,
        today: NaiveDate,
    ) -> Result<Order, StoreError> {
        let sequence = orders.next_sequence().await?;

        let order = match place_order(&self.state.cart, request, &self.pricing, today, sequence, self.delivery_days) {
            Ok(order) => order,
            Err(e) => {
                warn!("Checkout rejected: {}", e);
                // The cart page shows its empty state instead of a notification
                if e != CheckoutError::EmptyCart {
                    self.publisher.publish(StorefrontEvent::checkout_rejected(e.to_string()));
                }
                return Err(e.into());
            }
        };

        orders.save_order(&order).await?;
        self.dispatch(Action::ClearCart);
        self.publisher.publish(StorefrontEvent::order_placed(&order.id, order.total_cents(), order.item_count()));

        info!("Checkout complete for order {}", order.id);
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_store::InMemoryOrderRepository;
    use storefront_store::seed;

    fn store() -> (Store, EventPublisher) {
        let publisher = EventPublisher::new(16);
        (Store::new(&Config::default(), publisher.clone()), publisher)
    }

    #[test]
    fn test_summary_tracks_cart() {
        let (mut store, _) = store();
        let products = seed::products();

        store.dispatch(Action::AddToCart { product: products[0].clone(), quantity: 2 });
        store.dispatch(Action::AddToCart { product: products[1].clone(), quantity: 1 });

        let summary = store.summary();
        assert_eq!(summary.subtotal_cents, 69997);
        assert_eq!(summary.total_cents, 75597);
        assert_eq!(store.cart_count(), 3);

        store.dispatch(Action::SetQuantity { line_id: "2".to_string(), quantity: 0 });
        assert_eq!(store.summary().subtotal_cents, 39998);
    }

    #[test]
    fn test_unknown_price_range_ignored() {
        let (mut store, _) = store();

        store.select_price_range("Under $5", true);
        assert!(store.state().predicates.price_ranges.is_empty());

        store.select_price_range("Under $50", true);
        let visible = store.visible_products(&seed::products());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Wireless Charging Pad");
    }

    #[test]
    fn test_removal_is_published() {
        let (store, publisher) = store();
        let mut rx = publisher.subscribe();
        let products = seed::products();
        let mut store = store.with_cart(vec![CartLine::for_product(&products[0], 1)]);

        store.dispatch(Action::RemoveLine { line_id: "1".to_string() });

        let event = rx.try_recv().unwrap();
        assert_eq!(event.title(), "Item Removed");
    }

    #[test]
    fn test_with_cart_drops_empty_lines() {
        let (store, _) = store();
        let products = seed::products();
        let mut empty = CartLine::for_product(&products[1], 1);
        empty.quantity = 0;

        let store = store.with_cart(vec![CartLine::for_product(&products[0], 2), empty]);
        assert_eq!(store.state().cart.len(), 1);
        assert_eq!(store.state().cart[0].id, "1");
        assert_eq!(store.cart_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_cart_checkout_is_not_announced() {
        let (mut store, publisher) = store();
        let mut rx = publisher.subscribe();
        let orders = InMemoryOrderRepository::default();

        let today = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let request = CheckoutRequest::new("123 Main St", "paypal");
        let result = store.checkout(&request, &orders, today).await;

        assert!(matches!(result, Err(StoreError::Checkout(CheckoutError::EmptyCart))));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_rejected_checkout_keeps_cart() {
        let (store, publisher) = store();
        let mut rx = publisher.subscribe();
        let orders = InMemoryOrderRepository::default();
        let products = seed::products();
        let mut store = store.with_cart(vec![CartLine::for_product(&products[0], 1)]);

        let today = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let result = store.checkout(&CheckoutRequest::default(), &orders, today).await;

        assert!(matches!(result, Err(StoreError::Checkout(CheckoutError::MissingShippingAddress))));
        assert_eq!(store.cart_count(), 1);
        assert!(rx.try_recv().unwrap().is_destructive());
        assert!(orders.list_orders().await.unwrap().is_empty());
    }
}
