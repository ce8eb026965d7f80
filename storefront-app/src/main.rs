use std::sync::Arc;
use chrono::Local;
use storefront_app::{Action, OrderHistory, Store};
use storefront_core::ProductRepository;
use storefront_order::CheckoutRequest;
use storefront_shared::format_usd;
use storefront_store::app_config::Config;
use storefront_store::{EventPublisher, InMemoryOrderRepository, InMemoryProductRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront_app=debug,storefront_store=info,storefront_order=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Falling back to built-in configuration: {}", e);
        Config::default()
    });

    let products = InMemoryProductRepository::seeded();
    let orders = Arc::new(InMemoryOrderRepository::seeded());
    let history = OrderHistory::new(orders.clone());

    let publisher = EventPublisher::new(config.notifications.channel_capacity);
    let mut notifications = publisher.subscribe();
    let mut store = Store::new(&config, publisher);

    let catalog = products.list_products().await?;
    tracing::info!("Loaded {} products", catalog.len());

    println!("Featured:");
    for product in store.featured_products(&catalog) {
        println!("  {:<30} {}", product.title, format_usd(product.price_cents));
    }

    store.dispatch(Action::SetSearch("wireless".to_string()));
    store.select_price_range("$100 - $200", true);
    let visible = store.visible_products(&catalog);
    println!("Showing {} of {} products", visible.len(), catalog.len());

    if let Some(detail) = products.get_product_detail("1").await? {
        let mut selector = detail.quantity_selector();
        selector.change(1);
        store.dispatch(Action::AddToCart {
            product: detail.product.clone(),
            quantity: selector.quantity(),
        });
    }
    if let Some(watch) = products.get_product("2").await? {
        store.dispatch(Action::AddToCart { product: watch, quantity: 1 });
    }

    let summary = store.summary();
    println!("Subtotal {}", format_usd(summary.subtotal_cents));
    if summary.is_free_shipping() {
        println!("Shipping Free");
    } else {
        println!("Shipping {}", format_usd(summary.shipping_cents));
    }
    println!("Tax      {}", format_usd(summary.tax_cents));
    println!("Total    {}", format_usd(summary.total_cents));
    println!("{}", serde_json::to_string_pretty(store.state())?);

    let request = CheckoutRequest::new("123 Main St, Anytown, CA 12345", "credit-card");
    let order = store.checkout(&request, &*orders, Local::now().date_naive()).await?;
    println!("Order {} arrives by {}", order.id, order.estimated_delivery.format("%B %-d, %Y"));

    for order in history.list().await? {
        println!(
            "  {} {:<10} {} item(s) {}",
            order.id,
            order.status,
            order.item_count(),
            format_usd(order.total_cents())
        );
    }

    while let Ok(event) = notifications.try_recv() {
        println!("[{}] {}", event.title(), event.description());
    }

    Ok(())
}
