//! Mock catalog and order history the storefront ships with.

use chrono::NaiveDate;
use storefront_catalog::{Product, ProductDetail};
use storefront_order::{CartLine, Order, OrderLine, OrderStatus, PaymentMethod, PricingEngine};

const LISTING_IMAGE: &str = "/placeholder.svg?height=300&width=300";
const DETAIL_IMAGE: &str = "/placeholder.svg?height=500&width=500";
const SEED_ADDRESS: &str = "123 Main St, Anytown, CA 12345";

fn product(
    id: &str,
    title: &str,
    price_cents: i64,
    original_price_cents: i64,
    rating: f64,
    reviews: u32,
    category: &str,
) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        image: LISTING_IMAGE.to_string(),
        price_cents,
        original_price_cents,
        rating,
        reviews,
        category: category.to_string(),
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product("1", "Premium Wireless Headphones", 19999, 24999, 4.8, 124, "Electronics"),
        product("2", "Smart Fitness Watch", 29999, 39999, 4.6, 89, "Electronics"),
        product("3", "Portable Bluetooth Speaker", 7999, 9999, 4.7, 156, "Electronics"),
        product("4", "Wireless Charging Pad", 4999, 6999, 4.5, 78, "Electronics"),
        product("5", "Designer Sunglasses", 12999, 17999, 4.4, 92, "Fashion"),
        product("6", "Leather Backpack", 8999, 11999, 4.6, 67, "Fashion"),
    ]
}

fn headphones_detail(product: Product) -> ProductDetail {
    ProductDetail {
        product,
        images: vec![DETAIL_IMAGE.to_string(); 3],
        description: "Experience premium sound quality with our latest wireless headphones. \
            Featuring active noise cancellation, 30-hour battery life, and premium comfort padding."
            .to_string(),
        features: [
            "Active Noise Cancellation",
            "30-hour battery life",
            "Premium comfort padding",
            "Bluetooth 5.0 connectivity",
            "Quick charge technology",
        ]
        .iter()
        .map(|f| f.to_string())
        .collect(),
        specifications: [
            ("Driver Size", "40mm"),
            ("Frequency Response", "20Hz - 20kHz"),
            ("Battery Life", "30 hours"),
            ("Charging Time", "2 hours"),
            ("Weight", "250g"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect(),
        total_quantity: 50,
    }
}

/// Full catalog with detail pages.
pub fn catalog() -> Vec<ProductDetail> {
    products()
        .into_iter()
        .map(|product| match product.id.as_str() {
            "1" => headphones_detail(product),
            _ => ProductDetail::basic(product, 25),
        })
        .collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn seed_order(
    sequence: u64,
    placed_on: NaiveDate,
    status: OrderStatus,
    lines: &[(&str, u32)],
    estimated_delivery: NaiveDate,
) -> Order {
    let catalog = products();
    let cart: Vec<CartLine> = lines
        .iter()
        .filter_map(|(id, quantity)| {
            catalog
                .iter()
                .find(|p| p.id == *id)
                .map(|p| CartLine::for_product(p, *quantity))
        })
        .collect();

    Order {
        id: Order::format_id(placed_on, sequence),
        placed_on,
        status,
        items: cart.iter().map(OrderLine::from).collect(),
        summary: PricingEngine::default().compute_summary(&cart),
        shipping_address: SEED_ADDRESS.to_string(),
        payment_method: PaymentMethod::CreditCard,
        estimated_delivery,
        delivered_on: None,
        tracking_number: None,
    }
}

/// Past orders shown on the order history page.
pub fn orders() -> Vec<Order> {
    let mut delivered = seed_order(
        1234,
        date(2024, 3, 20),
        OrderStatus::Delivered,
        &[("1", 2), ("2", 1)],
        date(2024, 3, 25),
    );
    delivered.delivered_on = Some(date(2024, 3, 24));
    delivered.tracking_number = Some("1Z999AA1234567890".to_string());

    let mut shipped = seed_order(
        1233,
        date(2024, 3, 15),
        OrderStatus::Shipped,
        &[("1", 1)],
        date(2024, 3, 22),
    );
    shipped.tracking_number = Some("1Z999AA1234567883".to_string());

    vec![
        delivered,
        shipped,
        seed_order(
            1232,
            date(2024, 3, 10),
            OrderStatus::Processing,
            &[("6", 1), ("4", 1)],
            date(2024, 3, 20),
        ),
        seed_order(
            1231,
            date(2024, 3, 5),
            OrderStatus::Pending,
            &[("2", 1)],
            date(2024, 3, 18),
        ),
    ]
}
