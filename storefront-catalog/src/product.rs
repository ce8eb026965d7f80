use serde::{Deserialize, Serialize};
use storefront_shared::Cents;

/// Categories offered by the listing page, wildcard first.
pub const CATEGORIES: [&str; 5] = ["All", "Electronics", "Fashion", "Home & Garden", "Sports"];

/// Core catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub image: String,
    pub price_cents: Cents,
    pub original_price_cents: Cents,
    /// 0.0 to 5.0
    pub rating: f64,
    pub reviews: u32,
    pub category: String,
}

impl Product {
    /// Amount saved against the original price, never negative.
    pub fn savings_cents(&self) -> Cents {
        (self.original_price_cents - self.price_cents).max(0)
    }

    pub fn is_on_sale(&self) -> bool {
        self.savings_cents() > 0
    }

    /// Number of filled stars in a five star display.
    pub fn full_stars(&self) -> u8 {
        self.rating.clamp(0.0, 5.0).floor() as u8
    }
}

/// Everything the product detail page shows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDetail {
    pub product: Product,
    pub images: Vec<String>,
    pub description: String,
    pub features: Vec<String>,
    /// Display order matters, so this is a list rather than a map.
    pub specifications: Vec<(String, String)>,
    pub total_quantity: u32,
}

impl ProductDetail {
    /// Detail with only the listing image and no extended copy.
    pub fn basic(product: Product, total_quantity: u32) -> Self {
        Self {
            images: vec![product.image.clone()],
            product,
            description: String::new(),
            features: Vec::new(),
            specifications: Vec::new(),
            total_quantity,
        }
    }

    pub fn quantity_selector(&self) -> QuantitySelector {
        QuantitySelector::new(self.total_quantity)
    }
}

/// First `count` products in catalog order, as shown on the home page.
pub fn featured(products: &[Product], count: usize) -> Vec<Product> {
    products.iter().take(count).cloned().collect()
}

/// Quantity picker on the detail page. Starts at 1 and stays within stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantitySelector {
    quantity: u32,
    max: u32,
}

impl QuantitySelector {
    pub fn new(max: u32) -> Self {
        Self { quantity: 1, max }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Apply a +/- step. A step that would leave `1..=max` is ignored.
    /// Returns whether the quantity changed.
    pub fn change(&mut self, delta: i64) -> bool {
        let next = self.quantity as i64 + delta;
        if delta == 0 || next < 1 || next > self.max as i64 {
            return false;
        }
        self.quantity = next as u32;
        true
    }

    pub fn can_increase(&self) -> bool {
        self.quantity < self.max
    }

    pub fn can_decrease(&self) -> bool {
        self.quantity > 1
    }
}
