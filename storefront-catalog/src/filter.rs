use serde::{Deserialize, Serialize};
use std::str::FromStr;
use storefront_shared::Cents;
use crate::product::Product;

/// Category value that matches every product.
pub const ALL_CATEGORIES: &str = "All";

/// Named price band, half-open: `[min_cents, max_cents)`. No upper bound when `max_cents` is `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRange {
    pub label: String,
    pub min_cents: Cents,
    #[serde(default)]
    pub max_cents: Option<Cents>,
}

impl PriceRange {
    pub fn new(label: &str, min_cents: Cents, max_cents: Option<Cents>) -> Self {
        Self {
            label: label.to_string(),
            min_cents,
            max_cents,
        }
    }

    pub fn contains(&self, price: Cents) -> bool {
        price >= self.min_cents && self.max_cents.map_or(true, |max| price < max)
    }

    /// The four bands of the listing sidebar.
    pub fn standard() -> Vec<PriceRange> {
        vec![
            PriceRange::new("Under $50", 0, Some(5000)),
            PriceRange::new("$50 - $100", 5000, Some(10000)),
            PriceRange::new("$100 - $200", 10000, Some(20000)),
            PriceRange::new("Over $200", 20000, None),
        ]
    }
}

/// Listing order. `Featured` keeps catalog order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Rating,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown sort key: {0}")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(SortKey::Featured),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            "rating" => Ok(SortKey::Rating),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

/// Combined listing filters. Each kind of filter is AND-ed with the others;
/// selected price bands are OR-ed among themselves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredicateSet {
    pub text_query: String,
    pub category: String,
    pub price_ranges: Vec<PriceRange>,
}

impl Default for PredicateSet {
    fn default() -> Self {
        Self {
            text_query: String::new(),
            category: ALL_CATEGORIES.to_string(),
            price_ranges: Vec::new(),
        }
    }
}

impl PredicateSet {
    /// Select or deselect a band. Selecting twice keeps a single entry.
    pub fn toggle_price_range(&mut self, range: &PriceRange, selected: bool) {
        if selected {
            if !self.price_ranges.iter().any(|r| r.label == range.label) {
                self.price_ranges.push(range.clone());
            }
        } else {
            self.price_ranges.retain(|r| r.label != range.label);
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_text(product) && self.matches_category(product) && self.matches_price(product)
    }

    fn matches_text(&self, product: &Product) -> bool {
        product.title.to_lowercase().contains(&self.text_query.to_lowercase())
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.category == ALL_CATEGORIES || product.category == self.category
    }

    fn matches_price(&self, product: &Product) -> bool {
        self.price_ranges.is_empty()
            || self.price_ranges.iter().any(|range| range.contains(product.price_cents))
    }
}

/// Filter `products` by `predicates` and order the survivors by `sort`.
/// The sort is stable, so ties keep their input order.
pub fn filter_and_sort(products: &[Product], predicates: &PredicateSet, sort: SortKey) -> Vec<Product> {
    let mut visible: Vec<Product> = products
        .iter()
        .filter(|product| predicates.matches(product))
        .cloned()
        .collect();

    match sort {
        SortKey::Featured => {}
        SortKey::PriceLow => visible.sort_by(|a, b| a.price_cents.cmp(&b.price_cents)),
        SortKey::PriceHigh => visible.sort_by(|a, b| b.price_cents.cmp(&a.price_cents)),
        SortKey::Rating => visible.sort_by(|a, b| rating_key(b).total_cmp(&rating_key(a))),
    }

    visible
}

/// Unrated (NaN) products sort after every rated one.
fn rating_key(product: &Product) -> f64 {
    if product.rating.is_nan() {
        f64::NEG_INFINITY
    } else {
        product.rating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, title: &str, price_cents: Cents, rating: f64, category: &str) -> Product {
        Product {
            id: id.to_string(),
            title: title.to_string(),
            image: "/placeholder.svg".to_string(),
            price_cents,
            original_price_cents: price_cents,
            rating,
            reviews: 0,
            category: category.to_string(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Premium Wireless Headphones", 19999, 4.8, "Electronics"),
            product("2", "Smart Fitness Watch", 29999, 4.6, "Electronics"),
            product("3", "Portable Bluetooth Speaker", 7999, 4.7, "Electronics"),
            product("4", "Wireless Charging Pad", 4999, 4.5, "Electronics"),
            product("5", "Designer Sunglasses", 12999, 4.4, "Fashion"),
            product("6", "Leather Backpack", 8999, 4.6, "Fashion"),
        ]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_sort_price_low() {
        let products = vec![
            product("a", "Watch", 29999, 4.0, "Electronics"),
            product("b", "Speaker", 7999, 4.0, "Electronics"),
            product("c", "Headphones", 19999, 4.0, "Electronics"),
        ];

        let sorted = filter_and_sort(&products, &PredicateSet::default(), SortKey::PriceLow);
        let prices: Vec<Cents> = sorted.iter().map(|p| p.price_cents).collect();
        assert_eq!(prices, vec![7999, 19999, 29999]);
    }

    #[test]
    fn test_featured_keeps_input_order() {
        let sorted = filter_and_sort(&catalog(), &PredicateSet::default(), SortKey::Featured);
        assert_eq!(ids(&sorted), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_rating_ties_keep_input_order() {
        let sorted = filter_and_sort(&catalog(), &PredicateSet::default(), SortKey::Rating);
        // 2 and 6 both rate 4.6; 2 comes first in the catalog
        assert_eq!(ids(&sorted), vec!["1", "3", "2", "6", "4", "5"]);
    }

    #[test]
    fn test_rating_sort_with_nan_ratings() {
        let products: Vec<Product> = (0..40)
            .map(|i| {
                let rating = if i % 3 == 0 { f64::NAN } else { (i % 5) as f64 };
                product(&i.to_string(), "Item", 1000, rating, "Electronics")
            })
            .collect();

        let sorted = filter_and_sort(&products, &PredicateSet::default(), SortKey::Rating);
        assert_eq!(sorted.len(), 40);

        let rated: Vec<f64> = sorted.iter().map(|p| p.rating).take_while(|r| !r.is_nan()).collect();
        assert!(rated.windows(2).all(|w| w[0] >= w[1]));
        // NaN ratings trail, in input order
        let unrated: Vec<&str> = sorted[rated.len()..].iter().map(|p| p.id.as_str()).collect();
        assert_eq!(unrated.len(), 14);
        assert_eq!(unrated[0], "0");
        assert_eq!(unrated[1], "3");
    }

    #[test]
    fn test_price_high() {
        let sorted = filter_and_sort(&catalog(), &PredicateSet::default(), SortKey::PriceHigh);
        assert_eq!(ids(&sorted), vec!["2", "1", "5", "6", "3", "4"]);
    }

    #[test]
    fn test_text_query_is_case_insensitive() {
        let predicates = PredicateSet {
            text_query: "WIRELESS".to_string(),
            ..PredicateSet::default()
        };

        let result = filter_and_sort(&catalog(), &predicates, SortKey::Featured);
        assert_eq!(ids(&result), vec!["1", "4"]);
    }

    #[test]
    fn test_category_filter() {
        let predicates = PredicateSet {
            category: "Fashion".to_string(),
            ..PredicateSet::default()
        };
        let result = filter_and_sort(&catalog(), &predicates, SortKey::Featured);
        assert_eq!(ids(&result), vec!["5", "6"]);

        let predicates = PredicateSet {
            category: "Sports".to_string(),
            ..PredicateSet::default()
        };
        assert!(filter_and_sort(&catalog(), &predicates, SortKey::Featured).is_empty());
    }

    #[test]
    fn test_price_ranges_are_or_combined() {
        let bands = PriceRange::standard();
        let mut predicates = PredicateSet::default();
        predicates.toggle_price_range(&bands[0], true); // Under $50
        predicates.toggle_price_range(&bands[3], true); // Over $200

        let result = filter_and_sort(&catalog(), &predicates, SortKey::Featured);
        assert_eq!(ids(&result), vec!["2", "4"]);

        predicates.toggle_price_range(&bands[3], false);
        let result = filter_and_sort(&catalog(), &predicates, SortKey::Featured);
        assert_eq!(ids(&result), vec!["4"]);
    }

    #[test]
    fn test_toggle_is_not_duplicated() {
        let bands = PriceRange::standard();
        let mut predicates = PredicateSet::default();
        predicates.toggle_price_range(&bands[1], true);
        predicates.toggle_price_range(&bands[1], true);
        assert_eq!(predicates.price_ranges.len(), 1);
    }

    #[test]
    fn test_bands_are_half_open() {
        let bands = PriceRange::standard();
        assert!(!bands[0].contains(5000));
        assert!(bands[1].contains(5000));
        assert!(bands[3].contains(1_000_000));
    }

    #[test]
    fn test_filters_are_and_combined() {
        let bands = PriceRange::standard();
        let mut predicates = PredicateSet {
            text_query: "wireless".to_string(),
            category: "Electronics".to_string(),
            price_ranges: Vec::new(),
        };
        predicates.toggle_price_range(&bands[2], true); // $100 - $200

        let result = filter_and_sort(&catalog(), &predicates, SortKey::Featured);
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        let bands = PriceRange::standard();
        let mut predicates = PredicateSet {
            text_query: "anything".to_string(),
            category: "Fashion".to_string(),
            price_ranges: Vec::new(),
        };
        predicates.toggle_price_range(&bands[0], true);

        assert!(filter_and_sort(&[], &predicates, SortKey::Rating).is_empty());
    }

    #[test]
    fn test_filter_and_sort_is_idempotent() {
        let predicates = PredicateSet {
            category: "Electronics".to_string(),
            ..PredicateSet::default()
        };

        let once = filter_and_sort(&catalog(), &predicates, SortKey::Rating);
        let twice = filter_and_sort(&once, &predicates, SortKey::Rating);
        assert_eq!(once, twice);
        assert_eq!(once, filter_and_sort(&catalog(), &predicates, SortKey::Rating));
    }

    #[test]
    fn test_parse_sort_key() {
        assert_eq!("price-low".parse::<SortKey>(), Ok(SortKey::PriceLow));
        assert_eq!("rating".parse::<SortKey>(), Ok(SortKey::Rating));
        assert!("cheapest".parse::<SortKey>().is_err());
    }
}
