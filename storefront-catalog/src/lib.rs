pub mod product;
pub mod filter;

pub use product::{Product, ProductDetail, QuantitySelector, featured, CATEGORIES};
pub use filter::{filter_and_sort, PredicateSet, PriceRange, SortKey, ALL_CATEGORIES};
