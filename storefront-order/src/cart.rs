//! Cart line operations. All functions are pure: they take the current
//! lines and return the next ones, leaving the input untouched.

use serde::{Deserialize, Serialize};
use storefront_catalog::Product;
use storefront_shared::Cents;

/// One product entry in the cart. `quantity` is always at least 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    pub id: String,
    pub product_id: String,
    pub title: String,
    pub image: String,
    pub unit_price_cents: Cents,
    pub quantity: u32,
}

impl CartLine {
    /// A line for `product`. The line id is the product id, as the cart
    /// holds at most one line per product.
    pub fn for_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            product_id: product.id.clone(),
            title: product.title.clone(),
            image: product.image.clone(),
            unit_price_cents: product.price_cents,
            quantity,
        }
    }

    pub fn line_total_cents(&self) -> Cents {
        self.unit_price_cents * self.quantity as Cents
    }
}

/// Change the quantity of line `id`. A non-positive quantity removes the line.
/// Unknown ids leave the lines unchanged.
pub fn set_quantity(lines: &[CartLine], id: &str, new_quantity: i64) -> Vec<CartLine> {
    if new_quantity <= 0 {
        return remove_line(lines, id);
    }

    let quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
    lines
        .iter()
        .map(|line| {
            if line.id == id {
                CartLine { quantity, ..line.clone() }
            } else {
                line.clone()
            }
        })
        .collect()
}

/// Drop line `id`. Unknown ids are a no-op.
pub fn remove_line(lines: &[CartLine], id: &str) -> Vec<CartLine> {
    lines.iter().filter(|line| line.id != id).cloned().collect()
}

/// Add `quantity` of `product`, merging into an existing line for the same product.
pub fn add_to_cart(lines: &[CartLine], product: &Product, quantity: u32) -> Vec<CartLine> {
    if quantity == 0 {
        return lines.to_vec();
    }

    let mut next = lines.to_vec();
    match next.iter_mut().find(|line| line.product_id == product.id) {
        Some(line) => line.quantity = line.quantity.saturating_add(quantity),
        None => next.push(CartLine::for_product(product, quantity)),
    }
    next
}

/// Total units across all lines (the header cart badge).
pub fn item_count(lines: &[CartLine]) -> u32 {
    lines.iter().map(|line| line.quantity).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, unit_price_cents: Cents, quantity: u32) -> CartLine {
        CartLine {
            id: id.to_string(),
            product_id: id.to_string(),
            title: format!("Product {}", id),
            image: "/placeholder.svg".to_string(),
            unit_price_cents,
            quantity,
        }
    }

    fn product(id: &str, price_cents: Cents) -> Product {
        Product {
            id: id.to_string(),
            title: format!("Product {}", id),
            image: "/placeholder.svg".to_string(),
            price_cents,
            original_price_cents: price_cents,
            rating: 4.5,
            reviews: 10,
            category: "Electronics".to_string(),
        }
    }

    #[test]
    fn test_set_quantity_replaces_matching_line() {
        let lines = vec![line("1", 19999, 2), line("2", 29999, 1)];

        let updated = set_quantity(&lines, "2", 4);
        assert_eq!(updated[0], lines[0]);
        assert_eq!(updated[1].quantity, 4);
        assert_eq!(updated.len(), 2);
    }

    #[test]
    fn test_set_quantity_zero_is_remove() {
        let lines = vec![line("1", 19999, 2), line("2", 29999, 1)];

        assert_eq!(set_quantity(&lines, "1", 0), remove_line(&lines, "1"));
        assert_eq!(set_quantity(&lines, "1", -3), remove_line(&lines, "1"));
        assert_eq!(set_quantity(&lines, "1", 0), vec![line("2", 29999, 1)]);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let lines = vec![line("1", 19999, 2)];

        assert_eq!(set_quantity(&lines, "missing", 5), lines);
        assert_eq!(set_quantity(&lines, "missing", 0), lines);
        assert_eq!(remove_line(&lines, "missing"), lines);
    }

    #[test]
    fn test_add_to_cart_merges_same_product() {
        let lines = add_to_cart(&[], &product("1", 19999), 2);
        let lines = add_to_cart(&lines, &product("3", 7999), 1);
        let lines = add_to_cart(&lines, &product("1", 19999), 1);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].quantity, 3);
        assert_eq!(lines[1].id, "3");
        assert_eq!(item_count(&lines), 4);
    }

    #[test]
    fn test_add_zero_quantity_is_noop() {
        let lines = vec![line("1", 19999, 2)];
        assert_eq!(add_to_cart(&lines, &product("2", 100), 0), lines);
    }
}
