use serde::{Deserialize, Serialize};
use storefront_catalog::{PredicateSet, PriceRange, Product, SortKey};
use storefront_order::{add_to_cart, remove_line, set_quantity, CartLine};
use storefront_shared::StorefrontEvent;

/// Everything the storefront pages read: the cart and the listing controls.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    pub cart: Vec<CartLine>,
    pub predicates: PredicateSet,
    pub sort: SortKey,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddToCart { product: Product, quantity: u32 },
    SetQuantity { line_id: String, quantity: i64 },
    RemoveLine { line_id: String },
    ClearCart,
    SetSearch(String),
    SetCategory(String),
    TogglePriceRange { range: PriceRange, selected: bool },
    SetSort(SortKey),
}

/// Apply `action` to `state`. Returns the next state and the notifications
/// the change should raise; the input state is left untouched.
pub fn reduce(state: &AppState, action: Action) -> (AppState, Vec<StorefrontEvent>) {
    let mut next = state.clone();
    let mut events = Vec::new();

    match action {
        Action::AddToCart { product, quantity } => {
            next.cart = add_to_cart(&state.cart, &product, quantity);
            if quantity > 0 {
                events.push(StorefrontEvent::item_added(&product.id, &product.id, &product.title, quantity));
            }
        }
        Action::SetQuantity { line_id, quantity } => {
            next.cart = set_quantity(&state.cart, &line_id, quantity);
            events.extend(removal_events(&state.cart, &next.cart));
        }
        Action::RemoveLine { line_id } => {
            next.cart = remove_line(&state.cart, &line_id);
            events.extend(removal_events(&state.cart, &next.cart));
        }
        // Checkout hand-off; not a user removal, so no notifications
        Action::ClearCart => next.cart.clear(),
        Action::SetSearch(text) => next.predicates.text_query = text,
        Action::SetCategory(category) => next.predicates.category = category,
        Action::TogglePriceRange { range, selected } => {
            next.predicates.toggle_price_range(&range, selected)
        }
        Action::SetSort(sort) => next.sort = sort,
    }

    (next, events)
}

fn removal_events(before: &[CartLine], after: &[CartLine]) -> Vec<StorefrontEvent> {
    before
        .iter()
        .filter(|line| !after.iter().any(|kept| kept.id == line.id))
        .map(|line| StorefrontEvent::item_removed(&line.id, &line.product_id, &line.title))
        .collect()
}
