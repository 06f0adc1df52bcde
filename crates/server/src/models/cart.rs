//! Session-scoped shopping cart.
//!
//! The cart lives in the session store for the duration of one browsing
//! session and is never persisted as its own record: checkout turns it
//! into an order, logout discards it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use soycart_core::{DeliveryOption, Money, ProductId};

use super::product::Product;

/// Errors signalled by cart mutations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The product's availability flag is off.
    #[error("{0} is currently unavailable")]
    Unavailable(String),
}

/// One selected product and its quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Name snapshot taken when the product was added.
    pub name: String,
    /// Base unit price snapshot taken when the product was added.
    pub unit_price: Money,
    /// Quantity, always ≥ 1.
    pub quantity: u32,
}

/// A shopper's cart: product lines keyed by product id.
///
/// Adding a product that is already present increments its quantity
/// instead of appending a duplicate line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of `product` to the cart.
    ///
    /// Merges by product id: an existing line's quantity goes up by one,
    /// otherwise a new line with quantity 1 is appended.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Unavailable`] (leaving the cart unchanged)
    /// if the product's availability flag is off.
    pub fn add(&mut self, product: &Product) -> Result<(), CartError> {
        if !product.available {
            return Err(CartError::Unavailable(product.name.clone()));
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem {
                product_id: product.id,
                name: product.name.clone(),
                unit_price: product.price,
                quantity: 1,
            });
        }

        Ok(())
    }

    /// Remove the line for `product_id`, if present.
    pub fn remove(&mut self, product_id: ProductId) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Set the quantity for `product_id`, clamping to a minimum of 1.
    ///
    /// Quantities of zero are not representable; removing a line is an
    /// explicit [`remove`](Self::remove). Unknown ids are ignored.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity.max(1);
        }
    }

    /// The cart lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total unit count across all lines (the navbar badge number).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Σ quantity × base unit price, with no delivery fee applied.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|i| i.unit_price * i.quantity).sum()
    }

    /// Checkout total under the given delivery option.
    ///
    /// The fee is a per-item surcharge applied only when the option is
    /// [`DeliveryOption::Delivery`], so the total is
    /// Σ quantity × (unit price + fee).
    #[must_use]
    pub fn total(&self, option: DeliveryOption, delivery_fee: Money) -> Money {
        let fee = match option {
            DeliveryOption::Delivery => delivery_fee,
            DeliveryOption::Pickup => Money::ZERO,
        };

        self.items
            .iter()
            .map(|i| (i.unit_price + fee) * i.quantity)
            .sum()
    }

    /// Drop all lines.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use soycart_core::Money;

    use super::*;

    fn product(id: i64, name: &str, pesos: i64, available: bool) -> Product {
        let now = Utc::now();
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            emoji: String::new(),
            price: Money::from_pesos(pesos),
            available,
            stock: 50,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_add_merges_by_id() {
        let mut cart = Cart::new();
        let classic = product(1, "Classic", 20, true);

        for _ in 0..4 {
            cart.add(&classic).unwrap();
        }

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 4);
    }

    #[test]
    fn test_add_unavailable_is_rejected_and_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Classic", 20, true)).unwrap();

        let result = cart.add(&product(2, "Mango Soya", 25, false));
        assert!(matches!(result, Err(CartError::Unavailable(_))));
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_set_quantity_clamps_to_one() {
        let mut cart = Cart::new();
        let classic = product(1, "Classic", 20, true);
        cart.add(&classic).unwrap();

        cart.set_quantity(classic.id, 0);
        assert_eq!(cart.items()[0].quantity, 1);

        cart.set_quantity(classic.id, 7);
        assert_eq!(cart.items()[0].quantity, 7);
    }

    #[test]
    fn test_set_quantity_unknown_id_is_ignored() {
        let mut cart = Cart::new();
        cart.set_quantity(ProductId::new(99), 5);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        let classic = product(1, "Classic", 20, true);
        let mango = product(2, "Mango Soya", 25, true);
        cart.add(&classic).unwrap();
        cart.add(&mango).unwrap();

        cart.remove(classic.id);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].product_id, mango.id);
    }

    #[test]
    fn test_total_invariant_under_reordering() {
        let classic = product(1, "Classic", 20, true);
        let mango = product(2, "Mango Soya", 25, true);

        // Path A: add classic twice, then mango
        let mut a = Cart::new();
        a.add(&classic).unwrap();
        a.add(&classic).unwrap();
        a.add(&mango).unwrap();

        // Path B: mango first, classic once, removed, then re-added twice
        let mut b = Cart::new();
        b.add(&mango).unwrap();
        b.add(&classic).unwrap();
        b.remove(classic.id);
        b.add(&classic).unwrap();
        b.set_quantity(classic.id, 2);

        assert_eq!(a.subtotal(), b.subtotal());
        assert_eq!(
            a.total(DeliveryOption::Delivery, Money::from_pesos(5)),
            b.total(DeliveryOption::Delivery, Money::from_pesos(5)),
        );
    }

    #[test]
    fn test_pickup_total_has_no_fee() {
        let mut cart = Cart::new();
        let classic = product(1, "Classic", 20, true);
        cart.add(&classic).unwrap();
        cart.set_quantity(classic.id, 3);

        let total = cart.total(DeliveryOption::Pickup, Money::from_pesos(5));
        assert_eq!(total, Money::from_pesos(60));
        assert_eq!(total, cart.subtotal());
    }

    #[test]
    fn test_delivery_total_applies_fee_per_item() {
        let mut cart = Cart::new();
        let classic = product(1, "Classic", 20, true);
        let mango = product(2, "Mango Soya", 25, true);
        cart.add(&classic).unwrap();
        cart.set_quantity(classic.id, 2);
        cart.add(&mango).unwrap();

        // 2 × (20 + 5) + 1 × (25 + 5)
        let total = cart.total(DeliveryOption::Delivery, Money::from_pesos(5));
        assert_eq!(total, Money::from_pesos(80));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Classic", 20, true)).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::ZERO);
    }
}
