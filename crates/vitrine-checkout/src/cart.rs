//! # Cart State
//!
//! Manages a shopping cart and computes order totals through the money
//! engine.
//!
//! ## Order Total Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Total Computation                              │
//! │                                                                         │
//! │  For each cart line (unit price frozen in the reference currency):     │
//! │                                                                         │
//! │    frozen price ──convert──► display currency ──multiply──► line total │
//! │                                                                  │      │
//! │                     zero accumulator (display currency) ◄──sum──┘      │
//! │                                │                                        │
//! │    shipping quote ────sum─────┘                                        │
//! │                                │                                        │
//! │                                ▼                                        │
//! │                          OrderSummary                                   │
//! │                                                                         │
//! │  Every arithmetic step goes through vitrine-core; any currency          │
//! │  mismatch or overflow surfaces as a typed error, never a wrong total.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::debug;
use vitrine_core::currency::RateTable;
use vitrine_core::money::Amount;
use vitrine_core::validation::{validate_currency_code, validate_quantity};
use vitrine_core::{MoneyError, MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

use crate::error::{CheckoutError, CheckoutResult};

/// An item in the shopping cart.
///
/// ## Design Notes
/// - `product_id`: the catalog's business identifier
/// - `unit_price`: frozen at the moment of adding, expressed in the rate
///   table's reference currency. A later catalog price change does not
///   reprice a cart that already holds the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Catalog product identifier
    pub product_id: String,

    /// Display name at time of adding (frozen)
    pub name: String,

    /// Unit price at time of adding (frozen, reference currency)
    pub unit_price: Amount,

    /// Quantity in cart
    pub quantity: u32,
}

/// A computed order line: the cart item re-expressed in the display
/// currency with its quantity applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    /// Unit price converted to the display currency
    pub unit_price: Amount,
    /// unit_price × quantity
    pub line_total: Amount,
}

/// Order totals in the customer's display currency.
///
/// This is what the cart and order pages render; all amounts share the
/// summary's currency code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    /// The display currency every amount below is expressed in
    pub currency_code: String,

    /// One line per cart item
    pub lines: Vec<OrderLine>,

    /// Total quantity across all lines
    pub cart_size: u32,

    /// Shipping cost, when a quote was included
    pub shipping: Option<Amount>,

    /// Grand total: all line totals plus shipping
    pub total: Amount,
}

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `product_id` (adding the same product increases
///   its quantity)
/// - Quantity is always 1..=MAX_ITEM_QUANTITY (update to 0 removes)
/// - At most MAX_CART_ITEMS unique items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in the cart
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds an item to the cart, or increases quantity if the product is
    /// already present.
    ///
    /// ## Behavior
    /// - Quantity and frozen unit price are validated up front
    /// - Same `product_id` merges quantities (bounded by MAX_ITEM_QUANTITY)
    /// - A new product is appended (bounded by MAX_CART_ITEMS)
    pub fn add_item(&mut self, item: CartItem) -> CheckoutResult<()> {
        validate_quantity(item.quantity)?;
        item.unit_price.validate().map_err(MoneyError::from)?;

        debug!(
            product_id = %item.product_id,
            quantity = item.quantity,
            "adding item to cart"
        );

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == item.product_id)
        {
            let requested = existing.quantity + item.quantity;
            if requested > MAX_ITEM_QUANTITY {
                return Err(CheckoutError::QuantityTooLarge {
                    requested,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            existing.quantity = requested;
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CheckoutError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.items.push(item);
        Ok(())
    }

    /// Updates the quantity of an item in the cart.
    ///
    /// ## Behavior
    /// - Quantity 0 removes the item
    /// - Unknown product id is an error
    pub fn update_quantity(&mut self, product_id: &str, quantity: u32) -> CheckoutResult<()> {
        if quantity == 0 {
            return self.remove_item(product_id);
        }

        validate_quantity(quantity)?;

        debug!(product_id = %product_id, quantity, "updating cart quantity");

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
            Ok(())
        } else {
            Err(CheckoutError::ProductNotInCart(product_id.to_string()))
        }
    }

    /// Removes an item from the cart by product id.
    pub fn remove_item(&mut self, product_id: &str) -> CheckoutResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);

        if self.items.len() == initial_len {
            Err(CheckoutError::ProductNotInCart(product_id.to_string()))
        } else {
            debug!(product_id = %product_id, "removed item from cart");
            Ok(())
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        debug!(items = self.items.len(), "clearing cart");
        self.items.clear();
    }

    /// Returns the number of unique items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Computes the order totals in the customer's display currency.
    ///
    /// Each frozen unit price is converted with the supplied rate
    /// snapshot, expanded by its quantity, and accumulated into a grand
    /// total seeded with the display currency's zero. The shipping quote,
    /// when present, must already be expressed in the display currency -
    /// the engine rejects anything else as a currency mismatch rather
    /// than producing a silently wrong total.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal_macros::dec;
    /// use vitrine_checkout::cart::{Cart, CartItem};
    /// use vitrine_core::currency::RateTable;
    /// use vitrine_core::money::Amount;
    ///
    /// let mut rates = RateTable::new("USD").unwrap();
    /// rates.insert("EUR", dec!(0.9)).unwrap();
    ///
    /// let mut cart = Cart::new();
    /// cart.add_item(CartItem {
    ///     product_id: "OLJCESPC7Z".to_string(),
    ///     name: "Vintage Typewriter".to_string(),
    ///     unit_price: Amount::new("USD", 67, 990_000_000),
    ///     quantity: 1,
    /// })
    /// .unwrap();
    ///
    /// let summary = cart.order_summary("EUR", &rates, None).unwrap();
    /// assert_eq!(summary.total.to_string(), "EUR 61.19"); // 67.99 × 0.9
    /// ```
    pub fn order_summary(
        &self,
        display_currency: &str,
        rates: &RateTable,
        shipping: Option<&Amount>,
    ) -> CheckoutResult<OrderSummary> {
        validate_currency_code(display_currency)?;

        debug!(
            currency = %display_currency,
            items = self.items.len(),
            "computing order summary"
        );

        let mut lines = Vec::with_capacity(self.items.len());
        let mut total = Amount::zero(display_currency);

        for item in &self.items {
            let unit_price = rates.convert(&item.unit_price, display_currency)?;
            let line_total = unit_price.multiply(item.quantity)?;
            total = total.sum(&line_total)?;

            lines.push(OrderLine {
                product_id: item.product_id.clone(),
                name: item.name.clone(),
                quantity: item.quantity,
                unit_price,
                line_total,
            });
        }

        if let Some(shipping) = shipping {
            total = total.sum(shipping)?;
        }

        Ok(OrderSummary {
            currency_code: display_currency.to_string(),
            lines,
            cart_size: self.total_quantity(),
            shipping: shipping.cloned(),
            total,
        })
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// Shared cart state for the storefront session layer.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Cart>>` because:
/// - `Arc`: shared ownership across request handlers
/// - `Mutex`: only one handler mutates the cart at a time
///
/// ## Why Not RwLock?
/// Cart operations are quick and most of them modify state. An RwLock
/// would add complexity with minimal benefit. (The rate snapshot holder
/// in [`crate::rates`] is the read-mostly case and does use one.)
#[derive(Debug, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let summary = cart_state.with_cart(|cart| cart.order_summary("USD", &rates, None))?;
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_item(item))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(product_id: &str, units: i64, nanos: i32, quantity: u32) -> CartItem {
        CartItem {
            product_id: product_id.to_string(),
            name: format!("Product {}", product_id),
            unit_price: Amount::new("USD", units, nanos),
            quantity,
        }
    }

    /// Rates as the storefront sees them: catalog prices in USD, customer
    /// may pick EUR.
    fn test_rates() -> RateTable {
        let mut rates = RateTable::new("USD").unwrap();
        rates.insert("EUR", dec!(0.9)).unwrap();
        rates
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 9, 990_000_000, 2)).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_cart_add_same_product_increases_quantity() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 9, 990_000_000, 2)).unwrap();
        cart.add_item(item("1", 9, 990_000_000, 3)).unwrap();

        assert_eq!(cart.item_count(), 1); // still one unique item
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_cart_rejects_bad_input() {
        let mut cart = Cart::new();

        assert!(matches!(
            cart.add_item(item("1", 1, 0, 0)).unwrap_err(),
            CheckoutError::Validation(_)
        ));

        // invalid frozen price is caller misuse, surfaced typed
        assert!(matches!(
            cart.add_item(item("1", 1, -500_000_000, 1)).unwrap_err(),
            CheckoutError::Money(MoneyError::Invalid(_))
        ));

        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_quantity_cap_on_merge() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 1, 0, MAX_ITEM_QUANTITY)).unwrap();

        let err = cart.add_item(item("1", 1, 0, 1)).unwrap_err();
        assert_eq!(
            err,
            CheckoutError::QuantityTooLarge {
                requested: MAX_ITEM_QUANTITY + 1,
                max: MAX_ITEM_QUANTITY,
            }
        );
    }

    #[test]
    fn test_cart_update_and_remove() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 1, 0, 2)).unwrap();

        cart.update_quantity("1", 7).unwrap();
        assert_eq!(cart.total_quantity(), 7);

        // quantity 0 removes
        cart.update_quantity("1", 0).unwrap();
        assert!(cart.is_empty());

        assert_eq!(
            cart.remove_item("1").unwrap_err(),
            CheckoutError::ProductNotInCart("1".to_string())
        );
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 1, 0, 2)).unwrap();
        cart.add_item(item("2", 2, 0, 1)).unwrap();

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_order_summary_in_reference_currency() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 19, 990_000_000, 2)).unwrap(); // 2 × $19.99
        cart.add_item(item("2", 3, 500_000_000, 1)).unwrap(); //  1 × $3.50

        let shipping = Amount::new("USD", 4, 990_000_000);
        let summary = cart
            .order_summary("USD", &test_rates(), Some(&shipping))
            .unwrap();

        assert_eq!(summary.currency_code, "USD");
        assert_eq!(summary.cart_size, 3);
        assert_eq!(summary.lines[0].line_total, Amount::new("USD", 39, 980_000_000));
        assert_eq!(summary.lines[1].line_total, Amount::new("USD", 3, 500_000_000));
        // 39.98 + 3.50 + 4.99
        assert_eq!(summary.total, Amount::new("USD", 48, 470_000_000));
        assert_eq!(summary.total.to_string(), "USD 48.47");
    }

    #[test]
    fn test_order_summary_converts_to_display_currency() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 19, 990_000_000, 2)).unwrap();
        cart.add_item(item("2", 3, 500_000_000, 1)).unwrap();

        // the shipping quote arrives already converted
        let shipping = Amount::new("EUR", 4, 491_000_000); // $4.99 × 0.9
        let summary = cart
            .order_summary("EUR", &test_rates(), Some(&shipping))
            .unwrap();

        // 19.99 × 0.9 = 17.991 per unit, × 2 = 35.982
        assert_eq!(
            summary.lines[0].unit_price,
            Amount::new("EUR", 17, 991_000_000)
        );
        assert_eq!(
            summary.lines[0].line_total,
            Amount::new("EUR", 35, 982_000_000)
        );
        // 35.982 + 3.15 + 4.491 = 43.623
        assert_eq!(summary.total, Amount::new("EUR", 43, 623_000_000));
        assert_eq!(summary.total.to_string(), "EUR 43.62");
    }

    #[test]
    fn test_order_summary_rejects_mismatched_shipping() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 1, 0, 1)).unwrap();

        // a USD quote cannot be folded into a EUR total
        let shipping = Amount::new("USD", 4, 990_000_000);
        let err = cart
            .order_summary("EUR", &test_rates(), Some(&shipping))
            .unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::Money(MoneyError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_order_summary_unknown_display_currency() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 1, 0, 1)).unwrap();

        let err = cart
            .order_summary("JPY", &test_rates(), None)
            .unwrap_err();
        assert_eq!(
            err,
            CheckoutError::Money(MoneyError::UnknownCurrency("JPY".to_string()))
        );
    }

    #[test]
    fn test_order_summary_empty_cart() {
        // a fresh session renders an empty cart in the default currency
        let cart = Cart::new();
        let summary = cart
            .order_summary(vitrine_core::DEFAULT_CURRENCY, &test_rates(), None)
            .unwrap();

        assert!(summary.lines.is_empty());
        assert!(summary.total.is_zero());
        assert_eq!(summary.total.currency_code, "USD");
    }

    #[test]
    fn test_cart_state_thread_safe_access() {
        let state = CartState::new();

        state.with_cart_mut(|cart| cart.add_item(item("1", 2, 0, 3))).unwrap();

        let quantity = state.with_cart(|cart| cart.total_quantity());
        assert_eq!(quantity, 3);
    }

    #[test]
    fn test_cart_response_wire_shape() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 19, 990_000_000, 2)).unwrap();

        let summary = cart.order_summary("USD", &test_rates(), None).unwrap();
        let encoded = serde_json::to_value(&summary).unwrap();

        assert_eq!(encoded["currencyCode"], "USD");
        assert_eq!(encoded["cartSize"], 2);
        assert_eq!(encoded["lines"][0]["productId"], "1");
        assert_eq!(encoded["total"]["units"], 39);
    }
}
