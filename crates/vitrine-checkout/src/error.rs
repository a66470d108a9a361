//! # Checkout Error Type
//!
//! Unified error type for the cart/order aggregation layer.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Vitrine                                │
//! │                                                                         │
//! │  Storefront Web Layer            vitrine-checkout                       │
//! │  ────────────────────            ────────────────                       │
//! │                                                                         │
//! │  POST /cart  ────────────────►  Cart::add_item                          │
//! │                                     │                                   │
//! │                                     ├── bad quantity ── Validation ──┐  │
//! │                                     ├── cart full ───── CartTooLarge │  │
//! │                                     └── ok ────────────────────────┐ │  │
//! │                                                                    │ │  │
//! │  GET /cart ──────────────────►  Cart::order_summary                │ │  │
//! │                                     │                              │ │  │
//! │                                     ├── unknown currency ──┐       │ │  │
//! │                                     ├── overflow ───────── Money ──┤ │  │
//! │                                     └── ok ────────────────────────┤ │  │
//! │                                                                    ▼ ▼  │
//! │                              HTTP 200 / rendered error page             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine's distinction survives the wrap: `CheckoutError::Money`
//! carrying `MoneyError::Invalid` is caller misuse, anything else is a
//! legitimate runtime condition.

use thiserror::Error;
use vitrine_core::{MoneyError, ValidationError};

/// Errors from cart mutation and order-total computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// The referenced product is not in the cart.
    #[error("product {0} is not in the cart")]
    ProductNotInCart(String),

    /// Cart has reached the maximum number of unique items.
    #[error("cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Item quantity would exceed the per-item maximum.
    #[error("quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: u32, max: u32 },

    /// Money arithmetic or conversion failed.
    #[error("money arithmetic failed: {0}")]
    Money(#[from] MoneyError),

    /// Input validation failed (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;
