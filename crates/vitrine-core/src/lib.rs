//! # vitrine-core: Pure Money Engine for Vitrine
//!
//! This crate is the **heart** of the Vitrine storefront. It contains the
//! fixed-point monetary value engine as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Vitrine Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Storefront Web Layer (out of scope)            │   │
//! │  │    product pages ──► cart page ──► checkout ──► order page     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    vitrine-checkout                             │   │
//! │  │    cart state, order totals, rate-table snapshots              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vitrine-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │ currency  │  │   error   │  │ validation│  │   │
//! │  │   │  Amount   │  │ RateTable │  │  typed    │  │   rules   │  │   │
//! │  │   │ sum/mult  │  │  convert  │  │  errors   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO FLOATS • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Amount type with exact fixed-point arithmetic
//! - [`currency`] - Rate-table snapshots and cross-currency conversion
//! - [`error`] - Typed error taxonomy
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input = same output
//! 2. **No I/O**: Rate fetching, persistence, rendering are FORBIDDEN here
//! 3. **Exact Arithmetic**: Integer units/nanos with explicit carry; decimal rates
//! 4. **Explicit Errors**: All failures are typed Results, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use vitrine_core::currency::RateTable;
//! use vitrine_core::money::Amount;
//! use rust_decimal::Decimal;
//!
//! // A catalog price, decoded from the product service
//! let price = Amount::new("USD", 19, 990_000_000); // $19.99
//!
//! // Expand by quantity, then total up with shipping
//! let line = price.multiply(2).unwrap();
//! let shipping = Amount::new("USD", 4, 990_000_000);
//! let total = Amount::zero("USD").sum(&line).unwrap().sum(&shipping).unwrap();
//!
//! assert_eq!(total.to_string(), "USD 44.97");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod currency;
pub mod error;
pub mod money;
pub mod validation;

#[cfg(test)]
mod props;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vitrine_core::Amount` instead of
// `use vitrine_core::money::Amount`

pub use currency::RateTable;
pub use error::{InvalidAmount, MoneyError, MoneyResult, ValidationError};
pub use money::Amount;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency the storefront renders when the customer has not picked one.
///
/// Catalog prices arrive expressed in the rate table's reference currency
/// and are converted to the selected display currency; this is only the
/// initial selection.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Maximum unique items allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable order sizes.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single item in a cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10)
pub const MAX_ITEM_QUANTITY: u32 = 999;
