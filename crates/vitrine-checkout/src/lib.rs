//! # vitrine-checkout: Cart Aggregation for Vitrine
//!
//! The order/cart aggregation layer: the storefront's only stateful
//! consumer of the money engine.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     vitrine-checkout                                    │
//! │                                                                         │
//! │  ┌──────────────┐      ┌──────────────┐      ┌──────────────┐          │
//! │  │     cart     │      │    rates     │      │    error     │          │
//! │  │ Cart, lines, │      │  RateState   │      │CheckoutError │          │
//! │  │ OrderSummary │      │  snapshots   │      │              │          │
//! │  └──────┬───────┘      └──────┬───────┘      └──────────────┘          │
//! │         │                     │                                         │
//! │         └─────────┬───────────┘                                         │
//! │                   ▼                                                     │
//! │            vitrine-core                                                 │
//! │    (Amount arithmetic, conversion)                                      │
//! │                                                                         │
//! │  The web layer holds one CartState per session and one RateState       │
//! │  per process; everything else is computed per request.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - Cart state and order-total computation
//! - [`rates`] - Atomically-swapped rate-table snapshots
//! - [`error`] - Consumer-facing error type

pub mod cart;
pub mod error;
pub mod rates;

pub use cart::{Cart, CartItem, CartState, OrderLine, OrderSummary};
pub use error::{CheckoutError, CheckoutResult};
pub use rates::RateState;
