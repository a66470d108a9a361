//! # Error Types
//!
//! Domain-specific error types for vitrine-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vitrine-core errors (this file)                                       │
//! │  ├── InvalidAmount    - An Amount breaks its own invariants            │
//! │  ├── MoneyError       - Arithmetic/conversion failures                 │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  vitrine-checkout errors (separate crate)                              │
//! │  └── CheckoutError    - Cart/order aggregation failures                │
//! │                                                                         │
//! │  Flow: InvalidAmount → MoneyError → CheckoutError → Storefront         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (codes, offending values)
//! 3. Errors are enum variants, never String
//! 4. Caller misuse (`InvalidAmount`) stays distinguishable from
//!    legitimate runtime conditions (mismatch, overflow, unknown currency)

use thiserror::Error;

// =============================================================================
// Invalid Amount
// =============================================================================

/// An `Amount` value that breaks the representation invariants.
///
/// Amounts sourced externally must be validated before they participate in
/// arithmetic. Hitting one of these from an arithmetic entry point means
/// the *caller* skipped validation - it is a programming error, not a
/// runtime condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidAmount {
    /// The fractional component is outside ±999,999,999 nanos.
    #[error("nanos {nanos} is outside the range -999999999..=999999999")]
    NanosOutOfRange { nanos: i32 },

    /// `units` and `nanos` are both nonzero with opposite signs.
    ///
    /// ## When This Occurs
    /// - An upstream service encoded `-$1.50` as `units: -1, nanos: 500000000`
    ///   instead of `units: -1, nanos: -500000000`
    /// - Hand-built test fixtures that forgot the shared-sign rule
    #[error("units {units} and nanos {nanos} disagree in sign")]
    SignMismatch { units: i64, nanos: i32 },
}

// =============================================================================
// Money Error
// =============================================================================

/// Failures raised by amount arithmetic and currency conversion.
///
/// These sit on a money-correctness path and are always returned as
/// explicit results - never panicked, never silently absorbed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Two amounts with different (nonempty) currency codes were combined.
    ///
    /// ## When This Occurs
    /// - A line item priced in EUR was summed into a USD order total
    ///   without converting first
    #[error("mismatching currency codes: {left} vs {right}")]
    CurrencyMismatch { left: String, right: String },

    /// The result does not fit the representable `units` range.
    #[error("amount overflows the representable range")]
    Overflow,

    /// A currency code is absent from the rate table.
    #[error("currency {0} is not in the rate table")]
    UnknownCurrency(String),

    /// An operand failed invariant validation (caller misuse).
    #[error("invalid amount: {0}")]
    Invalid(#[from] InvalidAmount),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when externally supplied input doesn't meet
/// requirements. Used for early validation before money logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., lowercase or non-alphabetic currency code).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with MoneyError.
pub type MoneyResult<T> = Result<T, MoneyError>;

// =============================================================================
// Unit Tests
// =============================================================================
