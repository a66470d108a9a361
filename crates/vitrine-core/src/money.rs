//! # Money Module
//!
//! Provides the `Amount` type for handling monetary values safely.
//!
//! ## Why Fixed-Point Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In a storefront that means:                                            │
//! │    silently wrong order totals and failed reconciliation                │
//! │                                                                         │
//! │  OUR SOLUTION: units + nanos                                            │
//! │    $19.99 = { currency_code: "USD", units: 19, nanos: 990_000_000 }    │
//! │    Every operation is exact integer arithmetic with explicit carry     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vitrine_core::money::Amount;
//!
//! let price = Amount::new("USD", 19, 990_000_000); // $19.99
//! let two = price.multiply(2).unwrap();            // $39.98
//! let total = two.sum(&Amount::new("USD", 0, 20_000_000)).unwrap();
//!
//! assert_eq!(total, Amount::new("USD", 40, 0));
//! assert_eq!(total.to_string(), "USD 40.00");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{InvalidAmount, MoneyError, MoneyResult};

// =============================================================================
// Constants
// =============================================================================

/// One whole currency unit expressed in nanos (billionths).
pub const NANOS_PER_UNIT: i64 = 1_000_000_000;

/// Largest fractional magnitude a valid Amount may carry.
pub const NANOS_MAX: i32 = 999_999_999;

/// Smallest fractional magnitude a valid Amount may carry.
pub const NANOS_MIN: i32 = -999_999_999;

// =============================================================================
// Amount Type
// =============================================================================

/// A currency-tagged fixed-point monetary value.
///
/// ## Representation
/// - `units`: signed whole-currency units (e.g. whole dollars)
/// - `nanos`: signed billionths of one unit, `|nanos| <= 999_999_999`
/// - both fields share a sign (or are zero); `$-1.75` is
///   `units: -1, nanos: -750_000_000`, never `units: -1, nanos: 250_000_000`
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Amount is Used                                 │
/// │                                                                         │
/// │  Catalog price ──► convert(display currency) ──► multiply(quantity)    │
/// │                                                        │                │
/// │                                                        ▼                │
/// │  Shipping quote ────────────────────────────► sum ──► order total      │
/// │                                                        │                │
/// │                                                        ▼                │
/// │                                      Display: "USD 40.00"              │
/// │                                                                         │
/// │  EVERY monetary value in the storefront flows through this type        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Lifecycle
/// Amounts are immutable values: constructed from an upstream price source,
/// combined through the operations below (each returns a *new* value), and
/// consumed for display or transmission. There is no in-place mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Amount {
    /// Uppercase alphabetic currency code (ISO 4217 style, e.g. "USD").
    /// Empty only for the additive identity (a fresh zero accumulator).
    pub currency_code: String,

    /// Signed whole-currency units.
    pub units: i64,

    /// Signed fractional part in billionths of one unit.
    pub nanos: i32,
}

impl Amount {
    /// Creates an Amount from its raw parts.
    ///
    /// No validation happens here - upstream services supply already-decoded
    /// values, and [`Amount::validate`] is the explicit precondition check
    /// before arithmetic.
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::money::Amount;
    ///
    /// let price = Amount::new("USD", 19, 990_000_000); // $19.99
    /// assert!(price.validate().is_ok());
    /// ```
    #[inline]
    pub fn new(currency_code: impl Into<String>, units: i64, nanos: i32) -> Self {
        Amount {
            currency_code: currency_code.into(),
            units,
            nanos,
        }
    }

    /// Returns the zero amount in the given currency.
    ///
    /// Pass an empty code for the code-less additive identity: the zero
    /// accumulator that adopts the other operand's currency on first `sum`.
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::money::Amount;
    ///
    /// let total = Amount::zero("USD");
    /// assert!(total.is_zero());
    /// assert_eq!(total.currency_code, "USD");
    /// ```
    #[inline]
    pub fn zero(currency_code: impl Into<String>) -> Self {
        Amount::new(currency_code, 0, 0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.units == 0 && self.nanos == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.units > 0 || (self.units == 0 && self.nanos > 0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.units < 0 || (self.units == 0 && self.nanos < 0)
    }

    /// Checks whether two amounts carry the same nonempty currency code.
    ///
    /// Codes compare by byte equality; a code-less amount is never "the
    /// same currency" as anything.
    #[inline]
    pub fn same_currency(&self, other: &Amount) -> bool {
        !self.currency_code.is_empty() && self.currency_code == other.currency_code
    }

    /// True for the additive identity: zero with no currency code yet.
    #[inline]
    fn is_identity(&self) -> bool {
        self.currency_code.is_empty() && self.is_zero()
    }

    /// Validates the representation invariants.
    ///
    /// ## Checks
    /// - `|nanos| <= 999_999_999` ([`InvalidAmount::NanosOutOfRange`])
    /// - `units` and `nanos` share a sign, or one/both are zero
    ///   ([`InvalidAmount::SignMismatch`])
    ///
    /// The zero amount is valid regardless of currency code. This check is
    /// the precondition for every other operation; validate amounts sourced
    /// externally before combining them.
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::money::Amount;
    ///
    /// assert!(Amount::new("USD", 19, 990_000_000).validate().is_ok());
    /// assert!(Amount::new("USD", -1, -750_000_000).validate().is_ok());
    ///
    /// // $1 minus 50 cents is not how negatives are encoded
    /// assert!(Amount::new("USD", 1, -500_000_000).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), InvalidAmount> {
        if self.nanos < NANOS_MIN || self.nanos > NANOS_MAX {
            return Err(InvalidAmount::NanosOutOfRange { nanos: self.nanos });
        }

        if (self.units > 0 && self.nanos < 0) || (self.units < 0 && self.nanos > 0) {
            return Err(InvalidAmount::SignMismatch {
                units: self.units,
                nanos: self.nanos,
            });
        }

        Ok(())
    }

    /// Adds two amounts of matching currency, carrying fractional overflow
    /// into the whole-unit component.
    ///
    /// ## Currency Rules
    /// - Equal codes combine directly; the result keeps the shared code
    /// - The code-less zero identity adopts the other operand's code
    /// - Anything else is [`MoneyError::CurrencyMismatch`]
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::money::Amount;
    ///
    /// let a = Amount::new("USD", 19, 990_000_000); // $19.99
    /// let b = Amount::new("USD", 0, 20_000_000);   // $0.02
    ///
    /// // carry across the nanos boundary
    /// assert_eq!(a.sum(&b).unwrap(), Amount::new("USD", 20, 10_000_000));
    /// ```
    ///
    /// ## Exactness
    /// Computed with exact integers - `sum` is associative and commutative
    /// over valid same-currency amounts, exactly and not approximately.
    pub fn sum(&self, other: &Amount) -> MoneyResult<Amount> {
        self.validate()?;
        other.validate()?;

        let currency_code = if self.currency_code == other.currency_code {
            self.currency_code.clone()
        } else if self.is_identity() {
            other.currency_code.clone()
        } else if other.is_identity() {
            self.currency_code.clone()
        } else {
            return Err(MoneyError::CurrencyMismatch {
                left: self.currency_code.clone(),
                right: other.currency_code.clone(),
            });
        };

        let mut nanos = i64::from(self.nanos) + i64::from(other.nanos);
        let mut carry = 0i64;
        if nanos >= NANOS_PER_UNIT {
            carry = 1;
            nanos -= NANOS_PER_UNIT;
        } else if nanos <= -NANOS_PER_UNIT {
            carry = -1;
            nanos += NANOS_PER_UNIT;
        }

        let mut units = self
            .units
            .checked_add(other.units)
            .and_then(|u| u.checked_add(carry))
            .ok_or(MoneyError::Overflow)?;

        // Operands of different signs can leave the two fields disagreeing;
        // move one whole unit of magnitude between them so signs line up
        // again, preserving the total value.
        if units > 0 && nanos < 0 {
            units -= 1;
            nanos += NANOS_PER_UNIT;
        } else if units < 0 && nanos > 0 {
            units += 1;
            nanos -= NANOS_PER_UNIT;
        }

        Ok(Amount {
            currency_code,
            units,
            nanos: nanos as i32,
        })
    }

    /// Multiplies the amount by a non-negative quantity.
    ///
    /// Equivalent to summing the amount with itself `quantity` times, but
    /// computed by scaling: widen to a single nanos count
    /// (`units * 1_000_000_000 + nanos`) in 128-bit, multiply, then split
    /// back into a normalized units/nanos pair.
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::money::Amount;
    ///
    /// let unit_price = Amount::new("USD", 2, 500_000_000); // $2.50
    /// let line_total = unit_price.multiply(3).unwrap();
    /// assert_eq!(line_total, Amount::new("USD", 7, 500_000_000)); // $7.50
    /// ```
    ///
    /// ## Edge Cases
    /// - `quantity = 0` yields the currency-preserving zero amount
    /// - A scaled result whose units exceed i64 is [`MoneyError::Overflow`]
    pub fn multiply(&self, quantity: u32) -> MoneyResult<Amount> {
        self.validate()?;

        if quantity == 0 {
            return Ok(Amount::zero(self.currency_code.clone()));
        }

        let total_nanos =
            i128::from(self.units) * i128::from(NANOS_PER_UNIT) + i128::from(self.nanos);
        let scaled = total_nanos
            .checked_mul(i128::from(quantity))
            .ok_or(MoneyError::Overflow)?;

        // i128 division truncates toward zero and keeps the dividend's
        // sign, so the split pair already satisfies the sign invariant.
        let units = i64::try_from(scaled / i128::from(NANOS_PER_UNIT))
            .map_err(|_| MoneyError::Overflow)?;
        let nanos = (scaled % i128::from(NANOS_PER_UNIT)) as i32;

        Ok(Amount {
            currency_code: self.currency_code.clone(),
            units,
            nanos,
        })
    }

    /// Returns the negated amount (refund flows).
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::money::Amount;
    ///
    /// let charge = Amount::new("USD", 5, 500_000_000);
    /// let refund = charge.negate().unwrap();
    /// assert_eq!(refund, Amount::new("USD", -5, -500_000_000));
    /// ```
    pub fn negate(&self) -> MoneyResult<Amount> {
        self.validate()?;

        let units = self.units.checked_neg().ok_or(MoneyError::Overflow)?;
        Ok(Amount {
            currency_code: self.currency_code.clone(),
            units,
            nanos: -self.nanos,
        })
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Canonical display form: `"<currency_code> <units>.<two-digit-fraction>"`.
///
/// The two-digit fraction is `|nanos| / 10_000_000` truncated - NOT rounded -
/// so `nanos: 1_000_000` renders as `.00`. This is a lossy, presentation-only
/// projection; it must never be parsed back into arithmetic.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let fraction = (i64::from(self.nanos) / 10_000_000).abs();
        write!(
            f,
            "{} {}{}.{:02}",
            self.currency_code,
            sign,
            self.units.unsigned_abs(),
            fraction
        )
    }
}

/// Default amount is the code-less additive identity.
impl Default for Amount {
    fn default() -> Self {
        Amount::zero("")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
