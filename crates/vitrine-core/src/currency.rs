//! # Currency Module
//!
//! Exchange-rate snapshots and cross-currency conversion.
//!
//! ## Conversion Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Two-Hop Conversion                                  │
//! │                                                                         │
//! │  Every rate is expressed against one REFERENCE currency:                │
//! │    rate["USD"] = 1.1305  means  1 reference unit = 1.1305 USD          │
//! │                                                                         │
//! │  Converting USD → JPY:                                                  │
//! │                                                                         │
//! │    USD amount ──(÷ rate["USD"])──► reference ──(× rate["JPY"])──► JPY  │
//! │                                                                         │
//! │  The result is truncated toward zero past nano precision, so           │
//! │  convert(convert(x, B), A) is NOT guaranteed to equal x exactly.       │
//! │  That is documented behavior, bounded by one nano per conversion leg.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Decimal Rates?
//! Rates are fractional, so the multiply/divide hops cannot stay in pure
//! integer nanos. `rust_decimal` keeps those hops exact decimal arithmetic;
//! a binary float would reintroduce exactly the drift the Amount type
//! exists to prevent.

use std::collections::{BTreeSet, HashMap};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{MoneyError, MoneyResult, ValidationError};
use crate::money::{Amount, NANOS_PER_UNIT};
use crate::validation::validate_currency_code;

// =============================================================================
// Rate Table
// =============================================================================

/// An immutable snapshot of conversion rates against a reference currency.
///
/// ## Semantics
/// - `rates[code]` is how many `code` units one reference unit buys
/// - The reference currency itself is implicitly rate 1 and always present
/// - A snapshot is never mutated while a computation holds it; the rate
///   source swaps in a whole new table instead
///
/// ## Wire Shape
/// The rate source supplies snapshots as JSON:
/// ```json
/// { "reference": "EUR", "rates": { "USD": "1.1305", "JPY": "126.40" } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    /// The currency every rate is expressed against.
    reference: String,

    /// Currency code → units per one reference unit.
    rates: HashMap<String, Decimal>,
}

impl RateTable {
    /// Creates an empty rate table against the given reference currency.
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::currency::RateTable;
    /// use rust_decimal::Decimal;
    ///
    /// let mut rates = RateTable::new("EUR").unwrap();
    /// rates.insert("USD", Decimal::new(11305, 4)).unwrap(); // 1.1305
    /// assert!(rates.contains("USD"));
    /// assert!(rates.contains("EUR")); // reference is always present
    /// ```
    pub fn new(reference: impl Into<String>) -> Result<Self, ValidationError> {
        let reference = reference.into();
        validate_currency_code(&reference)?;

        Ok(RateTable {
            reference,
            rates: HashMap::new(),
        })
    }

    /// Adds or replaces the rate for a currency.
    ///
    /// ## Rules
    /// - The code must be a valid currency code (3 uppercase letters)
    /// - The rate must be strictly positive
    pub fn insert(
        &mut self,
        code: impl Into<String>,
        rate: Decimal,
    ) -> Result<(), ValidationError> {
        let code = code.into();
        validate_currency_code(&code)?;

        if rate <= Decimal::ZERO {
            return Err(ValidationError::MustBePositive {
                field: "rate".to_string(),
            });
        }

        self.rates.insert(code, rate);
        Ok(())
    }

    /// Returns the reference currency code.
    #[inline]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Checks whether a currency can be converted from/to.
    pub fn contains(&self, code: &str) -> bool {
        self.lookup(code).is_some()
    }

    /// All supported currency codes, sorted, reference included.
    ///
    /// This is what the storefront's currency picker renders.
    pub fn currencies(&self) -> Vec<String> {
        let mut codes: BTreeSet<&str> = self.rates.keys().map(String::as_str).collect();
        codes.insert(&self.reference);
        codes.into_iter().map(String::from).collect()
    }

    /// Rate lookup. The reference currency is implicitly 1; a non-positive
    /// stored rate (possible through a deserialized snapshot) is treated as
    /// unusable, i.e. absent.
    fn lookup(&self, code: &str) -> Option<Decimal> {
        if code == self.reference {
            return Some(Decimal::ONE);
        }
        self.rates
            .get(code)
            .copied()
            .filter(|rate| *rate > Decimal::ZERO)
    }

    /// Re-expresses an amount in the target currency.
    ///
    /// ## Algorithm
    /// 1. Both currency codes must be in the table, else
    ///    [`MoneyError::UnknownCurrency`]
    /// 2. Exact decimal value `units + nanos / 1e9`, divided by the source
    ///    rate (into reference units) then multiplied by the target rate
    /// 3. Re-split into units/nanos, truncating toward zero past nano
    ///    precision - no rounding
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::currency::RateTable;
    /// use vitrine_core::money::Amount;
    /// use rust_decimal::Decimal;
    ///
    /// let mut rates = RateTable::new("EUR").unwrap();
    /// rates.insert("USD", Decimal::new(2, 0)).unwrap(); // 1 EUR = 2 USD
    ///
    /// let price = Amount::new("USD", 10, 0);
    /// let in_eur = rates.convert(&price, "EUR").unwrap();
    /// assert_eq!(in_eur, Amount::new("EUR", 5, 0));
    /// ```
    ///
    /// ## Invertibility
    /// Because of truncation, converting back does not necessarily return
    /// the original amount; the error is bounded by one nano per leg.
    pub fn convert(&self, amount: &Amount, target_code: &str) -> MoneyResult<Amount> {
        amount.validate()?;

        let source_rate = self
            .lookup(&amount.currency_code)
            .ok_or_else(|| MoneyError::UnknownCurrency(amount.currency_code.clone()))?;
        let target_rate = self
            .lookup(target_code)
            .ok_or_else(|| MoneyError::UnknownCurrency(target_code.to_string()))?;

        // units + nanos/1e9, exact in decimal
        let value = Decimal::from(amount.units) + Decimal::new(i64::from(amount.nanos), 9);

        // to reference units, then to the target currency
        let converted = value
            .checked_div(source_rate)
            .and_then(|in_reference| in_reference.checked_mul(target_rate))
            .ok_or(MoneyError::Overflow)?;

        // truncate toward zero past nano precision
        let truncated = converted.trunc_with_scale(9);
        let units_part = truncated.trunc();
        let units = units_part.to_i64().ok_or(MoneyError::Overflow)?;
        let nanos = ((truncated - units_part) * Decimal::from(NANOS_PER_UNIT))
            .to_i32()
            .ok_or(MoneyError::Overflow)?;

        Ok(Amount {
            currency_code: target_code.to_string(),
            units,
            nanos,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
