//! Property-based tests for the money arithmetic laws.
//!
//! - Summation is exactly commutative and associative
//! - Multiplication distributes over summation
//! - Conversion round-trips within the documented truncation bound

use proptest::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::currency::RateTable;
use crate::money::{Amount, NANOS_PER_UNIT};

/// Strategy for a total value in nanos, kept small enough that three
/// summands can never overflow i64 units.
fn value_nanos() -> impl Strategy<Value = i128> {
    -1_000_000_000_000_000_000i128..=1_000_000_000_000_000_000i128
}

/// Strategy for a valid Amount in the given currency. Splitting one signed
/// nanos count keeps the two fields sign-consistent by construction.
fn amount(code: &'static str) -> impl Strategy<Value = Amount> {
    value_nanos().prop_map(move |v| {
        Amount::new(
            code,
            (v / i128::from(NANOS_PER_UNIT)) as i64,
            (v % i128::from(NANOS_PER_UNIT)) as i32,
        )
    })
}

/// Strategy for a positive exchange rate (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn as_nanos(amount: &Amount) -> i128 {
    i128::from(amount.units) * i128::from(NANOS_PER_UNIT) + i128::from(amount.nanos)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// sum(a, b) == sum(b, a), exactly.
    #[test]
    fn prop_sum_is_commutative(a in amount("USD"), b in amount("USD")) {
        prop_assert_eq!(a.sum(&b).unwrap(), b.sum(&a).unwrap());
    }

    /// sum(sum(a, b), c) == sum(a, sum(b, c)), exactly.
    #[test]
    fn prop_sum_is_associative(
        a in amount("USD"),
        b in amount("USD"),
        c in amount("USD"),
    ) {
        let left = a.sum(&b).unwrap().sum(&c).unwrap();
        let right = a.sum(&b.sum(&c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    /// The result of sum always satisfies the Amount invariants.
    #[test]
    fn prop_sum_preserves_invariants(a in amount("USD"), b in amount("USD")) {
        let total = a.sum(&b).unwrap();
        prop_assert!(total.validate().is_ok());
        prop_assert_eq!(as_nanos(&total), as_nanos(&a) + as_nanos(&b));
    }

    /// multiply(a, m + n) == sum(multiply(a, m), multiply(a, n)).
    #[test]
    fn prop_multiply_distributes_over_sum(
        a in amount("USD"),
        m in 0u32..=1000,
        n in 0u32..=1000,
    ) {
        let combined = a.multiply(m + n).unwrap();
        let split = a.multiply(m).unwrap().sum(&a.multiply(n).unwrap()).unwrap();
        prop_assert_eq!(combined, split);
    }

    /// multiply(a, 0) is the zero amount in a's currency.
    #[test]
    fn prop_multiply_by_zero(a in amount("USD")) {
        let none = a.multiply(0).unwrap();
        prop_assert!(none.is_zero());
        prop_assert_eq!(none.currency_code, "USD");
    }

    /// Conversion output always satisfies the Amount invariants.
    #[test]
    fn prop_convert_preserves_invariants(
        a in amount("USD"),
        source_rate in positive_rate(),
        target_rate in positive_rate(),
    ) {
        let mut rates = RateTable::new("EUR").unwrap();
        rates.insert("USD", source_rate).unwrap();
        rates.insert("JPY", target_rate).unwrap();

        if let Ok(converted) = rates.convert(&a, "JPY") {
            prop_assert!(converted.validate().is_ok());
            prop_assert_eq!(converted.currency_code, "JPY");
        }
    }

    /// Round-tripping a conversion is NOT exact, but the error stays within
    /// one nano of truncation per leg (the first leg's nano scaled back
    /// into source units, plus the second leg's).
    #[test]
    fn prop_convert_round_trip_error_is_bounded(
        a in amount("USD"),
        source_rate in positive_rate(),
        target_rate in positive_rate(),
    ) {
        let mut rates = RateTable::new("EUR").unwrap();
        rates.insert("USD", source_rate).unwrap();
        rates.insert("JPY", target_rate).unwrap();

        let there = match rates.convert(&a, "JPY") {
            Ok(amount) => amount,
            Err(_) => return Ok(()), // scaled past i64 units; nothing to round-trip
        };
        let back = rates.convert(&there, "USD").unwrap();

        let leg_scale = (source_rate / target_rate)
            .ceil()
            .to_i128()
            .expect("rate ratio fits i128");
        let bound = leg_scale + 1;
        prop_assert!((as_nanos(&a) - as_nanos(&back)).abs() <= bound);
    }
}
