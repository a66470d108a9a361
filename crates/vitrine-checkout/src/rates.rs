//! # Rate Snapshot State
//!
//! Holds the current exchange-rate table for the storefront.
//!
//! ## Snapshot Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Rate Snapshot Lifecycle                              │
//! │                                                                         │
//! │  Currency Rate Source (external, out of scope)                          │
//! │         │                                                               │
//! │         │  fresh RateTable                                              │
//! │         ▼                                                               │
//! │  RateState::swap ──────► RwLock<Arc<RateTable>> ◄──── current()        │
//! │                                                            │            │
//! │                                                            ▼            │
//! │                                            order_summary(..., &table)   │
//! │                                                                         │
//! │  A computation holds its Arc for its whole duration: a concurrent      │
//! │  swap never changes rates mid-total. Tables are replaced wholesale,    │
//! │  never edited in place - there is no ambient mutable global here.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, RwLock};

use tracing::info;
use vitrine_core::currency::RateTable;

/// Shared holder of the current rate-table snapshot.
///
/// ## Thread Safety
/// Read-mostly: every request reads the current table, while the rate
/// source swaps in a new one occasionally. `RwLock` over an `Arc` keeps
/// reads cheap and hands each reader an immutable snapshot that outlives
/// the swap.
#[derive(Debug)]
pub struct RateState {
    table: RwLock<Arc<RateTable>>,
}

impl RateState {
    /// Creates the holder with an initial snapshot.
    pub fn new(table: RateTable) -> Self {
        RateState {
            table: RwLock::new(Arc::new(table)),
        }
    }

    /// Returns the current snapshot.
    ///
    /// The returned `Arc` stays valid (and internally unchanged) for as
    /// long as the caller holds it, regardless of concurrent swaps.
    pub fn current(&self) -> Arc<RateTable> {
        Arc::clone(&self.table.read().expect("Rate table lock poisoned"))
    }

    /// Atomically replaces the snapshot with a new table.
    ///
    /// Computations already holding the previous snapshot keep it; only
    /// subsequent `current()` calls observe the new rates.
    pub fn swap(&self, table: RateTable) {
        let table = Arc::new(table);
        info!(
            reference = %table.reference(),
            currencies = table.currencies().len(),
            "rate table swapped"
        );

        let mut current = self.table.write().expect("Rate table lock poisoned");
        *current = table;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
