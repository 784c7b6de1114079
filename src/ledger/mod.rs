//! The ledger store and its shared, lock-guarded handle.
//!
//! [`LedgerStore`] is the single-threaded owner of all employee records.
//! [`SharedLedger`] wraps it for concurrent callers.

mod shared;
mod store;

pub use shared::{CloseError, SharedLedger};
pub use store::LedgerStore;
