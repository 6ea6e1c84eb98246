//! Clock port - supplies the current calendar date.
//!
//! Date validation compares at day granularity; routing "today" through a
//! port keeps the validator and controller deterministic under test.

use chrono::NaiveDate;

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    /// The current date, at day granularity.
    fn today(&self) -> NaiveDate;
}
