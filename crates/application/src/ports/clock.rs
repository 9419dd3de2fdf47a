//! Clock port for time-related operations

use chrono::{DateTime, NaiveDate, Utc};

/// Port for getting the current time.
///
/// Backups stamp their documents and file names from this clock, so tests
/// can pin both with a fixed implementation.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}
