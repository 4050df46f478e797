//! Time source port.

use chrono::{DateTime, Utc};

/// Port trait for reading the current time.
///
/// Injected wherever "today" matters so tests can pin the date.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}
