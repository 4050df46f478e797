//! # Auction Repository
//!
//! Concrete adapters for the auction service ports:
//! - `memory` - `AuctionStore` and `PaymentStore` backed by concurrent maps
//! - `notifier` - `Notifier` that emits winner notifications as log events
//! - `clock` - `Clock` reading the system time

pub mod clock;
pub mod memory;
pub mod notifier;

mod types;


pub use clock::SystemClock;
pub use memory::{DEFAULT_EXPIRY_DAYS, InMemoryAuctionStore, InMemoryPaymentStore};
pub use notifier::TracingNotifier;
