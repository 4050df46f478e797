//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod clock;
mod notifier;
mod store;

pub use clock::Clock;
pub use notifier::Notifier;
pub use store::{AuctionStore, PaymentStore};
