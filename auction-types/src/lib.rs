//! # Auction Types
//!
//! Domain types and port traits for the auction service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (User, Bid, Auction, Payment)
//! - `ports/` - Trait definitions that adapters must implement
//! - `error/` - Domain and application error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Auction, AuctionId, Bid, Payment, PaymentId, User, next_business_day};
pub use error::{AppError, DomainError, NotifyError, RepoError};
pub use ports::{AuctionStore, Clock, Notifier, PaymentStore};
