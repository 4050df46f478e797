//! # Auction Hex
//!
//! Application service layer for the auction service.
//!
//! ## Architecture
//!
//! - `service/` - Application services (orchestrate domain operations)
//!   and the sweep that chains finalization into payment generation
//!
//! Services are generic over the port traits from `auction-types`, allowing
//! different store, notifier and clock implementations to be injected.

pub mod service;


pub use service::{
    AuctionFinalizationService, FinalizationOutcome, FinalizationReport, FinalizationStatus,
    NotificationStatus, PaymentGenerationService, SweepSummary, run_sweep,
};
