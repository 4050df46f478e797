//! Auction Application Services
//!
//! Orchestrate domain operations through the port traits.
//! Contain NO infrastructure logic - pure business orchestration.

mod finalization;
mod payment;
mod report;
mod sweep;

pub use finalization::AuctionFinalizationService;
pub use payment::PaymentGenerationService;
pub use report::{FinalizationOutcome, FinalizationReport, FinalizationStatus, NotificationStatus};
pub use sweep::{SweepSummary, run_sweep};
