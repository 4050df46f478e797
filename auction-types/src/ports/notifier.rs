//! Winner notification port.
//!
//! Implementations can send email, push to a queue, or just log.

use crate::domain::Bid;
use crate::error::NotifyError;

/// Port trait for telling a bidder they won.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync + 'static {
    /// Notifies the bidder of `bid` that it won its auction.
    async fn notify_winner(&self, bid: &Bid) -> Result<(), NotifyError>;
}
