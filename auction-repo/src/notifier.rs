//! Log-backed winner notifier.

use async_trait::async_trait;
use tracing::{info, instrument};

use auction_types::{Bid, Notifier, NotifyError};

/// Notifier that records winner notifications as structured log events.
///
/// Stands in for a mail or messaging integration.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    #[instrument(skip(self, bid), fields(auction_id = %bid.auction_id()))]
    async fn notify_winner(&self, bid: &Bid) -> Result<(), NotifyError> {
        info!(
            winner = %bid.bidder(),
            amount = %bid.amount(),
            "Congratulations, you won the auction"
        );
        Ok(())
    }
}
