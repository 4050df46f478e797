use tracing::{error, info, instrument, warn};

use auction_types::{AppError, Auction, AuctionStore, Notifier};

use super::report::{
    FinalizationOutcome, FinalizationReport, FinalizationStatus, NotificationStatus,
};

/// Closes expired auctions and notifies their winners.
///
/// Generic over `S: AuctionStore` and `N: Notifier` - adapters are injected at
/// compile time, so tests can swap in recording fakes.
pub struct AuctionFinalizationService<S: AuctionStore, N: Notifier> {
    store: S,
    notifier: N,
}

impl<S: AuctionStore, N: Notifier> AuctionFinalizationService<S, N> {
    /// Creates a new finalization service.
    pub fn new(store: S, notifier: N) -> Self {
        Self { store, notifier }
    }

    /// Returns a reference to the underlying auction store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a reference to the underlying notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Closes every expired open auction, one at a time, in store order.
    ///
    /// A failed save skips that auction's notification and moves on to the
    /// next one. Notification is best-effort: a failure is reported but the
    /// auction stays closed. Only a failure to fetch the batch is an error.
    #[instrument(skip(self))]
    pub async fn finalize_expired_auctions(&self) -> Result<FinalizationReport, AppError> {
        let auctions = self.store.fetch_expired_open_auctions().await?;
        info!("Finalizing {} expired auctions", auctions.len());

        let mut report = FinalizationReport::default();
        for auction in auctions {
            report.outcomes.push(self.finalize(auction).await);
        }

        Ok(report)
    }

    async fn finalize(&self, mut auction: Auction) -> FinalizationOutcome {
        let auction_id = auction.id();
        auction.close();

        if let Err(e) = self.store.save(&auction).await {
            error!(%auction_id, "Failed to save closed auction: {}", e);
            return FinalizationOutcome {
                auction_id,
                status: FinalizationStatus::SaveFailed(e),
            };
        }

        let winning_bid = auction.winning_bid().cloned();
        let notification = match &winning_bid {
            None => {
                info!(%auction_id, "Auction closed without bids");
                NotificationStatus::NoWinner
            }
            Some(bid) => match self.notifier.notify_winner(bid).await {
                Ok(()) => {
                    info!(
                        %auction_id,
                        winner = %bid.bidder(),
                        amount = %bid.amount(),
                        "Auction closed, winner notified"
                    );
                    NotificationStatus::Sent
                }
                Err(e) => {
                    warn!(%auction_id, "Auction closed but winner notification failed: {}", e);
                    NotificationStatus::Failed(e)
                }
            },
        };

        FinalizationOutcome {
            auction_id,
            status: FinalizationStatus::Closed {
                winning_bid,
                notification,
            },
        }
    }
}
