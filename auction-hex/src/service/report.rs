//! Per-auction results of a finalization run.

use auction_types::{AuctionId, Bid, NotifyError, RepoError};

/// What happened to the winner notification of a closed auction.
#[derive(Debug)]
pub enum NotificationStatus {
    Sent,
    /// The auction closed without bids.
    NoWinner,
    /// Delivery failed. The auction stays closed.
    Failed(NotifyError),
}

/// Result of finalizing a single auction.
#[derive(Debug)]
pub enum FinalizationStatus {
    /// Closed and persisted.
    Closed {
        winning_bid: Option<Bid>,
        notification: NotificationStatus,
    },
    /// The store rejected the save, so nobody was notified.
    SaveFailed(RepoError),
}

#[derive(Debug)]
pub struct FinalizationOutcome {
    pub auction_id: AuctionId,
    pub status: FinalizationStatus,
}

impl FinalizationOutcome {
    pub fn is_closed(&self) -> bool {
        matches!(self.status, FinalizationStatus::Closed { .. })
    }
}

/// Outcomes of one finalization run, in processing order.
#[derive(Debug, Default)]
pub struct FinalizationReport {
    pub outcomes: Vec<FinalizationOutcome>,
}

impl FinalizationReport {
    /// Number of auctions that were closed and persisted.
    pub fn closed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_closed()).count()
    }

    /// Outcomes whose save failed.
    pub fn save_failures(&self) -> impl Iterator<Item = (AuctionId, &RepoError)> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            FinalizationStatus::SaveFailed(err) => Some((o.auction_id, err)),
            FinalizationStatus::Closed { .. } => None,
        })
    }

    /// Winning bids of every auction that was closed and persisted.
    pub fn winning_bids(&self) -> impl Iterator<Item = &Bid> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            FinalizationStatus::Closed { winning_bid, .. } => winning_bid.as_ref(),
            FinalizationStatus::SaveFailed(_) => None,
        })
    }

    /// Number of closed auctions whose winner could not be notified.
    pub fn notification_failures(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| {
                matches!(
                    o.status,
                    FinalizationStatus::Closed {
                        notification: NotificationStatus::Failed(_),
                        ..
                    }
                )
            })
            .count()
    }
}
