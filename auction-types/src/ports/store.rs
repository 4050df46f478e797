//! Persistence ports.
//!
//! Adapters (in-memory, database) implement these traits.

use crate::domain::{Auction, AuctionId, Payment};
use crate::error::RepoError;

/// Persistence port for auctions.
#[async_trait::async_trait]
pub trait AuctionStore: Send + Sync + 'static {
    /// Returns open auctions whose bidding period is over.
    ///
    /// The expiry rule belongs to the store. Results come back in a stable
    /// order that callers process as-is.
    async fn fetch_expired_open_auctions(&self) -> Result<Vec<Auction>, RepoError>;

    /// Inserts or replaces an auction.
    async fn save(&self, auction: &Auction) -> Result<(), RepoError>;

    /// Gets an auction by ID.
    async fn get(&self, id: AuctionId) -> Result<Option<Auction>, RepoError>;
}

/// Persistence port for payments.
#[async_trait::async_trait]
pub trait PaymentStore: Send + Sync + 'static {
    /// Stores a new payment.
    async fn save(&self, payment: &Payment) -> Result<(), RepoError>;

    /// Finds the payment generated for an auction, if any.
    async fn find_by_auction(&self, auction_id: AuctionId) -> Result<Option<Payment>, RepoError>;
}
