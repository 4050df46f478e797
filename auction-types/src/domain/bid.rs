//! Bid value object.

use rust_decimal::Decimal;

use super::auction::AuctionId;
use super::user::User;
use crate::error::DomainError;

/// An offer by a user for a specific amount against an auction.
///
/// Bids are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bid {
    auction_id: AuctionId,
    bidder: User,
    amount: Decimal,
}

impl Bid {
    /// Creates a new bid.
    ///
    /// # Validation
    /// - Amount cannot be negative
    pub fn new(auction_id: AuctionId, bidder: User, amount: Decimal) -> Result<Self, DomainError> {
        if amount < Decimal::ZERO {
            return Err(DomainError::NegativeAmount);
        }

        Ok(Self {
            auction_id,
            bidder,
            amount,
        })
    }

    /// The auction this bid was placed on.
    pub fn auction_id(&self) -> AuctionId {
        self.auction_id
    }

    pub fn bidder(&self) -> &User {
        &self.bidder
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bid_creation() {
        let auction_id = AuctionId::new();
        let bid = Bid::new(auction_id, User::new("Ciclano"), Decimal::from(900)).unwrap();

        assert_eq!(bid.auction_id(), auction_id);
        assert_eq!(bid.bidder().name, "Ciclano");
        assert_eq!(bid.amount(), Decimal::from(900));
    }

    #[test]
    fn test_zero_bid_is_allowed() {
        let result = Bid::new(AuctionId::new(), User::new("Ciclano"), Decimal::ZERO);
        assert!(result.is_ok());
    }

    #[test]
    fn test_negative_bid_fails() {
        let result = Bid::new(AuctionId::new(), User::new("Ciclano"), Decimal::from(-1));
        assert!(matches!(result, Err(DomainError::NegativeAmount)));
    }
}
