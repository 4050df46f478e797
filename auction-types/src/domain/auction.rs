//! Auction aggregate.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::bid::Bid;
use super::user::User;
use crate::error::DomainError;

/// Unique identifier for an Auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuctionId(Uuid);

impl AuctionId {
    /// Creates a new random AuctionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an AuctionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AuctionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AuctionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AuctionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// An item open for bidding until it is closed.
///
/// The auction owns its bids in insertion order. The winning bid is tracked
/// as a position into that sequence, so it is always one of the proposed
/// bids and never a detached copy.
///
/// Lifecycle: OPEN -> CLOSED, one way, via [`Auction::close`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auction {
    id: AuctionId,
    description: String,
    initial_value: Decimal,
    owner: User,
    opened_at: NaiveDate,
    bids: Vec<Bid>,
    winning: Option<usize>,
    closed: bool,
}

impl Auction {
    /// Opens a new auction with no bids.
    ///
    /// # Validation
    /// - Description cannot be empty
    /// - Initial value cannot be negative
    pub fn new(
        description: String,
        initial_value: Decimal,
        owner: User,
        opened_at: NaiveDate,
    ) -> Result<Self, DomainError> {
        if description.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Auction description cannot be empty".into(),
            ));
        }
        if initial_value < Decimal::ZERO {
            return Err(DomainError::NegativeAmount);
        }

        Ok(Self {
            id: AuctionId::new(),
            description,
            initial_value,
            owner,
            opened_at,
            bids: Vec::new(),
            winning: None,
            closed: false,
        })
    }

    /// Reconstructs an auction from stored parts.
    ///
    /// Bids are replayed in order, so the winner is derived rather than trusted.
    pub fn from_parts(
        id: AuctionId,
        description: String,
        initial_value: Decimal,
        owner: User,
        opened_at: NaiveDate,
        bids: Vec<Bid>,
        closed: bool,
    ) -> Result<Self, DomainError> {
        let mut auction = Self {
            id,
            description,
            initial_value,
            owner,
            opened_at,
            bids: Vec::with_capacity(bids.len()),
            winning: None,
            closed: false,
        };
        for bid in bids {
            auction.propose(bid)?;
        }
        auction.closed = closed;
        Ok(auction)
    }

    pub fn id(&self) -> AuctionId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn initial_value(&self) -> Decimal {
        self.initial_value
    }

    pub fn owner(&self) -> &User {
        &self.owner
    }

    pub fn opened_at(&self) -> NaiveDate {
        self.opened_at
    }

    /// All bids, in the order they were proposed.
    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }

    /// The first-seen bid with the highest amount, if any.
    pub fn winning_bid(&self) -> Option<&Bid> {
        self.winning.map(|idx| &self.bids[idx])
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Creates a bid bound to this auction.
    pub fn bid(&self, bidder: User, amount: Decimal) -> Result<Bid, DomainError> {
        Bid::new(self.id, bidder, amount)
    }

    /// Appends a bid, making it the winner if it beats the current highest.
    ///
    /// A bid equal to the current highest does not replace it.
    pub fn propose(&mut self, bid: Bid) -> Result<(), DomainError> {
        if self.closed {
            return Err(DomainError::AuctionClosed);
        }
        if bid.auction_id() != self.id {
            return Err(DomainError::BidAuctionMismatch);
        }

        let beats_winner = self
            .winning_bid()
            .is_none_or(|current| bid.amount() > current.amount());

        self.bids.push(bid);
        if beats_winner {
            self.winning = Some(self.bids.len() - 1);
        }
        Ok(())
    }

    /// Closes the auction. Calling it again has no further effect.
    pub fn close(&mut self) {
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn celular() -> Auction {
        Auction::new(
            "Celular".to_string(),
            Decimal::from(500),
            User::new("Fulano"),
            NaiveDate::from_ymd_opt(2023, 8, 1).unwrap(),
        )
        .unwrap()
    }

    fn propose(auction: &mut Auction, bidder: &str, amount: i64) {
        let bid = auction.bid(User::new(bidder), Decimal::from(amount)).unwrap();
        auction.propose(bid).unwrap();
    }

    #[test]
    fn test_auction_creation() {
        let auction = celular();
        assert_eq!(auction.description(), "Celular");
        assert_eq!(auction.initial_value(), Decimal::from(500));
        assert_eq!(auction.owner().name, "Fulano");
        assert!(auction.bids().is_empty());
        assert!(auction.winning_bid().is_none());
        assert!(!auction.is_closed());
    }

    #[test]
    fn test_empty_description_fails() {
        let result = Auction::new(
            "  ".to_string(),
            Decimal::from(500),
            User::new("Fulano"),
            NaiveDate::from_ymd_opt(2023, 8, 1).unwrap(),
        );
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn test_negative_initial_value_fails() {
        let result = Auction::new(
            "Celular".to_string(),
            Decimal::from(-10),
            User::new("Fulano"),
            NaiveDate::from_ymd_opt(2023, 8, 1).unwrap(),
        );
        assert!(matches!(result, Err(DomainError::NegativeAmount)));
    }

    #[test]
    fn test_highest_bid_wins() {
        let mut auction = celular();
        propose(&mut auction, "Beltrano", 600);
        propose(&mut auction, "Ciclano", 900);
        propose(&mut auction, "Fulano", 700);

        let winner = auction.winning_bid().unwrap();
        assert_eq!(winner.amount(), Decimal::from(900));
        assert_eq!(winner.bidder().name, "Ciclano");
        assert_eq!(auction.bids().len(), 3);
    }

    #[test]
    fn test_tie_keeps_first_bid() {
        let mut auction = celular();
        propose(&mut auction, "Beltrano", 900);
        propose(&mut auction, "Ciclano", 900);

        assert_eq!(auction.winning_bid().unwrap().bidder().name, "Beltrano");
    }

    #[test]
    fn test_bids_below_initial_value_are_accepted() {
        let mut auction = celular();
        propose(&mut auction, "Beltrano", 100);

        assert_eq!(
            auction.winning_bid().unwrap().amount(),
            Decimal::from(100)
        );
    }

    #[test]
    fn test_winning_bid_is_one_of_the_bids() {
        let mut auction = celular();
        propose(&mut auction, "Beltrano", 600);
        propose(&mut auction, "Ciclano", 900);

        let winner = auction.winning_bid().unwrap();
        assert!(std::ptr::eq(winner, &auction.bids()[1]));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut auction = celular();
        propose(&mut auction, "Ciclano", 900);

        auction.close();
        let winner = auction.winning_bid().cloned();
        auction.close();
        auction.close();

        assert!(auction.is_closed());
        assert_eq!(auction.winning_bid().cloned(), winner);
    }

    #[test]
    fn test_closed_auction_rejects_bids() {
        let mut auction = celular();
        auction.close();

        let bid = auction.bid(User::new("Ciclano"), Decimal::from(900)).unwrap();
        let result = auction.propose(bid);

        assert!(matches!(result, Err(DomainError::AuctionClosed)));
        assert!(auction.bids().is_empty());
    }

    #[test]
    fn test_bid_for_other_auction_rejected() {
        let mut auction = celular();
        let other = celular();
        let bid = other.bid(User::new("Ciclano"), Decimal::from(900)).unwrap();

        let result = auction.propose(bid);

        assert!(matches!(result, Err(DomainError::BidAuctionMismatch)));
        assert!(auction.winning_bid().is_none());
    }

    #[test]
    fn test_from_parts_replays_winner() {
        let original = {
            let mut auction = celular();
            propose(&mut auction, "Beltrano", 600);
            propose(&mut auction, "Ciclano", 900);
            auction.close();
            auction
        };

        let rebuilt = Auction::from_parts(
            original.id(),
            original.description().to_string(),
            original.initial_value(),
            original.owner().clone(),
            original.opened_at(),
            original.bids().to_vec(),
            original.is_closed(),
        )
        .unwrap();

        assert_eq!(rebuilt, original);
        assert_eq!(rebuilt.winning_bid().unwrap().amount(), Decimal::from(900));
    }
}
