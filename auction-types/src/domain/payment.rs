//! Payment domain model.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::auction::AuctionId;
use super::bid::Bid;
use super::user::User;

/// Unique identifier for a Payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(Uuid);

impl PaymentId {
    /// Creates a new random PaymentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a PaymentId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PaymentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Due date for a payment generated on `today`: the next day, pushed to
/// Monday when it falls on a weekend.
pub fn next_business_day(today: NaiveDate) -> NaiveDate {
    let candidate = today + Days::new(1);
    match candidate.weekday() {
        Weekday::Sat => candidate + Days::new(2),
        Weekday::Sun => candidate + Days::new(1),
        _ => candidate,
    }
}

/// A billing record for the winner of a closed auction.
///
/// Payments are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub id: PaymentId,
    /// Always a business day
    pub due_date: NaiveDate,
    /// Copied from the winning bid
    pub amount: Decimal,
    /// The winning bidder
    pub payer: User,
    pub paid: bool,
    /// The auction this payment settles
    pub auction_id: AuctionId,
}

impl Payment {
    /// Creates an unpaid payment for a winning bid.
    pub fn for_winning_bid(bid: &Bid, due_date: NaiveDate) -> Self {
        Self {
            id: PaymentId::new(),
            due_date,
            amount: bid.amount(),
            payer: bid.bidder().clone(),
            paid: false,
            auction_id: bid.auction_id(),
        }
    }

    /// Reconstructs a payment from stored fields.
    pub fn from_parts(
        id: PaymentId,
        due_date: NaiveDate,
        amount: Decimal,
        payer: User,
        paid: bool,
        auction_id: AuctionId,
    ) -> Self {
        Self {
            id,
            due_date,
            amount,
            payer,
            paid,
            auction_id,
        }
    }
}
