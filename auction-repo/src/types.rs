//! Storage records and their mapping to domain types.
//!
//! Amounts are kept as exact decimal text and identities as raw UUIDs, so the
//! domain types never leak into the storage layout.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use auction_types::{Auction, AuctionId, Bid, Payment, PaymentId, RepoError, User};

// ─────────────────────────────────────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────────────────────────────────────

/// Stored bid, nested in its auction record.
#[derive(Debug, Clone)]
pub struct BidRecord {
    pub bidder: String,
    pub amount: String,
}

/// Stored auction.
#[derive(Debug, Clone)]
pub struct AuctionRecord {
    pub id: Uuid,
    pub description: String,
    pub initial_value: String,
    pub owner: String,
    pub opened_at: NaiveDate,
    pub bids: Vec<BidRecord>,
    pub closed: bool,
}

/// Stored payment.
#[derive(Debug, Clone)]
pub struct PaymentRecord {
    pub id: Uuid,
    pub auction_id: Uuid,
    pub payer: String,
    pub amount: String,
    pub due_date: NaiveDate,
    pub paid: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing helpers
// ─────────────────────────────────────────────────────────────────────────────

pub fn parse_amount(s: &str) -> Result<Decimal, RepoError> {
    Decimal::from_str(s).map_err(|e| RepoError::Database(format!("Invalid amount {}: {}", s, e)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Domain conversion
// ─────────────────────────────────────────────────────────────────────────────

impl AuctionRecord {
    pub fn from_domain(auction: &Auction) -> Self {
        Self {
            id: *auction.id().as_uuid(),
            description: auction.description().to_string(),
            initial_value: auction.initial_value().to_string(),
            owner: auction.owner().name.clone(),
            opened_at: auction.opened_at(),
            bids: auction
                .bids()
                .iter()
                .map(|bid| BidRecord {
                    bidder: bid.bidder().name.clone(),
                    amount: bid.amount().to_string(),
                })
                .collect(),
            closed: auction.is_closed(),
        }
    }

    /// Convert stored record to domain Auction.
    pub fn into_domain(self) -> Result<Auction, RepoError> {
        let id = AuctionId::from_uuid(self.id);
        let initial_value = parse_amount(&self.initial_value)?;

        let bids = self
            .bids
            .into_iter()
            .map(|bid| {
                let amount = parse_amount(&bid.amount)?;
                Bid::new(id, User::new(bid.bidder), amount).map_err(RepoError::Domain)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Auction::from_parts(
            id,
            self.description,
            initial_value,
            User::new(self.owner),
            self.opened_at,
            bids,
            self.closed,
        )
        .map_err(RepoError::Domain)
    }
}

impl PaymentRecord {
    pub fn from_domain(payment: &Payment) -> Self {
        Self {
            id: *payment.id.as_uuid(),
            auction_id: *payment.auction_id.as_uuid(),
            payer: payment.payer.name.clone(),
            amount: payment.amount.to_string(),
            due_date: payment.due_date,
            paid: payment.paid,
        }
    }

    /// Convert stored record to domain Payment.
    pub fn into_domain(self) -> Result<Payment, RepoError> {
        Ok(Payment::from_parts(
            PaymentId::from_uuid(self.id),
            self.due_date,
            parse_amount(&self.amount)?,
            User::new(self.payer),
            self.paid,
            AuctionId::from_uuid(self.auction_id),
        ))
    }
}
