//! In-memory store adapters.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Days;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;
use uuid::Uuid;

use auction_types::{
    Auction, AuctionId, AuctionStore, Clock, Payment, PaymentStore, RepoError,
};

use crate::clock::SystemClock;
use crate::types::{AuctionRecord, PaymentRecord};

/// How long an auction stays open before it counts as expired.
pub const DEFAULT_EXPIRY_DAYS: u64 = 7;

// ─────────────────────────────────────────────────────────────────────────────
// Auction store
// ─────────────────────────────────────────────────────────────────────────────

/// Auction store kept in a concurrent map.
///
/// An auction is expired when it is still open and was opened more than
/// `expire_after` days before the clock's current date.
pub struct InMemoryAuctionStore<C: Clock = SystemClock> {
    /// Rows keyed by auction id, tagged with their insertion sequence.
    rows: DashMap<Uuid, (u64, AuctionRecord)>,
    next_seq: AtomicU64,
    expire_after: Days,
    clock: C,
}

impl InMemoryAuctionStore<SystemClock> {
    /// Creates an empty store that reads the system time.
    pub fn new(expire_after_days: u64) -> Self {
        Self::with_clock(expire_after_days, SystemClock)
    }
}

impl<C: Clock> InMemoryAuctionStore<C> {
    /// Creates an empty store with a custom time source.
    pub fn with_clock(expire_after_days: u64, clock: C) -> Self {
        Self {
            rows: DashMap::new(),
            next_seq: AtomicU64::new(0),
            expire_after: Days::new(expire_after_days),
            clock,
        }
    }

    /// Number of stored auctions.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl<C: Clock> AuctionStore for InMemoryAuctionStore<C> {
    async fn fetch_expired_open_auctions(&self) -> Result<Vec<Auction>, RepoError> {
        let today = self.clock.now().date_naive();
        let cutoff = today
            .checked_sub_days(self.expire_after)
            .ok_or_else(|| RepoError::Database("Expiry cutoff out of range".into()))?;

        let mut expired: Vec<(u64, AuctionRecord)> = self
            .rows
            .iter()
            .filter(|row| {
                let (_, record) = row.value();
                !record.closed && record.opened_at < cutoff
            })
            .map(|row| row.value().clone())
            .collect();
        expired.sort_by_key(|(seq, record)| (record.opened_at, *seq));

        debug!(%cutoff, count = expired.len(), "Fetched expired auctions");

        expired
            .into_iter()
            .map(|(_, record)| record.into_domain())
            .collect()
    }

    async fn save(&self, auction: &Auction) -> Result<(), RepoError> {
        let record = AuctionRecord::from_domain(auction);

        match self.rows.entry(record.id) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().1 = record;
            }
            Entry::Vacant(entry) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                entry.insert((seq, record));
            }
        }
        Ok(())
    }

    async fn get(&self, id: AuctionId) -> Result<Option<Auction>, RepoError> {
        self.rows
            .get(id.as_uuid())
            .map(|row| row.value().1.clone())
            .map(AuctionRecord::into_domain)
            .transpose()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment store
// ─────────────────────────────────────────────────────────────────────────────

/// Payment store kept in a concurrent map, one payment per auction.
#[derive(Default)]
pub struct InMemoryPaymentStore {
    rows: DashMap<Uuid, PaymentRecord>,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored payments.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn save(&self, payment: &Payment) -> Result<(), RepoError> {
        match self.rows.entry(*payment.auction_id.as_uuid()) {
            Entry::Occupied(_) => Err(RepoError::Conflict(format!(
                "Payment already exists for auction {}",
                payment.auction_id
            ))),
            Entry::Vacant(entry) => {
                entry.insert(PaymentRecord::from_domain(payment));
                Ok(())
            }
        }
    }

    async fn find_by_auction(&self, auction_id: AuctionId) -> Result<Option<Payment>, RepoError> {
        self.rows
            .get(auction_id.as_uuid())
            .map(|row| row.value().clone())
            .map(PaymentRecord::into_domain)
            .transpose()
    }
}
