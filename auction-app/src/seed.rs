//! Sample auctions for local runs.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use auction_types::{Auction, AuctionStore, DomainError, User};

/// Builds an auction opened `age_days` before `today` with the given bids.
fn sample(
    description: &str,
    initial_value: i64,
    owner: &str,
    today: NaiveDate,
    age_days: u64,
    bids: &[(&str, i64)],
) -> Result<Auction, DomainError> {
    let opened_at = today.checked_sub_days(Days::new(age_days)).ok_or_else(|| {
        DomainError::ValidationError(format!(
            "Opening date {} days before {} is out of range",
            age_days, today
        ))
    })?;
    let mut auction = Auction::new(
        description.to_string(),
        Decimal::from(initial_value),
        User::new(owner),
        opened_at,
    )?;
    for (bidder, amount) in bids {
        let bid = auction.bid(User::new(*bidder), Decimal::from(*amount))?;
        auction.propose(bid)?;
    }
    Ok(auction)
}

/// Seeds the store with two expired auctions and one still running.
pub async fn seed_demo_auctions<S: AuctionStore>(
    store: &S,
    today: NaiveDate,
    expiry_days: u64,
) -> anyhow::Result<usize> {
    let auctions = [
        sample(
            "Celular",
            500,
            "Fulano",
            today,
            expiry_days.saturating_add(3),
            &[("Beltrano", 600), ("Ciclano", 900)],
        )?,
        sample("Geladeira", 1200, "Beltrano", today, expiry_days.saturating_add(1), &[])?,
        sample("Notebook", 2500, "Ciclano", today, 1, &[("Fulano", 2600)])?,
    ];

    for auction in &auctions {
        store.save(auction).await?;
    }
    Ok(auctions.len())
}

#[cfg(test)]
mod tests {
    use auction_repo::InMemoryAuctionStore;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 8, 25).unwrap()
    }

    #[tokio::test]
    async fn test_seeds_three_auctions() {
        let store = InMemoryAuctionStore::new(7);

        let seeded = seed_demo_auctions(&store, today(), 7).await.unwrap();

        assert_eq!(seeded, 3);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_sample_opening_date() {
        let auction = sample("Celular", 500, "Fulano", today(), 10, &[("Ciclano", 900)]).unwrap();

        assert_eq!(
            auction.opened_at(),
            NaiveDate::from_ymd_opt(2023, 8, 15).unwrap()
        );
        assert_eq!(auction.winning_bid().unwrap().amount(), Decimal::from(900));
    }

    #[tokio::test]
    async fn test_huge_expiry_is_rejected_without_seeding() {
        let store = InMemoryAuctionStore::new(7);

        let result = seed_demo_auctions(&store, today(), u64::MAX).await;

        assert!(result.is_err());
        assert!(store.is_empty());
    }
}
