//! # Auction Sweeper
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the store, notifier and clock adapters
//! - Create the finalization and payment services
//! - Run finalization sweeps and bill every new winner

mod config;
mod seed;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auction_hex::{AuctionFinalizationService, PaymentGenerationService, run_sweep};
use auction_repo::{InMemoryAuctionStore, InMemoryPaymentStore, SystemClock, TracingNotifier};
use auction_types::{AuctionStore, Clock, Notifier, PaymentStore};

use config::{Config, LogFormat};

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,auction_app=debug,auction_hex=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

/// One finalization run followed by payment generation for each winner.
async fn sweep<S, N, P, C>(
    finalizer: &AuctionFinalizationService<S, N>,
    payments: &PaymentGenerationService<P, C>,
) -> anyhow::Result<()>
where
    S: AuctionStore,
    N: Notifier,
    P: PaymentStore,
    C: Clock,
{
    let summary = run_sweep(finalizer, payments).await?;
    if !summary.unbilled.is_empty() {
        let ids: Vec<String> = summary
            .unbilled
            .iter()
            .map(|(auction_id, _)| auction_id.to_string())
            .collect();
        error!(unbilled = ?ids, "Closed auctions need manual billing");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;
    init_tracing(config.log_format);

    info!(
        expiry_days = config.expiry_days,
        interval_secs = config.sweep_interval.as_secs(),
        "Starting auction sweeper"
    );

    let store = InMemoryAuctionStore::new(config.expiry_days);
    if config.seed_demo_auctions {
        let today = SystemClock.now().date_naive();
        let seeded = seed::seed_demo_auctions(&store, today, config.expiry_days).await?;
        info!("Seeded {} demo auctions", seeded);
    }

    let finalizer = AuctionFinalizationService::new(store, TracingNotifier);
    let payments = PaymentGenerationService::new(InMemoryPaymentStore::new(), SystemClock);

    if config.sweep_once {
        return sweep(&finalizer, &payments).await;
    }

    let mut interval = tokio::time::interval(config.sweep_interval);
    loop {
        tokio::select! {
            _ = interval.tick() => {
                if let Err(e) = sweep(&finalizer, &payments).await {
                    error!("Sweep failed: {}", e);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down auction sweeper");
                break;
            }
        }
    }

    Ok(())
}
