//! One sweep: finalize expired auctions, then bill every new winner.

use tracing::{error, info, instrument, warn};

use auction_types::{AppError, AuctionId, AuctionStore, Clock, Notifier, Payment, PaymentStore};

use super::finalization::AuctionFinalizationService;
use super::payment::PaymentGenerationService;
use super::report::FinalizationReport;

/// Result of a sweep.
///
/// `unbilled` lists closed auctions whose winner has no payment. They are
/// already closed, so the next sweep will not pick them up again.
#[derive(Debug, Default)]
pub struct SweepSummary {
    pub report: FinalizationReport,
    pub payments: Vec<Payment>,
    pub unbilled: Vec<(AuctionId, AppError)>,
}

impl SweepSummary {
    pub fn billed_count(&self) -> usize {
        self.payments.len()
    }

    /// True when every persisted auction was closed and every winner billed.
    pub fn is_clean(&self) -> bool {
        self.unbilled.is_empty() && self.report.save_failures().next().is_none()
    }
}

/// Runs one finalization pass and generates a payment for each winner.
///
/// A failed payment does not stop the sweep; it is logged and returned in
/// [`SweepSummary::unbilled`]. Only a failed fetch aborts.
#[instrument(skip_all)]
pub async fn run_sweep<S, N, P, C>(
    finalizer: &AuctionFinalizationService<S, N>,
    payments: &PaymentGenerationService<P, C>,
) -> Result<SweepSummary, AppError>
where
    S: AuctionStore,
    N: Notifier,
    P: PaymentStore,
    C: Clock,
{
    let report = finalizer.finalize_expired_auctions().await?;

    for (auction_id, err) in report.save_failures() {
        warn!(%auction_id, "Auction left open after failed save: {}", err);
    }

    let mut billed = Vec::new();
    let mut unbilled = Vec::new();
    for bid in report.winning_bids() {
        match payments.generate_payment(bid).await {
            Ok(payment) => billed.push(payment),
            Err(e) => {
                error!(auction_id = %bid.auction_id(), "Winner left unbilled: {}", e);
                unbilled.push((bid.auction_id(), e));
            }
        }
    }

    info!(
        closed = report.closed_count(),
        billed = billed.len(),
        unbilled = unbilled.len(),
        notification_failures = report.notification_failures(),
        "Sweep finished"
    );

    Ok(SweepSummary {
        report,
        payments: billed,
        unbilled,
    })
}
