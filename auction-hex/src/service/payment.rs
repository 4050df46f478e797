use tracing::{info, instrument};

use auction_types::{AppError, Bid, Clock, Payment, PaymentStore, next_business_day};

/// Generates the payment owed by the winner of an auction.
pub struct PaymentGenerationService<P: PaymentStore, C: Clock> {
    store: P,
    clock: C,
}

impl<P: PaymentStore, C: Clock> PaymentGenerationService<P, C> {
    /// Creates a new payment service with the given store and time source.
    pub fn new(store: P, clock: C) -> Self {
        Self { store, clock }
    }

    /// Returns a reference to the underlying payment store.
    pub fn store(&self) -> &P {
        &self.store
    }

    /// Builds and stores the payment for a winning bid.
    ///
    /// Amount and payer are copied from the bid. The due date is the next
    /// business day after today. Store failures propagate to the caller.
    #[instrument(skip(self, winning_bid), fields(auction_id = %winning_bid.auction_id()))]
    pub async fn generate_payment(&self, winning_bid: &Bid) -> Result<Payment, AppError> {
        let today = self.clock.now().date_naive();
        let payment = Payment::for_winning_bid(winning_bid, next_business_day(today));

        self.store.save(&payment).await?;

        info!(
            payment_id = %payment.id,
            payer = %payment.payer,
            amount = %payment.amount,
            due_date = %payment.due_date,
            "Payment generated"
        );
        Ok(payment)
    }
}
