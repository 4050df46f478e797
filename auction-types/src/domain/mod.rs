//! Domain models for the auction service.

pub mod auction;
pub mod bid;
pub mod payment;
pub mod user;

pub use auction::{Auction, AuctionId};
pub use bid::Bid;
pub use payment::{Payment, PaymentId, next_business_day};
pub use user::User;
