pub mod error;
pub mod loyalty;
pub mod payment;
pub mod reservation;
mod support;

pub use error::ClientError;
pub use loyalty::LoyaltyClient;
pub use payment::PaymentClient;
pub use reservation::ReservationClient;
