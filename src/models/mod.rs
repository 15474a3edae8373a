pub mod hotel;
pub mod loyalty;
pub mod me;
pub mod payment;
pub mod reservation;
