pub mod booking;
pub mod location;
pub mod payment;
pub mod quote;
pub mod waste;
