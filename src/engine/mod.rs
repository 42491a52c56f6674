pub mod payment;
pub mod pricing;
pub mod shipping;
