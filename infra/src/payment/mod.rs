//! Payment provider integrations

pub mod cashfree;

pub use cashfree::CashfreeGateway;
