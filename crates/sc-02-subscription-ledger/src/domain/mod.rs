//! Domain layer for the Subscription Ledger subsystem.

pub mod book;
pub mod entities;
pub mod errors;
pub mod pricing;

pub use book::*;
pub use entities::*;
pub use errors::*;
pub use pricing::*;
