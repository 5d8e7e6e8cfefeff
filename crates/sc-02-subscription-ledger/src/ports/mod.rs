//! Ports for the Subscription Ledger subsystem.
//!
//! - `inbound`: the driving API exposed to callers (`LedgerApi`)
//! - `outbound`: capabilities the ledger consumes (`PaymentPort`, `Clock`)

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
