//! Adapters for the Subscription Ledger subsystem.
//!
//! - `memory_token`: in-memory token accounting with ERC-20 style
//!   approve/transfer-from semantics, plus the `TokenSpender` handle that
//!   plugs it into the `PaymentPort` port
//! - `shared`: the single-writer lock wrapper for multi-threaded embedding

pub mod memory_token;
pub mod shared;

pub use memory_token::*;
pub use shared::*;
