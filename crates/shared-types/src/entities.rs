//! # Core Domain Primitives
//!
//! Identifiers and value types shared by the service registry and the
//! subscription ledger.
//!
//! ## Type Decisions
//!
//! - `TokenAmount = u128` - Sufficient for 340 undecillion base units. U256
//!   would require an extra primitives dependency and wider arithmetic for
//!   no practical gain at this scale.
//! - `Timestamp = u64` - Milliseconds since the Unix epoch. Subscription
//!   durations are whole days, so millisecond precision is already generous.

use serde::{Deserialize, Serialize};

/// A 20-byte principal identity.
///
/// An opaque, already-authenticated caller. All mutating operations take the
/// caller's principal explicitly; it is never read from payload data.
pub type Principal = [u8; 20];

/// Unique identifier of a listed service. Sequential from 0, never reused.
pub type ServiceId = u64;

/// Unique identifier of a subscription. Sequential from 0, never reused.
pub type SubscriptionId = u64;

/// Token amount in base units.
pub type TokenAmount = u128;

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// Milliseconds in one day.
pub const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Converts a duration in whole days to milliseconds.
///
/// Saturates instead of wrapping; a saturated duration is far beyond any
/// representable wall-clock time and behaves as "never expires".
pub fn days_to_millis(days: u32) -> u64 {
    (days as u64).saturating_mul(MILLIS_PER_DAY)
}

/// Renders the first 4 bytes of a principal as lowercase hex.
///
/// Log-friendly abbreviation; full principals only appear in test assertions.
pub fn principal_prefix(principal: &Principal) -> String {
    principal[..4].iter().map(|b| format!("{b:02x}")).collect()
}
