//! # Pricing Policies
//!
//! How a charge is derived from a subscription request is an explicit,
//! injectable policy rather than a hidden constant. The composed service
//! takes a `Box<dyn PricingPolicy>` at construction and never changes it at
//! runtime.

use shared_types::{ServiceId, TokenAmount};

/// Computes the charge for a subscription request.
///
/// Implementations must be pure with respect to ledger state: the quote may
/// depend only on the service id and the requested duration, so that a
/// failed payment leaves nothing to roll back in the policy.
pub trait PricingPolicy: Send + Sync {
    /// The token amount owed for subscribing to `service_id` for
    /// `duration_days` days.
    fn quote(&self, service_id: ServiceId, duration_days: u32) -> TokenAmount;
}

/// Flat per-day rate, identical for every service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PerDayRate {
    rate_per_day: TokenAmount,
}

impl PerDayRate {
    /// Creates a policy charging `rate_per_day` base units per day.
    pub fn new(rate_per_day: TokenAmount) -> Self {
        Self { rate_per_day }
    }
}

impl Default for PerDayRate {
    /// One base unit per day.
    fn default() -> Self {
        Self { rate_per_day: 1 }
    }
}

impl PricingPolicy for PerDayRate {
    fn quote(&self, _service_id: ServiceId, duration_days: u32) -> TokenAmount {
        self.rate_per_day.saturating_mul(duration_days as TokenAmount)
    }
}

/// Flat per-subscription charge, regardless of duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlatRate {
    amount: TokenAmount,
}

impl FlatRate {
    /// Creates a policy charging `amount` base units per subscription.
    pub fn new(amount: TokenAmount) -> Self {
        Self { amount }
    }
}

impl PricingPolicy for FlatRate {
    fn quote(&self, _service_id: ServiceId, _duration_days: u32) -> TokenAmount {
        self.amount
    }
}
