//! # Inbound Port - LedgerApi
//!
//! Primary driving port exposing the subscription ledger to callers (an RPC
//! layer, a CLI, the test suite). Every mutating method takes the caller's
//! authenticated principal explicitly; validating that identity is the
//! transport layer's job.

use crate::domain::{LedgerError, Subscription, SubscriptionState};
use shared_types::{Principal, ServiceId, SubscriptionId};

/// Primary API for the subscription ledger.
///
/// Mutating methods take `&mut self`: callers that need concurrency wrap
/// the service in a single exclusive lock (see `SharedLedgerService`), which
/// keeps the resolve → quote → transfer → persist sequence of `subscribe`
/// indivisible.
pub trait LedgerApi: Send + Sync {
    /// Lists a new service owned by the calling principal.
    ///
    /// # Errors
    /// - `EmptyName`: the name is empty or whitespace-only
    fn list_service(&mut self, caller: Principal, name: &str) -> Result<ServiceId, LedgerError>;

    /// Subscribes the caller to a service, charging them up front.
    ///
    /// Payment and record creation are atomic as a unit: if the transfer
    /// fails, no subscription record is created and no partial state is
    /// observable. Each successful call creates an independent record, even
    /// for a subscriber/service pair that already has one.
    ///
    /// # Errors
    /// - `ServiceNotFound`: the service id was never issued
    /// - `InvalidDuration`: `duration_days` is zero
    /// - `Payment(InsufficientFunds)`: the caller's balance cannot cover the charge
    /// - `Payment(NotAuthorized)`: the caller has not delegated enough transfer rights
    fn subscribe(
        &mut self,
        caller: Principal,
        service_id: ServiceId,
        duration_days: u32,
    ) -> Result<SubscriptionId, LedgerError>;

    /// Cancels one of the caller's subscriptions. Idempotent; no refund.
    ///
    /// # Errors
    /// - `SubscriptionNotFound`: the id was never issued
    /// - `NotSubscriber`: the caller is not the paying principal
    fn cancel_subscription(
        &mut self,
        caller: Principal,
        id: SubscriptionId,
    ) -> Result<(), LedgerError>;

    /// True iff the subscription exists, is not canceled, and the current
    /// instant is within its window. Never fails: unknown ids answer
    /// `false`.
    fn verify_access(&self, id: SubscriptionId) -> bool;

    /// Resolves the provider that owns a service.
    ///
    /// # Errors
    /// - `ServiceNotFound`: the id was never issued
    fn owner_of(&self, service_id: ServiceId) -> Result<Principal, LedgerError>;

    /// Gets a subscription record by id.
    fn subscription(&self, id: SubscriptionId) -> Option<Subscription>;

    /// Derives the reported state of a subscription at the current instant.
    fn subscription_state(&self, id: SubscriptionId) -> Option<SubscriptionState>;

    /// Ids of all subscriptions ever created by `subscriber`, oldest first.
    fn subscriptions_of(&self, subscriber: Principal) -> Vec<SubscriptionId>;

    /// Number of services ever listed.
    fn service_count(&self) -> usize;

    /// Number of subscriptions ever created.
    fn subscription_count(&self) -> usize;
}
