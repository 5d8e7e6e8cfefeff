//! # Shared Ledger Service
//!
//! Single-writer wrapper for multi-threaded embedding. Mutations take the
//! write lock, so `list_service`, `subscribe`, and `cancel_subscription`
//! serialize into one global total order and the resolve → quote →
//! transfer → persist sequence inside `subscribe` is indivisible. Reads
//! take the read lock and may run concurrently with each other.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{LedgerError, Subscription, SubscriptionState};
use crate::ports::inbound::LedgerApi;
use crate::ports::outbound::{Clock, PaymentPort};
use crate::service::LedgerService;
use shared_types::{Principal, ServiceId, SubscriptionId};

/// A cloneable, thread-safe handle to one exclusively-owned ledger.
///
/// Created at service start, dropped at service stop; every clone points at
/// the same ledger instance.
pub struct SharedLedgerService<P: PaymentPort, C: Clock> {
    inner: Arc<RwLock<LedgerService<P, C>>>,
}

impl<P: PaymentPort, C: Clock> Clone for SharedLedgerService<P, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: PaymentPort, C: Clock> SharedLedgerService<P, C> {
    /// Wraps a ledger service in a single exclusive lock.
    pub fn new(service: LedgerService<P, C>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(service)),
        }
    }

    // The guarded state stays consistent across a writer panic: the service
    // only commits a subscription after its payment succeeded, so recovery
    // from a poisoned lock observes either both effects or neither.
    fn read(&self) -> RwLockReadGuard<'_, LedgerService<P, C>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, LedgerService<P, C>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Lists a new service owned by the calling principal.
    pub fn list_service(&self, caller: Principal, name: &str) -> Result<ServiceId, LedgerError> {
        self.write().list_service(caller, name)
    }

    /// Subscribes the caller to a service, charging them up front.
    pub fn subscribe(
        &self,
        caller: Principal,
        service_id: ServiceId,
        duration_days: u32,
    ) -> Result<SubscriptionId, LedgerError> {
        self.write().subscribe(caller, service_id, duration_days)
    }

    /// Cancels one of the caller's subscriptions.
    pub fn cancel_subscription(
        &self,
        caller: Principal,
        id: SubscriptionId,
    ) -> Result<(), LedgerError> {
        self.write().cancel_subscription(caller, id)
    }

    /// Point-in-time access check. Never fails.
    pub fn verify_access(&self, id: SubscriptionId) -> bool {
        self.read().verify_access(id)
    }

    /// Resolves the provider that owns a service.
    pub fn owner_of(&self, service_id: ServiceId) -> Result<Principal, LedgerError> {
        self.read().owner_of(service_id)
    }

    /// Gets a subscription record by id.
    pub fn subscription(&self, id: SubscriptionId) -> Option<Subscription> {
        self.read().subscription(id)
    }

    /// Derives the reported state of a subscription at the current instant.
    pub fn subscription_state(&self, id: SubscriptionId) -> Option<SubscriptionState> {
        self.read().subscription_state(id)
    }

    /// Ids of all subscriptions ever created by `subscriber`, oldest first.
    pub fn subscriptions_of(&self, subscriber: Principal) -> Vec<SubscriptionId> {
        self.read().subscriptions_of(subscriber)
    }

    /// Number of services ever listed.
    pub fn service_count(&self) -> usize {
        self.read().service_count()
    }

    /// Number of subscriptions ever created.
    pub fn subscription_count(&self) -> usize {
        self.read().subscription_count()
    }
}
