//! # Ledger Service - Composed Facade
//!
//! Owns the service registry, the subscription book, the payment port, the
//! pricing policy, and the clock, and implements `LedgerApi` on top of
//! them. Owning everything behind one `&mut self` makes every mutating call
//! atomic with respect to every other call once the service sits behind a
//! single exclusive lock.
//!
//! ## Subscribe Sequence
//!
//! 1. Reject zero durations before touching anything.
//! 2. Resolve the service owner through the registry.
//! 3. Quote the charge through the pricing policy.
//! 4. Transfer the charge from subscriber to provider. A failure aborts
//!    here; the book has not been touched yet.
//! 5. Record the subscription. The record is committed only after the
//!    transfer is confirmed.

use tracing::{info, warn};

use crate::domain::{
    LedgerError, PricingPolicy, Subscription, SubscriptionBook, SubscriptionState,
};
use crate::ports::inbound::LedgerApi;
use crate::ports::outbound::{Clock, PaymentPort, SystemClock};
use sc_01_service_registry::ServiceRegistry;
use shared_types::{days_to_millis, principal_prefix, Principal, ServiceId, SubscriptionId};

/// The subscription ledger service.
///
/// Constructed once at service start with the payment handle it will use
/// for all transfers; there is no runtime reconfiguration.
pub struct LedgerService<P: PaymentPort, C: Clock> {
    registry: ServiceRegistry,
    book: SubscriptionBook,
    payments: P,
    pricing: Box<dyn PricingPolicy>,
    clock: C,
}

impl<P: PaymentPort> LedgerService<P, SystemClock> {
    /// Creates a ledger on the wall clock with the given pricing policy.
    pub fn new(payments: P, pricing: Box<dyn PricingPolicy>) -> Self {
        Self::with_clock(payments, pricing, SystemClock)
    }
}

impl<P: PaymentPort, C: Clock> LedgerService<P, C> {
    /// Creates a ledger with an explicit time source.
    pub fn with_clock(payments: P, pricing: Box<dyn PricingPolicy>, clock: C) -> Self {
        Self {
            registry: ServiceRegistry::new(),
            book: SubscriptionBook::new(),
            payments,
            pricing,
            clock,
        }
    }

    /// Read access to the underlying catalog.
    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    /// Read access to the underlying subscription store.
    pub fn book(&self) -> &SubscriptionBook {
        &self.book
    }

    /// Read access to the payment port (pre-flight balance checks).
    pub fn payments(&self) -> &P {
        &self.payments
    }
}

impl<P: PaymentPort, C: Clock> LedgerApi for LedgerService<P, C> {
    fn list_service(&mut self, caller: Principal, name: &str) -> Result<ServiceId, LedgerError> {
        let id = self.registry.list_service(caller, name)?;
        info!(
            "[sc-02] Service {} listed as \"{}\" by {}",
            id,
            name,
            principal_prefix(&caller)
        );
        Ok(id)
    }

    fn subscribe(
        &mut self,
        caller: Principal,
        service_id: ServiceId,
        duration_days: u32,
    ) -> Result<SubscriptionId, LedgerError> {
        if duration_days == 0 {
            return Err(LedgerError::InvalidDuration);
        }

        let provider = self.registry.owner_of(service_id)?;
        let charge = self.pricing.quote(service_id, duration_days);

        // The book is untouched until the transfer has succeeded, so a
        // payment failure leaves no observable state.
        if let Err(err) = self.payments.transfer(caller, provider, charge) {
            warn!(
                "[sc-02] Subscribe to service {} by {} rejected: {}",
                service_id,
                principal_prefix(&caller),
                err
            );
            return Err(err.into());
        }

        let started_at = self.clock.now();
        let expires_at = started_at + days_to_millis(duration_days);
        let id = self.book.insert(service_id, caller, started_at, expires_at);

        info!(
            "[sc-02] Subscription {} created: service {}, subscriber {}, {} day(s), charge {}",
            id,
            service_id,
            principal_prefix(&caller),
            duration_days,
            charge
        );
        Ok(id)
    }

    fn cancel_subscription(
        &mut self,
        caller: Principal,
        id: SubscriptionId,
    ) -> Result<(), LedgerError> {
        self.book.cancel(caller, id)?;
        info!(
            "[sc-02] Subscription {} canceled by {}",
            id,
            principal_prefix(&caller)
        );
        Ok(())
    }

    fn verify_access(&self, id: SubscriptionId) -> bool {
        self.book.has_access(id, self.clock.now())
    }

    fn owner_of(&self, service_id: ServiceId) -> Result<Principal, LedgerError> {
        Ok(self.registry.owner_of(service_id)?)
    }

    fn subscription(&self, id: SubscriptionId) -> Option<Subscription> {
        self.book.get(id).cloned()
    }

    fn subscription_state(&self, id: SubscriptionId) -> Option<SubscriptionState> {
        self.book.state_of(id, self.clock.now())
    }

    fn subscriptions_of(&self, subscriber: Principal) -> Vec<SubscriptionId> {
        self.book.subscriptions_of(subscriber).to_vec()
    }

    fn service_count(&self) -> usize {
        self.registry.len()
    }

    fn subscription_count(&self) -> usize {
        self.book.len()
    }
}
