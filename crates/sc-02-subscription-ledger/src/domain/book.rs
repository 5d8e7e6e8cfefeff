//! # Subscription Book - Append-Only Lifecycle Store
//!
//! ## Data Structures
//!
//! - `subscriptions`: records indexed by id (`Vec` positions are the ids)
//! - `by_subscriber`: ids grouped per paying principal, in creation order
//!
//! ## Invariants Enforced
//!
//! - Strictly increasing ids (ids are `Vec` positions, assigned in `insert()`)
//! - Records are never deleted; cancellation only sets a flag
//! - Only the subscriber may cancel (caller check in `cancel()`)
//! - Cancellation is idempotent (re-canceling is a no-op success)

use std::collections::HashMap;

use super::entities::{Subscription, SubscriptionState};
use super::errors::LedgerError;
use shared_types::{Principal, ServiceId, SubscriptionId, Timestamp};

/// Append-only store of subscription records.
///
/// The book holds already-paid-for records; payment sequencing is the
/// composed service's job. Mutations take `&mut self` so the embedding
/// layer controls serialization of writers.
#[derive(Debug, Default)]
pub struct SubscriptionBook {
    /// All subscriptions ever created, indexed by id.
    subscriptions: Vec<Subscription>,
    /// Subscription ids per subscriber, in creation order.
    by_subscriber: HashMap<Principal, Vec<SubscriptionId>>,
}

impl SubscriptionBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new active subscription and returns its id.
    ///
    /// Called only after the charge has been transferred. Re-subscribing is
    /// allowed; every call produces an independent record.
    pub(crate) fn insert(
        &mut self,
        service_id: ServiceId,
        subscriber: Principal,
        started_at: Timestamp,
        expires_at: Timestamp,
    ) -> SubscriptionId {
        let id = self.subscriptions.len() as SubscriptionId;
        self.subscriptions
            .push(Subscription::new(id, service_id, subscriber, started_at, expires_at));
        self.by_subscriber.entry(subscriber).or_default().push(id);
        id
    }

    /// Cancels a subscription on behalf of `caller`.
    ///
    /// Idempotent: canceling an already-canceled subscription succeeds and
    /// leaves the same final state.
    ///
    /// # Errors
    /// - `SubscriptionNotFound` if the id was never issued
    /// - `NotSubscriber` if `caller` is not the paying principal
    pub fn cancel(&mut self, caller: Principal, id: SubscriptionId) -> Result<(), LedgerError> {
        let subscription = self
            .subscriptions
            .get_mut(id as usize)
            .ok_or(LedgerError::SubscriptionNotFound { id })?;

        if subscription.subscriber() != caller {
            return Err(LedgerError::NotSubscriber { id });
        }

        subscription.cancel();
        Ok(())
    }

    /// True iff `id` exists, is not canceled, and `now` is within its window.
    ///
    /// This is a predicate, not a lookup: unknown ids answer `false` rather
    /// than failing.
    pub fn has_access(&self, id: SubscriptionId, now: Timestamp) -> bool {
        self.get(id)
            .map(|sub| sub.grants_access_at(now))
            .unwrap_or(false)
    }

    /// Derives the reported state of a subscription at `now`.
    pub fn state_of(&self, id: SubscriptionId, now: Timestamp) -> Option<SubscriptionState> {
        self.get(id).map(|sub| sub.state_at(now))
    }

    /// Gets a subscription record by id.
    pub fn get(&self, id: SubscriptionId) -> Option<&Subscription> {
        self.subscriptions.get(id as usize)
    }

    /// Ids of all subscriptions ever created by `subscriber`, oldest first.
    pub fn subscriptions_of(&self, subscriber: Principal) -> &[SubscriptionId] {
        self.by_subscriber
            .get(&subscriber)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns the number of subscriptions ever created.
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Returns true if no subscription has been created yet.
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}
