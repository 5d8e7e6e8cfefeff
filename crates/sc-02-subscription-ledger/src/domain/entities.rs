//! # Domain Entities for the Subscription Ledger
//!
//! A `Subscription` is created only after its payment succeeded and is never
//! deleted. The only mutation it supports is setting the cancellation flag,
//! so state transitions are monotonic by construction.

use serde::{Deserialize, Serialize};
use shared_types::{Principal, ServiceId, SubscriptionId, Timestamp};

/// Reported state of a subscription at a given instant.
///
/// `Canceled` is the only persisted terminal state. `Expired` is derived
/// from the stored end instant at query time and never stored, which avoids
/// a background scheduler entirely. When a canceled subscription also
/// passes its end instant, `Canceled` wins in reporting: it captures the
/// subscriber's intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubscriptionState {
    /// Paid for and within its validity window.
    Active,
    /// Explicitly canceled by the subscriber. Terminal.
    Canceled,
    /// Past its end instant without being canceled. Terminal, derived.
    Expired,
}

/// A paid-for subscription record.
///
/// Fields are private: the book is the only writer, and the cancellation
/// flag is the only thing it ever changes after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Sequential identifier, assigned at creation.
    id: SubscriptionId,
    /// Weak reference to the subscribed service, by id.
    service_id: ServiceId,
    /// The paying principal. Only this principal may cancel.
    subscriber: Principal,
    /// Instant the subscription was created.
    started_at: Timestamp,
    /// Last instant at which access is still granted (inclusive).
    expires_at: Timestamp,
    /// Persisted cancellation flag.
    canceled: bool,
}

impl Subscription {
    pub(crate) fn new(
        id: SubscriptionId,
        service_id: ServiceId,
        subscriber: Principal,
        started_at: Timestamp,
        expires_at: Timestamp,
    ) -> Self {
        debug_assert!(expires_at > started_at);
        Self {
            id,
            service_id,
            subscriber,
            started_at,
            expires_at,
            canceled: false,
        }
    }

    /// Sets the cancellation flag. Idempotent.
    pub(crate) fn cancel(&mut self) {
        self.canceled = true;
    }

    /// The subscription's sequential identifier.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// The subscribed service's identifier.
    pub fn service_id(&self) -> ServiceId {
        self.service_id
    }

    /// The paying principal.
    pub fn subscriber(&self) -> Principal {
        self.subscriber
    }

    /// Creation instant.
    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    /// Last instant of granted access (inclusive).
    pub fn expires_at(&self) -> Timestamp {
        self.expires_at
    }

    /// Whether the subscriber has canceled.
    pub fn is_canceled(&self) -> bool {
        self.canceled
    }

    /// Derives the reported state at `now`.
    pub fn state_at(&self, now: Timestamp) -> SubscriptionState {
        if self.canceled {
            SubscriptionState::Canceled
        } else if now > self.expires_at {
            SubscriptionState::Expired
        } else {
            SubscriptionState::Active
        }
    }

    /// True iff the subscription grants access at `now`.
    pub fn grants_access_at(&self, now: Timestamp) -> bool {
        self.state_at(now) == SubscriptionState::Active
    }
}
