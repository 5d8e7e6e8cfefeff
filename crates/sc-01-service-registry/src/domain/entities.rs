//! # Domain Entities for the Service Registry
//!
//! A `Service` is an immutable catalog record. Fields are private; the
//! registry is the only writer and readers go through accessors, so a record
//! can never be altered after listing.

use serde::{Deserialize, Serialize};
use shared_types::{Principal, ServiceId};

/// A service listed by a provider.
///
/// Created once by `ServiceRegistry::list_service` and never modified or
/// deleted afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Sequential identifier, assigned at creation.
    id: ServiceId,
    /// Display name. Non-empty by construction.
    name: String,
    /// The provider that listed the service and receives its payments.
    owner: Principal,
}

impl Service {
    pub(crate) fn new(id: ServiceId, owner: Principal, name: String) -> Self {
        Self { id, name, owner }
    }

    /// The service's sequential identifier.
    pub fn id(&self) -> ServiceId {
        self.id
    }

    /// The display name the provider listed the service under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The provider principal that owns the service.
    pub fn owner(&self) -> Principal {
        self.owner
    }
}
