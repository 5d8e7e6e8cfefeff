//! # Service Registry - Append-Only Catalog
//!
//! The catalog is a `Vec` of immutable records whose positions are the
//! service ids. Ids are therefore strictly increasing in call order, start
//! at 0, and are never reused.
//!
//! ## Invariants Enforced
//!
//! - Strictly increasing ids: ids are `Vec` positions (checked in `list_service()`)
//! - No deletion: there is no removal API
//! - Non-empty names: validated before any state change

use super::entities::Service;
use super::errors::RegistryError;
use shared_types::{Principal, ServiceId};

/// Append-only catalog of listed services.
///
/// Mutations take `&mut self`; the embedding layer decides how the registry
/// is shared (a single exclusive lock in the composed ledger service).
#[derive(Debug, Default)]
pub struct ServiceRegistry {
    /// All services ever listed, indexed by id.
    services: Vec<Service>,
}

impl ServiceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists a new service owned by the calling principal.
    ///
    /// The owner is the authenticated caller, never payload data, so a
    /// provider cannot be impersonated. Listing is otherwise unrestricted.
    ///
    /// # Errors
    /// - `EmptyName` if `name` is empty or whitespace-only
    pub fn list_service(
        &mut self,
        owner: Principal,
        name: &str,
    ) -> Result<ServiceId, RegistryError> {
        if name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }

        let id = self.services.len() as ServiceId;
        self.services.push(Service::new(id, owner, name.to_string()));
        Ok(id)
    }

    /// Resolves the owner of a service.
    ///
    /// # Errors
    /// - `ServiceNotFound` if the id was never issued
    pub fn owner_of(&self, id: ServiceId) -> Result<Principal, RegistryError> {
        self.get(id)
            .map(Service::owner)
            .ok_or(RegistryError::ServiceNotFound { id })
    }

    /// Gets a service record by id.
    pub fn get(&self, id: ServiceId) -> Option<&Service> {
        self.services.get(id as usize)
    }

    /// Checks whether a service id was ever issued.
    pub fn contains(&self, id: ServiceId) -> bool {
        (id as usize) < self.services.len()
    }

    /// Returns the number of listed services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Returns true if no service has been listed yet.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Iterates over all listed services in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Service> {
        self.services.iter()
    }
}
