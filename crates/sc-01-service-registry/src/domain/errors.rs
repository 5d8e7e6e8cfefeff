//! Service Registry error types.

use shared_types::ServiceId;
use thiserror::Error;

/// Registry error type.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The service name is empty or whitespace-only.
    #[error("Service name must not be empty")]
    EmptyName,

    /// The service id was never issued.
    #[error("Service not found: id {id}")]
    ServiceNotFound { id: ServiceId },
}
