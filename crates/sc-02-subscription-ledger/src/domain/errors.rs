//! Subscription Ledger error types.
//!
//! Mutating operations abort with one of these; read operations never fail
//! on missing data and degrade to a safe default instead.

use sc_01_service_registry::RegistryError;
use shared_types::{ServiceId, SubscriptionId, TokenAmount};
use thiserror::Error;

/// Failure reported by the payment capability.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PaymentError {
    /// The payer's balance cannot cover the charge.
    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds {
        required: TokenAmount,
        available: TokenAmount,
    },

    /// The payer has not granted the spender enough transfer rights.
    #[error("Transfer not authorized: required {required}, approved {approved}")]
    NotAuthorized {
        required: TokenAmount,
        approved: TokenAmount,
    },
}

/// Ledger error type.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// The service id was never issued.
    #[error("Service not found: id {id}")]
    ServiceNotFound { id: ServiceId },

    /// The subscription id was never issued.
    #[error("Subscription not found: id {id}")]
    SubscriptionNotFound { id: SubscriptionId },

    /// The caller is not the subscriber of the targeted subscription.
    #[error("Caller is not the subscriber of subscription {id}")]
    NotSubscriber { id: SubscriptionId },

    /// Subscription duration must cover at least one day.
    #[error("Subscription duration must be at least one day")]
    InvalidDuration,

    /// The service name is empty or whitespace-only.
    #[error("Service name must not be empty")]
    EmptyName,

    /// The payment transfer failed; no subscription was created.
    #[error(transparent)]
    Payment(#[from] PaymentError),
}

impl From<RegistryError> for LedgerError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::EmptyName => Self::EmptyName,
            RegistryError::ServiceNotFound { id } => Self::ServiceNotFound { id },
        }
    }
}
