//! # Service Registry Subsystem
//!
//! Provider-facing catalog of services available for subscription.
//!
//! ## Role in System
//!
//! - **Leaf Subsystem**: depends only on `shared-types`; knows nothing about
//!   subscriptions or payments.
//! - **Append-Only Catalog**: every service id ever issued maps to exactly
//!   one immutable record for the lifetime of the registry.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Strictly increasing ids in call order | `domain/registry.rs` - ids are `Vec` positions |
//! | No deletion, no mutation after listing | `domain/registry.rs` - no removal API, fields private |
//! | Non-empty service names | `domain/registry.rs` - `list_service()` validation |
//!
//! Listing is unrestricted: any principal may become a provider. The owner
//! recorded for a service is always the calling principal, never payload
//! data, so providers cannot be impersonated.

pub mod domain;

pub use domain::*;
