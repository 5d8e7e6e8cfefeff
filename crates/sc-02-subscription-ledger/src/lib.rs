//! # Subscription Ledger Subsystem
//!
//! Enforces the pay-then-access subscription lifecycle on top of the
//! Service Registry and an injected payment capability.
//!
//! ## Lifecycle
//!
//! ```text
//! [subscribe] ──payment ok──→ ACTIVE ──cancel──→ CANCELED (persisted, terminal)
//!      │                        │
//!      └─payment fails:         └──clock passes expiry──→ EXPIRED (derived,
//!        no record created                                 never stored)
//! ```
//!
//! `Expired` is computed lazily from the stored end instant at query time;
//! there is no background sweeper. A canceled subscription keeps reporting
//! `Canceled` even after its natural expiry passes, since cancellation
//! records subscriber intent.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Payment and record creation are atomic | `service.rs` - record inserted only after transfer succeeds |
//! | No subscription re-enters Active | `domain/entities.rs` - `cancel()` is the only mutation |
//! | `expires_at > started_at` | `service.rs` - zero durations rejected before payment |
//! | Only the subscriber may cancel | `domain/book.rs` - caller check in `cancel()` |
//! | History retained for audit | `domain/book.rs` - no removal API |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  adapters/ - InMemoryToken, TokenSpender, SharedLedgerService│
//! └──────────────────────────────────────────────────────────────┘
//!                        ↑ implements ↑
//! ┌──────────────────────────────────────────────────────────────┐
//! │  ports/inbound.rs  - LedgerApi trait                         │
//! │  ports/outbound.rs - PaymentPort, Clock traits               │
//! └──────────────────────────────────────────────────────────────┘
//!                        ↑ uses ↑
//! ┌──────────────────────────────────────────────────────────────┐
//! │  domain/entities.rs - Subscription, SubscriptionState        │
//! │  domain/book.rs     - SubscriptionBook (append-only store)   │
//! │  domain/pricing.rs  - PricingPolicy, PerDayRate, FlatRate    │
//! │  domain/errors.rs   - LedgerError, PaymentError              │
//! │  service.rs         - LedgerService (composed facade)        │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Outbound Dependencies
//!
//! | Dependency | Trait | Purpose |
//! |------------|-------|---------|
//! | Token accounting | `PaymentPort` | Move the charge from subscriber to provider |
//! | Wall clock | `Clock` | Start instants and lazy expiry |

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
pub use service::*;
