//! Outbound (Driven) ports for the Subscription Ledger subsystem.
//!
//! These traits define the capabilities the ledger consumes. The token
//! accounting system behind `PaymentPort` is a collaborator, not part of
//! this subsystem: the ledger only moves funds through it and never sees
//! balances being stored.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::PaymentError;
use shared_types::{days_to_millis, Principal, Timestamp, TokenAmount};

/// Capability to move funds between principals.
///
/// The handle is fixed for the lifetime of the ledger instance. A transfer
/// either completes in full or fails with no partial debit; the ledger
/// relies on that to keep payment and record creation atomic as a unit.
pub trait PaymentPort: Send + Sync {
    /// Moves `amount` base units from `from` to `to`.
    ///
    /// # Errors
    /// - `InsufficientFunds`: the payer's balance cannot cover `amount`
    /// - `NotAuthorized`: the payer has not granted the ledger enough
    ///   transfer rights (delegation happens outside this subsystem, via
    ///   the payment system's own authorization model)
    fn transfer(
        &mut self,
        from: Principal,
        to: Principal,
        amount: TokenAmount,
    ) -> Result<(), PaymentError>;

    /// Current balance of a principal. Pre-flight checks and tests only;
    /// the transfer path does not consult it.
    fn balance_of(&self, principal: Principal) -> TokenAmount;
}

/// Time source for start instants and lazy expiry.
///
/// Abstracted to allow testing with deterministic time.
pub trait Clock: Send + Sync {
    /// Returns the current timestamp in milliseconds.
    fn now(&self) -> Timestamp;
}

/// Default wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Deterministic time source for tests.
///
/// Public (not test-gated) so the integration suite can drive expiry
/// without sleeping.
#[derive(Debug, Default)]
pub struct ManualClock {
    millis: AtomicU64,
}

impl ManualClock {
    /// Creates a clock frozen at `initial` milliseconds.
    pub fn new(initial: Timestamp) -> Self {
        Self {
            millis: AtomicU64::new(initial),
        }
    }

    /// Advances the clock by `ms` milliseconds.
    pub fn advance(&self, ms: u64) {
        self.millis.fetch_add(ms, Ordering::SeqCst);
    }

    /// Advances the clock by whole days.
    pub fn advance_days(&self, days: u32) {
        self.advance(days_to_millis(days));
    }

    /// Sets the clock to an absolute instant.
    pub fn set(&self, now: Timestamp) {
        self.millis.store(now, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.millis.load(Ordering::SeqCst)
    }
}

impl<C: Clock> Clock for std::sync::Arc<C> {
    fn now(&self) -> Timestamp {
        self.as_ref().now()
    }
}

/// Mock payment port recording every transfer, for unit tests.
#[cfg(test)]
pub struct MockPaymentPort {
    transfers: Vec<(Principal, Principal, TokenAmount)>,
    fail_with: Option<PaymentError>,
}

#[cfg(test)]
impl MockPaymentPort {
    pub fn new() -> Self {
        Self {
            transfers: Vec::new(),
            fail_with: None,
        }
    }

    /// Makes every subsequent transfer fail with `err`.
    pub fn failing_with(mut self, err: PaymentError) -> Self {
        self.fail_with = Some(err);
        self
    }

    pub fn transfers(&self) -> &[(Principal, Principal, TokenAmount)] {
        &self.transfers
    }
}

#[cfg(test)]
impl PaymentPort for MockPaymentPort {
    fn transfer(
        &mut self,
        from: Principal,
        to: Principal,
        amount: TokenAmount,
    ) -> Result<(), PaymentError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.transfers.push((from, to, amount));
        Ok(())
    }

    fn balance_of(&self, _principal: Principal) -> TokenAmount {
        0
    }
}
