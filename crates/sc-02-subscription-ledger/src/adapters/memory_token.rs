//! # In-Memory Token Adapter
//!
//! A reference implementation of the payment collaborator: balances plus
//! `(owner, spender)` allowances, with transfers that either complete in
//! full or fail with no partial debit. The production deployment swaps this
//! for a real token system; flows and tests run against it unchanged.
//!
//! ## Authorization Model
//!
//! The ledger never spends a subscriber's funds directly. The subscriber
//! first grants the ledger's own principal an allowance (`approve`), and
//! the ledger draws on it (`transfer_from`) when a subscription is paid.
//! Allowances are consumed by successful transfers.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::PaymentError;
use crate::ports::outbound::PaymentPort;
use shared_types::{Principal, TokenAmount};

/// In-memory token accounting: balances and allowances.
#[derive(Debug, Default)]
pub struct InMemoryToken {
    balances: HashMap<Principal, TokenAmount>,
    /// Remaining transfer rights granted by an owner to a spender.
    allowances: HashMap<(Principal, Principal), TokenAmount>,
}

impl InMemoryToken {
    /// Creates an empty token ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` to `to` out of thin air. Test and genesis setup.
    pub fn mint(&mut self, to: Principal, amount: TokenAmount) {
        let balance = self.balances.entry(to).or_default();
        *balance = balance.saturating_add(amount);
    }

    /// Sets (not adds to) the allowance `owner` grants `spender`.
    pub fn approve(&mut self, owner: Principal, spender: Principal, amount: TokenAmount) {
        self.allowances.insert((owner, spender), amount);
    }

    /// Remaining allowance from `owner` to `spender`.
    pub fn allowance(&self, owner: Principal, spender: Principal) -> TokenAmount {
        self.allowances.get(&(owner, spender)).copied().unwrap_or(0)
    }

    /// Current balance of a principal. Unknown principals hold zero.
    pub fn balance_of(&self, principal: Principal) -> TokenAmount {
        self.balances.get(&principal).copied().unwrap_or(0)
    }

    /// Moves `amount` from `from` to `to` on the owner's own authority.
    ///
    /// # Errors
    /// - `InsufficientFunds` if `from` holds less than `amount`
    pub fn transfer(
        &mut self,
        from: Principal,
        to: Principal,
        amount: TokenAmount,
    ) -> Result<(), PaymentError> {
        self.debit(from, amount)?;
        self.mint(to, amount);
        Ok(())
    }

    /// Moves `amount` from `from` to `to` on `spender`'s delegated authority.
    ///
    /// The allowance is checked before the balance and both are debited
    /// together, so a failure of either check changes nothing.
    ///
    /// # Errors
    /// - `NotAuthorized` if the remaining allowance is below `amount`
    /// - `InsufficientFunds` if `from` holds less than `amount`
    pub fn transfer_from(
        &mut self,
        spender: Principal,
        from: Principal,
        to: Principal,
        amount: TokenAmount,
    ) -> Result<(), PaymentError> {
        let approved = self.allowance(from, spender);
        if approved < amount {
            return Err(PaymentError::NotAuthorized {
                required: amount,
                approved,
            });
        }

        self.debit(from, amount)?;
        self.allowances.insert((from, spender), approved - amount);
        self.mint(to, amount);
        Ok(())
    }

    fn debit(&mut self, from: Principal, amount: TokenAmount) -> Result<(), PaymentError> {
        let available = self.balance_of(from);
        if available < amount {
            return Err(PaymentError::InsufficientFunds {
                required: amount,
                available,
            });
        }
        self.balances.insert(from, available - amount);
        Ok(())
    }
}

/// `PaymentPort` handle acting as a fixed spender principal on a shared
/// token ledger.
///
/// This is the handle the subscription ledger is constructed with: every
/// transfer draws on the allowance the payer granted `spender`.
#[derive(Clone)]
pub struct TokenSpender {
    token: Arc<RwLock<InMemoryToken>>,
    spender: Principal,
}

impl TokenSpender {
    /// Creates a handle spending as `spender` on `token`.
    pub fn new(token: Arc<RwLock<InMemoryToken>>, spender: Principal) -> Self {
        Self { token, spender }
    }

    /// The principal this handle spends as.
    pub fn spender(&self) -> Principal {
        self.spender
    }
}

impl PaymentPort for TokenSpender {
    fn transfer(
        &mut self,
        from: Principal,
        to: Principal,
        amount: TokenAmount,
    ) -> Result<(), PaymentError> {
        // A poisoned lock still holds consistent token state: writers only
        // panic between operations, never mid-debit.
        self.token
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .transfer_from(self.spender, from, to, amount)
    }

    fn balance_of(&self, principal: Principal) -> TokenAmount {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .balance_of(principal)
    }
}
