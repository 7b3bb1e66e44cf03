//! Account model
//!
//! A named account with a non-negative balance and an append-only history of
//! the deposits and withdrawals applied to it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::transaction::{Transaction, TransactionKind};

/// A ledger account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Opaque unique identifier, assigned when the account is opened
    pub id: String,

    /// Display name of the account holder
    #[serde(rename = "holderName")]
    pub holder_name: String,

    /// Current balance, never negative
    pub balance: Money,

    /// Chronological record of every balance mutation
    #[serde(default)]
    pub history: Vec<Transaction>,
}

impl Account {
    /// Create a new account with an empty history
    ///
    /// The opening balance is not itself a ledger event, so no transaction
    /// is recorded for it.
    pub fn new(id: impl Into<String>, holder_name: impl Into<String>, balance: Money) -> Self {
        Self {
            id: id.into(),
            holder_name: holder_name.into(),
            balance,
            history: Vec::new(),
        }
    }

    /// Add funds and append the matching Deposit record
    ///
    /// Callers must have validated that `amount` is positive.
    pub(crate) fn credit(&mut self, amount: Money) -> Money {
        self.balance += amount;
        self.history
            .push(Transaction::record(TransactionKind::Deposit, amount));
        self.balance
    }

    /// Remove funds and append the matching Withdrawal record
    ///
    /// Callers must have validated that `amount` is positive and does not
    /// exceed the balance.
    pub(crate) fn debit(&mut self, amount: Money) -> Money {
        self.balance -= amount;
        self.history
            .push(Transaction::record(TransactionKind::Withdrawal, amount));
        self.balance
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.holder_name, self.id)
    }
}
