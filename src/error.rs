//! Custom error types for passbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every variant is recoverable; the ledger
//! engine reports errors to its caller and never prints or aborts.

use thiserror::Error;

use crate::models::Money;

/// The main error type for passbook operations
#[derive(Error, Debug)]
pub enum PassbookError {
    /// Non-positive or malformed amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// No account with the given id exists
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// An account with the given id already exists
    #[error("Account already exists: {0}")]
    DuplicateAccount(String),

    /// A withdrawal or transfer exceeds the source balance
    #[error("Insufficient funds in account '{account}': need {needed}, have {available}")]
    InsufficientFunds {
        account: String,
        needed: Money,
        available: Money,
    },

    /// The ledger file exists but its content is not valid
    #[error("Ledger file is corrupted: {0}")]
    CorruptData(String),

    /// Storage read/write failure
    #[error("I/O error: {0}")]
    Io(String),
}

impl PassbookError {
    /// Create an "invalid amount" error from a rejected amount
    pub fn invalid_amount(amount: Money) -> Self {
        Self::InvalidAmount(amount.to_string())
    }

    /// Create an "account not found" error
    pub fn account_not_found(id: impl Into<String>) -> Self {
        Self::AccountNotFound(id.into())
    }

    /// Create a "duplicate account" error
    pub fn duplicate_account(id: impl Into<String>) -> Self {
        Self::DuplicateAccount(id.into())
    }

    /// Create an "insufficient funds" error
    pub fn insufficient_funds(account: impl Into<String>, needed: Money, available: Money) -> Self {
        Self::InsufficientFunds {
            account: account.into(),
            needed,
            available,
        }
    }

    /// Check if this is an "account not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AccountNotFound(_))
    }
}

impl From<std::io::Error> for PassbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for passbook operations
pub type PassbookResult<T> = Result<T, PassbookError>;
