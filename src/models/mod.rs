//! Core data models for passbook
//!
//! This module contains the data structures that represent the ledger
//! domain: monetary amounts, accounts, and transaction records.

pub mod account;
pub mod money;
pub mod transaction;

pub use account::Account;
pub use money::Money;
pub use transaction::{Transaction, TransactionKind};
