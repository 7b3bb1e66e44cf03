//! Configuration module for passbook
//!
//! Resolves where the ledger file lives.

pub mod paths;

pub use paths::{ledger_file, DEFAULT_LEDGER_FILE};
