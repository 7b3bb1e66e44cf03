//! Display formatting for terminal output
//!
//! Formats ledger data for the terminal: account tables, detail views, and
//! transaction history listings.

pub mod account;
pub mod transaction;

pub use account::{format_account_details, format_account_list};
pub use transaction::format_history;
