//! Transaction display formatting
//!
//! Formats an account's history for terminal output, one line per ledger
//! event.

use crate::models::Transaction;

/// Format an account's transaction history
pub fn format_history(account_id: &str, history: &[Transaction]) -> String {
    let mut output = format!("Transaction History for Account {}:\n", account_id);

    if history.is_empty() {
        output.push_str("  (no transactions)\n");
        return output;
    }

    for txn in history {
        output.push_str(&format!("  {}\n", txn));
    }

    output
}
