//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::models::{Account, Money};
use crate::models::transaction::TIMESTAMP_FORMAT;

/// Format all accounts as an aligned table with a total row
pub fn format_account_list(accounts: &[&Account]) -> String {
    if accounts.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let id_width = accounts
        .iter()
        .map(|a| a.id.len())
        .max()
        .unwrap_or(2)
        .max(2);

    let holder_width = accounts
        .iter()
        .map(|a| a.holder_name.len())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<id_width$}  {:<holder_width$}  {:>12}  {:>6}\n",
        "ID",
        "Holder",
        "Balance",
        "Txns",
        id_width = id_width,
        holder_width = holder_width,
    ));

    output.push_str(&format!(
        "{:-<id_width$}  {:-<holder_width$}  {:->12}  {:->6}\n",
        "",
        "",
        "",
        "",
        id_width = id_width,
        holder_width = holder_width,
    ));

    for account in accounts {
        output.push_str(&format!(
            "{:<id_width$}  {:<holder_width$}  {:>12}  {:>6}\n",
            account.id,
            account.holder_name,
            account.balance.to_string(),
            account.history.len(),
            id_width = id_width,
            holder_width = holder_width,
        ));
    }

    let total: Money = accounts.iter().map(|a| a.balance).sum();

    output.push_str(&format!(
        "{:-<id_width$}  {:-<holder_width$}  {:->12}  {:->6}\n",
        "",
        "",
        "",
        "",
        id_width = id_width,
        holder_width = holder_width,
    ));

    output.push_str(&format!(
        "{:<id_width$}  {:<holder_width$}  {:>12}\n",
        "TOTAL",
        "",
        total.to_string(),
        id_width = id_width,
        holder_width = holder_width,
    ));

    output
}

/// Format a single account's details
pub fn format_account_details(account: &Account) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.id));
    output.push_str(&format!("  Holder:       {}\n", account.holder_name));
    output.push_str(&format!("  Balance:      {}\n", account.balance));
    output.push_str(&format!("  Transactions: {}\n", account.history.len()));

    if let Some(last) = account.history.last() {
        output.push_str(&format!(
            "  Last Activity: {} ({})\n",
            last.timestamp.format(TIMESTAMP_FORMAT),
            last.kind
        ));
    }

    output
}
