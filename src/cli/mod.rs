//! CLI command handlers
//!
//! Bridges clap argument parsing with the ledger engine: each command loads
//! the ledger, applies exactly one engine operation, and saves the ledger
//! back only after the operation succeeds. Raw amount strings are parsed
//! here, before the engine ever sees them.

use clap::Subcommand;

use crate::display::{format_account_details, format_account_list, format_history};
use crate::error::{PassbookError, PassbookResult};
use crate::models::Money;
use crate::storage::LedgerStore;

/// Ledger subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Open a new account
    Open {
        /// Account id (e.g., "A1")
        id: String,
        /// Account holder name
        holder: String,
        /// Initial balance (e.g., "100.00" or "100")
        #[arg(short, long, default_value = "0")]
        balance: String,
    },
    /// Deposit funds into an account
    Deposit {
        /// Account id
        id: String,
        /// Amount to deposit (e.g., "50.00")
        amount: String,
    },
    /// Withdraw funds from an account
    Withdraw {
        /// Account id
        id: String,
        /// Amount to withdraw (e.g., "50.00")
        amount: String,
    },
    /// Transfer funds between accounts
    Transfer {
        /// Source account id
        source: String,
        /// Target account id
        target: String,
        /// Amount to transfer (e.g., "40.00")
        amount: String,
    },
    /// Show an account's transaction history
    History {
        /// Account id
        id: String,
    },
    /// Show account details
    Show {
        /// Account id
        id: String,
    },
    /// List all accounts
    List,
}

/// Handle a ledger command
pub fn run(store: &LedgerStore, cmd: Commands) -> PassbookResult<()> {
    let mut ledger = store.load()?;

    match cmd {
        Commands::Open {
            id,
            holder,
            balance,
        } => {
            let balance = parse_amount(&balance)?;
            let account = ledger.open_account(&id, &holder, balance)?;

            println!("Opened account {} for {}", account.id, account.holder_name);
            println!("  Balance: {}", account.balance);
            store.save(&ledger)?;
        }

        Commands::Deposit { id, amount } => {
            let amount = parse_amount(&amount)?;
            let new_balance = ledger.deposit(&id, amount)?;

            println!(
                "Deposited {} into account {}. New balance: {}",
                amount, id, new_balance
            );
            store.save(&ledger)?;
        }

        Commands::Withdraw { id, amount } => {
            let amount = parse_amount(&amount)?;
            let new_balance = ledger.withdraw(&id, amount)?;

            println!(
                "Withdrew {} from account {}. New balance: {}",
                amount, id, new_balance
            );
            store.save(&ledger)?;
        }

        Commands::Transfer {
            source,
            target,
            amount,
        } => {
            let amount = parse_amount(&amount)?;
            let (source_balance, target_balance) = ledger.transfer(&source, &target, amount)?;

            println!("Transferred {} from {} to {}.", amount, source, target);
            println!("  {} balance: {}", source, source_balance);
            println!("  {} balance: {}", target, target_balance);
            store.save(&ledger)?;
        }

        Commands::History { id } => {
            let history = ledger.history(&id)?;
            print!("{}", format_history(&id, &history));
        }

        Commands::Show { id } => {
            let account = ledger.lookup(&id)?;
            print!("{}", format_account_details(account));
        }

        Commands::List => {
            print!("{}", format_account_list(&ledger.accounts()));
        }
    }

    Ok(())
}

/// Parse a raw amount string, mapping malformed input to `InvalidAmount`
fn parse_amount(raw: &str) -> PassbookResult<Money> {
    Money::parse(raw).map_err(|_| PassbookError::InvalidAmount(raw.to_string()))
}
