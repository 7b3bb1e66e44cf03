use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use passbook::cli::Commands;
use passbook::config::paths;
use passbook::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "passbook",
    version,
    about = "Personal account ledger for the command line",
    long_about = "Passbook tracks named accounts, their balances, and a full \
                  transaction history, persisted to a single JSON file between \
                  runs. Deposits, withdrawals, and transfers are validated \
                  before any balance changes."
)]
struct Cli {
    /// Ledger file (defaults to passbook.json in the working directory,
    /// or the PASSBOOK_FILE environment variable)
    #[arg(short, long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = LedgerStore::new(paths::ledger_file(cli.file));
    passbook::cli::run(&store, cli.command)?;

    Ok(())
}
