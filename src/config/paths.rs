//! Path management for passbook
//!
//! The ledger lives in a single file. Resolution order:
//!
//! 1. Explicit path from the `--file` flag
//! 2. `PASSBOOK_FILE` environment variable
//! 3. `passbook.json` in the working directory

use std::env;
use std::path::PathBuf;

/// Environment variable that overrides the ledger file location
pub const LEDGER_FILE_ENV: &str = "PASSBOOK_FILE";

/// Default ledger filename, resolved against the working directory
pub const DEFAULT_LEDGER_FILE: &str = "passbook.json";

/// Resolve the ledger file path
pub fn ledger_file(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(path) = cli_override {
        return path;
    }
    if let Some(path) = env::var_os(LEDGER_FILE_ENV) {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_LEDGER_FILE)
}
