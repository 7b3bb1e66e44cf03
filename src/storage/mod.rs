//! Storage layer for passbook
//!
//! Persists the full account ledger to a single JSON file: an ordered array
//! of account records, each carrying its complete transaction history. Writes
//! go through an atomic write-then-rename so the file is never left
//! truncated.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use std::path::{Path, PathBuf};

use crate::error::PassbookResult;
use crate::ledger::Ledger;
use crate::models::Account;

/// Flat-file store for the account ledger
///
/// The store never retains ledger state; it converts between the in-memory
/// account set and the on-disk document at two points, load at startup and
/// save after a successful mutation.
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger from disk
    ///
    /// A missing file is the first-run case and yields an empty ledger.
    /// Content that cannot be parsed, or that parses but violates ledger
    /// invariants, is reported as `CorruptData`.
    pub fn load(&self) -> PassbookResult<Ledger> {
        match read_json::<Vec<Account>, _>(&self.path)? {
            Some(accounts) => Ledger::from_accounts(accounts),
            None => Ok(Ledger::new()),
        }
    }

    /// Save the full ledger to disk, replacing any existing content
    pub fn save(&self, ledger: &Ledger) -> PassbookResult<()> {
        write_json_atomic(&self.path, &ledger.accounts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PassbookError;
    use crate::models::Money;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, LedgerStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = LedgerStore::new(temp_dir.path().join("ledger.json"));
        (temp_dir, store)
    }

    #[test]
    fn test_load_missing_file_returns_empty_ledger() {
        let (_temp_dir, store) = create_test_store();

        let ledger = store.load().unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_save_and_reload_round_trips_everything() {
        let (_temp_dir, store) = create_test_store();

        let mut ledger = Ledger::new();
        ledger
            .open_account("A1", "Alice", Money::from_cents(10000))
            .unwrap();
        ledger
            .open_account("A2", "Bob", Money::from_cents(500))
            .unwrap();
        ledger.deposit("A1", Money::from_cents(5000)).unwrap();
        ledger.withdraw("A1", Money::from_cents(2500)).unwrap();
        ledger.transfer("A1", "A2", Money::from_cents(1000)).unwrap();

        store.save(&ledger).unwrap();
        let reloaded = store.load().unwrap();

        assert_eq!(reloaded.len(), ledger.len());
        for account in ledger.accounts() {
            assert_eq!(reloaded.lookup(&account.id).unwrap(), account);
        }
    }

    #[test]
    fn test_save_overwrites_existing_content() {
        let (_temp_dir, store) = create_test_store();

        let mut ledger = Ledger::new();
        ledger
            .open_account("A1", "Alice", Money::from_cents(100))
            .unwrap();
        store.save(&ledger).unwrap();

        ledger.deposit("A1", Money::from_cents(50)).unwrap();
        store.save(&ledger).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(
            reloaded.lookup("A1").unwrap().balance,
            Money::from_cents(150)
        );
        assert_eq!(reloaded.history("A1").unwrap().len(), 1);
    }

    #[test]
    fn test_load_unparseable_file_is_corrupt() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), "{{{{").unwrap();

        let result = store.load();
        assert!(matches!(result, Err(PassbookError::CorruptData(_))));
    }

    #[test]
    fn test_load_rejects_negative_balance() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            r#"[{"id":"A1","holderName":"Alice","balance":-100,"history":[]}]"#,
        )
        .unwrap();

        let result = store.load();
        assert!(matches!(result, Err(PassbookError::CorruptData(_))));
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            r#"[{"id":"A1","holderName":"Alice","balance":100,"history":[]},
                {"id":"A1","holderName":"Alice","balance":200,"history":[]}]"#,
        )
        .unwrap();

        let result = store.load();
        assert!(matches!(result, Err(PassbookError::CorruptData(_))));
    }

    #[test]
    fn test_document_shape() {
        let (_temp_dir, store) = create_test_store();

        let mut ledger = Ledger::new();
        ledger
            .open_account("A1", "Alice", Money::from_cents(10000))
            .unwrap();
        ledger.deposit("A1", Money::from_cents(5000)).unwrap();
        store.save(&ledger).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();

        let accounts = doc.as_array().unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0]["id"], "A1");
        assert_eq!(accounts[0]["holderName"], "Alice");
        assert_eq!(accounts[0]["balance"], 15000);

        let history = accounts[0]["history"].as_array().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0]["kind"], "Deposit");
        assert_eq!(history[0]["amount"], 5000);
        assert!(history[0]["timestamp"].is_string());
    }

    #[test]
    fn test_load_legacy_file_without_history_key() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            r#"[{"id":"A1","holderName":"Alice","balance":100}]"#,
        )
        .unwrap();

        let ledger = store.load().unwrap();
        assert!(ledger.history("A1").unwrap().is_empty());
    }
}
