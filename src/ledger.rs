//! Ledger engine
//!
//! Owns the full account set and applies every balance mutation. Each
//! operation validates completely before touching any state: amount sign
//! first, then account existence, then sufficiency. Transfer checks both
//! accounts and the source balance before either leg is applied, so a caller
//! can never observe the source debited without the target credited.

use std::collections::HashMap;

use crate::error::{PassbookError, PassbookResult};
use crate::models::{Account, Money, Transaction};

/// In-memory account ledger
///
/// Constructed empty for a first run, or from persisted accounts via
/// [`Ledger::from_accounts`]. The engine is the only mutator of the account
/// set; the storage layer only ever sees it as a snapshot.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: HashMap<String, Account>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from previously persisted accounts
    ///
    /// A file the engine could not have produced is rejected as corrupt:
    /// duplicate ids and negative balances both violate engine invariants.
    pub fn from_accounts(accounts: Vec<Account>) -> PassbookResult<Self> {
        let mut map = HashMap::with_capacity(accounts.len());
        for account in accounts {
            if account.balance.is_negative() {
                return Err(PassbookError::CorruptData(format!(
                    "account '{}' has a negative balance",
                    account.id
                )));
            }
            let id = account.id.clone();
            if map.insert(id.clone(), account).is_some() {
                return Err(PassbookError::CorruptData(format!(
                    "duplicate account id '{}'",
                    id
                )));
            }
        }
        Ok(Self { accounts: map })
    }

    /// Open a new account with an initial balance
    ///
    /// No transaction is recorded for the opening balance.
    pub fn open_account(
        &mut self,
        id: &str,
        holder_name: &str,
        initial_balance: Money,
    ) -> PassbookResult<&Account> {
        if initial_balance.is_negative() {
            return Err(PassbookError::invalid_amount(initial_balance));
        }
        if self.accounts.contains_key(id) {
            return Err(PassbookError::duplicate_account(id));
        }

        Ok(self
            .accounts
            .entry(id.to_string())
            .or_insert_with(|| Account::new(id, holder_name, initial_balance)))
    }

    /// Add funds to an account, returning the new balance
    pub fn deposit(&mut self, id: &str, amount: Money) -> PassbookResult<Money> {
        check_positive(amount)?;
        let account = self.account_mut(id)?;
        Ok(account.credit(amount))
    }

    /// Remove funds from an account, returning the new balance
    pub fn withdraw(&mut self, id: &str, amount: Money) -> PassbookResult<Money> {
        check_positive(amount)?;
        let account = self.account_mut(id)?;
        if amount > account.balance {
            return Err(PassbookError::insufficient_funds(
                id,
                amount,
                account.balance,
            ));
        }
        Ok(account.debit(amount))
    }

    /// Move funds between two accounts in one atomic step
    ///
    /// Both accounts must exist and the source must cover the amount before
    /// either balance changes; the two apply steps below cannot fail once
    /// validation has passed. Transferring an account to itself is allowed
    /// and nets to an unchanged balance with two history records.
    ///
    /// Returns the new (source, target) balances.
    pub fn transfer(
        &mut self,
        source_id: &str,
        target_id: &str,
        amount: Money,
    ) -> PassbookResult<(Money, Money)> {
        check_positive(amount)?;
        let source_balance = self.lookup(source_id)?.balance;
        self.lookup(target_id)?;
        if amount > source_balance {
            return Err(PassbookError::insufficient_funds(
                source_id,
                amount,
                source_balance,
            ));
        }

        self.account_mut(source_id)?.debit(amount);
        self.account_mut(target_id)?.credit(amount);

        let new_source = self.lookup(source_id)?.balance;
        let new_target = self.lookup(target_id)?.balance;
        Ok((new_source, new_target))
    }

    /// Snapshot of an account's transaction history
    ///
    /// The returned records are clones; mutating them cannot affect the
    /// ledger.
    pub fn history(&self, id: &str) -> PassbookResult<Vec<Transaction>> {
        Ok(self.lookup(id)?.history.clone())
    }

    /// Look up an account by id
    pub fn lookup(&self, id: &str) -> PassbookResult<&Account> {
        self.accounts
            .get(id)
            .ok_or_else(|| PassbookError::account_not_found(id))
    }

    /// All accounts, sorted by id for stable listing and serialization
    pub fn accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<_> = self.accounts.values().collect();
        accounts.sort_by(|a, b| a.id.cmp(&b.id));
        accounts
    }

    /// Number of open accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Check whether the ledger has no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn account_mut(&mut self, id: &str) -> PassbookResult<&mut Account> {
        self.accounts
            .get_mut(id)
            .ok_or_else(|| PassbookError::account_not_found(id))
    }
}

fn check_positive(amount: Money) -> PassbookResult<()> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(PassbookError::invalid_amount(amount))
    }
}
