//! Transaction model
//!
//! Represents a single ledger event: a deposit into or a withdrawal from one
//! account. A transfer between accounts is recorded as two independent
//! transactions, a withdrawal on the source and a deposit on the target.

use chrono::{NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Timestamp format used in ledger files and terminal output
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Kind of ledger event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Funds added to the account
    Deposit,
    /// Funds removed from the account
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => write!(f, "Deposit"),
            Self::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

/// A single entry in an account's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// What happened to the balance
    pub kind: TransactionKind,

    /// The amount moved, always positive
    pub amount: Money,

    /// When the ledger committed the mutation, at second granularity
    #[serde(with = "timestamp")]
    pub timestamp: NaiveDateTime,
}

impl Transaction {
    /// Record a ledger event stamped with the current time
    pub(crate) fn record(kind: TransactionKind, amount: Money) -> Self {
        Self {
            kind,
            amount,
            timestamp: now_to_seconds(),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.kind,
            self.amount
        )
    }
}

/// Current UTC time truncated to whole seconds, so in-memory timestamps
/// round-trip exactly through the serialized form.
fn now_to_seconds() -> NaiveDateTime {
    let now = Utc::now().naive_utc();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Serde codec for the `YYYY-MM-DD HH:MM:SS` timestamp strings in ledger files
mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
