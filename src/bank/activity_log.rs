use crate::ids::AccountId;
use crate::models::TIMESTAMP_FORMAT;
use crate::{Money, Result};

use std::{
    fmt,
    fs::OpenOptions,
    io::{self, Write},
    path::PathBuf,
};

use chrono::NaiveDateTime;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActivityLogError {
    #[error("Couldn't write to activity log {0}: {1}")]
    Write(String, #[source] io::Error),
}

/// A human-readable line for the activity log
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityEntry {
    Deposit {
        account_id: AccountId,
        amount: Money,
        at: NaiveDateTime,
    },
    Withdrawal {
        account_id: AccountId,
        amount: Money,
        at: NaiveDateTime,
    },
    Transfer {
        from: AccountId,
        to: AccountId,
        amount: Money,
        at: NaiveDateTime,
    },
}

impl ActivityEntry {
    /// Picks deposit or withdrawal from the sign of a stored amount
    pub fn for_signed_amount(account_id: AccountId, amount: Money, at: NaiveDateTime) -> Self {
        if amount.is_positive() {
            ActivityEntry::Deposit {
                account_id,
                amount,
                at,
            }
        } else {
            ActivityEntry::Withdrawal {
                account_id,
                amount: amount.abs(),
                at,
            }
        }
    }
}

impl fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ActivityEntry::Deposit {
                account_id,
                amount,
                at,
            } => write!(
                f,
                "[{}] DEPOSIT: Account {account_id} - ${amount}",
                at.format(TIMESTAMP_FORMAT)
            ),
            ActivityEntry::Withdrawal {
                account_id,
                amount,
                at,
            } => write!(
                f,
                "[{}] WITHDRAWAL: Account {account_id} - ${amount}",
                at.format(TIMESTAMP_FORMAT)
            ),
            ActivityEntry::Transfer {
                from,
                to,
                amount,
                at,
            } => write!(
                f,
                "[{}] TRANSFER: From {from} to {to} - ${amount}",
                at.format(TIMESTAMP_FORMAT)
            ),
        }
    }
}

/// Append-only, line-oriented activity file
#[derive(Debug, Clone)]
pub struct ActivityLog {
    path: PathBuf,
}

impl ActivityLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        return Self { path: path.into() };
    }

    pub fn append(&self, entry: &ActivityEntry) -> Result {
        let to_error = |e: io::Error| ActivityLogError::Write(self.path.display().to_string(), e);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(to_error)?;

        writeln!(file, "{entry}").map_err(to_error)?;

        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;

    fn some_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap()
    }

    #[test]
    fn for_signed_amount() {
        let entry = ActivityEntry::for_signed_amount(
            AccountId::from("SAV002"),
            Money(dec!(-100)),
            some_time(),
        );

        assert_eq!(
            entry,
            ActivityEntry::Withdrawal {
                account_id: AccountId::from("SAV002"),
                amount: Money(dec!(100)),
                at: some_time(),
            }
        );
    }

    #[test]
    fn display() {
        let deposit = ActivityEntry::for_signed_amount(
            AccountId::from("CHK001"),
            Money(dec!(2000)),
            some_time(),
        );
        let transfer = ActivityEntry::Transfer {
            from: AccountId::from("SAV001"),
            to: AccountId::from("CHK001"),
            amount: Money(dec!(1000)),
            at: some_time(),
        };

        assert_eq!(
            deposit.to_string(),
            "[2026-10-18 14:05:09] DEPOSIT: Account CHK001 - $2000.00"
        );
        assert_eq!(
            transfer.to_string(),
            "[2026-10-18 14:05:09] TRANSFER: From SAV001 to CHK001 - $1000.00"
        );
    }

    #[test]
    fn append_creates_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("activity.log");
        let log = ActivityLog::new(&log_path);

        let entry = ActivityEntry::for_signed_amount(
            AccountId::from("CHK001"),
            Money(dec!(5)),
            some_time(),
        );

        log.append(&entry).unwrap();
        log.append(&entry).unwrap();

        let contents = fs::read_to_string(&log_path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.ends_with('\n'));
    }

    #[test]
    fn append_to_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let log = ActivityLog::new(dir.path());

        let entry = ActivityEntry::for_signed_amount(
            AccountId::from("CHK001"),
            Money(dec!(5)),
            some_time(),
        );

        let err = log.append(&entry).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ActivityLogError>(),
            Some(ActivityLogError::Write(_, _))
        ));
    }
}
