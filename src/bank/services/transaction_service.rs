use crate::activity_log::{ActivityEntry, ActivityLog};
use crate::ids::AccountId;
use crate::models::TransactionRecord;
use crate::persistence::Database;
use crate::{Money, Result};

use chrono::{Local, NaiveDateTime};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransactionServiceError {
    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Records balance changes durably and mirrors them to the activity log
pub struct TransactionService {
    database: Database,
    activity_log: ActivityLog,
}

impl TransactionService {
    pub fn new(database: Database, activity_log: ActivityLog) -> Self {
        return Self {
            database,
            activity_log,
        };
    }

    /// Writes one row. Fails if the row could not be stored; activity log failures are only
    /// reported.
    pub fn record_transaction(
        &mut self,
        account_id: &AccountId,
        amount: Money,
    ) -> Result<TransactionRecord> {
        let at = now();

        let record = self
            .database
            .insert_transactions(&[(account_id, amount)], at)?
            .pop()
            .ok_or_else(|| {
                TransactionServiceError::Unknown(format!(
                    "No row returned after inserting transaction for {account_id}"
                ))
            })?;

        log::debug!("Recorded transaction: {record:?}");

        self.log_activity(ActivityEntry::for_signed_amount(
            account_id.clone(),
            amount,
            at,
        ));

        return Ok(record);
    }

    /// Writes the debit on `from` and the credit on `to` in one database transaction, then logs
    /// both legs and the transfer itself.
    pub fn record_transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Money,
    ) -> Result<(TransactionRecord, TransactionRecord)> {
        let at = now();

        let mut records = self
            .database
            .insert_transactions(&[(from, amount.negate()), (to, amount)], at)?
            .into_iter();

        let (debit, credit) = match (records.next(), records.next()) {
            (Some(debit), Some(credit)) => (debit, credit),
            _ => {
                let msg = format!("Transfer from {from} to {to} did not return both rows");
                log::error!("{}", msg);
                Err(TransactionServiceError::Unknown(msg))?
            }
        };

        log::debug!("Recorded transfer legs: {debit:?}, {credit:?}");

        self.log_activity(ActivityEntry::for_signed_amount(
            from.clone(),
            debit.amount,
            at,
        ));
        self.log_activity(ActivityEntry::for_signed_amount(
            to.clone(),
            credit.amount,
            at,
        ));
        self.log_transfer_at(from, to, amount, at);

        return Ok((debit, credit));
    }

    /// Activity log only; transfers reach the database as two plain rows
    pub fn log_transfer(&self, from: &AccountId, to: &AccountId, amount: Money) {
        self.log_transfer_at(from, to, amount, now());
    }

    /// Newest first
    pub fn read_history(&self, account_id: Option<&AccountId>) -> Result<Vec<TransactionRecord>> {
        return self.database.select_transactions(account_id);
    }

    pub fn clear_all_transactions(&mut self) -> Result<usize> {
        let deleted = self.database.delete_transactions()?;

        log::debug!("Cleared {deleted} transaction rows");

        return Ok(deleted);
    }

    fn log_transfer_at(&self, from: &AccountId, to: &AccountId, amount: Money, at: NaiveDateTime) {
        self.log_activity(ActivityEntry::Transfer {
            from: from.clone(),
            to: to.clone(),
            amount,
            at,
        });
    }

    fn log_activity(&self, entry: ActivityEntry) {
        if let Err(e) = self.activity_log.append(&entry) {
            log::error!("Failed to log activity to file: {e}");
        }
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
