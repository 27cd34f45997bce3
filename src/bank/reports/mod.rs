//! Text and CSV reports built from ledger and recorder state. Building a report never touches
//! the ledger or the database; callers pass in what they read.
mod account_activity;
mod account_summary;
mod daily_transactions;

pub use account_activity::{AccountActivityLine, AccountActivityReport};
pub use account_summary::{AccountSummaryLine, AccountSummaryReport};
pub use daily_transactions::DailyTransactionReport;

use crate::models::TransactionRecord;
use crate::{Money, Result};

use std::fmt;

use serde::Serialize;

/// A report renders as text through `Display` and exposes its rows for CSV output
pub trait Report: fmt::Display {
    type Row: Serialize;

    fn title(&self) -> &'static str;

    fn rows(&self) -> &[Self::Row];
}

/// Running credit and debit sums. Debits are kept as a positive amount.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Totals {
    count: usize,
    credits: Money,
    debits: Money,
}

impl Totals {
    fn add(&mut self, record: &TransactionRecord) -> Result {
        if record.is_credit() {
            self.credits.add(&record.amount)?;
        } else {
            self.debits.add(&record.amount.abs())?;
        }

        self.count += 1;

        Ok(())
    }

    fn volume(&self) -> Result<Money> {
        let mut volume = self.credits;
        volume.add(&self.debits)?;

        Ok(volume)
    }
}
