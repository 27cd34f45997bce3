use super::{Report, Totals};

use crate::models::TransactionRecord;
use crate::{Money, Result};

use std::fmt;

use chrono::NaiveDate;

/// Transactions that happened on one calendar day, newest first by insertion
#[derive(Debug, PartialEq)]
pub struct DailyTransactionReport {
    date: NaiveDate,
    lines: Vec<TransactionRecord>,
    totals: Totals,
}

impl DailyTransactionReport {
    pub fn build(records: &[TransactionRecord], date: NaiveDate) -> Result<Self> {
        let mut lines: Vec<TransactionRecord> = records
            .iter()
            .filter(|record| record.transaction_date.date() == date)
            .cloned()
            .collect();

        lines.sort_by(|a, b| b.id.cmp(&a.id));

        let mut totals = Totals::default();
        for line in &lines {
            totals.add(line)?;
        }

        return Ok(Self {
            date,
            lines,
            totals,
        });
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn credits(&self) -> Money {
        self.totals.credits
    }

    pub fn debits(&self) -> Money {
        self.totals.debits
    }
}

impl Report for DailyTransactionReport {
    type Row = TransactionRecord;

    fn title(&self) -> &'static str {
        "Daily Transactions"
    }

    fn rows(&self) -> &[TransactionRecord] {
        &self.lines
    }
}

impl fmt::Display for DailyTransactionReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Date: {}", self.date.format("%Y-%m-%d"))?;
        writeln!(
            f,
            "Transactions: {} | Credits: ${} | Debits: ${}",
            self.totals.count, self.totals.credits, self.totals.debits
        )?;

        for line in &self.lines {
            writeln!(f, "{line}")?;
        }

        Ok(())
    }
}
