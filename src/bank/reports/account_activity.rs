use super::{Report, Totals};

use crate::ids::AccountId;
use crate::models::{Account, TransactionRecord};
use crate::{Money, Result};

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AccountActivityLine {
    pub account: AccountId,
    pub transactions: usize,
    pub credits: Money,
    pub debits: Money,
    pub volume: Money,
}

/// Transaction count and volume per account. Accounts without activity still get a line.
#[derive(Debug, Default, PartialEq)]
pub struct AccountActivityReport {
    lines: Vec<AccountActivityLine>,
}

impl AccountActivityReport {
    pub fn build<'a>(
        accounts: impl IntoIterator<Item = &'a Account>,
        records: &[TransactionRecord],
    ) -> Result<Self> {
        let mut totals: BTreeMap<AccountId, Totals> = accounts
            .into_iter()
            .map(|account| (account.id.clone(), Totals::default()))
            .collect();

        for record in records {
            totals
                .entry(record.account_id.clone())
                .or_default()
                .add(record)?;
        }

        let lines = totals
            .into_iter()
            .map(|(account, totals)| -> Result<AccountActivityLine> {
                Ok(AccountActivityLine {
                    account,
                    transactions: totals.count,
                    credits: totals.credits,
                    debits: totals.debits,
                    volume: totals.volume()?,
                })
            })
            .collect::<Result<Vec<AccountActivityLine>>>()?;

        return Ok(Self { lines });
    }
}

impl Report for AccountActivityReport {
    type Row = AccountActivityLine;

    fn title(&self) -> &'static str {
        "Account Activity"
    }

    fn rows(&self) -> &[AccountActivityLine] {
        &self.lines
    }
}

impl fmt::Display for AccountActivityReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.lines.is_empty() {
            return writeln!(f, "No account activity");
        }

        for line in &self.lines {
            writeln!(
                f,
                "Account: {} | Transactions: {} | Credits: ${} | Debits: ${} | Volume: ${}",
                line.account, line.transactions, line.credits, line.debits, line.volume
            )?;
        }

        Ok(())
    }
}
