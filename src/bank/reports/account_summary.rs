use super::Report;

use crate::ids::AccountId;
use crate::models::{Account, AccountType};
use crate::Money;

use std::fmt;

use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AccountSummaryLine {
    pub account: AccountId,

    #[serde(rename = "type")]
    pub account_type: AccountType,

    pub balance: Money,
}

/// One line per account, ordered by id
#[derive(Debug, Default, PartialEq)]
pub struct AccountSummaryReport {
    lines: Vec<AccountSummaryLine>,
}

impl AccountSummaryReport {
    pub fn build<'a>(accounts: impl IntoIterator<Item = &'a Account>) -> Self {
        let mut lines: Vec<AccountSummaryLine> = accounts
            .into_iter()
            .map(|account| AccountSummaryLine {
                account: account.id.clone(),
                account_type: account.account_type,
                balance: account.balance,
            })
            .collect();

        lines.sort_by(|a, b| a.account.cmp(&b.account));

        return Self { lines };
    }
}

impl Report for AccountSummaryReport {
    type Row = AccountSummaryLine;

    fn title(&self) -> &'static str {
        "Account Summary"
    }

    fn rows(&self) -> &[AccountSummaryLine] {
        &self.lines
    }
}

impl fmt::Display for AccountSummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.lines.is_empty() {
            return writeln!(f, "No accounts");
        }

        for line in &self.lines {
            writeln!(
                f,
                "Account: {} | Type: {} | Balance: ${}",
                line.account, line.account_type, line.balance
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn build_sorts_by_id() {
        let accounts = vec![
            Account::new(
                AccountId::from("SAV001"),
                AccountType::Savings,
                Money(dec!(4000)),
            ),
            Account::new(
                AccountId::from("CHK001"),
                AccountType::Checking,
                Money(dec!(4000)),
            ),
        ];

        let report = AccountSummaryReport::build(&accounts);

        assert_eq!(
            report
                .rows()
                .iter()
                .map(|l| l.account.as_str())
                .collect::<Vec<_>>(),
            vec!["CHK001", "SAV001"]
        );
        assert_eq!(
            report.to_string(),
            "Account: CHK001 | Type: CHECKING | Balance: $4000.00\n\
             Account: SAV001 | Type: SAVINGS | Balance: $4000.00\n"
        );
    }

    #[test]
    fn empty() {
        let report = AccountSummaryReport::build(&[]);

        assert!(report.rows().is_empty());
        assert_eq!(report.to_string(), "No accounts\n");
    }
}
