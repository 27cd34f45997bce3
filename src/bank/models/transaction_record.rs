use crate::ids::AccountId;
use crate::Money;

use std::fmt;

use chrono::NaiveDateTime;

use serde::Serialize;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One balance-changing event as stored in the `transactions` table. Credits are positive,
/// debits negative.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub id: i64,
    pub account_id: AccountId,
    pub amount: Money,
    pub transaction_date: NaiveDateTime,
}

impl TransactionRecord {
    pub fn is_credit(&self) -> bool {
        self.amount.is_positive()
    }
}

/// `timestamp,account,amount`
impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(
            f,
            "{},{},{}",
            self.transaction_date.format(TIMESTAMP_FORMAT),
            self.account_id,
            self.amount
        );
    }
}
