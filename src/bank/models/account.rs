use super::AccountType;

use crate::ids::AccountId;
use crate::Money;

use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Account {
    pub id: AccountId,
    pub account_type: AccountType,
    pub balance: Money,
}

impl Account {
    pub fn new(id: AccountId, account_type: AccountType, balance: Money) -> Self {
        return Self {
            id,
            account_type,
            balance,
        };
    }
}
