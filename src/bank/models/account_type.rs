use std::fmt;

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    Savings,
    Checking,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AccountType::Savings => write!(f, "SAVINGS"),
            AccountType::Checking => write!(f, "CHECKING"),
        }
    }
}
