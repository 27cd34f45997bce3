mod account;
mod account_type;
mod transaction_record;

pub use account::Account;
pub use account_type::AccountType;
pub use transaction_record::{TransactionRecord, TIMESTAMP_FORMAT};
