mod account_service;
mod transaction_service;

pub use account_service::{AccountDataStore, AccountService, AccountServiceError};
pub use transaction_service::{TransactionService, TransactionServiceError};
