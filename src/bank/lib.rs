pub mod activity_log;
pub mod ids;
pub mod models;
mod money;
pub mod persistence;
pub mod reports;
mod result;
pub mod services;

pub use money::{Money, MoneyError};
pub use result::Result;

use activity_log::ActivityLog;
use persistence::Database;

pub fn build_account_service(
    database: Database,
    activity_log: ActivityLog,
) -> services::AccountService {
    let transaction_service = services::TransactionService::new(database, activity_log);
    let account_service = services::AccountService::new(transaction_service);

    return account_service;
}
