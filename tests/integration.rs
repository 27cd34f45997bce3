use bank::activity_log::ActivityLog;
use bank::ids::AccountId;
use bank::models::AccountType;
use bank::persistence::Database;
use bank::reports::{AccountActivityReport, AccountSummaryReport, DailyTransactionReport, Report};
use bank::services::{AccountService, AccountServiceError};
use bank::Money;

use std::fs;

use rust_decimal_macros::dec;
use tempfile::TempDir;

fn id(id: &str) -> AccountId {
    AccountId::from(id)
}

fn open_demo_accounts(dir: &TempDir) -> AccountService {
    let mut bank = bank::build_account_service(
        Database::open(dir.path().join("bank.db")).unwrap(),
        ActivityLog::new(dir.path().join("activity.log")),
    );

    bank.create_account(AccountType::Savings, id("SAV001"), Money(dec!(5000.00)))
        .unwrap();
    bank.create_account(AccountType::Checking, id("CHK001"), Money(dec!(1000.00)))
        .unwrap();
    bank.create_account(AccountType::Savings, id("SAV002"), Money(dec!(500.00)))
        .unwrap();

    bank
}

#[test]
fn demonstration_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let mut bank = open_demo_accounts(&dir);

    assert_eq!(
        bank.deposit(&id("CHK001"), Money(dec!(2000.00))).unwrap(),
        Money(dec!(3000.00))
    );
    assert_eq!(
        bank.withdraw(&id("SAV002"), Money(dec!(100.00))).unwrap(),
        Money(dec!(400.00))
    );
    assert_eq!(
        bank.transfer(&id("SAV001"), &id("CHK001"), Money(dec!(1000.00)))
            .unwrap(),
        (Money(dec!(4000.00)), Money(dec!(4000.00)))
    );

    assert_eq!(bank.get_balance(&id("SAV001")).unwrap(), Money(dec!(4000.00)));
    assert_eq!(bank.get_balance(&id("CHK001")).unwrap(), Money(dec!(4000.00)));
    assert_eq!(bank.get_balance(&id("SAV002")).unwrap(), Money(dec!(400.00)));

    let chk_history = bank.get_transaction_history(&id("CHK001")).unwrap();
    assert_eq!(
        chk_history.iter().map(|r| r.amount).collect::<Vec<_>>(),
        vec![Money(dec!(1000)), Money(dec!(2000))]
    );

    let all = bank.get_all_transactions().unwrap();
    assert_eq!(all.len(), 4);
    assert!(all[0].to_string().ends_with(",CHK001,1000.00"));
    assert!(all[1].to_string().ends_with(",SAV001,-1000.00"));

    let activity = fs::read_to_string(dir.path().join("activity.log")).unwrap();
    let lines: Vec<&str> = activity.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].ends_with("DEPOSIT: Account CHK001 - $2000.00"));
    assert!(lines[1].ends_with("WITHDRAWAL: Account SAV002 - $100.00"));
    assert!(lines[4].ends_with("TRANSFER: From SAV001 to CHK001 - $1000.00"));

    let summary = AccountSummaryReport::build(bank.accounts());
    assert_eq!(
        summary.to_string(),
        "Account: CHK001 | Type: CHECKING | Balance: $4000.00\n\
         Account: SAV001 | Type: SAVINGS | Balance: $4000.00\n\
         Account: SAV002 | Type: SAVINGS | Balance: $400.00\n"
    );

    let daily = DailyTransactionReport::build(&all, all[0].transaction_date.date()).unwrap();
    assert_eq!(daily.rows().len(), 4);
    assert_eq!(daily.credits(), Money(dec!(3000)));
    assert_eq!(daily.debits(), Money(dec!(1100)));

    let activity = AccountActivityReport::build(bank.accounts(), &all).unwrap();
    let chk = &activity.rows()[0];
    assert_eq!(chk.account, id("CHK001"));
    assert_eq!(chk.transactions, 2);
    assert_eq!(chk.volume, Money(dec!(3000)));
}

#[test]
fn overdrawn_withdrawal_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut bank = open_demo_accounts(&dir);

    let err = bank
        .withdraw(&id("SAV002"), Money(dec!(1000.00)))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<AccountServiceError>(),
        Some(AccountServiceError::InsufficientFunds(_, _, _))
    ));
    assert_eq!(bank.get_balance(&id("SAV002")).unwrap(), Money(dec!(500.00)));
    assert!(bank
        .get_transaction_history(&id("SAV002"))
        .unwrap()
        .is_empty());
}

#[test]
fn history_survives_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut bank = open_demo_accounts(&dir);
        bank.deposit(&id("CHK001"), Money(dec!(2000.00))).unwrap();
    }

    let bank = open_demo_accounts(&dir);
    let history = bank.get_transaction_history(&id("CHK001")).unwrap();

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].amount, Money(dec!(2000.00)));
}
