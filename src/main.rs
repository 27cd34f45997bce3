mod config;
mod writer;

use bank::activity_log::ActivityLog;
use bank::ids::AccountId;
use bank::models::AccountType;
use bank::persistence::Database;
use bank::reports::{AccountActivityReport, AccountSummaryReport, DailyTransactionReport, Report};
use bank::services::AccountService;
use bank::{Money, Result};

use chrono::Local;

use config::{ReportFormat, Settings};

fn main() -> Result {
    config::configure_app()?;

    let settings = Settings::from_env()?;

    log::debug!("Application configured with {settings:?}. Opening ledger...");

    let database = match &settings.database_path {
        Some(path) => Database::open(path)?,
        None => Database::open_in_memory()?,
    };
    let activity_log = ActivityLog::new(settings.activity_log_path.clone());

    let mut bank = bank::build_account_service(database, activity_log);

    create_accounts(&mut bank)?;

    perform_transactions(&mut bank)?;

    log::debug!("Transactions complete. Beginning reports...");

    report_to_std_out(&bank, settings.report_format)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

fn create_accounts(bank: &mut AccountService) -> Result {
    println!("Creating test accounts...");

    let accounts = [
        (AccountType::Savings, "SAV001", "5000.00"),
        (AccountType::Checking, "CHK001", "1000.00"),
        (AccountType::Savings, "SAV002", "500.00"),
    ];

    for (account_type, id, initial_balance) in accounts {
        let account = bank.create_account(
            account_type,
            AccountId::from(id),
            Money::parse(initial_balance)?,
        )?;

        log::debug!("Created account: {account:?}");
    }

    Ok(())
}

fn perform_transactions(bank: &mut AccountService) -> Result {
    println!("\nPerforming test transactions...");

    bank.deposit(&AccountId::from("CHK001"), Money::parse("2000.00")?)?;
    bank.withdraw(&AccountId::from("SAV002"), Money::parse("100.00")?)?;
    bank.transfer(
        &AccountId::from("SAV001"),
        &AccountId::from("CHK001"),
        Money::parse("1000.00")?,
    )?;

    Ok(())
}

/// Build the three reports from current state and print them
fn report_to_std_out(bank: &AccountService, format: ReportFormat) -> Result {
    let accounts = bank.accounts();
    let transactions = bank.get_all_transactions()?;
    let today = Local::now().date_naive();

    print_report(&AccountSummaryReport::build(accounts.iter().copied()), format)?;
    print_report(&DailyTransactionReport::build(&transactions, today)?, format)?;
    print_report(
        &AccountActivityReport::build(accounts.iter().copied(), &transactions)?,
        format,
    )?;

    Ok(())
}

fn print_report<R: Report>(report: &R, format: ReportFormat) -> Result {
    println!("\n=== {} ===", report.title());

    match format {
        ReportFormat::Text => print!("{report}"),
        ReportFormat::Csv => {
            let output = writer::write_rows(report.rows())?;
            log::debug!("Serialized {} rows", report.rows().len());
            print!("{output}");
        }
    }

    Ok(())
}
