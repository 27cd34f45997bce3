//! SQLite-backed store for the `transactions` table.
use crate::ids::AccountId;
use crate::models::TransactionRecord;
use crate::{Money, Result};

use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDateTime;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, Row};

use rust_decimal::Decimal;

use thiserror::Error;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS transactions (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    account_id       TEXT NOT NULL,
    amount           TEXT NOT NULL,
    transaction_date TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);
CREATE INDEX IF NOT EXISTS idx_transactions_account_id ON transactions (account_id);
"#;

const INSERT_TRANSACTION: &str =
    "INSERT INTO transactions (account_id, amount, transaction_date) VALUES (?1, ?2, ?3)";

// Row ids follow insertion order even when the wall clock steps backwards
const SELECT_ALL: &str =
    "SELECT id, account_id, amount, transaction_date FROM transactions ORDER BY id DESC";

const SELECT_FOR_ACCOUNT: &str = "SELECT id, account_id, amount, transaction_date \
     FROM transactions WHERE account_id = ?1 ORDER BY id DESC";

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Couldn't open database at {0}: {1}")]
    Open(String, #[source] rusqlite::Error),

    #[error("Database statement failed: {0}")]
    Statement(#[source] rusqlite::Error),

    #[error("Invalid row in transactions table: {0}")]
    InvalidRow(String),
}

impl From<rusqlite::Error> for DatabaseError {
    fn from(e: rusqlite::Error) -> Self {
        match e {
            rusqlite::Error::FromSqlConversionFailure(..)
            | rusqlite::Error::InvalidColumnType(..) => DatabaseError::InvalidRow(e.to_string()),
            e => DatabaseError::Statement(e),
        }
    }
}

/// Handle to the relational store. Constructed explicitly and handed to whoever records
/// transactions; nothing global.
#[derive(Debug)]
pub struct Database {
    connection: Connection,
}

impl Database {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        log::debug!("Opening database at {path:?}");

        let connection = Connection::open(path)
            .map_err(|e| DatabaseError::Open(path.display().to_string(), e))?;

        return Self::with_connection(connection);
    }

    pub fn open_in_memory() -> Result<Self> {
        log::debug!("Opening in-memory database");

        let connection = Connection::open_in_memory()
            .map_err(|e| DatabaseError::Open(":memory:".to_string(), e))?;

        return Self::with_connection(connection);
    }

    fn with_connection(connection: Connection) -> Result<Self> {
        connection
            .execute_batch(SCHEMA)
            .map_err(DatabaseError::from)?;

        return Ok(Self { connection });
    }

    /// Inserts every entry inside one SQL transaction, all stamped with `at`. Either every row is
    /// written or none is.
    pub fn insert_transactions(
        &mut self,
        entries: &[(&AccountId, Money)],
        at: NaiveDateTime,
    ) -> Result<Vec<TransactionRecord>> {
        let records =
            insert_all(&mut self.connection, entries, at).map_err(DatabaseError::from)?;

        log::debug!("Inserted {} transaction rows", records.len());

        return Ok(records);
    }

    /// Newest first by insertion, optionally restricted to one account
    pub fn select_transactions(
        &self,
        account_id: Option<&AccountId>,
    ) -> Result<Vec<TransactionRecord>> {
        let records = match account_id {
            Some(account_id) => select(
                &self.connection,
                SELECT_FOR_ACCOUNT,
                params![account_id.as_str()],
            ),
            None => select(&self.connection, SELECT_ALL, params![]),
        }
        .map_err(DatabaseError::from)?;

        return Ok(records);
    }

    pub fn delete_transactions(&mut self) -> Result<usize> {
        let deleted = self
            .connection
            .execute("DELETE FROM transactions", [])
            .map_err(DatabaseError::from)?;

        return Ok(deleted);
    }
}

fn insert_all(
    connection: &mut Connection,
    entries: &[(&AccountId, Money)],
    at: NaiveDateTime,
) -> rusqlite::Result<Vec<TransactionRecord>> {
    let tx = connection.transaction()?;
    let mut records = Vec::with_capacity(entries.len());

    {
        let mut stmt = tx.prepare(INSERT_TRANSACTION)?;

        for (account_id, amount) in entries {
            stmt.execute(params![account_id.as_str(), amount, at])?;

            records.push(TransactionRecord {
                id: tx.last_insert_rowid(),
                account_id: (*account_id).clone(),
                amount: *amount,
                transaction_date: at,
            });
        }
    }

    tx.commit()?;

    Ok(records)
}

fn select(
    connection: &Connection,
    query: &str,
    params: &[&dyn ToSql],
) -> rusqlite::Result<Vec<TransactionRecord>> {
    let mut stmt = connection.prepare(query)?;
    let rows = stmt.query_map(params, record_from_row)?;

    rows.collect()
}

fn record_from_row(row: &Row) -> rusqlite::Result<TransactionRecord> {
    Ok(TransactionRecord {
        id: row.get("id")?,
        account_id: AccountId(row.get("account_id")?),
        amount: row.get("amount")?,
        transaction_date: row.get("transaction_date")?,
    })
}

/// Amounts are stored as decimal text so no precision is lost to floating point
impl ToSql for Money {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0.to_string()))
    }
}

impl FromSql for Money {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Integer(i) => Ok(Money(Decimal::from(i))),
            ValueRef::Real(f) => Decimal::from_f64_retain(f)
                .map(Money)
                .ok_or(FromSqlError::InvalidType),
            _ => {
                let text = value.as_str()?;
                Decimal::from_str(text)
                    .map(Money)
                    .map_err(|e| FromSqlError::Other(Box::new(e)))
            }
        }
    }
}
