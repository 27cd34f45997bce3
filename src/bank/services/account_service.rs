use super::TransactionService;

use crate::ids::AccountId;
use crate::models::{Account, AccountType, TransactionRecord};
use crate::{Money, Result};

use std::collections::HashMap;

use thiserror::Error;

pub type AccountDataStore = HashMap<AccountId, Account>;

#[derive(Error, Debug)]
pub enum AccountServiceError {
    #[error("Account already exists: {0}")]
    DuplicateAccount(AccountId),

    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Invalid {0} amount: {1}")]
    InvalidAmount(&'static str, Money),

    #[error("Insufficient funds in account {0}: balance {1}, requested {2}")]
    InsufficientFunds(AccountId, Money, Money),

    #[error("Cannot transfer from account {0} to itself")]
    SameAccountTransfer(AccountId),
}

/// The ledger: in-memory balances for every open account.
///
/// Each balance-changing operation validates first, computes the new balance, hands the change to
/// the [`TransactionService`] and only then commits the balance. A failed write leaves every
/// balance as it was.
pub struct AccountService {
    repository: AccountDataStore,
    transaction_service: TransactionService,
}

impl AccountService {
    pub fn new(transaction_service: TransactionService) -> Self {
        return Self {
            repository: AccountDataStore::new(),
            transaction_service,
        };
    }

    pub fn create_account(
        &mut self,
        account_type: AccountType,
        id: AccountId,
        initial_balance: Money,
    ) -> Result<Account> {
        if self.repository.contains_key(&id) {
            Err(AccountServiceError::DuplicateAccount(id.clone()))?
        }

        if initial_balance.is_negative() {
            Err(AccountServiceError::InvalidAmount("opening", initial_balance))?
        }

        let account = Account::new(id.clone(), account_type, initial_balance);

        log::debug!("Opening account: {account:?}");

        self.repository.insert(id, account.clone());

        return Ok(account);
    }

    pub fn deposit(&mut self, id: &AccountId, amount: Money) -> Result<Money> {
        let account = self.find(id)?;

        if !amount.is_positive() {
            Err(AccountServiceError::InvalidAmount("deposit", amount))?
        }

        let mut balance = account.balance;
        balance.add(&amount)?;

        self.transaction_service.record_transaction(id, amount)?;

        self.find_mut(id)?.balance = balance;

        log::debug!("Deposited {amount} into {id}, balance now {balance}");

        return Ok(balance);
    }

    pub fn withdraw(&mut self, id: &AccountId, amount: Money) -> Result<Money> {
        let account = self.find(id)?;
        let balance = debited_balance(account, amount, "withdrawal")?;

        self.transaction_service
            .record_transaction(id, amount.negate())?;

        self.find_mut(id)?.balance = balance;

        log::debug!("Withdrew {amount} from {id}, balance now {balance}");

        return Ok(balance);
    }

    /// Moves `amount` from `from` to `to`, returning both new balances. Both rows are written in
    /// one database transaction and both balances change together, or nothing changes.
    pub fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Money,
    ) -> Result<(Money, Money)> {
        let source = self.find(from)?;
        let destination = self.find(to)?;

        if from == to {
            Err(AccountServiceError::SameAccountTransfer(from.clone()))?
        }

        let from_balance = debited_balance(source, amount, "transfer")?;

        let mut to_balance = destination.balance;
        to_balance.add(&amount)?;

        self.transaction_service.record_transfer(from, to, amount)?;

        self.find_mut(from)?.balance = from_balance;
        self.find_mut(to)?.balance = to_balance;

        log::debug!("Transferred {amount} from {from} to {to}");

        return Ok((from_balance, to_balance));
    }

    pub fn get_balance(&self, id: &AccountId) -> Result<Money> {
        return Ok(self.find(id)?.balance);
    }

    pub fn get_account(&self, id: &AccountId) -> Result<&Account> {
        return self.find(id);
    }

    /// Every open account, ordered by id
    pub fn accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.repository.values().collect();
        accounts.sort_by(|a, b| a.id.cmp(&b.id));

        return accounts;
    }

    /// Records for one account, newest first
    pub fn get_transaction_history(&self, id: &AccountId) -> Result<Vec<TransactionRecord>> {
        self.find(id)?;

        return self.transaction_service.read_history(Some(id));
    }

    /// Records for every account, newest first
    pub fn get_all_transactions(&self) -> Result<Vec<TransactionRecord>> {
        return self.transaction_service.read_history(None);
    }

    pub fn clear_all_transactions(&mut self) -> Result<usize> {
        return self.transaction_service.clear_all_transactions();
    }

    fn find(&self, id: &AccountId) -> Result<&Account> {
        let account = self
            .repository
            .get(id)
            .ok_or_else(|| AccountServiceError::AccountNotFound(id.clone()))?;

        return Ok(account);
    }

    fn find_mut(&mut self, id: &AccountId) -> Result<&mut Account> {
        let account = self
            .repository
            .get_mut(id)
            .ok_or_else(|| AccountServiceError::AccountNotFound(id.clone()))?;

        return Ok(account);
    }
}

/// Balance after taking `amount` out of `account`, without touching it
fn debited_balance(account: &Account, amount: Money, operation: &'static str) -> Result<Money> {
    if !amount.is_positive() {
        Err(AccountServiceError::InvalidAmount(operation, amount))?
    }

    if amount > account.balance {
        Err(AccountServiceError::InsufficientFunds(
            account.id.clone(),
            account.balance,
            amount,
        ))?
    }

    let mut balance = account.balance;
    balance.sub(&amount)?;

    Ok(balance)
}
