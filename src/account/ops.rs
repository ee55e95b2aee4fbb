//! Free functions that mutate a supplied [`BankAccount`].
//!
//! Kept separate from the data model so the business rules that change an account are
//! easy to audit in one place, and so the caller must make mutability explicit at the
//! call site.

use rust_decimal::Decimal;

use crate::account::AccountNumber;
use crate::account::AccountStatus;
use crate::account::BankAccount;
use crate::money::Amount;
use crate::money::AmountError;

#[derive(thiserror::Error, Debug)]
pub enum AccountError {
    #[error("can not perform {operation} on account {number}: account is {status}")]
    InvalidState {
        number: AccountNumber,
        status: AccountStatus,
        operation: &'static str,
    },
    #[error(transparent)]
    InvalidAmount(#[from] AmountError),
    #[error("can not withdraw more than {max_withdraw} per transaction, requested {amount} from account {number}")]
    LimitExceeded {
        number: AccountNumber,
        amount: Amount,
        max_withdraw: Decimal,
    },
    #[error("insufficient funds on account {number}: balance {balance}, requested {amount}")]
    InsufficientFunds {
        number: AccountNumber,
        amount: Amount,
        balance: Decimal,
    },
    #[error("overflow while applying {amount} to account {number}")]
    OperationOverflow { number: AccountNumber, amount: Amount },
}

/// Adds `amount` to the balance and awards bonus points per the account's scheme.
///
/// # Errors
///
/// Returns an error if:
/// - The account is not open ([`AccountError::InvalidState`]).
/// - The amount fails the account's money check ([`AccountError::InvalidAmount`]).
/// - Adding `amount` to the balance overflows ([`AccountError::OperationOverflow`]).
pub fn deposit(account: &mut BankAccount, amount: Amount) -> Result<(), AccountError> {
    ensure_open(account, "deposit")?;
    account.checker.check(amount)?;
    account.balance = checked_add_to_balance(account, amount)?;
    account.bonus_points = account.bonus_points.saturating_add(account.scheme.points(amount));
    Ok(())
}

/// Subtracts `amount` from the balance and reverses the bonus points the same amount
/// would have earned, so a deposit followed by an equal withdrawal is an exact inverse.
///
/// # Errors
///
/// Returns an error if:
/// - The account is not open ([`AccountError::InvalidState`]).
/// - The amount fails the account's money check ([`AccountError::InvalidAmount`]).
/// - `amount` exceeds the per-transaction cap ([`AccountError::LimitExceeded`]).
/// - `amount` exceeds the balance ([`AccountError::InsufficientFunds`]).
pub fn withdraw(account: &mut BankAccount, amount: Amount) -> Result<(), AccountError> {
    ensure_open(account, "withdraw")?;
    account.checker.check(amount)?;
    if amount.as_inner() > account.max_withdraw {
        return Err(AccountError::LimitExceeded {
            number: account.number.clone(),
            amount,
            max_withdraw: account.max_withdraw,
        });
    }
    if amount.as_inner() > account.balance {
        return Err(AccountError::InsufficientFunds {
            number: account.number.clone(),
            amount,
            balance: account.balance,
        });
    }
    account.balance = checked_sub_from_balance(account, amount)?;
    account.bonus_points = account.bonus_points.saturating_sub(account.scheme.points(amount));
    Ok(())
}

/// Closes the account. Closed is terminal: no operation or transition applies afterwards.
///
/// # Errors
///
/// Returns [`AccountError::InvalidState`] if the account is already closed.
pub fn close(account: &mut BankAccount) -> Result<(), AccountError> {
    match account.status {
        AccountStatus::Open | AccountStatus::Frozen => {
            account.status = AccountStatus::Closed;
            Ok(())
        }
        AccountStatus::Closed => Err(invalid_state(account, "close")),
    }
}

/// Suspends an open account.
///
/// # Errors
///
/// Returns [`AccountError::InvalidState`] unless the account is open.
pub fn freeze(account: &mut BankAccount) -> Result<(), AccountError> {
    match account.status {
        AccountStatus::Open => {
            account.status = AccountStatus::Frozen;
            Ok(())
        }
        AccountStatus::Frozen | AccountStatus::Closed => Err(invalid_state(account, "freeze")),
    }
}

/// Reopens a frozen account.
///
/// # Errors
///
/// Returns [`AccountError::InvalidState`] unless the account is frozen.
pub fn unfreeze(account: &mut BankAccount) -> Result<(), AccountError> {
    match account.status {
        AccountStatus::Frozen => {
            account.status = AccountStatus::Open;
            Ok(())
        }
        AccountStatus::Open | AccountStatus::Closed => Err(invalid_state(account, "unfreeze")),
    }
}

/// Replaces the per-transaction withdrawal cap.
///
/// # Errors
///
/// Returns [`AccountError::InvalidAmount`] if the cap is not positive.
pub fn set_max_withdraw(account: &mut BankAccount, cap: Decimal) -> Result<(), AccountError> {
    if cap <= Decimal::ZERO {
        return Err(AmountError::NotPositive(cap).into());
    }
    account.max_withdraw = cap;
    Ok(())
}

fn ensure_open(account: &BankAccount, operation: &'static str) -> Result<(), AccountError> {
    if account.status == AccountStatus::Open {
        return Ok(());
    }
    Err(invalid_state(account, operation))
}

fn invalid_state(account: &BankAccount, operation: &'static str) -> AccountError {
    AccountError::InvalidState {
        number: account.number.clone(),
        status: account.status,
        operation,
    }
}

fn checked_add_to_balance(account: &BankAccount, amount: Amount) -> Result<Decimal, AccountError> {
    account
        .balance
        .checked_add(amount.as_inner())
        .ok_or_else(|| overflow_error(account, amount))
}

fn checked_sub_from_balance(account: &BankAccount, amount: Amount) -> Result<Decimal, AccountError> {
    account
        .balance
        .checked_sub(amount.as_inner())
        .ok_or_else(|| overflow_error(account, amount))
}

fn overflow_error(account: &BankAccount, amount: Amount) -> AccountError {
    AccountError::OperationOverflow {
        number: account.number.clone(),
        amount,
    }
}
