//! In-memory account store keyed by account number.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use std::sync::RwLock;

use crate::account::AccountNumber;
use crate::account::BankAccount;

#[derive(thiserror::Error, Debug)]
pub enum RepositoryError {
    #[error("no account found for number {number}")]
    NotFound { number: AccountNumber },
    #[error("an account with number {number} is already stored")]
    AlreadyExists { number: AccountNumber },
}

/// Cheap-to-clone handle over the shared number → account map.
///
/// Numbers are never reused, so at most one account can ever be stored per number;
/// saving a duplicate is reported explicitly rather than silently ignored.
#[derive(Debug, Clone, Default)]
pub struct AccountRepository {
    accounts: Arc<RwLock<HashMap<AccountNumber, BankAccount>>>,
}

impl AccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new account under its number.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::AlreadyExists`] if an account with the same number is
    /// already stored.
    pub fn save(&self, account: BankAccount) -> Result<(), RepositoryError> {
        let mut accounts = self.accounts.write().expect("RwLock poisoned");
        match accounts.entry(account.number().clone()) {
            Entry::Occupied(entry) => Err(RepositoryError::AlreadyExists {
                number: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(account);
                Ok(())
            }
        }
    }

    /// A point-in-time copy of the stored account.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] for numbers never saved.
    pub fn get(&self, number: &AccountNumber) -> Result<BankAccount, RepositoryError> {
        self.accounts
            .read()
            .expect("RwLock poisoned")
            .get(number)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                number: number.clone(),
            })
    }

    /// Runs `op` over the stored account while holding the write guard, so the mutation
    /// is exclusive per store.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] for numbers never saved.
    pub fn modify<T>(
        &self,
        number: &AccountNumber,
        op: impl FnOnce(&mut BankAccount) -> T,
    ) -> Result<T, RepositoryError> {
        let mut accounts = self.accounts.write().expect("RwLock poisoned");
        let account = accounts.get_mut(number).ok_or_else(|| RepositoryError::NotFound {
            number: number.clone(),
        })?;
        Ok(op(account))
    }

    /// Snapshot of all stored accounts, in no particular order.
    pub fn all(&self) -> Vec<BankAccount> {
        self.accounts
            .read()
            .expect("RwLock poisoned")
            .values()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use assert2::let_assert;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::account;
    use crate::bonus::Tier;
    use crate::holder::HolderId;
    use crate::money::Amount;
    use crate::money::HundredCoinsPerUnit;

    #[test]
    fn save_then_get_round_trips_the_account() {
        let repository = AccountRepository::new();
        repository.save(test_account("A1")).unwrap();
        let_assert!(Ok(found) = repository.get(&number("A1")));
        assert_eq!(&number("A1"), found.number());
    }

    #[test]
    fn save_of_a_duplicate_number_errors() {
        let repository = AccountRepository::new();
        repository.save(test_account("A1")).unwrap();
        let_assert!(Err(RepositoryError::AlreadyExists { number: dup }) = repository.save(test_account("A1")));
        assert_eq!(number("A1"), dup);
    }

    #[test]
    fn get_of_an_unknown_number_errors() {
        let_assert!(
            Err(RepositoryError::NotFound { number: missing }) = AccountRepository::new().get(&number("NOPE"))
        );
        assert_eq!(number("NOPE"), missing);
    }

    #[test]
    fn modify_mutates_the_stored_account_in_place() {
        let repository = AccountRepository::new();
        repository.save(test_account("A1")).unwrap();
        repository
            .modify(&number("A1"), |acc| {
                account::deposit(acc, Amount::try_from(dec!(10.00)).unwrap())
            })
            .unwrap()
            .unwrap();
        assert_eq!(dec!(10.00), repository.get(&number("A1")).unwrap().balance());
    }

    #[test]
    fn modify_of_an_unknown_number_errors() {
        let res = AccountRepository::new().modify(&number("NOPE"), |_| ());
        let_assert!(Err(RepositoryError::NotFound { .. }) = res);
    }

    #[test]
    fn all_returns_every_stored_account() {
        let repository = AccountRepository::new();
        repository.save(test_account("A1")).unwrap();
        repository.save(test_account("A2")).unwrap();
        assert_eq!(2, repository.all().len());
    }

    fn test_account(raw_number: &str) -> BankAccount {
        BankAccount::open(
            number(raw_number),
            HolderId(0),
            Tier::Base,
            Tier::Base.bonus_scheme(),
            Arc::new(HundredCoinsPerUnit),
        )
    }

    fn number(raw: &str) -> AccountNumber {
        raw.parse().unwrap()
    }
}
