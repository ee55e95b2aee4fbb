use rust_decimal::Decimal;
use tracing::debug;
use tracing::info;
use tracing::instrument;

use crate::account;
use crate::account::AccountError;
use crate::account::AccountNumber;
use crate::account::BankAccount;
use crate::bonus::Tier;
use crate::factory::AccountFactory;
use crate::holder::ContactPhone;
use crate::holder::Email;
use crate::holder::Holder;
use crate::holder::HolderDirectory;
use crate::holder::HolderId;
use crate::holder::HolderName;
use crate::holder::HomeAddress;
use crate::money::Amount;
use crate::money::AmountError;
use crate::number_generator::AccountNumberGenerator;
use crate::repository::AccountRepository;
use crate::repository::RepositoryError;
use crate::validation::ValidationError;

#[cfg(test)]
#[path = "tests/bank_service_tests.rs"]
mod bank_service_tests;

#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Amount(#[from] AmountError),
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Thin pass-through over the stores: validates input at the edge, then delegates to
/// the [`crate::account`] operations, propagating their failures unchanged.
#[derive(Debug, Default)]
pub struct BankService {
    repository: AccountRepository,
    numbers: AccountNumberGenerator,
    holders: HolderDirectory,
}

impl BankService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A service sharing externally owned stores, e.g. for per-test isolation or for
    /// read-side consumers holding their own repository handle.
    pub fn with_stores(repository: AccountRepository, numbers: AccountNumberGenerator) -> Self {
        Self {
            repository,
            numbers,
            holders: HolderDirectory::new(),
        }
    }

    /// Opens an account of the given tier for the holder described by the four raw
    /// fields, deduplicating the holder and wiring the holder↔account references both
    /// ways. Returns the freshly issued account number.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any holder field is empty or malformed ([`ServiceError::Validation`]).
    /// - The issued number is already stored ([`ServiceError::Repository`]; unreachable
    ///   while all saves go through this service).
    #[instrument(skip(self))]
    pub fn open_account(
        &mut self,
        name: &str,
        contact_phone: &str,
        email: &str,
        home_address: &str,
        tier: Tier,
    ) -> Result<AccountNumber, ServiceError> {
        let name: HolderName = name.parse()?;
        let contact_phone: ContactPhone = contact_phone.parse()?;
        let email: Email = email.parse()?;
        let home_address: HomeAddress = home_address.parse()?;

        let holder_id = self.holders.get_or_create(name, contact_phone, home_address, email);
        let factory = AccountFactory::for_tier(tier, self.numbers.clone());
        let account = factory.open_account(holder_id);
        let number = account.number().clone();

        self.repository.save(account)?;
        self.holders.record_account(holder_id, number.clone());

        info!(%number, %holder_id, %tier, "account opened");
        Ok(number)
    }

    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] for unknown numbers and
    /// [`ServiceError::Account`] when the account is already closed.
    #[instrument(skip(self))]
    pub fn close_account(&mut self, number: &AccountNumber) -> Result<(), ServiceError> {
        self.repository.modify(number, account::close)??;
        info!(%number, "account closed");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] for unknown numbers and
    /// [`ServiceError::Account`] unless the account is open.
    #[instrument(skip(self))]
    pub fn freeze_account(&mut self, number: &AccountNumber) -> Result<(), ServiceError> {
        self.repository.modify(number, account::freeze)??;
        info!(%number, "account frozen");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] for unknown numbers and
    /// [`ServiceError::Account`] unless the account is frozen.
    #[instrument(skip(self))]
    pub fn unfreeze_account(&mut self, number: &AccountNumber) -> Result<(), ServiceError> {
        self.repository.modify(number, account::unfreeze)??;
        info!(%number, "account unfrozen");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is not positive ([`ServiceError::Amount`]).
    /// - The number is unknown ([`ServiceError::Repository`]).
    /// - The account rejects the deposit ([`ServiceError::Account`]).
    #[instrument(skip(self))]
    pub fn deposit(&mut self, number: &AccountNumber, amount: Decimal) -> Result<(), ServiceError> {
        let amount = Amount::try_from(amount)?;
        self.repository.modify(number, |acc| account::deposit(acc, amount))??;
        debug!(%number, %amount, "deposit applied");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is not positive ([`ServiceError::Amount`]).
    /// - The number is unknown ([`ServiceError::Repository`]).
    /// - The account rejects the withdrawal ([`ServiceError::Account`]).
    #[instrument(skip(self))]
    pub fn withdraw(&mut self, number: &AccountNumber, amount: Decimal) -> Result<(), ServiceError> {
        let amount = Amount::try_from(amount)?;
        self.repository.modify(number, |acc| account::withdraw(acc, amount))??;
        debug!(%number, %amount, "withdrawal applied");
        Ok(())
    }

    /// Point-in-time copy of one stored account.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Repository`] for unknown numbers.
    pub fn account(&self, number: &AccountNumber) -> Result<BankAccount, ServiceError> {
        Ok(self.repository.get(number)?)
    }

    /// Snapshot of all stored accounts, in no particular order.
    pub fn accounts(&self) -> Vec<BankAccount> {
        self.repository.all()
    }

    pub fn holder(&self, id: HolderId) -> Option<&Holder> {
        self.holders.get(id)
    }

    pub fn holders(&self) -> impl Iterator<Item = &Holder> {
        self.holders.all()
    }
}
