//! Account orchestration layer.
//!
//! Provides [`BankService`] which composes holder deduplication, the account
//! factory, the number generator and the repository behind the six account
//! operations (open/close/freeze/unfreeze/deposit/withdraw).

pub mod bank_service;

pub use bank_service::BankService;
pub use bank_service::ServiceError;
