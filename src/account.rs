//! Bank account data model and the operations that mutate it.
//!
//! [`model`] holds the plain account state; [`ops`] provides the free functions
//! enforcing the deposit/withdraw invariants and the status state machine.

pub mod model;
pub mod ops;

pub use model::AccountNumber;
pub use model::AccountStatus;
pub use model::BankAccount;
pub use ops::AccountError;
pub use ops::close;
pub use ops::deposit;
pub use ops::freeze;
pub use ops::set_max_withdraw;
pub use ops::unfreeze;
pub use ops::withdraw;
