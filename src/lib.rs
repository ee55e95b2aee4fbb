//! Toy bank-account domain engine.
//!
//! Holders with validated contact fields, tiered bonus-point bank accounts with an
//! open/frozen/closed state machine, an in-memory repository keyed by process-unique
//! account numbers, and the [`service::BankService`] orchestrating the whole flow.

pub mod account;
pub mod bonus;
pub mod factory;
pub mod holder;
pub mod money;
pub mod number_generator;
pub mod repository;
pub mod service;
pub mod snapshot;
pub mod validation;
