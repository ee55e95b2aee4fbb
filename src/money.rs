//! Monetary amounts and the pluggable well-formedness check applied to them.

use rust_decimal::Decimal;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount must be positive, got {0}")]
    NotPositive(Decimal),
    #[error("amount {amount} is malformed: {requirement}")]
    Malformed {
        amount: Decimal,
        requirement: &'static str,
    },
}

/// This permits to avoid checks on non-positive amounts while handling account operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, parse_display::Display, serde::Serialize)]
pub struct Amount(Decimal);

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive(value));
        }
        Ok(Self(value))
    }
}

impl Amount {
    pub const fn as_inner(&self) -> Decimal {
        self.0
    }
}

/// Capability deciding whether a monetary amount is acceptably formed.
///
/// Injected into each [`crate::account::BankAccount`] at construction so the
/// format rule can vary per account without touching the operations.
pub trait MoneyChecker: std::fmt::Debug + Send + Sync {
    fn is_valid(&self, amount: Decimal) -> bool;

    /// User-facing description of the rule, reported on rejection.
    fn requirement(&self) -> &'static str;

    /// Runs the check on an already positive [`Amount`].
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::Malformed`] carrying [`MoneyChecker::requirement`] if the
    /// amount does not satisfy the rule.
    fn check(&self, amount: Amount) -> Result<(), AmountError> {
        if self.is_valid(amount.as_inner()) {
            return Ok(());
        }
        Err(AmountError::Malformed {
            amount: amount.as_inner(),
            requirement: self.requirement(),
        })
    }
}

/// At most two fractional digits, i.e. one hundred coins per currency unit.
#[derive(Debug, Clone, Copy, Default)]
pub struct HundredCoinsPerUnit;

impl MoneyChecker for HundredCoinsPerUnit {
    fn is_valid(&self, amount: Decimal) -> bool {
        amount.round_dp(2) == amount
    }

    fn requirement(&self) -> &'static str {
        "amount must have at most two decimal places"
    }
}
