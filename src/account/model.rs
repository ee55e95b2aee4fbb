use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::bonus::BonusScheme;
use crate::bonus::Tier;
use crate::holder::HolderId;
use crate::money::MoneyChecker;
use crate::validation;
use crate::validation::ValidationError;

/// Default per-transaction withdrawal cap for freshly opened accounts.
pub const DEFAULT_MAX_WITHDRAW: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

/// Non-empty string of digits and uppercase latin letters identifying one account.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, parse_display::Display, serde::Serialize)]
pub struct AccountNumber(String);

impl FromStr for AccountNumber {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        validation::ACCOUNT_NUMBER.validated(value).map(Self)
    }
}

impl AccountNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Operational status governing which operations an account accepts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, parse_display::Display, serde::Serialize)]
pub enum AccountStatus {
    Open,
    Frozen,
    Closed,
}

#[derive(Debug, Clone)]
pub struct BankAccount {
    pub(in crate::account) number: AccountNumber,
    pub(in crate::account) holder: HolderId,
    pub(in crate::account) balance: Decimal,
    pub(in crate::account) bonus_points: i64,
    pub(in crate::account) status: AccountStatus,
    pub(in crate::account) tier: Tier,
    pub(in crate::account) max_withdraw: Decimal,
    pub(in crate::account) scheme: BonusScheme,
    pub(in crate::account) checker: Arc<dyn MoneyChecker>,
}

impl BankAccount {
    /// A freshly opened account: zero balance and points, [`AccountStatus::Open`],
    /// default withdrawal cap, already bound to its holder.
    pub fn open(
        number: AccountNumber,
        holder: HolderId,
        tier: Tier,
        scheme: BonusScheme,
        checker: Arc<dyn MoneyChecker>,
    ) -> Self {
        Self {
            number,
            holder,
            balance: Decimal::ZERO,
            bonus_points: 0,
            status: AccountStatus::Open,
            tier,
            max_withdraw: DEFAULT_MAX_WITHDRAW,
            scheme,
            checker,
        }
    }

    pub fn number(&self) -> &AccountNumber {
        &self.number
    }

    pub const fn holder(&self) -> HolderId {
        self.holder
    }

    pub const fn balance(&self) -> Decimal {
        self.balance
    }

    pub const fn bonus_points(&self) -> i64 {
        self.bonus_points
    }

    pub const fn status(&self) -> AccountStatus {
        self.status
    }

    pub const fn tier(&self) -> Tier {
        self.tier
    }

    pub const fn max_withdraw(&self) -> Decimal {
        self.max_withdraw
    }
}
