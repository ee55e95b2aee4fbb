//! Serializable point-in-time views of stored accounts.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::account::AccountNumber;
use crate::account::AccountStatus;
use crate::account::BankAccount;
use crate::bonus::Tier;
use crate::holder::HolderId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSnapshot {
    pub number: AccountNumber,
    pub holder: HolderId,
    pub balance: Decimal,
    pub bonus_points: i64,
    pub status: AccountStatus,
    pub tier: Tier,
}

impl From<&BankAccount> for AccountSnapshot {
    fn from(account: &BankAccount) -> Self {
        Self {
            number: account.number().clone(),
            holder: account.holder(),
            balance: account.balance(),
            bonus_points: account.bonus_points(),
            status: account.status(),
            tier: account.tier(),
        }
    }
}

/// Snapshots in ascending account-number order.
///
/// The stores keep accounts in hash maps for fast lookups; ordering is applied once at
/// report time to keep downstream processing reproducible.
pub fn sorted_snapshots<'a, I>(accounts: I) -> Vec<AccountSnapshot>
where
    I: IntoIterator<Item = &'a BankAccount>,
{
    let mut snapshots: Vec<AccountSnapshot> = accounts.into_iter().map(AccountSnapshot::from).collect();
    snapshots.sort_unstable_by(|a, b| a.number.cmp(&b.number));
    snapshots
}
