//! Tier-parameterized construction of ready-to-save bank accounts.

use std::sync::Arc;

use crate::account::BankAccount;
use crate::bonus::BonusScheme;
use crate::bonus::Tier;
use crate::holder::HolderId;
use crate::money::HundredCoinsPerUnit;
use crate::money::MoneyChecker;
use crate::number_generator::AccountNumberGenerator;

/// Builds [`BankAccount`]s for one tier: fresh number from the shared generator,
/// status open, zero balance and points, holder bound at construction.
#[derive(Debug, Clone)]
pub struct AccountFactory {
    numbers: AccountNumberGenerator,
    tier: Tier,
    scheme: BonusScheme,
    checker: Arc<dyn MoneyChecker>,
}

impl AccountFactory {
    pub fn new(
        numbers: AccountNumberGenerator,
        tier: Tier,
        scheme: BonusScheme,
        checker: Arc<dyn MoneyChecker>,
    ) -> Self {
        Self {
            numbers,
            tier,
            scheme,
            checker,
        }
    }

    /// The canonical factory for a tier: the tier's logarithmic bonus scheme and the
    /// two-decimal-places money check.
    pub fn for_tier(tier: Tier, numbers: AccountNumberGenerator) -> Self {
        Self::new(numbers, tier, tier.bonus_scheme(), Arc::new(HundredCoinsPerUnit))
    }

    pub fn open_account(&self, holder: HolderId) -> BankAccount {
        BankAccount::open(
            self.numbers.generate(),
            holder,
            self.tier,
            self.scheme,
            Arc::clone(&self.checker),
        )
    }
}
