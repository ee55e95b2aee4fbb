//! Bonus-point formulas and the tier presets that select them.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::money::Amount;

/// Bonus tier assigned at account creation. Deliberately separate from the
/// operational [`crate::account::AccountStatus`]: a frozen gold account stays gold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, parse_display::Display, serde::Serialize)]
pub enum Tier {
    Base,
    Silver,
    Gold,
}

impl Tier {
    pub const fn bonus_scheme(self) -> BonusScheme {
        match self {
            Self::Base => BonusScheme::Logarithmic { multiplier: 1 },
            Self::Silver => BonusScheme::Logarithmic { multiplier: 2 },
            Self::Gold => BonusScheme::Logarithmic { multiplier: 3 },
        }
    }
}

/// Formula turning a deposited or withdrawn amount into bonus points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusScheme {
    /// Fixed fraction of the amount, truncated to whole points.
    Flat { percent: Decimal },
    /// `multiplier` points per order of magnitude of the amount.
    Logarithmic { multiplier: i64 },
}

impl BonusScheme {
    pub fn points(&self, amount: Amount) -> i64 {
        match *self {
            Self::Flat { percent } => (amount.as_inner() * percent)
                .trunc()
                .to_i64()
                .unwrap_or(i64::MAX),
            Self::Logarithmic { multiplier } => {
                let units = amount.as_inner().to_f64().unwrap_or(0.0);
                if units <= 0.0 {
                    return 0;
                }
                // Truncation towards zero: amounts below 1.0 earn nothing.
                multiplier * (units.log10().trunc() as i64)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;

    #[rstest]
    #[case(Tier::Base, dec!(100.00), 2)]
    #[case(Tier::Silver, dec!(100.00), 4)]
    #[case(Tier::Gold, dec!(100.00), 6)]
    #[case(Tier::Base, dec!(9.99), 0)]
    #[case(Tier::Silver, dec!(10), 2)]
    #[case(Tier::Gold, dec!(0.50), 0)]
    #[case(Tier::Gold, dec!(1000), 9)]
    fn tier_schemes_award_points_per_order_of_magnitude(
        #[case] tier: Tier,
        #[case] amount: Decimal,
        #[case] expected: i64,
    ) {
        let amount = Amount::try_from(amount).unwrap();
        assert_eq!(expected, tier.bonus_scheme().points(amount));
    }

    #[rstest]
    #[case(dec!(0.01), dec!(100.00), 1)]
    #[case(dec!(0.03), dec!(100.00), 3)]
    #[case(dec!(0.05), dec!(250.00), 12)]
    #[case(dec!(0.01), dec!(50.00), 0)]
    fn flat_scheme_awards_truncated_fraction_of_the_amount(
        #[case] percent: Decimal,
        #[case] amount: Decimal,
        #[case] expected: i64,
    ) {
        let amount = Amount::try_from(amount).unwrap();
        assert_eq!(expected, BonusScheme::Flat { percent }.points(amount));
    }
}
