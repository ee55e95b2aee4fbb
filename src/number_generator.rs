//! Process-unique account number issuing.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::RwLock;

use rand::Rng;

use crate::account::AccountNumber;

/// Issues account numbers that are unique for the process lifetime.
///
/// Cloning returns a handle backed by the same issued-number set, so every
/// consumer sees the same uniqueness guarantee.
#[derive(Debug, Clone, Default)]
pub struct AccountNumberGenerator {
    issued: Arc<RwLock<HashSet<AccountNumber>>>,
}

impl AccountNumberGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh number: a random 128-bit value encoded as 32 uppercase hex characters.
    ///
    /// With 2^128 candidates a collision retry is practically unreachable, so the loop
    /// is effectively bounded. The whole loop plus the insert run under a single write
    /// guard, so concurrent callers can never be handed the same number.
    pub fn generate(&self) -> AccountNumber {
        let mut issued = self.issued.write().expect("RwLock poisoned");
        loop {
            let candidate: AccountNumber = format!("{:032X}", rand::rng().random::<u128>())
                .parse()
                .expect("generated value matches the account number pattern");
            if issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    pub fn is_issued(&self, number: &AccountNumber) -> bool {
        self.issued.read().expect("RwLock poisoned").contains(number)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn generate_never_repeats_a_number() {
        let generator = AccountNumberGenerator::new();
        let numbers: HashSet<AccountNumber> = (0..1_000).map(|_| generator.generate()).collect();
        assert_eq!(1_000, numbers.len());
    }

    #[test]
    fn generate_emits_32_uppercase_hex_characters() {
        let number = AccountNumberGenerator::new().generate();
        assert_eq!(32, number.as_str().len());
        assert!(number.as_str().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn issued_numbers_are_remembered_per_generator() {
        let generator = AccountNumberGenerator::new();
        let number = generator.generate();
        assert!(generator.is_issued(&number));
        assert!(!AccountNumberGenerator::new().is_issued(&number));
    }

    #[test]
    fn clones_share_the_issued_set() {
        let generator = AccountNumberGenerator::new();
        let clone = generator.clone();
        let number = clone.generate();
        assert!(generator.is_issued(&number));
    }
}
