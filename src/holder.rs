//! Account holders: validated contact fields, synthetic identity and the
//! process-wide deduplication directory.

use std::collections::BTreeSet;
use std::collections::HashMap;
use std::hash::Hash;
use std::hash::Hasher;
use std::str::FromStr;

use crate::account::AccountNumber;
use crate::validation;
use crate::validation::ValidationError;

macro_rules! validated_field {
    ($(#[$docs:meta])* $name:ident, $pattern:path) => {
        $(#[$docs])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, parse_display::Display, serde::Serialize)]
        pub struct $name(String);

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                $pattern.validated(value).map(Self)
            }
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
}

validated_field!(
    /// At least two capitalized English words separated by single whitespaces.
    HolderName,
    validation::HOLDER_NAME
);

validated_field!(
    /// Phone number in the form `+X (XXX) XXX-XXXX`.
    ContactPhone,
    validation::CONTACT_PHONE
);

validated_field!(
    /// Address in the form `<house-number> <Street-name> st.`.
    HomeAddress,
    validation::HOME_ADDRESS
);

validated_field!(
    /// RFC-light validated email address.
    Email,
    validation::EMAIL
);

/// Synthetic holder identity, assigned once by [`HolderDirectory`] and used
/// exclusively for equality and hashing of [`Holder`]s.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Ord, PartialOrd, parse_display::Display, serde::Serialize)]
pub struct HolderId(pub u64);

#[derive(Debug, Clone, parse_display::Display)]
#[display("holder=(id={id} name={name})")]
pub struct Holder {
    id: HolderId,
    name: HolderName,
    contact_phone: ContactPhone,
    home_address: HomeAddress,
    email: Email,
    accounts: BTreeSet<AccountNumber>,
}

impl Holder {
    pub fn new(
        id: HolderId,
        name: HolderName,
        contact_phone: ContactPhone,
        home_address: HomeAddress,
        email: Email,
    ) -> Self {
        Self {
            id,
            name,
            contact_phone,
            home_address,
            email,
            accounts: BTreeSet::new(),
        }
    }

    pub const fn id(&self) -> HolderId {
        self.id
    }

    pub fn name(&self) -> &HolderName {
        &self.name
    }

    pub fn contact_phone(&self) -> &ContactPhone {
        &self.contact_phone
    }

    pub fn home_address(&self) -> &HomeAddress {
        &self.home_address
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    /// The name is fixed for the holder's lifetime; the other contact fields can be
    /// replaced with revalidated values.
    pub fn set_contact_phone(&mut self, contact_phone: ContactPhone) {
        self.contact_phone = contact_phone;
    }

    pub fn set_home_address(&mut self, home_address: HomeAddress) {
        self.home_address = home_address;
    }

    pub fn set_email(&mut self, email: Email) {
        self.email = email;
    }

    /// Records a back-reference to an owned account. No-op when already present.
    pub fn add_account(&mut self, number: AccountNumber) {
        self.accounts.insert(number);
    }

    pub fn accounts(&self) -> impl Iterator<Item = &AccountNumber> {
        self.accounts.iter()
    }
}

// Identity is the synthetic id only; the validated fields never take part in
// equality or hashing.
impl PartialEq for Holder {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Holder {}

impl Hash for Holder {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Deduplicating holder registry: two holders with the same four contact fields
/// resolve to one canonical [`Holder`].
#[derive(Debug, Default)]
pub struct HolderDirectory {
    holders: HashMap<HolderId, Holder>,
    by_fields: HashMap<HolderKey, HolderId>,
    next_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct HolderKey {
    name: HolderName,
    contact_phone: ContactPhone,
    home_address: HomeAddress,
    email: Email,
}

impl HolderDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the canonical holder for the supplied fields, creating it with a fresh
    /// monotonically increasing id when no holder with those exact fields exists yet.
    pub fn get_or_create(
        &mut self,
        name: HolderName,
        contact_phone: ContactPhone,
        home_address: HomeAddress,
        email: Email,
    ) -> HolderId {
        let key = HolderKey {
            name,
            contact_phone,
            home_address,
            email,
        };
        if let Some(id) = self.by_fields.get(&key) {
            return *id;
        }

        let id = HolderId(self.next_id);
        self.next_id += 1;
        let holder = Holder::new(
            id,
            key.name.clone(),
            key.contact_phone.clone(),
            key.home_address.clone(),
            key.email.clone(),
        );
        self.holders.insert(id, holder);
        self.by_fields.insert(key, id);
        id
    }

    pub fn get(&self, id: HolderId) -> Option<&Holder> {
        self.holders.get(&id)
    }

    /// Adds an account back-reference to a known holder. Returns false for unknown ids.
    pub fn record_account(&mut self, id: HolderId, number: AccountNumber) -> bool {
        match self.holders.get_mut(&id) {
            Some(holder) => {
                holder.add_account(number);
                true
            }
            None => false,
        }
    }

    pub fn all(&self) -> impl Iterator<Item = &Holder> {
        self.holders.values()
    }
}
