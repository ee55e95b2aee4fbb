use assert2::let_assert;
use pretty_assertions::assert_eq;
use rstest::rstest;
use rust_decimal_macros::dec;

use crate::account::AccountError;
use crate::account::AccountStatus;
use crate::bonus::Tier;
use crate::holder::HolderId;
use crate::money::AmountError;
use crate::repository::RepositoryError;
use crate::service::BankService;
use crate::service::ServiceError;
use crate::validation::ValidationError;

const NAME: &str = "Jane Doe";
const PHONE: &str = "+1 (555) 123-4567";
const EMAIL: &str = "jane@example.com";
const ADDRESS: &str = "5 Main st.";

#[test]
fn open_account_wires_holder_and_account_both_ways() {
    let mut service = BankService::new();
    let number = open(&mut service, Tier::Base);

    let account = service.account(&number).unwrap();
    let_assert!(Some(holder) = service.holder(account.holder()));
    assert_eq!(NAME, holder.name().as_str());
    assert_eq!(vec![&number], holder.accounts().collect::<Vec<_>>());
    assert_eq!(AccountStatus::Open, account.status());
    assert_eq!(Tier::Base, account.tier());
}

#[test]
fn open_account_deduplicates_holders_with_identical_fields() {
    let mut service = BankService::new();
    let first = open(&mut service, Tier::Base);
    let second = open(&mut service, Tier::Gold);

    assert_ne!(first, second);
    assert_eq!(1, service.holders().count());
    let_assert!(Some(holder) = service.holder(HolderId(0)));
    assert_eq!(2, holder.accounts().count());
}

#[test]
fn open_account_keeps_distinct_holders_apart() {
    let mut service = BankService::new();
    open(&mut service, Tier::Base);
    service
        .open_account("John Smith", PHONE, EMAIL, ADDRESS, Tier::Base)
        .unwrap();
    assert_eq!(2, service.holders().count());
}

#[rstest]
#[case("jane doe", PHONE, EMAIL, ADDRESS, "holder name")]
#[case(NAME, "555-1234", EMAIL, ADDRESS, "contact phone")]
#[case(NAME, PHONE, "not-an-email", ADDRESS, "email")]
#[case(NAME, PHONE, EMAIL, "Main street 5", "home address")]
fn open_account_rejects_malformed_holder_fields(
    #[case] name: &str,
    #[case] phone: &str,
    #[case] email: &str,
    #[case] address: &str,
    #[case] expected_field: &str,
) {
    let mut service = BankService::new();
    let res = service.open_account(name, phone, email, address, Tier::Base);
    let_assert!(Err(ServiceError::Validation(ValidationError::Invalid { field, .. })) = res);
    assert_eq!(expected_field, field);
    assert!(service.accounts().is_empty());
}

#[test]
fn deposit_and_withdraw_update_balance_and_points() {
    let mut service = BankService::new();
    let number = open(&mut service, Tier::Base);

    service.deposit(&number, dec!(100.00)).unwrap();
    let account = service.account(&number).unwrap();
    assert_eq!(dec!(100.00), account.balance());
    assert_eq!(2, account.bonus_points());

    service.withdraw(&number, dec!(50.00)).unwrap();
    let account = service.account(&number).unwrap();
    assert_eq!(dec!(50.00), account.balance());
    assert_eq!(1, account.bonus_points());
}

#[rstest]
#[case(dec!(0))]
#[case(dec!(-10.00))]
fn deposit_and_withdraw_reject_non_positive_amounts(#[case] amount: rust_decimal::Decimal) {
    let mut service = BankService::new();
    let number = open(&mut service, Tier::Base);

    let_assert!(Err(ServiceError::Amount(AmountError::NotPositive(_))) = service.deposit(&number, amount));
    let_assert!(Err(ServiceError::Amount(AmountError::NotPositive(_))) = service.withdraw(&number, amount));
}

#[test]
fn operations_on_unknown_numbers_error() {
    let mut service = BankService::new();
    let unknown = "FFFF0000".parse().unwrap();

    let_assert!(Err(ServiceError::Repository(RepositoryError::NotFound { .. })) = service.deposit(&unknown, dec!(1.00)));
    let_assert!(Err(ServiceError::Repository(RepositoryError::NotFound { .. })) = service.close_account(&unknown));
    let_assert!(Err(ServiceError::Repository(RepositoryError::NotFound { .. })) = service.account(&unknown));
}

#[test]
fn freeze_blocks_operations_until_unfreeze() {
    let mut service = BankService::new();
    let number = open(&mut service, Tier::Base);
    service.deposit(&number, dec!(20.00)).unwrap();

    service.freeze_account(&number).unwrap();
    let res = service.deposit(&number, dec!(10.00));
    let_assert!(Err(ServiceError::Account(AccountError::InvalidState { status, .. })) = res);
    assert_eq!(AccountStatus::Frozen, status);

    service.unfreeze_account(&number).unwrap();
    service.deposit(&number, dec!(10.00)).unwrap();
    assert_eq!(dec!(30.00), service.account(&number).unwrap().balance());
}

#[test]
fn close_account_is_terminal_even_from_frozen() {
    let mut service = BankService::new();
    let number = open(&mut service, Tier::Base);
    service.freeze_account(&number).unwrap();
    service.close_account(&number).unwrap();

    assert_eq!(AccountStatus::Closed, service.account(&number).unwrap().status());
    let res = service.unfreeze_account(&number);
    let_assert!(Err(ServiceError::Account(AccountError::InvalidState { status, .. })) = res);
    assert_eq!(AccountStatus::Closed, status);
}

#[test]
fn accounts_returns_every_opened_account() {
    let mut service = BankService::new();
    open(&mut service, Tier::Base);
    open(&mut service, Tier::Silver);
    service
        .open_account("John Smith", PHONE, EMAIL, ADDRESS, Tier::Gold)
        .unwrap();
    assert_eq!(3, service.accounts().len());
}

fn open(service: &mut BankService, tier: Tier) -> crate::account::AccountNumber {
    service.open_account(NAME, PHONE, EMAIL, ADDRESS, tier).unwrap()
}
