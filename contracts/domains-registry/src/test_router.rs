#![cfg(test)]

use soroban_sdk::{testutils::Address as _, vec, Address, Env, Symbol};

use domains_lib::{
    ModuleId, RegistryError, DOMAIN_DATA, IS_AVAILABLE, RENEW, RENT_DOMAIN, RENT_PRICE,
    REQUEST_DOMAIN,
};

use crate::test::{advance, name, rent, request, salt, setup, FUNDS, MONTH};
use crate::{DomainsRegistry, DomainsRegistryClient};

#[test]
fn test_default_module_table() {
    let s = setup(None);

    assert_eq!(s.client.selectors().len(), 13);
    assert_eq!(
        s.client.module_of(&REQUEST_DOMAIN),
        Some(ModuleId::Commitments)
    );
    assert_eq!(s.client.module_of(&RENT_DOMAIN), Some(ModuleId::Registrar));
    assert_eq!(
        s.client.module_of(&RENT_PRICE),
        Some(ModuleId::LengthPricing)
    );
    assert_eq!(
        s.client.module_of(&Symbol::new(&s.env, "nothing")),
        None
    );
}

#[test]
fn test_uninitialized_registry_rejects_calls() {
    let env = Env::default();
    let contract_id = env.register(DomainsRegistry, ());
    let client = DomainsRegistryClient::new(&env, &contract_id);

    assert_eq!(
        client.try_rent_price(&name(&env, "myDomain"), &MONTH),
        Err(Ok(RegistryError::NotInitialized))
    );
    assert_eq!(client.selectors().len(), 0);
}

#[test]
fn test_removed_selector_is_unknown_until_reinstalled() {
    let s = setup(Some(1));
    let domain = name(&s.env, "myDomain");
    rent(&s, &s.requester, &domain, &salt(&s.env, 7), MONTH);

    s.client.remove_selectors(&s.admin, &vec![&s.env, RENEW]);
    assert_eq!(s.client.module_of(&RENEW), None);
    assert_eq!(s.client.selectors().len(), 12);
    assert_eq!(
        s.client.try_renew(&s.requester, &domain, &MONTH, &FUNDS),
        Err(Ok(RegistryError::UnknownOperation))
    );

    // the rest of the registrar keeps working
    assert!(!s.client.is_available(&domain));

    s.client
        .install_module(&s.admin, &ModuleId::Registrar, &vec![&s.env, RENEW]);
    let before = s.client.get_domain_data(&domain).expiration_date;
    assert_eq!(
        s.client.renew(&s.requester, &domain, &MONTH, &10_000_000_000),
        before + MONTH
    );
}

#[test]
fn test_removing_unmapped_selector_fails() {
    let s = setup(None);

    let result = s.client.try_remove_selectors(
        &s.admin,
        &vec![&s.env, DOMAIN_DATA, Symbol::new(&s.env, "nothing")],
    );
    assert_eq!(result, Err(Ok(RegistryError::UnknownOperation)));
    // the whole call rolled back
    assert_eq!(s.client.module_of(&DOMAIN_DATA), Some(ModuleId::Registrar));
}

#[test]
fn test_replacing_pricing_changes_quote_and_charge() {
    let s = setup(Some(1));
    let domain = name(&s.env, "abc");

    assert_eq!(s.client.rent_price(&domain, &100), 4_000);

    s.client
        .install_module(&s.admin, &ModuleId::FlatPricing, &vec![&s.env, RENT_PRICE]);
    assert_eq!(s.client.module_of(&RENT_PRICE), Some(ModuleId::FlatPricing));
    assert_eq!(s.client.rent_price(&domain, &100), 1_000);
    assert_eq!(s.client.selectors().len(), 13);

    request(&s, &s.requester, &domain, &salt(&s.env, 7));
    s.client.rent_domain(
        &s.requester,
        &domain,
        &salt(&s.env, 7),
        &100,
        &name(&s.env, ""),
        &1_000,
    );
    assert_eq!(s.token.balance(&s.requester), FUNDS - 1_000);
    assert_eq!(s.client.retained_balance(), 0);

    advance(&s.env, 100);
    assert_eq!(s.client.refund_domain(&s.requester, &domain), 1_000);
}

#[test]
fn test_removing_pricing_blocks_renting() {
    let s = setup(Some(1));
    let domain = name(&s.env, "myDomain");

    s.client
        .remove_selectors(&s.admin, &vec![&s.env, RENT_PRICE]);
    request(&s, &s.requester, &domain, &salt(&s.env, 7));

    let result = s.client.try_rent_domain(
        &s.requester,
        &domain,
        &salt(&s.env, 7),
        &MONTH,
        &name(&s.env, ""),
        &FUNDS,
    );
    assert_eq!(result, Err(Ok(RegistryError::UnknownOperation)));
    assert!(s.client.pending_commitment(&s.requester).is_some());
}

#[test]
fn test_install_rejects_unsupported_selector() {
    let s = setup(None);

    let result = s.client.try_install_module(
        &s.admin,
        &ModuleId::Settings,
        &vec![&s.env, IS_AVAILABLE],
    );
    assert_eq!(result, Err(Ok(RegistryError::UnsupportedSelector)));
    assert_eq!(s.client.module_of(&IS_AVAILABLE), Some(ModuleId::Registrar));
}

#[test]
fn test_module_table_is_admin_only() {
    let s = setup(None);

    assert_eq!(
        s.client.try_install_module(
            &s.requester,
            &ModuleId::FlatPricing,
            &vec![&s.env, RENT_PRICE],
        ),
        Err(Ok(RegistryError::Unauthorized))
    );
    assert_eq!(
        s.client
            .try_remove_selectors(&s.requester, &vec![&s.env, RENEW]),
        Err(Ok(RegistryError::Unauthorized))
    );
    assert_eq!(
        s.client.module_of(&RENT_PRICE),
        Some(ModuleId::LengthPricing)
    );
}

#[test]
fn test_transferred_admin_controls_module_table() {
    let s = setup(None);
    let new_admin = Address::generate(&s.env);

    s.client.transfer_admin(&s.admin, &new_admin);
    assert_eq!(s.client.admin(), new_admin);

    assert_eq!(
        s.client.try_install_module(
            &s.admin,
            &ModuleId::FlatPricing,
            &vec![&s.env, RENT_PRICE],
        ),
        Err(Ok(RegistryError::Unauthorized))
    );
    s.client
        .install_module(&new_admin, &ModuleId::FlatPricing, &vec![&s.env, RENT_PRICE]);
    assert_eq!(s.client.module_of(&RENT_PRICE), Some(ModuleId::FlatPricing));
}
