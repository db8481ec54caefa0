use soroban_sdk::{Address, BytesN, Env, String, Symbol, Vec};

use domains_lib::ModuleId;

pub fn domain_requested(env: &Env, requester: &Address, secret_hash: &BytesN<32>) {
    env.events().publish(
        (Symbol::new(env, "DomainRequested"),),
        (requester.clone(), secret_hash.clone()),
    );
}

pub fn domain_registered(env: &Env, name: &String, owner: &Address, expiration_time: u64) {
    env.events().publish(
        (Symbol::new(env, "DomainRegistered"),),
        (name.clone(), owner.clone(), expiration_time),
    );
}

pub fn domain_renewed(env: &Env, name: &String, owner: &Address, expiration_time: u64) {
    env.events().publish(
        (Symbol::new(env, "DomainRenewed"),),
        (name.clone(), owner.clone(), expiration_time),
    );
}

pub fn domain_refunded(env: &Env, name: &String, owner: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "DomainRefunded"),),
        (name.clone(), owner.clone(), amount),
    );
}

pub fn module_installed(env: &Env, module: ModuleId, selectors: &Vec<Symbol>) {
    env.events().publish(
        (Symbol::new(env, "ModuleInstalled"),),
        (module, selectors.clone()),
    );
}

pub fn selector_removed(env: &Env, selector: &Symbol) {
    env.events()
        .publish((Symbol::new(env, "SelectorRemoved"),), selector.clone());
}

pub fn min_locking_time_updated(env: &Env, seconds: u64) {
    env.events()
        .publish((Symbol::new(env, "MinLockingTimeUpdated"),), seconds);
}

pub fn retained_withdrawn(env: &Env, to: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "RetainedWithdrawn"),),
        (to.clone(), amount),
    );
}
