use soroban_sdk::{contracttype, Address, BytesN, Env, String, Symbol};

use domains_lib::{
    admin, RegistryError, MIN_LOCKING_TIME_KEY, PAYMENT_TOKEN_KEY, RECORD_TTL_EXTEND,
    RECORD_TTL_THRESHOLD, RETAINED_KEY,
};

/// Keys for the registry's persistent and per-selector entries.
///
/// Configuration lives under the `Symbol` constants from `domains_lib`.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Current lease for a name.
    Lease(String),
    /// Pending commit-reveal secret of a requester.
    Commitment(Address),
    /// First identity to commit a secret hash; only it may reveal that hash.
    SecretOwner(BytesN<32>),
    /// Deposit owed to a lessee whose expired lease was taken over.
    Credit(String, Address),
    /// Module serving a selector.
    Module(Symbol),
}

/* ---------------- INSTANCE ---------------- */

pub fn require_initialized(env: &Env) -> Result<(), RegistryError> {
    if !admin::has_admin(env) {
        return Err(RegistryError::NotInitialized);
    }
    Ok(())
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
}

/* ---------------- PAYMENT TOKEN ---------------- */

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&PAYMENT_TOKEN_KEY, token);
}

pub fn get_payment_token(env: &Env) -> Result<Address, RegistryError> {
    env.storage()
        .instance()
        .get(&PAYMENT_TOKEN_KEY)
        .ok_or(RegistryError::NotInitialized)
}

/* ---------------- MIN LOCKING TIME ---------------- */

pub fn set_min_locking_time(env: &Env, seconds: u64) {
    env.storage().instance().set(&MIN_LOCKING_TIME_KEY, &seconds);
}

pub fn get_min_locking_time(env: &Env) -> Result<u64, RegistryError> {
    env.storage()
        .instance()
        .get(&MIN_LOCKING_TIME_KEY)
        .ok_or(RegistryError::NotInitialized)
}

/* ---------------- RETAINED OVERPAYMENT ---------------- */

pub fn get_retained(env: &Env) -> i128 {
    env.storage().instance().get(&RETAINED_KEY).unwrap_or(0)
}

pub fn set_retained(env: &Env, amount: i128) {
    env.storage().instance().set(&RETAINED_KEY, &amount);
}

pub fn add_retained(env: &Env, amount: i128) -> Result<(), RegistryError> {
    let total = get_retained(env)
        .checked_add(amount)
        .ok_or(RegistryError::ArithmeticOverflow)?;
    set_retained(env, total);
    Ok(())
}
