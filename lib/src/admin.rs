use soroban_sdk::{Address, Env, Symbol};

use crate::{errors::RegistryError, ADMIN_KEY};

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage()
        .instance()
        .set(&Symbol::new(env, ADMIN_KEY), admin);
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&Symbol::new(env, ADMIN_KEY))
}

pub fn get_admin(env: &Env) -> Result<Address, RegistryError> {
    env.storage()
        .instance()
        .get(&Symbol::new(env, ADMIN_KEY))
        .ok_or(RegistryError::NotInitialized)
}

pub fn verify_admin(env: &Env, caller: &Address) -> Result<(), RegistryError> {
    let admin = get_admin(env)?;
    if &admin != caller {
        return Err(RegistryError::Unauthorized);
    }
    Ok(())
}

/// Authenticates `caller` and checks it is the stored admin.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), RegistryError> {
    caller.require_auth();
    verify_admin(env, caller)
}

pub fn transfer_admin(
    env: &Env,
    current_admin: &Address,
    new_admin: &Address,
) -> Result<(), RegistryError> {
    require_admin(env, current_admin)?;
    set_admin(env, new_admin);
    Ok(())
}
