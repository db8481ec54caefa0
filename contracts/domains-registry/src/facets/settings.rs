use soroban_sdk::{token, vec, Address, Env, Symbol, Vec};

use domains_lib::{
    admin,
    audit::{self, OperationType},
    RegistryError, MIN_LOCKING_TIME, RETAINED_BALANCE, UPDATE_MIN_LOCKING_TIME,
    WITHDRAW_RETAINED,
};

use super::Facet;
use crate::events;
use crate::storage;

/// Admin-tunable parameters and the retained overpayment balance.
pub struct Settings;

impl Facet for Settings {
    fn selectors(&self, env: &Env) -> Vec<Symbol> {
        vec![
            env,
            UPDATE_MIN_LOCKING_TIME,
            MIN_LOCKING_TIME,
            RETAINED_BALANCE,
            WITHDRAW_RETAINED,
        ]
    }

    fn update_min_locking_time(
        &self,
        env: &Env,
        caller: &Address,
        seconds: u64,
    ) -> Result<(), RegistryError> {
        admin::verify_admin(env, caller)?;
        storage::set_min_locking_time(env, seconds);

        events::min_locking_time_updated(env, seconds);
        audit::record(env, caller, OperationType::ParameterUpdate, None, 0);
        Ok(())
    }

    fn min_locking_time(&self, env: &Env) -> Result<u64, RegistryError> {
        storage::get_min_locking_time(env)
    }

    fn retained_balance(&self, env: &Env) -> Result<i128, RegistryError> {
        Ok(storage::get_retained(env))
    }

    fn withdraw_retained(
        &self,
        env: &Env,
        caller: &Address,
        to: &Address,
    ) -> Result<i128, RegistryError> {
        admin::verify_admin(env, caller)?;

        let amount = storage::get_retained(env);
        if amount <= 0 {
            return Err(RegistryError::NothingToWithdraw);
        }

        storage::set_retained(env, 0);
        let token = token::Client::new(env, &storage::get_payment_token(env)?);
        token.transfer(&env.current_contract_address(), to, &amount);

        events::retained_withdrawn(env, to, amount);
        audit::record(env, caller, OperationType::RetainedWithdrawn, None, amount);
        Ok(amount)
    }
}
