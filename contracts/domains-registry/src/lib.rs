#![no_std]

#[cfg(test)]
extern crate std;

mod commitments;
mod events;
pub mod facets;
mod ledger;
mod router;
mod storage;

#[cfg(test)]
mod test_router;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Symbol, Vec};

use domains_lib::{
    admin,
    audit::{self, AuditLog, AuditLogQueryResult, OperationType},
    Commitment, DomainData, ModuleId, RegistryError, DEFAULT_MIN_LOCKING_TIME, DOMAIN_DATA,
    GENERATE_SECRET, IS_AVAILABLE, MIN_LOCKING_TIME, PENDING_COMMITMENT, REFUND_DOMAIN, RENEW,
    RENT_DOMAIN, RENT_PRICE, REQUEST_DOMAIN, RETAINED_BALANCE, UPDATE_MIN_LOCKING_TIME,
    WITHDRAW_RETAINED,
};

#[contract]
pub struct DomainsRegistry;

#[contractimpl]
impl DomainsRegistry {
    /// One-time setup: admin, payment token, locking window and the default
    /// module table.
    pub fn initialize(
        env: Env,
        admin: Address,
        payment_token: Address,
        min_locking_time: Option<u64>,
    ) -> Result<(), RegistryError> {
        if admin::has_admin(&env) {
            return Err(RegistryError::AlreadyInitialized);
        }
        admin.require_auth();

        admin::set_admin(&env, &admin);
        storage::set_payment_token(&env, &payment_token);
        storage::set_min_locking_time(
            &env,
            min_locking_time.unwrap_or(DEFAULT_MIN_LOCKING_TIME),
        );
        storage::set_retained(&env, 0);
        router::install_defaults(&env)?;
        storage::bump_instance(&env);
        Ok(())
    }

    /* ---------------- COMMIT-REVEAL ---------------- */

    /// Publishes `secret_hash = generate_secret(name, salt)` without revealing
    /// the name. Replaces any earlier request from the same requester.
    pub fn request_domain(
        env: Env,
        requester: Address,
        secret_hash: BytesN<32>,
    ) -> Result<(), RegistryError> {
        requester.require_auth();
        router::resolve(&env, &REQUEST_DOMAIN)?.request_domain(&env, &requester, &secret_hash)
    }

    pub fn generate_secret(
        env: Env,
        name: String,
        salt: BytesN<32>,
    ) -> Result<BytesN<32>, RegistryError> {
        router::resolve(&env, &GENERATE_SECRET)?.generate_secret(&env, &name, &salt)
    }

    pub fn pending_commitment(
        env: Env,
        requester: Address,
    ) -> Result<Option<Commitment>, RegistryError> {
        router::resolve(&env, &PENDING_COMMITMENT)?.pending_commitment(&env, &requester)
    }

    /* ---------------- LEASES ---------------- */

    /// Reveals a pending request and leases `name` for `duration` seconds.
    /// Returns the expiration time.
    pub fn rent_domain(
        env: Env,
        renter: Address,
        name: String,
        salt: BytesN<32>,
        duration: u64,
        meta_data: String,
        payment: i128,
    ) -> Result<u64, RegistryError> {
        renter.require_auth();
        router::resolve(&env, &RENT_DOMAIN)?.rent_domain(
            &env, &renter, &name, &salt, duration, &meta_data, payment,
        )
    }

    /// Extends an unexpired lease by exactly `extra_seconds`. Returns the new
    /// expiration time.
    pub fn renew(
        env: Env,
        owner: Address,
        name: String,
        extra_seconds: u64,
        payment: i128,
    ) -> Result<u64, RegistryError> {
        owner.require_auth();
        router::resolve(&env, &RENEW)?.renew(&env, &owner, &name, extra_seconds, payment)
    }

    /// Releases the caller's locked deposit on `name` once their lease has
    /// expired. Returns the amount refunded.
    pub fn refund_domain(env: Env, caller: Address, name: String) -> Result<i128, RegistryError> {
        caller.require_auth();
        router::resolve(&env, &REFUND_DOMAIN)?.refund_domain(&env, &caller, &name)
    }

    pub fn get_domain_data(env: Env, name: String) -> Result<DomainData, RegistryError> {
        router::resolve(&env, &DOMAIN_DATA)?.domain_data(&env, &name)
    }

    pub fn is_available(env: Env, name: String) -> Result<bool, RegistryError> {
        router::resolve(&env, &IS_AVAILABLE)?.is_available(&env, &name)
    }

    pub fn rent_price(env: Env, name: String, duration: u64) -> Result<i128, RegistryError> {
        router::resolve(&env, &RENT_PRICE)?.rent_price(&env, &name, duration)
    }

    /* ---------------- SETTINGS ---------------- */

    pub fn update_min_locking_time(
        env: Env,
        admin: Address,
        seconds: u64,
    ) -> Result<(), RegistryError> {
        admin.require_auth();
        router::resolve(&env, &UPDATE_MIN_LOCKING_TIME)?.update_min_locking_time(
            &env, &admin, seconds,
        )
    }

    pub fn min_locking_time(env: Env) -> Result<u64, RegistryError> {
        router::resolve(&env, &MIN_LOCKING_TIME)?.min_locking_time(&env)
    }

    pub fn retained_balance(env: Env) -> Result<i128, RegistryError> {
        router::resolve(&env, &RETAINED_BALANCE)?.retained_balance(&env)
    }

    pub fn withdraw_retained(env: Env, admin: Address, to: Address) -> Result<i128, RegistryError> {
        admin.require_auth();
        router::resolve(&env, &WITHDRAW_RETAINED)?.withdraw_retained(&env, &admin, &to)
    }

    /* ---------------- MODULE TABLE ---------------- */

    /// Routes each selector to `module`, replacing existing mappings.
    pub fn install_module(
        env: Env,
        admin: Address,
        module: ModuleId,
        selectors: Vec<Symbol>,
    ) -> Result<(), RegistryError> {
        admin::require_admin(&env, &admin)?;
        router::install(&env, module, &selectors)?;
        audit::record(&env, &admin, OperationType::ModuleInstalled, None, 0);
        Ok(())
    }

    pub fn remove_selectors(
        env: Env,
        admin: Address,
        selectors: Vec<Symbol>,
    ) -> Result<(), RegistryError> {
        admin::require_admin(&env, &admin)?;
        router::remove(&env, &selectors)?;
        audit::record(&env, &admin, OperationType::SelectorRemoved, None, 0);
        Ok(())
    }

    pub fn module_of(env: Env, selector: Symbol) -> Option<ModuleId> {
        router::module_of(&env, &selector)
    }

    pub fn selectors(env: Env) -> Vec<Symbol> {
        router::selectors(&env)
    }

    /* ---------------- ADMIN ---------------- */

    pub fn admin(env: Env) -> Result<Address, RegistryError> {
        admin::get_admin(&env)
    }

    pub fn transfer_admin(
        env: Env,
        admin: Address,
        new_admin: Address,
    ) -> Result<(), RegistryError> {
        admin::transfer_admin(&env, &admin, &new_admin)?;
        audit::record(&env, &admin, OperationType::AdminTransferred, None, 0);
        Ok(())
    }

    /* ---------------- AUDIT ---------------- */

    pub fn audit_log(env: Env, id: u64) -> Option<AuditLog> {
        audit::get_audit_log(&env, id)
    }

    pub fn audit_logs(env: Env, start_id: u64, end_id: u64, max_results: u32) -> AuditLogQueryResult {
        audit::query_audit_logs(&env, start_id, end_id, max_results)
    }
}
