use soroban_sdk::{log, token, vec, Address, BytesN, Env, String, Symbol, Vec};

use domains_lib::{
    audit::{self, OperationType},
    validation::{validate_duration, validate_metadata, validate_name},
    DomainData, RegistryError, DOMAIN_DATA, IS_AVAILABLE, REFUND_DOMAIN, RENEW, RENT_DOMAIN,
    RENT_PRICE,
};

use super::Facet;
use crate::commitments::CommitmentStore;
use crate::events;
use crate::ledger::LeaseLedger;
use crate::router;
use crate::storage;

/// The lease state machine: rent, renew, refund and the read-only views.
pub struct Registrar;

impl Registrar {
    /// Quotes through the router so a replaced pricing module also governs
    /// what is charged.
    fn quote(env: &Env, name: &String, duration: u64) -> Result<i128, RegistryError> {
        router::resolve(env, &RENT_PRICE)?.rent_price(env, name, duration)
    }

    /// Pulls `payment` into the registry. `price` backs the lease deposit and
    /// the rest is retained.
    fn collect(env: &Env, from: &Address, payment: i128, price: i128) -> Result<(), RegistryError> {
        let token = token::Client::new(env, &storage::get_payment_token(env)?);
        token.transfer(from, &env.current_contract_address(), &payment);
        storage::add_retained(env, payment - price)
    }

    fn pay_out(env: &Env, to: &Address, amount: i128) -> Result<(), RegistryError> {
        if amount > 0 {
            let token = token::Client::new(env, &storage::get_payment_token(env)?);
            token.transfer(&env.current_contract_address(), to, &amount);
        }
        Ok(())
    }
}

impl Facet for Registrar {
    fn selectors(&self, env: &Env) -> Vec<Symbol> {
        vec![
            env,
            RENT_DOMAIN,
            RENEW,
            REFUND_DOMAIN,
            DOMAIN_DATA,
            IS_AVAILABLE,
        ]
    }

    fn rent_domain(
        &self,
        env: &Env,
        renter: &Address,
        name: &String,
        salt: &BytesN<32>,
        duration: u64,
        meta_data: &String,
        payment: i128,
    ) -> Result<u64, RegistryError> {
        validate_name(name)?;
        validate_metadata(meta_data)?;
        validate_duration(duration)?;

        let ledger = LeaseLedger::new(env);
        if !ledger.is_available(name) {
            return Err(RegistryError::NameUnavailable);
        }

        let commitments = CommitmentStore::new(env);
        let commitment = commitments
            .pending(renter)
            .ok_or(RegistryError::InvalidReveal)?;
        if !commitments.reveal(renter, name, salt) {
            return Err(RegistryError::InvalidReveal);
        }

        let now = env.ledger().timestamp();
        let unlocks_at = commitment
            .created_at
            .checked_add(storage::get_min_locking_time(env)?)
            .ok_or(RegistryError::ArithmeticOverflow)?;
        if now < unlocks_at {
            return Err(RegistryError::TooEarly);
        }

        let price = Self::quote(env, name, duration)?;
        if payment < price {
            return Err(RegistryError::InsufficientPayment);
        }

        let expiration_time = now
            .checked_add(duration)
            .ok_or(RegistryError::ArithmeticOverflow)?;

        Self::collect(env, renter, payment, price)?;
        if let Some(displaced) =
            ledger.create_or_replace(name, renter, expiration_time, meta_data, price)?
        {
            log!(env, "expired lease taken over", name.clone(), displaced.owner.clone());
            ledger.credit_displaced(&displaced)?;
        }

        events::domain_registered(env, name, renter, expiration_time);
        audit::record(
            env,
            renter,
            OperationType::DomainRented,
            Some(name.clone()),
            payment,
        );
        Ok(expiration_time)
    }

    fn renew(
        &self,
        env: &Env,
        owner: &Address,
        name: &String,
        extra_seconds: u64,
        payment: i128,
    ) -> Result<u64, RegistryError> {
        validate_duration(extra_seconds)?;

        let price = Self::quote(env, name, extra_seconds)?;
        if payment < price {
            return Err(RegistryError::InsufficientPayment);
        }

        let expiration_time = LeaseLedger::new(env).extend(name, owner, extra_seconds, price)?;
        Self::collect(env, owner, payment, price)?;

        events::domain_renewed(env, name, owner, expiration_time);
        audit::record(
            env,
            owner,
            OperationType::DomainRenewed,
            Some(name.clone()),
            payment,
        );
        Ok(expiration_time)
    }

    fn refund_domain(
        &self,
        env: &Env,
        caller: &Address,
        name: &String,
    ) -> Result<i128, RegistryError> {
        let ledger = LeaseLedger::new(env);

        let refund = match ledger.get(name) {
            Some(record) if &record.owner == caller => {
                let reclaimed = ledger.reclaim(name, caller)?;
                reclaimed
                    .deposit
                    .checked_add(ledger.take_credit(name, caller))
                    .ok_or(RegistryError::ArithmeticOverflow)?
            }
            current => {
                let credit = ledger.take_credit(name, caller);
                if credit == 0 {
                    return Err(match current {
                        Some(_) => RegistryError::NotOwner,
                        None => RegistryError::DomainNotFound,
                    });
                }
                credit
            }
        };

        Self::pay_out(env, caller, refund)?;

        events::domain_refunded(env, name, caller, refund);
        audit::record(
            env,
            caller,
            OperationType::DomainRefunded,
            Some(name.clone()),
            refund,
        );
        Ok(refund)
    }

    fn domain_data(&self, env: &Env, name: &String) -> Result<DomainData, RegistryError> {
        let now = env.ledger().timestamp();
        Ok(match LeaseLedger::new(env).get(name) {
            Some(record) => DomainData {
                availability: record.is_expired_at(now),
                owner: Some(record.owner),
                meta_data: record.meta_data,
                expiration_date: record.expiration_time,
            },
            None => DomainData {
                owner: None,
                meta_data: String::from_str(env, ""),
                expiration_date: 0,
                availability: true,
            },
        })
    }

    fn is_available(&self, env: &Env, name: &String) -> Result<bool, RegistryError> {
        Ok(LeaseLedger::new(env).is_available(name))
    }
}
