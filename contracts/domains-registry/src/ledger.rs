use soroban_sdk::{Address, Env, String};

use domains_lib::{
    LeaseRecord, RegistryError, LEDGER_SECONDS, RECORD_TTL_EXTEND, RECORD_TTL_THRESHOLD,
};

use crate::storage::DataKey;

/// Name → lease storage with the uniqueness and expiry rules applied.
///
/// Expiry is never scheduled: a record is expired when
/// `expiration_time <= now` at the moment it is read.
pub struct LeaseLedger {
    env: Env,
}

impl LeaseLedger {
    pub fn new(env: &Env) -> Self {
        Self { env: env.clone() }
    }

    fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    /// Ledgers a record must stay live for: the rest of its lease plus the
    /// usual extension, capped at the network maximum.
    fn ttl_for(&self, record: &LeaseRecord) -> u32 {
        let remaining = record.expiration_time.saturating_sub(self.now()) / LEDGER_SECONDS;
        let wanted = remaining.saturating_add(RECORD_TTL_EXTEND as u64);
        wanted.min(self.env.storage().max_ttl() as u64) as u32
    }

    fn touch(&self, key: &DataKey, record: &LeaseRecord) {
        let extend_to = self.ttl_for(record);
        self.env
            .storage()
            .persistent()
            .extend_ttl(key, RECORD_TTL_THRESHOLD.min(extend_to), extend_to);
    }

    fn save(&self, record: &LeaseRecord) {
        let key = DataKey::Lease(record.name.clone());
        self.env.storage().persistent().set(&key, record);
        self.touch(&key, record);
    }

    /// Reads keep a live lease from being archived before it expires.
    pub fn get(&self, name: &String) -> Option<LeaseRecord> {
        let key = DataKey::Lease(name.clone());
        let record: LeaseRecord = self.env.storage().persistent().get(&key)?;
        self.touch(&key, &record);
        Some(record)
    }

    pub fn is_available(&self, name: &String) -> bool {
        match self.get(name) {
            Some(record) => record.is_expired_at(self.now()),
            None => true,
        }
    }

    /// Writes a fresh locked lease. Returns the expired record it replaced,
    /// if the previous lessee never reclaimed it.
    pub fn create_or_replace(
        &self,
        name: &String,
        owner: &Address,
        expiration_time: u64,
        meta_data: &String,
        deposit: i128,
    ) -> Result<Option<LeaseRecord>, RegistryError> {
        let previous = self.get(name);
        if let Some(record) = &previous {
            if !record.is_expired_at(self.now()) {
                return Err(RegistryError::NameUnavailable);
            }
        }

        self.save(&LeaseRecord {
            name: name.clone(),
            owner: owner.clone(),
            expiration_time,
            meta_data: meta_data.clone(),
            locked: true,
            deposit,
        });
        Ok(previous)
    }

    /// Adds exactly `additional_seconds` to an unexpired lease held by `owner`.
    pub fn extend(
        &self,
        name: &String,
        owner: &Address,
        additional_seconds: u64,
        extra_deposit: i128,
    ) -> Result<u64, RegistryError> {
        let mut record = self.get(name).ok_or(RegistryError::DomainNotFound)?;
        if &record.owner != owner {
            return Err(RegistryError::NotOwner);
        }
        if record.is_expired_at(self.now()) {
            return Err(RegistryError::LeaseExpired);
        }

        record.expiration_time = record
            .expiration_time
            .checked_add(additional_seconds)
            .ok_or(RegistryError::ArithmeticOverflow)?;
        record.deposit = record
            .deposit
            .checked_add(extra_deposit)
            .ok_or(RegistryError::ArithmeticOverflow)?;
        self.save(&record);
        Ok(record.expiration_time)
    }

    /// Deletes an expired lease on behalf of its owner and returns it
    /// unlocked, so the caller can release the deposit.
    pub fn reclaim(&self, name: &String, requester: &Address) -> Result<LeaseRecord, RegistryError> {
        let mut record = self.get(name).ok_or(RegistryError::DomainNotFound)?;
        if !record.is_expired_at(self.now()) {
            return Err(RegistryError::LeaseNotExpired);
        }
        if &record.owner != requester {
            return Err(RegistryError::NotOwner);
        }

        self.env
            .storage()
            .persistent()
            .remove(&DataKey::Lease(name.clone()));
        record.locked = false;
        Ok(record)
    }

    /* ---------------- REFUND CREDITS ---------------- */

    /// Moves a displaced lease's deposit into its former owner's credit.
    pub fn credit_displaced(&self, record: &LeaseRecord) -> Result<i128, RegistryError> {
        let key = DataKey::Credit(record.name.clone(), record.owner.clone());
        let total = self
            .credit_of(&record.name, &record.owner)
            .checked_add(record.deposit)
            .ok_or(RegistryError::ArithmeticOverflow)?;

        let storage = self.env.storage().persistent();
        storage.set(&key, &total);
        storage.extend_ttl(&key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
        Ok(total)
    }

    pub fn credit_of(&self, name: &String, owner: &Address) -> i128 {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Credit(name.clone(), owner.clone()))
            .unwrap_or(0)
    }

    pub fn take_credit(&self, name: &String, owner: &Address) -> i128 {
        let credit = self.credit_of(name, owner);
        if credit > 0 {
            self.env
                .storage()
                .persistent()
                .remove(&DataKey::Credit(name.clone(), owner.clone()));
        }
        credit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domains_lib::MAX_LEASE_SECONDS;
    use soroban_sdk::testutils::{storage::Persistent as _, Address as _, Ledger};
    use soroban_sdk::{contract, contractimpl};

    #[contract]
    struct LedgerHarness;

    #[contractimpl]
    impl LedgerHarness {}

    fn setup() -> (Env, Address, Address, Address) {
        let env = Env::default();
        let contract_id = env.register(LedgerHarness, ());
        let owner = Address::generate(&env);
        let other = Address::generate(&env);
        (env, contract_id, owner, other)
    }

    #[test]
    fn availability_follows_expiry() {
        let (env, contract_id, owner, _) = setup();
        let name = String::from_str(&env, "myDomain");
        let meta = String::from_str(&env, "someInformation");

        env.as_contract(&contract_id, || {
            let ledger = LeaseLedger::new(&env);
            env.ledger().set_timestamp(100);
            assert!(ledger.is_available(&name));

            ledger
                .create_or_replace(&name, &owner, 200, &meta, 50)
                .unwrap();
            assert!(!ledger.is_available(&name));

            let record = ledger.get(&name).unwrap();
            assert!(record.locked);
            assert_eq!(record.deposit, 50);

            env.ledger().set_timestamp(199);
            assert!(!ledger.is_available(&name));
            env.ledger().set_timestamp(200);
            assert!(ledger.is_available(&name));
            // lazily expired, still physically present
            assert!(ledger.get(&name).is_some());
        });
    }

    #[test]
    fn create_rejects_active_lease_and_returns_displaced() {
        let (env, contract_id, owner, other) = setup();
        let name = String::from_str(&env, "myDomain");
        let meta = String::from_str(&env, "");

        env.as_contract(&contract_id, || {
            let ledger = LeaseLedger::new(&env);
            assert_eq!(
                ledger.create_or_replace(&name, &owner, 10, &meta, 7).unwrap(),
                None
            );
            assert_eq!(
                ledger.create_or_replace(&name, &other, 20, &meta, 7),
                Err(RegistryError::NameUnavailable)
            );

            env.ledger().set_timestamp(10);
            let displaced = ledger
                .create_or_replace(&name, &other, 20, &meta, 9)
                .unwrap()
                .unwrap();
            assert_eq!(displaced.owner, owner);
            assert_eq!(ledger.get(&name).unwrap().owner, other);

            assert_eq!(ledger.credit_displaced(&displaced), Ok(7));
            assert_eq!(ledger.credit_of(&name, &owner), 7);
            assert_eq!(ledger.take_credit(&name, &owner), 7);
            assert_eq!(ledger.take_credit(&name, &owner), 0);
        });
    }

    #[test]
    fn extend_is_exactly_additive_and_owner_only() {
        let (env, contract_id, owner, other) = setup();
        let name = String::from_str(&env, "myDomain");
        let meta = String::from_str(&env, "");

        env.as_contract(&contract_id, || {
            let ledger = LeaseLedger::new(&env);
            assert_eq!(
                ledger.extend(&name, &owner, 5, 0),
                Err(RegistryError::DomainNotFound)
            );

            ledger.create_or_replace(&name, &owner, 1_000, &meta, 10).unwrap();
            assert_eq!(ledger.extend(&name, &owner, 2_629_810, 4), Ok(2_630_810));
            assert_eq!(ledger.get(&name).unwrap().deposit, 14);
            assert_eq!(
                ledger.extend(&name, &other, 5, 0),
                Err(RegistryError::NotOwner)
            );

            env.ledger().set_timestamp(2_630_810);
            assert_eq!(
                ledger.extend(&name, &owner, 5, 0),
                Err(RegistryError::LeaseExpired)
            );
        });
    }

    #[test]
    fn reclaim_requires_expiry_and_ownership() {
        let (env, contract_id, owner, other) = setup();
        let name = String::from_str(&env, "myDomain");
        let meta = String::from_str(&env, "");

        env.as_contract(&contract_id, || {
            let ledger = LeaseLedger::new(&env);
            ledger.create_or_replace(&name, &owner, 1, &meta, 10).unwrap();

            assert_eq!(
                ledger.reclaim(&name, &owner),
                Err(RegistryError::LeaseNotExpired)
            );

            env.ledger().set_timestamp(6);
            assert_eq!(ledger.reclaim(&name, &other), Err(RegistryError::NotOwner));

            let record = ledger.reclaim(&name, &owner).unwrap();
            assert!(!record.locked);
            assert_eq!(record.deposit, 10);
            assert!(ledger.get(&name).is_none());
            assert_eq!(
                ledger.reclaim(&name, &owner),
                Err(RegistryError::DomainNotFound)
            );
        });
    }

    #[test]
    fn long_leases_stay_live_until_expiry() {
        let (env, contract_id, owner, _) = setup();
        let short = String::from_str(&env, "short");
        let long = String::from_str(&env, "long");
        let meta = String::from_str(&env, "");

        env.as_contract(&contract_id, || {
            let ledger = LeaseLedger::new(&env);
            ledger.create_or_replace(&short, &owner, 1_000, &meta, 1).unwrap();
            ledger
                .create_or_replace(&long, &owner, MAX_LEASE_SECONDS, &meta, 1)
                .unwrap();

            let storage = env.storage().persistent();
            let short_ttl = storage.get_ttl(&DataKey::Lease(short.clone()));
            let long_ttl = storage.get_ttl(&DataKey::Lease(long.clone()));
            assert!(short_ttl >= RECORD_TTL_EXTEND);
            assert!(long_ttl > short_ttl);
            assert!(long_ttl <= env.storage().max_ttl());
        });
    }
}
