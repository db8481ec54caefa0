use soroban_sdk::{contracttype, Address, BytesN, String};

/// A pending commit-reveal secret. One per requester; a new request
/// overwrites the previous one.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Commitment {
    pub requester: Address,
    pub secret_hash: BytesN<32>,
    pub created_at: u64,
}

/// The current lease on a name.
///
/// A record whose `expiration_time <= now` is logically available even though
/// it stays in storage until it is reclaimed or replaced.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LeaseRecord {
    pub name: String,
    pub owner: Address,
    pub expiration_time: u64,
    pub meta_data: String,
    /// True while `deposit` is held by the registry.
    pub locked: bool,
    /// Sum of the prices charged at rent and at each renewal.
    pub deposit: i128,
}

impl LeaseRecord {
    pub fn is_expired_at(&self, now: u64) -> bool {
        self.expiration_time <= now
    }
}

/// Read-only projection returned by `get_domain_data`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct DomainData {
    pub owner: Option<Address>,
    pub meta_data: String,
    pub expiration_date: u64,
    /// Computed at call time, never stored.
    pub availability: bool,
}

/// Identity of an installable feature module.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ModuleId {
    Commitments = 1,
    Registrar = 2,
    LengthPricing = 3,
    FlatPricing = 4,
    Settings = 5,
}
