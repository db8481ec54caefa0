use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, String};

use domains_lib::{Commitment, RECORD_TTL_EXTEND, RECORD_TTL_THRESHOLD};

use crate::storage::DataKey;

/// Digest committed to by `request_domain`: `sha256(xdr(name) || salt)`.
///
/// The digest does not name the requester. Binding comes from the store,
/// which remembers the first identity to commit each digest.
pub fn secret_for(env: &Env, name: &String, salt: &BytesN<32>) -> BytesN<32> {
    let mut preimage = Bytes::new(env);
    preimage.append(&name.clone().to_xdr(env));
    preimage.append(&Bytes::from_array(env, &salt.to_array()));
    env.crypto().sha256(&preimage).to_bytes()
}

/// Side table of pending commit-reveal secrets, one slot per requester.
pub struct CommitmentStore {
    env: Env,
}

impl CommitmentStore {
    pub fn new(env: &Env) -> Self {
        Self { env: env.clone() }
    }

    /// Stores the requester's secret, silently replacing any earlier one.
    ///
    /// The first identity to commit a digest owns it. Copying someone else's
    /// published digest still fills the copier's slot, but that slot can
    /// never be revealed.
    pub fn commit(&self, requester: &Address, secret_hash: &BytesN<32>) -> Commitment {
        let commitment = Commitment {
            requester: requester.clone(),
            secret_hash: secret_hash.clone(),
            created_at: self.env.ledger().timestamp(),
        };
        let storage = self.env.storage().persistent();

        let owner_key = DataKey::SecretOwner(secret_hash.clone());
        if !storage.has(&owner_key) {
            storage.set(&owner_key, requester);
        }
        storage.extend_ttl(&owner_key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);

        let key = DataKey::Commitment(requester.clone());
        storage.set(&key, &commitment);
        storage.extend_ttl(&key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
        commitment
    }

    pub fn secret_owner(&self, secret_hash: &BytesN<32>) -> Option<Address> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::SecretOwner(secret_hash.clone()))
    }

    pub fn pending(&self, requester: &Address) -> Option<Commitment> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Commitment(requester.clone()))
    }

    /// Checks `(name, salt)` against the requester's commitment and consumes
    /// it on a match. A mismatch, or a digest first committed by someone
    /// else, leaves the commitment in place.
    pub fn reveal(&self, requester: &Address, name: &String, salt: &BytesN<32>) -> bool {
        match self.pending(requester) {
            Some(commitment)
                if commitment.secret_hash == secret_for(&self.env, name, salt)
                    && self.secret_owner(&commitment.secret_hash).as_ref() == Some(requester) =>
            {
                self.env
                    .storage()
                    .persistent()
                    .remove(&DataKey::Commitment(requester.clone()));
                true
            }
            _ => false,
        }
    }
}
