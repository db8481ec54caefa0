use soroban_sdk::{vec, Address, BytesN, Env, String, Symbol, Vec};

use domains_lib::{
    audit::{self, OperationType},
    Commitment, RegistryError, GENERATE_SECRET, PENDING_COMMITMENT, REQUEST_DOMAIN,
};

use super::Facet;
use crate::commitments::{secret_for, CommitmentStore};
use crate::events;

/// First phase of the handshake: publishing and inspecting commitments.
pub struct Commitments;

impl Facet for Commitments {
    fn selectors(&self, env: &Env) -> Vec<Symbol> {
        vec![env, REQUEST_DOMAIN, GENERATE_SECRET, PENDING_COMMITMENT]
    }

    fn request_domain(
        &self,
        env: &Env,
        requester: &Address,
        secret_hash: &BytesN<32>,
    ) -> Result<(), RegistryError> {
        CommitmentStore::new(env).commit(requester, secret_hash);

        events::domain_requested(env, requester, secret_hash);
        audit::record(env, requester, OperationType::DomainRequested, None, 0);
        Ok(())
    }

    fn generate_secret(
        &self,
        env: &Env,
        name: &String,
        salt: &BytesN<32>,
    ) -> Result<BytesN<32>, RegistryError> {
        Ok(secret_for(env, name, salt))
    }

    fn pending_commitment(
        &self,
        env: &Env,
        requester: &Address,
    ) -> Result<Option<Commitment>, RegistryError> {
        Ok(CommitmentStore::new(env).pending(requester))
    }
}
