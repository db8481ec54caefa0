/*!
# Registry facets

Each [`ModuleId`] is backed by one stateless facet. A facet implements the
subset of [`Facet`] it is responsible for; every other operation falls back to
`UnknownOperation`, so a selector can only ever reach code that was installed
for it.

```text
DomainsRegistry entry point
    └── router::resolve(selector)     ← ModuleTable lookup, once per call
            └── &'static dyn Facet    ← Commitments | Registrar | *Pricing | Settings
                    └── Env storage   ← shared by every facet
```
*/

use soroban_sdk::{Address, BytesN, Env, String, Symbol, Vec};

use domains_lib::{Commitment, DomainData, ModuleId, RegistryError};

pub mod commitments;
pub mod pricing;
pub mod registrar;
pub mod settings;

pub use commitments::Commitments;
pub use pricing::{FlatPricing, LengthPricing};
pub use registrar::Registrar;
pub use settings::Settings;

static COMMITMENTS: Commitments = Commitments;
static REGISTRAR: Registrar = Registrar;
static LENGTH_PRICING: LengthPricing = LengthPricing;
static FLAT_PRICING: FlatPricing = FlatPricing;
static SETTINGS: Settings = Settings;

pub fn facet(module: ModuleId) -> &'static dyn Facet {
    match module {
        ModuleId::Commitments => &COMMITMENTS,
        ModuleId::Registrar => &REGISTRAR,
        ModuleId::LengthPricing => &LENGTH_PRICING,
        ModuleId::FlatPricing => &FLAT_PRICING,
        ModuleId::Settings => &SETTINGS,
    }
}

/// The fixed capability set of the registry.
#[allow(clippy::too_many_arguments)]
pub trait Facet {
    /// Selectors this facet can serve.
    fn selectors(&self, env: &Env) -> Vec<Symbol>;

    fn request_domain(
        &self,
        _env: &Env,
        _requester: &Address,
        _secret_hash: &BytesN<32>,
    ) -> Result<(), RegistryError> {
        Err(RegistryError::UnknownOperation)
    }

    fn generate_secret(
        &self,
        _env: &Env,
        _name: &String,
        _salt: &BytesN<32>,
    ) -> Result<BytesN<32>, RegistryError> {
        Err(RegistryError::UnknownOperation)
    }

    fn pending_commitment(
        &self,
        _env: &Env,
        _requester: &Address,
    ) -> Result<Option<Commitment>, RegistryError> {
        Err(RegistryError::UnknownOperation)
    }

    fn rent_domain(
        &self,
        _env: &Env,
        _renter: &Address,
        _name: &String,
        _salt: &BytesN<32>,
        _duration: u64,
        _meta_data: &String,
        _payment: i128,
    ) -> Result<u64, RegistryError> {
        Err(RegistryError::UnknownOperation)
    }

    fn renew(
        &self,
        _env: &Env,
        _owner: &Address,
        _name: &String,
        _extra_seconds: u64,
        _payment: i128,
    ) -> Result<u64, RegistryError> {
        Err(RegistryError::UnknownOperation)
    }

    fn refund_domain(
        &self,
        _env: &Env,
        _caller: &Address,
        _name: &String,
    ) -> Result<i128, RegistryError> {
        Err(RegistryError::UnknownOperation)
    }

    fn domain_data(&self, _env: &Env, _name: &String) -> Result<DomainData, RegistryError> {
        Err(RegistryError::UnknownOperation)
    }

    fn is_available(&self, _env: &Env, _name: &String) -> Result<bool, RegistryError> {
        Err(RegistryError::UnknownOperation)
    }

    fn rent_price(&self, _env: &Env, _name: &String, _duration: u64) -> Result<i128, RegistryError> {
        Err(RegistryError::UnknownOperation)
    }

    fn update_min_locking_time(
        &self,
        _env: &Env,
        _admin: &Address,
        _seconds: u64,
    ) -> Result<(), RegistryError> {
        Err(RegistryError::UnknownOperation)
    }

    fn min_locking_time(&self, _env: &Env) -> Result<u64, RegistryError> {
        Err(RegistryError::UnknownOperation)
    }

    fn retained_balance(&self, _env: &Env) -> Result<i128, RegistryError> {
        Err(RegistryError::UnknownOperation)
    }

    fn withdraw_retained(
        &self,
        _env: &Env,
        _admin: &Address,
        _to: &Address,
    ) -> Result<i128, RegistryError> {
        Err(RegistryError::UnknownOperation)
    }
}
