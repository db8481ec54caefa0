//! Selector → module table.
//!
//! Every routed entry point resolves its selector exactly once, on entry, and
//! runs the resolved facet to completion. Facets hold no state of their own;
//! they all read and write the single contract storage through the `Env` they
//! are handed.

use soroban_sdk::{log, Env, Symbol, Vec};

use domains_lib::{ModuleId, RegistryError, SELECTOR_INDEX_KEY};

use crate::events;
use crate::facets::{self, Facet};
use crate::storage::{self, DataKey};

/// Modules installed by `initialize`.
pub const DEFAULT_MODULES: [ModuleId; 4] = [
    ModuleId::Commitments,
    ModuleId::Registrar,
    ModuleId::LengthPricing,
    ModuleId::Settings,
];

pub fn module_of(env: &Env, selector: &Symbol) -> Option<ModuleId> {
    env.storage()
        .instance()
        .get(&DataKey::Module(selector.clone()))
}

/// Looks up the facet currently serving `selector`.
pub fn resolve(env: &Env, selector: &Symbol) -> Result<&'static dyn Facet, RegistryError> {
    storage::require_initialized(env)?;
    storage::bump_instance(env);

    match module_of(env, selector) {
        Some(module) => Ok(facets::facet(module)),
        None => {
            log!(env, "no module installed for selector", selector.clone());
            Err(RegistryError::UnknownOperation)
        }
    }
}

pub fn selectors(env: &Env) -> Vec<Symbol> {
    env.storage()
        .instance()
        .get(&SELECTOR_INDEX_KEY)
        .unwrap_or_else(|| Vec::new(env))
}

/// Points each selector at `module`, replacing any previous mapping.
///
/// Fails without touching the table if the module does not implement one of
/// the selectors.
pub fn install(env: &Env, module: ModuleId, selectors: &Vec<Symbol>) -> Result<(), RegistryError> {
    let facet = facets::facet(module);
    let supported = facet.selectors(env);
    for selector in selectors.iter() {
        if !supported.iter().any(|s| s == selector) {
            return Err(RegistryError::UnsupportedSelector);
        }
    }

    let mut index = self::selectors(env);
    for selector in selectors.iter() {
        env.storage()
            .instance()
            .set(&DataKey::Module(selector.clone()), &module);
        if !index.iter().any(|s| s == selector) {
            index.push_back(selector);
        }
    }
    env.storage().instance().set(&SELECTOR_INDEX_KEY, &index);

    events::module_installed(env, module, selectors);
    Ok(())
}

/// Installs every selector of each default module.
pub fn install_defaults(env: &Env) -> Result<(), RegistryError> {
    for module in DEFAULT_MODULES {
        install(env, module, &facets::facet(module).selectors(env))?;
    }
    Ok(())
}

/// Unmaps each selector. Fails with `UnknownOperation` if any is not mapped.
pub fn remove(env: &Env, selectors: &Vec<Symbol>) -> Result<(), RegistryError> {
    let mut index = self::selectors(env);
    for selector in selectors.iter() {
        let key = DataKey::Module(selector.clone());
        if !env.storage().instance().has(&key) {
            return Err(RegistryError::UnknownOperation);
        }
        env.storage().instance().remove(&key);

        if let Some(position) = index.first_index_of(&selector) {
            index.remove(position);
        }
        events::selector_removed(env, &selector);
    }
    env.storage().instance().set(&SELECTOR_INDEX_KEY, &index);
    Ok(())
}
