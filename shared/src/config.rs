use soroban_sdk::{contracttype, Address, Env};

use crate::{
    constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD},
    errors::Error,
    events::LEDGER_INITIALIZED,
    registry::ProjectRegistryClient,
    types::LedgerConfig,
};

#[contracttype]
#[derive(Clone)]
enum ConfigKey {
    Config,
}

/// Keep the contract instance (and its config) alive
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&ConfigKey::Config)
}

/// Store the ledger configuration. Can only be done once.
pub fn init_config(env: &Env, admin: &Address, registry: &Address) -> Result<(), Error> {
    if has_config(env) {
        return Err(Error::AlreadyInitialized);
    }
    admin.require_auth();

    let config = LedgerConfig {
        admin: admin.clone(),
        registry: registry.clone(),
    };
    env.storage().instance().set(&ConfigKey::Config, &config);
    bump_instance(env);

    env.events()
        .publish((LEDGER_INITIALIZED,), (admin.clone(), registry.clone()));

    Ok(())
}

pub fn read_config(env: &Env) -> Option<LedgerConfig> {
    env.storage().instance().get(&ConfigKey::Config)
}

/// Load the configuration, failing if `initialize` has not run yet
pub fn get_config(env: &Env) -> Result<LedgerConfig, Error> {
    let config = read_config(env).ok_or(Error::NotInitialized)?;
    bump_instance(env);
    Ok(config)
}

/// Load the configuration and require the configured admin's signature
pub fn require_admin(env: &Env) -> Result<LedgerConfig, Error> {
    let config = get_config(env)?;
    config.admin.require_auth();
    Ok(config)
}

/// Ask the registry whether `project_id` exists
pub fn require_project(env: &Env, config: &LedgerConfig, project_id: u64) -> Result<(), Error> {
    let registry = ProjectRegistryClient::new(env, &config.registry);
    if registry.project_exists(&project_id) {
        Ok(())
    } else {
        Err(Error::ProjectNotFound)
    }
}
