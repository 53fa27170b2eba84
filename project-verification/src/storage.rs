use shared::constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use shared::errors::Error;
use shared::types::FilmProject;
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    ProjectCounter,       // last issued project id
    Project(u64),         // project_id -> FilmProject
}

/// Store registry admin
pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

/// Retrieve registry admin
pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get::<DataKey, Address>(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

/// Last project id handed out, 0 when nothing is registered
pub fn get_project_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get::<DataKey, u64>(&DataKey::ProjectCounter)
        .unwrap_or(0)
}

pub fn set_project_counter(env: &Env, counter: u64) {
    env.storage().instance().set(&DataKey::ProjectCounter, &counter);
}

pub fn set_project(env: &Env, project_id: u64, project: &FilmProject) {
    let key = DataKey::Project(project_id);
    env.storage().persistent().set(&key, project);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_project(env: &Env, project_id: u64) -> Option<FilmProject> {
    env.storage()
        .persistent()
        .get::<DataKey, FilmProject>(&DataKey::Project(project_id))
}

pub fn project_exists(env: &Env, project_id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Project(project_id))
}
