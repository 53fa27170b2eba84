use soroban_sdk::{contracttype, Address, Env};

use shared::{
    constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD},
    types::{Investment, ProjectInvestment},
};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    ProjectInvestment(u64),     // project_id -> ProjectInvestment
    Investment(u64, Address),   // project_id, investor -> Investment
}

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn set_project_investment(env: &Env, project_id: u64, aggregate: &ProjectInvestment) {
    let key = DataKey::ProjectInvestment(project_id);
    env.storage().persistent().set(&key, aggregate);
    bump(env, &key);
}

pub fn get_project_investment(env: &Env, project_id: u64) -> Option<ProjectInvestment> {
    env.storage()
        .persistent()
        .get(&DataKey::ProjectInvestment(project_id))
}

pub fn set_investment(env: &Env, project_id: u64, investor: &Address, investment: &Investment) {
    let key = DataKey::Investment(project_id, investor.clone());
    env.storage().persistent().set(&key, investment);
    bump(env, &key);
}

pub fn get_investment(env: &Env, project_id: u64, investor: &Address) -> Option<Investment> {
    env.storage()
        .persistent()
        .get(&DataKey::Investment(project_id, investor.clone()))
}
