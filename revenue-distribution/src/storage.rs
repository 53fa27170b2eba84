use soroban_sdk::Env;

use crate::types::DataKey;
use shared::{
    constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD},
    types::{Distribution, ProjectRevenue},
};

pub fn set_project_revenue(env: &Env, project_id: u64, revenue: &ProjectRevenue) {
    let key = DataKey::ProjectRevenue(project_id);
    env.storage().persistent().set(&key, revenue);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_project_revenue(env: &Env, project_id: u64) -> Option<ProjectRevenue> {
    env.storage().persistent().get(&DataKey::ProjectRevenue(project_id))
}

pub fn set_distribution(env: &Env, project_id: u64, distribution_id: u64, distribution: &Distribution) {
    let key = DataKey::Distribution(project_id, distribution_id);
    env.storage().persistent().set(&key, distribution);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_distribution(env: &Env, project_id: u64, distribution_id: u64) -> Option<Distribution> {
    env.storage()
        .persistent()
        .get(&DataKey::Distribution(project_id, distribution_id))
}
