use shared::constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use shared::types::{Milestone, ProjectMilestones};
use soroban_sdk::{symbol_short, Env, Symbol};

/// Storage keys for milestone escrow data structures
const MILESTONE_PREFIX: Symbol = symbol_short!("milestone");
const PROJECT_MILESTONES_PREFIX: Symbol = symbol_short!("m_project");

/// Store the per-project milestone rollup
pub fn set_project_milestones(env: &Env, project_id: u64, summary: &ProjectMilestones) {
    let key = (PROJECT_MILESTONES_PREFIX, project_id);
    env.storage().persistent().set(&key, summary);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Retrieve the per-project milestone rollup
pub fn get_project_milestones(env: &Env, project_id: u64) -> Option<ProjectMilestones> {
    let key = (PROJECT_MILESTONES_PREFIX, project_id);
    env.storage()
        .persistent()
        .get::<(Symbol, u64), ProjectMilestones>(&key)
}

/// Store milestone information
pub fn set_milestone(env: &Env, project_id: u64, milestone_id: u64, milestone: &Milestone) {
    let key = (MILESTONE_PREFIX, project_id, milestone_id);
    env.storage().persistent().set(&key, milestone);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Retrieve milestone information
pub fn get_milestone(env: &Env, project_id: u64, milestone_id: u64) -> Option<Milestone> {
    let key = (MILESTONE_PREFIX, project_id, milestone_id);
    env.storage()
        .persistent()
        .get::<(Symbol, u64, u64), Milestone>(&key)
}

/// Number of milestones added to a project, 0 when none
pub fn get_milestone_count(env: &Env, project_id: u64) -> u64 {
    get_project_milestones(env, project_id)
        .map(|summary| summary.milestone_count)
        .unwrap_or(0)
}
