#![no_std]

use shared::{
    config::{init_config, read_config, require_admin, require_project},
    errors::Error,
    events::{FUNDS_RELEASED, MILESTONE_ADDED, MILESTONE_COMPLETED},
    types::{LedgerConfig, Milestone, ProjectMilestones},
};
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, String};

mod storage;
mod validation;


use storage::*;

contractmeta!(
    key = "name",
    val = "Film Milestone Escrow Contract"
);

/// Production milestones per project. Each milestone moves
/// Created -> Completed -> Released, once each and never backwards.
///
/// Released amounts are ledger annotations only; moving real value is left to
/// an external treasury.
#[contract]
pub struct MilestoneEscrowContract;

#[contractimpl]
impl MilestoneEscrowContract {
    /// Initialize the contract with an admin and the project registry
    pub fn initialize(env: Env, admin: Address, registry: Address) -> Result<(), Error> {
        init_config(&env, &admin, &registry)
    }

    pub fn get_config(env: Env) -> Option<LedgerConfig> {
        read_config(&env)
    }

    /// Add a milestone to a project
    ///
    /// # Arguments
    /// * `project_id` - Project identifier
    /// * `description` - Free-form milestone description
    /// * `funds_allocated` - Amount reserved for this milestone
    ///
    /// # Returns
    /// The new milestone id; ids start at 1 for every project
    pub fn add_milestone(
        env: Env,
        project_id: u64,
        description: String,
        funds_allocated: i128,
    ) -> Result<u64, Error> {
        let config = require_admin(&env)?;
        validation::validate_allocation(funds_allocated)?;
        require_project(&env, &config, project_id)?;

        let mut summary = get_project_milestones(&env, project_id).unwrap_or_default();

        let milestone_id = summary
            .milestone_count
            .checked_add(1)
            .ok_or(Error::InvalidAmount)?;
        summary.total_allocated = summary
            .total_allocated
            .checked_add(funds_allocated)
            .ok_or(Error::InvalidAmount)?;
        summary.milestone_count = milestone_id;

        let milestone = Milestone {
            description,
            funds_allocated,
            completed: false,
            funds_released: false,
            completion_height: 0,
        };

        // Counter and child record are written together
        set_milestone(&env, project_id, milestone_id, &milestone);
        set_project_milestones(&env, project_id, &summary);

        env.events().publish(
            (MILESTONE_ADDED, project_id),
            (milestone_id, funds_allocated),
        );

        Ok(milestone_id)
    }

    /// Mark a milestone as completed, stamping the current ledger sequence
    ///
    /// # Errors
    /// * `MilestoneNotFound` - No such milestone for this project
    /// * `AlreadyCompleted` - The milestone was completed before
    pub fn complete_milestone(env: Env, project_id: u64, milestone_id: u64) -> Result<bool, Error> {
        require_admin(&env)?;

        let mut milestone =
            get_milestone(&env, project_id, milestone_id).ok_or(Error::MilestoneNotFound)?;
        validation::validate_completable(&milestone)?;

        milestone.completed = true;
        milestone.completion_height = env.ledger().sequence();
        set_milestone(&env, project_id, milestone_id, &milestone);

        env.events().publish(
            (MILESTONE_COMPLETED, project_id),
            (milestone_id, milestone.completion_height),
        );

        Ok(true)
    }

    /// Release the funds allocated to a completed milestone
    ///
    /// # Returns
    /// The milestone's `funds_allocated`
    ///
    /// # Errors
    /// * `MilestoneNotFound` - No such milestone for this project
    /// * `MilestoneNotCompleted` - The milestone has not been completed
    /// * `FundsAlreadyReleased` - Funds were released before
    pub fn release_milestone_funds(
        env: Env,
        project_id: u64,
        milestone_id: u64,
    ) -> Result<i128, Error> {
        require_admin(&env)?;

        let mut milestone =
            get_milestone(&env, project_id, milestone_id).ok_or(Error::MilestoneNotFound)?;
        validation::validate_releasable(&milestone)?;

        // A stored milestone always has a rollup
        let mut summary = get_project_milestones(&env, project_id).ok_or(Error::MilestoneNotFound)?;
        summary.total_released = summary
            .total_released
            .checked_add(milestone.funds_allocated)
            .ok_or(Error::InvalidAmount)?;

        milestone.funds_released = true;
        set_milestone(&env, project_id, milestone_id, &milestone);
        set_project_milestones(&env, project_id, &summary);

        env.events().publish(
            (FUNDS_RELEASED, project_id),
            (milestone_id, milestone.funds_allocated),
        );

        Ok(milestone.funds_allocated)
    }

    pub fn get_milestone(env: Env, project_id: u64, milestone_id: u64) -> Option<Milestone> {
        get_milestone(&env, project_id, milestone_id)
    }

    /// Number of milestones added to the project so far
    pub fn get_milestone_count(env: Env, project_id: u64) -> u64 {
        get_milestone_count(&env, project_id)
    }

    /// Milestone count plus allocated and released totals
    pub fn get_project_milestones(env: Env, project_id: u64) -> Option<ProjectMilestones> {
        get_project_milestones(&env, project_id)
    }
}
