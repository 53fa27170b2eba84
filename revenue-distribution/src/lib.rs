#![no_std]
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env};

mod storage;
mod types;


use crate::storage::{get_distribution, get_project_revenue, set_distribution, set_project_revenue};
use shared::{
    config::{init_config, read_config, require_admin, require_project},
    errors::Error,
    events::{DISTRIBUTION_COMPLETED, DISTRIBUTION_CREATED, REVENUE_RECORDED},
    types::{Distribution, LedgerConfig, ProjectRevenue},
};

contractmeta!(
    key = "name",
    val = "Film Revenue Distribution Contract"
);

/// Revenue ledger per project. Distributions earmark revenue when they are
/// created; completing one only marks it as paid out.
#[contract]
pub struct RevenueDistribution;

#[contractimpl]
impl RevenueDistribution {
    /// Initialize the contract with an admin and the project registry
    pub fn initialize(env: Env, admin: Address, registry: Address) -> Result<(), Error> {
        init_config(&env, &admin, &registry)
    }

    pub fn get_config(env: Env) -> Option<LedgerConfig> {
        read_config(&env)
    }

    /// Add revenue earned by a project
    pub fn record_revenue(env: Env, project_id: u64, amount: i128) -> Result<bool, Error> {
        let config = require_admin(&env)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        require_project(&env, &config, project_id)?;

        let mut revenue = get_project_revenue(&env, project_id).unwrap_or_default();
        revenue.total_revenue = revenue
            .total_revenue
            .checked_add(amount)
            .ok_or(Error::InvalidAmount)?;

        set_project_revenue(&env, project_id, &revenue);

        env.events().publish(
            (REVENUE_RECORDED, project_id),
            (amount, revenue.total_revenue),
        );

        Ok(true)
    }

    /// Earmark `amount` of the project's undistributed revenue
    ///
    /// # Returns
    /// The new distribution id; ids start at 1 for every project
    ///
    /// # Errors
    /// * `InvalidAmount` - `amount` is not positive
    /// * `NoRevenueRecorded` - The project has never recorded revenue
    /// * `InsufficientRevenue` - `amount` exceeds the available revenue
    pub fn create_distribution(env: Env, project_id: u64, amount: i128) -> Result<u64, Error> {
        require_admin(&env)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let mut revenue = get_project_revenue(&env, project_id).ok_or(Error::NoRevenueRecorded)?;
        if amount > revenue.available() {
            return Err(Error::InsufficientRevenue);
        }

        let distribution_id = revenue
            .distribution_count
            .checked_add(1)
            .ok_or(Error::InvalidAmount)?;
        let height = env.ledger().sequence();

        // amount <= available, so this stays within total_revenue
        revenue.distributed_revenue += amount;
        revenue.last_distribution_height = height;
        revenue.distribution_count = distribution_id;

        let distribution = Distribution {
            amount,
            created_at: height,
            completed: false,
        };

        set_distribution(&env, project_id, distribution_id, &distribution);
        set_project_revenue(&env, project_id, &revenue);

        env.events().publish(
            (DISTRIBUTION_CREATED, project_id),
            (distribution_id, amount),
        );

        Ok(distribution_id)
    }

    /// Mark a distribution as paid out. There is no way back.
    pub fn complete_distribution(
        env: Env,
        project_id: u64,
        distribution_id: u64,
    ) -> Result<bool, Error> {
        require_admin(&env)?;

        let mut distribution = get_distribution(&env, project_id, distribution_id)
            .ok_or(Error::DistributionNotFound)?;
        if distribution.completed {
            return Err(Error::AlreadyCompleted);
        }

        distribution.completed = true;
        set_distribution(&env, project_id, distribution_id, &distribution);

        env.events().publish(
            (DISTRIBUTION_COMPLETED, project_id),
            (distribution_id, distribution.amount),
        );

        Ok(true)
    }

    pub fn get_project_revenue(env: Env, project_id: u64) -> Option<ProjectRevenue> {
        get_project_revenue(&env, project_id)
    }

    pub fn get_distribution(env: Env, project_id: u64, distribution_id: u64) -> Option<Distribution> {
        get_distribution(&env, project_id, distribution_id)
    }

    /// Revenue not yet earmarked by a distribution, 0 when none was recorded
    pub fn get_available_revenue(env: Env, project_id: u64) -> i128 {
        get_project_revenue(&env, project_id)
            .map(|revenue| revenue.available())
            .unwrap_or(0)
    }

    pub fn get_distribution_count(env: Env, project_id: u64) -> u64 {
        get_project_revenue(&env, project_id)
            .map(|revenue| revenue.distribution_count)
            .unwrap_or(0)
    }
}
