#![no_std]
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env};

mod shares;
mod storage;

#[cfg(test)]
mod tests;

use crate::storage::{get_investment, get_project_investment, set_investment, set_project_investment};
use shared::{
    config::{get_config, init_config, read_config, require_project},
    errors::Error,
    events::INVESTMENT_RECORDED,
    types::{Investment, LedgerConfig, ProjectInvestment},
};

contractmeta!(
    key = "name",
    val = "Film Investment Management Contract"
);

#[contract]
pub struct InvestmentManagement;

#[contractimpl]
impl InvestmentManagement {
    /// Initialize the contract with an admin and the project registry
    pub fn initialize(env: Env, admin: Address, registry: Address) -> Result<(), Error> {
        init_config(&env, &admin, &registry)
    }

    pub fn get_config(env: Env) -> Option<LedgerConfig> {
        read_config(&env)
    }

    /// Contribute `amount` to a project and return the investor's new
    /// ownership in basis points.
    ///
    /// Only the caller's ownership is recomputed against the new project
    /// total. Other investors keep the share stored at their own last
    /// contribution until they invest again.
    ///
    /// # Errors
    /// * `InvalidAmount` - `amount` is not positive, or a total overflows
    /// * `ProjectNotFound` - The registry does not know `project_id`
    pub fn invest(env: Env, project_id: u64, investor: Address, amount: i128) -> Result<u32, Error> {
        let config = get_config(&env)?;
        investor.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        require_project(&env, &config, project_id)?;

        let mut aggregate = get_project_investment(&env, project_id).unwrap_or_default();
        let mut position = get_investment(&env, project_id, &investor).unwrap_or_default();
        let first_contribution = position.amount == 0;

        let new_total = aggregate
            .total_investment
            .checked_add(amount)
            .ok_or(Error::InvalidAmount)?;
        let new_amount = position
            .amount
            .checked_add(amount)
            .ok_or(Error::InvalidAmount)?;
        let new_ownership = shares::ownership_bps(new_amount, new_total)?;

        if first_contribution {
            aggregate.investor_count = aggregate
                .investor_count
                .checked_add(1)
                .ok_or(Error::InvalidAmount)?;
        }
        aggregate.total_investment = new_total;

        position.amount = new_amount;
        position.ownership_bps = new_ownership;
        position.recorded_at = env.ledger().sequence();

        set_project_investment(&env, project_id, &aggregate);
        set_investment(&env, project_id, &investor, &position);

        env.events().publish(
            (INVESTMENT_RECORDED, project_id),
            (investor, amount, new_ownership),
        );

        Ok(new_ownership)
    }

    /// Get an investor's position, as stored at their last contribution
    pub fn get_investment(env: Env, project_id: u64, investor: Address) -> Option<Investment> {
        get_investment(&env, project_id, &investor)
    }

    /// Get the project's total investment and investor count
    pub fn get_project_investment(env: Env, project_id: u64) -> Option<ProjectInvestment> {
        get_project_investment(&env, project_id)
    }
}
