#![no_std]

use shared::{
    config::bump_instance,
    errors::Error,
    events::{PROJECT_REGISTERED, PROJECT_VERIFIED},
    registry::ProjectRegistry,
    types::FilmProject,
};
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, String};

mod storage;


use storage::*;

contractmeta!(
    key = "name",
    val = "Film Project Verification Contract"
);

/// Registers film projects and records their verification. The ledger
/// contracts only see this contract through the `ProjectRegistry` interface.
#[contract]
pub struct ProjectVerificationContract;

#[contractimpl]
impl ProjectVerificationContract {
    /// Initialize the registry with an admin address
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        set_admin(&env, &admin);
        bump_instance(&env);
        Ok(())
    }

    /// Register a new film project
    ///
    /// # Arguments
    /// * `owner` - Address registering the project
    /// * `title` - Film title
    /// * `director` - Director name
    /// * `budget` - Planned production budget
    /// * `start_date` - Production start (opaque date value)
    /// * `end_date` - Production end, not before `start_date`
    ///
    /// # Returns
    /// The new project id, starting at 1
    pub fn register_project(
        env: Env,
        owner: Address,
        title: String,
        director: String,
        budget: i128,
        start_date: u64,
        end_date: u64,
    ) -> Result<u64, Error> {
        get_admin(&env)?;
        owner.require_auth();

        if budget < 0 {
            return Err(Error::InvalidAmount);
        }
        if end_date < start_date {
            return Err(Error::InvalidInput);
        }

        let project_id = get_project_counter(&env)
            .checked_add(1)
            .ok_or(Error::InvalidInput)?;

        let project = FilmProject {
            owner: owner.clone(),
            title,
            director,
            budget,
            start_date,
            end_date,
            verified: false,
            active: true,
            registered_at: env.ledger().sequence(),
        };

        set_project(&env, project_id, &project);
        set_project_counter(&env, project_id);
        bump_instance(&env);

        env.events()
            .publish((PROJECT_REGISTERED, project_id), (owner, budget));

        Ok(project_id)
    }

    /// Mark a project as verified. Admin only.
    pub fn verify_project(env: Env, project_id: u64) -> Result<bool, Error> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        let mut project = get_project(&env, project_id).ok_or(Error::ProjectNotFound)?;
        if project.verified {
            return Err(Error::AlreadyVerified);
        }

        project.verified = true;
        set_project(&env, project_id, &project);
        bump_instance(&env);

        env.events().publish((PROJECT_VERIFIED, project_id), admin);

        Ok(true)
    }

    pub fn get_project(env: Env, project_id: u64) -> Option<FilmProject> {
        get_project(&env, project_id)
    }

    /// Number of projects registered so far
    pub fn get_project_count(env: Env) -> u64 {
        get_project_counter(&env)
    }
}

#[contractimpl]
impl ProjectRegistry for ProjectVerificationContract {
    fn project_exists(env: Env, project_id: u64) -> bool {
        project_exists(&env, project_id)
    }

    fn is_project_verified(env: Env, project_id: u64) -> bool {
        get_project(&env, project_id)
            .map(|project| project.verified)
            .unwrap_or(false)
    }
}
