use soroban_sdk::{contractclient, Env};

/// Queries the ledger contracts make against the project-registration
/// collaborator. Any contract exposing these entry points can be configured
/// as the registry.
#[contractclient(name = "ProjectRegistryClient")]
pub trait ProjectRegistry {
    /// Whether `project_id` was ever registered
    fn project_exists(env: Env, project_id: u64) -> bool;

    /// Whether `project_id` is registered and verified
    fn is_project_verified(env: Env, project_id: u64) -> bool;
}
