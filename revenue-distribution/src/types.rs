use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    ProjectRevenue(u64),      // project_id -> ProjectRevenue
    Distribution(u64, u64),   // project_id, distribution_id -> Distribution
}
