use soroban_sdk::{contracttype, Address, String};

pub type Amount = i128;

/// Basis points, 10000 = 100%
pub type Bps = u32;

// Heights below are ledger sequence numbers.

/// Operator settings every ledger contract stores once at initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    /// Authorizes operator-only calls (milestones, revenue)
    pub admin: Address,
    /// Contract answering `ProjectRegistry` queries
    pub registry: Address,
}

// ==================== Project registry ====================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilmProject {
    pub owner: Address,
    pub title: String,
    pub director: String,
    pub budget: i128,
    pub start_date: u64,
    pub end_date: u64,
    pub verified: bool,
    pub active: bool,
    pub registered_at: u32,
}

// ==================== Investment accounting ====================

/// Per-project investment rollup
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProjectInvestment {
    pub total_investment: i128,
    pub investor_count: u32,
}

/// A single investor's position in a project.
///
/// `ownership_bps` is computed against the project total at the time of this
/// investor's last contribution and is not refreshed when others invest.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Investment {
    pub amount: i128,
    pub ownership_bps: u32,
    pub recorded_at: u32,
}

// ==================== Milestone escrow ====================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Milestone {
    pub description: String,
    pub funds_allocated: i128,
    pub completed: bool,
    pub funds_released: bool,
    /// Zero until the milestone is completed
    pub completion_height: u32,
}

/// Per-project milestone rollup; `milestone_count` doubles as the id counter
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProjectMilestones {
    pub milestone_count: u64,
    pub total_allocated: i128,
    pub total_released: i128,
}

// ==================== Revenue distribution ====================

/// Per-project revenue rollup; `distribution_count` doubles as the id counter
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProjectRevenue {
    pub total_revenue: i128,
    pub distributed_revenue: i128,
    pub last_distribution_height: u32,
    pub distribution_count: u64,
}

impl ProjectRevenue {
    /// Revenue not yet earmarked by a distribution
    pub fn available(&self) -> i128 {
        self.total_revenue - self.distributed_revenue
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Distribution {
    pub amount: i128,
    pub created_at: u32,
    pub completed: bool,
}
