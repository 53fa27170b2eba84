use soroban_sdk::{symbol_short, Symbol};

// Configuration
pub const LEDGER_INITIALIZED: Symbol = symbol_short!("init");

// Project registry
pub const PROJECT_REGISTERED: Symbol = symbol_short!("proj_reg");
pub const PROJECT_VERIFIED: Symbol = symbol_short!("proj_ver");

// Investment accounting
pub const INVESTMENT_RECORDED: Symbol = symbol_short!("invest");

// Milestone escrow
pub const MILESTONE_ADDED: Symbol = symbol_short!("m_add");
pub const MILESTONE_COMPLETED: Symbol = symbol_short!("m_done");
pub const FUNDS_RELEASED: Symbol = symbol_short!("m_release");

// Revenue distribution
pub const REVENUE_RECORDED: Symbol = symbol_short!("rev_rec");
pub const DISTRIBUTION_CREATED: Symbol = symbol_short!("dist_new");
pub const DISTRIBUTION_COMPLETED: Symbol = symbol_short!("dist_done");
